//! Shadow-DOM popup surface.
//!
//! The popup lives in an open shadow root hung off a host `<div>` appended to
//! `<body>`, so page styles neither leak into it nor are affected by it.

use ctxmenu_core::{MenuError, Point, Size, StyleLayers, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ShadowRootInit, ShadowRootMode};

/// `data-testid` of the element carrying the shadow root.
pub const SHADOW_HOST_TEST_ID: &str = "context-menu-shadow-host";

/// `data-testid` of the popup list inside the shadow root.
pub const MENU_TEST_ID: &str = "menu";

/// Class of each item element.
pub const ITEM_CLASS: &str = "item";

/// A `<ul>` popup inside its own shadow root.
#[derive(Debug)]
pub struct DomSurface {
    shadow_host: HtmlElement,
    list: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DomSurface {
    /// The item elements, in configuration order.
    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.list.style().set_property(property, value) {
            tracing::warn!(property, error = %describe(&err), "Failed to set popup style");
        }
    }
}

impl Surface for DomSurface {
    fn create(labels: &[&str], styles: &StyleLayers) -> Result<Self, MenuError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| MenuError::surface("No document available"))?;
        let body = document.body().ok_or_else(|| MenuError::surface("Document has no <body>"))?;

        let shadow_host = create_html(&document, "div")?;
        shadow_host.set_attribute("data-testid", SHADOW_HOST_TEST_ID).map_err(surface_error)?;
        body.append_child(&shadow_host).map_err(surface_error)?;

        let root = shadow_host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(surface_error)?;

        for css in styles.iter() {
            let style = document.create_element("style").map_err(surface_error)?;
            style.set_text_content(Some(css));
            root.append_child(&style).map_err(surface_error)?;
        }

        let list = create_html(&document, "ul")?;
        list.set_attribute("data-testid", MENU_TEST_ID).map_err(surface_error)?;
        list.set_hidden(true);
        root.append_child(&list).map_err(surface_error)?;

        let items = labels
            .iter()
            .map(|&label| -> Result<_, MenuError> {
                let item = create_html(&document, "li")?;
                item.set_class_name(ITEM_CLASS);
                item.set_text_content(Some(label));
                list.append_child(&item).map_err(surface_error)?;
                Ok(item)
            })
            .collect::<Result<Vec<_>, MenuError>>()?;

        tracing::trace!(items = items.len(), "Popup surface created");
        Ok(Self { shadow_host, list, items })
    }

    fn measure(&mut self) -> Size {
        // Laid out but invisible, so the old position never paints.
        self.set_style("visibility", "hidden");
        self.list.set_hidden(false);
        self.set_style("left", "0px");
        self.set_style("top", "0px");
        Size::new(f64::from(self.list.offset_width()), f64::from(self.list.offset_height()))
    }

    fn set_position(&mut self, at: Point) {
        self.set_style("left", &format!("{}px", at.x));
        self.set_style("top", &format!("{}px", at.y));
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.set_style("visibility", "visible");
        }
        self.list.set_hidden(!visible);
    }

    fn is_visible(&self) -> bool {
        !self.list.hidden()
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        self.shadow_host.remove();
    }
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, MenuError> {
    document
        .create_element(tag)
        .map_err(surface_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MenuError::surface(format!("<{tag}> is not an HTML element")))
}

fn surface_error(err: JsValue) -> MenuError {
    MenuError::surface(describe(&err))
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
