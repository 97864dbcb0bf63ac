//! Attaching a menu to a page element.

use std::cell::RefCell;
use std::rc::Rc;

use ctxmenu_core::{ContextMenu, GestureOutcome, MenuConfig, MenuError, Surface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent};

use crate::host::{with_menu, WebHost, WebMenu};
use crate::surface::{describe, DomSurface};

/// A context menu bound to one target element.
///
/// Dropping the widget unbinds the target, tears down any open dismissal
/// listeners and removes the popup from the page.
pub struct ContextMenuWidget {
    menu: Rc<RefCell<WebMenu>>,
    target: EventTarget,
    on_context_menu: Closure<dyn FnMut(MouseEvent)>,
    on_item_click: Vec<(HtmlElement, Closure<dyn FnMut(Event)>)>,
}

impl ContextMenuWidget {
    /// Create the popup and bind it to `target`'s secondary-action gesture.
    pub fn attach(target: &EventTarget, config: MenuConfig<MouseEvent>) -> Result<Self, MenuError> {
        let window = web_sys::window().ok_or_else(|| MenuError::host("No global window"))?;
        let document = window.document().ok_or_else(|| MenuError::host("Window has no document"))?;

        let surface = DomSurface::create(&config.labels(), &config.settings().styles())?;
        let items = surface.items().to_vec();

        let menu = Rc::new_cyclic(|weak| {
            let host = WebHost::new(window, document, weak.clone());
            RefCell::new(ContextMenu::with_surface(config, surface, host))
        });

        let on_item_click = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| -> Result<_, MenuError> {
                let weak = Rc::downgrade(&menu);
                let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                    with_menu(&weak, |menu| menu.activate(index));
                });
                item.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                    .map_err(|err| MenuError::host(describe(&err)))?;
                Ok((item, callback))
            })
            .collect::<Result<Vec<_>, MenuError>>()?;

        let weak = Rc::downgrade(&menu);
        let on_context_menu = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            event.prevent_default();
            let outcome = with_menu(&weak, |menu| menu.on_secondary_action(&event));
            // Keeps the fresh document listener from seeing this same gesture.
            if outcome.is_some_and(GestureOutcome::stop_propagation) {
                event.stop_propagation();
            }
        });
        target
            .add_event_listener_with_callback("contextmenu", on_context_menu.as_ref().unchecked_ref())
            .map_err(|err| MenuError::host(describe(&err)))?;

        tracing::debug!(items = on_item_click.len(), "Context menu attached");
        Ok(Self { menu, target: target.clone(), on_context_menu, on_item_click })
    }

    /// Whether the popup is currently shown.
    pub fn is_open(&self) -> bool {
        self.menu.try_borrow().is_ok_and(|menu| menu.is_open())
    }
}

impl Drop for ContextMenuWidget {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(
            "contextmenu",
            self.on_context_menu.as_ref().unchecked_ref(),
        ) {
            tracing::warn!(error = %describe(&err), "Failed to unbind context menu target");
        }
        for (item, callback) in &self.on_item_click {
            if let Err(err) =
                item.remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(error = %describe(&err), "Failed to unbind menu item");
            }
        }
        tracing::debug!("Context menu detached");
    }
}
