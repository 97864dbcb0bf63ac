//! Demo page: a two-item menu on the page's `.js-items-with-context-menu` element.

use ctxmenu_core::{MenuConfig, MenuError};
use ctxmenu_web::{init_console_logging, ContextMenuWidget};
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

/// Selector of the demo's target element.
pub const TARGET_SELECTOR: &str = ".js-items-with-context-menu";

/// The demo menu: `Edit` and `Delete`, each logging its activation.
pub fn demo_config() -> Result<MenuConfig<MouseEvent>, MenuError> {
    MenuConfig::builder()
        .item("Edit", || tracing::info!("Editing..."))
        .item("Delete", || tracing::info!("Deleting..."))
        .open_gate(|_: &MouseEvent| {
            tracing::info!("beforeOpen callback");
            true
        })
        .on_close(|| tracing::info!("onClose callback"))
        .build()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    if let Err(e) = init_console_logging() {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;
    let Some(target) = document.query_selector(TARGET_SELECTOR)? else {
        tracing::warn!(selector = TARGET_SELECTOR, "Demo target not found");
        return Ok(());
    };

    let widget = demo_config()
        .and_then(|config| ContextMenuWidget::attach(&target, config))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Bound for the lifetime of the page.
    std::mem::forget(widget);
    tracing::info!("Demo menu attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_items() {
        let config = demo_config().unwrap();
        assert_eq!(config.labels(), vec!["Edit", "Delete"]);
    }
}
