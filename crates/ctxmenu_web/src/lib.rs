//! Browser adapter for ctxmenu.
//!
//! Binds a [`ctxmenu_core::ContextMenu`] to a page element: the popup is a
//! `<ul>` in its own shadow root, dismissal listeners hang off the document
//! and window, and all of them share one `AbortController`.

pub mod console;
pub mod host;
pub mod surface;
pub mod widget;

pub use console::{init_console_logging, ConsoleWriter};
pub use host::{WebHost, WebListenerGroup};
pub use surface::{DomSurface, ITEM_CLASS, MENU_TEST_ID, SHADOW_HOST_TEST_ID};
pub use widget::ContextMenuWidget;

/// Menu configuration for the browser, gated on the triggering `MouseEvent`.
pub type WebMenuConfig = ctxmenu_core::MenuConfig<web_sys::MouseEvent>;
