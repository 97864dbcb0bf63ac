//! Core of the ctxmenu attachable context menu.
//!
//! This crate is independent of any particular UI toolkit:
//!
//! - **menu**: the Closed/Open state machine
//! - **positioner**: far-edge overflow clamping
//! - **dismissal**: the revoke-all-on-first-fire trigger scope
//! - **surface**: traits for the render adapter and the host environment
//! - **config**: items, callbacks and serializable settings
//! - **error**: error handling
//! - **logging**: structured logging setup

pub mod config;
pub mod dismissal;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod menu;
pub mod positioner;
pub mod style;
pub mod surface;

#[cfg(test)]
mod testing;

pub use config::{MenuConfig, MenuConfigBuilder, MenuItem, MenuSettings};
pub use dismissal::{CancelToken, DismissEvent, DismissalScope, Signal};
pub use error::MenuError;
pub use geometry::{EdgePolicy, Point, Size, Viewport};
pub use menu::{CloseReason, ContextMenu, GestureOutcome};
pub use positioner::{clamp, Positioner, EDGE_MARGIN};
pub use style::{StyleLayers, DEFAULT_CSS};
pub use surface::{Host, Surface};
