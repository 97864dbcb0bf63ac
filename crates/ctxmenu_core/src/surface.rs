//! Seams between the state machine and its environment.
//!
//! - [`Surface`]: the render adapter that owns the popup's visual elements
//! - [`Host`]: input subscriptions, pointer coordinates and viewport geometry

use crate::dismissal::{CancelToken, Signal};
use crate::error::MenuError;
use crate::geometry::{Point, Size, Viewport};
use crate::style::StyleLayers;

/// Render adapter for the popup.
///
/// A surface is created hidden and is only ever shown, moved or hidden by the
/// [`ContextMenu`](crate::ContextMenu) that owns it.
pub trait Surface: Sized {
    /// Build the popup container with one element per label, in order.
    fn create(labels: &[&str], styles: &StyleLayers) -> Result<Self, MenuError>;

    /// Report the popup's natural size.
    ///
    /// The popup must be laid out for this (present but fully transparent) so
    /// that no frame is drawn at a stale position before it is revealed.
    fn measure(&mut self) -> Size;

    /// Anchor the popup's top-left corner at `at`, in page coordinates.
    fn set_position(&mut self, at: Point);

    /// Show or hide the popup.
    fn set_visible(&mut self, visible: bool);

    /// Whether the popup is currently shown.
    fn is_visible(&self) -> bool;
}

/// Host environment the menu is attached to.
pub trait Host {
    /// The native secondary-action event handed to the open gate.
    type Event;

    /// One revocable group of dismissal subscriptions.
    type Group;

    /// Page coordinates of a secondary-action event.
    fn page_position(event: &Self::Event) -> Point;

    /// Current viewport geometry. Never cached by callers.
    fn viewport(&self) -> Viewport;

    /// Subscribe all `signals` as one group tied to `token`.
    ///
    /// Listeners must stay silent once `token` is cancelled.
    fn subscribe(&mut self, signals: &[Signal], token: &CancelToken) -> Self::Group;

    /// Drop every subscription in `group`.
    fn revoke(&mut self, group: Self::Group);
}
