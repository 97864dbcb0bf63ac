//! The context menu state machine.
//!
//! A menu is either Closed or Open. Opening measures the popup, clamps it into
//! the viewport, reveals it and installs a fresh [`DismissalScope`]; closing
//! runs the caller's close callback, hides the popup and disposes the scope.
//! Every transition is synchronous, so callers never observe a half-open menu.

use crate::config::MenuConfig;
use crate::dismissal::{DismissEvent, DismissalScope, Signal};
use crate::error::MenuError;
use crate::geometry::Point;
use crate::positioner::Positioner;
use crate::surface::{Host, Surface};

/// What happened in response to a secondary-action gesture on the target.
///
/// The platform's native menu is suppressed in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The popup is now shown.
    Opened,
    /// The open gate rejected the gesture; the menu stays closed.
    Vetoed,
}

impl GestureOutcome {
    /// Whether the gesture must stop propagating.
    ///
    /// An opening gesture would otherwise reach the document-level
    /// secondary-action listener that was just installed and close the menu.
    pub fn stop_propagation(self) -> bool {
        matches!(self, Self::Opened)
    }
}

/// Why a menu closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// A dismissal signal fired.
    Dismissed(Signal),
    /// A new gesture on the target replaced the open menu.
    Reopened,
    /// An item was activated.
    ItemActivated,
}

impl CloseReason {
    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dismissed(signal) => signal.as_str(),
            Self::Reopened => "reopened",
            Self::ItemActivated => "item-activated",
        }
    }
}

/// Current state. The scope lives inside `Open`, so an open menu always has
/// exactly one scope and a closed menu has none.
enum MenuState<G> {
    Closed,
    Open { scope: DismissalScope<G>, at: Point },
}

/// An attachable context menu.
///
/// Owns its configuration, its popup surface and its host bindings. Apart from
/// the input entry points below it exposes no mutators.
pub struct ContextMenu<S: Surface, H: Host> {
    config: MenuConfig<H::Event>,
    positioner: Positioner,
    surface: S,
    host: H,
    state: MenuState<H::Group>,
}

impl<S: Surface, H: Host> ContextMenu<S, H> {
    /// Build a menu, creating its popup surface through `S`.
    pub fn new(config: MenuConfig<H::Event>, host: H) -> Result<Self, MenuError> {
        let surface = S::create(&config.labels(), &config.settings().styles())?;
        Ok(Self::with_surface(config, surface, host))
    }

    /// Build a menu around an already created, hidden surface.
    pub fn with_surface(config: MenuConfig<H::Event>, surface: S, host: H) -> Self {
        let positioner = config.settings().positioner();
        tracing::debug!(
            items = config.items().len(),
            edge = ?positioner.edge(),
            margin = positioner.margin(),
            "Context menu created"
        );
        Self { config, positioner, surface, host, state: MenuState::Closed }
    }

    /// Handle a secondary-action gesture on the bound target.
    ///
    /// An open menu is closed first, even if the new gesture is then vetoed.
    pub fn on_secondary_action(&mut self, event: &H::Event) -> GestureOutcome {
        self.close(CloseReason::Reopened);

        if !self.config.allows_open(event) {
            tracing::trace!("Open vetoed by gate");
            return GestureOutcome::Vetoed;
        }

        let requested = H::page_position(event);
        let size = self.surface.measure();
        let viewport = self.host.viewport();
        let at = self.positioner.place(requested, size, &viewport);
        tracing::trace!(
            width = size.width,
            height = size.height,
            requested_x = requested.x,
            requested_y = requested.y,
            "Popup measured"
        );

        self.surface.set_position(at);
        self.surface.set_visible(true);

        let scope = DismissalScope::install(&mut self.host);
        self.state = MenuState::Open { scope, at };

        tracing::debug!(x = at.x, y = at.y, "Context menu opened");
        GestureOutcome::Opened
    }

    /// Handle input from one of the dismissal listeners.
    ///
    /// Returns `true` if this input closed the menu. Non-qualifying input,
    /// input while closed, and every signal after the first in a burst are
    /// no-ops.
    pub fn dismiss(&mut self, event: DismissEvent<'_>) -> bool {
        let Some(signal) = event.signal() else {
            return false;
        };
        let MenuState::Open { scope, .. } = &self.state else {
            return false;
        };
        if !scope.fire(signal) {
            return false;
        }
        self.close(CloseReason::Dismissed(signal))
    }

    /// Run the action of the item at `index`, then close the menu.
    ///
    /// The action runs even if an outside-click dismissal already closed the
    /// menu for the same click; the close is then a no-op.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(item) = self.config.items().get(index) else {
            tracing::warn!(index, "Activated item does not exist");
            return false;
        };
        tracing::debug!(label = item.label(), "Menu item activated");
        item.invoke();
        self.close(CloseReason::ItemActivated);
        true
    }

    /// Whether the popup is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    /// Open → Closed. Returns `false` if the menu was already closed.
    fn close(&mut self, reason: CloseReason) -> bool {
        let MenuState::Open { scope, at } = std::mem::replace(&mut self.state, MenuState::Closed)
        else {
            return false;
        };
        // Listeners still queued in this input burst see a cancelled token.
        scope.token().cancel();

        self.config.notify_close();
        self.surface.set_visible(false);
        scope.dispose(&mut self.host);

        tracing::debug!(reason = reason.as_str(), x = at.x, y = at.y, "Context menu closed");
        true
    }
}

impl<S: Surface, H: Host> Drop for ContextMenu<S, H> {
    fn drop(&mut self) {
        if let MenuState::Open { scope, .. } = std::mem::replace(&mut self.state, MenuState::Closed)
        {
            self.surface.set_visible(false);
            scope.dispose(&mut self.host);
        }
    }
}
