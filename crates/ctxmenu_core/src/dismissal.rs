//! Dismissal triggers for an open menu.
//!
//! Every open installs one [`DismissalScope`]: a single group of host
//! subscriptions sharing one [`CancelToken`]. The first qualifying signal
//! cancels the token, which makes every other subscription in the group inert
//! at once, and the scope is then disposed as a whole. Nothing in a scope is
//! ever reused by a later open.

use std::cell::Cell;
use std::rc::Rc;

use crate::surface::Host;

/// Key names that count as the cancel key.
const CANCEL_KEYS: [&str; 2] = ["Escape", "Esc"];

/// Kinds of input that close an open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Any scroll of the document.
    Scroll,
    /// Any click anywhere in the document.
    Click,
    /// A repeat secondary-action gesture anywhere in the document.
    SecondaryAction,
    /// The cancel key pressed with focus anywhere in the document.
    CancelKey,
    /// A resize of the viewport.
    Resize,
}

impl Signal {
    /// Every signal, in registration order.
    pub const ALL: [Signal; 5] =
        [Signal::Scroll, Signal::Click, Signal::SecondaryAction, Signal::CancelKey, Signal::Resize];

    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Click => "click",
            Self::SecondaryAction => "secondary-action",
            Self::CancelKey => "cancel-key",
            Self::Resize => "resize",
        }
    }
}

/// Raw input delivered by a host listener, before qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissEvent<'a> {
    Scroll,
    Click,
    SecondaryAction,
    /// A key press; only the cancel key qualifies.
    KeyDown { key: &'a str },
    Resize,
}

impl DismissEvent<'_> {
    /// The signal this input represents, or `None` if it should not dismiss.
    pub fn signal(&self) -> Option<Signal> {
        match self {
            Self::Scroll => Some(Signal::Scroll),
            Self::Click => Some(Signal::Click),
            Self::SecondaryAction => Some(Signal::SecondaryAction),
            Self::KeyDown { key } if CANCEL_KEYS.iter().any(|k| k == key) => {
                Some(Signal::CancelKey)
            }
            Self::KeyDown { .. } => None,
            Self::Resize => Some(Signal::Resize),
        }
    }
}

/// Single-threaded cancellation flag shared by all listeners of one scope.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Request cancellation. Returns `true` only for the call that flipped it.
    #[inline]
    pub fn cancel(&self) -> bool {
        !self.cancelled.replace(true)
    }
}

/// One open's worth of dismissal subscriptions.
///
/// `G` is the host's group handle. Disposal consumes the scope, so a scope
/// cannot be revoked twice.
#[derive(Debug)]
pub struct DismissalScope<G> {
    token: CancelToken,
    group: G,
}

impl<G> DismissalScope<G> {
    /// Subscribe every [`Signal`] on `host` under one fresh token.
    pub fn install<H>(host: &mut H) -> Self
    where
        H: Host<Group = G>,
    {
        let token = CancelToken::new();
        let group = host.subscribe(&Signal::ALL, &token);
        tracing::trace!(signals = Signal::ALL.len(), "Dismissal scope installed");
        Self { token, group }
    }

    /// The token shared by this scope's listeners.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Whether any signal has already fired (or the scope was revoked).
    pub fn is_revoked(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Record that `signal` fired.
    ///
    /// Returns `true` for the first signal only; every later signal in the same
    /// scope, of any kind, is ignored.
    pub fn fire(&self, signal: Signal) -> bool {
        let first = self.token.cancel();
        if !first {
            tracing::trace!(signal = signal.as_str(), "Dismissal ignored, scope already revoked");
        }
        first
    }

    /// Revoke every subscription of this scope with one host call.
    pub fn dispose<H>(self, host: &mut H)
    where
        H: Host<Group = G>,
    {
        self.token.cancel();
        host.revoke(self.group);
        tracing::trace!("Dismissal scope disposed");
    }
}
