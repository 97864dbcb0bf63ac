//! Document and window bindings for dismissal and geometry.

use std::cell::RefCell;
use std::rc::Weak;

use ctxmenu_core::{CancelToken, ContextMenu, DismissEvent, Host, Point, Signal, Viewport};
use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AbortController, AddEventListenerOptions, Document, Event, EventTarget, KeyboardEvent,
    MouseEvent, Window,
};

use crate::surface::{describe, DomSurface};

pub(crate) type WebMenu = ContextMenu<DomSurface, WebHost>;

/// Run `f` against the menu if it is still alive and not already borrowed.
///
/// Events dispatched synchronously from inside a menu call (a click fired by
/// an item action, say) find the menu borrowed and are dropped.
pub(crate) fn with_menu<R>(
    menu: &Weak<RefCell<WebMenu>>,
    f: impl FnOnce(&mut WebMenu) -> R,
) -> Option<R> {
    let rc = menu.upgrade()?;
    let Ok(mut guard) = rc.try_borrow_mut() else {
        tracing::trace!("Re-entrant menu event ignored");
        return None;
    };
    let result = f(&mut guard);
    Some(result)
}

/// The browser page a menu is attached to.
pub struct WebHost {
    window: Window,
    document: Document,
    menu: Weak<RefCell<WebMenu>>,
}

impl WebHost {
    pub(crate) fn new(window: Window, document: Document, menu: Weak<RefCell<WebMenu>>) -> Self {
        Self { window, document, menu }
    }

    /// Where a signal is listened for, and under which DOM event name.
    fn binding(&self, signal: Signal) -> (EventTarget, &'static str) {
        match signal {
            Signal::Scroll => (self.document.clone().into(), "scroll"),
            Signal::Click => (self.document.clone().into(), "click"),
            Signal::SecondaryAction => (self.document.clone().into(), "contextmenu"),
            Signal::CancelKey => (self.document.clone().into(), "keydown"),
            Signal::Resize => (self.window.clone().into(), "resize"),
        }
    }

    fn listener(&self, signal: Signal, token: &CancelToken) -> Closure<dyn FnMut(Event)> {
        let menu = self.menu.clone();
        let token = token.clone();
        Closure::new(move |event: Event| {
            if token.is_cancelled() {
                return;
            }
            let key = match signal {
                Signal::CancelKey => event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key),
                _ => None,
            };
            let input = match signal {
                Signal::Scroll => DismissEvent::Scroll,
                Signal::Click => DismissEvent::Click,
                Signal::SecondaryAction => DismissEvent::SecondaryAction,
                Signal::CancelKey => DismissEvent::KeyDown { key: key.as_deref().unwrap_or_default() },
                Signal::Resize => DismissEvent::Resize,
            };
            with_menu(&menu, |menu| menu.dismiss(input));
        })
    }
}

struct Registration {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// One open menu's dismissal listeners.
///
/// All listeners share an `AbortSignal`; revoking aborts it once and then
/// releases the closures.
pub struct WebListenerGroup {
    controller: Option<AbortController>,
    listeners: SmallVec<[Registration; 5]>,
}

impl WebListenerGroup {
    fn revoke(self) {
        match &self.controller {
            Some(controller) => controller.abort(),
            None => {
                for listener in &self.listeners {
                    let _ = listener.target.remove_event_listener_with_callback(
                        listener.event_type,
                        listener.callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }
        tracing::trace!(listeners = self.listeners.len(), "Dismissal listeners revoked");
    }
}

impl Host for WebHost {
    type Event = MouseEvent;
    type Group = WebListenerGroup;

    fn page_position(event: &MouseEvent) -> Point {
        Point::new(f64::from(event.page_x()), f64::from(event.page_y()))
    }

    fn viewport(&self) -> Viewport {
        let inner_width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or_default();
        let inner_height =
            self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();
        let scroll_x = self.window.scroll_x().unwrap_or_default();
        let scroll_y = self.window.scroll_y().unwrap_or_default();

        let Some(root) = self.document.document_element() else {
            return Viewport::new(inner_width, inner_height).with_scroll(scroll_x, scroll_y);
        };
        // clientWidth excludes the scrollbar; fall back when it reports zero.
        let width = match root.client_width() {
            0 => inner_width,
            w => f64::from(w),
        };
        let height = match root.client_height() {
            0 => inner_height,
            h => f64::from(h),
        };
        Viewport::new(width, height)
            .with_scroll(scroll_x, scroll_y)
            .with_document(f64::from(root.scroll_width()), f64::from(root.scroll_height()))
    }

    fn subscribe(&mut self, signals: &[Signal], token: &CancelToken) -> WebListenerGroup {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(err) => {
                tracing::warn!(error = %describe(&err), "AbortController unavailable");
                None
            }
        };
        let mut group = WebListenerGroup { controller, listeners: SmallVec::new() };

        for &signal in signals {
            let (target, event_type) = self.binding(signal);
            let callback = self.listener(signal, token);

            let options = AddEventListenerOptions::new();
            // Keys other than the cancel key must not consume the listener.
            options.set_once(signal != Signal::CancelKey);
            let attached = group.controller.as_ref().map(|controller| {
                js_sys::Reflect::set(&options, &JsValue::from_str("signal"), &controller.signal())
            });
            if let Some(Err(err)) = attached {
                // Revoke then removes each listener by hand.
                tracing::warn!(error = %describe(&err), "Failed to attach abort signal");
                group.controller = None;
            }

            if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                tracing::warn!(
                    signal = signal.as_str(),
                    error = %describe(&err),
                    "Failed to subscribe dismissal listener"
                );
                continue;
            }
            group.listeners.push(Registration { target, event_type, callback });
        }

        tracing::trace!(listeners = group.listeners.len(), "Dismissal listeners installed");
        group
    }

    fn revoke(&mut self, group: WebListenerGroup) {
        group.revoke();
    }
}
