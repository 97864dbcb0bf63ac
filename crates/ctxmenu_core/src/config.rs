//! Construction-time menu configuration.
//!
//! Everything here is fixed once the menu is built: the items, the open gate,
//! the close callback and the placement/style settings.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::geometry::EdgePolicy;
use crate::positioner::{Positioner, EDGE_MARGIN};
use crate::style::StyleLayers;

/// Handler run when an item is activated.
pub type ItemAction = Rc<dyn Fn() + 'static>;

/// Predicate that can veto opening for a given secondary-action event.
pub type OpenGate<E> = Box<dyn Fn(&E) -> bool + 'static>;

/// Callback invoked once per close transition.
pub type CloseHandler = Box<dyn Fn() + 'static>;

// ============================================================================
// MenuItem
// ============================================================================

/// A labelled action in the popup.
#[derive(Clone)]
pub struct MenuItem {
    label: String,
    action: ItemAction,
}

impl MenuItem {
    /// Create an item with a label and the action it runs.
    pub fn new(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self { label: label.into(), action: Rc::new(action) }
    }

    /// The item's display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the item's action.
    pub fn invoke(&self) {
        (self.action)();
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem").field("label", &self.label).finish_non_exhaustive()
    }
}

// ============================================================================
// MenuSettings
// ============================================================================

/// Serializable placement and style settings.
///
/// ```json
/// { "edge": "document", "edge_margin": 8, "css": "li { color: red }" }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Which far edge the popup is kept inside of.
    pub edge: EdgePolicy,
    /// Gap kept from an overflowed edge, in pixels.
    pub edge_margin: f64,
    /// Stylesheet layered over the built-in default.
    pub css: Option<String>,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self { edge: EdgePolicy::default(), edge_margin: EDGE_MARGIN, css: None }
    }
}

impl MenuSettings {
    /// Parse settings from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<(), MenuError> {
        if !self.edge_margin.is_finite() || self.edge_margin < 0.0 {
            return Err(MenuError::config(format!(
                "Edge margin must be a non-negative number, got {}",
                self.edge_margin
            )));
        }
        Ok(())
    }

    /// Positioner for these settings.
    pub fn positioner(&self) -> Positioner {
        Positioner::new(self.edge, self.edge_margin)
    }

    /// Style layers for these settings.
    pub fn styles(&self) -> StyleLayers {
        match &self.css {
            Some(css) => StyleLayers::with_override(css.as_str()),
            None => StyleLayers::new(),
        }
    }
}

// ============================================================================
// MenuConfig
// ============================================================================

/// Immutable configuration of one menu.
///
/// `E` is the host's secondary-action event type, seen by the open gate.
pub struct MenuConfig<E> {
    items: Vec<MenuItem>,
    open_gate: Option<OpenGate<E>>,
    on_close: Option<CloseHandler>,
    settings: MenuSettings,
}

impl<E> MenuConfig<E> {
    /// Create a configuration with the given items and default settings.
    ///
    /// Fails with [`MenuError::NoItems`] if `items` is empty.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        Self::builder().items(items).build()
    }

    /// Create a builder for complex configurations.
    pub fn builder() -> MenuConfigBuilder<E> {
        MenuConfigBuilder::default()
    }

    /// The items, in display order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Item labels, in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(MenuItem::label).collect()
    }

    /// Placement and style settings.
    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    /// Evaluate the open gate. A missing gate always allows.
    pub(crate) fn allows_open(&self, event: &E) -> bool {
        self.open_gate.as_ref().is_none_or(|gate| gate(event))
    }

    /// Invoke the close callback, if any.
    pub(crate) fn notify_close(&self) {
        if let Some(on_close) = &self.on_close {
            on_close();
        }
    }
}

impl<E> fmt::Debug for MenuConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuConfig")
            .field("items", &self.items)
            .field("open_gate", &self.open_gate.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for [`MenuConfig`].
pub struct MenuConfigBuilder<E> {
    items: Vec<MenuItem>,
    open_gate: Option<OpenGate<E>>,
    on_close: Option<CloseHandler>,
    settings: MenuSettings,
}

impl<E> Default for MenuConfigBuilder<E> {
    fn default() -> Self {
        Self { items: Vec::new(), open_gate: None, on_close: None, settings: MenuSettings::default() }
    }
}

impl<E> MenuConfigBuilder<E> {
    /// Append an item.
    pub fn item(mut self, label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        self.items.push(MenuItem::new(label, action));
        self
    }

    /// Append several items.
    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Set the open gate.
    pub fn open_gate(mut self, gate: impl Fn(&E) -> bool + 'static) -> Self {
        self.open_gate = Some(Box::new(gate));
        self
    }

    /// Set the close callback.
    pub fn on_close(mut self, on_close: impl Fn() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    /// Set the stylesheet layered over the default.
    pub fn css(mut self, css: impl Into<String>) -> Self {
        self.settings.css = Some(css.into());
        self
    }

    /// Replace the placement and style settings.
    pub fn settings(mut self, settings: MenuSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<MenuConfig<E>, MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::NoItems);
        }
        self.settings.validate()?;

        Ok(MenuConfig {
            items: self.items,
            open_gate: self.open_gate,
            on_close: self.on_close,
            settings: self.settings,
        })
    }
}
