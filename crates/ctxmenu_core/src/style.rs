//! Built-in popup styling and caller overrides.

/// Default stylesheet applied to every popup.
///
/// Selectors target the popup's own `ul`/`li` elements; adapters are expected
/// to scope them so they neither leak into nor inherit from the host page.
pub const DEFAULT_CSS: &str = "\
ul {
    background: white;
    border: #ccc solid 1px;
    border-radius: .5em;
    box-shadow: .3em .3em .5em gray;
    position: absolute;
    user-select: none;
    list-style: none;
    padding: 0;
    margin: 0;
}

li {
    padding: .5em 1em;
}

li:hover {
    border-radius: .5em;
    background: #f1f1f1;
}
";

/// Ordered style layers for a popup: the default first, then any override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleLayers {
    custom: Option<String>,
}

impl StyleLayers {
    /// Layers with only the built-in default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers with `css` applied over the default.
    pub fn with_override(css: impl Into<String>) -> Self {
        let css = css.into();
        if css.trim().is_empty() {
            return Self::default();
        }
        Self { custom: Some(css) }
    }

    /// The caller's override, if any.
    pub fn custom(&self) -> Option<&str> {
        self.custom.as_deref()
    }

    /// Stylesheets in application order. Later layers win.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(DEFAULT_CSS).chain(self.custom.as_deref())
    }
}
