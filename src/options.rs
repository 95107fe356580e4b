//! Configuration options for element behavior.
//!
//! The `Options` struct is attached to a [`Document`](crate::Document) and
//! inherited by every [`Element`](crate::Element) reached from it.

use serde::{Deserialize, Serialize};

/// Configuration options for element behavior.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the legacy-compatible settings.
///
/// # Example
///
/// ```rust
/// use dom_facade::Options;
///
/// // Legacy behavior
/// let options = Options::default();
/// assert!(options.swap_text_properties);
///
/// // Straightened text properties
/// let options = Options {
///     swap_text_properties: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Keep the historical cross-wiring of the `outertext` / `innertext`
    /// read properties.
    ///
    /// When `true`, reading `outertext` yields the inner markup and reading
    /// `innertext` yields the outer markup. When `false`, each name reads what
    /// it says. Writes are never affected: `outertext` always replaces the
    /// node, `innertext` always replaces its children.
    ///
    /// Default: `true`
    pub swap_text_properties: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            swap_text_properties: true,
        }
    }
}
