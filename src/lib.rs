//! # dom-facade
//!
//! An object-oriented element facade over parsed HTML trees.
//!
//! Parsing, selector matching and serialization come from `dom_query`. This
//! crate wraps its nodes in [`Element`] handles with parent/child/sibling
//! navigation, CSS lookup, attribute access, virtual properties and
//! replace-by-reparsing.
//!
//! ## Quick Start
//!
//! ```rust
//! use dom_facade::Document;
//!
//! let doc = Document::new(r#"<div id="x">old</div>"#);
//! let div = doc.get_element_by_id("x").expect("div exists");
//!
//! div.replace_children("<span>new</span>")?;
//! assert_eq!(div.html(), r#"<div id="x"><span>new</span></div>"#);
//!
//! // Virtual properties: `innertext` reads the *outer* markup by default.
//! assert_eq!(
//!     div.get("innertext").as_str(),
//!     Some(r#"<div id="x"><span>new</span></div>"#)
//! );
//! # Ok::<(), dom_facade::Error>(())
//! ```
//!
//! ## Threading
//!
//! A [`Document`] and every [`Element`] borrowed from it belong to one thread.
//! Mutations through any element are visible to all others immediately.

mod attributes;
mod document;
mod element;
mod error;
mod node_list;
mod options;
mod property;

/// DOM operations adapter over `dom_query` node primitives.
pub mod dom;

// Public API - re-exports
pub use attributes::{AttributeValue, Attributes};
pub use document::{Document, Scope};
pub use element::Element;
pub use error::{Error, Result};
pub use node_list::NodeList;
pub use options::Options;
pub use property::{PropertyValue, ReadProperty, WriteProperty};

/// Parse markup into a [`Document`] with default options.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::new(html)
}

/// Parse markup into a [`Document`] with custom options.
#[inline]
#[must_use]
pub fn parse_with_options(html: &str, options: Options) -> Document {
    Document::with_options(html, options)
}
