//! Documents and subtree scopes.
//!
//! A [`Document`] owns one parsed tree. A [`Scope`] is a read-only view rooted at
//! any element of such a tree; element queries and serialization go through it so
//! they behave the same whether they start at the document or deep inside it.

use std::fmt;

use crate::dom;
use crate::element::Element;
use crate::node_list::NodeList;
use crate::options::Options;

/// An owned, parsed HTML tree.
///
/// # Example
///
/// ```rust
/// use dom_facade::Document;
///
/// let doc = Document::new(r#"<p class="item">a</p><p class="item">b</p>"#);
/// assert_eq!(doc.find(".item").len(), 2);
/// assert_eq!(doc.find_at(".item", 1).map(|e| e.text()).as_deref(), Some("b"));
/// ```
pub struct Document {
    tree: dom::Tree,
    options: Options,
}

impl Document {
    /// Parse markup with default options.
    #[must_use]
    pub fn new(html: &str) -> Self {
        Self::with_options(html, Options::default())
    }

    #[must_use]
    pub fn with_options(html: &str, options: Options) -> Self {
        Self {
            tree: dom::parse(html),
            options,
        }
    }

    /// Re-parse the document from new markup, keeping its options.
    ///
    /// Elements borrowed from the previous tree cannot outlive this call.
    pub fn load_html(&mut self, html: &str) {
        self.tree = dom::parse(html);
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// The underlying `dom_query` document.
    #[must_use]
    pub fn tree(&self) -> &dom::Tree {
        &self.tree
    }

    /// The document node itself.
    #[must_use]
    pub fn root(&self) -> Element<'_> {
        Element::with_options(self.tree.root(), self.options)
    }

    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(self.root())
    }

    #[must_use]
    pub fn find(&self, selector: &str) -> NodeList<'_> {
        self.scope().find(selector)
    }

    #[must_use]
    pub fn find_at(&self, selector: &str, index: usize) -> Option<Element<'_>> {
        self.scope().find_at(selector, index)
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<Element<'_>> {
        self.root().get_element_by_id(id)
    }

    #[must_use]
    pub fn get_elements_by_tag_name(&self, name: &str) -> NodeList<'_> {
        self.root().get_elements_by_tag_name(name)
    }

    #[must_use]
    pub fn get_elements_by_tag_name_at(&self, name: &str, index: usize) -> Option<Element<'_>> {
        self.root().get_elements_by_tag_name_at(name, index)
    }

    /// Markup of the whole document.
    #[must_use]
    pub fn html(&self) -> String {
        self.tree.html().to_string()
    }

    /// Markup of the document node's children.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.scope().inner_html()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.scope().text()
    }
}

impl From<&str> for Document {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

impl From<String> for Document {
    fn from(html: String) -> Self {
        Self::new(&html)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

/// A view of a tree rooted at one element.
///
/// Queries only see the root's descendants; serialization covers the root's
/// subtree. A scope over a null element is empty.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    root: Element<'a>,
}

impl<'a> Scope<'a> {
    #[must_use]
    pub fn new(root: Element<'a>) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Element<'a> {
        &self.root
    }

    /// Descendants matching `selector`, in document order.
    #[must_use]
    pub fn find(&self, selector: &str) -> NodeList<'a> {
        let Some(node) = self.root.node() else {
            return NodeList::new();
        };
        let options = self.root.options();
        dom::select_all(&node, selector)
            .into_iter()
            .map(|n| Element::with_options(n, options))
            .collect()
    }

    #[must_use]
    pub fn find_at(&self, selector: &str, index: usize) -> Option<Element<'a>> {
        self.find(selector).into_iter().nth(index)
    }

    #[must_use]
    pub fn html(&self) -> String {
        self.root
            .node()
            .map(|n| dom::outer_html(&n).to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn inner_html(&self) -> String {
        self.root
            .node()
            .map(|n| dom::inner_html(&n).to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.root
            .node()
            .map(|n| dom::text_content(&n).to_string())
            .unwrap_or_default()
    }
}
