//! Element facade over a single tree node.
//!
//! An [`Element`] is a view: it borrows the tree owned by a
//! [`Document`](crate::Document) and never owns nodes itself. Navigation and
//! queries hand out new views; structural replacement consumes the old view and
//! returns a view of the inserted node.

use std::fmt;

use crate::attributes::{AttributeValue, Attributes};
use crate::document::Scope;
use crate::dom::{self, NodeRef};
use crate::error::{Error, Result};
use crate::node_list::NodeList;
use crate::options::Options;

/// A handle to one node of a parsed HTML tree.
///
/// Equality is node identity: two elements are equal when they wrap the same
/// node of the same tree.
///
/// # Example
///
/// ```rust
/// use dom_facade::Document;
///
/// let doc = Document::new(r#"<ul id="menu"><li>One</li><li>Two</li></ul>"#);
/// let menu = doc.get_element_by_id("menu").expect("menu exists");
///
/// assert_eq!(menu.child_nodes().len(), 2);
/// assert_eq!(menu.last_child().map(|li| li.text()).as_deref(), Some("Two"));
/// ```
#[derive(Clone)]
pub struct Element<'a> {
    /// `None` only for the parent of a parentless node.
    node: Option<NodeRef<'a>>,
    options: Options,
}

impl<'a> Element<'a> {
    /// Wrap a node with default options.
    #[must_use]
    pub fn new(node: NodeRef<'a>) -> Self {
        Self::with_options(node, Options::default())
    }

    #[must_use]
    pub fn with_options(node: NodeRef<'a>, options: Options) -> Self {
        Self {
            node: Some(node),
            options,
        }
    }

    fn null(options: Options) -> Self {
        Self {
            node: None,
            options,
        }
    }

    /// Wrap a neighbour node, inheriting this element's options.
    fn wrap(&self, node: NodeRef<'a>) -> Self {
        Self::with_options(node, self.options)
    }

    /// The wrapped tree node, `None` for a null element.
    #[must_use]
    pub fn node(&self) -> Option<NodeRef<'a>> {
        self.node
    }

    /// Whether this element wraps no node at all.
    ///
    /// Only [`parent`](Self::parent) produces null elements.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.node.is_none()
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// A query and serialization scope rooted at this element.
    #[must_use]
    pub fn dom(&self) -> Scope<'a> {
        Scope::new(self.clone())
    }

    // === Querying ===

    /// All elements below this one matching a CSS selector, in document order.
    #[must_use]
    pub fn find(&self, selector: &str) -> NodeList<'a> {
        self.dom().find(selector)
    }

    /// The `index`-th match of a CSS selector below this element.
    #[must_use]
    pub fn find_at(&self, selector: &str, index: usize) -> Option<Element<'a>> {
        self.dom().find_at(selector, index)
    }

    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<Element<'a>> {
        self.find_at(&format!("#{id}"), 0)
    }

    #[must_use]
    pub fn get_elements_by_id(&self, id: &str) -> NodeList<'a> {
        self.find(&format!("#{id}"))
    }

    #[must_use]
    pub fn get_elements_by_id_at(&self, id: &str, index: usize) -> Option<Element<'a>> {
        self.find_at(&format!("#{id}"), index)
    }

    #[must_use]
    pub fn get_element_by_tag_name(&self, name: &str) -> Option<Element<'a>> {
        self.find_at(name, 0)
    }

    #[must_use]
    pub fn get_elements_by_tag_name(&self, name: &str) -> NodeList<'a> {
        self.find(name)
    }

    #[must_use]
    pub fn get_elements_by_tag_name_at(&self, name: &str, index: usize) -> Option<Element<'a>> {
        self.find_at(name, index)
    }

    // === Tree Navigation ===

    /// All direct children, text and comment nodes included.
    ///
    /// The list is rebuilt from the current tree on every call.
    #[must_use]
    pub fn child_nodes(&self) -> NodeList<'a> {
        self.node
            .map(|node| node.children().into_iter().map(|c| self.wrap(c)).collect())
            .unwrap_or_default()
    }

    /// Direct child at `index`, or `None` when out of range.
    #[must_use]
    pub fn child_node(&self, index: usize) -> Option<Element<'a>> {
        self.child_nodes().into_nth(index)
    }

    /// Alias of [`child_nodes`](Self::child_nodes).
    #[inline]
    #[must_use]
    pub fn children(&self) -> NodeList<'a> {
        self.child_nodes()
    }

    /// Alias of [`child_node`](Self::child_node).
    #[inline]
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Element<'a>> {
        self.child_node(index)
    }

    #[must_use]
    pub fn first_child(&self) -> Option<Element<'a>> {
        self.node?.first_child().map(|n| self.wrap(n))
    }

    #[must_use]
    pub fn last_child(&self) -> Option<Element<'a>> {
        self.node?.last_child().map(|n| self.wrap(n))
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<Element<'a>> {
        self.node?.next_sibling().map(|n| self.wrap(n))
    }

    #[must_use]
    pub fn previous_sibling(&self) -> Option<Element<'a>> {
        self.node?.prev_sibling().map(|n| self.wrap(n))
    }

    /// Alias of [`previous_sibling`](Self::previous_sibling).
    #[inline]
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Element<'a>> {
        self.previous_sibling()
    }

    /// The parent element.
    ///
    /// Unlike the other accessors this never reports absence: a node without a
    /// parent (the document node, a detached node) yields a null element. Use
    /// [`parent_node`](Self::parent_node) to get `None` instead.
    #[must_use]
    pub fn parent(&self) -> Element<'a> {
        self.parent_node()
            .unwrap_or_else(|| Self::null(self.options))
    }

    #[must_use]
    pub fn parent_node(&self) -> Option<Element<'a>> {
        self.node?.parent().map(|n| self.wrap(n))
    }

    /// A fresh snapshot of the direct children, for `for` loops.
    pub fn iter(&self) -> std::vec::IntoIter<Element<'a>> {
        self.child_nodes().into_iter()
    }

    // === Content ===

    /// Outer markup of this node.
    #[must_use]
    pub fn html(&self) -> String {
        self.dom().html()
    }

    /// Markup of this node's children.
    #[must_use]
    pub fn inner_html(&self) -> String {
        self.dom().inner_html()
    }

    /// Concatenated text of the subtree.
    #[must_use]
    pub fn text(&self) -> String {
        self.dom().text()
    }

    /// The `outertext` read property.
    ///
    /// With [`Options::swap_text_properties`] (the default) this is the
    /// *inner* markup, a long-standing quirk kept for compatibility.
    #[must_use]
    pub fn outertext(&self) -> String {
        if self.options.swap_text_properties {
            self.inner_html()
        } else {
            self.html()
        }
    }

    /// The `innertext` read property.
    ///
    /// With [`Options::swap_text_properties`] (the default) this is the
    /// *outer* markup.
    #[must_use]
    pub fn innertext(&self) -> String {
        if self.options.swap_text_properties {
            self.html()
        } else {
            self.inner_html()
        }
    }

    /// Tag name for elements, `#text` / `#comment` / `#document` / `#doctype`
    /// for other nodes, empty for a null element.
    #[must_use]
    pub fn tag(&self) -> String {
        self.node.map(|n| dom::node_name(&n)).unwrap_or_default()
    }

    // === Attributes ===

    /// All attributes in document order, or `None` when there are none.
    #[must_use]
    pub fn get_all_attributes(&self) -> Option<Attributes> {
        let attrs = dom::attributes(&self.node?);
        if attrs.is_empty() {
            None
        } else {
            Some(Attributes::from(attrs))
        }
    }

    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        dom::get_attribute(&self.node?, name)
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.node.is_some_and(|n| dom::has_attribute(&n, name))
    }

    /// Set an attribute, or remove it when `value` is empty.
    ///
    /// Empty values are `""`, `"0"`, `false`, numeric zero and `None`; see
    /// [`AttributeValue`].
    pub fn set_attribute<V: AttributeValue>(&self, name: &str, value: V) -> &Self {
        let Some(node) = self.node else {
            return self;
        };
        if value.is_empty_value() {
            log::trace!("empty value for attribute {name:?}; removing it");
            dom::remove_attribute(&node, name);
        } else {
            dom::set_attribute(&node, name, &value.to_value_string());
        }
        self
    }

    pub fn remove_attribute(&self, name: &str) -> &Self {
        if let Some(node) = self.node {
            dom::remove_attribute(&node, name);
        }
        self
    }

    // === Tree Manipulation ===

    /// Replace this whole node with the first node parsed from `markup`.
    ///
    /// The markup is parsed as content of this node's parent, so table rows,
    /// cells and options survive. Consumes the element: the old node is
    /// detached afterwards. The returned element wraps the inserted node.
    /// Nothing is mutated on error.
    pub fn replace_node(self, markup: &str) -> Result<Element<'a>> {
        let node = self.node.ok_or_else(|| {
            Error::DetachedNode("cannot replace a null element".to_string())
        })?;
        let parent = node.parent().ok_or_else(|| {
            Error::DetachedNode(format!(
                "cannot replace {} without a parent",
                dom::node_name(&node)
            ))
        })?;

        let context = dom::node_name(&parent);
        let scratch = dom::parse_in_context(markup, &context);
        let content = Self::parsed_content(&scratch, &context, markup)?;

        log::debug!(
            "replacing {} with {} bytes of markup",
            dom::node_name(&node),
            markup.len()
        );
        let inserted = dom::replace_with_copy(&node, &content).ok_or_else(|| {
            Error::Import(format!("cannot import {}", dom::node_name(&content)))
        })?;

        Ok(self.wrap(inserted))
    }

    /// Replace all children with the first node parsed from `markup`.
    ///
    /// The markup is parsed as content of this node. Nothing is mutated on
    /// error.
    pub fn replace_children(&self, markup: &str) -> Result<&Self> {
        let node = self.node.ok_or_else(|| {
            Error::DetachedNode("cannot fill a null element".to_string())
        })?;

        let context = dom::node_name(&node);
        let scratch = dom::parse_in_context(markup, &context);
        let content = Self::parsed_content(&scratch, &context, markup)?;

        log::debug!(
            "replacing children of {context} with {} bytes of markup",
            markup.len()
        );
        dom::replace_children_with_copy(&node, &content).ok_or_else(|| {
            Error::Import(format!("cannot import {}", dom::node_name(&content)))
        })?;

        Ok(self)
    }

    fn parsed_content<'s>(
        scratch: &'s dom::Tree,
        context: &str,
        markup: &str,
    ) -> Result<NodeRef<'s>> {
        dom::content_node_in(scratch, context).ok_or_else(|| {
            log::debug!("markup produced no content node inside {context}: {markup:?}");
            Error::MalformedInput(format!(
                "no content node for {context} in {} bytes of markup",
                markup.len()
            ))
        })
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => dom::same_node(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag())
            .field("null", &self.is_null())
            .finish()
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

impl<'a> IntoIterator for &Element<'a> {
    type Item = Element<'a>;
    type IntoIter = std::vec::IntoIter<Element<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Document, Error};

    #[test]
    fn test_navigation() {
        let doc = Document::new("<div><p>1</p><p>2</p><p>3</p></div>");
        let second = doc.find_at("p", 1).expect("second p");

        assert_eq!(second.previous_sibling().map(|e| e.text()).as_deref(), Some("1"));
        assert_eq!(second.next_sibling().map(|e| e.text()).as_deref(), Some("3"));
        assert_eq!(second.parent().tag(), "div");
    }

    #[test]
    fn test_siblings_absent_at_ends() {
        let doc = Document::new("<div><p>only</p></div>");
        let p = doc.find_at("p", 0).expect("p");

        assert!(p.previous_sibling().is_none());
        assert!(p.next_sibling().is_none());
    }

    #[test]
    fn test_text_nodes_are_children() {
        let doc = Document::new("<div>before <b>bold</b> after</div>");
        let div = doc.find_at("div", 0).expect("div");
        let children = div.child_nodes();

        assert_eq!(children.len(), 3);
        assert_eq!(children[0].tag(), "#text");
        assert_eq!(children[1].tag(), "b");
        assert_eq!(div.first_child().map(|e| e.text()).as_deref(), Some("before "));
    }

    #[test]
    fn test_parent_of_root_is_null() {
        let doc = Document::new("<p>x</p>");
        let parent = doc.root().parent();

        assert!(parent.is_null());
        assert!(doc.root().parent_node().is_none());
        assert_eq!(parent.tag(), "");
        assert_eq!(parent.html(), "");
        assert!(parent.first_child().is_none());
        assert!(parent.child_nodes().is_empty());
        assert!(parent.get_all_attributes().is_none());
    }

    #[test]
    fn test_identity() {
        let doc = Document::new(r#"<div id="a"><p>x</p></div>"#);
        let by_id = doc.get_element_by_id("a").expect("a");
        let by_tag = doc.find_at("div", 0).expect("div");
        let p = doc.find_at("p", 0).expect("p");

        assert_eq!(by_id, by_tag);
        assert_eq!(p.parent(), by_id);
        assert_ne!(p, by_id);
    }

    #[test]
    fn test_iteration_reflects_mutation() {
        let doc = Document::new(r#"<ul><li>a</li><li>b</li></ul>"#);
        let ul = doc.find_at("ul", 0).expect("ul");

        let before: Vec<String> = ul.iter().map(|li| li.text()).collect();
        assert_eq!(before, vec!["a", "b"]);

        ul.replace_children("<li>z</li>").expect("replace children");

        let after: Vec<String> = (&ul).into_iter().map(|li| li.text()).collect();
        assert_eq!(after, vec!["z"]);
    }

    #[test]
    fn test_replace_node_on_null_element() {
        let doc = Document::new("<p>x</p>");
        let null = doc.root().parent();

        let err = null.replace_node("<b>y</b>").expect_err("null element");
        assert!(matches!(err, Error::DetachedNode(_)));
    }

    #[test]
    fn test_malformed_input_leaves_tree_untouched() {
        let doc = Document::new(r#"<div id="x">old</div>"#);
        let div = doc.get_element_by_id("x").expect("x");

        let err = div.replace_children("").expect_err("empty markup");
        assert!(matches!(err, Error::MalformedInput(_)));
        assert_eq!(div.html(), r#"<div id="x">old</div>"#);
    }

    #[test]
    fn test_display_is_outer_html() {
        let doc = Document::new(r#"<em class="k">hi</em>"#);
        let em = doc.find_at("em", 0).expect("em");

        assert_eq!(em.to_string(), r#"<em class="k">hi</em>"#);
    }
}
