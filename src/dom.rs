//! DOM Operations Adapter
//!
//! The only place that talks to `dom_query` node primitives directly. Element,
//! Scope and NodeList are written against these helpers so the facade semantics
//! stay independent of the tree library's API surface.

// Re-export core types for external use
pub use dom_query::{Document as Tree, NodeRef, Selection};

use dom_query::NodeData;

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a fresh, independent tree.
///
/// html5ever never rejects input; malformed markup is recovered the way a
/// browser would.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Tree {
    Tree::from(html)
}

/// Parse replacement markup as it would be parsed inside a `context` element.
///
/// The markup is parsed as a full document, wrapped in the element chain that
/// puts the parser in the right insertion mode for `context` (rows need a
/// table section, cells need a row, and so on). Without the chain html5ever
/// parses in body context and drops table structure tags, keeping only their
/// text. Leading whitespace is ignored, as it is in body context.
#[must_use]
pub fn parse_in_context(markup: &str, context: &str) -> Tree {
    let open: String = context_chain(context)
        .iter()
        .map(|tag| format!("<{tag}>"))
        .collect();
    parse(&format!("{open}{}", markup.trim_start()))
}

/// Unwrap the parser scaffold around a fragment parsed in body context.
///
/// A fragment parsed as a full document always ends up under
/// `document > html > body`. The caller's node is the first child found three
/// levels below the document node. Returns `None` when any level is missing,
/// which happens for empty input or input that only produces head content.
#[must_use]
pub fn content_node(tree: &Tree) -> Option<NodeRef<'_>> {
    content_node_in(tree, "body")
}

/// Unwrap a tree produced by [`parse_in_context`] with the same `context`.
///
/// Below `document > html > body` the context chain is followed element by
/// element; the content is the first child of its innermost element. Markup
/// that the parser moved out of the chain (foster-parented text in a table,
/// for instance) is not content for that context and yields `None`.
#[must_use]
pub fn content_node_in<'t>(tree: &'t Tree, context: &str) -> Option<NodeRef<'t>> {
    let root = tree.root();
    let html = root.children().into_iter().find(NodeRef::is_element)?;
    let mut scope = html
        .children()
        .into_iter()
        .rev()
        .find(|n| n.is_element() && name_is(n, "body"))?;
    for tag in context_chain(context) {
        scope = scope
            .children()
            .into_iter()
            .find(|n| n.is_element() && name_is(n, tag))?;
    }
    scope.first_child()
}

/// Elements the parser must be inside of to accept children of `context`.
fn context_chain(context: &str) -> &'static [&'static str] {
    match context.to_ascii_lowercase().as_str() {
        "table" => &["table"],
        "thead" | "tbody" | "tfoot" => &["table", "tbody"],
        "tr" => &["table", "tbody", "tr"],
        "colgroup" => &["table", "colgroup"],
        "select" | "optgroup" => &["select"],
        _ => &[],
    }
}

fn name_is(node: &NodeRef, name: &str) -> bool {
    node.node_name().is_some_and(|n| n.eq_ignore_ascii_case(name))
}

// === Node Information ===

/// Node name as reported for the `tag` property.
///
/// Elements report their local name; other node kinds report a `#`-prefixed
/// kind name.
#[must_use]
pub fn node_name(node: &NodeRef) -> String {
    if node.is_element() {
        return node.node_name().map(|t| t.to_string()).unwrap_or_default();
    }
    let kind = if node.is_text() {
        "#text"
    } else if node.is_comment() {
        "#comment"
    } else if node.is_document() || node.is_fragment() {
        "#document"
    } else {
        "#doctype"
    };
    kind.to_string()
}

/// Two handles refer to the same node of the same tree.
#[inline]
#[must_use]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    a.id == b.id && std::ptr::eq(a.tree, b.tree)
}

// === Attribute Operations ===

/// All attributes of a node, in document order.
///
/// Returns an empty vector for nodes without attributes, including non-element
/// nodes.
#[must_use]
pub fn attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    Selection::from(*node).has_attr(name)
}

/// Set an attribute value
#[inline]
pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    Selection::from(*node).set_attr(name, value);
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    Selection::from(*node).remove_attr(name);
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    Selection::from(*node).text()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

// === Querying ===

/// All descendants of `node` matching a CSS selector, in document order.
///
/// An unparseable selector matches nothing.
#[must_use]
pub fn select_all<'a>(node: &NodeRef<'a>, selector: &str) -> Vec<NodeRef<'a>> {
    Selection::from(*node)
        .try_select(selector)
        .map(|sel| sel.nodes().to_vec())
        .unwrap_or_default()
}

// === Tree Manipulation ===

/// Deep-copy `src` (usually from a scratch tree) into `target`'s tree.
///
/// Node data is cloned as the parser produced it, namespace and attribute order
/// included, so nothing is parsed a second time and no id of the scratch tree
/// leaks into the target. The copy is detached; the caller splices it in.
/// Returns `None` for document and fragment roots.
#[must_use]
pub fn import_node<'a>(target: &NodeRef<'a>, src: &NodeRef) -> Option<NodeRef<'a>> {
    let tree = target.tree;
    let mut data = src.query(|n| n.data.clone())?;
    match &mut data {
        NodeData::Document | NodeData::Fragment => return None,
        NodeData::Element(el) => {
            // <template> keeps its children in a separate fragment node
            if let Some(contents) = el.template_contents {
                let fragment = NodeRef::new(tree.create_node(NodeData::Fragment), tree);
                import_children(&fragment, &NodeRef::new(contents, src.tree));
                el.template_contents = Some(fragment.id);
            }
        }
        _ => {}
    }

    let copy = NodeRef::new(tree.create_node(data), tree);
    import_children(&copy, src);
    Some(copy)
}

fn import_children(into: &NodeRef, src: &NodeRef) {
    for child in src.children() {
        if let Some(child_copy) = import_node(into, &child) {
            into.append_child(&child_copy);
        }
    }
}

/// Replace `node` in its parent's child sequence with a deep copy of `content`.
///
/// Returns the inserted node, or `None` (with the tree untouched) when `node`
/// has no parent or `content` cannot be imported.
#[must_use]
pub fn replace_with_copy<'a>(node: &NodeRef<'a>, content: &NodeRef) -> Option<NodeRef<'a>> {
    node.parent()?;
    let copy = import_node(node, content)?;
    node.replace_with(&copy);
    Some(copy)
}

/// Remove every child of `node` and append a deep copy of `content` as its only
/// child.
///
/// Returns the inserted node, or `None` (with the tree untouched) when
/// `content` cannot be imported.
#[must_use]
pub fn replace_children_with_copy<'a>(
    node: &NodeRef<'a>,
    content: &NodeRef,
) -> Option<NodeRef<'a>> {
    let copy = import_node(node, content)?;
    node.remove_children();
    node.append_child(&copy);
    Some(copy)
}
