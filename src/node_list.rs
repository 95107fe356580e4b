//! Ordered collections of elements.

use std::ops::Index;

use crate::element::Element;

/// An ordered, zero-based list of elements.
///
/// Navigation results are in document order; query results are in selector
/// match order. A `NodeList` is a snapshot: it does not track later tree
/// mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList<'a> {
    elements: Vec<Element<'a>>,
}

impl<'a> NodeList<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element<'a>> {
        self.elements.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Element<'a>> {
        self.elements.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Element<'a>> {
        self.elements.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<'a>> {
        self.elements.iter()
    }

    pub fn push(&mut self, element: Element<'a>) {
        self.elements.push(element);
    }

    /// Consume the list, taking the element at `index`.
    pub(crate) fn into_nth(self, index: usize) -> Option<Element<'a>> {
        self.elements.into_iter().nth(index)
    }

    /// Matches of `selector` below every element of the list, concatenated in
    /// list order.
    #[must_use]
    pub fn find(&self, selector: &str) -> NodeList<'a> {
        self.iter().flat_map(|e| e.find(selector)).collect()
    }

    /// Concatenated plain text of every element.
    #[must_use]
    pub fn text(&self) -> String {
        self.iter().map(Element::text).collect()
    }

    /// Concatenated outer markup of every element.
    #[must_use]
    pub fn html(&self) -> String {
        self.iter().map(Element::html).collect()
    }
}

impl<'a> Index<usize> for NodeList<'a> {
    type Output = Element<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'a> FromIterator<Element<'a>> for NodeList<'a> {
    fn from_iter<I: IntoIterator<Item = Element<'a>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for NodeList<'a> {
    type Item = Element<'a>;
    type IntoIter = std::vec::IntoIter<Element<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, 'l> IntoIterator for &'l NodeList<'a> {
    type Item = &'l Element<'a>;
    type IntoIter = std::slice::Iter<'l, Element<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn test_list_accessors() {
        let doc = Document::new("<ul><li>a</li><li>b</li><li>c</li></ul>");
        let items = doc.find("li");

        assert_eq!(items.len(), 3);
        assert_eq!(items.first().map(crate::Element::text).as_deref(), Some("a"));
        assert_eq!(items.last().map(crate::Element::text).as_deref(), Some("c"));
        assert_eq!(items[1].text(), "b");
        assert!(items.get(3).is_none());
    }

    #[test]
    fn test_find_across_list() {
        let doc = Document::new(
            r#"<div class="box"><b>1</b></div><div class="box"><b>2</b><b>3</b></div>"#,
        );
        let bold = doc.find(".box").find("b");

        assert_eq!(bold.len(), 3);
        assert_eq!(bold.text(), "123");
    }

    #[test]
    fn test_text_and_html_concatenate() {
        let doc = Document::new("<p>x</p><p>y</p>");
        let paragraphs = doc.find("p");

        assert_eq!(paragraphs.text(), "xy");
        assert_eq!(paragraphs.html(), "<p>x</p><p>y</p>");
    }

    #[test]
    fn test_empty_list() {
        let doc = Document::new("<p>x</p>");
        let none = doc.find("table");

        assert!(none.is_empty());
        assert!(none.first().is_none());
        assert_eq!(none.text(), "");
    }
}
