//! Virtual properties.
//!
//! A small set of computed names (`outertext`, `innertext`, `plaintext`, `tag`,
//! `attr`) layered over the open-ended attribute set. Reads and writes resolve
//! through different tables, so a name can be readable without being writable
//! (`plaintext`, `tag`, `attr` write through to attributes of that name).

use crate::attributes::{AttributeValue, Attributes};
use crate::element::Element;
use crate::error::Result;

/// Name resolution for property reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadProperty<'n> {
    OuterText,
    InnerText,
    PlainText,
    Tag,
    Attributes,
    Attribute(&'n str),
}

impl<'n> ReadProperty<'n> {
    #[must_use]
    pub fn resolve(name: &'n str) -> Self {
        match name {
            "outertext" => Self::OuterText,
            "innertext" => Self::InnerText,
            "plaintext" => Self::PlainText,
            "tag" => Self::Tag,
            "attr" => Self::Attributes,
            other => Self::Attribute(other),
        }
    }
}

/// Name resolution for property writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteProperty<'n> {
    OuterText,
    InnerText,
    Attribute(&'n str),
}

impl<'n> WriteProperty<'n> {
    #[must_use]
    pub fn resolve(name: &'n str) -> Self {
        match name {
            "outertext" => Self::OuterText,
            "innertext" => Self::InnerText,
            other => Self::Attribute(other),
        }
    }
}

/// Result of a property read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// `outertext`, `innertext`, `plaintext` or `tag`.
    Text(String),
    /// `attr`: every attribute, `None` when the element has none.
    Attributes(Option<Attributes>),
    /// Any other name: the attribute of that name.
    Attribute(Option<String>),
}

impl PropertyValue {
    /// String form of a text or attribute value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Attribute(v) => v.as_deref(),
            Self::Attributes(_) => None,
        }
    }

    #[must_use]
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            Self::Attribute(v) => v,
            Self::Attributes(_) => None,
        }
    }

    #[must_use]
    pub fn into_attributes(self) -> Option<Attributes> {
        match self {
            Self::Attributes(attrs) => attrs,
            _ => None,
        }
    }
}

impl<'a> Element<'a> {
    /// Read a virtual property or, for unrecognised names, an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> PropertyValue {
        match ReadProperty::resolve(name) {
            ReadProperty::OuterText => PropertyValue::Text(self.outertext()),
            ReadProperty::InnerText => PropertyValue::Text(self.innertext()),
            ReadProperty::PlainText => PropertyValue::Text(self.text()),
            ReadProperty::Tag => PropertyValue::Text(self.tag()),
            ReadProperty::Attributes => PropertyValue::Attributes(self.get_all_attributes()),
            ReadProperty::Attribute(attr) => PropertyValue::Attribute(self.get_attribute(attr)),
        }
    }

    /// Write a virtual property or, for unrecognised names, an attribute.
    ///
    /// Consumes the element and returns the handle that is valid afterwards:
    /// the inserted node for `outertext`, the same element otherwise. Errors
    /// are those of [`replace_node`](Self::replace_node) and
    /// [`replace_children`](Self::replace_children), passed through unchanged.
    pub fn set<V: AttributeValue>(self, name: &str, value: V) -> Result<Element<'a>> {
        match WriteProperty::resolve(name) {
            WriteProperty::OuterText => self.replace_node(&value.to_value_string()),
            WriteProperty::InnerText => {
                self.replace_children(&value.to_value_string())?;
                Ok(self)
            }
            WriteProperty::Attribute(attr) => {
                self.set_attribute(attr, value);
                Ok(self)
            }
        }
    }

    /// Whether a property can be read with a value.
    ///
    /// Always true for `outertext`, `innertext`, `plaintext` and `tag`;
    /// otherwise whether the attribute exists. `attr` is not special here.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        match name {
            "outertext" | "innertext" | "plaintext" | "tag" => true,
            other => self.has_attribute(other),
        }
    }
}
