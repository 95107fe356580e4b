//! Attribute maps and attribute value conversion.

use serde::{Serialize, Serializer};

/// Attributes of one element, in document order.
///
/// Returned by [`Element::get_all_attributes`](crate::Element::get_all_attributes)
/// only when the element carries at least one attribute, so an `Attributes`
/// value is never empty when it comes from an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Value of the attribute called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attribute names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Vec<(String, String)>> for Attributes {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// Serialized as a JSON-style object, keys in document order.
impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// A value that can be written to an attribute.
///
/// Writing an *empty* value removes the attribute instead of setting it.
/// Empty means the empty string, `"0"`, `false`, numeric zero or `None`.
pub trait AttributeValue {
    /// The string stored in the attribute.
    fn to_value_string(&self) -> String;

    /// Whether writing this value deletes the attribute.
    fn is_empty_value(&self) -> bool;
}

impl AttributeValue for str {
    fn to_value_string(&self) -> String {
        self.to_string()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty() || self == "0"
    }
}

impl AttributeValue for String {
    fn to_value_string(&self) -> String {
        self.clone()
    }

    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
    fn to_value_string(&self) -> String {
        (**self).to_value_string()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl AttributeValue for bool {
    fn to_value_string(&self) -> String {
        if *self { "1".to_string() } else { String::new() }
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }
}

impl<T: AttributeValue> AttributeValue for Option<T> {
    fn to_value_string(&self) -> String {
        self.as_ref().map(AttributeValue::to_value_string).unwrap_or_default()
    }

    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(AttributeValue::is_empty_value)
    }
}

macro_rules! numeric_attribute_value {
    ($($t:ty),*) => {
        $(
            impl AttributeValue for $t {
                fn to_value_string(&self) -> String {
                    self.to_string()
                }

                #[allow(clippy::float_cmp)]
                fn is_empty_value(&self) -> bool {
                    *self == (0 as $t)
                }
            }
        )*
    };
}

numeric_attribute_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!("".is_empty_value());
        assert!("0".is_empty_value());
        assert!(String::new().is_empty_value());
        assert!(false.is_empty_value());
        assert!(0_i32.is_empty_value());
        assert!(0.0_f64.is_empty_value());
        assert!(None::<&str>.is_empty_value());
        assert!(Some("").is_empty_value());
    }

    #[test]
    fn test_non_empty_values() {
        assert!(!"x".is_empty_value());
        assert!(!" ".is_empty_value());
        assert!(!"00".is_empty_value());
        assert!(!true.is_empty_value());
        assert!(!7_u8.is_empty_value());
        assert!(!Some("v").is_empty_value());
    }

    #[test]
    fn test_value_strings() {
        assert_eq!(true.to_value_string(), "1");
        assert_eq!(42_i64.to_value_string(), "42");
        assert_eq!(Some("a").to_value_string(), "a");
        assert_eq!(None::<String>.to_value_string(), "");
    }

    #[test]
    fn test_attributes_lookup() {
        let attrs = Attributes::from(vec![
            ("id".to_string(), "x".to_string()),
            ("class".to_string(), "c".to_string()),
        ]);

        assert_eq!(attrs.get("id"), Some("x"));
        assert_eq!(attrs.get("title"), None);
        assert!(attrs.contains("class"));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["id", "class"]);
        assert_eq!(attrs.len(), 2);
    }
}
