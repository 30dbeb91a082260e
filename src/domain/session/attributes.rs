//! Session attribute values.

use serde::{Deserialize, Serialize};

use crate::domain::report::ItemValue;

/// Attribute holding the orchestrator's callback address. Set at creation.
pub const CALLBACK_ADDRESS: &str = "callbackAddress";

/// Attribute holding the verifier transaction correlated with a session.
pub const TRANSACTION_ID: &str = "transactionId";

/// Closed set of value kinds a session attribute may hold.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    Content(ItemValue),
}

impl AttributeValue {
    /// The string payload, if this is a text attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Flag(b)
    }
}

impl From<ItemValue> for AttributeValue {
    fn from(v: ItemValue) -> Self {
        AttributeValue::Content(v)
    }
}

/// Wire form of the scalar attribute kinds.
///
/// Content attributes are internal correlation data and have no wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarAttribute {
    Flag(bool),
    Integer(i64),
    Text(String),
}

impl From<ScalarAttribute> for AttributeValue {
    fn from(v: ScalarAttribute) -> Self {
        match v {
            ScalarAttribute::Flag(b) => AttributeValue::Flag(b),
            ScalarAttribute::Integer(n) => AttributeValue::Integer(n),
            ScalarAttribute::Text(s) => AttributeValue::Text(s),
        }
    }
}

impl AttributeValue {
    /// Converts to the wire form; `None` for content attributes.
    pub fn to_scalar(&self) -> Option<ScalarAttribute> {
        match self {
            AttributeValue::Text(s) => Some(ScalarAttribute::Text(s.clone())),
            AttributeValue::Integer(n) => Some(ScalarAttribute::Integer(*n)),
            AttributeValue::Flag(b) => Some(ScalarAttribute::Flag(*b)),
            AttributeValue::Content(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_attribute_exposes_string() {
        let value: AttributeValue = "http://cb".into();
        assert_eq!(value.as_text(), Some("http://cb"));
        assert_eq!(AttributeValue::Integer(3).as_text(), None);
    }

    #[test]
    fn scalar_wire_form_is_untagged() {
        let parsed: ScalarAttribute = serde_json::from_str("42").unwrap();
        assert_eq!(AttributeValue::from(parsed), AttributeValue::Integer(42));

        let parsed: ScalarAttribute = serde_json::from_str("\"tx-1\"").unwrap();
        assert_eq!(AttributeValue::from(parsed), AttributeValue::Text("tx-1".into()));
    }

    #[test]
    fn content_has_no_wire_form() {
        let value = AttributeValue::Content(ItemValue::text("x"));
        assert!(value.to_scalar().is_none());
    }
}
