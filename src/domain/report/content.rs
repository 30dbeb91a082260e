//! Report content - the typed values callers hand in and the rendered items
//! that end up in a [`Report`](super::Report).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ReportError;

/// MIME type used for plain string items.
pub const TEXT_PLAIN: &str = "text/plain";

/// MIME type used for items carrying a serialized JSON document.
pub const APPLICATION_JSON: &str = "application/json";

/// Character encoding declared on every scalar item.
pub const UTF_8: &str = "UTF-8";

/// A value to be rendered into a report item.
///
/// Lists hold unnamed children; maps hold named children in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Scalar { value: String, mime_type: String },
    List(Vec<ItemValue>),
    Map(Vec<(String, ItemValue)>),
}

impl ItemValue {
    /// A plain text scalar.
    pub fn text(value: impl Into<String>) -> Self {
        ItemValue::Scalar {
            value: value.into(),
            mime_type: TEXT_PLAIN.to_string(),
        }
    }

    /// A scalar with an explicit MIME type.
    pub fn with_mime_type(value: impl Into<String>, mime_type: impl Into<String>) -> Self {
        ItemValue::Scalar {
            value: value.into(),
            mime_type: mime_type.into(),
        }
    }

    /// A scalar holding `value` serialized as a JSON document.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::with_mime_type(
            serde_json::to_string(value)?,
            APPLICATION_JSON,
        ))
    }

    pub fn list(items: impl IntoIterator<Item = ItemValue>) -> Self {
        ItemValue::List(items.into_iter().collect())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, ItemValue)>) -> Self {
        ItemValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Mirrors a JSON document as nested content: objects become maps,
    /// arrays become lists and everything else becomes a text scalar.
    /// `null` renders as an empty string.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(fields) => ItemValue::Map(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), ItemValue::from_json(v)))
                    .collect(),
            ),
            Value::Array(values) => ItemValue::List(values.iter().map(ItemValue::from_json).collect()),
            Value::String(s) => ItemValue::text(s.clone()),
            Value::Null => ItemValue::text(""),
            other => ItemValue::text(other.to_string()),
        }
    }
}

impl From<&str> for ItemValue {
    fn from(s: &str) -> Self {
        ItemValue::text(s)
    }
}

impl From<String> for ItemValue {
    fn from(s: String) -> Self {
        ItemValue::text(s)
    }
}

impl From<u64> for ItemValue {
    fn from(n: u64) -> Self {
        ItemValue::text(n.to_string())
    }
}

impl From<bool> for ItemValue {
    fn from(b: bool) -> Self {
        ItemValue::text(b.to_string())
    }
}

/// A rendered report item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(flatten)]
    body: ContentBody,
}

/// Payload of a rendered item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBody {
    Scalar {
        value: String,
        mime_type: String,
        encoding: String,
    },
    List {
        items: Vec<ContentItem>,
    },
    Map {
        items: Vec<ContentItem>,
    },
}

impl ContentItem {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn body(&self) -> &ContentBody {
        &self.body
    }

    /// The scalar value, if this item is a scalar.
    pub fn as_text(&self) -> Option<&str> {
        match &self.body {
            ContentBody::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The declared MIME type, if this item is a scalar.
    pub fn mime_type(&self) -> Option<&str> {
        match &self.body {
            ContentBody::Scalar { mime_type, .. } => Some(mime_type),
            _ => None,
        }
    }

    /// Child items of a list or map; empty for scalars.
    pub fn children(&self) -> &[ContentItem] {
        match &self.body {
            ContentBody::List { items } | ContentBody::Map { items } => items,
            ContentBody::Scalar { .. } => &[],
        }
    }

    /// Looks up a named child of a map item.
    pub fn child(&self, name: &str) -> Option<&ContentItem> {
        self.children().iter().find(|c| c.name() == Some(name))
    }
}

/// Renders a sequence of named values, rejecting duplicate names at this level.
pub(crate) fn render_named(
    entries: Vec<(String, ItemValue)>,
) -> Result<Vec<ContentItem>, ReportError> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut rendered = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        if !seen.insert(name.clone()) {
            return Err(ReportError::DuplicateItemName { name });
        }
        rendered.push(render(Some(name), value)?);
    }
    Ok(rendered)
}

fn render(name: Option<String>, value: ItemValue) -> Result<ContentItem, ReportError> {
    let body = match value {
        ItemValue::Scalar { value, mime_type } => ContentBody::Scalar {
            value,
            mime_type,
            encoding: UTF_8.to_string(),
        },
        ItemValue::List(values) => ContentBody::List {
            items: values
                .into_iter()
                .map(|v| render(None, v))
                .collect::<Result<_, _>>()?,
        },
        ItemValue::Map(entries) => ContentBody::Map {
            items: render_named(entries)?,
        },
    };
    Ok(ContentItem { name, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_scalar_is_plain_utf8() {
        let items = render_named(vec![("greeting".into(), ItemValue::text("hi"))]).unwrap();
        assert_eq!(
            items[0].body(),
            &ContentBody::Scalar {
                value: "hi".into(),
                mime_type: TEXT_PLAIN.into(),
                encoding: UTF_8.into(),
            }
        );
    }

    #[test]
    fn json_scalar_declares_application_json() {
        let value = ItemValue::json(&json!({"a": 1})).unwrap();
        let items = render_named(vec![("doc".into(), value)]).unwrap();
        assert_eq!(items[0].mime_type(), Some(APPLICATION_JSON));
        assert_eq!(items[0].as_text(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn nested_duplicate_names_are_rejected() {
        let value = ItemValue::map([("x", ItemValue::text("1")), ("x", ItemValue::text("2"))]);
        let err = render_named(vec![("outer".into(), value)]).unwrap_err();
        assert!(matches!(err, ReportError::DuplicateItemName { name } if name == "x"));
    }

    #[test]
    fn same_name_at_different_levels_is_allowed() {
        let value = ItemValue::map([("x", ItemValue::text("inner"))]);
        let items = render_named(vec![("x".into(), value)]).unwrap();
        assert_eq!(items[0].child("x").and_then(|c| c.as_text()), Some("inner"));
    }

    #[test]
    fn list_children_are_unnamed() {
        let value = ItemValue::list([ItemValue::text("a"), ItemValue::text("a")]);
        let items = render_named(vec![("values".into(), value)]).unwrap();
        let children = items[0].children();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.name().is_none()));
    }

    #[test]
    fn from_json_mirrors_document_shape() {
        let doc = json!({"logs": [{"level": "INFO"}], "count": 2, "missing": null});
        let items = render_named(vec![("doc".into(), ItemValue::from_json(&doc))]).unwrap();
        let doc = &items[0];

        let logs = doc.child("logs").unwrap();
        assert!(matches!(logs.body(), ContentBody::List { .. }));
        assert_eq!(logs.children()[0].child("level").unwrap().as_text(), Some("INFO"));
        assert_eq!(doc.child("count").unwrap().as_text(), Some("2"));
        assert_eq!(doc.child("missing").unwrap().as_text(), Some(""));
    }

    #[test]
    fn rendered_item_serializes_with_kind_tag() {
        let items = render_named(vec![("n".into(), ItemValue::text("v"))]).unwrap();
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["kind"], "scalar");
        assert_eq!(json["name"], "n");
        assert_eq!(json["encoding"], "UTF-8");
    }
}
