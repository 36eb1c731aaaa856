//! Firestore REST wire format
//!
//! Only the parts of the document resource the admin reads or writes are
//! modelled. Field values are externally tagged by kind
//! (`{"stringValue": "..."}`), which maps directly onto a serde enum.

use std::collections::BTreeMap;

use gemdesk_domain::{InventoryItem, ItemData, ItemField, ItemId};
use serde::{Deserialize, Serialize};

use crate::ports::outbound::{StoreError, StoreOperation};

/// One typed Firestore value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue(()),
    BooleanValue(bool),
    /// int64 encoded as a decimal string
    IntegerValue(String),
    /// A JSON number, or a string for `NaN` / `Infinity`
    DoubleValue(serde_json::Value),
    TimestampValue(String),
    StringValue(String),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(serde_json::Value),
    MapValue(serde_json::Value),
}

impl FieldValue {
    /// Render scalar values as the text a form field would hold.
    ///
    /// Structured and binary values have no text form and yield `None`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::StringValue(s) | Self::IntegerValue(s) => Some(s.clone()),
            Self::DoubleValue(serde_json::Value::Number(n)) => Some(n.to_string()),
            Self::DoubleValue(serde_json::Value::String(s)) => Some(s.clone()),
            Self::BooleanValue(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// A Firestore document resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name, `projects/{p}/databases/{d}/documents/{collection}/{id}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Request body carrying every field of `data` as a string value.
    pub fn from_item_data(data: &ItemData) -> Self {
        let fields = data
            .fields()
            .map(|(field, value)| {
                (
                    field.wire_name().to_string(),
                    FieldValue::StringValue(value.to_string()),
                )
            })
            .collect();
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Last segment of the resource name.
    pub fn document_id(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .filter(|id| !id.is_empty())
    }

    /// The item payload. Absent or non-scalar fields read as empty text.
    pub fn item_data(&self) -> ItemData {
        let mut data = ItemData::default();
        for field in ItemField::ALL {
            if let Some(text) = self.fields.get(field.wire_name()).and_then(FieldValue::as_text) {
                data.set(field, text);
            }
        }
        data
    }

    /// Convert to a domain record, using the resource name for the id.
    pub fn into_item(self, operation: StoreOperation) -> Result<InventoryItem, StoreError> {
        let id = self
            .document_id()
            .ok_or_else(|| StoreError::malformed(operation, "document has no name"))?;
        let id = ItemId::new(id).map_err(|e| StoreError::malformed(operation, e))?;
        let data = self.item_data();
        Ok(InventoryItem::new(id, data))
    }
}

/// Response of `documents.list`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    /// Omitted entirely when the collection is empty
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Google API error envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: ErrorStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorStatus {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_writes_every_field_as_string_value() {
        let data = ItemData {
            name: "Ring A".into(),
            sku: "R-001".into(),
            weight: "5".into(),
            karat: "14K".into(),
            cost: "100".into(),
            tag_price: "250".into(),
            notes: String::new(),
        };

        let body = serde_json::to_value(Document::from_item_data(&data)).unwrap();

        assert_eq!(
            body,
            json!({
                "fields": {
                    "cost": { "stringValue": "100" },
                    "karat": { "stringValue": "14K" },
                    "name": { "stringValue": "Ring A" },
                    "notes": { "stringValue": "" },
                    "sku": { "stringValue": "R-001" },
                    "tagPrice": { "stringValue": "250" },
                    "weight": { "stringValue": "5" }
                }
            })
        );
    }

    #[test]
    fn decodes_listed_document_into_item() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/gem-shop/databases/(default)/documents/inventory/Xy12",
            "fields": {
                "name": { "stringValue": "Bangle" },
                "sku": { "stringValue": "B-200" },
                "weight": { "integerValue": "22" },
                "cost": { "doubleValue": 99.5 },
                "tagPrice": { "stringValue": "180" }
            },
            "createTime": "2024-05-01T10:00:00.000000Z",
            "updateTime": "2024-05-01T10:00:00.000000Z"
        }))
        .unwrap();

        let item = doc.into_item(StoreOperation::List).unwrap();
        assert_eq!(item.id.as_str(), "Xy12");
        assert_eq!(item.data.name, "Bangle");
        assert_eq!(item.data.weight, "22");
        assert_eq!(item.data.cost, "99.5");
        assert_eq!(item.data.karat, "");
        assert_eq!(item.data.notes, "");
    }

    #[test]
    fn structured_values_read_as_empty_text() {
        let doc: Document = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/inventory/a",
            "fields": {
                "name": { "mapValue": { "fields": {} } },
                "sku": { "nullValue": null },
                "notes": { "booleanValue": true }
            }
        }))
        .unwrap();

        let data = doc.item_data();
        assert_eq!(data.name, "");
        assert_eq!(data.sku, "");
        assert_eq!(data.notes, "true");
    }

    #[test]
    fn document_without_name_is_malformed() {
        let err = Document::default()
            .into_item(StoreOperation::Create)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Malformed {
                operation: StoreOperation::Create,
                ..
            }
        ));
    }

    #[test]
    fn empty_list_response_has_no_documents_key() {
        let page: ListDocumentsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn error_envelope_decodes() {
        let err: ErrorResponse = serde_json::from_value(json!({
            "error": {
                "code": 403,
                "message": "Missing or insufficient permissions.",
                "status": "PERMISSION_DENIED"
            }
        }))
        .unwrap();
        assert_eq!(err.error.message, "Missing or insufficient permissions.");
    }
}
