// Firestore REST API types.
// Typed document values and their conversion to plain JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as Json};

/// A document returned by the store: its resource name and typed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name, `projects/{p}/databases/{d}/documents/{collection}/{id}`.
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    /// Build a document from an id and typed field values.
    #[cfg(test)]
    pub fn new(collection: &str, id: &str, fields: BTreeMap<String, Value>) -> Self {
        Self {
            name: format!("documents/{}/{}", collection, id),
            fields,
        }
    }

    /// The document identifier: last segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// The document body as a plain JSON object.
    pub fn body(&self) -> Map<String, Json> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect()
    }
}

/// A typed Firestore value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(Json),
    BooleanValue(bool),
    /// Int64 values are sent as decimal strings.
    IntegerValue(String),
    DoubleValue(f64),
    /// RFC 3339 UTC timestamp.
    TimestampValue(String),
    StringValue(String),
    /// Base64-encoded bytes.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

#[cfg(test)]
impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::StringValue(s.into())
    }

    pub fn timestamp(rfc3339: impl Into<String>) -> Self {
        Value::TimestampValue(rfc3339.into())
    }
}

impl Value {
    /// Convert to plain JSON. Timestamps stay RFC 3339 strings.
    pub fn to_json(&self) -> Json {
        match self {
            Value::NullValue(_) => Json::Null,
            Value::BooleanValue(b) => Json::Bool(*b),
            Value::IntegerValue(s) => s
                .parse::<i64>()
                .map(|n| Json::Number(n.into()))
                .unwrap_or_else(|_| Json::String(s.clone())),
            Value::DoubleValue(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
            Value::TimestampValue(s)
            | Value::StringValue(s)
            | Value::BytesValue(s)
            | Value::ReferenceValue(s) => Json::String(s.clone()),
            Value::GeoPointValue(point) => serde_json::json!({
                "latitude": point.latitude,
                "longitude": point.longitude,
            }),
            Value::ArrayValue(array) => {
                Json::Array(array.values.iter().map(Value::to_json).collect())
            }
            Value::MapValue(map) => Json::Object(
                map.fields
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/blog/abc123".to_string(),
            ..Default::default()
        };
        assert_eq!(doc.id(), "abc123");
    }

    #[test]
    fn test_decode_wire_document() {
        let wire = json!({
            "name": "projects/p/databases/(default)/documents/hub/x1",
            "fields": {
                "title": {"stringValue": "Intro to Rust"},
                "views": {"integerValue": "42"},
                "draft": {"booleanValue": false},
                "createdAt": {"timestampValue": "2024-03-01T10:00:00.123Z"},
                "tags": {"arrayValue": {"values": [{"stringValue": "lang"}]}},
                "empty": {"arrayValue": {}},
                "meta": {"mapValue": {"fields": {"by": {"stringValue": "ana"}}}},
                "gone": {"nullValue": null}
            },
            "createTime": "2024-03-01T10:00:00Z",
            "updateTime": "2024-03-01T10:00:00Z"
        });

        let doc: Document = serde_json::from_value(wire).unwrap();
        assert_eq!(doc.id(), "x1");

        let body = Json::Object(doc.body());
        assert_eq!(
            body,
            json!({
                "title": "Intro to Rust",
                "views": 42,
                "draft": false,
                "createdAt": "2024-03-01T10:00:00.123Z",
                "tags": ["lang"],
                "empty": [],
                "meta": {"by": "ana"},
                "gone": null
            })
        );
    }

    #[test]
    fn test_unparseable_integer_kept_as_text() {
        let value = Value::IntegerValue("not-a-number".to_string());
        assert_eq!(value.to_json(), json!("not-a-number"));
    }
}
