use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::{Map, Value};

/// Renders a stored document as plain JSON.
///
/// Object ids become their hex string and dates become RFC 3339 strings
/// with millisecond precision;
/// anything else follows relaxed extended JSON.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => {
            Value::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{DateTime, doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn object_id_becomes_hex_string() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let rendered = document_to_json(doc! { "_id": oid, "a": 1 });

        assert_eq!(rendered, json!({ "_id": "65a1f0c2e4b0a1b2c3d4e5f6", "a": 1 }));
    }

    #[test]
    fn every_field_is_kept() {
        let rendered = document_to_json(doc! { "z": 1, "a": 2, "m": 3 });

        assert_eq!(rendered.as_object().unwrap().len(), 3);
        assert_eq!(rendered["a"], 2);
        assert_eq!(rendered["z"], 1);
        assert_eq!(rendered["m"], 3);
    }

    #[test]
    fn nested_values_are_rendered_recursively() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let rendered = document_to_json(doc! {
            "hcp": { "npi": "1234567890", "ref": oid },
            "tags": ["kol", oid],
            "score": 4.5_f64,
            "count": 7_i64,
            "active": true,
            "note": Bson::Null,
        });

        assert_eq!(rendered["hcp"]["npi"], "1234567890");
        assert_eq!(rendered["hcp"]["ref"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(rendered["tags"], json!(["kol", "65a1f0c2e4b0a1b2c3d4e5f6"]));
        assert_eq!(rendered["score"], 4.5);
        assert_eq!(rendered["count"], 7);
        assert_eq!(rendered["active"], true);
        assert!(rendered["note"].is_null());
    }

    #[test]
    fn dates_become_rfc3339() {
        let rendered = bson_to_json(Bson::DateTime(DateTime::from_millis(0)));
        assert_eq!(rendered, json!("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn dates_keep_trailing_millisecond_zeros() {
        assert_eq!(
            bson_to_json(Bson::DateTime(DateTime::from_millis(1500))),
            json!("1970-01-01T00:00:01.500Z")
        );
        assert_eq!(
            bson_to_json(Bson::DateTime(DateTime::from_millis(1_700_000_000_123))),
            json!("2023-11-14T22:13:20.123Z")
        );
    }
}
