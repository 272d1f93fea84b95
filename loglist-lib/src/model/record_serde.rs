//! Custom serialization for Record to handle the host's JSON record format.
//!
//! ## Read Format (Deserialization)
//!
//! Records arrive as flat JSON objects:
//! - Type metadata: `"attributes": {"type": "Log__c", "url": "..."}`
//! - Identifier: `"Id": "a01..."`
//! - Relationship lookups are nested objects: `"LoggedBy__r": {"Name": "..."}`
//! - Date-times stay strings (RFC 3339 or `2024-03-01T09:30:00.000+0000`);
//!   they are parsed on read, see [`Value::as_datetime`]
//!
//! ## Write Format (Serialization)
//!
//! The same shape is written back, with fields in key order and null fields
//! omitted.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

const ATTRIBUTES_KEY: &str = "attributes";
const ID_KEY: &str = "Id";

// =============================================================================
// Serialization
// =============================================================================

#[derive(Serialize)]
struct Attributes<'a> {
    #[serde(rename = "type")]
    object_type: &'a str,
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields: BTreeMap<&String, &Value> =
            self.fields.iter().filter(|(_, v)| !v.is_null()).collect();
        let mut map = serializer.serialize_map(None)?;

        if !self.object_name.is_empty() {
            map.serialize_entry(
                ATTRIBUTES_KEY,
                &Attributes {
                    object_type: &self.object_name,
                },
            )?;
        }
        if let Some(id) = &self.id {
            map.serialize_entry(ID_KEY, id)?;
        }
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a record")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut object = serde_json::Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            object.insert(key, value);
        }
        Ok(record_from_object(object))
    }
}

/// Builds a record from a JSON object, recursing into relationship objects.
fn record_from_object(object: serde_json::Map<String, serde_json::Value>) -> Record {
    let mut record = Record::new("");

    for (key, value) in object {
        match value {
            serde_json::Value::Object(attrs) if key == ATTRIBUTES_KEY => {
                if let Some(serde_json::Value::String(t)) = attrs.get("type") {
                    record.object_name = t.clone();
                }
            }
            serde_json::Value::String(id) if key == ID_KEY => record.id = Some(id),
            value => {
                record.fields.insert(key, json_value_to_value(value));
            }
        }
    }

    record
}

/// Converts a serde_json::Value to our Value enum.
fn json_value_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                match i32::try_from(i) {
                    Ok(small) => Value::Int(small),
                    Err(_) => Value::Long(i),
                }
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(serde_json::Value::Number(n))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Object(obj) => Value::Record(Box::new(record_from_object(obj))),
        arr @ serde_json::Value::Array(_) => Value::Json(arr),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_deserialize_log_row() {
        let json = r#"{
            "attributes": {"type": "Log__c", "url": "/services/data/v59.0/sobjects/Log__c/a01"},
            "Id": "a01000000000001",
            "Name": "LOG-0001",
            "Level__c": "ERROR",
            "Line__c": 12
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.object_name(), "Log__c");
        assert_eq!(record.id(), Some("a01000000000001"));
        assert_eq!(record.name(), Some("LOG-0001"));
        assert_eq!(record.get_int("Line__c").unwrap(), Some(12));
        assert!(!record.contains("attributes"));
        assert!(!record.contains("Id"));
    }

    #[test]
    fn test_deserialize_relationship_as_nested_record() {
        let json = r#"{
            "Id": "a01",
            "LoggedBy__c": "005A",
            "LoggedBy__r": {"attributes": {"type": "User"}, "Id": "005A", "Name": "Ada"}
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let nested = record.get_record("LoggedBy__r").unwrap().unwrap();
        assert_eq!(nested.object_name(), "User");
        assert_eq!(nested.name(), Some("Ada"));
    }

    #[test]
    fn test_deserialize_host_datetime_formats() {
        let json = r#"{
            "LoggedAt__c": "2024-03-01T09:30:00.000+0000",
            "CreatedDate": "2024-03-01T09:30:00Z",
            "Body__c": "2024 was a good year"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();

        assert_eq!(record.get_datetime("LoggedAt__c").unwrap(), Some(expected));
        assert_eq!(record.get_datetime("CreatedDate").unwrap(), Some(expected));
        assert_eq!(
            record.get_string("Body__c").unwrap(),
            Some("2024 was a good year")
        );
    }

    #[test]
    fn test_timestamp_text_in_free_text_field_kept_verbatim() {
        let json = r#"{"Id": "a01", "Body__c": "2024-03-01T09:30:00Z"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(
            record.get_string("Body__c").unwrap(),
            Some("2024-03-01T09:30:00Z")
        );
        let written = serde_json::to_string(&record).unwrap();
        assert!(written.contains(r#""Body__c":"2024-03-01T09:30:00Z""#));
    }

    #[test]
    fn test_serialize_skips_nulls_and_writes_metadata() {
        let record = Record::with_id("Log__c", "a01")
            .set("Name", "LOG-0001")
            .set("Context__c", Value::Null);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"attributes":{"type":"Log__c"},"Id":"a01","Name":"LOG-0001"}"#
        );
    }
}
