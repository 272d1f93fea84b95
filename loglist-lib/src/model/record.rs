//! Dynamic log record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;

use super::Value;
use super::types::EntityReference;
use crate::error::FieldError;

/// Field holding a record's display name.
pub const NAME_FIELD: &str = "Name";

/// A dynamic record delivered by a data source.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. The list never changes a record's source fields;
/// decoration produces new records instead.
///
/// # Example
///
/// ```
/// use loglist_lib::model::Record;
///
/// let record = Record::with_id("Log__c", "a01000000000001")
///     .set("Name", "LOG-0001")
///     .set("Level__c", "ERROR");
///
/// assert_eq!(record.get_string("Level__c").unwrap(), Some("ERROR"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The object type of the record (e.g. "Log__c").
    pub(crate) object_name: String,

    /// The unique identifier of the record.
    pub(crate) id: Option<String>,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record for the given object type.
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            id: None,
            fields: HashMap::new(),
        }
    }

    /// Creates a new record with the given ID.
    pub fn with_id(object_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Returns the object type name.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the record ID, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the record's `Name` field, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME_FIELD).and_then(Value::as_str)
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Missing field and wrong type are errors; Ok(None) means the field is
    // present but null.
    // =========================================================================

    fn typed<'a, T>(
        &'a self,
        field: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, FieldError> {
        let value = self
            .fields
            .get(field)
            .ok_or_else(|| FieldError::missing(field))?;
        if value.is_null() {
            return Ok(None);
        }
        extract(value)
            .map(Some)
            .ok_or_else(|| FieldError::type_mismatch(field, expected, value.type_name()))
    }

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        self.typed(field, "string", Value::as_str)
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        self.typed(field, "int", |value| match value {
            Value::Int(n) => Some(*n),
            _ => None,
        })
    }

    /// Gets a 64-bit integer, widening `Int`.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "long", |value| match value {
            Value::Long(n) => Some(*n),
            Value::Int(n) => Some(i64::from(*n)),
            _ => None,
        })
    }

    /// Gets a timestamp (`LoggedAt__c`), parsing host date-time strings.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        self.typed(field, "datetime", Value::as_datetime)
    }

    /// Gets a nested relationship record (`LoggedBy__r`).
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        self.typed(field, "record", |value| match value {
            Value::Record(record) => Some(record.as_ref()),
            _ => None,
        })
    }

    /// Resolves a lookup into an [`EntityReference`].
    ///
    /// `relationship` names the nested record (`LoggedBy__r`), `id_field` the
    /// lookup id (`LoggedBy__c`). The id falls back to the nested record's own
    /// id. Returns `None` when neither yields an id.
    pub fn reference(&self, relationship: &str, id_field: &str) -> Option<EntityReference> {
        let nested = self.get_record(relationship).ok().flatten();
        let id = self
            .get_string(id_field)
            .ok()
            .flatten()
            .or_else(|| nested.and_then(Record::id))?;

        let object_name = nested.map(Record::object_name).unwrap_or_default();
        Some(match nested.and_then(Record::name) {
            Some(name) => EntityReference::with_name(object_name, id, name),
            None => EntityReference::new(object_name, id),
        })
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new("")
    }
}
