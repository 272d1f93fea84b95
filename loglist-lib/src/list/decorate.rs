//! Display-only fields derived from raw rows.

use serde::Deserialize;
use serde::Serialize;

use crate::model::types::record_url;
use crate::model::{LOG_URL_FIELD, LOGGED_BY_NAME_FIELD, LOGGED_BY_URL_FIELD, Record};

/// Which derived fields to add to each row, and where they come from.
///
/// Every row gets a detail link built from its id, plus the display name
/// and link of a related record pulled from a relationship lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decoration {
    /// Output field for the row's own detail link.
    pub url_field: String,
    /// Nested relationship object holding the related record.
    pub relationship: String,
    /// Field holding the related record's id.
    pub relationship_id_field: String,
    /// Output field for the related record's display name.
    pub related_name_field: String,
    /// Output field for the related record's detail link.
    pub related_url_field: String,
}

impl Default for Decoration {
    fn default() -> Self {
        Self::logged_by()
    }
}

impl Decoration {
    /// Denormalizes the `LoggedBy__r` lookup into `LoggedByName`/`LoggedByUrl`.
    pub fn logged_by() -> Self {
        Self {
            url_field: LOG_URL_FIELD.to_string(),
            relationship: "LoggedBy__r".to_string(),
            relationship_id_field: "LoggedBy__c".to_string(),
            related_name_field: LOGGED_BY_NAME_FIELD.to_string(),
            related_url_field: LOGGED_BY_URL_FIELD.to_string(),
        }
    }

    /// Denormalizes the standard `CreatedBy` lookup into
    /// `CreatedByName`/`CreatedByUrl`.
    pub fn created_by() -> Self {
        Self {
            url_field: LOG_URL_FIELD.to_string(),
            relationship: "CreatedBy".to_string(),
            relationship_id_field: "CreatedById".to_string(),
            related_name_field: "CreatedByName".to_string(),
            related_url_field: "CreatedByUrl".to_string(),
        }
    }

    /// Decorates every row, leaving the inputs untouched.
    pub fn decorate(&self, rows: &[Record]) -> Vec<Record> {
        rows.iter().map(|row| self.decorate_record(row)).collect()
    }

    /// Returns a copy of `row` carrying the derived fields.
    ///
    /// A missing id or lookup degrades to an empty string rather than
    /// failing the row.
    pub fn decorate_record(&self, row: &Record) -> Record {
        let mut decorated = row.clone();
        let url = row.id().map(record_url).unwrap_or_default();
        // The host may send the nested name without any lookup id.
        let related_name = row
            .get_record(&self.relationship)
            .ok()
            .flatten()
            .and_then(Record::name)
            .unwrap_or_default()
            .to_string();
        let related_url = row
            .reference(&self.relationship, &self.relationship_id_field)
            .map(|r| r.url())
            .unwrap_or_default();

        decorated.insert(self.url_field.as_str(), url);
        decorated.insert(self.related_name_field.as_str(), related_name);
        decorated.insert(self.related_url_field.as_str(), related_url);
        decorated
    }
}
