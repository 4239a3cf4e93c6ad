//! The `dbsize` check: size and object counts of one database, queried
//! with `db.stats()`.

use crate::CheckError;
use crate::checks::Check;
use crate::checks::thresholds::{Levels, worst_of};
use crate::mongo::credentials::Instance;
use crate::mongo::payload::{self, FirstField, Marker};
use crate::output::{PerfData, Report, humanize_bytes};
use serde_json::Value;

static MARKER: FirstField = FirstField::new("db");

/// Figures reported by `db.stats()` for one database. Sizes are bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct DatabaseUsage {
    pub name: String,
    pub collections: i64,
    pub views: i64,
    pub objects: i64,
    pub indexes: i64,
    pub storage_size: i64,
    pub index_size: i64,
    pub data_size: i64,
}

impl DatabaseUsage {
    /// Normalize a decoded `db.stats()` document.
    ///
    /// # Errors
    ///
    /// Returns an extraction error when any required field is missing or
    /// cannot be coerced.
    pub fn from_payload(payload: &Value) -> Result<Self, CheckError> {
        Ok(Self {
            name: payload::string(payload, "db")?,
            collections: payload::long(payload, "collections")?,
            views: payload::long(payload, "views")?,
            objects: payload::long(payload, "objects")?,
            indexes: payload::long(payload, "indexes")?,
            storage_size: payload::long(payload, "storageSize")?,
            index_size: payload::long(payload, "indexSize")?,
            data_size: payload::long(payload, "dataSize")?,
        })
    }

    /// Total footprint: collection storage plus index storage.
    #[must_use]
    pub const fn total_size(&self) -> i64 {
        self.storage_size + self.index_size
    }
}

/// Checks one database's total size against `--wsize`/`--csize` and its
/// object count against `--wobj`/`--cobj`.
pub struct DbSize {
    database: String,
    size: Levels,
    objects: Levels,
}

impl DbSize {
    #[must_use]
    pub fn new(database: String, size: Levels, objects: Levels) -> Self {
        Self {
            database,
            size,
            objects,
        }
    }
}

impl Check for DbSize {
    fn name(&self) -> &'static str {
        "dbsize"
    }

    fn eval_expression(&self) -> &'static str {
        "JSON.stringify(db.stats())"
    }

    fn target(&self, instance: &Instance) -> String {
        format!("{}:{}/{}", instance.hostname, instance.port, self.database)
    }

    fn marker(&self) -> &dyn Marker {
        &MARKER
    }

    fn report(&self, payload: &Value) -> Result<Report, CheckError> {
        let usage = DatabaseUsage::from_payload(payload)?;
        let total_size = usage.total_size();

        let status = worst_of([
            self.size.verdict(total_size),
            self.objects.verdict(usage.objects),
        ]);

        let summary = format!(
            "Database \"{}\" contains: {} Collections, {} Views, {} Objects, {} Indexes. Size: {}",
            usage.name,
            usage.collections,
            usage.views,
            usage.objects,
            usage.indexes,
            humanize_bytes(total_size)
        );

        let perfdata = vec![
            PerfData::count("collections", usage.collections),
            PerfData::count("views", usage.views),
            PerfData::count("objects", usage.objects)
                .with_thresholds(self.objects.warn, self.objects.crit),
            PerfData::count("indexes", usage.indexes),
            PerfData::bytes("storage_size", usage.storage_size),
            PerfData::bytes("data_size", usage.data_size),
            PerfData::bytes("total_size", total_size).with_thresholds(self.size.warn, self.size.crit),
        ];

        Ok(Report::new(status, summary).with_perfdata(perfdata))
    }
}
