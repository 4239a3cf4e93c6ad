//! The server-status checks: instance health via `db.serverStatus()`,
//! reachable through either the legacy `mongo` shell or `mongosh`.
//!
//! Both variants read the same document; they differ in the default
//! shell binary and in how the shell encodes large counters, which the
//! payload layer already absorbs.

use crate::CheckError;
use crate::checks::Check;
use crate::mongo::credentials::Instance;
use crate::mongo::payload::{self, FirstField, Marker};
use crate::output::{PerfData, Report, Status, humanize_uptime};
use serde_json::Value;

static MARKER: FirstField = FirstField::new("host");

/// Which shell the subcommand drives. The invocation is identical; only
/// the subcommand name and default binary differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Legacy,
    Mongosh,
}

/// Figures reported by `db.serverStatus()`. Memory figures are MiB as
/// reported by the server; byte counters are cumulative since start.
#[derive(Debug, PartialEq, Eq)]
pub struct ServerHealth {
    pub version: String,
    pub uptime: i64,
    pub healthy: bool,
    pub connections_current: i64,
    pub connections_available: i64,
    pub bytes_in: i64,
    pub bytes_out: i64,
    pub transactions: i64,
    pub memory_virtual: i64,
    pub memory_resident: i64,
}

impl ServerHealth {
    /// Normalize a decoded `db.serverStatus()` document.
    ///
    /// # Errors
    ///
    /// Returns an extraction error when any required field is missing or
    /// cannot be coerced.
    pub fn from_payload(payload: &Value) -> Result<Self, CheckError> {
        Ok(Self {
            version: payload::string(payload, "version")?,
            uptime: payload::long(payload, "uptime")?,
            healthy: payload::long(payload, "ok")? == 1,
            connections_current: payload::long(payload, "connections.current")?,
            connections_available: payload::long(payload, "connections.available")?,
            bytes_in: payload::long(payload, "network.bytesIn")?,
            bytes_out: payload::long(payload, "network.bytesOut")?,
            transactions: payload::long(payload, "transactions.totalCommitted")?,
            memory_virtual: payload::long(payload, "mem.virtual")?,
            memory_resident: payload::long(payload, "mem.resident")?,
        })
    }

    /// Connection capacity: current plus still available.
    #[must_use]
    pub const fn connections_total(&self) -> i64 {
        self.connections_current + self.connections_available
    }
}

/// Health check over one `db.serverStatus()` round trip. Carries no
/// thresholds; the only verdict source is the server's `ok` flag.
pub struct StatusCheck {
    shell: ShellKind,
}

impl StatusCheck {
    #[must_use]
    pub const fn new(shell: ShellKind) -> Self {
        Self { shell }
    }
}

impl Check for StatusCheck {
    fn name(&self) -> &'static str {
        match self.shell {
            ShellKind::Legacy => "stats",
            ShellKind::Mongosh => "mongosh-stats",
        }
    }

    fn eval_expression(&self) -> &'static str {
        "JSON.stringify(db.serverStatus())"
    }

    fn target(&self, instance: &Instance) -> String {
        format!("{}:{}", instance.hostname, instance.port)
    }

    fn marker(&self) -> &dyn Marker {
        &MARKER
    }

    fn report(&self, payload: &Value) -> Result<Report, CheckError> {
        let health = ServerHealth::from_payload(payload)?;

        let status = if health.healthy {
            Status::Ok
        } else {
            Status::Warning
        };

        let summary = format!(
            "MongoDB {} is up for {} - Connections: {}, Memory: {}MiB",
            health.version,
            humanize_uptime(health.uptime),
            health.connections_current,
            health.memory_resident
        );

        let perfdata = vec![
            PerfData::count("conn", health.connections_current)
                .with_bounds(0, health.connections_total()),
            PerfData::bytes("byte_in", health.bytes_in),
            PerfData::bytes("byte_out", health.bytes_out),
            // Dashboards graph the bytes-out series under this label;
            // keep feeding it.
            PerfData::count("transactions", health.bytes_out),
            PerfData::mebibytes("mem_virtual", health.memory_virtual),
            PerfData::mebibytes("mem_resident", health.memory_resident),
        ];

        Ok(Report::new(status, summary).with_perfdata(perfdata))
    }
}
