//! Plugin output: severities, the status line, and perfdata rendering.
//!
//! A monitoring supervisor reads exactly one stdout line per run,
//! `<SEVERITY> - <summary> | <perfdata>`, and maps the process exit code
//! back to a service state. Everything in this module exists to produce
//! that line.

use std::fmt;

pub mod perfdata;

pub use perfdata::PerfData;

/// Service states in supervisor order. The discriminants are the exit
/// codes, and the derived ordering lets a set of verdicts be folded with
/// `max` so the worst one decides the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Process exit code expected by the supervisor.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// One finished check run: severity, summary text and perfdata tokens.
///
/// Displays as the single line the supervisor consumes. Failure reports
/// carry no perfdata, so an `UNKNOWN` line is always just the message.
#[derive(Debug)]
pub struct Report {
    status: Status,
    summary: String,
    perfdata: Vec<PerfData>,
}

impl Report {
    #[must_use]
    pub fn new(status: Status, summary: impl Into<String>) -> Self {
        Self {
            status,
            summary: summary.into(),
            perfdata: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_perfdata(mut self, perfdata: Vec<PerfData>) -> Self {
        self.perfdata = perfdata;
        self
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.status, self.summary)?;
        let mut separator = " | ";
        for token in &self.perfdata {
            write!(f, "{separator}{token}")?;
            separator = " ";
        }
        Ok(())
    }
}

/// Scale a byte count to the largest binary unit it fills, with at most
/// two decimals and trailing zeros trimmed. Values under 1 KiB stay as a
/// plain byte count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn humanize_bytes(bytes: i64) -> String {
    const STEPS: [(i64, &str); 4] = [
        (1 << 40, "TiB"),
        (1 << 30, "GiB"),
        (1 << 20, "MiB"),
        (1 << 10, "KiB"),
    ];

    for (step, unit) in STEPS {
        if bytes >= step {
            let scaled = format!("{:.2}", bytes as f64 / step as f64);
            let scaled = scaled.trim_end_matches('0').trim_end_matches('.');
            return format!("{scaled}{unit}");
        }
    }

    format!("{bytes}B")
}

/// Format an uptime in seconds the way a human reads it, keeping the
/// three most significant parts.
#[must_use]
pub fn humanize_uptime(seconds: i64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else {
        format!("{minutes}m {secs}s")
    }
}
