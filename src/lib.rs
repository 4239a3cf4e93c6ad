//! Icinga/Nagios checks for `MongoDB` instances.
//!
//! Each check resolves connection settings for a named instance from a
//! credential file, drives the `mongo` or `mongosh` shell to serialize a
//! statistics document, normalizes the payload, evaluates thresholds and
//! prints one supervisor-compliant status line, exiting with the matching
//! code (OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3).

pub mod checks;
pub mod cli;
pub mod mongo;
pub mod output;

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Everything that can abort a run before a verdict exists.
///
/// Every variant surfaces as `UNKNOWN - <message>` on stdout and exit
/// code 3; WARNING and CRITICAL are reserved for evaluated thresholds.
/// The variants fall into four classes: configuration (credential store),
/// acquisition (shell invocation), decoding (payload selection and JSON
/// syntax) and extraction (required fields).
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot read credential file {}: {source}", path.display())]
    CredentialFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential file {} is not valid TOML: {source}", path.display())]
    CredentialFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("instance `{instance}` not found in credential file {}", path.display())]
    UnknownInstance { instance: String, path: PathBuf },

    #[error("failed to run {}: {source}", bin.display())]
    ShellLaunch {
        bin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-zero shell exit. Both captured streams are carried verbatim:
    /// the shells put the useful part of a connection failure on either
    /// one, depending on version.
    #[error("mongo shell failed ({status}): {stderr}\n{stdout}")]
    ShellFailed {
        status: ExitStatus,
        stderr: String,
        stdout: String,
    },

    #[error("no statistics payload found in shell output")]
    PayloadMissing,

    #[error("statistics payload is not valid JSON: {source}")]
    PayloadSyntax {
        #[source]
        source: serde_json::Error,
    },

    #[error("field `{field}` missing from server response")]
    FieldMissing { field: &'static str },

    #[error("field `{field}` in server response is not {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },
}
