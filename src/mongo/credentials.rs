//! The credential store: a TOML file mapping instance names to
//! connection settings, usually `/etc/nagios/.mdbservice` readable only
//! by the monitoring user.
//!
//! ```toml
//! [localhost]
//! user = "monitoring"
//! pw = "secret"
//!
//! [replica-a]
//! hostname = "mongo-a.internal"
//! port = 27018
//! tls = false
//! ```

use crate::CheckError;
use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One instance table as written in the file, before defaults. Every key
/// is optional; unknown keys are ignored.
#[derive(Clone, Default, Deserialize)]
pub struct Entry {
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub pw: Option<String>,
    pub authdb: Option<String>,
    pub tls: Option<bool>,
    pub tlscafile: Option<PathBuf>,
    pub tls_allow_invalid_hostnames: Option<bool>,
    pub tls_allow_invalid_certificates: Option<bool>,
}

/// Connection settings for one instance with every default applied.
///
/// An empty user or password means the instance is queried without
/// authentication.
#[derive(Debug)]
pub struct Instance {
    pub hostname: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub auth_database: String,
    pub tls: bool,
    pub tls_ca_file: Option<PathBuf>,
    pub tls_allow_invalid_hostnames: bool,
    pub tls_allow_invalid_certificates: bool,
}

impl From<Entry> for Instance {
    /// Fill the gaps of a partial entry: local unauthenticated instance
    /// on the standard port, `admin` auth database, TLS on with strict
    /// verification.
    fn from(entry: Entry) -> Self {
        Self {
            hostname: entry.hostname.unwrap_or_else(|| "localhost".to_string()),
            port: entry.port.unwrap_or(27017),
            user: entry.user.unwrap_or_default(),
            password: SecretString::from(entry.pw.unwrap_or_default()),
            auth_database: entry.authdb.unwrap_or_else(|| "admin".to_string()),
            tls: entry.tls.unwrap_or(true),
            tls_ca_file: entry.tlscafile,
            tls_allow_invalid_hostnames: entry.tls_allow_invalid_hostnames.unwrap_or(false),
            tls_allow_invalid_certificates: entry.tls_allow_invalid_certificates.unwrap_or(false),
        }
    }
}

/// The loaded store, keeping its source path for error messages.
pub struct Store {
    path: PathBuf,
    entries: HashMap<String, Entry>,
}

impl Store {
    /// Read and parse the credential file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read (also
    /// the absent-file case) or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let raw = fs::read_to_string(path).map_err(|source| CheckError::CredentialFile {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: HashMap<String, Entry> =
            toml::from_str(&raw).map_err(|source| CheckError::CredentialFormat {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            instances = entries.len(),
            "loaded credential store"
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Look up one instance and apply the defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the instance and the store
    /// path when the name has no entry.
    pub fn resolve(&self, instance: &str) -> Result<Instance, CheckError> {
        self.entries
            .get(instance)
            .cloned()
            .map(Instance::from)
            .ok_or_else(|| CheckError::UnknownInstance {
                instance: instance.to_string(),
                path: self.path.clone(),
            })
    }
}
