//! Driving the `mongo` / `mongosh` binary for one statistics run.

use crate::CheckError;
use crate::mongo::credentials::Instance;
use secrecy::ExposeSecret;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// One non-interactive shell run: `<bin> <target> --quiet --eval <expr>`
/// plus whatever authentication and TLS arguments the instance needs.
///
/// The shell is always started from an argument vector, never a
/// shell-interpreted string, and its exit status is inspected rather
/// than trusted to raise.
pub struct Invocation<'a> {
    bin: &'a Path,
    target: String,
    eval: &'a str,
    instance: &'a Instance,
}

impl<'a> Invocation<'a> {
    #[must_use]
    pub fn new(bin: &'a Path, target: String, eval: &'a str, instance: &'a Instance) -> Self {
        Self {
            bin,
            target,
            eval,
            instance,
        }
    }

    /// The full argument vector, password included. Auth arguments are
    /// only present when both user and password are set; TLS relaxation
    /// arguments only when TLS is on.
    #[must_use]
    pub fn command_line(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            self.target.clone().into(),
            "--quiet".into(),
            "--eval".into(),
            self.eval.into(),
        ];

        if !self.instance.user.is_empty() && !self.instance.password.expose_secret().is_empty() {
            args.push("-u".into());
            args.push(self.instance.user.clone().into());
            args.push("-p".into());
            args.push(self.instance.password.expose_secret().into());
            args.push("--authenticationDatabase".into());
            args.push(self.instance.auth_database.clone().into());
        }

        if self.instance.tls {
            args.push("--tls".into());

            if let Some(ca_file) = &self.instance.tls_ca_file {
                args.push("--tlsCAFile".into());
                args.push(ca_file.clone().into());
            }
            if self.instance.tls_allow_invalid_hostnames {
                args.push("--tlsAllowInvalidHostnames".into());
            }
            if self.instance.tls_allow_invalid_certificates {
                args.push("--tlsAllowInvalidCertificates".into());
            }
        }

        args
    }

    /// Run the shell and hand back its stdout.
    ///
    /// # Errors
    ///
    /// Returns an acquisition error when the binary cannot be started,
    /// or when it exits non-zero; the latter carries both captured
    /// streams verbatim.
    pub fn run(&self) -> Result<String, CheckError> {
        debug!(
            bin = %self.bin.display(),
            target = %self.target,
            "querying instance statistics"
        );

        let output = Command::new(self.bin)
            .args(self.command_line())
            .output()
            .map_err(|source| CheckError::ShellLaunch {
                bin: self.bin.to_path_buf(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            return Err(CheckError::ShellFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                stdout,
            });
        }

        debug!(bytes = stdout.len(), "captured shell output");

        Ok(stdout)
    }
}
