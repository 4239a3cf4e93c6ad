use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Credential file with one fully specified instance and one relying on defaults.
#[allow(dead_code)]
pub const CREDENTIALS: &str = r#"
[replica-a]
hostname = "db1.example.com"
port = 27018
user = "monitoring"
pw = "secret"
authdb = "ops"
tls = false

[localhost]
"#;

/// `db.stats()` answer the way the shells print it, mixed numeric encodings included.
#[allow(dead_code)]
pub const DBSIZE_PAYLOAD: &str = r#"{"db":"app","collections":3,"views":1,"objects":50000,"avgObjSize":123.4,"dataSize":{"$numberLong":"900000000"},"storageSize":1000000000,"indexes":5,"indexSize":500000000,"ok":1}"#;

/// `db.serverStatus()` answer trimmed to the fields the status checks read.
#[allow(dead_code)]
pub const STATUS_PAYLOAD: &str = r#"{"host":"db1.example.com","version":"4.4.29","uptime":266822,"connections":{"current":5,"available":100},"network":{"bytesIn":{"$numberLong":"123"},"bytesOut":{"$numberLong":"777"}},"transactions":{"totalCommitted":42},"mem":{"virtual":2048,"resident":1024},"ok":1}"#;

/// Wrap a payload line in the connection banner the legacy shell prints around it.
#[allow(dead_code)]
pub fn shell_transcript(payload: &str) -> String {
    format!(
        "MongoDB shell version v4.4.29\n\
         connecting to: mongodb://db1.example.com:27018/?compressors=disabled\n\
         Implicit session: session {{ \"id\" : UUID(\"9cf0b988\") }}\n\
         MongoDB server version: 4.4.29\n\
         {payload}\n"
    )
}

#[allow(dead_code)]
pub fn write_credentials(dir: &Path, body: &str) -> Result<PathBuf> {
    let path = dir.join(".mdbservice");
    fs::write(&path, body)?;
    Ok(path)
}

/// Stand-in for a mongo shell: prints `stdout` and `stderr`, then exits with `code`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_shell(dir: &Path, name: &str, stdout: &str, stderr: &str, code: i32) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    // Heredoc terminators must sit on their own line.
    fn block(text: &str) -> String {
        if text.is_empty() || text.ends_with('\n') {
            text.to_string()
        } else {
            format!("{text}\n")
        }
    }

    let path = dir.join(name);
    let out = block(stdout);
    let err = block(stderr);
    let script =
        format!("#!/bin/sh\ncat <<'OUT'\n{out}OUT\ncat >&2 <<'ERR'\n{err}ERR\nexit {code}\n");

    fs::write(&path, script)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

    Ok(path)
}
