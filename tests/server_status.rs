#![cfg(unix)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]
use anyhow::Result;
use check_mongodb::cli::actions::{Action, ConnectionOpts, check};
use check_mongodb::output::Status;
use std::path::PathBuf;

mod common;

const EXPECTED_OK_LINE: &str = "OK - MongoDB 4.4.29 is up for 3d 2h 7m - Connections: 5, \
     Memory: 1024MiB | 'conn'=5;;;0;105 'byte_in'=123B;;;; 'byte_out'=777B;;;; \
     'transactions'=777;;;; 'mem_virtual'=2048MiB;;;; 'mem_resident'=1024MiB;;;;";

fn opts(mongo_bin: PathBuf, credential_file: PathBuf) -> ConnectionOpts {
    ConnectionOpts {
        credential_file,
        instance: "replica-a".to_string(),
        mongo_bin,
    }
}

#[test]
fn test_stats_reports_ok_for_a_healthy_server() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let credentials = common::write_credentials(dir.path(), common::CREDENTIALS)?;
    let shell = common::fake_shell(
        dir.path(),
        "mongo",
        &common::shell_transcript(common::STATUS_PAYLOAD),
        "",
        0,
    )?;

    let report = check::handle(Action::Stats {
        opts: opts(shell, credentials),
    });

    assert_eq!(report.status(), Status::Ok);
    assert_eq!(report.to_string(), EXPECTED_OK_LINE);

    Ok(())
}

#[test]
fn test_stats_warns_when_the_server_reports_unhealthy() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let credentials = common::write_credentials(dir.path(), common::CREDENTIALS)?;
    let unhealthy = common::STATUS_PAYLOAD.replace("\"ok\":1", "\"ok\":0");
    let shell = common::fake_shell(
        dir.path(),
        "mongo",
        &common::shell_transcript(&unhealthy),
        "",
        0,
    )?;

    let report = check::handle(Action::Stats {
        opts: opts(shell, credentials),
    });

    assert_eq!(report.status(), Status::Warning);
    assert!(report.to_string().starts_with("WARNING - MongoDB 4.4.29"));

    Ok(())
}

#[test]
fn test_mongosh_stats_renders_the_same_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let credentials = common::write_credentials(dir.path(), common::CREDENTIALS)?;
    let shell = common::fake_shell(
        dir.path(),
        "mongosh",
        &common::shell_transcript(common::STATUS_PAYLOAD),
        "",
        0,
    )?;

    let report = check::handle(Action::MongoshStats {
        opts: opts(shell, credentials),
    });

    assert_eq!(report.status(), Status::Ok);
    assert_eq!(report.to_string(), EXPECTED_OK_LINE);

    Ok(())
}

#[test]
fn test_stats_reports_unknown_on_a_garbled_payload() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let credentials = common::write_credentials(dir.path(), common::CREDENTIALS)?;
    let shell = common::fake_shell(
        dir.path(),
        "mongo",
        "MongoDB shell version v4.4.29\n{\"host\":\"db1\n",
        "",
        0,
    )?;

    let report = check::handle(Action::Stats {
        opts: opts(shell, credentials),
    });

    assert_eq!(report.status(), Status::Unknown);
    assert!(report.to_string().contains("not valid JSON"));

    Ok(())
}
