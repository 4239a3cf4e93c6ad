use crate::checks::thresholds::Levels;
use crate::cli::actions::{Action, ConnectionOpts};
use anyhow::{Result, anyhow};
use clap::ArgMatches;
use std::path::PathBuf;

/// Map parsed arguments onto the action to run.
///
/// # Errors
///
/// Returns an error if required arguments are missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("dbsize", sub)) => {
            let database = sub
                .get_one::<String>("database")
                .cloned()
                .ok_or_else(|| anyhow!("A database is required. Please provide it using the --database flag."))?;

            Ok(Action::DbSize {
                opts: connection_opts(sub)?,
                database,
                size: Levels::new(threshold(sub, "wsize"), threshold(sub, "csize")),
                objects: Levels::new(threshold(sub, "wobj"), threshold(sub, "cobj")),
            })
        }
        Some(("stats", sub)) => Ok(Action::Stats {
            opts: connection_opts(sub)?,
        }),
        Some(("mongosh-stats", sub)) => Ok(Action::MongoshStats {
            opts: connection_opts(sub)?,
        }),
        _ => Err(anyhow!("a check subcommand is required")),
    }
}

fn threshold(matches: &ArgMatches, name: &str) -> Option<i64> {
    matches.get_one::<i64>(name).copied()
}

fn connection_opts(matches: &ArgMatches) -> Result<ConnectionOpts> {
    let credential_file = matches
        .get_one::<PathBuf>("credentialfile")
        .cloned()
        .ok_or_else(|| anyhow!("A credential file is required. Please provide it using the --credentialfile flag."))?;

    let instance = matches
        .get_one::<String>("instance")
        .cloned()
        .ok_or_else(|| anyhow!("An instance is required. Please provide it using the --instance flag."))?;

    let mongo_bin = matches
        .get_one::<PathBuf>("mongobin")
        .cloned()
        .ok_or_else(|| anyhow!("A shell binary is required. Please provide it using the --mongobin flag."))?;

    Ok(ConnectionOpts {
        credential_file,
        instance,
        mongo_bin,
    })
}
