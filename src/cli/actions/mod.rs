pub mod check;

use crate::checks::thresholds::Levels;
use std::path::PathBuf;

/// How to reach the instance: the flags every subcommand shares.
#[derive(Debug, Clone)]
pub struct ConnectionOpts {
    pub credential_file: PathBuf,
    pub instance: String,
    pub mongo_bin: PathBuf,
}

/// The work selected on the command line.
#[derive(Debug)]
pub enum Action {
    /// Size and object counts of one database, via `db.stats()`.
    DbSize {
        opts: ConnectionOpts,
        database: String,
        size: Levels,
        objects: Levels,
    },
    /// Instance health via `db.serverStatus()` on the legacy shell.
    Stats { opts: ConnectionOpts },
    /// Instance health via `db.serverStatus()` on mongosh.
    MongoshStats { opts: ConnectionOpts },
}
