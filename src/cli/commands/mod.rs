use clap::{Arg, Command, value_parser};
use std::path::PathBuf;

pub const DEFAULT_CREDENTIAL_FILE: &str = "/etc/nagios/.mdbservice";
pub const DEFAULT_MONGO_BIN: &str = "/usr/bin/mongo";
pub const DEFAULT_MONGOSH_BIN: &str = "/usr/bin/mongosh";

#[must_use]
pub fn new() -> Command {
    Command::new("check_mongodb")
        .about("Icinga/Nagios checks for MongoDB instances, driven through the mongo and mongosh shells")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dbsize())
        .subcommand(stats())
        .subcommand(mongosh_stats())
}

fn dbsize() -> Command {
    add_connection_args(
        Command::new("dbsize").about("Check the size and object counts of one database"),
        DEFAULT_MONGO_BIN,
    )
    .arg(
        Arg::new("database")
            .long("database")
            .value_name("NAME")
            .required(true)
            .help("Database to check"),
    )
    .arg(
        Arg::new("wsize")
            .long("wsize")
            .value_name("BYTES")
            .value_parser(value_parser!(i64))
            .help("Warning threshold for the total database size, in bytes"),
    )
    .arg(
        Arg::new("csize")
            .long("csize")
            .value_name("BYTES")
            .value_parser(value_parser!(i64))
            .help("Critical threshold for the total database size, in bytes"),
    )
    .arg(
        Arg::new("wobj")
            .long("wobj")
            .value_name("COUNT")
            .value_parser(value_parser!(i64))
            .help("Warning threshold for the object count"),
    )
    .arg(
        Arg::new("cobj")
            .long("cobj")
            .value_name("COUNT")
            .value_parser(value_parser!(i64))
            .help("Critical threshold for the object count"),
    )
}

fn stats() -> Command {
    add_connection_args(
        Command::new("stats").about("Check instance health via the legacy mongo shell"),
        DEFAULT_MONGO_BIN,
    )
}

fn mongosh_stats() -> Command {
    add_connection_args(
        Command::new("mongosh-stats").about("Check instance health via mongosh"),
        DEFAULT_MONGOSH_BIN,
    )
}

/// Connection flags shared by every subcommand.
fn add_connection_args(cmd: Command, default_bin: &'static str) -> Command {
    cmd.arg(
        Arg::new("credentialfile")
            .long("credentialfile")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_CREDENTIAL_FILE)
            .env("CHECK_MONGODB_CREDENTIALFILE")
            .help("Credential file mapping instance names to connection settings"),
    )
    .arg(
        Arg::new("instance")
            .long("instance")
            .value_name("NAME")
            .default_value("localhost")
            .env("CHECK_MONGODB_INSTANCE")
            .help("Instance entry to use from the credential file"),
    )
    .arg(
        Arg::new("mongobin")
            .long("mongobin")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .default_value(default_bin)
            .help("Shell binary used to query the instance"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_dbsize_connection_defaults() {
        let matches = new()
            .try_get_matches_from(vec!["check_mongodb", "dbsize", "--database", "app"])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "dbsize");
        assert_eq!(
            sub.get_one::<PathBuf>("credentialfile"),
            Some(&PathBuf::from(DEFAULT_CREDENTIAL_FILE))
        );
        assert_eq!(sub.get_one::<String>("instance"), Some(&"localhost".to_string()));
        assert_eq!(
            sub.get_one::<PathBuf>("mongobin"),
            Some(&PathBuf::from(DEFAULT_MONGO_BIN))
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_mongosh_stats_defaults_to_the_modern_shell() {
        let matches = new()
            .try_get_matches_from(vec!["check_mongodb", "mongosh-stats"])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "mongosh-stats");
        assert_eq!(
            sub.get_one::<PathBuf>("mongobin"),
            Some(&PathBuf::from(DEFAULT_MONGOSH_BIN))
        );
    }

    #[test]
    fn test_dbsize_requires_a_database() {
        let result = new().try_get_matches_from(vec!["check_mongodb", "dbsize"]);

        assert!(result.is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_threshold_flags_parse_as_integers() {
        let matches = new()
            .try_get_matches_from(vec![
                "check_mongodb",
                "dbsize",
                "--database",
                "app",
                "--wsize",
                "1000000000",
                "--csize",
                "2000000000",
                "--wobj",
                "50000",
            ])
            .unwrap();

        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<i64>("wsize"), Some(&1_000_000_000));
        assert_eq!(sub.get_one::<i64>("csize"), Some(&2_000_000_000));
        assert_eq!(sub.get_one::<i64>("wobj"), Some(&50_000));
        assert_eq!(sub.get_one::<i64>("cobj"), None);
    }

    #[test]
    fn test_a_subcommand_is_required() {
        let result = new().try_get_matches_from(vec!["check_mongodb"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_stats_rejects_size_thresholds() {
        let result =
            new().try_get_matches_from(vec!["check_mongodb", "stats", "--wsize", "1000"]);

        assert!(result.is_err());
    }
}
