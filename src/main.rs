use check_mongodb::cli::{actions::check, commands, dispatch};
use check_mongodb::output::{Report, Status};
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so the status line on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = commands::new().get_matches();

    let report = match dispatch::handler(&matches) {
        Ok(action) => check::handle(action),
        Err(error) => Report::new(Status::Unknown, error.to_string()),
    };

    println!("{report}");
    std::process::exit(report.status().code());
}
