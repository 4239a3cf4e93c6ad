use crate::CheckError;
use crate::checks::Check;
use crate::checks::dbsize::DbSize;
use crate::checks::server_status::{ShellKind, StatusCheck};
use crate::cli::actions::{Action, ConnectionOpts};
use crate::mongo::credentials::Store;
use crate::mongo::payload;
use crate::mongo::shell::Invocation;
use crate::output::{Report, Status};
use tracing::{debug, instrument};

/// Handle the selected action by running its check.
#[must_use]
pub fn handle(action: Action) -> Report {
    match action {
        Action::DbSize {
            opts,
            database,
            size,
            objects,
        } => run(&DbSize::new(database, size, objects), &opts),
        Action::Stats { opts } => run(&StatusCheck::new(ShellKind::Legacy), &opts),
        Action::MongoshStats { opts } => run(&StatusCheck::new(ShellKind::Mongosh), &opts),
    }
}

/// Drive one check end to end, folding any failure into an UNKNOWN
/// report; the supervisor learns about problems through the status line,
/// never through a missing one.
#[must_use]
pub fn run(check: &dyn Check, opts: &ConnectionOpts) -> Report {
    match try_run(check, opts) {
        Ok(report) => report,
        Err(error) => {
            debug!(check = check.name(), error = %error, "check aborted");
            Report::new(Status::Unknown, error.to_string())
        }
    }
}

#[instrument(skip(check, opts), fields(check = check.name()), level = "debug", err)]
fn try_run(check: &dyn Check, opts: &ConnectionOpts) -> Result<Report, CheckError> {
    let store = Store::load(&opts.credential_file)?;
    let instance = store.resolve(&opts.instance)?;

    let target = check.target(&instance);
    let invocation = Invocation::new(&opts.mongo_bin, target, check.eval_expression(), &instance);
    let stdout = invocation.run()?;

    let document = payload::extract(&stdout, check.marker())?;

    check.report(&document)
}
