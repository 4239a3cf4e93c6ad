//! The check variants and their shared contract.
//!
//! Every variant drives the same pipeline (resolve credentials, run the
//! shell, pick the payload line, normalize, evaluate); what differs is
//! captured behind [`Check`]: the connection target, the evaluated
//! expression, the payload marker and the metric mapping.

pub mod dbsize;
pub mod server_status;
pub mod thresholds;

use crate::CheckError;
use crate::mongo::credentials::Instance;
use crate::mongo::payload::Marker;
use crate::output::Report;
use serde_json::Value;

/// One check variant: what to ask the shell, and how to turn the decoded
/// payload into a verdict.
pub trait Check {
    /// Subcommand name, also used in log events.
    fn name(&self) -> &'static str;

    /// JavaScript expression handed to the shell with `--eval`.
    fn eval_expression(&self) -> &'static str;

    /// `host:port[/database]` connection string for this run.
    fn target(&self, instance: &Instance) -> String;

    /// Classifier that finds the payload line among the shell chatter.
    fn marker(&self) -> &dyn Marker;

    /// Normalize the payload and evaluate it into a report.
    ///
    /// # Errors
    ///
    /// Returns an extraction error when a required field is missing from
    /// the payload or cannot be coerced.
    fn report(&self, payload: &Value) -> Result<Report, CheckError>;
}
