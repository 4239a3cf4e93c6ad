use crate::output::Status;

/// Optional warning/critical floors for one metric.
///
/// A bound triggers once the value reaches it (`bound <= value`); an
/// unset bound never alerts. Both bounds unset makes the metric purely
/// informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levels {
    pub warn: Option<i64>,
    pub crit: Option<i64>,
}

impl Levels {
    #[must_use]
    pub const fn new(warn: Option<i64>, crit: Option<i64>) -> Self {
        Self { warn, crit }
    }

    /// Verdict for one value; the critical bound wins when both are met.
    #[must_use]
    pub fn verdict(self, value: i64) -> Status {
        if self.crit.is_some_and(|bound| value >= bound) {
            Status::Critical
        } else if self.warn.is_some_and(|bound| value >= bound) {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}

/// Fold independent per-metric verdicts; the worst one decides the run.
#[must_use]
pub fn worst_of(verdicts: impl IntoIterator<Item = Status>) -> Status {
    verdicts.into_iter().max().unwrap_or(Status::Ok)
}
