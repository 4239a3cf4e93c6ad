use std::fmt;

/// One `'label'=value[unit];warn;crit;min;max` perfdata token.
///
/// Every semicolon is always emitted; unset positions render empty, which
/// is how graphing backends distinguish "no threshold" from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfData {
    label: &'static str,
    value: i64,
    unit: &'static str,
    warn: Option<i64>,
    crit: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
}

impl PerfData {
    /// A unitless counter token.
    #[must_use]
    pub const fn count(label: &'static str, value: i64) -> Self {
        Self::with_unit(label, value, "")
    }

    /// A byte-valued token, kept precise for machine consumption.
    #[must_use]
    pub const fn bytes(label: &'static str, value: i64) -> Self {
        Self::with_unit(label, value, "B")
    }

    /// A mebibyte-valued token, for figures the server already reports
    /// in MiB.
    #[must_use]
    pub const fn mebibytes(label: &'static str, value: i64) -> Self {
        Self::with_unit(label, value, "MiB")
    }

    const fn with_unit(label: &'static str, value: i64, unit: &'static str) -> Self {
        Self {
            label,
            value,
            unit,
            warn: None,
            crit: None,
            min: None,
            max: None,
        }
    }

    /// Attach the warning/critical bounds the value was evaluated
    /// against, so the graphing side can draw them.
    #[must_use]
    pub const fn with_thresholds(mut self, warn: Option<i64>, crit: Option<i64>) -> Self {
        self.warn = warn;
        self.crit = crit;
        self
    }

    /// Attach the range the value lives in.
    #[must_use]
    pub const fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'={}{}", self.label, self.value, self.unit)?;
        for bound in [self.warn, self.crit, self.min, self.max] {
            f.write_str(";")?;
            if let Some(value) = bound {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
