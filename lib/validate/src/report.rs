use std::fmt;

/// The process exit status of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// Every check passed.
    Passed,
    /// At least one check failed.
    AssertionFailed,
    /// The Turtle file does not exist.
    FileMissing,
    /// The Turtle file could not be read or parsed.
    UnexpectedError,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::AssertionFailed => 1,
            Self::FileMissing => 2,
            Self::UnexpectedError => 3,
        }
    }
}

/// The outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Short identifier of the check.
    pub check: &'static str,
    pub passed: bool,
    /// Human-readable summary.
    pub message: String,
    /// Optional additional lines, e.g. offending nodes.
    pub details: Vec<String>,
}

impl CheckResult {
    pub fn pass(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            passed: true,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn fail(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            passed: false,
            message: message.into(),
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{status}] {}: {}", self.check, self.message)?;
        for detail in &self.details {
            write!(f, "\n  - {detail}")?;
        }
        Ok(())
    }
}

/// The results of every check, in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// The number of triples of the validated graph.
    pub triples: usize,
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|result| !result.passed).count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.all_passed() {
            ExitStatus::Passed
        } else {
            ExitStatus::AssertionFailed
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph triples: {}", self.triples)?;
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        if self.all_passed() {
            write!(f, "All {} checks passed", self.results.len())
        } else {
            write!(
                f,
                "{} of {} checks failed",
                self.failure_count(),
                self.results.len()
            )
        }
    }
}
