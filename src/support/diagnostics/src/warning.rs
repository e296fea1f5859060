use crate::{Diagnostic, show::Show};
use colored::Colorize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningDiagnostic {
    message: String,
    record: Option<String>,
}

impl WarningDiagnostic {
    pub fn new(message: impl ToString, record: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            record: Some(record.to_string()),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            record: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        if let Some(record) = &self.record {
            write!(
                w,
                "{}: {} {}",
                record,
                "warning:".yellow().bold(),
                self.message,
            )
        } else {
            write!(w, "{} {}", "warning:".yellow().bold(), self.message)
        }
    }
}

impl Diagnostic for WarningDiagnostic {}
