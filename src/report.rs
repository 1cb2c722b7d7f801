//! Structured build diagnostics.
//!
//! Rule-level problems never abort a build; they are collected here so the
//! caller can inspect what was skipped and why.

use serde::Serialize;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A no-op rule (zero weight, undersized balance group, ...).
    Info,
    /// An invalid or unresolvable rule that was skipped.
    Warning,
}

/// One diagnostic entry, tagged with the rule family that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
}

/// Summary of a completed build: diagnostics plus model size counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub diagnostics: Vec<Diagnostic>,
    pub variables_count: usize,
    pub constraints_count: usize,
    pub penalty_terms_count: usize,
}

impl BuildReport {
    pub(crate) fn warn(&mut self, rule: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(rule, "{message}");
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            rule: rule.to_string(),
            message,
        });
    }

    pub(crate) fn info(&mut self, rule: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(rule, "{message}");
        self.diagnostics.push(Diagnostic {
            severity: Severity::Info,
            rule: rule.to_string(),
            message,
        });
    }

    /// Diagnostics with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}
