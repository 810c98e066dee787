//! The demonstration driver.
//!
//! [`Driver::run`] walks the catalog in order. For every case it prints a
//! header, runs the operation inside [`catch`], prints the captured diagnostic
//! as a trace, and prints a blank separator. A failing case never stops the
//! run; the only error `run` reports is a failure to write to its sink.
//!
//! # Examples
//!
//! ```
//! use watchtower::{catalog, Driver};
//!
//! let mut out = Vec::new();
//! let summary = Driver::new(catalog::catalog()).run(&mut out).unwrap();
//!
//! assert_eq!(summary.cases_run, 9);
//! assert_eq!(summary.captured.len(), 9);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("Done. (Everything above was intentional.)\n"));
//! ```

use std::backtrace::Backtrace;
use std::io::{self, Write};

use tracing::{debug, debug_span, info, warn};

use crate::catalog::Case;
use crate::types::error_formatter::ErrorFormatConfig;
use crate::types::{Diagnostic, DiagnosticResult, ErrorKind, LazyContext};
use crate::DiagnosticResultExt;

/// Runs `operation` and hands back whatever it raised.
///
/// On failure the diagnostic gains an outermost `case `<name>`` frame, so the
/// trace shows which catalog entry it came from.
pub fn catch<T, F>(name: &str, operation: F) -> DiagnosticResult<T>
where
    F: FnOnce() -> DiagnosticResult<T>,
{
    operation().wrap_ctx_with(|| format!("case `{name}`"))
}

/// Presentation settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Printed once, followed by a blank line, before the first case.
    pub banner: Option<String>,
    pub header_prefix: String,
    pub header_suffix: String,
    /// Printed once after the last case.
    pub completion: String,
    /// Layout of each diagnostic.
    pub format: ErrorFormatConfig,
    /// Attach `Backtrace::capture()` to every diagnostic. Honours `RUST_BACKTRACE`.
    pub capture_backtrace: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            banner: Some("Booting Watchtower (broken build)...".into()),
            header_prefix: "=== ".into(),
            header_suffix: " ===".into(),
            completion: "Done. (Everything above was intentional.)".into(),
            format: ErrorFormatConfig::traceback(),
            capture_backtrace: false,
        }
    }
}

/// What a run observed, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cases_run: usize,
    pub captured: Vec<(&'static str, ErrorKind)>,
}

impl RunSummary {
    /// Kinds captured, in the order the cases ran.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.captured.iter().map(|(_, kind)| *kind).collect()
    }
}

pub struct Driver<'c> {
    cases: &'c [Case],
    config: DriverConfig,
}

impl<'c> Driver<'c> {
    pub fn new(cases: &'c [Case]) -> Self {
        Self::with_config(cases, DriverConfig::default())
    }

    pub fn with_config(cases: &'c [Case], config: DriverConfig) -> Self {
        Self { cases, config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Runs every case in order and prints the completion line.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<RunSummary> {
        info!(cases = self.cases.len(), "running catalog");

        if let Some(banner) = &self.config.banner {
            writeln!(out, "{banner}")?;
            writeln!(out)?;
        }

        let mut summary = RunSummary::default();
        for case in self.cases {
            if let Some(kind) = self.run_case(case, out)? {
                summary.captured.push((case.name, kind));
            }
            summary.cases_run += 1;
        }

        writeln!(out, "{}", self.config.completion)?;
        info!(
            cases_run = summary.cases_run,
            captured = summary.captured.len(),
            "catalog finished"
        );
        Ok(summary)
    }

    /// Runs a single case: header, trace if it failed, blank line.
    ///
    /// Returns the captured kind, or `None` if the operation returned normally.
    pub fn run_case<W: Write>(&self, case: &Case, out: &mut W) -> io::Result<Option<ErrorKind>> {
        let _span = debug_span!("case", name = case.name).entered();

        writeln!(out, "{}{}{}", self.config.header_prefix, case.label, self.config.header_suffix)?;

        let captured = match catch(case.name, case.operation) {
            Ok(()) => {
                warn!(name = case.name, "case returned without raising");
                None
            }
            Err(diagnostic) => {
                let diagnostic = self.decorate(diagnostic);
                let kind = diagnostic.kind();
                if kind != case.expected {
                    warn!(expected = %case.expected, actual = %kind, "unexpected error kind");
                }
                debug!(%kind, fingerprint = %diagnostic.fingerprint_hex(), "captured");
                writeln!(out, "{}", diagnostic.fmt().with_config(self.config.format.clone()))?;
                Some(kind)
            }
        };

        writeln!(out)?;
        Ok(captured)
    }

    fn decorate(&self, diagnostic: Diagnostic) -> Diagnostic {
        if !self.config.capture_backtrace {
            return diagnostic;
        }
        diagnostic.with_context(LazyContext::new(|| Backtrace::capture().to_string()))
    }
}
