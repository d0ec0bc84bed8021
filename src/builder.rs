//! Public builder surface (§1 "external collaborator"): chainable
//! constructors for a diagnostic report, grounded on this codebase's
//! `Suggestion`/`Diagnostic` `with_*` chaining convention.

use std::io::Write;

use crate::color::ColorProvider;
use crate::config::Config;
use crate::error::RenderError;
use crate::label::Label;
use crate::render::{self, Footer, Report, Severity};
use crate::source::SourceCache;

/// Fluent constructor for a [`Report`].
#[derive(Clone, Debug)]
pub struct ReportBuilder {
    severity: Severity,
    code: Option<String>,
    title: String,
    labels: Vec<Label>,
    help: Vec<String>,
    note: Vec<String>,
}

impl ReportBuilder {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        ReportBuilder {
            severity,
            code: None,
            title: title.into(),
            labels: Vec::new(),
            help: Vec::new(),
            note: Vec::new(),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title)
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self
    }

    #[must_use]
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help.push(text.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        self.note.push(text.into());
        self
    }

    /// Render this report to `sink` using `config`, `colors`, and `sources`.
    ///
    /// # Errors
    /// See [`render::render`].
    pub fn render(
        &self,
        sink: &mut dyn Write,
        config: &Config,
        colors: &dyn ColorProvider,
        sources: &SourceCache,
    ) -> Result<(), RenderError> {
        let report = Report {
            severity: self.severity,
            code: self.code.as_deref(),
            title: &self.title,
            labels: &self.labels,
            footer: Footer {
                help: self.help.clone(),
                note: self.note.clone(),
            },
        };
        render::render(sink, config, colors, sources, &report)
    }
}
