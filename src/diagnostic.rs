//! Where degraded renders are reported.
//!
//! A failed render never reaches the caller as an error: the raw amount text
//! is returned instead. That fallback still has to be visible to operators,
//! so every degraded render is handed to a [`DiagnosticSink`].
use crate::{lang::Lang, words::RenderError};
use std::sync::{Mutex, PoisonError};

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, lang: Lang, input: &str, error: &RenderError);
}

/// Emits a `tracing` warning per degraded render. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, lang: Lang, input: &str, error: &RenderError) {
        tracing::warn!(
            lang = lang.code(),
            input,
            %error,
            "amount could not be rendered as words, returning raw text"
        );
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    #[inline(always)]
    fn report(&self, _lang: Lang, _input: &str, _error: &RenderError) {}
}

/// One degraded render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub lang: Lang,
    pub input: String,
    pub error: RenderError,
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the collected reports.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, lang: Lang, input: &str, error: &RenderError) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Diagnostic {
                lang,
                input: input.to_owned(),
                error: error.clone(),
            });
    }
}
