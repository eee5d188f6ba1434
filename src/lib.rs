pub mod context;
pub mod diagnostic;
pub mod format;
pub mod lang;
pub mod policy;
pub mod taka;
pub mod whitespace;
pub mod words;

#[cfg(test)]
pub(crate) mod testing;

pub use context::Context;
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use lang::{BEN, ENG, Lang, LangEntry, all_langs};
pub use policy::{FractionPolicy, LEGACY_POLICY, RenderPolicy, STRICT_POLICY, SegmentPolicy};
pub use rust_decimal::Decimal;
pub use taka::{Rendered, TakaWords, TakaWordsBuilder, render_amount_in_words};
pub use words::RenderError;
