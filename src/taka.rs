use crate::{
    context::Context,
    diagnostic::{DiagnosticSink, TracingSink},
    lang::{DEFAULT_LANG, Lang, LangEntry},
    policy::{FractionPolicy, RenderPolicy, SegmentPolicy},
    words::{RenderError, assemble::assemble},
};
use rust_decimal::Decimal;
use std::{fmt, sync::Arc};

/// Outcome of a render. Always printable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// The amount in words.
    Words(String),
    /// The amount could not be rendered; `text` is the input amount text,
    /// unmodified.
    Degraded { text: String, error: RenderError },
}

impl Rendered {
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Words(text) | Rendered::Degraded { text, .. } => text,
        }
    }

    #[inline]
    pub fn into_string(self) -> String {
        match self {
            Rendered::Words(text) | Rendered::Degraded { text, .. } => text,
        }
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Rendered::Degraded { .. })
    }

    #[inline]
    pub fn error(&self) -> Option<&RenderError> {
        match self {
            Rendered::Words(_) => None,
            Rendered::Degraded { error, .. } => Some(error),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Rendered {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Render `amount` in `lang` with the default policy, reporting degraded
/// renders through `tracing`.
///
/// ```
/// use std::str::FromStr;
/// use taka_words::{Decimal, ENG, render_amount_in_words};
///
/// let amount = Decimal::from_str("1234567.89").unwrap();
/// assert_eq!(
///     render_amount_in_words(&amount, ENG).as_str(),
///     "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Taka Eighty Nine Paisa Only"
/// );
/// ```
pub fn render_amount_in_words(amount: &Decimal, lang: Lang) -> Rendered {
    render_with(&Context::new(lang), &amount.to_string(), &TracingSink)
}

pub(crate) fn render_with(ctx: &Context, text: &str, sink: &dyn DiagnosticSink) -> Rendered {
    match assemble(text, ctx) {
        Ok(words) => {
            tracing::trace!(lang = ctx.lang.code(), input = text, "amount rendered");
            Rendered::Words(words)
        }
        Err(error) => {
            sink.report(ctx.lang, text, &error);
            Rendered::Degraded {
                text: text.to_owned(),
                error,
            }
        }
    }
}

/// A configured renderer. Cheap to share across threads.
#[derive(Clone)]
pub struct TakaWords {
    ctx: Context,
    sink: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for TakaWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakaWords").field("ctx", &self.ctx).finish_non_exhaustive()
    }
}

impl Default for TakaWords {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TakaWords {
    pub fn builder() -> TakaWordsBuilder {
        TakaWordsBuilder::default()
    }

    pub fn new(lang: Lang) -> Self {
        Self::builder().lang(lang).build()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    pub fn render(&self, amount: &Decimal) -> Rendered {
        self.render_text(&amount.to_string())
    }

    /// Render canonical decimal text such as `"1234567.89"`. Anything else
    /// comes back unchanged as [`Rendered::Degraded`].
    pub fn render_text(&self, text: &str) -> Rendered {
        render_with(&self.ctx, text, self.sink.as_ref())
    }

    /// Absent in, absent out.
    pub fn render_opt(&self, amount: Option<&Decimal>) -> Option<Rendered> {
        amount.map(|amount| self.render(amount))
    }
}

pub struct TakaWordsBuilder {
    lang: Lang,
    entry: LangEntry,
    policy: RenderPolicy,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for TakaWordsBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            entry: *DEFAULT_LANG.entry(),
            policy: RenderPolicy::default(),
            sink: Arc::new(TracingSink),
        }
    }
}

impl TakaWordsBuilder {
    /// Select the language. Resets any earlier [`modify_lang`](Self::modify_lang).
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self.entry = *lang.entry();
        self
    }

    pub fn policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn segments(mut self, segments: SegmentPolicy) -> Self {
        self.policy.segments = segments;
        self
    }

    pub fn fraction(mut self, fraction: FractionPolicy) -> Self {
        self.policy.fraction = fraction;
        self
    }

    /// Override fields of the selected language's entry, e.g. unit words.
    pub fn modify_lang(mut self, f: impl FnOnce(&mut LangEntry)) -> Self {
        f(&mut self.entry);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> TakaWords {
        TakaWords {
            ctx: Context {
                lang: self.lang,
                lang_entry: self.entry,
                policy: self.policy,
            },
            sink: self.sink,
        }
    }
}
