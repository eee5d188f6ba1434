// src/context.rs
// Runtime configuration handed to every rendering step. Tiny, Copy, and all
// table data it points to is 'static.

use crate::{
    lang::{DEFAULT_LANG, Lang, LangEntry},
    policy::RenderPolicy,
};

/// Language, its tables and the rendering policy for one renderer.
///
/// - `lang`: identifier (logging, diagnostics)
/// - `lang_entry`: the tables actually used, possibly overridden
/// - `policy`: segment and fraction policy
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub lang: Lang,
    pub lang_entry: LangEntry,
    pub policy: RenderPolicy,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Canonical static data for a language and the default policy.
    #[inline(always)]
    pub fn new(lang: Lang) -> Self {
        Self::with_policy(lang, RenderPolicy::default())
    }

    #[inline(always)]
    pub fn with_policy(lang: Lang, policy: RenderPolicy) -> Self {
        Self {
            lang,
            lang_entry: *lang.entry(),
            policy,
        }
    }

    /// Let the caller change any entry field (unit words, terminal word…)
    /// before use. The static tables themselves are never touched.
    #[inline(always)]
    pub fn with_modified(lang: Lang, f: impl FnOnce(&mut LangEntry)) -> Self {
        let mut ctx = Self::new(lang);
        f(&mut ctx.lang_entry);
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BEN, ENG, policy::LEGACY_POLICY};

    #[test]
    fn defaults() {
        let ctx = Context::default();
        assert_eq!(ctx.lang, ENG);
        assert_eq!(ctx.lang_entry.major_unit, "Taka");
        assert_eq!(ctx.policy, RenderPolicy::default());
    }

    #[test]
    fn policy_is_carried() {
        let ctx = Context::with_policy(BEN, LEGACY_POLICY);
        assert_eq!(ctx.policy, LEGACY_POLICY);
        assert_eq!(ctx.lang_entry.terminal, BEN.entry().terminal);
    }

    #[test]
    fn modification_leaves_static_table_alone() {
        let ctx = Context::with_modified(ENG, |e| {
            e.major_unit = "Rupees";
            e.terminal = "Only.";
        });
        assert_eq!(ctx.lang_entry.major_unit, "Rupees");
        assert_eq!(ctx.lang_entry.terminal, "Only.");
        assert_eq!(ENG.entry().major_unit, "Taka");
        assert_eq!(ENG.entry().terminal, "Only");
    }
}
