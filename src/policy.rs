//! Rendering policies and their presets.

/// Which segments appear in the assembled phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentPolicy {
    /// Integer and major unit always; fraction and minor unit whenever the
    /// amount text has a fractional part, even `".00"`.
    Always,
    /// Drop a zero fraction, and drop a zero integer when a non-zero fraction
    /// follows. An all-zero amount still reads "Zero Taka Only".
    #[default]
    OmitZero,
}

/// How the digits after the decimal point become a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractionPolicy {
    /// The phrase names the paisa count: `.5` → fifty, `.05` → five,
    /// `.567` → fifty six. Extra digits are truncated, never rounded.
    #[default]
    Paisa,
    /// Read the first two digits literally, dropping one leading zero:
    /// `.5` → five, `.05` → five, `.567` → fifty six.
    Digits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    pub segments: SegmentPolicy,
    pub fraction: FractionPolicy,
}

/// Omit zero segments, read fractions as paisa. The default.
pub const STRICT_POLICY: RenderPolicy = RenderPolicy {
    segments: SegmentPolicy::OmitZero,
    fraction: FractionPolicy::Paisa,
};

/// Always emit every segment, read fraction digits literally.
pub const LEGACY_POLICY: RenderPolicy = RenderPolicy {
    segments: SegmentPolicy::Always,
    fraction: FractionPolicy::Digits,
};

impl Default for RenderPolicy {
    fn default() -> Self {
        STRICT_POLICY
    }
}

impl RenderPolicy {
    #[inline(always)]
    pub const fn with_segments(mut self, segments: SegmentPolicy) -> Self {
        self.segments = segments;
        self
    }

    #[inline(always)]
    pub const fn with_fraction(mut self, fraction: FractionPolicy) -> Self {
        self.fraction = fraction;
        self
    }
}
