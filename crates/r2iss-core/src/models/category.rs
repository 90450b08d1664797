use crate::error::CoreError;

/// A pre-discretized clinical input band selected from a fixed list.
///
/// Each variant has a machine `code` (used in JSON), a display `label`
/// (what the UI shows), and optional extra spellings accepted on input.
pub trait Category: Sized + Copy + 'static {
    /// Input field name used in error messages (e.g., "b2m").
    const FIELD: &'static str;

    /// Every variant, in display order.
    fn all() -> &'static [Self];

    /// Stable machine code (e.g., "below_3_5").
    fn code(self) -> &'static str;

    /// Display label (e.g., "< 3.5 mg/L").
    fn label(self) -> &'static str;

    /// Additional accepted spellings.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Parse a code, label or alias. Anything else is rejected.
    fn parse_category(raw: &str) -> Result<Self, CoreError> {
        let needle = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| {
                c.code() == needle
                    || c.label() == needle
                    || c.aliases().iter().any(|a| *a == needle)
            })
            .ok_or_else(|| CoreError::UnrecognizedCategory {
                field: Self::FIELD,
                value: raw.to_string(),
            })
    }
}
