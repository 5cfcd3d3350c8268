//! Card appearance.

/// Pin card endpoint of the badge service.
pub const PIN_CARD_ENDPOINT: &str = "https://readme-stats-fast.vercel.app/api/pin/";

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "github_dark";

/// Appearance options passed to the badge service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    /// Badge theme name.
    pub theme: String,
    /// Whether the card border is hidden.
    pub hide_border: bool,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            hide_border: true,
        }
    }
}

impl CardStyle {
    /// Creates a style with the given theme and a hidden border.
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..Self::default()
        }
    }
}
