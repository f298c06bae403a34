use serde::{Deserialize, Serialize};

/// How the overlay behaves once shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Always fully visible.
    Visible,
    /// Shown on viewport changes, then fades out and hides.
    AutoHide,
    /// Shown on viewport changes, then fades and collapses to a compact
    /// badge with just the current breakpoint name.
    AutoCompact,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::AutoHide => "auto-hide",
            Self::AutoCompact => "auto-compact",
        }
    }
}

/// Where the overlay is anchored within the host viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Positioned by the host; the overlay applies no anchoring of its own.
    Relative,
}

impl Default for OverlayPosition {
    fn default() -> Self {
        Self::BottomRight
    }
}
