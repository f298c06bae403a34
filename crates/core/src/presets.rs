//! Built-in breakpoint boundary tables for well-known layout conventions.
//!
//! Each table lists `(name, min)` pairs in ascending order; upper bounds are
//! derived by the resolver. Values track the conventions' documented
//! defaults and must not drift — callers rely on exact thresholds.

/// `(name, min)` boundary rows of a built-in preset.
pub type PresetTable = &'static [(&'static str, f64)];

pub const TAILWIND: PresetTable = &[
    ("XS", 0.0),
    ("SM", 640.0),
    ("MD", 768.0),
    ("LG", 1024.0),
    ("XL", 1280.0),
    ("2XL", 1536.0),
];

pub const BOOTSTRAP4: PresetTable = &[
    ("XS", 0.0),
    ("SM", 576.0),
    ("MD", 768.0),
    ("LG", 992.0),
    ("XL", 1200.0),
];

pub const BOOTSTRAP5: PresetTable = &[
    ("XS", 0.0),
    ("SM", 576.0),
    ("MD", 768.0),
    ("LG", 992.0),
    ("XL", 1200.0),
    ("XXL", 1400.0),
];

pub const FOUNDATION: PresetTable = &[
    ("Small", 0.0),
    ("Medium", 640.0),
    ("Large", 1024.0),
    ("XLarge", 1200.0),
    ("XXLarge", 1440.0),
];

pub const BULMA: PresetTable = &[
    ("Mobile", 0.0),
    ("Tablet", 769.0),
    ("Desktop", 1024.0),
    ("Widescreen", 1216.0),
    ("FullHD", 1408.0),
];

pub const MUI: PresetTable = &[
    ("XS", 0.0),
    ("SM", 600.0),
    ("MD", 900.0),
    ("LG", 1200.0),
    ("XL", 1536.0),
];

/// Keyword of the preset used when none is specified or the keyword is
/// unrecognized.
pub const DEFAULT_KEYWORD: &str = "tailwind";

/// All recognized preset keywords (aliases included).
pub const KEYWORDS: &[&str] = &[
    "tailwind",
    "bootstrap",
    "bootstrap4",
    "bootstrap5",
    "foundation",
    "bulma",
    "mui",
];

/// Look up a preset table by keyword, case-insensitively.
///
/// `bootstrap` is an alias for `bootstrap5`. Returns `None` for
/// unrecognized keywords; the resolver treats that as a silent fallback to
/// the default, not an error.
pub fn lookup(keyword: &str) -> Option<PresetTable> {
    match keyword.to_ascii_lowercase().as_str() {
        "tailwind" => Some(TAILWIND),
        "bootstrap4" => Some(BOOTSTRAP4),
        "bootstrap" | "bootstrap5" => Some(BOOTSTRAP5),
        "foundation" => Some(FOUNDATION),
        "bulma" => Some(BULMA),
        "mui" => Some(MUI),
        _ => None,
    }
}

/// The default preset table.
pub fn default_table() -> PresetTable {
    TAILWIND
}
