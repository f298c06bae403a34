use serde::{Deserialize, Serialize};

/// A normalized breakpoint interval: a named width range `[min, max]`.
///
/// `max` is either a finite upper bound or `f64::INFINITY` for the topmost
/// interval of a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

impl Breakpoint {
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    /// Whether `width` falls inside this interval (bounds inclusive).
    pub fn contains(&self, width: f64) -> bool {
        width >= self.min && width <= self.max
    }

    /// Whether this is the unbounded topmost interval.
    pub fn is_unbounded(&self) -> bool {
        self.max.is_infinite()
    }
}

/// An ordered sequence of breakpoint intervals, ascending by `min` and
/// unique by name.
///
/// Normally obtained from the resolver, which validates and sorts the
/// caller's specification. Sets built from a preset cover `[0, +inf)` with
/// no gaps; sets built from explicit `[min, max]` pairs may contain gaps,
/// which the calculator tolerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSet {
    breakpoints: Vec<Breakpoint>,
}

impl BreakpointSet {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.breakpoints.get(index)
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Interval names in ascending `min` order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.breakpoints.iter().map(|b| b.name.as_str())
    }

    /// Whether the intervals cover `[0, +inf)` with no gaps and no overlaps.
    pub fn is_contiguous(&self) -> bool {
        let Some(first) = self.breakpoints.first() else {
            return false;
        };
        if first.min != 0.0 {
            return false;
        }
        let Some(last) = self.breakpoints.last() else {
            return false;
        };
        if !last.max.is_infinite() {
            return false;
        }
        self.breakpoints
            .windows(2)
            .all(|pair| pair[1].min == pair[0].max + 1.0)
    }
}

/// The interval a width resolved to, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActiveBreakpoint {
    /// The width fell inside the interval at `index`.
    Matched { index: usize, name: String },
    /// The width fell into a gap of a non-contiguous set.
    Unknown,
}

impl ActiveBreakpoint {
    /// Index of the matched interval, or `None` when unmatched.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Matched { index, .. } => Some(*index),
            Self::Unknown => None,
        }
    }

    /// Name of the matched interval, or `"Unknown"`.
    pub fn name(&self) -> &str {
        match self {
            Self::Matched { name, .. } => name,
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A neighboring interval and the pixel distance to its nearest edge.
///
/// Distances are always non-negative: for the previous neighbor this is
/// `width - prev.max`, for the next neighbor `next.min - width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub name: String,
    pub distance: f64,
}

/// Result of evaluating a width against a breakpoint set.
///
/// A pure value recomputed on every width change; carries everything the
/// presentation layer needs to render the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub active: ActiveBreakpoint,
    /// All interval names in ascending `min` order, match or not.
    pub ordered_names: Vec<String>,
    /// Immediately preceding interval, when one exists.
    pub prev: Option<Neighbor>,
    /// Immediately following interval, when one exists.
    pub next: Option<Neighbor>,
}
