//! Breakpoint resolver: turns a [`BreakpointSpec`] into a normalized,
//! ascending-sorted [`BreakpointSet`].

use sizelens_protocol::{Breakpoint, BreakpointSet, BreakpointSpec, CustomBreakpoints};
use thiserror::Error;

use crate::presets::{self, PresetTable};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("breakpoint mapping is empty")]
    EmptyMapping,
    #[error("duplicate breakpoint name `{0}`")]
    DuplicateName(String),
    #[error("breakpoint `{name}` has invalid minimum {min}")]
    InvalidMin { name: String, min: f64 },
    #[error("breakpoints `{first}` and `{second}` share minimum {min}")]
    DuplicateMin {
        first: String,
        second: String,
        min: f64,
    },
    #[error("breakpoint `{name}` has maximum {max} below minimum {min}")]
    InvertedRange { name: String, min: f64, max: f64 },
    #[error("breakpoint `{first}` overlaps `{second}`")]
    OverlappingRanges { first: String, second: String },
}

/// Resolve a breakpoint specification into a normalized interval set.
///
/// Preset keywords never fail: unrecognized ones fall back to the default
/// preset silently. Custom mappings are validated — empty mappings,
/// duplicate names, duplicate minimums, inverted ranges, and overlapping
/// explicit ranges are rejected. Gaps between explicit ranges are
/// tolerated; they surface as `Unknown` matches at evaluation time.
pub fn resolve(spec: &BreakpointSpec) -> Result<BreakpointSet, ResolveError> {
    match spec {
        BreakpointSpec::Preset(keyword) => {
            let table = presets::lookup(keyword).unwrap_or_else(presets::default_table);
            Ok(from_table(table))
        }
        BreakpointSpec::Custom(custom) => resolve_custom(custom),
    }
}

/// Build a set from a built-in boundary table.
///
/// Tables hold `min`-only rows, already ascending: each interval's `max` is
/// the next row's `min - 1`, and the last is unbounded.
fn from_table(table: PresetTable) -> BreakpointSet {
    let breakpoints = table
        .iter()
        .enumerate()
        .map(|(i, &(name, min))| {
            let max = table.get(i + 1).map_or(f64::INFINITY, |next| next.1 - 1.0);
            Breakpoint::new(name, min, max)
        })
        .collect();
    BreakpointSet::new(breakpoints)
}

fn resolve_custom(custom: &CustomBreakpoints) -> Result<BreakpointSet, ResolveError> {
    if custom.is_empty() {
        return Err(ResolveError::EmptyMapping);
    }

    // Normalize each entry to (name, min, explicit max) and validate bounds.
    let mut rows: Vec<(String, f64, Option<f64>)> = Vec::with_capacity(custom.len());
    for entry in custom.entries() {
        let name = entry.display_name().to_owned();
        let min = entry.def.min();
        if !min.is_finite() || min < 0.0 {
            return Err(ResolveError::InvalidMin { name, min });
        }
        let explicit_max = entry.def.explicit_max();
        if let Some(max) = explicit_max {
            // Infinite max is fine (topmost interval); NaN and max < min are not.
            if max.is_nan() || max < min {
                return Err(ResolveError::InvertedRange { name, min, max });
            }
        }
        if rows.iter().any(|(existing, ..)| *existing == name) {
            return Err(ResolveError::DuplicateName(name));
        }
        rows.push((name, min, explicit_max));
    }

    // Stable sort keeps insertion order for equal minimums, though those are
    // rejected right after.
    rows.sort_by(|a, b| a.1.total_cmp(&b.1));

    for pair in rows.windows(2) {
        if pair[0].1 == pair[1].1 {
            return Err(ResolveError::DuplicateMin {
                first: pair[0].0.clone(),
                second: pair[1].0.clone(),
                min: pair[0].1,
            });
        }
    }

    let mut breakpoints = Vec::with_capacity(rows.len());
    for (i, (name, min, explicit_max)) in rows.iter().enumerate() {
        let next_min = rows.get(i + 1).map(|next| next.1);
        let max = match (explicit_max, next_min) {
            (Some(max), Some(next_min)) => {
                if *max >= next_min {
                    return Err(ResolveError::OverlappingRanges {
                        first: name.clone(),
                        second: rows[i + 1].0.clone(),
                    });
                }
                *max
            }
            (Some(max), None) => *max,
            (None, Some(next_min)) => next_min - 1.0,
            (None, None) => f64::INFINITY,
        };
        breakpoints.push(Breakpoint::new(name.clone(), *min, max));
    }

    Ok(BreakpointSet::new(breakpoints))
}
