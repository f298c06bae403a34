//! Distance calculator: matches a width against a breakpoint set and
//! measures the pixel gap to the neighboring intervals.

use sizelens_protocol::{ActiveBreakpoint, Breakpoint, BreakpointSet, Neighbor, Resolution};

/// Evaluate a viewport width against a breakpoint set.
///
/// The first interval containing the width (bounds inclusive) wins. When no
/// interval matches — possible only for sets with gaps — the result is
/// `Unknown` with best-effort neighbor distances: the closest interval
/// entirely below the width and the closest one entirely above it.
///
/// Any finite width is accepted, negative ones included; a width below the
/// first interval simply has no previous neighbor. Distances are always
/// non-negative.
pub fn evaluate(width: f64, set: &BreakpointSet) -> Resolution {
    let breakpoints = set.breakpoints();
    let ordered_names = set.names().map(str::to_owned).collect();

    if let Some(index) = breakpoints.iter().position(|b| b.contains(width)) {
        let prev = index.checked_sub(1).map(|i| Neighbor {
            name: breakpoints[i].name.clone(),
            distance: width - breakpoints[i].max,
        });
        let next = breakpoints.get(index + 1).map(|b| Neighbor {
            name: b.name.clone(),
            distance: b.min - width,
        });
        return Resolution {
            active: ActiveBreakpoint::Matched {
                index,
                name: breakpoints[index].name.clone(),
            },
            ordered_names,
            prev,
            next,
        };
    }

    // Gap: closest interval below, then closest above.
    let below = |b: &&Breakpoint| b.max < width;
    let above = |b: &&Breakpoint| b.min > width;
    Resolution {
        active: ActiveBreakpoint::Unknown,
        ordered_names,
        prev: breakpoints.iter().rev().find(below).map(|b| Neighbor {
            name: b.name.clone(),
            distance: width - b.max,
        }),
        next: breakpoints.iter().find(above).map(|b| Neighbor {
            name: b.name.clone(),
            distance: b.min - width,
        }),
    }
}
