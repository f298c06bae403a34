//! Human-readable presentation strings shared by overlay frontends.

use sizelens_protocol::{BreakpointSpec, Neighbor, Resolution};

/// Format a pixel value without a trailing `.0` for whole numbers.
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// `"1024 x 768"` style dimensions label.
pub fn dimensions_label(width: f64, height: f64) -> String {
    format!("{} x {}", number(width), number(height))
}

/// Distance to the previous breakpoint, e.g. `"-33px to SM"`.
pub fn prev_distance_label(neighbor: &Neighbor) -> String {
    format!("-{}px to {}", number(neighbor.distance), neighbor.name)
}

/// Distance to the next breakpoint, e.g. `"+224px to LG"`.
pub fn next_distance_label(neighbor: &Neighbor) -> String {
    format!("+{}px to {}", number(neighbor.distance), neighbor.name)
}

/// The full breakpoint sequence with the active one bracketed,
/// e.g. `"XS, [SM], MD, LG, XL, 2XL"`.
pub fn highlighted_names(resolution: &Resolution) -> String {
    let active = resolution.active.index();
    resolution
        .ordered_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if active == Some(i) {
                format!("[{name}]")
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Overlay header title for a specification: the capitalized preset
/// keyword, or `"Custom"` for caller-supplied mappings.
pub fn spec_title(spec: &BreakpointSpec) -> String {
    match spec {
        BreakpointSpec::Preset(keyword) => {
            let mut chars = keyword.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
        BreakpointSpec::Custom(_) => "Custom".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizelens_protocol::ActiveBreakpoint;

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(number(50.0), "50");
        assert_eq!(number(0.0), "0");
        assert_eq!(number(12.5), "12.5");
    }

    #[test]
    fn dimension_and_distance_labels() {
        assert_eq!(dimensions_label(1024.0, 768.0), "1024 x 768");
        let prev = Neighbor {
            name: "SM".into(),
            distance: 33.0,
        };
        assert_eq!(prev_distance_label(&prev), "-33px to SM");
        let next = Neighbor {
            name: "LG".into(),
            distance: 224.0,
        };
        assert_eq!(next_distance_label(&next), "+224px to LG");
    }

    #[test]
    fn active_name_is_bracketed() {
        let resolution = Resolution {
            active: ActiveBreakpoint::Matched {
                index: 1,
                name: "SM".into(),
            },
            ordered_names: vec!["XS".into(), "SM".into(), "MD".into()],
            prev: None,
            next: None,
        };
        assert_eq!(highlighted_names(&resolution), "XS, [SM], MD");
    }

    #[test]
    fn unknown_brackets_nothing() {
        let resolution = Resolution {
            active: ActiveBreakpoint::Unknown,
            ordered_names: vec!["A".into(), "B".into()],
            prev: None,
            next: None,
        };
        assert_eq!(highlighted_names(&resolution), "A, B");
    }

    #[test]
    fn titles_capitalize_presets_and_mark_custom() {
        assert_eq!(spec_title(&BreakpointSpec::preset("tailwind")), "Tailwind");
        assert_eq!(
            spec_title(&BreakpointSpec::preset("bootstrap5")),
            "Bootstrap5"
        );
        assert_eq!(spec_title(&BreakpointSpec::custom([])), "Custom");
    }
}
