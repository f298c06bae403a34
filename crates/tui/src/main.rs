mod renderer;

use anyhow::{Context as _, Result, bail};
use sizelens_core::visibility::DEFAULT_DISPLAY_DURATION_MS;
use sizelens_protocol::{BreakpointSpec, DisplayMode, OverlayPosition};

/// Runtime options for the terminal overlay.
#[derive(Debug, Clone)]
pub struct Options {
    pub spec: BreakpointSpec,
    pub mode: DisplayMode,
    pub position: OverlayPosition,
    pub display_duration_ms: u64,
    pub throttle_ms: u64,
    /// Pixels represented by one terminal column. Terminals are a few
    /// hundred cells wide, so the default maps a cell to a typical glyph
    /// width to land in the presets' pixel ranges.
    pub scale: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spec: BreakpointSpec::default(),
            mode: DisplayMode::Visible,
            position: OverlayPosition::default(),
            display_duration_ms: DEFAULT_DISPLAY_DURATION_MS,
            throttle_ms: 100,
            scale: 8.0,
        }
    }
}

const USAGE: &str = "Usage: sizelens [preset] [options]

Presets: tailwind (default), bootstrap, bootstrap4, bootstrap5,
         foundation, bulma, mui

Options:
  --custom <json>    breakpoint mapping, e.g. '{\"Mobile\":0,\"Desktop\":1024}'
  --mode <mode>      visible | auto-hide | auto-compact   (default: visible)
  --position <pos>   top-left | top-right | bottom-left | bottom-right
  --duration <ms>    time shown before fading in auto modes (default: 2000)
  --throttle <ms>    minimum interval between re-evaluations (default: 100)
  --scale <px>       pixels per terminal column (default: 8)

Keys: h toggles hover, q or Esc quits.";

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .with_context(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--custom" => {
                let json = value("--custom")?;
                options.spec = serde_json::from_str(json)
                    .with_context(|| format!("invalid breakpoint mapping: {json}"))?;
            }
            "--mode" => {
                options.mode = match value("--mode")?.as_str() {
                    "visible" => DisplayMode::Visible,
                    "auto-hide" => DisplayMode::AutoHide,
                    "auto-compact" => DisplayMode::AutoCompact,
                    other => bail!("unknown mode `{other}`"),
                };
            }
            "--position" => {
                options.position = match value("--position")?.as_str() {
                    "top-left" => OverlayPosition::TopLeft,
                    "top-right" => OverlayPosition::TopRight,
                    "bottom-left" => OverlayPosition::BottomLeft,
                    "bottom-right" => OverlayPosition::BottomRight,
                    other => bail!("unknown position `{other}`"),
                };
            }
            "--duration" => {
                options.display_duration_ms = value("--duration")?.parse()?;
            }
            "--throttle" => {
                options.throttle_ms = value("--throttle")?.parse()?;
            }
            "--scale" => {
                options.scale = value("--scale")?.parse()?;
                if !(options.scale.is_finite() && options.scale > 0.0) {
                    bail!("--scale must be a positive number");
                }
            }
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            keyword if !keyword.starts_with('-') => {
                options.spec = BreakpointSpec::preset(keyword);
            }
            other => bail!("unknown option `{other}`\n\n{USAGE}"),
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    renderer::run(&options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        parse_args(&args.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>())
    }

    #[test]
    fn bare_argument_is_a_preset_keyword() {
        let options = parse(&["bulma"]).unwrap();
        assert_eq!(options.spec, BreakpointSpec::preset("bulma"));
    }

    #[test]
    fn custom_mapping_parses_as_json() {
        let options = parse(&["--custom", r#"{"A":0,"B":600}"#]).unwrap();
        assert!(!options.spec.is_preset());
    }

    #[test]
    fn mode_and_position_flags() {
        let options = parse(&["--mode", "auto-compact", "--position", "top-left"]).unwrap();
        assert_eq!(options.mode, DisplayMode::AutoCompact);
        assert_eq!(options.position, OverlayPosition::TopLeft);
    }

    #[test]
    fn rejects_unknown_flags_and_modes() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["--mode", "sometimes"]).is_err());
        assert!(parse(&["--scale", "-3"]).is_err());
    }
}
