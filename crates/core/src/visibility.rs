//! Overlay visibility state machine.
//!
//! Models the show/fade/hide lifecycle of the overlay as explicit phases
//! driven by viewport changes, hover, and the passage of time. Time is
//! supplied by the caller as millisecond timestamps, so the machine is
//! deterministic and has no timers of its own.
//!
//! Contract (matching the overlay's observable behavior):
//! - `Visible` mode never leaves `Expanded`.
//! - In the auto modes, a viewport change re-expands the overlay and
//!   restarts the display timer.
//! - After `display_duration` without hover the overlay enters `Fading`,
//!   and [`FADE_MS`] later it becomes `Hidden` (`AutoHide`) or `Compact`
//!   (`AutoCompact`).
//! - Hovering cancels any pending transition and re-expands; leaving
//!   restarts the display timer.

use sizelens_protocol::DisplayMode;

/// Duration of the fade-out transition in milliseconds.
pub const FADE_MS: u64 = 500;

/// Default time the overlay stays expanded before fading.
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Fully shown.
    Expanded,
    /// Fade-out transition in progress.
    Fading,
    /// Not rendered at all.
    Hidden,
    /// Collapsed to the compact badge.
    Compact,
}

#[derive(Debug, Clone)]
pub struct OverlayVisibility {
    mode: DisplayMode,
    display_duration_ms: u64,
    phase: OverlayPhase,
    hovered: bool,
    /// Timestamp of the next pending transition, when one is armed.
    deadline_ms: Option<u64>,
}

impl OverlayVisibility {
    pub fn new(mode: DisplayMode, display_duration_ms: u64, now_ms: u64) -> Self {
        let mut machine = Self {
            mode,
            display_duration_ms,
            phase: OverlayPhase::Expanded,
            hovered: false,
            deadline_ms: None,
        };
        machine.arm(now_ms);
        machine
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Whether anything should be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Hidden
    }

    /// Render opacity for the current phase.
    pub fn opacity(&self) -> f64 {
        match self.phase {
            OverlayPhase::Expanded | OverlayPhase::Compact => 1.0,
            OverlayPhase::Fading | OverlayPhase::Hidden => 0.0,
        }
    }

    /// The viewport was resized: re-expand and restart the display timer.
    pub fn viewport_changed(&mut self, now_ms: u64) {
        self.phase = OverlayPhase::Expanded;
        self.arm(now_ms);
    }

    /// Pointer entered the overlay: cancel pending transitions, re-expand.
    pub fn hover_enter(&mut self) {
        self.hovered = true;
        if self.auto() {
            self.phase = OverlayPhase::Expanded;
            self.deadline_ms = None;
        }
    }

    /// Pointer left the overlay: restart the display timer.
    pub fn hover_leave(&mut self, now_ms: u64) {
        self.hovered = false;
        self.arm(now_ms);
    }

    /// Advance the machine to `now_ms`, firing every due transition, and
    /// return the resulting phase.
    pub fn poll(&mut self, now_ms: u64) -> OverlayPhase {
        while let Some(deadline) = self.deadline_ms {
            if now_ms < deadline {
                break;
            }
            if self.hovered {
                // The timer fired while hovered: drop it, hover_leave re-arms.
                self.deadline_ms = None;
                break;
            }
            match self.phase {
                OverlayPhase::Expanded => {
                    self.phase = OverlayPhase::Fading;
                    self.deadline_ms = Some(deadline + FADE_MS);
                }
                OverlayPhase::Fading => {
                    self.phase = match self.mode {
                        DisplayMode::AutoHide => OverlayPhase::Hidden,
                        DisplayMode::AutoCompact => OverlayPhase::Compact,
                        DisplayMode::Visible => OverlayPhase::Expanded,
                    };
                    self.deadline_ms = None;
                }
                OverlayPhase::Hidden | OverlayPhase::Compact => {
                    self.deadline_ms = None;
                }
            }
        }
        self.phase
    }

    fn auto(&self) -> bool {
        matches!(self.mode, DisplayMode::AutoHide | DisplayMode::AutoCompact)
    }

    fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = if self.auto() {
            Some(now_ms + self.display_duration_ms)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_mode_never_transitions() {
        let mut machine = OverlayVisibility::new(DisplayMode::Visible, 1000, 0);
        assert_eq!(machine.poll(10_000), OverlayPhase::Expanded);
        machine.viewport_changed(20_000);
        assert_eq!(machine.poll(60_000), OverlayPhase::Expanded);
        assert!(machine.is_visible());
    }

    #[test]
    fn auto_hide_fades_then_hides() {
        let mut machine = OverlayVisibility::new(DisplayMode::AutoHide, 2000, 0);
        assert_eq!(machine.poll(1999), OverlayPhase::Expanded);
        assert_eq!(machine.poll(2000), OverlayPhase::Fading);
        assert_eq!(machine.opacity(), 0.0);
        assert_eq!(machine.poll(2000 + FADE_MS - 1), OverlayPhase::Fading);
        assert_eq!(machine.poll(2000 + FADE_MS), OverlayPhase::Hidden);
        assert!(!machine.is_visible());
    }

    #[test]
    fn auto_compact_collapses_instead_of_hiding() {
        let mut machine = OverlayVisibility::new(DisplayMode::AutoCompact, 1000, 0);
        assert_eq!(machine.poll(1000), OverlayPhase::Fading);
        assert_eq!(machine.poll(1500), OverlayPhase::Compact);
        assert!(machine.is_visible());
        assert_eq!(machine.opacity(), 1.0);
    }

    #[test]
    fn viewport_change_restarts_the_timer_and_re_expands() {
        let mut machine = OverlayVisibility::new(DisplayMode::AutoHide, 1000, 0);
        assert_eq!(machine.poll(1500), OverlayPhase::Hidden);

        machine.viewport_changed(2000);
        assert_eq!(machine.phase(), OverlayPhase::Expanded);
        assert_eq!(machine.poll(2999), OverlayPhase::Expanded);
        assert_eq!(machine.poll(3000), OverlayPhase::Fading);
    }

    #[test]
    fn hover_cancels_pending_transitions() {
        let mut machine = OverlayVisibility::new(DisplayMode::AutoHide, 1000, 0);
        machine.hover_enter();
        // Well past the deadline, still expanded.
        assert_eq!(machine.poll(5000), OverlayPhase::Expanded);

        machine.hover_leave(5000);
        assert_eq!(machine.poll(5999), OverlayPhase::Expanded);
        assert_eq!(machine.poll(6000), OverlayPhase::Fading);
        assert_eq!(machine.poll(6500), OverlayPhase::Hidden);
    }

    #[test]
    fn hover_re_expands_a_compact_overlay() {
        let mut machine = OverlayVisibility::new(DisplayMode::AutoCompact, 1000, 0);
        assert_eq!(machine.poll(2000), OverlayPhase::Compact);

        machine.hover_enter();
        assert_eq!(machine.phase(), OverlayPhase::Expanded);

        machine.hover_leave(3000);
        assert_eq!(machine.poll(4500), OverlayPhase::Compact);
    }

    #[test]
    fn deadline_firing_while_hovered_is_dropped() {
        let mut machine = OverlayVisibility::new(DisplayMode::AutoHide, 1000, 0);
        machine.hovered = true;
        assert_eq!(machine.poll(1500), OverlayPhase::Expanded);
        // Timer was consumed; nothing fires later either.
        machine.hovered = false;
        assert_eq!(machine.poll(9999), OverlayPhase::Expanded);
    }
}
