pub mod overlay;
pub mod spec;
pub mod types;

pub use overlay::{DisplayMode, OverlayPosition};
pub use spec::{BreakpointDef, BreakpointEntry, BreakpointSpec, CustomBreakpoints};
pub use types::{ActiveBreakpoint, Breakpoint, BreakpointSet, Neighbor, Resolution};
