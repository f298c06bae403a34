pub mod distance;
pub mod format;
pub mod presets;
pub mod resolve;
pub mod throttle;
pub mod visibility;

pub use distance::evaluate;
pub use resolve::{ResolveError, resolve};
