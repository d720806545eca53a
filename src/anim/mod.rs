//! Timer- and frame-driven animation state, kept free of web APIs so every
//! piece can be unit tested on the host.

pub mod particles;
pub mod progress;
pub mod spring;
pub mod typewriter;

/// Tick length the component layer uses to drive frame-clocked animations.
pub const FRAME_MS: u32 = 16;

/// `FRAME_MS` as the integration step, in seconds.
pub const FRAME_DT: f64 = 0.016;
