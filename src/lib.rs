pub mod error;
pub mod event;
pub mod network;
pub mod passes;
pub mod pitch;
pub mod plot;
pub mod render;
pub mod shots;
pub mod statsbomb;
pub mod svg;

pub use crate::error::VizError;
pub use crate::event::{Event, Location};
pub use crate::pitch::PitchSpec;
