pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod gradient;
pub mod layers;
pub mod params;
pub mod sparkles;
pub mod waveform;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use gradient::*;
pub use layers::*;
pub use params::*;
pub use sparkles::*;
pub use waveform::*;
