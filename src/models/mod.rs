pub mod clip;
pub mod config;
pub mod device;
pub mod grid;

pub use clip::ClipRef;
pub use config::MosaicConfig;
pub use device::DeviceInfo;
pub use grid::{Grid, GRID_SIZE, PAD_LAYOUT};
