pub mod preview_png;

pub use preview_png::encode_preview;
