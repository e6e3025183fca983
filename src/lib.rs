//! padmosaic
//!
//! A MIDI pad clip mapper and an 8x8 palette mosaic quantizer.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
