//! Snowfall engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the shader surface
//! that feeds a full-screen fragment shader with time and resolution.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod camera;
pub mod render;
pub mod scene;
pub mod surface;
