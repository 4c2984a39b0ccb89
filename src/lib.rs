#![warn(
    clippy::all,
    clippy::correctness,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style
)]
#![allow(
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::trivially_copy_pass_by_ref
)]

//! Conversion between hue xy+brightness colors and sRGB.

pub mod convert;
pub mod error;
pub mod gamma;
pub mod types;

pub use convert::{rgb_to_xyy, xyy_to_rgb16, xyy_to_rgb8};
pub use error::{ColorError, ColorResult};
pub use types::{Rgb8, Rgba16, XYColor, XY};
