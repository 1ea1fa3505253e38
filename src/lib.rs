//! Renders arbitrary binary data as a two-color pixel grid and a hex dump,
//! and serves both over a small local web UI.
//!
//! The rendering core ([`classify`], [`raster`], [`hex_dump`]) is pure and
//! knows nothing about HTTP or files.

pub mod classify;
pub mod constants;
pub mod error;
pub mod hex_dump;
pub mod html_template;
pub mod image_processing;
pub mod processing;
pub mod raster;
pub mod server;
pub mod settings;
pub mod summary;
pub mod upload_store;

pub use classify::{classify, Category};
pub use hex_dump::{hex_dump_rows, render_hex_dump, HexDumpRow};
pub use image_processing::Palette;
pub use raster::{render_raster, RasterGrid};
