//! Errors raised at the host edge: windowing, surfaces, fonts and export.
//!
//! The meter core itself has no failure modes.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{}` is not a usable font file", .0.display())]
    InvalidFont(PathBuf),

    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot render a {width}x{height} frame")]
    EmptyFrame { width: u32, height: u32 },
}
