//! testshape - shape outline overlay for NV12 video
//!
//! A single-input, single-output video filter that draws the outline of a
//! rectangle, square, triangle or circle onto every frame passing through
//! it. Frames are modified in place and forwarded one for one.
//!
//! # Architecture
//!
//! - `shape`: color table, geometry resolution and outline rasterization
//! - `filter`: the [`TestShapeFilter`](filter::TestShapeFilter) element,
//!   its caps, pad templates and named properties, and the filter chain
//! - `frame`: NV12/I420 frames and the exclusive plane mapping used for drawing
//! - `format`: Y4M reading and writing for the command line tool
//! - `swscale`: I420 <-> NV12 conversion
//! - `util`: buffers, pixel formats, rationals and timestamps

pub mod error;
pub mod filter;
pub mod format;
pub mod frame;
pub mod shape;
pub mod swscale;
pub mod util;

pub use error::{Error, Result};

/// testshape version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the testshape library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize logging for the given configuration.
///
/// `RUST_LOG` overrides the level picked from the flags. Calling this more
/// than once is harmless.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug || std::env::var_os("RUST_LOG").is_some() {
        let level = if config.debug {
            "debug"
        } else if config.verbose {
            "info"
        } else {
            "warn"
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
        // a subscriber installed earlier (e.g. by a test harness) wins
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    Ok(())
}
