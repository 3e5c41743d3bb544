//! # LightBoxKit
//!
//! Parametric generator for laser-cut night light boxes: a stack of
//! engraved wood plates in front of a diffuser, lit from a compartment at
//! the back.
//!
//! ## Architecture
//!
//! LightBoxKit is organized as a workspace:
//!
//! 1. **lightboxkit-core** - Geometry types: points, paths, parts, sheets
//! 2. **lightboxkit-camtools** - Drawing toolkit, the box generator, kerf
//!    compensation and the SVG, G-code and DXF exporters
//! 3. **lightboxkit-settings** - Configuration files
//! 4. **lightboxkit** - Command line interface

pub mod cli;

pub use lightboxkit_camtools::{
    BoxStyle, ExportOptions, LaserSettings, NightLightBox, NightLightBoxParameters, OutputFormat,
    ToolkitSettings,
};
pub use lightboxkit_core::{Part, Sheet};
pub use lightboxkit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("LIGHTBOXKIT_BUILD_DATE");

/// Initialize logging
///
/// Logs go to stderr so that generated files can be piped from stdout.
/// `RUST_LOG` overrides the level picked by `verbose`.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
