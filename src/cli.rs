//! Command line interface

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use lightboxkit_camtools::{
    export_sheet, write_file, BoxStyle, NightLightBox, OutputFormat, ASSEMBLY_STEPS,
};
use lightboxkit_settings::Config;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "lightboxkit")]
#[command(author, version, about = "Parametric laser-cut night light box generator")]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("LIGHTBOXKIT_BUILD_DATE"), ")"))]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the parts and write them out
    Generate(GenerateArgs),

    /// Print the default configuration
    Defaults {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// List the parts with their sizes
    Parts(BoxArgs),

    /// Print the assembly instructions
    Assembly,
}

#[derive(Args, Debug, Default)]
pub struct BoxArgs {
    /// Configuration file (.toml or .json)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// minimalist, large-face or extra-customizable-face
    #[arg(long)]
    pub style: Option<BoxStyle>,

    /// Width of the visible plate zone (mm)
    #[arg(long)]
    pub width: Option<f64>,

    /// Height of the visible plate zone (mm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Number of decorative plates
    #[arg(long)]
    pub plates: Option<u32>,

    /// Material thickness (mm)
    #[arg(long, short = 't')]
    pub thickness: Option<f64>,

    /// Laser kerf (mm)
    #[arg(long)]
    pub burn: Option<f64>,

    /// Hooked ears on the decorative plates
    #[arg(long)]
    pub hooks: bool,

    /// Corner radius of the window (mm)
    #[arg(long)]
    pub window_corner: Option<f64>,

    /// Thickness of the decorative plates (mm)
    #[arg(long)]
    pub wood_plate_thickness: Option<f64>,

    /// Thickness of the diffuser (mm)
    #[arg(long)]
    pub diffuser_plate_thickness: Option<f64>,

    /// Depth of the electronics compartment (mm)
    #[arg(long)]
    pub background_depth: Option<f64>,

    /// Gap between the decorative plates (mm)
    #[arg(long)]
    pub inter_plate_spacing: Option<f64>,

    /// Play around sliding parts (mm)
    #[arg(long)]
    pub margin: Option<f64>,

    /// Connector holes in the back, `R x y w h` or `C x y d` separated by `;`
    #[arg(long)]
    pub back_extra_holes: Option<String>,

    /// Lock screw diameter (mm), 0 for no screws
    #[arg(long)]
    pub screw_diameter: Option<f64>,

    /// Lock screw length (mm)
    #[arg(long)]
    pub lock_screw_length: Option<f64>,

    /// Lock nut thickness (mm)
    #[arg(long)]
    pub lock_nut_thickness: Option<f64>,

    /// Lock nut width across flats (mm)
    #[arg(long)]
    pub lock_nut_width: Option<f64>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub box_args: BoxArgs,

    /// svg, gcode or dxf (default: from the output file name, then the
    /// configuration)
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Cut the nominal paths without kerf compensation
    #[arg(long)]
    pub no_kerf: bool,

    /// Print part labels in SVG output
    #[arg(long)]
    pub labels: bool,
}

impl BoxArgs {
    /// Configuration from `--config`, the default location, or the
    /// built-in defaults, with the command line overrides applied.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => match Config::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!("Using configuration {}", path.display());
                    Config::load_from_file(&path)
                        .with_context(|| format!("Failed to load {}", path.display()))?
                }
                None => Config::new(),
            },
        };

        let generator = &mut config.generator;
        if let Some(style) = self.style {
            generator.box_style = style;
        }
        if let Some(width) = self.width {
            generator.plate_visible_width = width;
        }
        if let Some(height) = self.height {
            generator.plate_visible_height = height;
        }
        if let Some(plates) = self.plates {
            generator.wood_plates_count = plates;
        }
        if let Some(corner) = self.window_corner {
            generator.window_corner = corner;
        }
        if let Some(thickness) = self.wood_plate_thickness {
            generator.wood_plate_thickness = thickness;
        }
        if let Some(thickness) = self.diffuser_plate_thickness {
            generator.diffuser_plate_thickness = thickness;
        }
        if let Some(depth) = self.background_depth {
            generator.background_depth = depth;
        }
        if let Some(spacing) = self.inter_plate_spacing {
            generator.inter_plate_spacing = spacing;
        }
        if let Some(margin) = self.margin {
            generator.margin = margin;
        }
        if let Some(holes) = &self.back_extra_holes {
            generator.back_extra_holes = holes.replace(';', "\n");
        }
        if let Some(diameter) = self.screw_diameter {
            generator.lock_screw_diameter = diameter;
        }
        if let Some(length) = self.lock_screw_length {
            generator.lock_screw_length = length;
        }
        if let Some(thickness) = self.lock_nut_thickness {
            generator.lock_nut_thickness = thickness;
        }
        if let Some(width) = self.lock_nut_width {
            generator.lock_nut_width = width;
        }
        if self.hooks {
            generator.hooks = true;
        }
        if let Some(thickness) = self.thickness {
            config.material.thickness = thickness;
        }
        if let Some(burn) = self.burn {
            config.material.burn = burn;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn build(config: &Config) -> anyhow::Result<NightLightBox> {
    let mut generator = NightLightBox::new(config.generator.clone(), config.material.clone())?;
    generator.render()?;
    Ok(generator)
}

fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    if let Some(output) = &args.output {
        check_output_path(output, args.box_args.config.as_deref())?;
    }
    let mut config = args.box_args.load_config()?;

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(OutputFormat::from_path));
    if let Some(format) = format {
        config.output.format = format;
    }
    if args.no_kerf {
        config.output.kerf_compensation = false;
    }
    if args.labels {
        config.output.svg.labels = true;
    }

    let generator = build(&config)?;
    let options = config.export_options(generator.description());

    match &args.output {
        Some(path) => {
            write_file(generator.sheet(), &options, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("{} parts written to {}", generator.sheet().len(), path.display());
        }
        None => {
            let content = export_sheet(generator.sheet(), &options)?;
            std::io::stdout().write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

fn defaults(json: bool) -> anyhow::Result<()> {
    let config = Config::new();
    let text = if json { config.to_json()? } else { config.to_toml()? };
    println!("{}", text);
    Ok(())
}

/// One line per part: index, label and size.
pub fn parts_table(generator: &NightLightBox) -> Vec<String> {
    generator
        .sheet()
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let bbox = part.bounding_box();
            format!(
                "{:>2}  {:<32} {:>8.2} x {:>8.2} mm",
                i + 1,
                part.label.replace('\n', " "),
                bbox.width(),
                bbox.height()
            )
        })
        .collect()
}

fn parts(args: &BoxArgs) -> anyhow::Result<()> {
    let config = args.load_config()?;
    let generator = build(&config)?;
    let (x, y, h) = generator.inner_dimensions();
    println!("Inner size: {:.2} x {:.2} x {:.2} mm", x, y, h);
    for line in parts_table(&generator) {
        println!("{}", line);
    }
    Ok(())
}

fn assembly() {
    for (i, step) in ASSEMBLY_STEPS.iter().enumerate() {
        println!("{:>2}. {}", i + 1, step);
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Generate(args) => generate(args),
        Command::Defaults { json } => defaults(*json),
        Command::Parts(args) => parts(args),
        Command::Assembly => {
            assembly();
            Ok(())
        }
    }
}

/// Absolute form of `path`. A file that does not exist yet is resolved
/// through its parent directory.
fn resolved(path: &Path) -> PathBuf {
    if let Ok(path) = path.canonicalize() {
        return path;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

/// Refuse to overwrite a config file with the generated output.
pub fn check_output_path(output: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    if let Some(config) = config {
        if resolved(output) == resolved(config) {
            bail!("Output file {} is the configuration file", output.display());
        }
    }
    Ok(())
}
