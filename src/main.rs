//! testshape CLI
//!
//! Draws a shape outline on every frame of a Y4M file, or describes the
//! filter element.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use testshape::filter::{negotiate, FilterChain, PropertyValue, TestShapeFilter, PROPERTIES};
use testshape::format::{Y4mReader, Y4mWriter};
use testshape::shape::ShapeSettings;
use testshape::swscale::FormatConverter;
use testshape::util::PixelFormat;
use testshape::{init, Config};

#[derive(Parser)]
#[command(name = "testshape")]
#[command(about = "Draw shape outlines on NV12 video", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a shape on every frame of a 4:2:0 Y4M file
    Draw {
        /// Input Y4M file
        #[arg(short, long)]
        input: PathBuf,

        /// Output Y4M file
        #[arg(short, long)]
        output: PathBuf,

        /// JSON file with initial settings
        #[arg(long)]
        settings: Option<PathBuf>,

        #[command(flatten)]
        options: ShapeArgs,

        /// Property assignment (e.g. shape=circle), may be repeated
        #[arg(short = 'p', long = "prop", value_name = "NAME=VALUE")]
        props: Vec<String>,
    },

    /// Describe the filter: details, pads and properties
    Inspect {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Per-property options of the draw command
#[derive(Args, Debug, Default)]
struct ShapeArgs {
    /// Shape: rectangle, square, triangle or circle
    #[arg(long)]
    shape: Option<String>,

    /// Color: red, green or blue
    #[arg(long)]
    color: Option<String>,

    /// Center x, used with --coordinate
    #[arg(long, allow_hyphen_values = true)]
    x: Option<i32>,

    /// Center y, used with --coordinate
    #[arg(long, allow_hyphen_values = true)]
    y: Option<i32>,

    /// Place the shape at x/y with explicit sizes
    #[arg(long)]
    coordinate: bool,

    /// Rectangle width
    #[arg(long)]
    rect_l: Option<i32>,

    /// Rectangle height
    #[arg(long)]
    rect_h: Option<i32>,

    /// Triangle height
    #[arg(long)]
    triangle_size: Option<i32>,

    /// Square side
    #[arg(long)]
    square_size: Option<i32>,

    /// Circle radius
    #[arg(long)]
    circle_radius: Option<i32>,
}

impl ShapeArgs {
    /// The options that were given, as property assignments
    fn properties(&self) -> Vec<(&'static str, PropertyValue)> {
        let mut props = Vec::new();
        if let Some(shape) = &self.shape {
            props.push(("shape", PropertyValue::from(shape.as_str())));
        }
        if let Some(color) = &self.color {
            props.push(("color", PropertyValue::from(color.as_str())));
        }
        if self.coordinate {
            props.push(("coordinate", PropertyValue::Bool(true)));
        }
        let ints = [
            ("x", self.x),
            ("y", self.y),
            ("rect_l", self.rect_l),
            ("rect_h", self.rect_h),
            ("triangle_size", self.triangle_size),
            ("square_size", self.square_size),
            ("circle_radius", self.circle_radius),
        ];
        for (name, value) in ints {
            if let Some(value) = value {
                props.push((name, PropertyValue::Int(value)));
            }
        }
        props
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init(Config {
        verbose: cli.verbose,
        debug: cli.debug,
    })?;

    info!("testshape v{}", testshape::VERSION);

    match cli.command {
        Commands::Draw {
            input,
            output,
            settings,
            options,
            props,
        } => {
            info!("Drawing {} -> {}", input.display(), output.display());
            cmd_draw(&input, &output, settings.as_deref(), &options, &props)?;
        }
        Commands::Inspect { json } => {
            cmd_inspect(json)?;
        }
    }

    Ok(())
}

fn load_settings(
    path: Option<&Path>,
    args: &ShapeArgs,
    props: &[String],
) -> anyhow::Result<ShapeSettings> {
    let mut settings = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid settings file {}", path.display()))?
        }
        None => ShapeSettings::default(),
    };

    for (name, value) in args.properties() {
        settings
            .set_property(name, value)
            .with_context(|| format!("Invalid --{}", name.replace('_', "-")))?;
    }

    for assignment in props {
        settings
            .apply_assignment(assignment)
            .with_context(|| format!("Invalid property '{}'", assignment))?;
    }

    Ok(settings)
}

fn cmd_draw(
    input: &Path,
    output: &Path,
    settings_path: Option<&Path>,
    args: &ShapeArgs,
    props: &[String],
) -> anyhow::Result<()> {
    let settings = load_settings(settings_path, args, props)?;

    let mut reader = Y4mReader::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let header = *reader.header();

    // the writer mirrors the reader, so both sides offer the same format
    let info = negotiate(&header.nv12_info(), &header.nv12_info())?;

    let mut chain = FilterChain::new().add(Box::new(TestShapeFilter::with_settings(settings)));
    chain.set_caps(&info)?;

    let to_nv12 = FormatConverter::new(
        header.width,
        header.height,
        PixelFormat::YUV420P,
        PixelFormat::NV12,
    )?;
    let to_i420 = FormatConverter::new(
        header.width,
        header.height,
        PixelFormat::NV12,
        PixelFormat::YUV420P,
    )?;

    let mut writer = Y4mWriter::create(output, header)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut written = 0u64;
    while let Some(frame) = reader.read_frame()? {
        for out in chain.process(to_nv12.convert(&frame)?)? {
            writer.write_frame(&to_i420.convert(&out)?)?;
            written += 1;
        }
    }
    for out in chain.flush()? {
        writer.write_frame(&to_i420.convert(&out)?)?;
        written += 1;
    }

    println!(
        "Drew {} on {} frames ({}x{}) -> {}",
        settings.shape,
        written,
        header.width,
        header.height,
        output.display()
    );

    Ok(())
}

fn cmd_inspect(json: bool) -> anyhow::Result<()> {
    let metadata = TestShapeFilter::metadata();
    let defaults = ShapeSettings::default();

    if json {
        let pads: Vec<_> = TestShapeFilter::pad_templates()
            .iter()
            .map(|pad| {
                serde_json::json!({
                    "name": pad.name,
                    "direction": pad.direction.to_string(),
                    "presence": "always",
                    "caps": pad.caps.to_string(),
                })
            })
            .collect();

        let mut properties = Vec::new();
        for spec in PROPERTIES {
            properties.push(serde_json::json!({
                "name": spec.name,
                "nick": spec.nick,
                "blurb": spec.blurb,
                "type": spec.value_type,
                "default": defaults.property(spec.name)?,
            }));
        }

        let details = serde_json::json!({
            "metadata": metadata,
            "pad_templates": pads,
            "properties": properties,
        });
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("Factory Details:");
    println!("  {:<24} {}", "Name", metadata.name);
    println!("  {:<24} {}", "Long-name", metadata.long_name);
    println!("  {:<24} {}", "Klass", metadata.classification);
    println!("  {:<24} {}", "Description", metadata.description);
    println!("  {:<24} {}", "Author", metadata.author);
    println!();

    println!("Pad Templates:");
    for pad in TestShapeFilter::pad_templates() {
        println!("  {} template: '{}'", pad.direction.to_string().to_uppercase(), pad.name);
        println!("    Availability: Always");
        println!("    Capabilities:");
        println!("      {}", pad.caps);
        println!();
    }

    println!("Element Properties:");
    for spec in PROPERTIES {
        println!("  {:<20}: {}", spec.name, spec.blurb);
        println!(
            "  {:<20}  {}. Default: {}",
            "",
            spec.value_type,
            defaults.property(spec.name)?
        );
    }

    Ok(())
}
