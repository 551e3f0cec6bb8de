use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use toonshade_core::export::{material_json, PaletteMeta};
use toonshade_core::{profile, Color, MaterialColors, ShadeBinding, ShadeParameters, ShadeResult, SlotNames, VERSION};

#[derive(Parser, Debug)]
#[command(name = "toonshade", version = VERSION, about = "Toon shade palette tools")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive the two shade colors from a base color
    Derive {
        /// Base color as #RRGGBB
        color: String,
        #[arg(long, default_value_t = 5)]
        hue_shift: u16,
        #[arg(long, default_value_t = 20)]
        saturation_delta: u8,
        #[arg(long, default_value_t = 20)]
        value_delta: u8,
        /// Print palette metadata as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load and inspect a shade profile YAML
    Inspect { path: String },
    /// Bind a profile to an in-memory material and print the written slots
    Apply {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Render base/first/second shade bands to a PNG
    Swatch {
        path: String,
        #[arg(long, default_value_t = 384)]
        width: u32,
        #[arg(long, default_value_t = 128)]
        height: u32,
        #[arg(long, default_value = "swatch.png")]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    match cli.cmd {
        Command::Derive { color, hue_shift, saturation_delta, value_delta, json } => {
            let base: Color = color.parse()?;
            let params = ShadeParameters::new(hue_shift, saturation_delta, value_delta)?;
            let result = params.derive(base);
            if json {
                let slots = SlotNames::default();
                println!("{}", PaletteMeta::new(params, &result, &slots).to_json_pretty()?);
            } else {
                print_palette(&result);
            }
        }
        Command::Inspect { path } => {
            let p = profile::load_from_path(&path)?;
            let s = &p.shading;
            println!("Loaded profile: {}", p.id);
            println!("  base color: {}", p.base_color);
            println!("  hue shift: {}°, saturation -{}%, value -{}%", s.hue_shift_degrees, s.saturation_delta, s.value_delta);
            println!("  preview: {}", p.preview);
            let slots = p.slots.resolve();
            println!("  slots: {}, {}, {}", slots.base, slots.first_shade, slots.second_shade);
            print_palette(&p.shading.derive(p.base_color));
        }
        Command::Apply { path, json } => {
            let p = profile::load_from_path(&path)?;
            let mut binding = ShadeBinding::with_surface(p.settings(), MaterialColors::new());
            binding.apply()?;
            let mat = binding.surface().context("binding lost its surface")?;
            info!("Applied '{}' to {} slot(s)", p.id, mat.len());
            if json {
                println!("{}", material_json(mat)?);
            } else {
                for (slot, [r, g, b, _]) in &mat.slots {
                    println!("{} = {}", slot, Color::rgb(*r, *g, *b));
                }
            }
        }
        Command::Swatch { path, width, height, out } => {
            let p = profile::load_from_path(&path)?;
            let result = p.shading.derive(p.base_color);
            let img = render_swatch(&result, width, height);
            img.save(&out).with_context(|| format!("writing {}", out))?;
            println!("Wrote {}x{} swatch to {}", width, height, out);
        }
    }
    Ok(())
}

fn print_palette(result: &ShadeResult) {
    println!("  base:         {}", result.base);
    println!("  first shade:  {}", result.first_shade);
    println!("  second shade: {}", result.second_shade);
}

// Three equal vertical bands, left to right in shade order.
fn render_swatch(result: &ShadeResult, width: u32, height: u32) -> image::RgbImage {
    let width = width.max(3);
    let height = height.max(1);
    let bands = result.colors().map(|c| image::Rgb(c.to_rgb8()));
    debug!(width, height, "rendering swatch");
    image::RgbImage::from_fn(width, height, |x, _| {
        let band = ((x as u64 * 3) / width as u64).min(2) as usize;
        bands[band]
    })
}
