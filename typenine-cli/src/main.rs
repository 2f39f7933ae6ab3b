//! `typenine` CLI — rasterize a TrueType font into a Plan 9 subfont.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::Parser;

use typenine_core::{render, Config, OnMissingGlyph, RasterStrip, Rendered};
use typenine_fonts::ScaledFace;
use typenine_plan9::{write_descriptor, write_image, write_subfont};

#[derive(Parser)]
#[command(version, about = "TrueType to Plan 9 bitmap subfont converter")]
struct Cli {
    /// Screen resolution in dots per inch
    #[arg(long, default_value_t = 72.0)]
    dpi: f64,

    /// Filename of the ttf font
    #[arg(long, default_value = "anonymous-pro.ttf")]
    fontfile: PathBuf,

    /// Font size in points
    #[arg(long, default_value_t = 14.0)]
    size: f64,

    /// Policy for code points the font has no glyph for:
    /// "zero-width", "box", or "fail"
    #[arg(long, default_value = "zero-width", value_parser = parse_on_missing)]
    on_missing: OnMissingGlyph,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn parse_on_missing(s: &str) -> Result<OnMissingGlyph, String> {
    match s.to_lowercase().as_str() {
        "zero-width" => Ok(OnMissingGlyph::ZeroWidth),
        "box" => Ok(OnMissingGlyph::SubstituteBox),
        "fail" => Ok(OnMissingGlyph::Fail),
        _ => Err(format!(
            "unknown missing-glyph policy \"{s}\": expected \"zero-width\", \"box\", or \"fail\""
        )),
    }
}

fn main() {
    let cli = Cli::parse();

    // Font problems produce no output files and a clean exit; everything
    // after a successful load exits non-zero on failure.
    let bytes: Arc<[u8]> = match fs::read(&cli.fontfile) {
        Ok(b) => Arc::from(b.into_boxed_slice()),
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", cli.fontfile.display());
            return;
        }
    };
    let face = match ScaledFace::new(bytes, cli.size, cli.dpi) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    let config = Config {
        size: cli.size,
        dpi: cli.dpi,
        on_missing: cli.on_missing,
    };
    let rendered = match render(&face, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = write_outputs(&rendered, &cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Write the three output files: the inspection PNG, the combined Plan 9
/// image + subfont blob, and the descriptor naming it.
fn write_outputs(rendered: &Rendered, cli: &Cli) -> io::Result<()> {
    // File names carry the integer part of the size, as the original
    // Plan 9 tooling expects (R.14.1 for a 14.5pt run).
    let size_tag = cli.size as i64;

    write_png(&cli.output.join("out.png"), &rendered.strip)?;
    println!("Wrote out.png OK.");

    let subfont_name = format!("R.{size_tag}.1");
    write_file(&cli.output.join(&subfont_name), |w| {
        write_image(w, &rendered.strip)?;
        write_subfont(w, &rendered.index, rendered.size_px, rendered.ascent_px)
    })?;

    write_file(&cli.output.join(format!("R.{size_tag}.font")), |w| {
        write_descriptor(w, rendered.size_px, rendered.ascent_px, &subfont_name)
    })
}

/// Write one output file through a buffered writer, flushing before close.
fn write_file<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut w = BufWriter::new(File::create(path)?);
    write(&mut w)?;
    w.flush()
}

/// Encode the strip as an 8-bit greyscale PNG for human inspection.
fn write_png(path: &Path, strip: &RasterStrip) -> io::Result<()> {
    let w = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(w, strip.width(), strip.height());
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(strip.pixels())?;
    writer.finish()?;
    Ok(())
}
