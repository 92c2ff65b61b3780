//! Convert command implementation.
//!
//! Turns a single image into ASCII art and prints or saves it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{AsciiError, Result};
use crate::files::{check_file, output_name};
use crate::output::{display_path, Printer};
use crate::pipeline::convert_path;
use crate::types::AsciiCanvas;

/// Convert an image into ASCII art
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image (.png)
    #[arg(required = true)]
    pub input: Option<PathBuf>,

    /// Reverse the brightness ramp
    #[arg(long, short)]
    pub reverse: bool,

    /// Save the output to a file (default: <input>_output.txt)
    #[arg(long, short)]
    pub save: bool,

    /// Output file instead of the default. Implies --save
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output width in characters [default: 100]
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Config file (default: ./asciify.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Only print errors to stderr
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let Some(input) = args.input else {
        return Err(AsciiError::Config {
            message: "No input file given".to_string(),
            help: Some("Usage: asciify <INPUT>".to_string()),
        });
    };

    if !input.is_file() {
        return Err(AsciiError::Io {
            path: input,
            message: "File does not exist".to_string(),
        });
    }

    // Reject unsupported types before any decode is attempted
    check_file(&input)?;

    let config = match &args.config {
        Some(path) => {
            printer.info("Using", &display_path(path));
            Config::load(path)?
        }
        None => {
            let config = Config::discover(Path::new("."))?;
            if config != Config::default() {
                printer.info("Using", CONFIG_FILENAME);
            }
            config
        }
    };
    let options = config.resolve(args.width, args.reverse);

    let destination = match args.output {
        Some(path) => Some(path),
        None if args.save => Some(output_name(&input)),
        None => None,
    };

    printer.status("Converting", &display_path(&input));
    let canvas = convert_path(&input, &options)?;
    printer.status(
        "Rendered",
        &format!("{}x{} characters", canvas.width(), canvas.height()),
    );

    match destination {
        Some(path) => match canvas.save(&path) {
            Ok(()) => printer.status("Saved", &display_path(&path)),
            // A failed write is reported but does not fail the run
            Err(e) => printer.error("error", &e.to_string()),
        },
        None => print_canvas(&canvas, &mut io::stdout().lock())?,
    }

    Ok(())
}

/// Write the canvas plus a final newline. A closed pipe (`| head`) ends
/// output quietly.
fn print_canvas(canvas: &AsciiCanvas, out: &mut dyn Write) -> Result<()> {
    match writeln!(out, "{}", canvas).and_then(|()| out.flush()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(AsciiError::Io {
            path: PathBuf::from("<stdout>"),
            message: e.to_string(),
        }),
        _ => Ok(()),
    }
}
