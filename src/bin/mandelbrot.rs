extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{write_image, MandelbrotError, MandelbrotRenderer, OutputFormat, RenderConfig};
use std::str::FromStr;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_size(s: String) -> Result<(), String> {
    validate_range(
        &s,
        2usize,
        65_535,
        "Could not parse image dimension",
        "Image dimensions must be between 2 and 65535",
    )
}

const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const FILE: &str = "file";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const FORMAT: &str = "format";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot Creator")
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .short("w")
                .takes_value(true)
                .default_value("1024")
                .validator(validate_size)
                .help("Width of output image"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .long(HEIGHT)
                .short("h")
                .takes_value(true)
                .default_value("1024")
                .validator(validate_size)
                .help("Height of output image"),
        )
        .arg(
            Arg::with_name(FILE)
                .long(FILE)
                .short("f")
                .takes_value(true)
                .default_value("mandelbrotSetImage")
                .help("Output file name, without extension"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1024")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iterations before a point is considered inside the set"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1024,
                        "Could not parse thread count",
                        "Thread count must be between 1 and 1024",
                    )
                })
                .help("Number of threads to use in solver [default: all cores]"),
        )
        .arg(
            Arg::with_name(FORMAT)
                .long(FORMAT)
                .takes_value(true)
                .possible_values(&["plain", "binary", "png"])
                .default_value("plain")
                .help("Output encoding"),
        )
        .get_matches()
}

fn parse<T: FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.value_of(name).and_then(|s| T::from_str(s).ok())
}

fn run(matches: &ArgMatches) -> Result<String, MandelbrotError> {
    let defaults = RenderConfig::default();
    let config = RenderConfig {
        width: parse(matches, WIDTH).unwrap_or(defaults.width),
        height: parse(matches, HEIGHT).unwrap_or(defaults.height),
        limit: parse(matches, ITERATIONS).unwrap_or(defaults.limit),
        threads: parse(matches, THREADS),
        ..defaults
    };
    let format: OutputFormat = parse(matches, FORMAT).unwrap_or_default();
    let filename = format!(
        "{}.{}",
        matches.value_of(FILE).unwrap_or("mandelbrotSetImage"),
        format.extension()
    );

    let renderer = MandelbrotRenderer::new(config)?;
    info!(
        "rendering {}x{} at {} iterations on {} threads (of {} cores)",
        config.width,
        config.height,
        config.limit,
        renderer.threads(),
        num_cpus::get()
    );
    let pixels = renderer.render()?;
    write_image(&filename, format, config.width, config.height, &pixels)?;
    Ok(filename)
}

fn main() {
    env_logger::init();
    let matches = args();
    match run(&matches) {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(filename) => {
            println!("Success! Mandelbrot image saved: {}", filename);
        }
    }
}
