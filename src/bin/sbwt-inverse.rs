extern crate clap;
extern crate env_logger;
extern crate exitcode;

use clap::{crate_version, Arg, Command};
use log::{error, info};
use mimalloc::MiMalloc;
use std::fs::File;
use std::io;
use std::io::Read;

use sbwt::bwt_inverse::inverse;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// pulls the (transformed, primary_index) pair out of the raw input text,
/// either from the two-line plain form or from the JSON object written by
/// `sbwt-transform --json`
fn parse_pair(text: &str, json_input: bool) -> Option<(String, usize)> {
    if json_input {
        let parsed: serde_json::Value = serde_json::from_str(text.trim()).ok()?;
        let transformed = parsed["transformed"].as_str()?.to_string();
        let primary_index = parsed["primary_index"].as_u64()? as usize;
        Some((transformed, primary_index))
    } else {
        let mut lines = text.lines();
        let transformed = lines.next()?.trim_end_matches('\r').to_string();
        let primary_index: usize = lines.next()?.trim().parse().ok()?;
        Some((transformed, primary_index))
    }
}

fn main() {
    //initialize logging for our benefit later
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    //this is the CLI block, params that get populated appear before
    let mut in_fn: String = "stdin".to_string();

    let matches = Command::new("sbwt Inverse")
        .version(crate_version!())
        .author("J. Matthew Holt <jholt@hudsonalpha.org>")
        .about("sbwt Inverse - recovers the original string from a BWT and primary index")
        .arg(Arg::new("in_fn")
            .short('i')
            .long("--input")
            .takes_value(true)
            .help("The transform to invert: transformed string, then primary index on the next line (default: stdin)"))
        .arg(Arg::new("json")
            .short('j')
            .long("--json")
            .help("Read a JSON object as written by sbwt-transform --json"))
        .get_matches();

    //optional values
    in_fn = matches.value_of_t("in_fn").unwrap_or(in_fn);
    let json_input: bool = matches.is_present("json");

    info!("Input parameters (required):");
    info!("\tInput: \"{}\"", in_fn);
    info!("Optional Parameters:");
    info!("\tinput format: {}", if json_input { "json" } else { "text" });

    let mut input_reader: Box<dyn io::Read> = if &in_fn == "stdin" {
        Box::new(io::stdin())
    } else {
        Box::new(match File::open(&in_fn) {
            Ok(fp) => fp,
            Err(e) => {
                error!("Failed to open input file: {:?}", e);
                std::process::exit(exitcode::NOINPUT);
            }
        })
    };

    let mut text: String = String::new();
    if let Err(e) = input_reader.read_to_string(&mut text) {
        error!("Failed to read input: {:?}", e);
        std::process::exit(exitcode::IOERR);
    }

    let (transformed, primary_index) = match parse_pair(&text, json_input) {
        Some(pair) => pair,
        None => {
            error!("Failed to parse a (transformed, primary index) pair from input");
            std::process::exit(exitcode::DATAERR);
        }
    };

    //this is where the work happens
    let original = match inverse(transformed.as_bytes(), primary_index) {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to invert transform: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    };

    println!("{}", String::from_utf8_lossy(&original));

    info!("Inversion finished successfully.");
}
