extern crate clap;
extern crate env_logger;
extern crate exitcode;

use clap::{crate_version, Arg, Command};
use log::{error, info};
use mimalloc::MiMalloc;
use serde_json::json;
use std::fs::File;
use std::io;
use std::io::Read;

use sbwt::bwt_transform::transform;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    //initialize logging for our benefit later
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    //this is the CLI block, params that get populated appear before
    let mut in_fn: String = "stdin".to_string();

    let matches = Command::new("sbwt Transform")
        .version(crate_version!())
        .author("J. Matthew Holt <jholt@hudsonalpha.org>")
        .about("sbwt Transform - computes the BWT and primary index of a terminated string")
        .arg(Arg::new("in_fn")
            .short('i')
            .long("--input")
            .takes_value(true)
            .help("The text to transform, trailing newlines ignored (default: stdin)"))
        .arg(Arg::new("json")
            .short('j')
            .long("--json")
            .help("Write the transform and primary index as a single JSON object"))
        .get_matches();

    //optional values
    in_fn = matches.value_of_t("in_fn").unwrap_or(in_fn);
    let json_output: bool = matches.is_present("json");

    info!("Input parameters (required):");
    info!("\tInput: \"{}\"", in_fn);
    info!("Optional Parameters:");
    info!("\toutput format: {}", if json_output { "json" } else { "text" });

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

    let mut input: Vec<u8> = vec![];
    if let Err(e) = input_reader.read_to_end(&mut input) {
        error!("Failed to read input: {:?}", e);
        std::process::exit(exitcode::IOERR);
    }
    while input.last() == Some(&b'\n') || input.last() == Some(&b'\r') {
        input.pop();
    }

    //the library expects a terminated string, so terminate it if the caller did not
    if !input.contains(&b'$') {
        info!("No \"$\" found in input, appending terminator.");
        input.push(b'$');
    }

    //this is where the work happens
    let (transformed, primary_index) = match transform(&input) {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to transform input: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    };

    if json_output {
        let result = json!({
            "transformed": String::from_utf8_lossy(&transformed),
            "primary_index": primary_index
        });
        println!("{}", result);
    } else {
        println!("{}", String::from_utf8_lossy(&transformed));
        println!("{}", primary_index);
    }

    info!("Transform finished successfully.");
}
