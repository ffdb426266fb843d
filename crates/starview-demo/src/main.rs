//! StarView demo entry point.

use std::env;
use std::process;

use starview_demo::{Options, USAGE, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: {}", USAGE);
            process::exit(2);
        }
    };

    match run(&options) {
        Ok(output) => {
            if options.summary {
                println!("{}", output.summary());
            } else if options.output.is_none() {
                println!("{}", output.svg);
            }
        }
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    }
}
