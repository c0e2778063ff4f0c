use cidr_calc::{shell, version_line};
use clap::Parser;
use std::error::Error;
use std::path::Path;

const LOG_CONFIG: &str = "log4rs.yml";

/// Interactive IPv4 CIDR calculator
#[derive(Parser, Debug)]
#[command(name = "cidr", disable_version_flag = true)]
struct Args {
    /// Print version and build information, then exit
    #[arg(short = 'v', long = "version")]
    version: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.version {
        println!("{}", version_line());
        return Ok(());
    }
    shell::run()?;
    Ok(())
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    if Path::new(LOG_CONFIG).exists() {
        if let Err(e) = log4rs::init_file(LOG_CONFIG, Default::default()) {
            eprintln!("Error initializing log4rs: {e}");
        }
    }
    log::info!("#Start main()");

    if let Err(e) = run(args) {
        log::error!("{e}");
        println!("Alas, there's been an error: {e}");
        std::process::exit(1);
    }
}
