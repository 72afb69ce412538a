use backtick_scan::{check_file, CheckError, DEFAULT_TARGET};
use clap::Parser;
use std::error::Error;
use std::io;
use std::path::PathBuf;

/// Reports backticks that are not escaped by a preceding backslash.
#[derive(Parser)]
#[command(name = "check-backticks")]
struct Args {
    /// File to inspect
    #[arg(default_value = DEFAULT_TARGET)]
    path: PathBuf,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let result = {
        let mut out = io::stdout().lock();
        check_file(&args.path, &mut out)
    };
    match result {
        Ok(_) => {}
        Err(e @ CheckError::FileNotFound { .. }) => {
            log::debug!("{:?}", e);
            println!("{}", e);
        }
        Err(e) => {
            eprintln!("{}", e);
            let mut cause = e.source();
            while let Some(source) = cause {
                eprintln!("  Caused by: {}", source);
                cause = source.source();
            }
            std::process::exit(1);
        }
    }
}
