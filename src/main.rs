mod error;
mod folder_scanner;
mod session;

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::error::DedupError;
use crate::folder_scanner::{hasher::Sha256Hasher, scanner::Scanner};
use crate::session::{Session, SessionOutcome};

/// Deletes files that duplicate another file in the same directory.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Root directory to scan
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Input folder {}", args.dir.display());

    let scanner = Scanner::new(Sha256Hasher);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let mut session = Session::new();
    let outcome = session.run(&args.dir, &scanner, &mut input, &mut output);
    info!("Session ended in phase {:?}", session.phase());

    match outcome {
        Ok(SessionOutcome::Completed(tally)) => {
            info!(
                "Exiting after deleting {} files ({} failures)",
                tally.success_count(),
                tally.failure_count()
            );
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            info!("Exiting: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            error!("{}", error);
            ExitCode::from(exit_status(&error))
        }
    }
}

/// Only an unusable root is a failed run; console errors still exit 0.
fn exit_status(error: &DedupError) -> u8 {
    match error {
        DedupError::InvalidRoot(_) => 1,
        _ => 0,
    }
}
