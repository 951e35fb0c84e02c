use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use region_reset::catalog::RegionCatalog;
use region_reset::store::SaveDir;
use region_reset::workflow::{self, PassOutcome, SelectionOutcome};

#[derive(Parser, Debug)]
#[command(name = "region_reset")]
#[command(about = "Delete saved map regions so the game regenerates them")]
struct Args {
    /// Save directory containing the map_{x}_{y}.bin files
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match run(&args, &mut input, &mut out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Terminal I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<ExitCode> {
    let catalog = RegionCatalog::default();
    let store = SaveDir::new(&args.dir);

    writeln!(out, "WARNING: Back up your save before continuing!")?;

    let selection = match workflow::resolve_selection(&catalog, input, out)? {
        SelectionOutcome::Quit => return Ok(ExitCode::SUCCESS),
        SelectionOutcome::Selected(selection) => selection,
    };

    if selection.is_empty() {
        writeln!(out, "No regions selected")?;
        return Ok(ExitCode::SUCCESS);
    }

    let files = workflow::selection_files(&selection);

    match workflow::run_deletion_pass(&files, &store, input, out)? {
        PassOutcome::Aborted => Ok(ExitCode::SUCCESS),
        PassOutcome::Completed { removed, missing } => {
            writeln!(
                out,
                "Reset complete: {} files removed, {} missing (skipped)",
                removed, missing
            )?;
            Ok(ExitCode::SUCCESS)
        }
        PassOutcome::Failed { .. } => Ok(ExitCode::FAILURE),
    }
}
