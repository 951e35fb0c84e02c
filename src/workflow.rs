//! Interactive selection and deletion workflow.
//!
//! Reads one line of region input, expands the selection into map cell
//! files, and drives the confirm-then-delete pass. Every outcome is
//! returned as a value; the driver maps outcomes to process exit codes.

use std::io::{self, BufRead, Write};

use crate::catalog::{Region, RegionCatalog};
use crate::store::MapFiles;

/// Result of the region selection prompt.
pub enum SelectionOutcome {
    /// User asked to cancel (`quit`, or end of input).
    Quit,
    /// Resolved selection; empty when an invalid token discarded it.
    Selected(Vec<Region>),
}

/// Result of the confirm-and-delete pass.
pub enum PassOutcome {
    /// Confirmation declined; nothing was removed.
    Aborted,
    /// Every file in the list was processed.
    Completed { removed: usize, missing: usize },
    /// A removal failed; files after it were not attempted.
    Failed { file: String, source: io::Error },
}

/// Prompt for a region selection and resolve it against the catalog.
///
/// A single pass over one input line: `quit` cancels, a leading `all`
/// token selects the whole catalog and the rest of the line is ignored.
/// An invalid token discards the regions accumulated so far and is
/// reported, but the line is not re-prompted; tokens after it still
/// accumulate.
pub fn resolve_selection(
    catalog: &RegionCatalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<SelectionOutcome> {
    writeln!(
        out,
        "Enter a comma-separated list of regions to reset, 'all' to reset every region, or 'quit' to cancel"
    )?;
    writeln!(out, "Valid regions are:")?;
    for name in catalog.names() {
        writeln!(out, " - {}", name)?;
    }
    write!(out, " > ")?;
    out.flush()?;

    let line = match read_line(input)? {
        Some(line) => line,
        None => return Ok(SelectionOutcome::Quit),
    };
    let line = line.trim();

    if line.eq_ignore_ascii_case("quit") {
        return Ok(SelectionOutcome::Quit);
    }

    let tokens: Vec<String> = line.split(',').map(|t| t.trim().to_lowercase()).collect();

    if tokens.first().map(String::as_str) == Some("all") {
        return Ok(SelectionOutcome::Selected(catalog.regions().to_vec()));
    }

    let mut selection = Vec::new();
    for token in &tokens {
        match catalog.lookup(token) {
            Some(region) => selection.push(region.clone()),
            None => {
                selection.clear();
                writeln!(out, "Invalid region name '{}'", token)?;
            }
        }
    }

    Ok(SelectionOutcome::Selected(selection))
}

/// Expand a selection into the full list of cell files.
///
/// Duplicates from overlapping regions are preserved.
pub fn selection_files(selection: &[Region]) -> Vec<String> {
    selection.iter().flat_map(|r| r.cell_files()).collect()
}

/// Print the pending count, require the literal `Ok`, then delete in order.
///
/// Missing files are reported and skipped; a failed removal stops the pass
/// immediately with no rollback of files already removed.
pub fn run_deletion_pass(
    files: &[String],
    store: &impl MapFiles,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<PassOutcome> {
    writeln!(
        out,
        "{} files will be erased - type 'Ok' to confirm",
        files.len()
    )?;
    out.flush()?;

    // Exact match, case-sensitive, no whitespace trimming.
    let confirmed = matches!(read_line(input)?, Some(line) if line == "Ok");
    if !confirmed {
        return Ok(PassOutcome::Aborted);
    }

    let mut removed = 0;
    let mut missing = 0;
    for file in files {
        if store.exists(file) {
            if let Err(e) = store.remove(file) {
                writeln!(out, "Failed to remove '{}': {}", file, e)?;
                return Ok(PassOutcome::Failed {
                    file: file.clone(),
                    source: e,
                });
            }
            removed += 1;
        } else {
            writeln!(out, "Ignoring missing file '{}'", file)?;
            missing += 1;
        }
    }

    Ok(PassOutcome::Completed { removed, missing })
}

/// Read one line, stripping the trailing newline. Returns None at EOF.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
