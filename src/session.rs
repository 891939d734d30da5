use std::{
    io::{BufRead, Write},
    path::Path,
};

use log::{debug, warn};

use crate::error::DedupError;
use crate::folder_scanner::{
    duplicates_result_processor::{delete_all, DeletionTally},
    hasher::ContentHasher,
    scanner::Scanner,
};

const RULE: &str = "--------------------------------------------------";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scanning,
    AwaitingConfirmation,
    Deleting,
    Done,
    Cancelled,
}

#[derive(Debug)]
pub enum SessionOutcome {
    NoDuplicates,
    Cancelled,
    Completed(DeletionTally),
}

/// One run of the tool: scan, confirm, delete.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Session { phase: Phase::Idle }
    }
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, next: Phase) {
        debug!("{:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    pub fn run<H, R, W>(
        &mut self,
        root: &Path,
        scanner: &Scanner<H>,
        input: &mut R,
        output: &mut W,
    ) -> Result<SessionOutcome, DedupError>
    where
        H: ContentHasher,
        R: BufRead,
        W: Write,
    {
        self.enter(Phase::Scanning);
        let report = scanner.scan(root)?;

        writeln!(output, "{}", RULE)?;
        writeln!(output, "Scanned directory: {}", root.display())?;
        writeln!(
            output,
            "Compared files level by level in {} directories",
            report.directories
        )?;
        writeln!(output, "{}", RULE)?;

        if !report.errors.is_empty() {
            writeln!(
                output,
                "\n{} problems were reported during the scan, skipped:",
                report.errors.len()
            )?;
            for error in &report.errors {
                writeln!(output, "  {}", error)?;
            }
        }

        if report.deletion_list.is_empty() {
            writeln!(output, "\nNo duplicate files found on the same directory level.")?;
            self.enter(Phase::Done);
            return Ok(SessionOutcome::NoDuplicates);
        }

        self.enter(Phase::AwaitingConfirmation);
        writeln!(output, "\n{}", RULE)?;
        writeln!(
            output,
            "Scan complete! Found {} duplicate files to clean up:",
            report.deletion_list.len()
        )?;
        writeln!(output, "{}", RULE)?;
        for (index, path) in report.deletion_list.iter().enumerate() {
            writeln!(output, "[{}] {}", index + 1, path.display())?;
        }
        writeln!(
            output,
            "\nWarning: the files above will be permanently deleted and cannot be recovered."
        )?;
        write!(output, "Confirm deletion? (y/n): ")?;
        output.flush()?;

        if !confirm(input) {
            writeln!(output, "\nCancelled, no files were deleted.")?;
            self.enter(Phase::Cancelled);
            return Ok(SessionOutcome::Cancelled);
        }

        self.enter(Phase::Deleting);
        writeln!(output, "\nDeleting...")?;
        let tally = delete_all(&report.deletion_list);
        for path in &tally.deleted {
            writeln!(output, "[deleted] {}", path.display())?;
        }
        for error in &tally.failed {
            writeln!(output, "[delete failed] {}", error)?;
        }
        writeln!(
            output,
            "\nDeleted {} files, {} failed",
            tally.success_count(),
            tally.failure_count()
        )?;
        writeln!(output, "{}", RULE)?;
        writeln!(output, "Cleanup complete.")?;

        self.enter(Phase::Done);
        Ok(SessionOutcome::Completed(tally))
    }
}

/// Reads one line; only a lone `y` or `Y` confirms.
pub fn confirm<R: BufRead>(input: &mut R) -> bool {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => is_affirmative(&line),
        Err(error) => {
            warn!("Could not read confirmation: {}", error);
            false
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
