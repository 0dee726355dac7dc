//! Pipeline Trace Table Writer.
//!
//! Writes the per-cycle trace table to a file. The column layout is fixed
//! and consumed downstream by diff-based grading and waveform-correlation
//! scripts, so cell widths and padding are part of the contract:
//!
//! ```text
//! Cycle |     IF      |     ID      |     EX      |     MEM     |     WB      |    Reg WB    | MEM Bus
//!     0 |   0:addi    |   -:-       |   -:-       |   -:-       |   -:-       |              |
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::isa::classify::classify;

/// Fixed column header for the trace table.
const HEADER: &str = "Cycle |     IF      |     ID      |     EX      |     MEM     |     WB      |    Reg WB    | MEM Bus";

/// Width of the blank register-writeback cell, excluding the leading `|`.
const REG_CELL_BLANK: &str = "              ";

/// Errors from trace-file creation and row emission.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be created.
    #[error("could not create trace file '{path}': {source}")]
    Create {
        /// Path of the file that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A row write or the final flush failed.
    #[error("trace file I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// One occupied pipeline-stage cell: the stage's PC and the raw word it
/// holds. The writer names the word itself; callers never pre-classify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageSlot {
    /// Program counter of the instruction in this stage.
    pub pc: u32,
    /// Raw 32-bit instruction word in this stage.
    pub inst: u32,
}

/// A register writeback event for the `Reg WB` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register index (0-31). Writes to `x0` are architectural
    /// no-ops and render as a blank cell.
    pub index: u8,
    /// Value written to the register.
    pub data: u32,
}

/// Memory-bus activity for the `MEM Bus` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusCommand {
    /// No bus transaction this cycle.
    Idle,
    /// Read request.
    Load {
        /// Address being read.
        addr: u32,
    },
    /// Write request.
    Store {
        /// Address being written.
        addr: u32,
        /// Low data word of the write.
        data: u32,
    },
}

/// Scoped writer for the pipeline trace file.
///
/// Owns the output stream for its whole lifetime. A trace is one `header`
/// call followed by, per cycle, one `begin_cycle`, five `stage` calls
/// (IF/ID/EX/MEM/WB), one `reg_writeback`, and one `mem_bus`, closed out by
/// `finish`. The writer does not enforce that ordering; it only formats.
#[derive(Debug)]
pub struct TraceWriter {
    out: BufWriter<File>,
}

impl TraceWriter {
    /// Creates the trace file, truncating any previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Create`] when the file cannot be opened for
    /// writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| TraceError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "trace file opened");
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Writes the fixed column header line.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] on write failure.
    pub fn header(&mut self) -> Result<(), TraceError> {
        write!(self.out, "{HEADER}")?;
        Ok(())
    }

    /// Starts the row for a cycle: newline, then the cycle count in a
    /// 5-wide column.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] on write failure.
    pub fn begin_cycle(&mut self, cycle: u64) -> Result<(), TraceError> {
        write!(self.out, "\n{cycle:5} ")?;
        Ok(())
    }

    /// Writes one stage cell: `PC:mnemonic` for an occupied slot, dashes
    /// for an empty one. The PC prints as uppercase hex in a 4-wide field;
    /// the mnemonic is left-adjusted to 8 columns.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] on write failure.
    pub fn stage(&mut self, slot: Option<StageSlot>) -> Result<(), TraceError> {
        match slot {
            Some(slot) => {
                let mnemonic = classify(slot.inst);
                write!(self.out, "|{:>4X}:{:<8}", slot.pc, mnemonic.as_str())?;
            }
            None => write!(self.out, "|{:>4}:{:<8}", "-", "-")?,
        }
        Ok(())
    }

    /// Writes the register-writeback cell. Invalid writebacks and writes
    /// to `x0` render as a blank cell.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] on write failure.
    pub fn reg_writeback(&mut self, wb: Option<RegWrite>) -> Result<(), TraceError> {
        match wb {
            Some(wb) if wb.index != 0 => {
                write!(self.out, "| r{:02}={:<8X} ", wb.index, wb.data)?;
            }
            _ => write!(self.out, "|{REG_CELL_BLANK}")?,
        }
        Ok(())
    }

    /// Writes the memory-bus cell: the command, address, and (for stores)
    /// the low data word. An idle bus is a bare `|`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] on write failure.
    pub fn mem_bus(&mut self, cmd: BusCommand) -> Result<(), TraceError> {
        match cmd {
            BusCommand::Load { addr } => write!(self.out, "| LOAD  [{addr:X}]")?,
            BusCommand::Store { addr, data } => {
                write!(self.out, "| STORE [{addr:X}] = {data:X}")?;
            }
            BusCommand::Idle => write!(self.out, "|")?,
        }
        Ok(())
    }

    /// Terminates the trace: trailing newline, flush, and release of the
    /// file handle.
    ///
    /// Dropping the writer without calling this still flushes buffered rows
    /// but omits the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] when the final write or flush fails.
    pub fn finish(mut self) -> Result<(), TraceError> {
        writeln!(self.out)?;
        self.out.flush()?;
        debug!("trace file closed");
        Ok(())
    }
}
