//! The listing of all runs of a block table.
use crate::run::Run;

use core::fmt;

/// The indentation of the fields of a listed run.
const INDENT: &str = "   ";

/// A snapshot of all runs of a [`BlockTable`](crate::BlockTable), ordered by
/// their block count.
///
/// The [`Display`](fmt::Display)-implementation renders the listing in the
/// output format of the simulation:
/// ```text
/// AllocatedMemBlock 1
///    Process Id = 5
///    MemBlocks = 2
///    MemorySize = 1000
/// AllocatedMemBlock 2
///    Process Id = 0
///    MemBlocks = 2046
///    MemorySize = 1047552
///
/// ```
/// Every listing is terminated by a single blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    runs: Vec<Run>,
}
impl Report {
    pub(crate) fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// The listed runs in report order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Iterate over the runs together with their 1-based sequence number.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Run)> + '_ {
        self.runs.iter().enumerate().map(|(i, run)| (i + 1, run))
    }

    /// The number of listed runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Query, whether the report lists no runs at all.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sequence, run) in self.iter() {
            writeln!(f, "AllocatedMemBlock {sequence}")?;
            writeln!(f, "{INDENT}Process Id = {}", run.owner())?;
            writeln!(f, "{INDENT}MemBlocks = {}", run.block_count())?;
            writeln!(f, "{INDENT}MemorySize = {}", run.byte_size())?;
        }
        writeln!(f)
    }
}
