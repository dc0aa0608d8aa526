//! The record describing a single run of blocks.

/// The identifier of the process owning a [`Run`].
pub type ProcessId = i32;

/// The reserved [`ProcessId`] marking a run as free.
///
/// No process is ever allowed to own memory under this id.
pub const UNUSED_PID: ProcessId = 0;

/// A contiguous span of blocks, either free or owned by a single process.
///
/// Only the first slot of a run carries a `Run`-record in the block table, the
/// remaining `block_count - 1` slots are covered by it and skipped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    owner: ProcessId,
    block_count: usize,
    byte_size: usize,
}
impl Run {
    /// Create a free run spanning `blocks` blocks of `block_size` bytes each.
    ///
    /// A free run always reports its full capacity as its byte size.
    pub const fn free(blocks: usize, block_size: usize) -> Self {
        Self {
            owner: UNUSED_PID,
            block_count: blocks,
            byte_size: blocks * block_size,
        }
    }

    /// Create a run of `blocks` blocks owned by `owner`, of which `bytes` are
    /// actually requested.
    pub const fn used(owner: ProcessId, blocks: usize, bytes: usize) -> Self {
        Self {
            owner,
            block_count: blocks,
            byte_size: bytes,
        }
    }

    /// The owning process or [`UNUSED_PID`] for a free run.
    pub const fn owner(&self) -> ProcessId {
        self.owner
    }

    /// The number of blocks covered by this run.
    pub const fn block_count(&self) -> usize {
        self.block_count
    }

    /// The number of bytes in use, which is the full capacity for free runs.
    pub const fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Query, whether the run is free.
    pub const fn is_free(&self) -> bool {
        self.owner == UNUSED_PID
    }
}

#[cfg(test)]
mod tests {
    use super::{Run, UNUSED_PID};

    #[test]
    fn free_run_uses_full_capacity() {
        let run = Run::free(3, 512);
        assert!(run.is_free());
        assert_eq!(run.owner(), UNUSED_PID);
        assert_eq!(run.block_count(), 3);
        assert_eq!(run.byte_size(), 1536);
    }

    #[test]
    fn used_run_keeps_requested_bytes() {
        let run = Run::used(7, 2, 1000);
        assert!(!run.is_free());
        assert_eq!(run.owner(), 7);
        assert_eq!(run.block_count(), 2);
        assert_eq!(run.byte_size(), 1000);
    }
}
