//! This module provides the block table and its support types.
//!
//! The block table is the model of the simulated memory: a fixed number of
//! equally sized blocks, grouped into runs, each of which is either free or
//! owned by a single process.
mod slots;

use crate::report::Report;
use crate::run::{ProcessId, Run, UNUSED_PID};
use slots::{Slots, ValidatedSlot};

use log::{debug, info, trace};

/// The number of blocks in the default simulated memory.
pub const NUM_BLOCKS: usize = 2048;
/// The number of bytes per block in the default simulated memory.
pub const BLOCK_SIZE: usize = 512;

/// The default block table: one megabyte made up of `2048` blocks of `512`
/// bytes each.
pub type Megabyte = BlockTable<NUM_BLOCKS, BLOCK_SIZE>;

/// A best-fit allocator over `N` blocks of `B` bytes each.
///
/// The memory is always partitioned into runs: walking the table from slot `0`
/// and jumping over the `block_count` of each run visits every run exactly once
/// and ends exactly at slot `N`. Freed runs are never merged with their free
/// neighbors, so fragmentation is permanent until the next [`reset()`].
///
/// [`reset()`]: Self::reset
pub struct BlockTable<const N: usize = NUM_BLOCKS, const B: usize = BLOCK_SIZE> {
    slots: Slots<N>,
}
impl<const N: usize, const B: usize> BlockTable<N, B> {
    /// Create a new [`BlockTable`] with a single free run covering all blocks.
    ///
    /// # Panics
    /// This function panics if there are no blocks (`N == 0`) or if the blocks
    /// have no size (`B == 0`).
    pub const fn new() -> Self {
        assert!(N >= 1, "too few blocks: minimum count is 1");
        assert!(B >= 1, "too small blocks: minimum size is 1");

        Self {
            slots: Slots::new(B),
        }
    }

    /// The total number of bytes managed by this table.
    pub const fn capacity(&self) -> usize {
        N * B
    }

    /// Discard all runs and start over with one free run spanning all blocks.
    pub fn reset(&mut self) {
        self.slots.clear(B);
        info!("block table reset to {} free blocks", N);
    }

    /// Allocate `bytes` bytes for the process `owner`.
    ///
    /// The request is rounded up to whole blocks. Among all free runs large
    /// enough, the one leaving the fewest blocks unused is chosen; on a tie the
    /// run with the lowest starting slot wins. Any unused blocks are split off
    /// into a new free run directly behind the allocation.
    ///
    /// Returns the starting slot of the allocated run. If no free run is large
    /// enough, the table is left untouched and `None` is returned. The same is
    /// true for requests of zero bytes or for the reserved owner [`UNUSED_PID`].
    pub fn allocate(&mut self, owner: ProcessId, bytes: usize) -> Option<usize> {
        if owner == UNUSED_PID || bytes == 0 {
            debug!("ignoring allocation of {bytes} bytes for process {owner}");
            return None;
        }
        let needed = blocks_for(bytes, B);

        let mut best: Option<(ValidatedSlot, usize)> = None;
        for slot in self.slots.runs() {
            let run = &self.slots[slot];
            if !run.is_free() || run.block_count() < needed {
                continue;
            }

            let slack = run.block_count() - needed;
            if best.map_or(true, |(_, best_slack)| slack < best_slack) {
                best = Some((slot, slack));
                if slack == 0 {
                    break;
                }
            }
        }

        let Some((slot, slack)) = best else {
            debug!("no free run of {needed} blocks for process {owner}, dropping request");
            return None;
        };
        if slack > 0 {
            trace!("splitting {slack} free blocks off at slot {}", slot.get() + needed);
            self.slots.place(slot.get() + needed, Run::free(slack, B));
        }
        self.slots[slot] = Run::used(owner, needed, bytes);
        Some(slot.get())
    }

    /// Release the memory owned by the process `owner`.
    ///
    /// The first run owned by that process is marked as free again. It is not
    /// merged with adjacent free runs. Returns the starting slot of the freed
    /// run or `None`, if the process does not own any memory.
    pub fn release(&mut self, owner: ProcessId) -> Option<usize> {
        if owner == UNUSED_PID {
            return None;
        }

        let Some(slot) = self
            .slots
            .runs()
            .find(|&slot| self.slots[slot].owner() == owner)
        else {
            debug!("process {owner} owns no memory, nothing to release");
            return None;
        };
        let blocks = self.slots[slot].block_count();
        self.slots[slot] = Run::free(blocks, B);
        Some(slot.get())
    }

    /// Create a [`Report`] of all runs ordered by their block count.
    ///
    /// Runs with the same block count keep their slot order.
    pub fn list(&self) -> Report {
        let mut runs: Vec<Run> = self.runs().map(|(_, run)| *run).collect();
        runs.sort_by_key(Run::block_count);
        Report::new(runs)
    }

    /// Iterate over all runs in slot order together with their starting slot.
    pub fn runs(&self) -> impl Iterator<Item = (usize, &Run)> + '_ {
        self.slots
            .runs()
            .map(move |slot| (slot.get(), &self.slots[slot]))
    }

    /// The total number of blocks in free runs.
    pub fn free_blocks(&self) -> usize {
        self.runs()
            .filter(|(_, run)| run.is_free())
            .map(|(_, run)| run.block_count())
            .sum()
    }
}
impl<const N: usize, const B: usize> Default for BlockTable<N, B> {
    fn default() -> Self {
        Self::new()
    }
}

/// The number of blocks of `block_size` bytes needed to hold `bytes` bytes.
const fn blocks_for(bytes: usize, block_size: usize) -> usize {
    bytes / block_size + (bytes % block_size != 0) as usize
}
