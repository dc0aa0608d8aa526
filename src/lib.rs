//! Best-fit memory allocation simulator
//!
//! This crate simulates a fixed-size, contiguous memory region, that is handed
//! out to processes in whole blocks. The core type is the [`BlockTable`], which
//! offers exactly four operations: [`allocate()`], [`release()`], [`list()`]
//! and [`reset()`]. Around it, the crate provides a small driver, that reads
//! these operations as commands from a text stream and writes the listings to
//! an output stream (see [`command`] and [`driver`]).
//!
//! # Usage
//! ```
//! let mut table = memsim::Megabyte::new();
//! table.allocate(5, 1000);
//!
//! let report = table.list();
//! assert_eq!(report.runs()[0].block_count(), 2);
//! assert_eq!(report.runs()[1].byte_size(), 2046 * 512);
//! ```
//! The default [`Megabyte`] table consists of 2048 blocks of 512 bytes each.
//! Other geometries are available as `BlockTable<N, B>` with `N` blocks of `B`
//! bytes.
//!
//! # Implementation
//! The table is an array with one slot per block. A run of blocks is stored as
//! a single record in the slot of its first block, the other slots of the run
//! are skipped over. Walking the table means jumping from one record to the
//! next by its block count. The basic algorithm is as follows (using a table of
//! 8 blocks of 512 bytes):
//! 1.  We start with an empty table.
//!     ```text
//!     F8 -- -- -- -- -- -- --
//!     ^---------------------
//!     FREE blocks = 8
//!     ```
//!     There is a single free run, which spans all blocks.
//! 2.  Process 1 requests 1000 bytes.
//!     ```text
//!     U2 -- F6 -- -- -- -- --
//!     ^---- ^---------------
//!     1     FREE blocks = 6
//!     ```
//!     The request is rounded up to 2 blocks. The only free run is split: the
//!     first two blocks now belong to process 1 (which uses 1000 of the 1024
//!     bytes), the remainder gets a new record at slot 2.
//! 3.  Process 2 requests 512 bytes, process 3 requests 1500 bytes.
//!     ```text
//!     U2 -- U1 U3 -- -- F2 --
//!     ^---- ^- ^------- ^----
//!     1     2  3        FREE blocks = 2
//!     ```
//! 4.  Process 1 and process 3 release their memory.
//!     ```text
//!     F2 -- U1 F3 -- -- F2 --
//!     ^---- ^- ^------- ^----
//!     FREE  2  FREE     FREE
//!     ```
//!     The runs are marked as free in place. Adjacent free runs are _not_
//!     merged, so a request for 4 blocks could not be fulfilled anymore
//!     (although 7 blocks are free in total).
//! 5.  Process 4 requests 600 bytes, i.e. 2 blocks.
//!     ```text
//!     U2 -- U1 F3 -- -- F2 --
//!     ^---- ^- ^------- ^----
//!     4     2  FREE     FREE
//!     ```
//!     There are three candidate runs: 2 blocks at slot 0, 3 blocks at slot 3
//!     and 2 blocks at slot 6. The best fit is the one with the fewest blocks
//!     left over. Two runs fit exactly, the first of them is taken. An exact
//!     fit ends the search early and does not need a split.
//! 6.  Process 5 requests 3000 bytes, i.e. 6 blocks. No free run is large
//!     enough, therefore the request is dropped without any trace. This is
//!     _not_ an error.
//! 7.  A reset discards all runs and restores the table of step 1.
//!
//! [`allocate()`]: BlockTable::allocate
//! [`release()`]: BlockTable::release
//! [`list()`]: BlockTable::list
//! [`reset()`]: BlockTable::reset
pub mod command;
pub mod config;
pub mod driver;
mod error;
mod report;
mod run;
mod table;

pub use error::Error;
pub use report::Report;
pub use run::{ProcessId, Run, UNUSED_PID};
pub use table::{BlockTable, Megabyte, BLOCK_SIZE, NUM_BLOCKS};
