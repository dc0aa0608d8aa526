#![feature(test)]
extern crate test;
use test::Bencher;

mod repeated_allocation_release {
    use super::*;

    /// Run a benchmark, which repeatedly allocates and releases the same run.
    /// The benchmark will allocate the given amount of runs beforehand (before
    /// running the actual benchmark) in order to fill up the table with
    /// unrelated allocations.
    ///
    /// # Panics
    /// This will panic, if the requested pre-allocations will fill up the whole
    /// table (so the actual benchmark cannot allocate blocks anymore).
    fn benchmark_with_preallocation(b: &mut Bencher, pre_allocations: i32) {
        let mut table = memsim::Megabyte::new();
        // pre-allocate many runs to see the real impact of the linear search
        for pid in 1..=pre_allocations {
            table.allocate(pid, 1);
        }

        let pid = pre_allocations + 1;

        // make sure, that there is enough room for the next allocation
        assert!(table.allocate(pid, 1).is_some());
        table.release(pid);

        // run actual benchmark: allocate & release the same run repeatedly
        b.iter(|| {
            let slot = table.allocate(pid, 1);
            test::black_box(slot);
            table.release(pid);
        });
    }

    #[bench]
    fn no_memory_usage(b: &mut Bencher) {
        benchmark_with_preallocation(b, 0);
    }

    #[bench]
    fn low_memory_usage(b: &mut Bencher) {
        benchmark_with_preallocation(b, 8);
    }

    #[bench]
    fn medium_memory_usage(b: &mut Bencher) {
        benchmark_with_preallocation(b, 1000);
    }

    #[bench]
    fn high_memory_usage(b: &mut Bencher) {
        benchmark_with_preallocation(b, 2040);
    }
}

#[bench]
fn list_fragmented_table(b: &mut Bencher) {
    let mut table = memsim::Megabyte::new();
    for pid in 1..=1024 {
        table.allocate(pid, (pid as usize % 3 + 1) * 300);
    }
    for pid in (1..=1024).step_by(2) {
        table.release(pid);
    }

    b.iter(|| test::black_box(table.list()));
}
