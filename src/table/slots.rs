use crate::run::Run;

/// A slot index into [`Slots`], that is known to start a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSlot(usize);
impl ValidatedSlot {
    /// The raw index of the slot.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The fixed slot array backing the block table.
///
/// Every slot corresponds to one block of memory. Only a slot, at which a run
/// starts, holds a [`Run`]; the slots covered by that run are `None` (or hold
/// leftovers, that are never read, as they are skipped during traversal).
pub struct Slots<const N: usize>([Option<Run>; N]);
impl<const N: usize> Slots<N> {
    /// Create the slot array with a single free run covering all `N` blocks.
    ///
    /// # Panics
    /// This function panics if there are no slots at all, i.e. if `N == 0`.
    pub const fn new(block_size: usize) -> Self {
        assert!(N >= 1, "block table too small, use N >= 1");

        // this is necessary, since there must be always a valid first run
        let mut slots = [None; N];
        slots[0] = Some(Run::free(N, block_size));
        Self(slots)
    }

    /// Obtain the record stored at a raw slot index.
    ///
    /// # Panics
    /// This function panics if the index lies past the end of the table.
    fn at(&self, slot: usize) -> &Option<Run> {
        assert!(slot < N, "slot {slot} out of range");
        &self.0[slot]
    }

    /// Iterate over all runs and obtain their [`ValidatedSlot`]s.
    pub fn runs(&self) -> RunIter<N> {
        RunIter::new(self)
    }

    /// Install a new run record at `slot`.
    ///
    /// The caller is responsible for keeping the runs a partition of the table,
    /// i.e. shrinking the preceding run by the same number of blocks.
    ///
    /// # Panics
    /// This function panics if the new run would not fit into the table.
    pub fn place(&mut self, slot: usize, run: Run) -> ValidatedSlot {
        assert!(run.block_count() >= 1, "runs must span at least one block");
        assert!(slot + run.block_count() <= N, "run exceeds the block table");
        self.0[slot] = Some(run);
        ValidatedSlot(slot)
    }

    /// Drop every record in the table and start over with a single free run.
    pub fn clear(&mut self, block_size: usize) {
        self.0.fill(None);
        self.0[0] = Some(Run::free(N, block_size));
    }
}
impl<const N: usize> core::ops::Index<ValidatedSlot> for Slots<N> {
    type Output = Run;

    fn index(&self, index: ValidatedSlot) -> &Self::Output {
        match self.at(index.0) {
            Some(run) => run,
            None => unreachable!("validated slot {} holds no run", index.0),
        }
    }
}
impl<const N: usize> core::ops::IndexMut<ValidatedSlot> for Slots<N> {
    fn index_mut(&mut self, index: ValidatedSlot) -> &mut Self::Output {
        match &mut self.0[index.0] {
            Some(run) => run,
            None => unreachable!("validated slot {} holds no run", index.0),
        }
    }
}

/// Walks the runs in slot order by jumping over `block_count` slots at a time.
pub struct RunIter<'slots, const N: usize> {
    slots: &'slots Slots<N>,
    slot: usize,
}
impl<'slots, const N: usize> RunIter<'slots, N> {
    /// Create a run iterator over the given [`Slots`].
    pub const fn new(slots: &'slots Slots<N>) -> Self {
        Self { slots, slot: 0 }
    }
}
impl<'slots, const N: usize> Iterator for RunIter<'slots, N> {
    type Item = ValidatedSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slot < N {
            let slot = self.slot;
            let run = self.slots.at(slot).as_ref()?;
            self.slot += run.block_count();
            Some(ValidatedSlot(slot))
        } else {
            None
        }
    }
}
