//! Fixed-length ordered result buffer
//!
//! Slots are handed out as disjoint mutable borrows, one per unit, so
//! concurrent writers never need a lock.

use crate::BenchError;

/// Ordered text slots, one per work unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBuffer {
    slots: Vec<Option<String>>,
}

/// Write handle for a single slot
///
/// Consumed by [`Slot::fill`], so each handle writes at most once.
#[derive(Debug)]
pub struct Slot<'a> {
    index: usize,
    cell: &'a mut Option<String>,
}

impl Slot<'_> {
    /// Position of this slot in the buffer
    pub fn index(&self) -> usize {
        self.index
    }

    /// Store the finished line
    pub fn fill(self, line: String) {
        debug_assert!(self.cell.is_none(), "slot {} written twice", self.index);
        *self.cell = Some(line);
    }
}

impl ResultBuffer {
    /// Create a buffer of `len` empty slots
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the buffer has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Split into one write handle per slot, in index order
    pub fn slots_mut(&mut self) -> Vec<Slot<'_>> {
        self.slots
            .iter_mut()
            .enumerate()
            .map(|(index, cell)| Slot { index, cell })
            .collect()
    }

    /// Read a filled slot
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Consume the buffer into its lines, in index order
    ///
    /// Fails on the first slot that was never written.
    pub fn into_lines(self) -> Result<Vec<String>, BenchError> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(BenchError::UnfilledSlot { index }))
            .collect()
    }
}
