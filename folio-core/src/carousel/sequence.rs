//! DisplaySequence: the 3×-padded item list behind the loop illusion

use std::ops::Range;

use crate::error::{CarouselError, Result};

/// `clone(items) ++ items ++ clone(items)`.
///
/// Indices `[N, 2N)` hold the real items; the outer thirds only exist so a
/// transition can step past either end before snapping back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySequence<T> {
    slots: Vec<T>,
    original_len: usize,
}

impl<T: Clone> DisplaySequence<T> {
    pub fn new(items: Vec<T>) -> Result<Self> {
        let original_len = items.len();
        if original_len == 0 {
            return Err(CarouselError::NoItems);
        }

        let mut slots = Vec::with_capacity(original_len * 3);
        slots.extend(items.iter().cloned());
        slots.extend(items.iter().cloned());
        slots.extend(items);

        Ok(Self {
            slots,
            original_len,
        })
    }
}

impl<T> DisplaySequence<T> {
    /// Number of slots, always `3 * original_len()`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Never true: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// N, the number of original items.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.slots.get(position)
    }

    /// The middle band `[N, 2N)`.
    pub fn real_band(&self) -> Range<usize> {
        self.original_len..self.original_len * 2
    }

    /// The original items, in order.
    pub fn real_items(&self) -> &[T] {
        &self.slots[self.real_band()]
    }

    /// First position of the real band (N).
    pub fn first_real(&self) -> usize {
        self.original_len
    }

    /// Last position of the real band (2N − 1).
    pub fn last_real(&self) -> usize {
        self.original_len * 2 - 1
    }

    /// Absolute position of logical index `logical`, `None` outside `[0, N)`.
    pub fn position_of(&self, logical: usize) -> Option<usize> {
        (logical < self.original_len).then(|| logical + self.original_len)
    }

    /// Logical index shown at `position`: `((position − N) mod N + N) mod N`.
    pub fn logical_index(&self, position: usize) -> usize {
        let n = self.original_len as isize;
        (position as isize - n).rem_euclid(n) as usize
    }

    /// Where a settled track has to rest so it shows the same item from the
    /// real band. `None` when `position` already lies inside the band.
    pub fn wraparound_target(&self, position: usize) -> Option<usize> {
        if position < self.first_real() {
            Some(self.first_real())
        } else if position > self.last_real() {
            Some(self.last_real())
        } else {
            None
        }
    }
}
