// ============================================================
// Layer 4 — Epoch Cursor
// ============================================================
// Position of sequential batch retrieval within a split.
//
// Batches are contiguous and never wrap. When the next batch
// would run past the end, the cursor jumps back to 0 and the
// epoch counter goes up; the examples left at the tail are not
// served that epoch.
//
// Example with 10 examples, batch size 3:
//
//   call 1:  [0, 3)    epoch 0
//   call 2:  [3, 6)    epoch 0
//   call 3:  [6, 9)    epoch 0
//   call 4:  [0, 3)    epoch 1    (index 9 was skipped)
//
// The transition is a pure function of (cursor, batch size,
// split length), so it can be tested without any data.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::error::DataError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochCursor {
    pub index_in_epoch:   usize,
    pub epochs_completed: usize,
}

impl EpochCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the next batch range and the cursor after it.
    ///
    /// # Errors
    /// [`DataError::BatchTooLarge`] if `batch_size > len`.
    pub fn advance(self, batch_size: usize, len: usize) -> Result<(Self, Range<usize>), DataError> {
        if batch_size > len {
            return Err(DataError::BatchTooLarge { batch_size, len });
        }

        let mut next = self;
        if next.index_in_epoch + batch_size > len {
            next.index_in_epoch    = 0;
            next.epochs_completed += 1;
        }

        let start = next.index_in_epoch;
        next.index_in_epoch += batch_size;

        Ok((next, start..start + batch_size))
    }
}
