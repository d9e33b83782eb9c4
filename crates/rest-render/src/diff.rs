#![forbid(unsafe_code)]

//! Cell-level diff between two buffers.

use crate::buffer::Buffer;

/// A horizontal span of changed cells on one row (`x0..=x1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    pub y: u16,
    pub x0: u16,
    pub x1: u16,
}

/// Positions that differ between two buffers of the same size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDiff {
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    /// Every cell that changed from `prev` to `next`, in row-major order.
    ///
    /// Buffers of different sizes produce a full diff of `next`.
    pub fn compute(prev: &Buffer, next: &Buffer) -> Self {
        if prev.width() != next.width() || prev.height() != next.height() {
            return Self::full(next);
        }
        let mut changes = Vec::new();
        for y in 0..next.height() {
            for x in 0..next.width() {
                if prev.get(x, y) != next.get(x, y) {
                    changes.push((x, y));
                }
            }
        }
        Self { changes }
    }

    /// Every cell of `buffer`.
    pub fn full(buffer: &Buffer) -> Self {
        let changes = (0..buffer.height())
            .flat_map(|y| (0..buffer.width()).map(move |x| (x, y)))
            .collect();
        Self { changes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[(u16, u16)] {
        &self.changes
    }

    /// Group adjacent changes on the same row so the presenter moves the
    /// cursor once per run.
    pub fn runs(&self) -> Vec<ChangeRun> {
        let mut runs: Vec<ChangeRun> = Vec::new();
        for &(x, y) in &self.changes {
            match runs.last_mut() {
                Some(run) if run.y == y && run.x1 + 1 == x => run.x1 = x,
                _ => runs.push(ChangeRun { y, x0: x, x1: x }),
            }
        }
        runs
    }
}
