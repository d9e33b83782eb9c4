#![forbid(unsafe_code)]

//! Layout primitives and solvers.

pub use rest_core::geometry::{Rect, Sides};
use std::cmp::min;

/// A constraint on the size of a layout area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// An exact size in cells.
    Fixed(u16),
    /// A percentage of the total available size (0.0 to 100.0).
    Percentage(f32),
    /// At least this many cells, then an equal share of what is left.
    Min(u16),
}

/// The direction to layout items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A flexible layout container.
#[derive(Debug, Clone, Default)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: Sides,
    gap: u16,
}

impl Flex {
    /// Create a new vertical flex layout.
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Create a new horizontal flex layout.
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    /// Set the gap between items.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Split `area` into one rectangle per constraint.
    ///
    /// Always returns exactly as many rectangles as there are constraints;
    /// space that runs out yields zero-sized rectangles.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.margin);
        if inner.is_empty() {
            return self.constraints.iter().map(|_| Rect::default()).collect();
        }
        let count = self.constraints.len();
        if count == 0 {
            return Vec::new();
        }

        let total_size = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };
        let total_gap = self.gap.saturating_mul((count - 1) as u16);
        let sizes = self.solve_constraints(total_size.saturating_sub(total_gap));
        self.sizes_to_rects(inner, &sizes)
    }

    fn solve_constraints(&self, available_size: u16) -> Vec<u16> {
        let mut sizes = vec![0u16; self.constraints.len()];
        let mut remaining = available_size;
        let mut grow_indices = Vec::new();

        for (i, &constraint) in self.constraints.iter().enumerate() {
            let wanted = match constraint {
                Constraint::Fixed(size) => size,
                Constraint::Percentage(p) => (available_size as f32 * p / 100.0).round() as u16,
                Constraint::Min(size) => {
                    grow_indices.push(i);
                    size
                }
            };
            let size = min(wanted, remaining);
            sizes[i] = size;
            remaining -= size;
        }

        // Equal shares of the leftover; the last grower absorbs rounding.
        if remaining > 0 && !grow_indices.is_empty() {
            let share = remaining / grow_indices.len() as u16;
            let mut allocated = 0;
            for (idx, &i) in grow_indices.iter().enumerate() {
                let size = if idx == grow_indices.len() - 1 {
                    remaining - allocated
                } else {
                    share
                };
                sizes[i] += size;
                allocated += size;
            }
        }

        sizes
    }

    fn sizes_to_rects(&self, area: Rect, sizes: &[u16]) -> Vec<Rect> {
        let mut current_pos = match self.direction {
            Direction::Horizontal => area.x,
            Direction::Vertical => area.y,
        };

        sizes
            .iter()
            .map(|&size| {
                let rect = match self.direction {
                    Direction::Horizontal => Rect::new(current_pos, area.y, size, area.height),
                    Direction::Vertical => Rect::new(area.x, current_pos, area.width, size),
                };
                current_pos = current_pos.saturating_add(size).saturating_add(self.gap);
                rect
            })
            .collect()
    }
}
