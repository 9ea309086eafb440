//! Drag path interpolation.
//!
//! A drag of total displacement `(x, y)` is split into
//! `steps = max(|x|, |y|)` relative moves (at least one). The delta of axis
//! `a` at step `i` is
//!
//! ```text
//! a * (i + 1) / steps - a * i / steps
//! ```
//!
//! with integer division truncating toward zero. The deltas telescope, so
//! each axis sums to exactly its total, and because `steps >= |a|` no single
//! delta exceeds one count in magnitude. The exact truncation pattern decides
//! the shape of the cursor path on the host and must not be replaced by an
//! "even" split.

/// Iterator over the per-step `(dx, dy)` deltas of a drag.
#[derive(Debug, Clone)]
pub struct DragPath {
    x: i64,
    y: i64,
    steps: u64,
    index: u64,
}

impl DragPath {
    pub fn new(x: i32, y: i32) -> Self {
        let steps = u64::from(x.unsigned_abs().max(y.unsigned_abs()).max(1));
        Self {
            x: i64::from(x),
            y: i64::from(y),
            steps,
            index: 0,
        }
    }

    /// Total number of move reports the drag will produce.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn delta(&self, total: i64, index: i64, steps: i64) -> i32 {
        let delta = total * (index + 1) / steps - total * index / steps;
        // |delta| <= 1 whenever steps >= |total|; the clamp only guards the type.
        delta.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl Iterator for DragPath {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.steps {
            return None;
        }
        let index = i64::try_from(self.index).ok()?;
        let steps = i64::try_from(self.steps).ok()?;
        let step = (
            self.delta(self.x, index, steps),
            self.delta(self.y, index, steps),
        );
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.steps.saturating_sub(self.index)).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
