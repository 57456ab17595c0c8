//! Bounded position history used to draw fading orbit trails.

use std::collections::VecDeque;

use bevy::math::DVec2;

/// FIFO of recent world-space positions, oldest first.
///
/// Never holds more than `cap` points; pushing past the cap evicts the
/// oldest point.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<DVec2>,
    cap: usize,
}

impl Trail {
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap.min(1024)),
            cap,
        }
    }

    /// Append a point, evicting from the front once over capacity.
    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        while self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    /// Points in order, oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Most recently appended point.
    pub fn newest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Drop every point (mission reset only).
    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }
}
