//! Trail ribbon geometry
//!
//! The ribbon swept behind a bike, stored as a bounded ring of bottom/top
//! edge point pairs. Once full, each append evicts the oldest pair, keeping
//! render and collision cost bounded. Only written slots exist, so collision
//! code never has to filter placeholder samples.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SAMPLE_SPACING, TRAIL_HALF_HEIGHT};

/// One cross-section of the ribbon: the two long-edge points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub bottom: Vec3,
    pub top: Vec3,
}

/// Bounded ribbon trail with FIFO eviction.
#[derive(Debug, Clone)]
pub struct TrailRibbon {
    samples: Vec<TrailSample>,
    /// Oldest slot, and the next to overwrite once at capacity
    cursor: usize,
    capacity: usize,
}

impl TrailRibbon {
    /// A ribbon holds at least one sample pair.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Newest recorded sample, if any.
    pub fn last(&self) -> Option<&TrailSample> {
        if self.samples.len() < self.capacity {
            self.samples.last()
        } else {
            let newest = (self.cursor + self.capacity - 1) % self.capacity;
            self.samples.get(newest)
        }
    }

    /// Record a new edge pair around `anchor`, unless it is within the
    /// minimum spacing of the previous sample.
    ///
    /// Returns true when a sample was appended and the ribbon geometry
    /// needs a rebuild.
    pub fn record(&mut self, anchor: Vec3) -> bool {
        let offset = Vec3::Y * TRAIL_HALF_HEIGHT;
        let sample = TrailSample {
            bottom: anchor - offset,
            top: anchor + offset,
        };
        if let Some(last) = self.last() {
            if sample.bottom.distance(last.bottom) < MIN_SAMPLE_SPACING {
                return false;
            }
        }
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.cursor] = sample;
            self.cursor = (self.cursor + 1) % self.capacity;
        }
        true
    }

    /// Samples in recording order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        let split = if self.samples.len() < self.capacity {
            0
        } else {
            self.cursor
        };
        self.samples[split..].iter().chain(self.samples[..split].iter())
    }

    /// Top-edge points eligible for collision testing, oldest first,
    /// skipping the newest `exclude_newest` samples.
    pub fn collision_points(&self, exclude_newest: usize) -> impl Iterator<Item = Vec3> + '_ {
        let take = self.samples.len().saturating_sub(exclude_newest);
        self.iter().take(take).map(|s| s.top)
    }

    /// Both edge point sequences for the render layer, oldest first.
    pub fn edges(&self) -> (Vec<Vec3>, Vec<Vec3>) {
        (
            self.iter().map(|s| s.bottom).collect(),
            self.iter().map(|s| s.top).collect(),
        )
    }
}
