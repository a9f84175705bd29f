//! Bounded min-heap over node handles.
//!
//! The heap only stores [`NodeId`]s, the weights are looked up on every comparison through
//! [`WeightLookup`]. Weights must not change while a handle is in the heap.
//!
//! Entries only move on a strict `<` comparison, so of two equal weights the one that is
//! already closer to the root stays there. The pop order for ties is therefore deterministic
//! for a given push order, but not stable in the FIFO sense.

use crate::error::{HuffError, Resource, Result};
use crate::tree::{NodeId, NodeStore};
use log::*;

pub trait WeightLookup {
    fn weight(&self, id: NodeId) -> u64;
}

impl WeightLookup for NodeStore {
    #[inline]
    fn weight(&self, id: NodeId) -> u64 {
        NodeStore::weight(self, id)
    }
}

impl WeightLookup for [u64] {
    #[inline]
    fn weight(&self, id: NodeId) -> u64 {
        self[id.index()]
    }
}

#[derive(Debug, Clone)]
pub struct MinHeap {
    data: Vec<NodeId>,
    capacity: usize,
}

impl MinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// the handle with the minimum weight
    #[inline]
    pub fn peek(&self) -> Option<NodeId> {
        self.data.first().copied()
    }

    /// insert at the end, then bubble up
    pub fn push<W: WeightLookup + ?Sized>(&mut self, id: NodeId, weights: &W) -> Result<()> {
        if self.data.len() >= self.capacity {
            return Err(HuffError::CapacityExceeded {
                resource: Resource::PriorityQueue,
                capacity: self.capacity,
            });
        }
        self.data.push(id);
        self.sift_up(self.data.len() - 1, weights);
        Ok(())
    }

    /// remove the root, move the last entry to the root, then bubble down
    pub fn pop<W: WeightLookup + ?Sized>(&mut self, weights: &W) -> Result<NodeId> {
        if self.data.is_empty() {
            error!("pop on empty heap");
            return Err(HuffError::EmptyQueue);
        }
        let min = self.data.swap_remove(0);
        self.sift_down(0, weights);
        Ok(min)
    }

    fn sift_up<W: WeightLookup + ?Sized>(&mut self, mut pos: usize, weights: &W) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if weights.weight(self.data[pos]) < weights.weight(self.data[parent]) {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down<W: WeightLookup + ?Sized>(&mut self, mut pos: usize, weights: &W) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;
            if left < len && weights.weight(self.data[left]) < weights.weight(self.data[smallest]) {
                smallest = left;
            }
            if right < len && weights.weight(self.data[right]) < weights.weight(self.data[smallest])
            {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.data.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid<W: WeightLookup + ?Sized>(&self, weights: &W) -> bool {
        (1..self.data.len())
            .all(|pos| weights.weight(self.data[(pos - 1) / 2]) <= weights.weight(self.data[pos]))
    }
}
