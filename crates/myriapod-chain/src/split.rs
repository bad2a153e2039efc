//! Chain fragmentation.
//!
//! Splitting is pure index arithmetic over the ordered segment list;
//! the simulation applies the resulting head promotions to its own
//! entity storage.

/// The two sub-chains produced by removing one segment.
///
/// `head` holds the elements that preceded the removed segment (in
/// original order), `tail` the elements that followed it. Either may
/// be empty; an empty sub-chain is discarded by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSplit<T> {
    pub head: Vec<T>,
    pub tail: Vec<T>,
}

impl<T: Copy> ChainSplit<T> {
    /// The element to promote in the head sub-chain: its last element,
    /// the one nearest the removed segment.
    pub fn head_leader(&self) -> Option<T> {
        self.head.last().copied()
    }

    /// The element to promote in the tail sub-chain: its first element.
    pub fn tail_leader(&self) -> Option<T> {
        self.tail.first().copied()
    }
}

/// Split an ordered chain at `hit_index`, removing that element.
///
/// Returns `None` when the index is not present — the caller treats
/// that as a no-op, leaving the chain unchanged. Conservation holds:
/// `head.len() + tail.len() == segments.len() - 1`.
pub fn split_at<T: Copy>(segments: &[T], hit_index: usize) -> Option<ChainSplit<T>> {
    if hit_index >= segments.len() {
        return None;
    }

    Some(ChainSplit {
        head: segments[..hit_index].to_vec(),
        tail: segments[hit_index + 1..].to_vec(),
    })
}
