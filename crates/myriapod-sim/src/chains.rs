//! Chain membership — ordered segment lists per chain.
//!
//! Stored on the engine, NOT as ECS entities. The ECS holds the
//! per-segment components; this keeps the spatial order needed for
//! fragmentation.

use hecs::{Entity, World};

use myriapod_core::components::Segment;
use myriapod_core::enums::SegmentState;

use myriapod_chain::split::split_at;

/// One segmented enemy body, head first.
#[derive(Debug, Clone)]
pub struct Chain {
    pub id: u32,
    pub segments: Vec<Entity>,
}

/// All live chains plus the id allocator.
#[derive(Debug, Default)]
pub struct ChainSet {
    chains: Vec<Chain>,
    next_id: u32,
}

impl ChainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all chain records (used on restart; the entities
    /// themselves are discarded with the world).
    pub fn clear(&mut self) {
        self.chains.clear();
        self.next_id = 0;
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Total live segments across all chains.
    pub fn live_segments(&self) -> usize {
        self.chains.iter().map(|c| c.segments.len()).sum()
    }

    /// Register a freshly spawned chain, stamping each segment with
    /// the allocated chain id. Empty chains are not tracked.
    pub fn register(&mut self, world: &mut World, segments: Vec<Entity>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        for &entity in &segments {
            if let Ok(mut segment) = world.get::<&mut Segment>(entity) {
                segment.chain_id = id;
            }
        }
        if !segments.is_empty() {
            self.chains.push(Chain { id, segments });
        }
        id
    }

    /// Fragment the chain containing `hit` by removing that segment.
    ///
    /// The segments before the hit become one independent chain whose
    /// last element (nearest the removed segment) is promoted to head;
    /// the segments after it become another, led by its first element.
    /// Empty sub-chains are discarded. Returns false when `hit` is not
    /// a tracked segment — the chain set is left unchanged.
    pub fn split_on_hit(&mut self, world: &mut World, hit: Entity) -> bool {
        let chain_pos = match self
            .chains
            .iter()
            .position(|c| c.segments.contains(&hit))
        {
            Some(p) => p,
            None => return false,
        };

        let chain = self.chains.swap_remove(chain_pos);
        let hit_index = match chain.segments.iter().position(|&e| e == hit) {
            Some(i) => i,
            None => return false,
        };

        let split = match split_at(&chain.segments, hit_index) {
            Some(s) => s,
            None => return false,
        };

        if !split.head.is_empty() {
            let leader = split.head_leader();
            let head_chain = split.head.clone();
            self.apply_head_flags(world, &head_chain, leader);
            self.register(world, head_chain);
        }
        if !split.tail.is_empty() {
            let leader = split.tail_leader();
            let tail_chain = split.tail.clone();
            self.apply_head_flags(world, &tail_chain, leader);
            self.register(world, tail_chain);
        }
        true
    }

    /// Exactly one head survives per sub-chain: the designated leader.
    fn apply_head_flags(&self, world: &mut World, segments: &[Entity], leader: Option<Entity>) {
        for &entity in segments {
            if let Ok(mut segment) = world.get::<&mut Segment>(entity) {
                segment.is_head = Some(entity) == leader;
            }
        }
    }

    /// Drop any segments that have been marked destroyed outside the
    /// split path (defensive; hits normally remove them via
    /// `split_on_hit`).
    pub fn purge_destroyed(&mut self, world: &World) {
        for chain in &mut self.chains {
            chain.segments.retain(|&e| {
                world
                    .get::<&Segment>(e)
                    .map(|s| s.state != SegmentState::Destroyed)
                    .unwrap_or(false)
            });
        }
        self.chains.retain(|c| !c.segments.is_empty());
    }
}
