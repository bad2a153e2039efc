#[cfg(test)]
mod tests {
    use myriapod_core::constants::*;
    use myriapod_core::enums::SegmentState;
    use myriapod_core::types::{Position, Velocity};

    use crate::locomotion::{prospective, step, Blocker, SegmentContext};
    use crate::split::split_at;

    const DT: f64 = 1.0 / 60.0;

    fn make_context(state: SegmentState, position: Position, dx: f64) -> SegmentContext {
        SegmentContext {
            state,
            position,
            direction: Velocity::new(dx, 0.0),
            speed: SEGMENT_BASE_SPEED,
            descend_progress: 0.0,
            resume_dx: dx,
            blocking: None,
            at_lateral_bound: false,
            dt: DT,
        }
    }

    // ---- Moving ----

    #[test]
    fn test_moving_advances_horizontally() {
        let ctx = make_context(SegmentState::Moving, Position::new(100.0, 50.0), 1.0);
        let update = step(&ctx);
        assert_eq!(update.state, SegmentState::Moving);
        assert!((update.position.x - (100.0 + SEGMENT_BASE_SPEED * DT)).abs() < 1e-12);
        assert_eq!(update.position.y, 50.0);
    }

    #[test]
    fn test_boundary_starts_descent_without_moving() {
        let mut ctx = make_context(SegmentState::Moving, Position::new(783.0, 50.0), 1.0);
        ctx.at_lateral_bound = true;
        let update = step(&ctx);
        assert_eq!(update.state, SegmentState::Descending);
        assert_eq!(update.descend_progress, 0.0);
        // The prospective horizontal move is discarded this tick.
        assert_eq!(update.position, ctx.position);
    }

    #[test]
    fn test_plain_obstacle_starts_descent() {
        let mut ctx = make_context(SegmentState::Moving, Position::new(300.0, 100.0), 1.0);
        ctx.blocking = Some(Blocker { hazard: false });
        let update = step(&ctx);
        assert_eq!(update.state, SegmentState::Descending);
        assert_eq!(update.position, ctx.position);
    }

    #[test]
    fn test_poison_override_regardless_of_direction() {
        for dx in [-1.0, 1.0] {
            let mut ctx = make_context(SegmentState::Moving, Position::new(300.0, 100.0), dx);
            ctx.blocking = Some(Blocker { hazard: true });
            let update = step(&ctx);
            assert_eq!(update.state, SegmentState::PoisonDescending);
            assert_eq!(update.direction, Velocity::new(0.0, 1.0));
            assert_eq!(update.resume_dx, dx);
        }
    }

    // ---- Descending ----

    #[test]
    fn test_descent_advances_at_double_rate() {
        let ctx = make_context(SegmentState::Descending, Position::new(300.0, 100.0), 1.0);
        let update = step(&ctx);
        let advance = SEGMENT_BASE_SPEED * DESCENT_RATE_MULTIPLIER * DT;
        assert_eq!(update.state, SegmentState::Descending);
        assert!((update.position.y - (100.0 + advance)).abs() < 1e-12);
        assert!((update.descend_progress - advance).abs() < 1e-12);
    }

    #[test]
    fn test_descent_completion_reverses_exactly_once() {
        let mut ctx = make_context(SegmentState::Descending, Position::new(300.0, 100.0), 1.0);
        let mut reversals = 0;
        // Run until the descent completes, then a few ticks beyond.
        for _ in 0..200 {
            let update = step(&ctx);
            if update.direction.x != ctx.direction.x {
                reversals += 1;
            }
            ctx.state = update.state;
            ctx.position = update.position;
            ctx.direction = update.direction;
            ctx.descend_progress = update.descend_progress;
            ctx.resume_dx = update.resume_dx;
        }
        assert_eq!(reversals, 1);
        assert_eq!(ctx.state, SegmentState::Moving);
        assert_eq!(ctx.direction.x, -1.0);
        assert_eq!(ctx.descend_progress, 0.0);
        // Total vertical travel stays within one row.
        assert!(ctx.position.y - 100.0 <= DESCENT_DISTANCE);
    }

    // ---- PoisonDescending ----

    #[test]
    fn test_poison_descent_never_reverses() {
        let mut ctx = make_context(
            SegmentState::PoisonDescending,
            Position::new(300.0, 100.0),
            0.0,
        );
        ctx.direction = Velocity::new(0.0, 1.0);
        ctx.resume_dx = 1.0;
        // Hazard contact mid-dive must not disturb it.
        ctx.blocking = Some(Blocker { hazard: true });

        let update = step(&ctx);
        assert_eq!(update.state, SegmentState::PoisonDescending);
        assert_eq!(update.direction, Velocity::new(0.0, 1.0));
        assert!((update.position.y - (100.0 + SEGMENT_BASE_SPEED * DT)).abs() < 1e-12);
    }

    #[test]
    fn test_poison_descent_ends_at_player_area() {
        let mut ctx = make_context(
            SegmentState::PoisonDescending,
            Position::new(300.0, PLAYER_AREA_TOP - 0.1),
            0.0,
        );
        ctx.direction = Velocity::new(0.0, 1.0);
        ctx.resume_dx = -1.0;

        let update = step(&ctx);
        assert_eq!(update.state, SegmentState::Moving);
        assert_eq!(update.position.y, PLAYER_AREA_TOP);
        // Resumes the heading it had before the dive.
        assert_eq!(update.direction, Velocity::new(-1.0, 0.0));
    }

    // ---- Prospective helper ----

    #[test]
    fn test_prospective_matches_committed_move() {
        let ctx = make_context(SegmentState::Moving, Position::new(100.0, 50.0), -1.0);
        let expected = prospective(&ctx.position, &ctx.direction, ctx.speed, ctx.dt);
        let update = step(&ctx);
        assert_eq!(update.position, expected);
    }

    // ---- Fragmentation ----

    #[test]
    fn test_split_conservation() {
        let segments: Vec<u32> = (0..12).collect();
        for k in 0..segments.len() {
            let split = split_at(&segments, k).unwrap();
            assert_eq!(split.head.len(), k);
            assert_eq!(split.tail.len(), segments.len() - 1 - k);
            assert_eq!(split.head.len() + split.tail.len(), segments.len() - 1);
        }
    }

    #[test]
    fn test_split_at_index_five_of_twelve() {
        let segments: Vec<u32> = (0..12).collect();
        let split = split_at(&segments, 5).unwrap();
        assert_eq!(split.head, vec![0, 1, 2, 3, 4]);
        assert_eq!(split.tail, vec![6, 7, 8, 9, 10, 11]);
        // Head sub-chain promotes the element nearest the removed
        // segment; tail promotes its first.
        assert_eq!(split.head_leader(), Some(4));
        assert_eq!(split.tail_leader(), Some(6));
    }

    #[test]
    fn test_split_at_head_leaves_one_subchain() {
        let segments: Vec<u32> = (0..4).collect();
        let split = split_at(&segments, 0).unwrap();
        assert!(split.head.is_empty());
        assert_eq!(split.head_leader(), None);
        assert_eq!(split.tail, vec![1, 2, 3]);
        assert_eq!(split.tail_leader(), Some(1));
    }

    #[test]
    fn test_split_at_last_leaves_one_subchain() {
        let segments: Vec<u32> = (0..4).collect();
        let split = split_at(&segments, 3).unwrap();
        assert_eq!(split.head, vec![0, 1, 2]);
        assert_eq!(split.head_leader(), Some(2));
        assert!(split.tail.is_empty());
    }

    #[test]
    fn test_split_invalid_index_is_none() {
        let segments: Vec<u32> = (0..4).collect();
        assert!(split_at(&segments, 4).is_none());
        assert!(split_at(&segments, 100).is_none());
        let empty: Vec<u32> = Vec::new();
        assert!(split_at(&empty, 0).is_none());
    }

    #[test]
    fn test_split_singleton_chain() {
        let segments = vec![7u32];
        let split = split_at(&segments, 0).unwrap();
        assert!(split.head.is_empty());
        assert!(split.tail.is_empty());
    }
}
