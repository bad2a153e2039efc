#[cfg(test)]
mod tests {
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::geometry;
    use crate::types::{Position, SimTime, Velocity};

    // ---- Geometry kernel ----

    #[test]
    fn test_distance_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(geometry::distance(&a, &b), 5.0);
    }

    #[test]
    fn test_circles_overlap_strict_threshold() {
        let a = Position::new(0.0, 0.0);
        // Radius sum 12: distance exactly 12 must NOT overlap.
        let touching = Position::new(12.0, 0.0);
        assert!(!geometry::circles_overlap(&a, 6.0, &touching, 6.0));

        let inside = Position::new(11.999, 0.0);
        assert!(geometry::circles_overlap(&a, 6.0, &inside, 6.0));
    }

    #[test]
    fn test_circles_overlap_symmetric() {
        let a = Position::new(10.0, 20.0);
        let b = Position::new(14.0, 23.0);
        assert_eq!(
            geometry::circles_overlap(&a, 3.0, &b, 3.0),
            geometry::circles_overlap(&b, 3.0, &a, 3.0)
        );
    }

    #[test]
    fn test_boxes_overlap_requires_both_axes() {
        let a = Position::new(0.0, 0.0);
        // Overlapping on x only.
        let x_only = Position::new(5.0, 30.0);
        assert!(!geometry::boxes_overlap(&a, (10.0, 10.0), &x_only, (10.0, 10.0)));
        // Overlapping on y only.
        let y_only = Position::new(30.0, 5.0);
        assert!(!geometry::boxes_overlap(&a, (10.0, 10.0), &y_only, (10.0, 10.0)));
        // Overlapping on both.
        let both = Position::new(5.0, 5.0);
        assert!(geometry::boxes_overlap(&a, (10.0, 10.0), &both, (10.0, 10.0)));
    }

    // ---- Types ----

    #[test]
    fn test_velocity_normalized() {
        let v = Velocity::new(3.0, 4.0).normalized();
        assert!((v.speed() - 1.0).abs() < 1e-12);

        let zero = Velocity::new(0.0, 0.0).normalized();
        assert_eq!(zero.speed(), 0.0);
    }

    #[test]
    fn test_sim_time_advance_variable_dt() {
        let mut time = SimTime::default();
        time.advance(1.0 / 60.0);
        time.advance(1.0 / 30.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - (1.0 / 60.0 + 1.0 / 30.0)).abs() < 1e-12);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_segment_state_serde() {
        let variants = vec![
            SegmentState::Moving,
            SegmentState::Descending,
            SegmentState::PoisonDescending,
            SegmentState::Destroyed,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SegmentState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_critter_kind_serde() {
        let variants = vec![CritterKind::Flier, CritterKind::Roamer, CritterKind::Poisoner];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: CritterKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_event_tagged_serde() {
        let event = GameEvent::SegmentDestroyed { head: true };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\""));
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        match back {
            GameEvent::SegmentDestroyed { head } => assert!(head),
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
