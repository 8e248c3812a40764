use proptest::prelude::*;
use roomgen::{
    CollisionScope, Direction, Generation, GenerationConfig, TickOutcome, audit, intersects,
};

fn config_for(seed: u64, rooms: usize, scope: CollisionScope) -> GenerationConfig {
    GenerationConfig {
        seed,
        target_room_count: rooms,
        collision_scope: scope,
        ..GenerationConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_rooms_never_overlap_open_rooms_at_commit(seed in any::<u64>(), rooms in 1usize..60) {
        let mut generation =
            Generation::new(config_for(seed, rooms, CollisionScope::OpenRooms)).expect("valid");
        let mut placed_events = 0usize;
        for _ in 0..20_000 {
            let open_before: Vec<_> = generation
                .builder()
                .open_rooms()
                .iter()
                .filter_map(|&id| generation.builder().room(id).map(|room| room.rect))
                .collect();
            match generation.tick().expect("tick") {
                TickOutcome::Placed(event) => {
                    placed_events += 1;
                    for rect in &open_before {
                        prop_assert!(!intersects(&event.room.rect, rect));
                    }
                }
                TickOutcome::Skipped { .. } => {}
                TickOutcome::Complete => break,
            }
        }
        prop_assert_eq!(placed_events, rooms);
    }

    #[test]
    fn connections_are_mutual_and_open_set_is_exact(seed in any::<u64>(), rooms in 1usize..80) {
        let mut generation =
            Generation::new(config_for(seed, rooms, CollisionScope::OpenRooms)).expect("valid");
        generation.run_to_completion(50_000).expect("completes");
        let builder = generation.builder();

        for room in builder.rooms() {
            for direction in Direction::ALL {
                if let Some(neighbour) = room.connection(direction) {
                    let other = builder.room(neighbour).expect("neighbour exists");
                    prop_assert_eq!(other.connection(direction.opposite()), Some(room.id));
                }
            }
            prop_assert_eq!(room.has_open_slot(), builder.is_open(room.id));
        }
        prop_assert_eq!(audit(builder), Vec::new());
    }

    #[test]
    fn collision_scopes_grow_identical_layouts(seed in any::<u64>(), rooms in 1usize..60) {
        let mut open_only =
            Generation::new(config_for(seed, rooms, CollisionScope::OpenRooms)).expect("valid");
        let mut full_history =
            Generation::new(config_for(seed, rooms, CollisionScope::AllRooms)).expect("valid");

        let open_layout = open_only.run_to_completion(50_000).expect("completes").layout;
        let full_layout = full_history.run_to_completion(50_000).expect("completes").layout;

        prop_assert_eq!(open_layout.layout_hash(), full_layout.layout_hash());
    }
}

#[test]
fn tree_growth_has_one_fewer_connection_than_rooms() {
    let mut generation =
        Generation::new(config_for(31, 50, CollisionScope::OpenRooms)).expect("valid");
    let layout = generation.run_to_completion(50_000).expect("completes").layout;
    assert_eq!(layout.rooms.len(), 50);
    assert_eq!(layout.connection_count(), 49);
}
