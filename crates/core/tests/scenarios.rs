use roomgen::config::DEFAULT_ORIGIN;
use roomgen::{
    Direction, Generation, GenerationConfig, Pos, RoomGraphBuilder, StepResult, TickOutcome,
};

fn placed_id(result: StepResult) -> roomgen::RoomId {
    match result {
        StepResult::Placed(placement) => placement.room.id,
        other => panic!("expected placement, got {other:?}"),
    }
}

#[test]
fn east_neighbour_of_origin_sits_one_gap_away() {
    let mut builder = RoomGraphBuilder::new(GenerationConfig::default()).expect("valid");
    let origin = builder.place_origin_room(DEFAULT_ORIGIN).expect("origin");
    assert_eq!(DEFAULT_ORIGIN.top_left, Pos { y: 300, x: 600 });
    assert_eq!(DEFAULT_ORIGIN.bottom_right, Pos { y: 400, x: 700 });

    let east = placed_id(builder.try_attach(origin, Direction::East).expect("attach"));
    let room = builder.room(east).expect("placed room");

    assert_eq!(room.rect.top_left, Pos { y: 300, x: 720 });
    assert_eq!(room.rect.bottom_right, Pos { y: 400, x: 820 });
}

#[test]
fn candidate_on_top_of_open_room_is_skipped() {
    let mut builder = RoomGraphBuilder::new(GenerationConfig::default()).expect("valid");
    let origin = builder.place_origin_room(DEFAULT_ORIGIN).expect("origin");
    let west = placed_id(builder.try_attach(origin, Direction::West).expect("attach"));
    let north_west = placed_id(builder.try_attach(west, Direction::North).expect("attach"));
    let north = placed_id(builder.try_attach(north_west, Direction::East).expect("attach"));

    let rooms_before = builder.room_count();
    let open_before = builder.open_rooms().to_vec();

    let result = builder.try_attach(north, Direction::South).expect("attempt");

    assert!(matches!(result, StepResult::Skipped { blocked_by, .. } if blocked_by == origin));
    assert_eq!(builder.room_count(), rooms_before);
    assert_eq!(builder.open_rooms(), open_before.as_slice());
}

#[test]
fn single_room_target_needs_no_steps() {
    let config = GenerationConfig::default().with_target_room_count(1);
    let mut generation = Generation::new(config).expect("valid");

    let summary = generation.run_to_completion(1).expect("origin alone completes the run");

    assert_eq!(summary.placed, 1);
    assert_eq!(summary.ticks, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(generation.tick().expect("tick"), TickOutcome::Complete);
}

#[test]
fn default_run_places_twelve_rooms() {
    let mut generation = Generation::new(GenerationConfig::default()).expect("valid");
    let mut placed_events = 0;
    for _ in 0..10_000 {
        match generation.tick().expect("tick") {
            TickOutcome::Placed(_) => placed_events += 1,
            TickOutcome::Skipped { .. } => {}
            TickOutcome::Complete => break,
        }
    }
    assert_eq!(placed_events, 12);
    assert_eq!(generation.placed_count(), 12);
}
