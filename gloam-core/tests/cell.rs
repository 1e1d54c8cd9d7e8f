use gloam_core::{grid_to_world, Cell};

#[test]
fn grid_to_world_scales_by_tile_size_and_scale() {
    assert_eq!(grid_to_world(Cell::new(3, 2), 8.0, 2.0), (48.0, 32.0));
    assert_eq!(grid_to_world(Cell::new(0, 0), 8.0, 2.0), (0.0, 0.0));
    assert_eq!(grid_to_world(Cell::new(-1, 4), 16.0, 1.0), (-16.0, 64.0));
}

#[test]
fn distances_measure_steps_and_straight_lines() {
    let a = Cell::new(1, 1);
    let b = Cell::new(4, 5);

    assert_eq!(a.manhattan(b), 7);
    assert_eq!(a.euclidean(b), 5.0);
    assert_eq!(a.euclidean(a), 0.0);
}
