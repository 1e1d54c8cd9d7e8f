use gloam_core::{Cell, Grid};
use gloam_dungeon::{classify, TileKind, TileVariant};

fn carve_rect(walls: &mut Grid<bool>, x0: i32, y0: i32, x1: i32, y1: i32) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            walls.set(Cell::new(x, y), false);
        }
    }
}

#[test]
fn solid_grid_classifies_entirely_to_void() {
    let walls = Grid::new(5, 5, true);

    let tiles = classify(&walls, 0);

    for y in 0..5 {
        for x in 0..5 {
            let cell = Cell::new(x, y);
            assert_eq!(tiles.kind(cell), Some(TileKind::Void));
            assert_eq!(tiles.variant(cell), Some(TileVariant::Hidden));
            assert!(tiles.is_blocking(cell));
        }
    }
}

#[test]
fn wall_above_floor_becomes_base_and_upper() {
    // Floor rows 4..=5, solid wall everywhere else.
    let mut walls = Grid::new(7, 7, true);
    carve_rect(&mut walls, 1, 4, 5, 5);

    let tiles = classify(&walls, 3);

    for x in 1..=5 {
        let base = tiles.variant(Cell::new(x, 3)).unwrap();
        assert!(
            base == TileVariant::WallBase || base == TileVariant::WallBaseCracked,
            "expected base wall at ({x}, 3), got {base:?}"
        );
        assert_eq!(tiles.variant(Cell::new(x, 2)), Some(TileVariant::WallUpper));
    }
}

#[test]
fn void_below_wall_becomes_lower_and_trim() {
    // Floor rows 1..=2, deep wall mass below the room.
    let mut walls = Grid::new(7, 9, true);
    carve_rect(&mut walls, 1, 1, 5, 2);

    let tiles = classify(&walls, 5);

    assert_eq!(tiles.kind(Cell::new(2, 4)), Some(TileKind::Void));
    let lower = tiles.variant(Cell::new(2, 4)).unwrap();
    assert!(
        lower == TileVariant::WallLower || lower == TileVariant::WallLowerCracked,
        "expected lower wall at (2, 4), got {lower:?}"
    );
    assert_eq!(tiles.kind(Cell::new(2, 6)), Some(TileKind::Void));
    assert_eq!(tiles.variant(Cell::new(2, 6)), Some(TileVariant::WallTrim));
}

#[test]
fn floor_decor_lands_near_one_in_five() {
    let walls = Grid::new(30, 30, false);

    let tiles = classify(&walls, 8);

    let mut decorated = 0usize;
    for y in 0..30 {
        for x in 0..30 {
            let cell = Cell::new(x, y);
            assert_eq!(tiles.kind(cell), Some(TileKind::Floor));
            assert!(!tiles.is_blocking(cell));
            match tiles.variant(cell).unwrap() {
                TileVariant::FloorDecor(v) => {
                    assert!(v < gloam_dungeon::tile::FLOOR_DECOR_VARIANTS);
                    decorated += 1;
                }
                TileVariant::FloorPlain => {}
                other => panic!("unexpected floor variant {other:?}"),
            }
        }
    }

    // 20% of 900 cells, with generous slack.
    assert!((90..=270).contains(&decorated), "decorated = {decorated}");
}

#[test]
fn classification_is_deterministic_for_same_seed() {
    let mut walls = Grid::new(12, 12, true);
    carve_rect(&mut walls, 2, 2, 6, 6);
    carve_rect(&mut walls, 8, 4, 10, 9);

    let a = classify(&walls, 42);
    let b = classify(&walls, 42);

    assert_eq!(a, b);
}

#[test]
fn variants_never_change_collision() {
    let mut walls = Grid::new(16, 16, true);
    carve_rect(&mut walls, 2, 2, 7, 7);

    let tiles = classify(&walls, 1);

    for (cell, wall) in walls.cells() {
        let kind = tiles.kind(cell).unwrap();
        assert_eq!(kind == TileKind::Floor, !*wall);
        assert_eq!(tiles.is_blocking(cell), *wall);
    }
}
