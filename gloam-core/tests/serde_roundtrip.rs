#![cfg(feature = "serde")]

use gloam_core::{Cell, Direction};

#[test]
fn cell_roundtrips_via_serde() {
    let cell = Cell::new(17, -3);

    let json = serde_json::to_string(&cell).expect("serialize cell");
    let cell2: Cell = serde_json::from_str(&json).expect("deserialize cell");

    assert_eq!(cell, cell2);
}

#[test]
fn direction_roundtrips_via_serde() {
    for dir in Direction::ALL {
        let json = serde_json::to_string(&dir).expect("serialize direction");
        let dir2: Direction = serde_json::from_str(&json).expect("deserialize direction");
        assert_eq!(dir, dir2);
    }
}
