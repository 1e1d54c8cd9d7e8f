use gloam_core::Cell;

/// Axis-aligned room rectangle, tracked only while the level is being carved.
///
/// `exits` counts corridors already attached; a room with every exit used is
/// never picked as an attachment host again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub max_exits: u32,
    pub exits: u32,
}

impl Room {
    pub fn new(x: i32, y: i32, w: i32, h: i32, max_exits: u32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            max_exits,
            exits: 0,
        }
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x && cell.x < self.x + self.w && cell.y >= self.y && cell.y < self.y + self.h
    }

    pub fn has_free_exit(&self) -> bool {
        self.exits < self.max_exits
    }
}
