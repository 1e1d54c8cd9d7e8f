use core::fmt;

use gloam_core::rng::derive_seed;
use gloam_core::{Cell, DeterministicRng, Direction, Grid, SplitMix64};
use tracing::debug;

use crate::{DungeonConfig, Room, RoomBounds};

/// Stream tag separating carve draws from classification draws.
const STREAM_CARVE: u64 = 0;

/// Total placement attempts before generation gives up and returns whatever
/// was carved. 100x the room target is generous for any sane config; the
/// hard requirement is termination, not density.
fn attempt_budget(room_count: u32) -> u32 {
    room_count.max(1).saturating_mul(100)
}

/// A generated level: the raw wall grid (`true` = wall), the spawn cell, and
/// the room rectangles for population placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Dungeon {
    pub walls: Grid<bool>,
    pub start: Cell,
    pub rooms: Vec<Room>,
}

impl Dungeon {
    pub fn start(&self) -> Cell {
        self.start
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.walls.height() {
            for x in 0..self.walls.width() {
                let wall = *self.walls.get(Cell::new(x, y)).unwrap_or(&true);
                f.write_str(if wall { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Generate a dungeon. Identical `(seed, config)` pairs produce bit-identical
/// output across runs and platforms.
///
/// Placement failures are skipped, never fatal: after the attempt budget is
/// exhausted the dungeon is returned as-is, possibly sparser than the
/// configured room count.
pub fn generate(seed: u64, config: &DungeonConfig) -> Dungeon {
    if let Err(err) = config.validate() {
        panic!("invalid dungeon config: {err}");
    }

    let [width, height] = config.size;
    let mut rng = SplitMix64::new(derive_seed(seed, 0, STREAM_CARVE));
    let mut walls = Grid::new(width, height, true);
    let mut rooms: Vec<Room> = Vec::new();

    // The initial room anchors the level at the grid center; its center cell
    // is the spawn point.
    let (w, h) = sample_size(&mut rng, &config.initial_room, config.symmetric_rooms);
    let initial = Room::new(
        (width as i32 - w) / 2,
        (height as i32 - h) / 2,
        w,
        h,
        config.initial_room.max_exits,
    );
    carve_room(&mut walls, &initial);
    let start = initial.center();
    rooms.push(initial);

    let budget = attempt_budget(config.room_count);
    let mut attempts = 0u32;
    while rooms.len() < config.room_count as usize && attempts < budget {
        attempts += 1;
        if !rng.chance(config.corridor_density) {
            continue;
        }
        try_attach_room(&mut walls, &mut rooms, &mut rng, config);
    }

    let mut interconnects_placed = 0u32;
    let mut link_attempts = 0u32;
    let link_budget = config.interconnects.saturating_mul(50);
    while interconnects_placed < config.interconnects && link_attempts < link_budget {
        link_attempts += 1;
        if try_interconnect(&mut walls, &rooms, &mut rng, config.max_interconnect_length as i32) {
            interconnects_placed += 1;
        }
    }

    debug!(
        rooms = rooms.len(),
        target = config.room_count,
        attempts,
        interconnects_placed,
        "dungeon carved"
    );

    Dungeon {
        walls,
        start,
        rooms,
    }
}

fn sample_size(rng: &mut SplitMix64, bounds: &RoomBounds, symmetric: bool) -> (i32, i32) {
    let w = rng.next_between(bounds.min_size[0], bounds.max_size[0]) as i32;
    let h = if symmetric {
        w
    } else {
        rng.next_between(bounds.min_size[1], bounds.max_size[1]) as i32
    };
    (w, h)
}

fn carve_room(walls: &mut Grid<bool>, room: &Room) {
    for y in room.y..room.y + room.h {
        for x in room.x..room.x + room.w {
            walls.set(Cell::new(x, y), false);
        }
    }
}

/// One attachment attempt: pick a host room with a free exit, a direction, a
/// corridor length, and a new room; carve both if the target region is still
/// solid wall. All draws happen before any check so a failed attempt costs
/// the same RNG advance as a successful one.
fn try_attach_room(
    walls: &mut Grid<bool>,
    rooms: &mut Vec<Room>,
    rng: &mut SplitMix64,
    config: &DungeonConfig,
) {
    let hosts: Vec<usize> = (0..rooms.len())
        .filter(|i| rooms[*i].has_free_exit())
        .collect();
    let Some(&host_idx) = hosts.get(rng.next_range(hosts.len().max(1) as u32) as usize) else {
        return;
    };

    let dir = Direction::ALL[rng.next_range(4) as usize];
    let len = rng.next_between(config.min_corridor_length, config.max_corridor_length) as i32;
    let (w, h) = sample_size(rng, &config.any_room, config.symmetric_rooms);

    let host = rooms[host_idx].clone();
    let (door, room_pos) = match dir {
        Direction::Up | Direction::Down => {
            let door_x = host.x + rng.next_range(host.w as u32) as i32;
            let entry = rng.next_range(w as u32) as i32;
            match dir {
                Direction::Up => (
                    Cell::new(door_x, host.y - 1),
                    Cell::new(door_x - entry, host.y - len - h),
                ),
                _ => (
                    Cell::new(door_x, host.y + host.h),
                    Cell::new(door_x - entry, host.y + host.h + len),
                ),
            }
        }
        Direction::Left | Direction::Right => {
            let door_y = host.y + rng.next_range(host.h as u32) as i32;
            let entry = rng.next_range(h as u32) as i32;
            match dir {
                Direction::Left => (
                    Cell::new(host.x - 1, door_y),
                    Cell::new(host.x - len - w, door_y - entry),
                ),
                _ => (
                    Cell::new(host.x + host.w, door_y),
                    Cell::new(host.x + host.w + len, door_y - entry),
                ),
            }
        }
    };

    let new_room = Room::new(room_pos.x, room_pos.y, w, h, config.any_room.max_exits);
    let corridor = corridor_cells(door, dir, len);

    if !room_fits(walls, &new_room) {
        return;
    }
    for cell in &corridor {
        if !walls.get(*cell).copied().unwrap_or(false) {
            return;
        }
    }

    carve_room(walls, &new_room);
    for cell in &corridor {
        walls.set(*cell, false);
    }

    rooms[host_idx].exits += 1;
    let mut new_room = new_room;
    new_room.exits = 1;
    rooms.push(new_room);
}

fn corridor_cells(door: Cell, dir: Direction, len: i32) -> Vec<Cell> {
    let (dx, dy) = dir.delta();
    (0..len).map(|i| door.offset(dx * i, dy * i)).collect()
}

/// The room rectangle expanded by one cell must lie inside the grid and
/// consist entirely of wall, so rooms never merge or touch the outer edge.
fn room_fits(walls: &Grid<bool>, room: &Room) -> bool {
    if room.x < 1
        || room.y < 1
        || room.x + room.w > walls.width() - 1
        || room.y + room.h > walls.height() - 1
    {
        return false;
    }
    for y in room.y - 1..=room.y + room.h {
        for x in room.x - 1..=room.x + room.w {
            if !walls.get(Cell::new(x, y)).copied().unwrap_or(false) {
                return false;
            }
        }
    }
    true
}

/// Attempt one loop-forming corridor between two distinct rooms that share a
/// row or column band, with at least one wall cell between them.
fn try_interconnect(
    walls: &mut Grid<bool>,
    rooms: &[Room],
    rng: &mut SplitMix64,
    max_len: i32,
) -> bool {
    if rooms.len() < 2 {
        return false;
    }
    let ai = rng.next_range(rooms.len() as u32) as usize;
    let bi = rng.next_range(rooms.len() as u32) as usize;
    if ai == bi {
        return false;
    }
    let (a, b) = (&rooms[ai], &rooms[bi]);

    // Shared horizontal band -> straight corridor along a row.
    let y0 = a.y.max(b.y);
    let y1 = (a.y + a.h).min(b.y + b.h) - 1;
    if y0 <= y1 {
        let y = y0 + rng.next_range((y1 - y0 + 1) as u32) as i32;
        let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
        return carve_gap(
            walls,
            (left.x + left.w..right.x).map(|x| Cell::new(x, y)).collect(),
            max_len,
        );
    }

    // Shared vertical band -> straight corridor along a column.
    let x0 = a.x.max(b.x);
    let x1 = (a.x + a.w).min(b.x + b.w) - 1;
    if x0 <= x1 {
        let x = x0 + rng.next_range((x1 - x0 + 1) as u32) as i32;
        let (top, bottom) = if a.y <= b.y { (a, b) } else { (b, a) };
        return carve_gap(
            walls,
            (top.y + top.h..bottom.y).map(|y| Cell::new(x, y)).collect(),
            max_len,
        );
    }

    false
}

fn carve_gap(walls: &mut Grid<bool>, gap: Vec<Cell>, max_len: i32) -> bool {
    if gap.is_empty() || gap.len() as i32 > max_len {
        return false;
    }
    if gap
        .iter()
        .any(|c| !walls.get(*c).copied().unwrap_or(false))
    {
        return false;
    }
    for cell in gap {
        walls.set(cell, false);
    }
    true
}
