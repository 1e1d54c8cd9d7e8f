//! Recursive octant shadow-casting.
//!
//! The plane around the observer is split into eight octants; each is scanned
//! row by row, narrowing a slope window as opaque cells are met. A cell is
//! reported at most once per octant and only while it lies inside the
//! Euclidean radius.

use gloam_core::Cell;

// Octant coordinate multipliers, one column per octant.
const XX: [i32; 8] = [1, 0, 0, -1, -1, 0, 0, 1];
const XY: [i32; 8] = [0, 1, -1, 0, 0, -1, 1, 0];
const YX: [i32; 8] = [0, 1, 1, 0, 0, -1, -1, 0];
const YY: [i32; 8] = [1, 0, 0, 1, -1, 0, 0, -1];

/// Run a cast from `origin` out to `radius`, calling `visit` for every cell
/// the light reaches. The origin itself is always visited; a non-positive
/// radius visits nothing else.
pub fn cast(
    origin: Cell,
    radius: i32,
    transparent: &impl Fn(Cell) -> bool,
    visit: &mut impl FnMut(Cell),
) {
    visit(origin);
    if radius <= 0 {
        return;
    }
    for octant in 0..8 {
        cast_octant(origin, 1, 1.0, 0.0, radius, octant, transparent, visit);
    }
}

#[allow(clippy::too_many_arguments)]
fn cast_octant(
    origin: Cell,
    row: i32,
    mut start: f32,
    end: f32,
    radius: i32,
    octant: usize,
    transparent: &impl Fn(Cell) -> bool,
    visit: &mut impl FnMut(Cell),
) {
    if start < end {
        return;
    }
    let radius2 = radius * radius;
    let mut new_start = 0.0f32;

    for j in row..=radius {
        let dy = -j;
        let mut blocked = false;

        for dx in -j..=0 {
            let cell = Cell::new(
                origin.x + dx * XX[octant] + dy * XY[octant],
                origin.y + dx * YX[octant] + dy * YY[octant],
            );
            let l_slope = (dx as f32 - 0.5) / (dy as f32 + 0.5);
            let r_slope = (dx as f32 + 0.5) / (dy as f32 - 0.5);

            if start < r_slope {
                continue;
            }
            if end > l_slope {
                break;
            }

            if dx * dx + dy * dy <= radius2 {
                visit(cell);
            }

            if blocked {
                if !transparent(cell) {
                    new_start = r_slope;
                } else {
                    blocked = false;
                    start = new_start;
                }
            } else if !transparent(cell) && j < radius {
                // Opaque cell: the window beyond it continues in a child
                // scan, this scan resumes right of the obstruction.
                blocked = true;
                cast_octant(
                    origin,
                    j + 1,
                    start,
                    l_slope,
                    radius,
                    octant,
                    transparent,
                    visit,
                );
                new_start = r_slope;
            }
        }

        if blocked {
            break;
        }
    }
}
