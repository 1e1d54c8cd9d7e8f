#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gloam_core::{Cell, Grid};

use crate::shadowcast;

/// Tint applied to remembered (previously seen, currently unlit) cells.
pub const DIM_TINT: u32 = 0x202020;
/// Tint applied to cells the current cast reaches.
pub const LIT_TINT: u32 = 0xFFFFFF;

/// Render-hint sink. Actual drawing is external; the engine consumes these
/// per-tick tint/alpha updates however it likes.
pub trait VisualSink {
    fn set_cell_visual(&mut self, cell: Cell, tint: u32, alpha: f32);
}

/// Sink for hosts that only poll visibility levels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVisuals;

impl VisualSink for NoVisuals {
    fn set_cell_visual(&mut self, _cell: Cell, _tint: u32, _alpha: f32) {}
}

/// Inclusive cell rectangle, typically the camera view plus a margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewBounds {
    pub min: Cell,
    pub max: Cell,
}

impl ViewBounds {
    pub fn new(min: Cell, max: Cell) -> Self {
        Self { min, max }
    }

    /// The whole grid; convenient when there is no camera.
    pub fn full(width: i32, height: i32) -> Self {
        Self {
            min: Cell::new(0, 0),
            max: Cell::new(width - 1, height - 1),
        }
    }
}

/// Per-cell visibility state: the current lit level and whether the cell has
/// ever been seen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibilityCell {
    /// 0.0 when not currently lit, otherwise the fade alpha in (0, 1].
    pub level: f32,
    pub seen: bool,
}

/// Fade denominator for the lit alpha. With the default view radius of 7 the
/// linear fade stays strictly positive everywhere the cast reaches and hits
/// zero at distance 12.
pub const FADE_SCALE: f32 = 6.0;

/// One documented fade: `clamp(2 - d / FADE_SCALE, 0, 1)` over the Euclidean
/// distance `d` from the observer.
fn fade_alpha(distance: f32) -> f32 {
    (2.0 - distance / FADE_SCALE).clamp(0.0, 1.0)
}

/// Owns and recomputes the per-cell visibility state each tick.
#[derive(Debug, Clone)]
pub struct VisibilityMap {
    cells: Grid<VisibilityCell>,
}

impl VisibilityMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Grid::new(width, height, VisibilityCell::default()),
        }
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Currently lit by the most recent `compute`.
    pub fn is_visible(&self, cell: Cell) -> bool {
        self.level(cell) > 0.0
    }

    pub fn level(&self, cell: Cell) -> f32 {
        self.cells.get(cell).map(|c| c.level).unwrap_or(0.0)
    }

    pub fn seen(&self, cell: Cell) -> bool {
        self.cells.get(cell).map(|c| c.seen).unwrap_or(false)
    }

    /// Recompute visibility from `observer` out to `radius`.
    ///
    /// Two phases: every in-grid cell inside `window` first drops to the dim
    /// remembered baseline, then the shadow-cast re-lights what the observer
    /// can actually see, fading with Euclidean distance. Safe to call every
    /// tick; no state outside `seen` carries across frames.
    pub fn compute(
        &mut self,
        observer: Cell,
        radius: i32,
        window: ViewBounds,
        transparent: &impl Fn(Cell) -> bool,
        sink: &mut impl VisualSink,
    ) {
        for y in window.min.y..=window.max.y {
            for x in window.min.x..=window.max.x {
                let cell = Cell::new(x, y);
                let Some(state) = self.cells.get_mut(cell) else {
                    continue;
                };
                state.level = 0.0;
                sink.set_cell_visual(cell, DIM_TINT, 1.0);
            }
        }

        shadowcast::cast(observer, radius, transparent, &mut |cell| {
            let Some(state) = self.cells.get_mut(cell) else {
                return;
            };
            let alpha = if cell == observer {
                1.0
            } else {
                fade_alpha(observer.euclidean(cell))
            };
            state.level = alpha.max(state.level);
            state.seen = true;
            sink.set_cell_visual(cell, LIT_TINT, alpha);
        });
    }
}
