//! Post-processing of the raw wall grid into decorated tile variants and the
//! collision predicate.

use gloam_core::rng::derive_seed;
use gloam_core::{Cell, DeterministicRng, Grid, SplitMix64};
use gloam_nav::BlockingView;

/// Stream tag separating classification draws from carve draws.
const STREAM_TILES: u64 = 1;

/// Number of decorative floor sub-variants.
pub const FLOOR_DECOR_VARIANTS: u8 = 4;

/// Movement category. Collision derives solely from this: `Wall` and `Void`
/// block, `Floor` permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Fully buried wall; never rendered, still non-traversable.
    Void,
    Wall,
    Floor,
}

/// Render-only sub-variant. Changing a variant never changes collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileVariant {
    FloorPlain,
    FloorDecor(u8),
    WallBase,
    WallBaseCracked,
    WallUpper,
    WallLower,
    WallLowerCracked,
    WallTrim,
    /// Void cells; the renderer skips these entirely.
    Hidden,
}

/// Decorated tile map: movement kinds plus render variants, same dimensions
/// as the wall grid it was classified from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    kinds: Grid<TileKind>,
    variants: Grid<TileVariant>,
}

impl TileMap {
    pub fn width(&self) -> i32 {
        self.kinds.width()
    }

    pub fn height(&self) -> i32 {
        self.kinds.height()
    }

    pub fn kind(&self, cell: Cell) -> Option<TileKind> {
        self.kinds.get(cell).copied()
    }

    pub fn variant(&self, cell: Cell) -> Option<TileVariant> {
        self.variants.get(cell).copied()
    }

    /// Collision predicate. Out-of-bounds cells block.
    pub fn is_blocking(&self, cell: Cell) -> bool {
        self.kinds
            .get(cell)
            .map(|k| *k != TileKind::Floor)
            .unwrap_or(true)
    }
}

impl BlockingView for TileMap {
    fn width(&self) -> i32 {
        TileMap::width(self)
    }

    fn height(&self) -> i32 {
        TileMap::height(self)
    }

    fn is_blocking(&self, cell: Cell) -> bool {
        TileMap::is_blocking(self, cell)
    }
}

/// Classify a baked wall grid into kinds and variants.
///
/// Four ordered passes, each reading the state left by the previous one:
/// burial, base/upper walls, lower/trim walls, floor decoration. Draws come
/// from a classification stream of the level seed, so (seed, walls)
/// reproduces the same decoration every time.
pub fn classify(walls: &Grid<bool>, seed: u64) -> TileMap {
    let mut rng = SplitMix64::new(derive_seed(seed, 0, STREAM_TILES));

    let mut kinds = Grid::new(walls.width() as u32, walls.height() as u32, TileKind::Floor);
    let mut variants = Grid::new(
        walls.width() as u32,
        walls.height() as u32,
        TileVariant::FloorPlain,
    );
    for (cell, wall) in walls.cells() {
        if *wall {
            kinds.set(cell, TileKind::Wall);
            variants.set(cell, TileVariant::WallBase);
        }
    }

    // Pass 1: a wall with all 8 neighbours and both cells directly below
    // still wall is invisible from every angle; bury it. Off-grid counts as
    // wall.
    let wall_at = |c: Cell| walls.get(c).copied().unwrap_or(true);
    for (cell, wall) in walls.cells() {
        if !*wall {
            continue;
        }
        let mut buried = wall_at(cell.offset(0, 2));
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                buried &= wall_at(cell.offset(dx, dy));
            }
        }
        if buried {
            kinds.set(cell, TileKind::Void);
            variants.set(cell, TileVariant::Hidden);
        }
    }

    // Pass 2: walls facing floor below become base walls; the wall directly
    // above a base wall becomes its upper half.
    for y in 0..kinds.height() {
        for x in 0..kinds.width() {
            let cell = Cell::new(x, y);
            if kinds.get(cell) != Some(&TileKind::Wall) {
                continue;
            }
            if kinds.get(cell.offset(0, 1)) != Some(&TileKind::Floor) {
                continue;
            }
            let variant = if rng.chance(0.2) {
                TileVariant::WallBaseCracked
            } else {
                TileVariant::WallBase
            };
            variants.set(cell, variant);

            let above = cell.offset(0, -1);
            if kinds.get(above) == Some(&TileKind::Wall) {
                variants.set(above, TileVariant::WallUpper);
            }
        }
    }

    // Pass 3: buried cells just under a wall read as the wall's lower face;
    // two cells further down, still buried, a trim line.
    for y in 0..kinds.height() {
        for x in 0..kinds.width() {
            let cell = Cell::new(x, y);
            if kinds.get(cell) != Some(&TileKind::Void) {
                continue;
            }
            if kinds.get(cell.offset(0, -1)) != Some(&TileKind::Wall) {
                continue;
            }
            let variant = if rng.chance(0.2) {
                TileVariant::WallLowerCracked
            } else {
                TileVariant::WallLower
            };
            variants.set(cell, variant);

            let two_below = cell.offset(0, 2);
            if kinds.get(two_below) == Some(&TileKind::Void) {
                variants.set(two_below, TileVariant::WallTrim);
            }
        }
    }

    // Pass 4: scatter decorative floor variants.
    for y in 0..kinds.height() {
        for x in 0..kinds.width() {
            let cell = Cell::new(x, y);
            if kinds.get(cell) != Some(&TileKind::Floor) {
                continue;
            }
            if rng.chance(0.2) {
                let decor = rng.next_range(FLOOR_DECOR_VARIANTS as u32) as u8;
                variants.set(cell, TileVariant::FloorDecor(decor));
            }
        }
    }

    TileMap { kinds, variants }
}
