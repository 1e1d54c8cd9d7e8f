use gloam_core::Cell;

/// Walkability seam between the router and whoever baked the map.
///
/// The tile classifier is the canonical implementor; collision derives from
/// tile kind there, and this trait is the only view of it the router gets.
/// Out-of-bounds cells must report blocking.
pub trait BlockingView {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn is_blocking(&self, cell: Cell) -> bool;
}
