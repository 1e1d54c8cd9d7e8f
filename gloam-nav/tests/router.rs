use gloam_core::{Cell, Grid};
use gloam_nav::{BlockingView, PathPoll, PathRouter};

struct WallMap {
    walls: Grid<bool>,
}

impl WallMap {
    fn open(width: u32, height: u32) -> Self {
        Self {
            walls: Grid::new(width, height, false),
        }
    }
}

impl BlockingView for WallMap {
    fn width(&self) -> i32 {
        self.walls.width()
    }

    fn height(&self) -> i32 {
        self.walls.height()
    }

    fn is_blocking(&self, cell: Cell) -> bool {
        self.walls.get(cell).copied().unwrap_or(true)
    }
}

#[test]
fn submit_does_not_resolve_inline() {
    let mut router = PathRouter::new();

    let ticket = router.submit(Cell::new(0, 0), Cell::new(2, 2));

    assert_eq!(router.poll(ticket), PathPoll::Pending);
    assert_eq!(router.pending(), 1);
}

#[test]
fn pump_resolves_queued_requests() {
    let map = WallMap::open(3, 3);
    let mut router = PathRouter::new();

    let ticket = router.submit(Cell::new(0, 0), Cell::new(2, 2));
    router.pump(&map);

    match router.poll(ticket) {
        PathPoll::Ready(Some(path)) => {
            assert_eq!(path.len(), 5);
            assert_eq!(path.first().copied(), Some(Cell::new(0, 0)));
            assert_eq!(path.last().copied(), Some(Cell::new(2, 2)));
        }
        other => panic!("expected resolved path, got {other:?}"),
    }

    // A ready result is handed out exactly once.
    assert_eq!(router.poll(ticket), PathPoll::Pending);
}

#[test]
fn unreachable_resolves_to_none() {
    let mut map = WallMap::open(5, 5);
    for y in 0..5 {
        map.walls.set(Cell::new(2, y), true);
    }
    let mut router = PathRouter::new();

    let ticket = router.submit(Cell::new(0, 2), Cell::new(4, 2));
    router.pump(&map);

    assert_eq!(router.poll(ticket), PathPoll::Ready(None));
}

#[test]
fn identical_requests_get_distinct_tickets() {
    let map = WallMap::open(3, 3);
    let mut router = PathRouter::new();

    let a = router.submit(Cell::new(0, 0), Cell::new(2, 2));
    let b = router.submit(Cell::new(0, 0), Cell::new(2, 2));
    assert_ne!(a, b);

    router.pump(&map);

    assert!(matches!(router.poll(a), PathPoll::Ready(Some(_))));
    assert!(matches!(router.poll(b), PathPoll::Ready(Some(_))));
}

#[test]
fn cancel_drops_queued_and_ready_results() {
    let map = WallMap::open(3, 3);
    let mut router = PathRouter::new();

    let queued = router.submit(Cell::new(0, 0), Cell::new(2, 2));
    router.cancel(queued);
    assert_eq!(router.pending(), 0);

    let resolved = router.submit(Cell::new(0, 0), Cell::new(1, 1));
    router.pump(&map);
    router.cancel(resolved);

    assert_eq!(router.poll(queued), PathPoll::Pending);
    assert_eq!(router.poll(resolved), PathPoll::Pending);
}
