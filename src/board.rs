//! Sticky-note board geometry and drag state machine.
//!
//! Everything in here is plain data so the board can be exercised without a
//! browser. The Leptos component in `app::sticky_board` feeds it container
//! rects and pointer coordinates and renders whatever positions it reports.

use std::ops::Sub;

/// A point or offset in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The board's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub size: Size,
}

impl ContainerRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            size: Size::new(width, height),
        }
    }

    /// Converts a viewport point into board coordinates.
    pub fn to_local(&self, client: Point) -> Point {
        client - Point::new(self.left, self.top)
    }
}

/// Sizing rules for the board grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardMetrics {
    /// Containers narrower than this use the narrow card and column count.
    pub breakpoint: f64,
    pub narrow_card: Size,
    pub wide_card: Size,
    pub narrow_columns: usize,
    pub wide_columns: usize,
    pub padding_x: f64,
    pub padding_y: f64,
    /// How far a dragged card may hang over each edge of the board.
    pub overhang: f64,
}

impl Default for BoardMetrics {
    fn default() -> Self {
        Self {
            breakpoint: 640.0,
            narrow_card: Size::new(140.0, 140.0),
            wide_card: Size::new(180.0, 180.0),
            narrow_columns: 2,
            wide_columns: 3,
            padding_x: 24.0,
            padding_y: 24.0,
            overhang: 20.0,
        }
    }
}

impl BoardMetrics {
    fn is_narrow(&self, container: Size) -> bool {
        container.width < self.breakpoint
    }

    pub fn card_size(&self, container: Size) -> Size {
        if self.is_narrow(container) {
            self.narrow_card
        } else {
            self.wide_card
        }
    }

    pub fn columns(&self, container: Size) -> usize {
        let columns = if self.is_narrow(container) {
            self.narrow_columns
        } else {
            self.wide_columns
        };
        columns.max(1)
    }

    /// Inclusive `(min, max)` range a card's origin may occupy on each axis.
    pub fn bounds(&self, container: Size) -> (Point, Point) {
        let card = self.card_size(container);
        let min = Point::new(-self.overhang, -self.overhang);
        let max = Point::new(
            (container.width - card.width + self.overhang).max(min.x),
            (container.height - card.height + self.overhang).max(min.y),
        );
        (min, max)
    }

    pub fn clamp(&self, container: Size, position: Point) -> Point {
        let (min, max) = self.bounds(container);
        Point::new(
            position.x.clamp(min.x, max.x),
            position.y.clamp(min.y, max.y),
        )
    }
}

/// Lays `count` notes out in (at most) two rows inside `container`.
///
/// The first row holds one note per column, the second row takes the rest.
/// A short row is centred as a group; a long row divides the width among its
/// own notes. Pure: the same inputs always give the same positions.
pub fn layout(container: Size, count: usize, metrics: &BoardMetrics) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let card = metrics.card_size(container);
    let columns = metrics.columns(container);
    let available_w = (container.width - 2.0 * metrics.padding_x).max(0.0);
    let available_h = (container.height - 2.0 * metrics.padding_y).max(0.0);

    let first = count.min(columns);
    let rows: Vec<usize> = if count > first {
        vec![first, count - first]
    } else {
        vec![first]
    };
    let row_h = available_h / rows.len() as f64;

    let mut positions = Vec::with_capacity(count);
    for (row, &in_row) in rows.iter().enumerate() {
        let (cell_w, offset) = if in_row > columns {
            (available_w / in_row as f64, 0.0)
        } else {
            let cell_w = available_w / columns as f64;
            (cell_w, (available_w - cell_w * in_row as f64) / 2.0)
        };
        let y = metrics.padding_y + row as f64 * row_h + (row_h - card.height) / 2.0;
        for col in 0..in_row {
            let x = metrics.padding_x + offset + col as f64 * cell_w + (cell_w - card.width) / 2.0;
            positions.push(Point::new(x, y));
        }
    }
    positions
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        index: usize,
        grab_offset: Point,
        container: ContainerRect,
    },
}

/// Positions plus drag state for one board instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    metrics: BoardMetrics,
    note_count: usize,
    container: Option<Size>,
    positions: Vec<Point>,
    drag: DragState,
}

impl Board {
    pub fn new(note_count: usize, metrics: BoardMetrics) -> Self {
        Self {
            metrics,
            note_count,
            container: None,
            positions: Vec::new(),
            drag: DragState::Idle,
        }
    }

    /// Empty until the first layout pass.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(index).copied()
    }

    pub fn metrics(&self) -> &BoardMetrics {
        &self.metrics
    }

    /// Card size for the last laid-out container.
    pub fn card_size(&self) -> Size {
        self.metrics.card_size(self.container.unwrap_or_default())
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn active_index(&self) -> Option<usize> {
        match self.drag {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    /// Re-runs the grid layout for a (possibly new) container size.
    ///
    /// Any drag adjustments are discarded. A missing container leaves the
    /// board untouched.
    pub fn relayout(&mut self, container: Option<Size>) {
        if let Some(container) = container {
            self.container = Some(container);
            self.positions = layout(container, self.note_count, &self.metrics);
        }
    }

    /// `Idle -> Dragging(index)`.
    ///
    /// Returns `true` only when a new drag started, which is the caller's cue
    /// to subscribe to window-level move/up events.
    pub fn begin_drag(
        &mut self,
        index: usize,
        client: Point,
        container: Option<ContainerRect>,
    ) -> bool {
        if self.drag != DragState::Idle {
            return false;
        }
        let (Some(container), Some(position)) = (container, self.position(index)) else {
            return false;
        };
        self.drag = DragState::Dragging {
            index,
            grab_offset: container.to_local(client) - position,
            container,
        };
        true
    }

    /// `Dragging(i) -> Dragging(i)`: moves the active note under the pointer.
    pub fn drag_to(&mut self, client: Point) -> Option<Point> {
        let DragState::Dragging {
            index,
            grab_offset,
            container,
        } = self.drag
        else {
            return None;
        };
        let target = container.to_local(client) - grab_offset;
        let clamped = self.metrics.clamp(container.size, target);
        let slot = self.positions.get_mut(index)?;
        *slot = clamped;
        Some(clamped)
    }

    /// `Dragging(i) -> Idle`. The note keeps its last position.
    ///
    /// Returns the index that was released so the caller knows to drop its
    /// window listeners.
    pub fn end_drag(&mut self) -> Option<usize> {
        let released = self.active_index();
        self.drag = DragState::Idle;
        released
    }
}

/// A subscription that can be torn down, such as a window event listener.
pub trait Release {
    fn release(self);
}

/// The global move/up listeners belonging to the drag in progress.
///
/// At most one set is held; it exists only between a successful
/// [`Board::begin_drag`] and the end of that drag.
#[derive(Debug)]
pub struct DragListeners<H: Release> {
    handles: Vec<H>,
}

impl<H: Release> Default for DragListeners<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
        }
    }
}

impl<H: Release> DragListeners<H> {
    /// Subscribes when `started` is the result of a drag that just began.
    /// Does nothing if the drag didn't start or a set is already held.
    pub fn attach<F>(&mut self, started: bool, subscribe: F) -> bool
    where
        F: FnOnce() -> Vec<H>,
    {
        if !started || self.is_attached() {
            return false;
        }
        self.handles = subscribe();
        true
    }

    /// Tears down every held listener and returns how many there were.
    pub fn release(&mut self) -> usize {
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            handle.release();
        }
        count
    }

    pub fn is_attached(&self) -> bool {
        !self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    const WIDE: Size = Size::new(900.0, 500.0);
    const NARROW: Size = Size::new(400.0, 500.0);

    fn wide_rect() -> ContainerRect {
        ContainerRect::new(100.0, 50.0, WIDE.width, WIDE.height)
    }

    fn board() -> Board {
        let mut board = Board::new(5, BoardMetrics::default());
        board.relayout(Some(WIDE));
        board
    }

    #[test]
    fn test_layout_is_deterministic() {
        let metrics = BoardMetrics::default();
        let a = layout(WIDE, 5, &metrics);
        let b = layout(WIDE, 5, &metrics);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert_eq!(layout(NARROW, 5, &metrics), layout(NARROW, 5, &metrics));
    }

    #[test]
    fn test_wide_layout_rows() {
        let metrics = BoardMetrics::default();
        let positions = layout(WIDE, 5, &metrics);

        // first row: 3 columns of 284px cells, cards 180px wide
        assert_eq!(positions[0], Point::new(24.0 + 52.0, 24.0 + 113.0 - 90.0));
        assert_eq!(positions[1].x, positions[0].x + 284.0);
        assert_eq!(positions[2].x, positions[0].x + 568.0);
        assert!(positions[..3].iter().all(|p| p.y == positions[0].y));

        // second row: 2 notes centred as a group
        assert!(positions[3].y > positions[0].y);
        assert_eq!(positions[3].y, positions[4].y);
        let group_mid = (positions[3].x + positions[4].x + 180.0) / 2.0;
        assert!((group_mid - WIDE.width / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_narrow_layout_uses_small_cards() {
        let metrics = BoardMetrics::default();
        let positions = layout(NARROW, 5, &metrics);
        assert_eq!(positions.len(), 5);
        // 2 in the first row, 3 spread across the second
        assert_eq!(positions[0].y, positions[1].y);
        assert_eq!(positions[2].y, positions[4].y);
        let row_mid = (positions[2].x + positions[4].x + 140.0) / 2.0;
        assert!((row_mid - NARROW.width / 2.0).abs() < 1e-9);
        assert!(positions[2].x < positions[3].x && positions[3].x < positions[4].x);
    }

    #[test]
    fn test_single_row_when_notes_fit() {
        let positions = layout(WIDE, 2, &BoardMetrics::default());
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].y, (WIDE.height - 180.0) / 2.0);
        assert!(layout(WIDE, 0, &BoardMetrics::default()).is_empty());
    }

    #[test]
    fn test_positions_empty_before_layout() {
        let mut board = Board::new(5, BoardMetrics::default());
        assert!(board.positions().is_empty());
        board.relayout(None);
        assert!(board.positions().is_empty());
        assert!(!board.begin_drag(0, Point::new(10.0, 10.0), Some(wide_rect())));
    }

    #[test]
    fn test_drag_moves_with_grab_offset() {
        let mut board = board();
        let start = board.position(0).unwrap();
        let rect = wide_rect();
        // grab the card 10px in from its corner
        let grab = Point::new(rect.left + start.x + 10.0, rect.top + start.y + 10.0);
        assert!(board.begin_drag(0, grab, Some(rect)));
        assert!(board.is_dragging(0));

        let moved = board
            .drag_to(Point::new(grab.x + 40.0, grab.y + 25.0))
            .unwrap();
        assert_eq!(moved, Point::new(start.x + 40.0, start.y + 25.0));
    }

    #[test]
    fn test_clamp_holds_for_any_pointer() {
        let mut board = board();
        let rect = wide_rect();
        let (min, max) = board.metrics().bounds(rect.size);
        assert!(board.begin_drag(1, Point::new(400.0, 200.0), Some(rect)));
        for (x, y) in [
            (-1e9, -1e9),
            (1e9, 1e9),
            (-5000.0, 300.0),
            (300.0, 1e7),
            (rect.left, rect.top),
        ] {
            let p = board.drag_to(Point::new(x, y)).unwrap();
            assert!(p.x >= min.x && p.x <= max.x, "x out of bounds: {p:?}");
            assert!(p.y >= min.y && p.y <= max.y, "y out of bounds: {p:?}");
        }
        assert_eq!(max, Point::new(900.0 - 180.0 + 20.0, 500.0 - 180.0 + 20.0));
    }

    #[test]
    fn test_bounds_never_invert() {
        let metrics = BoardMetrics::default();
        let (min, max) = metrics.bounds(Size::new(50.0, 50.0));
        assert!(max.x >= min.x && max.y >= min.y);
    }

    #[test]
    fn test_single_active_drag() {
        let mut board = board();
        let rect = wide_rect();
        assert!(board.begin_drag(0, Point::new(200.0, 120.0), Some(rect)));
        assert!(!board.begin_drag(3, Point::new(300.0, 400.0), Some(rect)));
        assert!(board.is_dragging(0));
        assert!(!board.is_dragging(3));
        let active = (0..5).filter(|&i| board.is_dragging(i)).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_drag_without_container_is_noop() {
        let mut board = board();
        assert!(!board.begin_drag(0, Point::new(1.0, 1.0), None));
        assert_eq!(board.drag_state(), DragState::Idle);
        assert_eq!(board.drag_to(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_drag_result_persists_after_release() {
        let mut board = board();
        let rect = wide_rect();
        assert!(board.begin_drag(2, Point::new(700.0, 120.0), Some(rect)));
        let last = board.drag_to(Point::new(650.0, 300.0)).unwrap();
        assert_eq!(board.end_drag(), Some(2));
        assert_eq!(board.drag_state(), DragState::Idle);
        assert_eq!(board.position(2), Some(last));
        // moves after release do nothing
        assert_eq!(board.drag_to(Point::new(0.0, 0.0)), None);
        assert_eq!(board.position(2), Some(last));
        assert_eq!(board.end_drag(), None);
    }

    #[test]
    fn test_resize_resets_layout() {
        let mut board = board();
        let rect = wide_rect();
        let grid = board.position(0).unwrap();
        assert!(board.begin_drag(0, Point::new(rect.left + grid.x, rect.top + grid.y), Some(rect)));
        board.drag_to(Point::new(rect.left + grid.x + 200.0, rect.top + grid.y + 150.0));
        board.end_drag();
        assert_ne!(board.position(0), Some(grid));

        board.relayout(Some(WIDE));
        let fresh = layout(WIDE, 5, &BoardMetrics::default());
        assert_eq!(board.position(0), Some(fresh[0]));
        assert_eq!(board.positions(), fresh.as_slice());
    }

    #[test]
    fn test_card_size_follows_container() {
        let mut board = Board::new(5, BoardMetrics::default());
        board.relayout(Some(NARROW));
        assert_eq!(board.card_size(), Size::new(140.0, 140.0));
        board.relayout(Some(WIDE));
        assert_eq!(board.card_size(), Size::new(180.0, 180.0));
    }

    struct Counted(Rc<Cell<usize>>);

    impl Release for Counted {
        fn release(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    // mousemove, mouseup, touchmove, touchend, touchcancel
    fn window_handles(released: &Rc<Cell<usize>>) -> Vec<Counted> {
        (0..5).map(|_| Counted(released.clone())).collect()
    }

    #[test]
    fn test_listeners_follow_drag_lifecycle() {
        let mut board = board();
        let rect = wide_rect();
        let released = Rc::new(Cell::new(0));
        let mut listeners = DragListeners::default();
        assert!(!listeners.is_attached());

        let started = board.begin_drag(1, Point::new(400.0, 120.0), Some(rect));
        assert!(listeners.attach(started, || window_handles(&released)));
        assert!(listeners.is_attached());

        // a second press during the drag neither starts nor subscribes
        let started = board.begin_drag(2, Point::new(600.0, 120.0), Some(rect));
        let mut subscribed = false;
        assert!(!listeners.attach(started, || {
            subscribed = true;
            window_handles(&released)
        }));
        assert!(!subscribed);

        board.drag_to(Point::new(450.0, 200.0));
        assert_eq!(board.end_drag(), Some(1));
        assert_eq!(listeners.release(), 5);
        assert_eq!(released.get(), 5);
        assert!(!listeners.is_attached());

        // unmount after the drag ended has nothing left to drop
        assert_eq!(listeners.release(), 0);
        assert_eq!(released.get(), 5);
    }

    #[test]
    fn test_listeners_not_attached_when_drag_refused() {
        let mut board = Board::new(5, BoardMetrics::default());
        let released = Rc::new(Cell::new(0));
        let mut listeners = DragListeners::default();

        // no layout yet
        let started = board.begin_drag(0, Point::new(10.0, 10.0), Some(wide_rect()));
        assert!(!listeners.attach(started, || window_handles(&released)));
        assert!(!listeners.is_attached());
        assert_eq!(listeners.release(), 0);
    }

    #[test]
    fn test_unmount_mid_drag_releases_listeners() {
        let mut board = board();
        let released = Rc::new(Cell::new(0));
        let mut listeners = DragListeners::default();

        let started = board.begin_drag(0, Point::new(200.0, 120.0), Some(wide_rect()));
        listeners.attach(started, || window_handles(&released));
        assert_eq!(listeners.release(), 5);
        assert_eq!(released.get(), 5);

        // a drag after the previous set was dropped subscribes afresh
        board.end_drag();
        let started = board.begin_drag(0, Point::new(200.0, 120.0), Some(wide_rect()));
        assert!(listeners.attach(started, || window_handles(&released)));
    }
}
