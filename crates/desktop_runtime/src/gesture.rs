//! Toolkit-neutral pointer gesture state machines for dragging and resizing windows.
//!
//! A UI layer feeds pointer positions (CSS pixels) into a [`WindowGestures`] controller and
//! applies the resulting [`GestureCommand`]s to the store. Where the pointer events come from
//! (DOM listeners, native pointer capture) is up to the UI layer.

use serde::{Deserialize, Serialize};

use crate::{
    model::{ViewportSize, WindowId, WindowRecord, WindowRect, WindowState},
    store::WindowStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub const fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Applies a normalized pointer delta to the rect the gesture started from.
    ///
    /// East/south edges grow the size; west/north edges shrink it while shifting the origin by
    /// the same amount. The result is unclamped.
    pub fn apply(self, start: WindowRect, dx: f64, dy: f64) -> WindowRect {
        let mut rect = start;
        if self.has_east() {
            rect.w += dx;
        }
        if self.has_south() {
            rect.h += dy;
        }
        if self.has_west() {
            rect.w -= dx;
            rect.x += dx;
        }
        if self.has_north() {
            rect.h -= dy;
            rect.y += dy;
        }
        rect
    }
}

/// Store mutation produced by one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureCommand {
    MoveBy { dx: f64, dy: f64 },
    SetRect(WindowRect),
}

impl GestureCommand {
    pub fn apply(self, store: &WindowStore, window_id: &WindowId) {
        match self {
            Self::MoveBy { dx, dy } => store.move_by(window_id.clone(), dx, dy),
            Self::SetRect(rect) => store.set_rect(window_id.clone(), rect),
        }
    }
}

/// A pointer gesture in progress: begun on pointer-down, fed every pointer move, and dropped on
/// pointer-up or cancel.
pub trait PointerSession {
    fn window_id(&self) -> &WindowId;

    /// Translates a pointer move into a store mutation, if any.
    fn on_move(&mut self, pointer: PointerPosition, viewport: ViewportSize)
        -> Option<GestureCommand>;
}

/// Title-bar drag. Deltas are taken from the previous pointer position so a viewport resize in
/// the middle of a drag only affects subsequent moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub last_pointer: PointerPosition,
}

impl PointerSession for DragSession {
    fn window_id(&self) -> &WindowId {
        &self.window_id
    }

    fn on_move(
        &mut self,
        pointer: PointerPosition,
        viewport: ViewportSize,
    ) -> Option<GestureCommand> {
        let dx_px = f64::from(pointer.x - self.last_pointer.x);
        let dy_px = f64::from(pointer.y - self.last_pointer.y);
        self.last_pointer = pointer;
        if dx_px == 0.0 && dy_px == 0.0 {
            return None;
        }
        let (dx, dy) = viewport.normalize_delta(dx_px, dy_px);
        Some(GestureCommand::MoveBy { dx, dy })
    }
}

/// Edge or corner resize. Deltas are measured from the starting pointer position and applied to
/// the starting rect, since up to all four rect fields change together.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

impl PointerSession for ResizeSession {
    fn window_id(&self) -> &WindowId {
        &self.window_id
    }

    fn on_move(
        &mut self,
        pointer: PointerPosition,
        viewport: ViewportSize,
    ) -> Option<GestureCommand> {
        let (dx, dy) = viewport.normalize_delta(
            f64::from(pointer.x - self.pointer_start.x),
            f64::from(pointer.y - self.pointer_start.y),
        );
        Some(GestureCommand::SetRect(
            self.edge.apply(self.rect_start, dx, dy),
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveGesture {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl ActiveGesture {
    fn session_mut(&mut self) -> &mut dyn PointerSession {
        match self {
            Self::Drag(session) => session,
            Self::Resize(session) => session,
        }
    }
}

/// Whether the current environment allows pointer gestures at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureEnvironment {
    pub is_mobile: bool,
}

/// Per-window gesture controller. At most one gesture (drag or resize) is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowGestures {
    active: Option<ActiveGesture>,
}

impl WindowGestures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveGesture> {
        self.active.as_ref()
    }

    fn can_begin(&self, record: &WindowRecord, env: GestureEnvironment) -> bool {
        record.state == WindowState::Normal && !env.is_mobile && self.active.is_none()
    }

    /// Starts a title-bar drag. Returns `false` (and stays idle) when the window is not in the
    /// normal state, on mobile, or while another gesture runs.
    pub fn begin_drag(
        &mut self,
        record: &WindowRecord,
        pointer: PointerPosition,
        env: GestureEnvironment,
    ) -> bool {
        if !self.can_begin(record, env) {
            return false;
        }
        self.active = Some(ActiveGesture::Drag(DragSession {
            window_id: record.id.clone(),
            last_pointer: pointer,
        }));
        true
    }

    /// Starts an edge/corner resize under the same conditions as [`WindowGestures::begin_drag`].
    pub fn begin_resize(
        &mut self,
        record: &WindowRecord,
        edge: ResizeEdge,
        pointer: PointerPosition,
        env: GestureEnvironment,
    ) -> bool {
        if !self.can_begin(record, env) {
            return false;
        }
        self.active = Some(ActiveGesture::Resize(ResizeSession {
            window_id: record.id.clone(),
            edge,
            pointer_start: pointer,
            rect_start: record.rect,
        }));
        true
    }

    /// Feeds a pointer move to the active gesture.
    pub fn pointer_move(
        &mut self,
        pointer: PointerPosition,
        viewport: ViewportSize,
    ) -> Option<(WindowId, GestureCommand)> {
        let session = self.active.as_mut()?.session_mut();
        let command = session.on_move(pointer, viewport)?;
        Some((session.window_id().clone(), command))
    }

    /// Finishes the active gesture (pointer-up). Returns whether one was active.
    pub fn end(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Abandons the active gesture (pointer-cancel). Already-applied moves stay applied.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::InitialWindow;

    const VIEWPORT: ViewportSize = ViewportSize::new(800.0, 400.0);
    const DESKTOP: GestureEnvironment = GestureEnvironment { is_mobile: false };

    fn record(state: WindowState) -> WindowRecord {
        InitialWindow::new("w")
            .with_rect(WindowRect::new(0.25, 0.25, 0.5, 0.5))
            .with_state(state)
            .into_record(0)
    }

    #[test]
    fn drag_emits_incremental_normalized_deltas() {
        let mut gestures = WindowGestures::new();
        assert!(gestures.begin_drag(
            &record(WindowState::Normal),
            PointerPosition::new(100, 100),
            DESKTOP
        ));

        let (_, first) = gestures
            .pointer_move(PointerPosition::new(200, 150), VIEWPORT)
            .expect("first move");
        assert_eq!(first, GestureCommand::MoveBy { dx: 0.125, dy: 0.125 });

        let (id, second) = gestures
            .pointer_move(PointerPosition::new(250, 150), VIEWPORT)
            .expect("second move");
        assert_eq!(id, WindowId::from("w"));
        assert_eq!(second, GestureCommand::MoveBy { dx: 0.0625, dy: 0.0 });
    }

    #[test]
    fn drag_without_movement_emits_nothing() {
        let mut gestures = WindowGestures::new();
        gestures.begin_drag(
            &record(WindowState::Normal),
            PointerPosition::new(10, 10),
            DESKTOP,
        );
        assert_eq!(
            gestures.pointer_move(PointerPosition::new(10, 10), VIEWPORT),
            None
        );
    }

    #[test]
    fn resize_measures_from_the_start_pointer() {
        let mut gestures = WindowGestures::new();
        gestures.begin_resize(
            &record(WindowState::Normal),
            ResizeEdge::SouthEast,
            PointerPosition::new(0, 0),
            DESKTOP,
        );

        gestures.pointer_move(PointerPosition::new(50, 25), VIEWPORT);
        let (_, command) = gestures
            .pointer_move(PointerPosition::new(100, 50), VIEWPORT)
            .expect("resize move");

        assert_eq!(
            command,
            GestureCommand::SetRect(WindowRect::new(0.25, 0.25, 0.625, 0.625))
        );
    }

    #[test]
    fn west_and_north_edges_shift_origin_and_shrink() {
        let start = WindowRect::new(0.25, 0.25, 0.5, 0.5);

        assert_eq!(
            ResizeEdge::NorthWest.apply(start, 0.125, 0.125),
            WindowRect::new(0.375, 0.375, 0.375, 0.375)
        );
        assert_eq!(
            ResizeEdge::West.apply(start, -0.125, 0.5),
            WindowRect::new(0.125, 0.25, 0.625, 0.5)
        );
        assert_eq!(
            ResizeEdge::NorthEast.apply(start, 0.125, -0.125),
            WindowRect::new(0.25, 0.125, 0.625, 0.625)
        );
        assert_eq!(
            ResizeEdge::SouthWest.apply(start, 0.125, 0.125),
            WindowRect::new(0.375, 0.25, 0.375, 0.625)
        );
    }

    #[test]
    fn single_edges_only_touch_their_axis() {
        let start = WindowRect::new(0.25, 0.25, 0.5, 0.5);
        assert_eq!(
            ResizeEdge::East.apply(start, 0.125, 0.125),
            WindowRect::new(0.25, 0.25, 0.625, 0.5)
        );
        assert_eq!(
            ResizeEdge::South.apply(start, 0.125, 0.125),
            WindowRect::new(0.25, 0.25, 0.5, 0.625)
        );
        assert_eq!(
            ResizeEdge::North.apply(start, 0.125, 0.125),
            WindowRect::new(0.25, 0.375, 0.5, 0.375)
        );
    }

    #[test]
    fn gestures_require_normal_state_and_desktop() {
        let mut gestures = WindowGestures::new();
        let pointer = PointerPosition::new(0, 0);

        assert!(!gestures.begin_drag(&record(WindowState::Maximized), pointer, DESKTOP));
        assert!(!gestures.begin_resize(
            &record(WindowState::Minimized),
            ResizeEdge::East,
            pointer,
            DESKTOP
        ));
        assert!(!gestures.begin_drag(
            &record(WindowState::Normal),
            pointer,
            GestureEnvironment { is_mobile: true }
        ));
        assert!(!gestures.is_active());
    }

    #[test]
    fn drag_and_resize_are_mutually_exclusive() {
        let mut gestures = WindowGestures::new();
        let pointer = PointerPosition::new(0, 0);
        let normal = record(WindowState::Normal);

        assert!(gestures.begin_drag(&normal, pointer, DESKTOP));
        assert!(!gestures.begin_resize(&normal, ResizeEdge::South, pointer, DESKTOP));
        assert!(matches!(gestures.active(), Some(ActiveGesture::Drag(_))));

        assert!(gestures.end());
        assert!(!gestures.end());
        assert!(gestures.begin_resize(&normal, ResizeEdge::South, pointer, DESKTOP));
        gestures.cancel();
        assert!(!gestures.is_active());
        assert_eq!(gestures.pointer_move(PointerPosition::new(5, 5), VIEWPORT), None);
    }

    #[test]
    fn degenerate_viewport_produces_zero_delta() {
        let mut session = DragSession {
            window_id: "w".into(),
            last_pointer: PointerPosition::new(0, 0),
        };
        let command = session.on_move(PointerPosition::new(10, 10), ViewportSize::new(0.0, 0.0));
        assert_eq!(command, Some(GestureCommand::MoveBy { dx: 0.0, dy: 0.0 }));
    }

    #[test]
    fn edge_tokens_are_unique() {
        let mut tokens: Vec<_> = ResizeEdge::ALL.iter().map(|e| e.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), 8);
    }
}
