use desktop_runtime::{
    clamp_rect, geometry::is_contained, InitialWindow, OpenWindowRequest, WindowRect,
    WindowState, WindowStore,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const IDS: [&str; 4] = ["about", "projects", "contact", "ghost"];

#[derive(Debug, Clone)]
enum Op {
    Open(usize, Option<WindowRect>),
    Close(usize),
    Minimize(usize),
    Maximize(usize),
    Restore(usize),
    Focus(usize),
    Move(usize, f64, f64),
    Resize(usize, f64, f64),
    SetRect(usize, WindowRect),
    Remove(usize),
}

fn any_rect() -> impl Strategy<Value = WindowRect> {
    (-1.5f64..2.5, -1.5f64..2.5, -1.0f64..3.0, -1.0f64..3.0)
        .prop_map(|(x, y, w, h)| WindowRect::new(x, y, w, h))
}

fn any_op() -> impl Strategy<Value = Op> {
    let id = 0..IDS.len();
    prop_oneof![
        (id.clone(), proptest::option::of(any_rect())).prop_map(|(i, r)| Op::Open(i, r)),
        id.clone().prop_map(Op::Close),
        id.clone().prop_map(Op::Minimize),
        id.clone().prop_map(Op::Maximize),
        id.clone().prop_map(Op::Restore),
        id.clone().prop_map(Op::Focus),
        (id.clone(), -2.0f64..2.0, -2.0f64..2.0).prop_map(|(i, dx, dy)| Op::Move(i, dx, dy)),
        (id.clone(), -2.0f64..2.0, -2.0f64..2.0).prop_map(|(i, dw, dh)| Op::Resize(i, dw, dh)),
        (id.clone(), any_rect()).prop_map(|(i, r)| Op::SetRect(i, r)),
        id.prop_map(Op::Remove),
    ]
}

fn apply(store: &WindowStore, op: &Op) {
    match *op {
        Op::Open(i, rect) => store.open(
            IDS[i],
            rect.map(|rect| OpenWindowRequest::new().with_rect(rect)),
        ),
        Op::Close(i) => store.close(IDS[i]),
        Op::Minimize(i) => store.minimize(IDS[i]),
        Op::Maximize(i) => store.maximize(IDS[i]),
        Op::Restore(i) => store.restore(IDS[i]),
        Op::Focus(i) => store.focus(IDS[i]),
        Op::Move(i, dx, dy) => store.move_by(IDS[i], dx, dy),
        Op::Resize(i, dw, dh) => store.resize_by(IDS[i], dw, dh),
        Op::SetRect(i, rect) => store.set_rect(IDS[i], rect),
        Op::Remove(i) => store.remove(IDS[i]),
    }
}

fn seeded_store() -> WindowStore {
    WindowStore::with_windows(vec![
        InitialWindow::new("about").with_rect(WindowRect::new(0.2, 0.2, 0.5, 0.5)),
        InitialWindow::new("projects").with_rect(WindowRect::new(0.6, 0.1, 0.3, 0.7)),
        InitialWindow::new("contact").with_state(WindowState::Minimized),
    ])
}

proptest! {
    #[test]
    fn clamp_is_idempotent_and_contained(rect in any_rect()) {
        let once = clamp_rect(rect);
        prop_assert_eq!(clamp_rect(once), once);
        prop_assert!(is_contained(once), "{:?} clamped to {:?}", rect, once);
    }

    #[test]
    fn every_rect_stays_contained(ops in proptest::collection::vec(any_op(), 1..60)) {
        let store = seeded_store();
        for op in &ops {
            apply(&store, op);
            for window in store.get_windows() {
                prop_assert!(
                    is_contained(window.rect),
                    "{} escaped after {:?}: {:?}",
                    window.id,
                    op,
                    window.rect
                );
                if let Some(prev) = window.prev_rect {
                    prop_assert!(is_contained(prev));
                }
            }
        }
    }

    #[test]
    fn focus_granting_actions_put_the_window_in_front(
        ops in proptest::collection::vec(any_op(), 0..40),
        target in 0usize..3,
        via_restore in any::<bool>(),
    ) {
        let store = seeded_store();
        for op in &ops {
            apply(&store, op);
        }
        let id = IDS[target];
        prop_assume!(store.get_by_id(id).is_some());

        if via_restore {
            store.restore(id);
        } else {
            store.focus(id);
        }

        let windows = store.get_windows();
        let focused = windows.iter().find(|w| w.id.as_str() == id).map(|w| w.z);
        let focused = focused.unwrap_or_default();
        for other in windows.iter().filter(|w| w.id.as_str() != id) {
            prop_assert!(focused > other.z, "{} z={} not above {} z={}", id, focused, other.id, other.z);
        }
    }

    #[test]
    fn minimize_and_maximize_round_trip_exactly(rect in any_rect(), maximize in any::<bool>()) {
        let store = WindowStore::with_windows(vec![InitialWindow::new("a").with_rect(rect)]);
        let before = store.get_by_id("a").map(|w| w.rect);

        if maximize {
            store.maximize("a");
        } else {
            store.minimize("a");
        }
        store.restore("a");

        let after = store.get_by_id("a");
        prop_assert_eq!(after.as_ref().map(|w| w.rect), before);
        prop_assert_eq!(after.as_ref().map(|w| w.state), Some(WindowState::Normal));
        prop_assert_eq!(after.and_then(|w| w.prev_rect), None);
    }

    #[test]
    fn unknown_ids_never_publish(op in any_op()) {
        let store = seeded_store();
        let op = match op {
            Op::Open(_, _) => Op::Open(3, None),
            Op::Close(_) => Op::Close(3),
            Op::Minimize(_) => Op::Minimize(3),
            Op::Maximize(_) => Op::Maximize(3),
            Op::Restore(_) => Op::Restore(3),
            Op::Focus(_) => Op::Focus(3),
            Op::Move(_, dx, dy) => Op::Move(3, dx, dy),
            Op::Resize(_, dw, dh) => Op::Resize(3, dw, dh),
            Op::SetRect(_, rect) => Op::SetRect(3, rect),
            Op::Remove(_) => Op::Remove(3),
        };
        let before = store.get_snapshot();
        apply(&store, &op);
        prop_assert!(before.ptr_eq(&store.get_snapshot()));
    }
}

#[test]
fn z_order_follows_focus_history() {
    let store = seeded_store();
    store.focus("projects");
    store.open("about", None);
    store.maximize("projects");
    store.restore("contact");

    let order: Vec<_> = store
        .get_windows_sorted()
        .into_iter()
        .map(|w| w.id.to_string())
        .collect();
    assert_eq!(order, vec!["about", "projects", "contact"]);
}

#[test]
fn minimized_window_moves_to_taskbar_selectors() {
    let store = WindowStore::with_windows(vec![
        InitialWindow::new("a").with_rect(WindowRect::new(0.2, 0.2, 0.5, 0.5))
    ]);
    store.minimize("a");

    let minimized = store.minimized_windows();
    assert_eq!(minimized.len(), 1);
    assert_eq!(minimized[0].id.as_str(), "a");
    assert!(store.visible_windows().is_empty());
    assert!(store.is_any_open());
    assert!(!store.has_visible_window());
}

#[test]
fn open_clamps_an_undersized_request() {
    let store = WindowStore::new();
    store.open(
        "b",
        Some(OpenWindowRequest::new().with_rect(WindowRect::new(0.0, 0.0, 0.05, 0.05))),
    );
    assert_eq!(
        store.get_by_id("b").map(|w| w.rect),
        Some(WindowRect::new(0.0, 0.0, 0.1, 0.1))
    );
}

#[test]
fn moving_a_maximized_window_keeps_the_full_rect() {
    let store = WindowStore::with_windows(vec![InitialWindow::new("a")]);
    store.maximize("a");
    let maximized = store.get_snapshot();

    store.move_by("a", 0.1, 0.1);

    assert_eq!(
        store.get_by_id("a").map(|w| w.rect),
        Some(WindowRect::new(0.0, 0.0, 1.0, 1.0))
    );
    assert!(maximized.ptr_eq(&store.get_snapshot()));
}
