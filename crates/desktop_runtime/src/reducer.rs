//! Window actions and the transition logic behind every store mutation.

use thiserror::Error;

use crate::{
    geometry::{clamp_rect, FULL_RECT},
    model::{
        InitialWindow, OpenWindowRequest, WindowId, WindowMetaPatch, WindowRecord, WindowRect,
        WindowState, WindowsState,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_windows`].
pub enum WindowAction {
    /// Replace the whole collection and reset the z-order counter.
    InitWindows(Vec<InitialWindow>),
    /// Show (or create) a window and bring it to the front.
    Open {
        /// Window to open.
        window_id: WindowId,
        /// Creation config, required only when the window does not exist yet.
        request: Option<OpenWindowRequest>,
    },
    /// Soft-delete a window; the record stays in the collection.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window into the taskbar.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Fill the viewport.
    Maximize {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Return to the normal state, re-applying the saved rect.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Bring a window to the front without touching state or geometry.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Shift a window by a normalized delta.
    MoveBy {
        /// Window to move.
        window_id: WindowId,
        /// Horizontal delta.
        dx: f64,
        /// Vertical delta.
        dy: f64,
    },
    /// Grow a window by a normalized delta, keeping its origin.
    ResizeBy {
        /// Window to resize.
        window_id: WindowId,
        /// Width delta.
        dw: f64,
        /// Height delta.
        dh: f64,
    },
    /// Assign a whole rect at once.
    SetRect {
        /// Window to update.
        window_id: WindowId,
        /// New rect, clamped on assignment.
        rect: WindowRect,
    },
    /// Patch title, icon, or content.
    UpdateMeta {
        /// Window to update.
        window_id: WindowId,
        /// Fields to replace.
        patch: WindowMetaPatch,
    },
    /// Hard-delete a window record.
    Remove {
        /// Window to delete.
        window_id: WindowId,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an action could not be applied. Neither leaves the state modified.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
    /// `open` named a window that does not exist and supplied no creation config.
    #[error("cannot open unknown window `{0}` without a creation config")]
    MissingOpenConfig(WindowId),
}

/// Applies a [`WindowAction`] to the window collection.
///
/// Every geometry-changing transition re-clamps the affected rect, so the containment and
/// minimum-size invariant holds after any successful call.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when the action targets an unknown window and
/// [`ReducerError::MissingOpenConfig`] when `open` cannot create the window it names.
pub fn reduce_windows(state: &mut WindowsState, action: WindowAction) -> Result<(), ReducerError> {
    match action {
        WindowAction::InitWindows(initial) => {
            *state = WindowsState::from_initial(initial);
        }
        WindowAction::Open { window_id, request } => {
            let current = state.window(&window_id).map(|w| w.state);
            match (current, request) {
                (Some(WindowState::Closed | WindowState::Minimized), _) => {
                    restore_window(state, &window_id)?;
                }
                (Some(WindowState::Normal | WindowState::Maximized), _) => {
                    grant_focus(state, &window_id)?;
                }
                (None, Some(request)) => {
                    let z = state.next_z();
                    state.windows.push(request.into_record(window_id, z));
                }
                (None, None) => return Err(ReducerError::MissingOpenConfig(window_id)),
            }
        }
        WindowAction::Close { window_id } => {
            find_window_mut(state, &window_id)?.state = WindowState::Closed;
        }
        WindowAction::Minimize { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            if window.state != WindowState::Minimized {
                window.prev_rect = Some(window.rect);
                window.state = WindowState::Minimized;
            }
        }
        WindowAction::Maximize { window_id } => {
            let window = find_window_mut(state, &window_id)?;
            if window.state != WindowState::Maximized {
                window.prev_rect = Some(window.rect);
                window.rect = FULL_RECT;
                window.state = WindowState::Maximized;
                grant_focus(state, &window_id)?;
            }
        }
        WindowAction::Restore { window_id } => {
            restore_window(state, &window_id)?;
        }
        WindowAction::Focus { window_id } => {
            grant_focus(state, &window_id)?;
        }
        WindowAction::MoveBy { window_id, dx, dy } => {
            let window = find_window_mut(state, &window_id)?;
            window.rect = clamp_rect(window.rect.translated(dx, dy));
        }
        WindowAction::ResizeBy { window_id, dw, dh } => {
            let window = find_window_mut(state, &window_id)?;
            window.rect = clamp_rect(window.rect.grown(dw, dh));
        }
        WindowAction::SetRect { window_id, rect } => {
            find_window_mut(state, &window_id)?.rect = clamp_rect(rect);
        }
        WindowAction::UpdateMeta { window_id, patch } => {
            let window = find_window_mut(state, &window_id)?;
            if let Some(title) = patch.title {
                window.title = title;
            }
            if let Some(icon) = patch.icon {
                window.icon = icon;
            }
            if let Some(content) = patch.content {
                window.content = Some(content);
            }
        }
        WindowAction::Remove { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound(window_id));
            }
        }
    }

    Ok(())
}

fn find_window_mut<'a>(
    state: &'a mut WindowsState,
    window_id: &WindowId,
) -> Result<&'a mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))
}

/// Moves a window to the top of the z-order. The counter only advances for known windows.
fn grant_focus(state: &mut WindowsState, window_id: &WindowId) -> Result<(), ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| &w.id == window_id)
        .ok_or_else(|| ReducerError::WindowNotFound(window_id.clone()))?;
    let z = state.next_z();
    if let Some(window) = state.windows.get_mut(index) {
        window.z = z;
    }
    Ok(())
}

fn restore_window(state: &mut WindowsState, window_id: &WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    window.state = WindowState::Normal;
    if let Some(prev_rect) = window.prev_rect.take() {
        window.rect = clamp_rect(prev_rect);
    }
    grant_focus(state, window_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded(ids: &[&str]) -> WindowsState {
        WindowsState::from_initial(
            ids.iter()
                .map(|id| InitialWindow::new(*id).with_rect(WindowRect::new(0.2, 0.2, 0.5, 0.5)))
                .collect(),
        )
    }

    fn window<'a>(state: &'a WindowsState, id: &str) -> &'a WindowRecord {
        state.window(&WindowId::from(id)).expect("window exists")
    }

    fn apply(state: &mut WindowsState, action: WindowAction) {
        reduce_windows(state, action).expect("action applies");
    }

    #[test]
    fn init_assigns_sequential_z_and_resets_counter() {
        let state = seeded(&["a", "b", "c"]);

        assert_eq!(
            state.windows.iter().map(|w| w.z).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(state.z_counter, 3);
        assert_eq!(window(&state, "a").title, "a");
        assert_eq!(window(&state, "a").state, WindowState::Normal);
    }

    #[test]
    fn init_counter_follows_highest_explicit_z() {
        let state = WindowsState::from_initial(vec![
            InitialWindow::new("a").with_z(40),
            InitialWindow::new("b"),
        ]);
        assert_eq!(window(&state, "b").z, 2);
        assert_eq!(state.z_counter, 40);
    }

    #[test]
    fn init_with_no_windows_starts_counter_at_one() {
        let mut state = seeded(&["a"]);
        apply(&mut state, WindowAction::InitWindows(Vec::new()));
        assert!(state.windows.is_empty());
        assert_eq!(state.z_counter, 1);
    }

    #[test]
    fn open_unknown_window_creates_clamped_record_on_top() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::Open {
                window_id: "b".into(),
                request: Some(
                    OpenWindowRequest::new().with_rect(WindowRect::new(0.0, 0.0, 0.05, 0.05)),
                ),
            },
        );

        let record = window(&state, "b");
        assert_eq!(record.rect, WindowRect::new(0.0, 0.0, 0.1, 0.1));
        assert_eq!(record.state, WindowState::Normal);
        assert!(record.z > window(&state, "a").z);
    }

    #[test]
    fn open_unknown_window_without_config_is_rejected() {
        let mut state = seeded(&["a"]);
        let before = state.clone();

        let err = reduce_windows(
            &mut state,
            WindowAction::Open {
                window_id: "ghost".into(),
                request: None,
            },
        )
        .unwrap_err();

        assert_eq!(err, ReducerError::MissingOpenConfig("ghost".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn open_closed_window_returns_it_to_normal_on_top() {
        let mut state = seeded(&["a", "b"]);
        apply(
            &mut state,
            WindowAction::Close {
                window_id: "a".into(),
            },
        );
        apply(
            &mut state,
            WindowAction::Open {
                window_id: "a".into(),
                request: None,
            },
        );

        let record = window(&state, "a");
        assert_eq!(record.state, WindowState::Normal);
        assert!(record.z > window(&state, "b").z);
    }

    #[test]
    fn open_visible_window_only_refocuses() {
        let mut state = seeded(&["a", "b"]);
        let rect = window(&state, "a").rect;
        apply(
            &mut state,
            WindowAction::Open {
                window_id: "a".into(),
                request: Some(OpenWindowRequest::new().with_title("ignored")),
            },
        );

        let record = window(&state, "a");
        assert_eq!(record.title, "a");
        assert_eq!(record.rect, rect);
        assert_eq!(record.z, 3);
    }

    #[test]
    fn minimize_saves_rect_and_keeps_z() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::Minimize {
                window_id: "a".into(),
            },
        );

        let record = window(&state, "a");
        assert_eq!(record.state, WindowState::Minimized);
        assert_eq!(record.prev_rect, Some(WindowRect::new(0.2, 0.2, 0.5, 0.5)));
        assert_eq!(record.z, 1);
    }

    #[test]
    fn minimizing_twice_keeps_first_saved_rect() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::Minimize {
                window_id: "a".into(),
            },
        );
        let before = state.clone();
        apply(
            &mut state,
            WindowAction::Minimize {
                window_id: "a".into(),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn maximize_fills_viewport_and_restore_brings_rect_back() {
        let mut state = seeded(&["a"]);
        let original = window(&state, "a").rect;

        apply(
            &mut state,
            WindowAction::Maximize {
                window_id: "a".into(),
            },
        );
        let record = window(&state, "a");
        assert_eq!(record.rect, FULL_RECT);
        assert_eq!(record.state, WindowState::Maximized);
        assert_eq!(record.z, 2);

        apply(
            &mut state,
            WindowAction::Restore {
                window_id: "a".into(),
            },
        );
        let record = window(&state, "a");
        assert_eq!(record.rect, original);
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.prev_rect, None);
        assert_eq!(record.z, 3);
    }

    #[test]
    fn maximizing_twice_is_a_noop() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::Maximize {
                window_id: "a".into(),
            },
        );
        let before = state.clone();
        apply(
            &mut state,
            WindowAction::Maximize {
                window_id: "a".into(),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn restore_without_saved_rect_still_focuses() {
        let mut state = seeded(&["a", "b"]);
        apply(
            &mut state,
            WindowAction::Restore {
                window_id: "a".into(),
            },
        );
        let record = window(&state, "a");
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.rect, WindowRect::new(0.2, 0.2, 0.5, 0.5));
        assert_eq!(record.z, 3);
    }

    #[test]
    fn move_and_resize_are_reclamped() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::MoveBy {
                window_id: "a".into(),
                dx: 0.75,
                dy: -0.5,
            },
        );
        assert_eq!(window(&state, "a").rect, WindowRect::new(0.5, 0.0, 0.5, 0.5));

        apply(
            &mut state,
            WindowAction::ResizeBy {
                window_id: "a".into(),
                dw: -0.45,
                dh: 0.25,
            },
        );
        let rect = window(&state, "a").rect;
        assert_eq!(rect.w, 0.1);
        assert_eq!(rect.h, 0.75);
        assert_eq!(rect.x, 0.5);
    }

    #[test]
    fn moving_maximized_window_keeps_full_rect() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::Maximize {
                window_id: "a".into(),
            },
        );
        apply(
            &mut state,
            WindowAction::MoveBy {
                window_id: "a".into(),
                dx: 0.1,
                dy: 0.1,
            },
        );
        assert_eq!(window(&state, "a").rect, FULL_RECT);
    }

    #[test]
    fn set_rect_clamps_assignment() {
        let mut state = seeded(&["a"]);
        apply(
            &mut state,
            WindowAction::SetRect {
                window_id: "a".into(),
                rect: WindowRect::new(0.75, 0.5, 0.5, 0.75),
            },
        );
        assert_eq!(window(&state, "a").rect, WindowRect::new(0.5, 0.25, 0.5, 0.75));
    }

    #[test]
    fn update_meta_patches_only_supplied_fields() {
        let mut state = WindowsState::from_initial(vec![InitialWindow::new("a")
            .with_title("About")
            .with_icon("user")]);
        apply(
            &mut state,
            WindowAction::UpdateMeta {
                window_id: "a".into(),
                patch: WindowMetaPatch::title("About me"),
            },
        );
        let record = window(&state, "a");
        assert_eq!(record.title, "About me");
        assert_eq!(record.icon, "user");
    }

    #[test]
    fn close_is_soft_and_remove_is_hard() {
        let mut state = seeded(&["a", "b"]);
        apply(
            &mut state,
            WindowAction::Close {
                window_id: "a".into(),
            },
        );
        assert_eq!(window(&state, "a").state, WindowState::Closed);
        assert_eq!(state.windows.len(), 2);

        apply(
            &mut state,
            WindowAction::Remove {
                window_id: "a".into(),
            },
        );
        assert!(state.window(&"a".into()).is_none());
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn unknown_window_is_reported_and_state_untouched() {
        let mut state = seeded(&["a"]);
        let before = state.clone();
        let actions = vec![
            WindowAction::Close {
                window_id: "x".into(),
            },
            WindowAction::Minimize {
                window_id: "x".into(),
            },
            WindowAction::Maximize {
                window_id: "x".into(),
            },
            WindowAction::Restore {
                window_id: "x".into(),
            },
            WindowAction::Focus {
                window_id: "x".into(),
            },
            WindowAction::MoveBy {
                window_id: "x".into(),
                dx: 0.1,
                dy: 0.1,
            },
            WindowAction::ResizeBy {
                window_id: "x".into(),
                dw: 0.1,
                dh: 0.1,
            },
            WindowAction::SetRect {
                window_id: "x".into(),
                rect: WindowRect::default(),
            },
            WindowAction::UpdateMeta {
                window_id: "x".into(),
                patch: WindowMetaPatch::title("x"),
            },
            WindowAction::Remove {
                window_id: "x".into(),
            },
        ];

        for action in actions {
            let err = reduce_windows(&mut state, action).unwrap_err();
            assert_eq!(err, ReducerError::WindowNotFound("x".into()));
            assert_eq!(state, before);
        }
    }
}
