//! Shell primitives: desktop root, window frame pieces, and taskbar pieces.

use leptos::ev::MouseEvent;
use leptos::*;

mod shell;

pub use shell::{
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, ResizeHandle, Taskbar, TaskbarButton,
    TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

pub(crate) fn call_optional<T: 'static>(callback: Option<Callback<T>>, value: T) {
    if let Some(callback) = callback {
        callback.call(value);
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
