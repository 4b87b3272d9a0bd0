//! Shared UI primitive library for the portfolio desktop shell.
//!
//! The crate owns the shell's Leptos primitives, a centralized icon API, the theme-token
//! contract, and the stable `data-ui-*` DOM contract consumed by the desktop CSS layers. The
//! window manager composes these primitives instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod theme;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopRoot, DesktopWindowLayer, ResizeHandle, Taskbar, TaskbarButton,
    TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
pub use theme::ThemeTokens;
