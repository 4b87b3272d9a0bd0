//! Centralized icon API for shell and portfolio content.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to the shell.
pub enum IconName {
    /// Generic window glyph, used when a window's icon token is unknown.
    Window,
    /// Home / welcome.
    Home,
    /// Person or profile.
    User,
    /// Folder or project collection.
    Folder,
    /// Envelope.
    Mail,
    /// Text document.
    Document,
    /// Titlebar minimize control.
    WindowMinimize,
    /// Titlebar maximize control.
    WindowMaximize,
    /// Titlebar restore control.
    WindowRestore,
    /// Titlebar close control.
    Dismiss,
}

impl IconName {
    /// Stable token used in configuration and `data-ui-icon` attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Home => "home",
            Self::User => "user",
            Self::Folder => "folder",
            Self::Mail => "mail",
            Self::Document => "document",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Resolves a configured icon token, falling back to [`IconName::Window`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "home" => Self::Home,
            "user" => Self::User,
            "folder" => Self::Folder,
            "mail" => Self::Mail,
            "document" => Self::Document,
            "window-minimize" => Self::WindowMinimize,
            "window-maximize" => Self::WindowMaximize,
            "window-restore" => Self::WindowRestore,
            "dismiss" => Self::Dismiss,
            _ => Self::Window,
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Window => "M3 4h14v12H3z M3 7h14",
            Self::Home => "M3 10l7-6 7 6 M5 9v7h10V9",
            Self::User => "M10 10a3 3 0 1 0 0-6 3 3 0 0 0 0 6z M4 17c0-3 3-5 6-5s6 2 6 5",
            Self::Folder => "M2 5h6l2 2h8v9H2z",
            Self::Mail => "M3 5h14v10H3z M3 5l7 6 7-6",
            Self::Document => "M5 2h7l4 4v12H5z M12 2v4h4",
            Self::WindowMinimize => "M4 10h12",
            Self::WindowMaximize => "M4 4h12v12H4z",
            Self::WindowRestore => "M6 6h10v10H6z M4 4h10v2 M4 4v10h2",
            Self::Dismiss => "M5 5l10 10 M15 5L5 15",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 32px.
    Lg,
}

impl IconSize {
    const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Inline stroke icon.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            width=px
            height=px
            viewBox="0 0 20 20"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            <path d=icon.path() />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_and_unknown_falls_back() {
        for icon in [
            IconName::Home,
            IconName::User,
            IconName::Folder,
            IconName::Mail,
            IconName::Document,
            IconName::Dismiss,
        ] {
            assert_eq!(IconName::from_token(icon.token()), icon);
        }
        assert_eq!(IconName::from_token("spaceship"), IconName::Window);
    }
}
