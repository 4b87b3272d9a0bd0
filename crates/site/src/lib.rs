mod content;
mod layout;
mod web_app;

pub use content::portfolio_contents;
pub use layout::{load_layout, SiteLayout};
pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
