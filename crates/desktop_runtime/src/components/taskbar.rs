use system_ui::{Icon, IconName, IconSize, Taskbar as TaskbarRoot, TaskbarButton, TaskbarSection};

use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selectors = runtime.selectors;
    let actions = runtime.actions;
    let (main_title, main_icon, taskbar_height_px) = runtime.config.with_value(|config| {
        (
            config.main_window.title.clone(),
            IconName::from_token(&config.main_window.icon),
            config.taskbar_height_px,
        )
    });

    let main_title = store_value(main_title);
    let open_main = Callback::new(move |_: web_sys::MouseEvent| runtime.open_main_window());

    view! {
        <TaskbarRoot aria_label="Taskbar" style=format!("height:{taskbar_height_px}px;")>
            <TaskbarSection ui_slot="launcher">
                <Show when=move || !selectors.any_open.get() fallback=|| ()>
                    <TaskbarButton
                        ui_slot="main-window-cta"
                        aria_label=main_title.with_value(|title| format!("Open {title}"))
                        title=main_title.get_value()
                        on_click=open_main
                    >
                        <Icon icon=main_icon size=IconSize::Sm />
                        <span>{main_title.get_value()}</span>
                    </TaskbarButton>
                </Show>
            </TaskbarSection>
            <TaskbarSection ui_slot="minimized-windows" aria_label="Minimized windows">
                <For each=move || selectors.minimized.get() key=|win| win.id.clone() let:win>
                    {
                        let window_id = win.id.clone();
                        view! {
                            <TaskbarButton
                                aria_label=format!("Restore {}", win.title)
                                title=win.title.clone()
                                data_window=win.id.to_string()
                                on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                    actions.restore(window_id.clone())
                                })
                            >
                                <Icon icon=IconName::from_token(&win.icon) size=IconSize::Sm />
                                <span>{win.title.clone()}</span>
                            </TaskbarButton>
                        }
                    }
                </For>
            </TaskbarSection>
        </TaskbarRoot>
    }
}
