use super::*;
use super::a11y::handle_menu_roving_keydown;
use crate::{
    apps,
    model::{IconSize as DesktopIconSize, SortOrder, START_MENU_Z_INDEX},
};
use system_ui::{
    EmptyState, Icon, IconButton, IconName, IconSize, MenuItem, MenuSeparator, MenuSurface,
    TextField,
};

const START_MENU_ID: &str = "start-menu";
const DESKTOP_CONTEXT_MENU_ID: &str = "desktop-context-menu";
const START_MENU_USER: &str = "MR. OPPY";

fn start_menu_heading(query: &str) -> &'static str {
    if query.is_empty() {
        "Pinned"
    } else {
        "Search Results"
    }
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let query = create_rw_signal(String::new());
    let search_input = create_node_ref::<html::Input>();
    let is_open = Signal::derive(move || state.with(|desktop| desktop.start_menu_open));

    create_effect(move |_| {
        if is_open.get() {
            if let Some(input) = search_input.get() {
                let _ = input.focus();
            }
        } else if !query.get_untracked().is_empty() {
            query.set(String::new());
        }
    });

    let close = move || runtime.dispatch_action(DesktopAction::CloseStartMenu);

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div class="start-menu-backdrop" on:click=move |_| close()></div>
            <MenuSurface
                id=START_MENU_ID
                layout_class="start-menu"
                style=format!("z-index:{START_MENU_Z_INDEX};")
                role="menu"
                aria_label="Start menu"
                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                    if handle_menu_roving_keydown(&ev, START_MENU_ID) {
                        return;
                    }
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        close();
                        let _ = focus_element_by_id("taskbar-start-button");
                    }
                })
            >
                <TextField
                    layout_class="start-menu-search"
                    placeholder="Type here to search"
                    aria_label="Search apps"
                    leading_icon=IconName::Search
                    node_ref=search_input
                    value=Signal::derive(move || query.get())
                    on_input=Callback::new(move |value| query.set(value))
                />
                <div class="start-menu-heading">
                    {move || query.with(|query| start_menu_heading(query))}
                </div>
                <div class="start-menu-apps" role="group">
                    {move || {
                        let matches = query.with(|query| apps::start_menu_apps(query));
                        if matches.is_empty() {
                            return view! { <EmptyState icon=IconName::Search message="No apps found." /> }
                                .into_view();
                        }
                        matches
                            .into_iter()
                            .map(|app| {
                                let app_id = store_value(app.application_id());
                                view! {
                                    <button
                                        id=format!("start-menu-item-{}", app.app_id)
                                        class="start-menu-app"
                                        role="menuitem"
                                        on:click=move |_| launch_app(runtime, app_id.get_value())
                                    >
                                        <Icon icon=app.icon size=IconSize::Lg color=app.icon_color />
                                        <span>{app.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <footer class="start-menu-footer">
                    <div class="start-menu-user">
                        <Icon icon=IconName::User size=IconSize::Sm />
                        <span>{START_MENU_USER}</span>
                    </div>
                    <IconButton
                        icon=IconName::Power
                        aria_label="Power"
                        on_click=Callback::new(move |_| {
                            close();
                            runtime.dispatch_action(DesktopAction::SetShutdownConfirmOpen {
                                open: true,
                            });
                        })
                    />
                </footer>
            </MenuSurface>
        </Show>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextSubmenu {
    View,
    SortBy,
}

const ICON_SIZE_CHOICES: [DesktopIconSize; 3] = [
    DesktopIconSize::Large,
    DesktopIconSize::Medium,
    DesktopIconSize::Small,
];

#[component]
pub(super) fn DesktopContextMenu(
    desktop_context_menu: RwSignal<Option<DesktopContextMenuState>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let submenu = create_rw_signal(None::<ContextSubmenu>);
    let close = move || {
        submenu.set(None);
        desktop_context_menu.set(None);
    };
    let run_and_close = move |action: DesktopAction| {
        close();
        runtime.dispatch_action(action);
    };
    let style = Signal::derive(move || {
        desktop_context_menu
            .get()
            .map(|menu| {
                format!("left:{}px;top:{}px;z-index:{START_MENU_Z_INDEX};", menu.x, menu.y)
            })
            .unwrap_or_default()
    });

    view! {
        <Show when=move || desktop_context_menu.get().is_some() fallback=|| ()>
            <MenuSurface
                id=DESKTOP_CONTEXT_MENU_ID
                layout_class="desktop-context-menu"
                role="menu"
                aria_label="Desktop context menu"
                style
                on_mousedown=Callback::new(|ev: web_sys::MouseEvent| ev.stop_propagation())
                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                    if handle_menu_roving_keydown(&ev, DESKTOP_CONTEXT_MENU_ID) {
                        return;
                    }
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        close();
                        let _ = focus_element_by_id("desktop-shell-root");
                    }
                })
            >
                <div class="context-submenu-host">
                    <MenuItem
                        id="desktop-context-menu-view"
                        icon=IconName::Monitor
                        submenu=true
                        on_mouseenter=Callback::new(move |_| submenu.set(Some(ContextSubmenu::View)))
                        on_click=Callback::new(move |_| submenu.set(Some(ContextSubmenu::View)))
                    >
                        "View"
                    </MenuItem>
                    <Show when=move || submenu.get() == Some(ContextSubmenu::View) fallback=|| ()>
                        <MenuSurface layout_class="context-submenu" role="menu" aria_label="View">
                            {ICON_SIZE_CHOICES
                                .into_iter()
                                .map(|size| {
                                    view! {
                                        <MenuItem
                                            role="menuitemradio"
                                            checked=Signal::derive(move || {
                                                state.with(|desktop| desktop.prefs.icon_size == size)
                                            })
                                            on_click=Callback::new(move |_| {
                                                run_and_close(DesktopAction::SetIconSize { size })
                                            })
                                        >
                                            {size.label()}
                                        </MenuItem>
                                    }
                                })
                                .collect_view()}
                        </MenuSurface>
                    </Show>
                </div>
                <div class="context-submenu-host">
                    <MenuItem
                        id="desktop-context-menu-sort"
                        icon=IconName::ArrowUpDown
                        submenu=true
                        on_mouseenter=Callback::new(move |_| {
                            submenu.set(Some(ContextSubmenu::SortBy))
                        })
                        on_click=Callback::new(move |_| submenu.set(Some(ContextSubmenu::SortBy)))
                    >
                        "Sort by"
                    </MenuItem>
                    <Show when=move || submenu.get() == Some(ContextSubmenu::SortBy) fallback=|| ()>
                        <MenuSurface layout_class="context-submenu" role="menu" aria_label="Sort by">
                            <MenuItem
                                role="menuitemradio"
                                checked=Signal::derive(move || {
                                    state.with(|desktop| desktop.prefs.sort_order == SortOrder::NameAsc)
                                })
                                on_click=Callback::new(move |_| {
                                    run_and_close(DesktopAction::SetSortOrder {
                                        order: SortOrder::NameAsc,
                                    })
                                })
                            >
                                "Name"
                            </MenuItem>
                        </MenuSurface>
                    </Show>
                </div>
                <MenuSeparator />
                <MenuItem
                    id="desktop-context-menu-arrange"
                    icon=IconName::LayoutGrid
                    on_mouseenter=Callback::new(move |_| submenu.set(None))
                    on_click=Callback::new(move |_| run_and_close(DesktopAction::ResetIconPositions))
                >
                    "Auto arrange icons"
                </MenuItem>
                <MenuItem
                    id="desktop-context-menu-refresh"
                    icon=IconName::RefreshCw
                    on_mouseenter=Callback::new(move |_| submenu.set(None))
                    on_click=Callback::new(move |_| close())
                >
                    "Refresh"
                </MenuItem>
                <MenuSeparator />
                <MenuItem
                    id="desktop-context-menu-personalize"
                    icon=IconName::Settings
                    on_mouseenter=Callback::new(move |_| submenu.set(None))
                    on_click=Callback::new(move |_| {
                        run_and_close(DesktopAction::LaunchApp {
                            app_id: apps::personalization_application_id(),
                            data: None,
                        })
                    })
                >
                    "Personalize"
                </MenuItem>
            </MenuSurface>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_switches_to_search_results_when_typing() {
        assert_eq!(start_menu_heading(""), "Pinned");
        assert_eq!(start_menu_heading("vid"), "Search Results");
        assert_eq!(start_menu_heading(" "), "Search Results");
    }

    #[test]
    fn view_submenu_lists_sizes_largest_first() {
        assert_eq!(
            ICON_SIZE_CHOICES.map(DesktopIconSize::label),
            ["Large icons", "Medium icons", "Small icons"]
        );
    }
}
