use super::*;

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] tabindex: Option<i32>,
    #[prop(optional)] on_contextmenu: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointermove: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            tabindex=tabindex
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:contextmenu=move |ev| {
                if let Some(on_contextmenu) = on_contextmenu.as_ref() {
                    on_contextmenu.call(ev);
                }
            }
            on:pointermove=move |ev| {
                if let Some(on_pointermove) = on_pointermove.as_ref() {
                    on_pointermove.call(ev);
                }
            }
            on:pointerup=move |ev| {
                if let Some(on_pointerup) = on_pointerup.as_ref() {
                    on_pointerup.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Wallpaper layer. An empty `wallpaper` renders the flat fallback colour.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] wallpaper: Signal<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            style=move || backdrop_style(&wallpaper.get())
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        ></div>
    }
}

fn backdrop_style(wallpaper: &str) -> String {
    if wallpaper.trim().is_empty() {
        "background: #1a1a1a;".to_string()
    } else {
        format!("background: url(\"{wallpaper}\") center/cover no-repeat;")
    }
}

#[component]
/// Desktop icon area laid out as wrapping columns above the taskbar.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            style=move || style.get()
            role="list"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window titlebar; the drag handle of a window.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and title group inside a titlebar.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] icon_color: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm color=icon_color.unwrap_or("currentColor") /> })}
            <span class="ui-window-title-text">{children()}</span>
        </div>
    }
}

#[component]
/// Titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button. Pointer-downs never reach the titlebar drag handler.
pub fn WindowControlButton(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] danger: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-window-control", layout_class)
            aria-label={
                let aria_label = aria_label.clone();
                move || aria_label.get()
            }
            title=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-variant=if danger { "danger" } else { "quiet" }
            on:pointerdown=|ev| ev.stop_propagation()
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || view! { <Icon icon=icon.get() size=IconSize::Sm /> }}
        </button>
    }
}

#[component]
/// Scrollable window content area.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar root, pinned to the bottom edge.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-taskbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            style=style
            data-ui-primitive="true"
            data-ui-kind="taskbar"
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        >
            {children()}
        </footer>
    }
}

#[component]
/// Taskbar section (`start`, `apps` or `tray`).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar app button with an open/active indicator underneath.
pub fn TaskbarButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            title=aria_label.clone()
            aria_label=aria_label
            aria_expanded=aria_expanded
            selected=active
            ui_slot="taskbar-button"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
            <span
                class="ui-taskbar-indicator"
                aria-hidden="true"
                data-ui-state=move || {
                    if active.get() {
                        "active"
                    } else if open.get() {
                        "open"
                    } else {
                        "closed"
                    }
                }
            ></span>
        </Button>
    }
}

#[component]
/// Tray trigger button for popups.
pub fn TrayButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            title=aria_label.clone()
            aria_label=aria_label
            aria_haspopup="dialog"
            aria_expanded=pressed
            pressed=pressed
            ui_slot="tray-button"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_falls_back_to_flat_colour() {
        assert_eq!(backdrop_style(""), "background: #1a1a1a;");
        assert_eq!(
            backdrop_style("/assets/wall.jpg"),
            "background: url(\"/assets/wall.jpg\") center/cover no-repeat;"
        );
    }
}
