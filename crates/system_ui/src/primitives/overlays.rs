use super::*;

#[component]
/// Shared overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            style=move || style.get()
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu row with an optional leading icon and a trailing check or submenu chevron.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = "menuitem".to_string(), into)] role: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] checked: Option<MaybeSignal<bool>>,
    #[prop(optional)] submenu: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_mouseenter: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let check = checked.map(|checked| {
        view! {
            <span class="ui-menu-item-check" aria-hidden="true">
                <Show when=move || checked.get()>
                    <Icon icon=IconName::Checkmark size=IconSize::Xs />
                </Show>
            </span>
        }
    });
    view! {
        <div
            class=merge_layout_class("ui-menu-item", layout_class)
            id=id
            role=role
            tabindex="-1"
            aria-disabled=move || disabled.get()
            aria-haspopup=submenu.then_some("menu")
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mouseenter=move |ev| {
                if let Some(on_mouseenter) = on_mouseenter.as_ref() {
                    on_mouseenter.call(ev);
                }
            }
        >
            {check}
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <span class="ui-menu-item-label">{children()}</span>
            {submenu.then(|| view! { <Icon icon=IconName::ChevronRight size=IconSize::Xs /> })}
        </div>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Centered modal dialog over a dimming backdrop. Clicking the backdrop calls `on_dismiss`.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let title_id = format!("ui-modal-{}", title.to_ascii_lowercase().replace(' ', "-"));
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:click=move |_| {
                if let Some(on_dismiss) = on_dismiss.as_ref() {
                    on_dismiss.call(());
                }
            }
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-labelledby=title_id.clone()
                data-ui-primitive="true"
                data-ui-kind="modal"
                on:click=|ev| ev.stop_propagation()
            >
                <header class="ui-modal-header">
                    {icon.map(|icon| view! { <Icon icon size=IconSize::Md /> })}
                    <h2 id=title_id>{title}</h2>
                </header>
                {children()}
            </div>
        </div>
    }
}
