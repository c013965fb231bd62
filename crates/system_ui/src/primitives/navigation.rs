use super::*;

#[component]
/// Horizontal toolbar row.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Footer status row.
pub fn StatusBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-status-bar", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="status-bar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab strip container.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tab-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single tab.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-tab", layout_class)
            role="tab"
            aria-selected=move || bool_token(selected.get())
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}
