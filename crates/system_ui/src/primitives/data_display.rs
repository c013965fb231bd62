use super::*;

#[component]
/// Elevated content card.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children()}
        </div>
    }
}

#[component]
/// Body text with a semantic tone.
pub fn Text(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Section heading. `level` 1 renders an `h1`, anything else an `h2`/`h3`.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    match level {
        1 => view! { <h1 class=class data-ui-primitive="true" data-ui-kind="heading">{children()}</h1> }
            .into_view(),
        2 => view! { <h2 class=class data-ui-primitive="true" data-ui-kind="heading">{children()}</h2> }
            .into_view(),
        _ => view! { <h3 class=class data-ui-primitive="true" data-ui-kind="heading">{children()}</h3> }
            .into_view(),
    }
}

#[component]
/// Small pill label.
pub fn Badge(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown when a view has nothing to display.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(into)] message: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Px(48) /> })}
            <p>{move || message.get()}</p>
        </div>
    }
}
