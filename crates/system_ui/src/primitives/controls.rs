use super::*;

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_haspopup: Option<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_checked: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    let icon_size = size.icon_size();
    view! {
        <button
            type="button"
            class=class
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-haspopup=aria_haspopup
            aria-expanded=move || aria_expanded.get()
            aria-checked=move || aria_checked.as_ref().map(|checked| bool_token(checked.get()))
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                if pressed.get() {
                    "pressed"
                } else if selected.get() {
                    "selected"
                } else {
                    "idle"
                }
            }
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=icon_size /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=icon_size /> })}
        </button>
    }
}

#[component]
/// Round icon-only button used for transport controls and compact toolbar actions.
pub fn IconButton(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let icon_size = size.icon_size();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label={
                let aria_label = aria_label.clone();
                move || aria_label.get()
            }
            title=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-size=size.token()
            data-ui-pressed=move || bool_token(pressed.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || view! { <Icon icon=icon.get() size=icon_size /> }}
        </button>
    }
}

#[component]
/// Shared text input primitive.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-slot=ui_slot
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            <input
                class="ui-field"
                type="text"
                id=id
                placeholder=placeholder
                aria-label=aria_label
                autocomplete="off"
                spellcheck="false"
                node_ref=node_ref
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(event_target_value(&ev));
                    }
                }
                on:keydown=move |ev| {
                    if let Some(on_keydown) = on_keydown.as_ref() {
                        on_keydown.call(ev);
                    }
                }
            />
        </label>
    }
}

#[component]
/// Range slider with a percent CSS hook for active-track styling.
///
/// `on_input` receives the parsed slider value.
pub fn RangeField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(optional)] on_input: Option<Callback<f64>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-range", layout_class)
            type="range"
            min=min
            max=max
            step=step
            aria-label=aria_label
            prop:value=move || value.get().to_string()
            style=move || format!("--ui-range-percent: {:.2}%", clamp_percent(value.get(), min, max))
            data-ui-primitive="true"
            data-ui-kind="range"
            data-ui-slot=ui_slot
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    if let Ok(next) = event_target_value(&ev).parse::<f64>() {
                        on_input.call(next.clamp(min, max));
                    }
                }
            }
        />
    }
}

#[component]
/// Horizontal progress/level bar.
pub fn ProgressBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let fill_style = move || {
        let percent = clamp_percent(value.get(), 0.0, max);
        match color.as_deref() {
            Some(color) => format!("width: {percent:.2}%; background-color: {color}"),
            None => format!("width: {percent:.2}%"),
        }
    };
    view! {
        <div
            class=merge_layout_class("ui-progress", layout_class)
            role="progressbar"
            aria-label=aria_label
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="progress"
        >
            <div class="ui-progress-fill" style=fill_style></div>
        </div>
    }
}
