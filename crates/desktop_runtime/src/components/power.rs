use super::*;
use system_ui::{Button, ButtonVariant, Icon, IconButton, IconName, IconSize, Modal, Text, TextTone};

const SHUTDOWN_WARNING: &str =
    "Are you sure you want to shut down Forsaken OS? All unsaved work will be lost.";

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    view! {
        <div class="boot-screen" role="status" aria-live="polite" aria-label="Starting Forsaken OS">
            <h1 class="boot-screen-title">"FORSAKEN OS"</h1>
            <span class="boot-screen-spinner">
                <Icon icon=IconName::Loader size=IconSize::Px(40) />
            </span>
        </div>
    }
}

#[component]
pub(super) fn ShutDownScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="shutdown-screen">
            <IconButton
                layout_class="shutdown-screen-power"
                icon=IconName::Power
                aria_label="Turn on"
                on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::TurnOn))
            />
        </div>
    }
}

#[component]
pub(super) fn ShutdownConfirmDialog() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = Signal::derive(move || {
        runtime
            .state
            .with(|desktop| desktop.power.shutdown_confirm_open)
    });
    let cancel = move || {
        runtime.dispatch_action(DesktopAction::SetShutdownConfirmOpen { open: false });
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <Modal
                layout_class="shutdown-dialog"
                title="Shut Down"
                icon=IconName::Power
                on_dismiss=Callback::new(move |_| cancel())
            >
                <Text tone=TextTone::Secondary>{SHUTDOWN_WARNING}</Text>
                <div class="shutdown-dialog-actions">
                    <Button on_click=Callback::new(move |_| cancel())>"Cancel"</Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::ShutDown)
                        })
                    >
                        "Shut Down"
                    </Button>
                </div>
            </Modal>
        </Show>
    }
}
