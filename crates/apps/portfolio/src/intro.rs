use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

use crate::SOCIAL_LINKS;

#[component]
/// Welcome window shown after the first boot.
pub fn IntroApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let links = context.services.links;

    view! {
        <div class="app-shell app-intro">
            <header class="intro-header">
                <span class="intro-badge">
                    <Icon icon=IconName::LayoutGrid size=IconSize::Md color="#ffffff" />
                </span>
                <div>
                    <Heading level=1>"Welcome to Forsaken OS"</Heading>
                    <Text tone=TextTone::Secondary>
                        "A web-based operating system experiment built with Rust and Leptos."
                    </Text>
                </div>
            </header>
            <div class="intro-content">
                <Card layout_class="intro-card">
                    <div class="intro-card-title">
                        <Icon icon=IconName::Globe size=IconSize::Md color="#ff0055" />
                        <Heading level=3>"Connect with Developer"</Heading>
                    </div>
                    <Text tone=TextTone::Secondary>
                        "Hi, I'm MR OPPY. Follow me on social media for updates and more projects."
                    </Text>
                    <div class="intro-social-grid">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <Button
                                        layout_class="intro-social-button"
                                        title=link.href
                                        on_click=Callback::new(move |_| links.open(link.href))
                                    >
                                        <Icon icon=link.icon size=IconSize::Sm color=link.color />
                                        <span>{link.label}</span>
                                        <Icon icon=IconName::ArrowRight size=IconSize::Xs />
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}
