use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Forsaken OS" />
        <Meta name="description" content="Mr. Oppy's portfolio, served as a Windows-style desktop." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=platform_host_web::build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
