use log::info;
use yew::prelude::*;

use cyberyantra_frontend::config::{self, ActivationConfig};
use cyberyantra_frontend::dom;
use cyberyantra_frontend::pages::{landing::Landing, nav::SiteHeader};

#[function_component]
fn App() -> Html {
    // Mount once the page markup is in the DOM, tear down on unmount.
    use_effect_with_deps(
        move |_| {
            let mounted = dom::mount(ActivationConfig::default()).ok();
            move || drop(mounted)
        },
        (),
    );

    html! {
        <>
            <SiteHeader />
            <Landing />
        </>
    }
}

fn print_welcome_banner() {
    gloo_console::log!("%cCyberyantra", "color: #2563eb; font-size: 16px; font-weight: bold;");
    gloo_console::log!(
        "%cEmpowering Digital Safety & Security Awareness",
        "color: #6b7280; font-size: 12px;"
    );
    gloo_console::log!(
        "%cFor security reports: security@cyberyantra.com",
        "color: #059669; font-size: 12px;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    print_welcome_banner();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
