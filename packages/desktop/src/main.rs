use dioxus::prelude::*;

/// Base URL of the user-record server, overridable for non-local setups.
fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn main() {
    #[cfg(feature = "desktop")]
    dioxus::launch(App);

    #[cfg(not(feature = "desktop"))]
    eprintln!("Build with the `desktop` feature (dx serve --platform desktop) to run the UI.");
}

#[allow(dead_code)]
#[component]
fn App() -> Element {
    use_context_provider(|| api::ApiClient::new(api_base_url()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::UsersView {}
    }
}
