use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
pub mod config;
pub mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::{home::HomePage, login::LoginPage};
use state::auth::{use_auth, AuthProvider};

#[component]
pub fn App() -> impl IntoView {
    let (auth, _) = use_auth();
    let logged_in = move || auth.with(|state| state.is_logged_in);

    // Leaving the login page disposes its owner, which cancels any pending check.
    view! {
        <main class="min-h-screen bg-surface">
            <Show when=logged_in fallback=|| view! { <LoginPage /> }>
                <HomePage />
            </Show>
        </main>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let loaded = config::init();
    let form_config = config::form_config();
    if console_log::init_with_level(form_config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    if let Err(err) = loaded {
        log::warn!("{}; using default form config", err);
    }
    log::info!(
        "Starting login form (debounce {} ms, submit policy {:?})",
        form_config.debounce.as_millis(),
        form_config.submit_policy
    );

    mount_to_body(|| {
        view! {
            <AuthProvider>
                <App />
            </AuthProvider>
        }
    });
}

/// Entry point for hosts that load the cdylib directly.
#[wasm_bindgen]
pub fn start() {
    run();
}
