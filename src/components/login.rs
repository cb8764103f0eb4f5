//! Login Screen
//!
//! Starts the OAuth2 flow: asks the backend for the authorization URL and
//! navigates the browser to it. The navigation ends this page's lifecycle;
//! the OAuth callback brings the user back with `?session=` or `?error=`.

use leptos::*;

use crate::api;
use crate::session::bootstrap::AuthState;
use crate::state::global::GlobalState;

/// Login screen component
#[component]
pub fn LoginScreen() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_login = move |_| {
        let state = state.clone();
        spawn_local(async move {
            state.auth.set(AuthState::Loading);

            match api::client::fetch_login_url().await {
                Ok(auth_url) => {
                    // Terminal for this page lifecycle; nothing to do after
                    redirect_to(&auth_url);
                }
                Err(e) => {
                    // Do not navigate on failure
                    state
                        .auth
                        .set(AuthState::Error(format!("Failed to start login: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                <div class="text-center mb-8">
                    <div class="w-16 h-16 bg-orange-500 rounded-full flex items-center justify-center mx-auto mb-4">
                        <span class="text-white text-2xl">"🤖"</span>
                    </div>
                    <h1 class="text-3xl font-bold text-gray-800 dark:text-white mb-2">"Reddit Stats"</h1>
                    <p class="text-gray-600 dark:text-gray-300">"Analyze your Reddit activity securely"</p>
                </div>

                <button
                    on:click=on_login
                    class="w-full bg-orange-500 hover:bg-orange-600 text-white font-semibold py-3 px-6
                           rounded-lg transition-colors flex items-center justify-center space-x-3"
                >
                    <span>"🔗"</span>
                    <span>"Login with Reddit"</span>
                </button>

                <div class="mt-6 p-4 bg-blue-50 dark:bg-blue-900/20 rounded-lg">
                    <h3 class="text-sm font-semibold text-blue-800 dark:text-blue-200 mb-2">"🔒 Secure OAuth2"</h3>
                    <ul class="text-xs text-blue-600 dark:text-blue-300 space-y-1">
                        <li>"• You'll be redirected to Reddit's secure login page"</li>
                        <li>"• Your password is never shared with this app"</li>
                        <li>"• Only temporary access to view your stats"</li>
                    </ul>
                </div>

                <div class="mt-6 space-y-3">
                    <h3 class="text-sm font-semibold text-gray-700 dark:text-gray-300">"What you'll see:"</h3>
                    <div class="grid grid-cols-2 gap-3 text-xs text-gray-600 dark:text-gray-400">
                        <span>"📊 Karma stats"</span>
                        <span>"📝 Recent posts"</span>
                        <span>"💬 Comments"</span>
                        <span>"📅 Account age"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Full browser navigation to the authorization URL
fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}
