//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Home, Settings};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-orange-50 to-red-100 dark:from-gray-900 dark:to-gray-800 flex flex-col">
                // Main content area
                <main class="flex-1 pb-16">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend info
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing the configured backend and the last successful refresh
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let api_base = state.api_base;
    let last_refresh = state.last_refresh;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white dark:bg-gray-800 border-t border-gray-200 dark:border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Backend base URL; tracks the signal so a save in
                // Settings shows up without a reload
                <div class="text-gray-500 dark:text-gray-400">
                    {move || format!("Backend: {}", api_base.get())}
                </div>

                // Last profile refresh
                <div class="text-gray-500 dark:text-gray-400">
                    {move || {
                        last_refresh.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last refresh: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>

                // Settings link
                <A href="/settings" class="text-orange-500 hover:text-orange-600 transition-colors">
                    "Settings"
                </A>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2 text-gray-800 dark:text-white">"Page Not Found"</h1>
            <p class="text-gray-600 dark:text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-orange-500 hover:bg-orange-600 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Dashboard"
            </A>
        </div>
    }
}
