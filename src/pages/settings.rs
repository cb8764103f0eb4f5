//! Settings Page
//!
//! Backend connection configuration.

use leptos::*;
use leptos_router::A;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 py-8 space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-800 dark:text-white">"Settings"</h1>
                    <p class="text-gray-600 dark:text-gray-400 mt-1">"Configure the stats backend"</p>
                </div>
                <A href="/" class="text-orange-500 hover:text-orange-600 transition-colors">
                    "← Back"
                </A>
            </div>

            <ApiSettings />
        </div>
    }
}

/// Backend URL settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        let url = api_url.get();
        if url.trim().is_empty() {
            state.show_error("Backend URL cannot be empty");
            return;
        }
        api::set_api_base(&url);
        state.api_base.set(api::get_api_base());
        state.show_success("Backend URL saved");
    };

    view! {
        <section class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
            <h2 class="text-xl font-semibold text-gray-800 dark:text-white mb-4">"Backend Connection"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-600 dark:text-gray-400 mb-2">"Backend base URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 rounded-lg px-4 py-3 border border-gray-300 dark:border-gray-600
                                   dark:bg-gray-700 dark:text-white focus:outline-none focus:ring-2 focus:ring-orange-500"
                        />
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-orange-500 hover:bg-orange-600 text-white
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                <p class="text-xs text-gray-500 dark:text-gray-400">
                    "The backend performs the Reddit OAuth2 exchange and serves the aggregated \
                     statistics. Changing the URL does not invalidate the current session."
                </p>
            </div>
        </section>
    }
}
