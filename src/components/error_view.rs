//! Error Screen
//!
//! Full-page error state with user-actionable next steps: retry keeps the
//! stored session, back-to-login discards it.

use leptos::*;

/// Error screen component
#[component]
pub fn ErrorView(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="text-center max-w-md mx-auto p-6 bg-white dark:bg-gray-800 rounded-lg shadow-lg">
                <div class="text-red-500 text-xl mb-4">"❌ Error"</div>
                <p class="text-red-600 dark:text-red-400 mb-6">{message}</p>

                <div class="flex items-center justify-center space-x-3">
                    <button
                        on:click=move |_| on_retry.call(())
                        class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded transition-colors"
                    >
                        "Try Again"
                    </button>
                    <button
                        on:click=move |_| on_back.call(())
                        class="bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600
                               text-gray-800 dark:text-gray-200 px-4 py-2 rounded transition-colors"
                    >
                        "Back to Login"
                    </button>
                </div>
            </div>
        </div>
    }
}
