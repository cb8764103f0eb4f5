//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading screen shown while the session bootstraps
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="text-center">
                <div class="w-16 h-16 bg-orange-500 rounded-full flex items-center justify-center mx-auto mb-6 animate-pulse">
                    <span class="text-white text-2xl">"🤖"</span>
                </div>

                <div class="w-8 h-8 border-4 border-orange-200 border-t-orange-500 rounded-full animate-spin mx-auto mb-4" />

                <h2 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">"Loading..."</h2>
                <p class="text-gray-600 dark:text-gray-300">"Fetching your Reddit data"</p>
            </div>
        </div>
    }
}

/// Skeleton loader for list sections (posts, comments)
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
            <div class="animate-pulse space-y-4">
                <div class="h-6 bg-gray-200 dark:bg-gray-700 rounded w-1/3" />
                {(0..count).map(|_| view! {
                    <div class="h-24 bg-gray-200 dark:bg-gray-700 rounded" />
                }).collect_view()}
            </div>
        </div>
    }
}
