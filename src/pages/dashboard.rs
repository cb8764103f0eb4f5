//! Dashboard Page
//!
//! Authenticated shell: header with the logged-in username and logout
//! button, tab navigation, and the active tab's content.

use leptos::*;

use crate::api::client::UserProfile;
use crate::components::{CommentsSection, PostsSection, ProfileStats};
use crate::session::store::SessionToken;

/// The three dashboard tabs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Stats,
    Posts,
    Comments,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Stats, Tab::Posts, Tab::Comments];

    fn label(self) -> &'static str {
        match self {
            Tab::Stats => "Statistics",
            Tab::Posts => "Posts",
            Tab::Comments => "Comments",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tab::Stats => "📊",
            Tab::Posts => "📝",
            Tab::Comments => "💬",
        }
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard(
    profile: UserProfile,
    session: SessionToken,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(Tab::Stats);

    let username = profile.username.clone();

    view! {
        <div>
            // Header
            <header class="bg-white dark:bg-gray-800 shadow-sm border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4 py-4 flex justify-between items-center">
                    <div class="flex items-center space-x-3">
                        <div class="w-8 h-8 bg-orange-500 rounded-full flex items-center justify-center">
                            <span class="text-white">"🤖"</span>
                        </div>
                        <div>
                            <h1 class="text-xl font-bold text-gray-800 dark:text-white">"Reddit Stats"</h1>
                            <p class="text-sm text-gray-600 dark:text-gray-400">
                                {format!("Welcome back, u/{}", username)}
                            </p>
                        </div>
                    </div>

                    <button
                        on:click=move |_| on_logout.call(())
                        class="bg-red-500 hover:bg-red-600 text-white font-medium py-2 px-4 rounded-lg transition-colors"
                    >
                        "Logout"
                    </button>
                </div>
            </header>

            // Tab navigation
            <div class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4">
                    <nav class="flex space-x-8">
                        {Tab::ALL.into_iter().map(|tab| {
                            view! {
                                <button
                                    on:click=move |_| set_active_tab.set(tab)
                                    class=move || {
                                        let base = "py-4 px-1 border-b-2 font-medium text-sm transition-colors";
                                        if active_tab.get() == tab {
                                            format!("{} border-orange-500 text-orange-600 dark:text-orange-400", base)
                                        } else {
                                            format!("{} border-transparent text-gray-500 dark:text-gray-400 hover:text-gray-700", base)
                                        }
                                    }
                                >
                                    <span class="flex items-center space-x-2">
                                        <span>{tab.icon()}</span>
                                        <span>{tab.label()}</span>
                                    </span>
                                </button>
                            }
                        }).collect_view()}
                    </nav>
                </div>
            </div>

            // Active tab content
            <main class="max-w-7xl mx-auto px-4 py-8">
                {move || match active_tab.get() {
                    Tab::Stats => view! { <ProfileStats profile=profile.clone() /> }.into_view(),
                    Tab::Posts => view! { <PostsSection session=session.clone() /> }.into_view(),
                    Tab::Comments => view! { <CommentsSection session=session.clone() /> }.into_view(),
                }}
            </main>
        </div>
    }
}
