//! Posts Section
//!
//! Posts tab: submitted posts with page-size and sort controls. Failures
//! here are section-local; they never invalidate the session.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::api;
use crate::api::client::Post;
use crate::components::loading::ListSkeleton;
use crate::session::store::SessionToken;

/// Page-size choices offered in the selector
const LIMIT_CHOICES: [u32; 4] = [5, 10, 15, 25];

/// Client-side sort order for the fetched page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl SortOrder {
    fn key(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
        }
    }

    fn from_key(key: &str) -> Self {
        match key {
            "oldest" => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }
}

/// Sort posts in place by creation time
fn sort_posts(posts: &mut [Post], order: SortOrder) {
    match order {
        SortOrder::Newest => posts.sort_by(|a, b| b.created_utc.cmp(&a.created_utc)),
        SortOrder::Oldest => posts.sort_by(|a, b| a.created_utc.cmp(&b.created_utc)),
    }
}

/// Posts tab content
#[component]
pub fn PostsSection(session: SessionToken) -> impl IntoView {
    let (posts, set_posts) = create_signal(Vec::<Post>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (limit, set_limit) = create_signal(10u32);
    let (sort, set_sort) = create_signal(SortOrder::Newest);
    let (reload, set_reload) = create_signal(0u32);

    // Refetch on page-size change or explicit refresh/retry
    let token = session.clone();
    create_effect(move |_| {
        let limit = limit.get();
        let _ = reload.get();

        let token = token.clone();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::client::fetch_posts(&token, limit).await {
                Ok(list) => set_posts.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch posts: {}", e).into());
                    set_error.set(Some("Failed to load posts. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let refetch = move |_| set_reload.update(|n| *n += 1);

    // Sort is applied client-side on the fetched page
    let sorted = move || {
        let mut list = posts.get();
        sort_posts(&mut list, sort.get());
        list
    };

    view! {
        {move || {
            if loading.get() {
                return view! { <ListSkeleton /> }.into_view();
            }

            if let Some(message) = error.get() {
                return view! {
                    <SectionError message on_retry=refetch />
                }.into_view();
            }

            view! {
                <div class="space-y-6">
                    // Header with controls
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
                        <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                            <h2 class="text-2xl font-bold text-gray-800 dark:text-white">"📝 Your Posts"</h2>

                            <div class="flex items-center gap-4">
                                // Sort order
                                <div class="flex items-center gap-2">
                                    <label class="text-sm font-medium text-gray-700 dark:text-gray-300">"Sort:"</label>
                                    <select
                                        on:change=move |ev| set_sort.set(SortOrder::from_key(&event_target_value(&ev)))
                                        class="px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md
                                               dark:bg-gray-700 dark:text-white text-sm focus:outline-none focus:ring-2 focus:ring-orange-500"
                                    >
                                        {[SortOrder::Newest, SortOrder::Oldest].into_iter().map(|order| view! {
                                            <option value=order.key() selected=move || sort.get() == order>
                                                {order.label()}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </div>

                                // Page size
                                <div class="flex items-center gap-2">
                                    <label class="text-sm font-medium text-gray-700 dark:text-gray-300">"Show:"</label>
                                    <select
                                        on:change=move |ev| {
                                            if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                                set_limit.set(n);
                                            }
                                        }
                                        class="px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md
                                               dark:bg-gray-700 dark:text-white text-sm focus:outline-none focus:ring-2 focus:ring-orange-500"
                                    >
                                        {LIMIT_CHOICES.into_iter().map(|n| view! {
                                            <option value=n selected=move || limit.get() == n>
                                                {format!("{} posts", n)}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>
                        </div>
                    </div>

                    // Post list
                    {
                        let list = sorted();
                        if list.is_empty() {
                            view! {
                                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-12 text-center">
                                    <div class="text-6xl mb-4">"📭"</div>
                                    <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">"No posts found"</h3>
                                    <p class="text-gray-600 dark:text-gray-400">
                                        "You haven't submitted any posts yet, or they're not visible to the API."
                                    </p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-4">
                                    {list.into_iter().map(|post| view! { <PostItem post /> }).collect_view()}
                                </div>

                                <div class="text-center">
                                    <button
                                        on:click=refetch
                                        class="bg-orange-500 hover:bg-orange-600 text-white px-6 py-3 rounded-lg
                                               transition-colors font-medium"
                                    >
                                        "🔄 Refresh Posts"
                                    </button>
                                </div>
                            }.into_view()
                        }
                    }
                </div>
            }.into_view()
        }}
    }
}

/// One post card
#[component]
fn PostItem(post: Post) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6 hover:shadow-xl transition-shadow">
            <div class="flex justify-between items-start mb-3">
                <h3 class="text-lg font-semibold text-gray-800 dark:text-white flex-1 mr-4">
                    {post.title}
                </h3>
                <a
                    href=post.permalink
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-orange-500 hover:text-orange-600 transition-colors flex-shrink-0"
                    title="View on Reddit"
                >
                    "🔗"
                </a>
            </div>

            <div class="flex flex-wrap items-center gap-4 text-sm text-gray-600 dark:text-gray-400 mb-3">
                <span class="bg-orange-100 dark:bg-orange-900/30 text-orange-800 dark:text-orange-200 px-2 py-1 rounded">
                    {format!("r/{}", post.subreddit)}
                </span>
                <span>{format!("⬆️ {}", post.score)}</span>
                <span>{format!("💬 {}", post.num_comments)}</span>
                <span>{format!("🕒 {}", post.created_time)}</span>
            </div>

            {post.selftext.filter(|s| !s.is_empty()).map(|text| view! {
                <div class="bg-gray-50 dark:bg-gray-700 p-3 rounded text-sm text-gray-700 dark:text-gray-300">
                    <p>{text}</p>
                </div>
            })}
        </div>
    }
}

/// Section-local error card with a retry control
#[component]
pub fn SectionError(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
            <div class="text-center">
                <div class="text-red-500 text-lg mb-2">"❌ Error"</div>
                <p class="text-red-600 dark:text-red-400 mb-4">{message}</p>
                <button
                    on:click=move |ev| on_retry.call(ev)
                    class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded-md transition-colors"
                >
                    "Retry"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, created_utc: i64) -> Post {
        Post {
            title: title.to_string(),
            subreddit: "rust".to_string(),
            score: 1,
            num_comments: 0,
            created_utc,
            created_time: String::new(),
            permalink: String::new(),
            selftext: None,
        }
    }

    #[test]
    fn test_sort_posts_newest_first() {
        let mut posts = vec![post("a", 100), post("b", 300), post("c", 200)];
        sort_posts(&mut posts, SortOrder::Newest);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_posts_oldest_first() {
        let mut posts = vec![post("a", 100), post("b", 300), post("c", 200)];
        sort_posts(&mut posts, SortOrder::Oldest);
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "c", "b"]);
    }

    #[test]
    fn test_sort_order_round_trips_through_select_keys() {
        assert_eq!(SortOrder::from_key(SortOrder::Newest.key()), SortOrder::Newest);
        assert_eq!(SortOrder::from_key(SortOrder::Oldest.key()), SortOrder::Oldest);
        // Unknown values fall back to the default ordering
        assert_eq!(SortOrder::from_key("sideways"), SortOrder::Newest);
    }
}
