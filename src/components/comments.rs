//! Comments Section
//!
//! Comments tab: the account's comments with a page-size control. Long
//! bodies are truncated behind an expandable disclosure. Failures here are
//! section-local; they never invalidate the session.

use leptos::*;

use crate::api;
use crate::api::client::Comment;
use crate::components::loading::ListSkeleton;
use crate::components::posts::SectionError;
use crate::session::store::SessionToken;

const LIMIT_CHOICES: [u32; 4] = [5, 10, 15, 25];

/// Bodies longer than this are collapsed behind a disclosure
const PREVIEW_CHARS: usize = 300;

/// Truncated preview of a long comment body, `None` when the body is short
/// enough to show in full. Truncation respects char boundaries.
fn body_preview(body: &str) -> Option<String> {
    if body.chars().count() > PREVIEW_CHARS {
        Some(body.chars().take(PREVIEW_CHARS).collect())
    } else {
        None
    }
}

/// Comments tab content
#[component]
pub fn CommentsSection(session: SessionToken) -> impl IntoView {
    let (comments, set_comments) = create_signal(Vec::<Comment>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (limit, set_limit) = create_signal(10u32);
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
            match api::client::fetch_comments(&token, limit).await {
                Ok(list) => set_comments.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch comments: {}", e).into(),
                    );
                    set_error.set(Some("Failed to load comments. Please try again.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let refetch = move |_| set_reload.update(|n| *n += 1);

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
                    // Header with page-size control
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
                        <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                            <h2 class="text-2xl font-bold text-gray-800 dark:text-white">"💬 Your Comments"</h2>

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
                                            {format!("{} comments", n)}
                                        </option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>
                    </div>

                    // Comment list
                    {
                        let list = comments.get();
                        if list.is_empty() {
                            view! {
                                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-12 text-center">
                                    <div class="text-6xl mb-4">"💭"</div>
                                    <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">"No comments found"</h3>
                                    <p class="text-gray-600 dark:text-gray-400">
                                        "You haven't made any comments yet, or they're not visible to the API."
                                    </p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="space-y-4">
                                    {list.into_iter().map(|comment| view! { <CommentItem comment /> }).collect_view()}
                                </div>

                                <div class="text-center">
                                    <button
                                        on:click=refetch
                                        class="bg-orange-500 hover:bg-orange-600 text-white px-6 py-3 rounded-lg
                                               transition-colors font-medium"
                                    >
                                        "🔄 Refresh Comments"
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

/// One comment card
#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let preview = body_preview(&comment.body);

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6 hover:shadow-xl transition-shadow">
            <div class="flex justify-between items-start mb-3">
                <div class="flex-1 mr-4">
                    <h3 class="text-lg font-semibold text-gray-800 dark:text-white mb-1">
                        {format!("Re: {}", comment.post_title)}
                    </h3>
                    <p class="text-sm text-gray-600 dark:text-gray-400">
                        {format!("in r/{}", comment.subreddit)}
                    </p>
                </div>
                <a
                    href=comment.permalink.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-orange-500 hover:text-orange-600 transition-colors flex-shrink-0"
                    title="View on Reddit"
                >
                    "🔗"
                </a>
            </div>

            <div class="flex flex-wrap items-center gap-4 text-sm text-gray-600 dark:text-gray-400 mb-4">
                <span>{format!("⬆️ {}", comment.score)}</span>
                <span>{format!("🕒 {}", comment.created_time)}</span>
            </div>

            <div class="bg-gray-50 dark:bg-gray-700 p-4 rounded-lg text-sm text-gray-700 dark:text-gray-300">
                {match preview {
                    Some(short) => view! {
                        <details>
                            <summary class="cursor-pointer text-orange-500 hover:text-orange-600 mb-2">
                                {format!("{}… ", short)}
                                <span class="underline">"Show more"</span>
                            </summary>
                            <div class="mt-2 whitespace-pre-wrap">{comment.body.clone()}</div>
                        </details>
                    }.into_view(),
                    None => view! {
                        <div class="whitespace-pre-wrap">{comment.body.clone()}</div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_bodies_are_not_truncated() {
        assert_eq!(body_preview("short comment"), None);
    }

    #[test]
    fn test_long_bodies_get_a_preview() {
        let body = "x".repeat(301);
        let preview = body_preview(&body).unwrap();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let body = "é".repeat(301);
        let preview = body_preview(&body).unwrap();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS);
        assert!(preview.chars().all(|c| c == 'é'));
    }
}
