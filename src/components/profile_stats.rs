//! Profile Statistics
//!
//! Stat cards for karma totals and activity counts, plus a karma breakdown.

use leptos::*;

use crate::api::client::UserProfile;

/// Statistics tab content
#[component]
pub fn ProfileStats(profile: UserProfile) -> impl IntoView {
    let link_pct = karma_percent(profile.link_karma, profile.total_karma);
    let comment_pct = karma_percent(profile.comment_karma, profile.total_karma);

    view! {
        <div class="space-y-6">
            // Welcome section
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6 text-center">
                <h2 class="text-3xl font-bold text-gray-800 dark:text-white mb-2">
                    {format!("Welcome, u/{}!", profile.username)}
                </h2>
                <p class="text-gray-600 dark:text-gray-400">
                    {format!("Redditor since {}", profile.account_created)}
                </p>
            </div>

            // Karma cards
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    label="Total Karma"
                    value=format_compact(profile.total_karma)
                    icon="⭐"
                    gradient="from-purple-500 to-purple-600"
                />
                <StatCard
                    label="Link Karma"
                    value=format_compact(profile.link_karma)
                    icon="🔗"
                    gradient="from-blue-500 to-blue-600"
                />
                <StatCard
                    label="Comment Karma"
                    value=format_compact(profile.comment_karma)
                    icon="💬"
                    gradient="from-green-500 to-green-600"
                />
                <StatCard
                    label="Account Created"
                    value=profile.account_created.clone()
                    icon="📅"
                    gradient="from-orange-500 to-red-500"
                />
            </div>

            // Activity counts
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <ActivityCard
                    title="Posts"
                    icon="📝"
                    value=format_compact(profile.total_posts)
                    caption="Total posts submitted"
                />
                <ActivityCard
                    title="Comments"
                    icon="💭"
                    value=format_compact(profile.total_comments)
                    caption="Total comments made"
                />
            </div>

            // Karma breakdown
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
                <h3 class="text-lg font-semibold text-gray-800 dark:text-white mb-4">"Karma Breakdown"</h3>
                <div class="space-y-4">
                    <BreakdownBar
                        label=format!("Link: {}", format_compact(profile.link_karma))
                        percent=link_pct
                        gradient="from-blue-500 to-blue-600"
                    />
                    <BreakdownBar
                        label=format!("Comment: {}", format_compact(profile.comment_karma))
                        percent=comment_pct
                        gradient="from-green-500 to-green-600"
                    />
                </div>
            </div>
        </div>
    }
}

/// Gradient stat card
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: String,
    icon: &'static str,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-gradient-to-br {} rounded-lg shadow-lg p-6 text-white", gradient)>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-white/80 text-sm font-medium">{label}</p>
                    <p class="text-3xl font-bold">{value}</p>
                </div>
                <div class="text-4xl opacity-80">{icon}</div>
            </div>
        </div>
    }
}

/// Activity count card
#[component]
fn ActivityCard(
    title: &'static str,
    icon: &'static str,
    #[prop(into)] value: String,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-6">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-semibold text-gray-800 dark:text-white">{title}</h3>
                <span class="text-2xl">{icon}</span>
            </div>
            <div class="text-center">
                <p class="text-4xl font-bold text-indigo-600 dark:text-indigo-400 mb-2">{value}</p>
                <p class="text-gray-600 dark:text-gray-400 text-sm">{caption}</p>
            </div>
        </div>
    }
}

/// Proportion bar in the karma breakdown
#[component]
fn BreakdownBar(
    #[prop(into)] label: String,
    percent: f64,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3">
                <div
                    class=format!("bg-gradient-to-r {} h-3 rounded-full transition-all duration-1000 ease-out", gradient)
                    style=format!("width: {:.1}%", percent)
                />
            </div>
            <span class="ml-3 text-sm font-medium text-gray-600 dark:text-gray-400 min-w-[110px]">
                {label}
            </span>
        </div>
    }
}

/// Compact display for large counts: 1500 -> "1.5K", 2_100_000 -> "2.1M"
fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Share of `part` in `total` as a percentage, 0 when there is no karma
fn karma_percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(500), "500");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_500), "1.5K");
        assert_eq!(format_compact(2_100_000), "2.1M");
    }

    #[test]
    fn test_karma_percent_handles_zero_total() {
        assert_eq!(karma_percent(10, 0), 0.0);
        assert_eq!(karma_percent(1, 4), 25.0);
    }
}
