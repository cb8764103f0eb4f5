//! Toast Notifications
//!
//! Transient messages raised through [`GlobalState`] — logout confirmation,
//! settings saves, non-fatal failures. The signals auto-clear a few seconds
//! after being set, so there is no dismiss control.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Variant {
    Success,
    Error,
}

impl Variant {
    fn icon(self) -> &'static str {
        match self {
            Variant::Success => "✅",
            Variant::Error => "⚠️",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Variant::Success => "bg-green-500 border-green-600",
            Variant::Error => "bg-red-500 border-red-600",
        }
    }
}

/// Toast container, mounted once at the app root
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    let toast = |message: String, variant: Variant| {
        view! {
            <div class=format!(
                "flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg border",
                variant.classes()
            )>
                <span>{variant.icon()}</span>
                <span class="text-sm font-medium">{message}</span>
            </div>
        }
    };

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || success.get().map(|msg| toast(msg, Variant::Success))}
            {move || error.get().map(|msg| toast(msg, Variant::Error))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_render_distinct_styling() {
        assert_ne!(Variant::Success.classes(), Variant::Error.classes());
        assert_ne!(Variant::Success.icon(), Variant::Error.icon());
    }
}
