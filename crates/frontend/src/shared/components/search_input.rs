use crate::shared::config::DashboardConfig;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Search box with debounce and a clear button.
///
/// Keystrokes update the local input at once; `on_change` fires after the
/// configured quiet period. A pending callback is cancelled when the user
/// types again or the component unmounts.
#[component]
pub fn SearchInput(
    /// Committed search text (from the page's view state).
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let debounce_ms = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .search_debounce_ms;

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Replacing the handle drops (cancels) the previous timer.
        let timeout = Timeout::new(debounce_ms, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    on_cleanup(move || {
        pending.try_update_value(|t| *t = None);
    });

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
