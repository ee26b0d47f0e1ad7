use leptos::prelude::*;

/// Title block at the top of every page, with an optional actions slot.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page__subtitle">{s}</p>
                })}
            </div>
            <div class="page__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
