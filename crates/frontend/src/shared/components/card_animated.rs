//! CardAnimated: a Thaw `Card` that fades in on mount.
//!
//! Keyframes (`card-appear`) live in `style/main.css`; timing comes from an
//! [`AnimationSpec`], so staggered cards are just specs with growing delays.
//!
//! ```ignore
//! <CardAnimated spec=AnimationSpec::gentle().with_delay(200)>
//!     <p>"Content"</p>
//! </CardAnimated>
//! ```

use crate::shared::config::DashboardConfig;
use contracts::shared::projector::AnimationSpec;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Entry timing; defaults to the gentle preset.
    #[prop(optional)]
    spec: Option<AnimationSpec>,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let animations = use_context::<DashboardConfig>()
        .map(|c| c.animations)
        .unwrap_or(true);
    let spec = spec.unwrap_or_else(AnimationSpec::gentle);

    let animation = if animations {
        spec.css_animation("card-appear")
    } else {
        String::new()
    };
    let full_style = if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    };

    view! {
        <Card class=format!("glass-card {}", class) attr:style=full_style>
            {children()}
        </Card>
    }
}
