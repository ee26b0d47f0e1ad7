use crate::layout::Shell;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::view_state::ViewStateStore;
use contracts::domain::a007_user_profile::sample_data::{achievements, activity, profile, skills};
use contracts::domain::a007_user_profile::{Achievement, Activity, Skill, UserProfile};
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use leptos::prelude::*;

fn skill_bar(skill: Skill) -> impl IntoView {
    let width = skill.bar_width();
    view! {
        <div class="skill">
            <div class="skill__label">
                <span>{skill.name}</span>
                <span class="muted">{format!("{}%", skill.level)}</span>
            </div>
            <div class="progress">
                <div class="progress__bar" style=width></div>
            </div>
        </div>
    }
}

fn activity_row(item: Activity) -> impl IntoView {
    view! {
        <li class=format!("activity activity--{}", item.kind.id())>
            <span class="activity__icon">{icon(item.kind.icon())}</span>
            <div>
                <p>{item.action} " " <strong>{item.target}</strong></p>
                <span class="muted">{item.date}</span>
            </div>
        </li>
    }
}

fn achievement_row(item: Achievement) -> impl IntoView {
    view! {
        <li class="achievement">
            <span class="achievement__icon">{icon("award")}</span>
            <div>
                <p class="achievement__title">{item.title}</p>
                <p class="muted">{item.description}</p>
                <span class="muted">{item.date}</span>
            </div>
        </li>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    ViewStateStore::provide(PageId::Profile);
    let user = profile();
    let info = user
        .basic_info()
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="info-row">
                    <span class="muted">{label}</span>
                    <span>{value.to_string()}</span>
                </div>
            }
        })
        .collect_view();
    let about = format!("About {}", user.first_name());
    let UserProfile {
        name,
        role,
        avatar,
        email,
        phone,
        location,
        bio,
        ..
    } = user;

    view! {
        <Shell>
            <PageFrame page_id="a007_user_profile--detail" category=PAGE_CAT_DETAIL>
                <CardAnimated class="profile-header">
                    <img class="avatar avatar--lg" src=avatar alt=name.clone() />
                    <div class="profile-header__text">
                        <h1 class="page__title">{name}</h1>
                        <p class="page__subtitle">{role}</p>
                        <div class="profile-header__contacts">
                            <span>{icon("mail")} {email}</span>
                            <span>{icon("phone")} {phone}</span>
                            <span>{icon("map-pin")} {location}</span>
                        </div>
                    </div>
                    <button class="button button--primary">
                        {icon("edit")}
                        <span>"Edit Profile"</span>
                    </button>
                </CardAnimated>

                <div class="page__content profile-grid">
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(100)>
                        <h3>{about}</h3>
                        <p>{bio}</p>
                        <div class="info-list">{info}</div>
                    </CardAnimated>

                    <CardAnimated spec=AnimationSpec::gentle().with_delay(200)>
                        <h3>"Skills"</h3>
                        {skills().into_iter().map(skill_bar).collect_view()}
                    </CardAnimated>

                    <CardAnimated spec=AnimationSpec::gentle().with_delay(300)>
                        <h3>"Recent Activity"</h3>
                        <ul class="activity-list">
                            {activity().into_iter().map(activity_row).collect_view()}
                        </ul>
                    </CardAnimated>

                    <CardAnimated spec=AnimationSpec::gentle().with_delay(400)>
                        <h3>"Achievements"</h3>
                        <ul class="achievement-list">
                            {achievements().into_iter().map(achievement_row).collect_view()}
                        </ul>
                    </CardAnimated>
                </div>
            </PageFrame>
        </Shell>
    }
}
