use crate::layout::Shell;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::category_chips::CategoryChips;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::shared::view_state::{use_view_state, ViewStateStore};
use chrono::{Datelike, Local};
use contracts::domain::a006_calendar_event::sample_data::events;
use contracts::domain::a006_calendar_event::{event_types, CalendarEvent, EventType};
use contracts::domain::common::Record;
use contracts::shared::calendar::{month_for_offset, month_grid, month_title, WEEKDAY_HEADERS};
use contracts::shared::filter::filter_records;
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

#[component]
fn EventCard(event: CalendarEvent, index: usize) -> impl IntoView {
    let spec = AnimationSpec::gentle().with_delay(index as u32 * 100);

    view! {
        <CardAnimated spec=spec class=format!("event-card event-card--{}", event.accent)>
            <div class="event-card__head">
                <h4>{event.title.clone()}</h4>
                <span class="badge">{event.event_type.label()}</span>
            </div>
            <div class="event-card__meta">
                <span>{icon("clock")} {event.time.clone()}</span>
                <span>{event.duration.to_string()}</span>
                <span>{icon("users")} {event.attendees_label()}</span>
            </div>
        </CardAnimated>
    }
}

#[component]
fn AddEventModal() -> impl IntoView {
    let store = use_view_state();
    let close = move |_: leptos::ev::MouseEvent| store.dispatch(ViewAction::CloseEventModal);

    view! {
        <div class="modal-overlay" on:click=close>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3>"Add Event"</h3>
                    <button class="icon-button" on:click=close>{icon("x")}</button>
                </div>
                <div class="modal__body">
                    <label class="field">
                        <span>"Title"</span>
                        <input type="text" placeholder="Event title" />
                    </label>
                    <label class="field">
                        <span>"Time"</span>
                        <input type="time" />
                    </label>
                    <label class="field">
                        <span>"Type"</span>
                        <select>
                            {EventType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.id()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <div class="modal__footer">
                    <button class="button" on:click=close>"Cancel"</button>
                    <button class="button button--primary" on:click=close>"Save"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let store = ViewStateStore::provide(PageId::Calendar);
    let today = Local::now().date_naive();
    let all = StoredValue::new(events());
    let chips = all.with_value(|e| event_types(e));

    let month = Memo::new(move |_| month_for_offset(today, store.month_offset()));
    let visible = Memo::new(move |_| {
        let criterion = store.criterion();
        all.with_value(|e| filter_records(e, &criterion))
    });
    let modal_open = move || store.state.with(|s| s.event_modal_open);

    let cells = move || {
        let (year, month_no) = month.get();
        let is_current = year == today.year() && month_no == today.month();
        month_grid(year, month_no)
            .into_iter()
            .map(|cell| match cell {
                Some(day) => {
                    let highlighted = is_current && day == today.day();
                    view! {
                        <div class="calendar__day" class:calendar__day--today=highlighted>
                            {day}
                        </div>
                    }
                    .into_any()
                }
                None => view! { <div class="calendar__day calendar__day--empty"></div> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <Shell>
            <PageFrame page_id="a006_calendar_event--custom" category=PAGE_CAT_CUSTOM>
                <PageHeader title="Calendar" subtitle="Schedule and upcoming events".to_string()>
                    <button
                        class="button button--primary"
                        on:click=move |_| store.dispatch(ViewAction::OpenEventModal)
                    >
                        {icon("plus")}
                        <span>"Add Event"</span>
                    </button>
                </PageHeader>

                <div class="page__content calendar-layout">
                    <CardAnimated class="calendar">
                        <div class="calendar__nav">
                            <button class="icon-button" on:click=move |_| store.dispatch(ViewAction::ShiftMonth(-1))>
                                {icon("chevron-left")}
                            </button>
                            <h3 class="calendar__title">
                                {move || {
                                    let (year, month_no) = month.get();
                                    month_title(year, month_no)
                                }}
                            </h3>
                            <button class="icon-button" on:click=move |_| store.dispatch(ViewAction::ShiftMonth(1))>
                                {icon("chevron-right")}
                            </button>
                        </div>
                        <div class="calendar__grid">
                            {WEEKDAY_HEADERS
                                .into_iter()
                                .map(|d| view! { <div class="calendar__weekday">{d}</div> })
                                .collect_view()}
                            {cells}
                        </div>
                    </CardAnimated>

                    <div class="calendar__events">
                        <h3>"Upcoming Events"</h3>
                        <CategoryChips chips=chips />
                        <For
                            each=move || visible.get().into_iter().enumerate()
                            key=|(_, e)| e.key()
                            children=|(index, e)| view! { <EventCard event=e index=index /> }
                        />
                        <Show when=move || visible.with(Vec::is_empty)>
                            <p class="empty-state">"No events of this type."</p>
                        </Show>
                    </div>
                </div>

                <Show when=modal_open>
                    <AddEventModal />
                </Show>
            </PageFrame>
        </Shell>
    }
}
