use crate::layout::Shell;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::shared::view_state::{use_view_state, ViewStateStore};
use chrono::Local;
use contracts::domain::a004_contact::sample_data::contacts;
use contracts::domain::a004_contact::{total_unread, Contact};
use contracts::domain::a005_message::sample_data::messages;
use contracts::domain::a005_message::{Conversation, Message};
use contracts::domain::common::Record;
use contracts::shared::filter::filter_records;
use contracts::shared::navigation::PageId;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

#[component]
fn ContactRow(contact: Contact) -> impl IntoView {
    let store = use_view_state();
    let key = StoredValue::new(contact.key());
    let unread = contact.has_unread().then(|| {
        view! { <span class="badge badge--count">{contact.unread}</span> }
    });

    view! {
        <button
            class="contact-row"
            class:contact-row--active=move || key.with_value(|k| store.is_selected(k))
            on:click=move |_| store.dispatch(ViewAction::Select(key.get_value()))
        >
            <div class="contact-row__avatar">
                <img class="avatar" src=contact.avatar.clone() alt=contact.name.clone() />
                <span class=format!("presence presence--{}", contact.presence.id())></span>
            </div>
            <div class="contact-row__body">
                <div class="contact-row__top">
                    <span class="contact-row__name">{contact.name.clone()}</span>
                    <span class="muted">{contact.time.clone()}</span>
                </div>
                <p class="contact-row__preview">{contact.last_message.clone()}</p>
            </div>
            {unread}
        </button>
    }
}

#[component]
fn Bubble(message: Message) -> impl IntoView {
    let mine = message.sender.is_me();
    let attachments = message
        .attachments
        .iter()
        .map(|name| {
            view! {
                <div class="bubble__attachment">
                    {icon("paperclip")}
                    <span>{name.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bubble" class:bubble--mine=mine>
            <p>{message.text.clone()}</p>
            {attachments}
            <span class="bubble__time">{message.time.clone()}</span>
        </div>
    }
}

/// Right pane: header of the selected contact, history and the composer.
#[component]
fn ChatPane(contact: Contact, conversation: RwSignal<Conversation>) -> impl IntoView {
    let store = use_view_state();
    let draft = Signal::derive(move || store.state.with(|s| s.draft.clone()));
    let recipient = contact.name.clone();

    let send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = store.take_draft() else {
            return;
        };
        let time = Local::now().format("%-I:%M %p").to_string();
        conversation.update(|c| {
            if let Some(id) = c.push_outgoing(&text, &time) {
                log::info!("message {} sent to {}", id.value(), recipient);
            }
        });
    };

    view! {
        <section class="chat">
            <header class="chat__header">
                <img class="avatar" src=contact.avatar.clone() alt=contact.name.clone() />
                <div>
                    <h3>{contact.name.clone()}</h3>
                    <p class="muted">{contact.role.clone()}</p>
                </div>
                <div class="chat__actions">
                    <button class="icon-button">{icon("phone")}</button>
                    <button class="icon-button">{icon("mail")}</button>
                </div>
            </header>
            <div class="chat__history">
                <For
                    each=move || conversation.get().messages
                    key=|m| m.key()
                    children=|m| view! { <Bubble message=m /> }
                />
            </div>
            <form class="chat__composer" on:submit=send>
                <button type="button" class="icon-button">{icon("paperclip")}</button>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=draft
                    on:input=move |ev| store.dispatch(ViewAction::SetDraft(event_target_value(&ev)))
                />
                <button type="submit" class="button button--primary">{icon("send")}</button>
            </form>
        </section>
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let store = ViewStateStore::provide(PageId::Messages);
    let all = StoredValue::new(contacts());
    let unread = all.with_value(|c| total_unread(c));
    let conversation = RwSignal::new(Conversation::new(messages()));

    let visible = Memo::new(move |_| {
        let criterion = store.criterion();
        all.with_value(|c| filter_records(c, &criterion))
    });
    let selected = Memo::new(move |_| {
        store.selection().and_then(|key| {
            all.with_value(|c| c.iter().find(|contact| contact.key() == key).cloned())
        })
    });

    view! {
        <Shell>
            <PageFrame page_id="a005_message--custom" category=PAGE_CAT_CUSTOM>
                <PageHeader title="Messages" subtitle=format!("{} unread", unread) />
                <div class="page__content messenger">
                    <aside class="messenger__contacts">
                        <SearchInput
                            value=Signal::derive(move || store.search_text())
                            on_change=Callback::new(move |text: String| store.dispatch(ViewAction::SetSearchText(text)))
                            placeholder="Search messages..."
                        />
                        <For
                            each=move || visible.get()
                            key=|c| c.key()
                            children=|c| view! { <ContactRow contact=c /> }
                        />
                        <Show when=move || visible.with(Vec::is_empty)>
                            <p class="empty-state">"No conversations found."</p>
                        </Show>
                    </aside>
                    {move || match selected.get() {
                        Some(contact) => view! { <ChatPane contact=contact conversation=conversation /> }.into_any(),
                        None => view! {
                            <div class="chat chat--empty">
                                {icon("message-square")}
                                <p>"Select a conversation"</p>
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </PageFrame>
        </Shell>
    }
}
