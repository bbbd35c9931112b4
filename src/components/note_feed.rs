use leptos::prelude::*;

use crate::components::NoteInvoice;
use crate::dto::FeedNote;
use crate::feed::{segments, Segment};
use crate::server::functions::get_feed_fn;

/// Note body with invoices rendered as cards.
#[component]
pub fn NoteText(content: String) -> impl IntoView {
    segments(&content)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => view! { <span class="note-text">{text}</span> }.into_any(),
            Segment::Invoice(invoice) => view! { <NoteInvoice invoice=invoice /> }.into_any(),
        })
        .collect_view()
}

#[component]
fn Note(note: FeedNote) -> impl IntoView {
    let created_at = note.created_at.format("%Y-%m-%d %H:%M").to_string();

    view! {
        <article class="note">
            <header class="note-header">
                <span class="note-author">{note.author}</span>
                <span class="note-date">{created_at}</span>
            </header>
            <div class="note-content">
                <NoteText content=note.content />
            </div>
        </article>
    }
}

/// The configured feed, newest note first.
#[component]
pub fn Feed() -> impl IntoView {
    let notes = Resource::new(|| (), |_| get_feed_fn(Some(50)));

    view! {
        <div class="panel feed">
            <Transition fallback=|| view! { <p>"Loading notes..."</p> }>
                {move || Suspend::new(async move {
                    match notes.await {
                        Ok(notes) if notes.is_empty() => {
                            view! { <p class="empty-state">"No notes yet"</p> }.into_any()
                        }
                        Ok(notes) => {
                            notes
                                .into_iter()
                                .map(|note| view! { <Note note=note /> })
                                .collect_view()
                                .into_any()
                        }
                        Err(e) => {
                            view! { <p class="error-message">{format!("Failed to load notes: {e}")}</p> }
                                .into_any()
                        }
                    }
                })}
            </Transition>
        </div>
    }
}
