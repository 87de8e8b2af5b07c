use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use shoresquad_shared::CleanupEvent;
use shoresquad_shared::join::{Activation, JOIN_REVERT_MS, JoinRegistry};
use shoresquad_shared::joined::{JoinRecordOutcome, record_join};

use crate::app::{JoinedTitles, SeedData};
use crate::config;
use crate::storage::BrowserStore;

/// Join state for every mounted join button, keyed by cleanup id.
#[derive(Clone, Copy)]
pub(crate) struct JoinControls(pub StoredValue<JoinRegistry<u32>>);

#[component]
pub fn CleanupList() -> impl IntoView {
    let SeedData(data) = expect_context();
    let events = data.with_value(|data| data.cleanups.clone());

    view! {
        <div id="cleanups-container" class="cleanups-grid">
            {events
                .into_iter()
                .map(|event| view! { <CleanupCard event=event /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CleanupCard(event: CleanupEvent) -> impl IntoView {
    let JoinedTitles(joined) = expect_context();
    let title = event.title.clone();
    let is_joined = move || joined.with(|titles| titles.iter().any(|t| *t == title));

    view! {
        <article class="cleanup-card" data-cleanup-id=event.id.to_string()>
            {event.badge.clone().map(|badge| view! { <span class="cleanup-badge">{badge}</span> })}
            <h3>{event.title.clone()}</h3>
            <p class="cleanup-when">"📅 " {event.display_date()} " · " {event.time.clone()}</p>
            <p class="cleanup-where">"📍 " {event.location.clone()}</p>
            <p class="cleanup-description">{event.description.clone()}</p>
            <div class="cleanup-footer">
                <span class="cleanup-participants">"👥 " {event.participants_label()}</span>
                <Show when=is_joined>
                    <span class="cleanup-joined">"You're in"</span>
                </Show>
                <JoinButton id=event.id title=event.title.clone() />
            </div>
        </article>
    }
}

/// "Join" control. Flips to a disabled affirmation, records the title, and
/// reverts after `JOIN_REVERT_MS`.
#[component]
fn JoinButton(id: u32, title: String) -> impl IntoView {
    let JoinControls(registry) = expect_context();
    let JoinedTitles(joined) = expect_context();
    let label = RwSignal::new(config::JOIN_LABEL.to_string());
    let disabled = RwSignal::new(false);
    // Dropping a gloo Timeout cancels it, so the pending revert dies with the button.
    let pending_revert: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    on_cleanup(move || {
        registry.try_update_value(|r| r.forget(&id));
    });

    let on_click = move |_: web_sys::MouseEvent| {
        let current = label.get_untracked();
        let Some(Activation::Joined { label: joined_label }) =
            registry.try_update_value(|r| r.activate(id, &current))
        else {
            return;
        };
        label.set(joined_label.to_string());
        disabled.set(true);

        match record_join(&BrowserStore, &title) {
            JoinRecordOutcome::Added => joined.update(|titles| titles.push(title.clone())),
            JoinRecordOutcome::AlreadyJoined => {}
            JoinRecordOutcome::StorageUnavailable(e) => {
                web_sys::console::warn_1(&format!("LocalStorage not available: {e}").into());
            }
        }
        web_sys::console::info_1(&format!("✅ Joined cleanup: {title}").into());

        let revert = Timeout::new(JOIN_REVERT_MS, move || {
            let Some(original) = registry.try_update_value(|r| r.revert(&id)).flatten() else {
                return;
            };
            label.set(original);
            disabled.set(false);
        });
        pending_revert.set_value(Some(revert));
    };

    view! {
        <button
            class="join-btn"
            type="button"
            disabled=move || disabled.get()
            on:click=on_click
        >
            {move || label.get()}
        </button>
    }
}
