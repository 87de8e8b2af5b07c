use leptos::prelude::*;

use shoresquad_shared::crew::{
    BadgeInput, CrewTargets, apply_badge_input, is_activation_key, present,
};

use crate::app::SeedData;

/// Signals behind the crew stats targets and the member list.
#[derive(Clone, Copy)]
struct CrewSignals {
    members: RwSignal<String>,
    cleanups: RwSignal<String>,
    trash: RwSignal<String>,
    badges: RwSignal<Vec<String>>,
}

impl CrewSignals {
    fn new() -> Self {
        Self {
            members: RwSignal::new(String::new()),
            cleanups: RwSignal::new(String::new()),
            trash: RwSignal::new(String::new()),
            badges: RwSignal::new(Vec::new()),
        }
    }
}

impl CrewTargets for CrewSignals {
    fn set_member_count(&mut self, text: String) {
        self.members.set(text);
    }

    fn set_cleanups_attended(&mut self, text: String) {
        self.cleanups.set(text);
    }

    fn set_trash_collected(&mut self, text: String) {
        self.trash.set(text);
    }

    fn set_badges(&mut self, names: Vec<String>) {
        self.badges.set(names);
    }
}

#[component]
pub fn CrewPanel() -> impl IntoView {
    let SeedData(data) = expect_context();
    let mut targets = CrewSignals::new();
    data.with_value(|data| present(&data.profile, &mut targets));
    let highlighted: RwSignal<Option<String>> = RwSignal::new(None);

    view! {
        <div class="crew-stats">
            <div class="stat">
                <span id="crew-members" class="stat-value">{move || targets.members.get()}</span>
                <span class="stat-label">"Crew Members"</span>
            </div>
            <div class="stat">
                <span id="cleanups-attended" class="stat-value">
                    {move || targets.cleanups.get()}
                </span>
                <span class="stat-label">"Cleanups Attended"</span>
            </div>
            <div class="stat">
                <span id="trash-collected" class="stat-value">{move || targets.trash.get()}</span>
                <span class="stat-label">"Trash Collected"</span>
            </div>
        </div>
        <div id="members-list" class="members-list">
            {move || {
                targets
                    .badges
                    .get()
                    .into_iter()
                    .map(|name| view! { <MemberBadge name=name highlighted=highlighted /> })
                    .collect_view()
            }}
        </div>
    }
}

fn activate_badge(highlighted: RwSignal<Option<String>>, name: &str, input: BadgeInput<'_>) {
    if !input.activates() {
        return;
    }
    let next = highlighted.with_untracked(|current| apply_badge_input(current.as_deref(), name, input));
    if next.as_deref() == Some(name) {
        web_sys::console::info_1(&format!("Crew member selected: {name}").into());
    }
    highlighted.set(next);
}

/// Crew member badge. Enter and Space behave exactly like a click.
#[component]
fn MemberBadge(name: String, highlighted: RwSignal<Option<String>>) -> impl IntoView {
    let aria_label = format!("Crew member: {name}");
    let click_name = name.clone();
    let key_name = name.clone();
    let class_name = name.clone();

    view! {
        <div
            class="member-badge"
            class:highlighted=move || highlighted.with(|h| h.as_deref() == Some(class_name.as_str()))
            role="button"
            tabindex="0"
            aria-label=aria_label
            on:click=move |_| activate_badge(highlighted, &click_name, BadgeInput::Pointer)
            on:keydown=move |e: web_sys::KeyboardEvent| {
                let key = e.key();
                if is_activation_key(&key) {
                    e.prevent_default();
                }
                let input = BadgeInput::Key { key: &key, repeat: e.repeat() };
                activate_badge(highlighted, &key_name, input);
            }
        >
            {name}
        </div>
    }
}
