use leptos::prelude::*;

use shoresquad_shared::AppData;
use shoresquad_shared::ForecastView;
use shoresquad_shared::join::JoinRegistry;
use shoresquad_shared::joined::joined_titles;

use crate::cleanups::{CleanupList, JoinControls};
use crate::crew::CrewPanel;
use crate::forecast::{self, ForecastPanel, ForecastSignal};
use crate::reveal;
use crate::storage::BrowserStore;

/// Seed cleanups and the user profile, owned by the root component.
#[derive(Clone, Copy)]
pub(crate) struct SeedData(pub StoredValue<AppData>);

/// Titles in the persisted joined-cleanups record.
#[derive(Clone, Copy)]
pub(crate) struct JoinedTitles(pub RwSignal<Vec<String>>);

/// Root application component. Provides page state via context.
#[component]
pub fn App() -> impl IntoView {
    let data: StoredValue<AppData> = StoredValue::new(AppData::seed());
    let forecast: RwSignal<Option<ForecastView>> = RwSignal::new(None);
    let joined: RwSignal<Vec<String>> = RwSignal::new(joined_titles(&BrowserStore));
    let registry: StoredValue<JoinRegistry<u32>> = StoredValue::new(JoinRegistry::default());

    provide_context(SeedData(data));
    provide_context(ForecastSignal(forecast));
    provide_context(JoinedTitles(joined));
    provide_context(JoinControls(registry));

    // Untracked effects: each runs once after mount.
    Effect::new(move || {
        forecast::load(ForecastSignal(forecast));
    });
    Effect::new(move || {
        reveal::observe_sections();
    });

    view! {
        <main class="shoresquad">
            <section id="weather" class="section">
                <h2>"Beach Forecast"</h2>
                <ForecastPanel />
            </section>
            <section id="cleanups" class="section">
                <h2>"Upcoming Cleanups"</h2>
                <CleanupList />
            </section>
            <section id="crew" class="section">
                <h2>"Your Crew"</h2>
                <CrewPanel />
            </section>
        </main>
    }
}
