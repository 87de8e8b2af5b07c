use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen_futures::spawn_local;

use shoresquad_shared::formatter::normalize;
use shoresquad_shared::render::{FORECAST_UNAVAILABLE, ForecastTarget, render};
use shoresquad_shared::{ForecastCard, ForecastView};

use crate::weather;

/// Forecast container contents. `None` until the first render.
#[derive(Clone, Copy)]
pub(crate) struct ForecastSignal(pub RwSignal<Option<ForecastView>>);

impl ForecastTarget for ForecastSignal {
    fn replace(&mut self, view: ForecastView) {
        self.0.set(Some(view));
    }
}

/// Fetch, normalize and render the forecast once.
pub(crate) fn load(target: ForecastSignal) {
    spawn_local(async move {
        let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
        let raw = weather::fetch_forecast(&mut rng).await;
        let source = if raw.is_live() { "live" } else { "mock" };
        let entries = normalize(raw, chrono::Local::now().fixed_offset(), &mut rng);
        let mut target = target;
        render(&entries, &mut target);
        let shown = target
            .0
            .with_untracked(|view| view.as_ref().map_or(0, ForecastView::card_count));
        web_sys::console::log_1(&format!("Forecast: rendered {shown} {source} cards").into());
    });
}

#[component]
pub fn ForecastPanel() -> impl IntoView {
    let ForecastSignal(forecast) = expect_context();

    view! {
        <div id="weather-container" class="weather-grid" aria-live="polite">
            {move || match forecast.get() {
                None => {
                    view! {
                        <div class="weather-card weather-loading">
                            <p>"Loading forecast..."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(ForecastView::Unavailable) => {
                    view! {
                        <div class="weather-card weather-error">
                            <p>"📍 " {FORECAST_UNAVAILABLE}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(ForecastView::Cards(cards)) => {
                    cards
                        .into_iter()
                        .map(|card| view! { <ForecastCardView card=card /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ForecastCardView(card: ForecastCard) -> impl IntoView {
    let aria_label = format!("Location: {}", card.location);

    view! {
        <div class="weather-card" role="article">
            <p class="weather-day">
                <strong>{card.weekday}</strong>
                " "
                <span class="weather-date">{card.short_date}</span>
            </p>
            <p class="weather-icon">{card.icon}</p>
            <p>
                <strong>{card.temperature}</strong>
                " - "
                {card.condition}
            </p>
            <p class="weather-meta">"💧 " {card.humidity} " | 💨 " {card.wind}</p>
            <h3 class="weather-location" aria-label=aria_label>
                {card.location}
            </h3>
        </div>
    }
}
