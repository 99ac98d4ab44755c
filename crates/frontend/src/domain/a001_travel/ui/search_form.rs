use contracts::domain::a001_travel::{TravelSearch, TravelType};
use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::date_utils::today_iso;
use crate::shared::ui::PageHeader;

const POPULAR_ROUTES: [(&str, &str); 4] = [
    ("Bengaluru (BLR)", "Goa (GOX)"),
    ("Mumbai (BOM)", "Delhi (DEL)"),
    ("Delhi (DEL)", "Bengaluru (BLR)"),
    ("Chennai (MAA)", "Mumbai (BOM)"),
];

#[component]
#[allow(non_snake_case)]
pub fn TravelHome() -> impl IntoView {
    let app = use_app();

    // Form starts from the last search
    let stored: TravelSearch = app.store().load(StoreKey::TravelSearch);
    let travel_type = RwSignal::new(stored.travel_type);
    let from = RwSignal::new(stored.from_location);
    let to = RwSignal::new(stored.to_location);
    let date = RwSignal::new(if stored.departure_date.is_empty() {
        today_iso()
    } else {
        stored.departure_date
    });
    let travelers = RwSignal::new(stored.travelers.max(1));
    let (error, set_error) = signal::<Option<String>>(None);

    let swap = move |_| {
        let origin = from.get_untracked();
        from.set(to.get_untracked());
        to.set(origin);
    };

    let submit = move |_| {
        let search = TravelSearch {
            travel_type: travel_type.get_untracked(),
            from_location: from.get_untracked().trim().to_string(),
            to_location: to.get_untracked().trim().to_string(),
            departure_date: date.get_untracked(),
            return_date: None,
            travelers: travelers.get_untracked(),
        };
        // hotels only need a destination
        let ready = match search.travel_type {
            TravelType::Hotels => !search.to_location.is_empty(),
            _ => search.is_complete(),
        };
        if !ready {
            set_error.set(Some("Fill in origin, destination and date".to_string()));
            return;
        }
        set_error.set(None);
        log::debug!(
            "✈ search {} {} -> {} on {}",
            search.travel_type.display_name(),
            search.from_location,
            search.to_location,
            search.departure_date
        );
        app.select(StoreKey::TravelSearch, &search);
        app.navigate(Page::TravelResults);
    };

    view! {
        <div class="page">
            <PageHeader title="Travel" subtitle="Flights, hotels, buses and metro" hide_back=true />

            <div class="tabs">
                {TravelType::all().into_iter().map(|t| view! {
                    <button
                        class=move || if travel_type.get() == t { "tabs__item tabs__item--active" } else { "tabs__item" }
                        on:click=move |_| travel_type.set(t)
                    >
                        {t.display_name()}
                    </button>
                }).collect_view()}
            </div>

            <div class="form">
                <label class="form__field">
                    <span>"From"</span>
                    <input
                        type="text"
                        placeholder="City or airport"
                        prop:value=move || from.get()
                        on:input=move |ev| from.set(event_target_value(&ev))
                    />
                </label>
                <button class="button button--ghost" title="Swap" on:click=swap>"⇄"</button>
                <label class="form__field">
                    <span>"To"</span>
                    <input
                        type="text"
                        placeholder="City or airport"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Date"</span>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Travelers"</span>
                    <input
                        type="number"
                        min="1"
                        max="9"
                        prop:value=move || travelers.get().to_string()
                        on:input=move |ev| {
                            let n = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                            travelers.set(n.clamp(1, 9));
                        }
                    />
                </label>
                <button class="button button--primary" on:click=submit>"Search"</button>
            </div>

            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

            <h2 class="section-title">"Popular routes"</h2>
            <div class="chips">
                {POPULAR_ROUTES.iter().map(|(origin, destination)| {
                    let (origin, destination) = (*origin, *destination);
                    view! {
                        <button class="chip" on:click=move |_| {
                            from.set(origin.to_string());
                            to.set(destination.to_string());
                        }>
                            {format!("{} → {}", origin, destination)}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
