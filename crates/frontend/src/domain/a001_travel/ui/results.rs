use contracts::domain::a001_travel::{Amenity, BusRoute, Flight, Hotel, MetroRoute, TravelSearch, TravelType};
use contracts::enums::{ModuleKind, Page};
use contracts::shared::{StoreKey, StoreRecord};
use contracts::system::RecentlyViewedEntry;
use leptos::prelude::*;

use super::super::filters::{apply, operators_of, price_bounds, TravelFilter, TravelOption};
use super::super::generator::{buses_for, flights_for, metro_for};
use super::super::hotels::hotels_in;
use super::filter_panel::FilterPanel;
use crate::layout::global_context::{use_app, AppContext};
use crate::shared::date_utils::format_travel_date;
use crate::shared::format::{format_inr, format_rating, pluralize};
use crate::shared::ui::{EmptyState, PageHeader};

/// Stores the picked option for the booking page and opens it
fn pick<T: StoreRecord>(app: AppContext, key: StoreKey, record: &T, entry: RecentlyViewedEntry) {
    app.select(key, record);
    app.add_recently_viewed(entry);
    app.navigate(Page::TravelBooking);
}

/// Filtered, sorted list of `items`, re-evaluated whenever `filter` changes
fn option_list<T, F>(items: Vec<T>, filter: RwSignal<TravelFilter>, card: F) -> impl IntoView
where
    T: TravelOption + Clone + Send + Sync + 'static,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    move || {
        let shown = filter.with(|f| apply(&items, f));
        if shown.is_empty() {
            view! { <div class="empty-state">"No results match the filters"</div> }.into_any()
        } else {
            view! {
                <div class="results__count">{pluralize(shown.len(), "result", "results")}</div>
                <div class="results__list">
                    {shown.into_iter().map(|item| card(item)).collect_view()}
                </div>
            }
            .into_any()
        }
    }
}

fn flight_card(app: AppContext, flight: Flight) -> AnyView {
    let stops = match flight.stops {
        0 => "Non-stop".to_string(),
        n => pluralize(n as usize, "stop", "stops"),
    };
    let on_select = {
        let flight = flight.clone();
        move |_| {
            let entry = RecentlyViewedEntry::new(flight.id.clone(), ModuleKind::Travel, format!("{} {}", flight.airline, flight.flight_number))
                .with_subtitle(format!("{} → {}", flight.from, flight.to));
            pick(app, StoreKey::SelectedFlight, &flight, entry);
        }
    };
    view! {
        <div class="card result-card">
            <div class="result-card__main">
                <div class="result-card__title">{format!("{} · {}", flight.airline, flight.flight_number)}</div>
                <div class="result-card__times">
                    {format!("{} → {}", flight.departure_time, flight.arrival_time)}
                </div>
                <div class="result-card__meta">
                    {format!("{} · {} · {}", flight.duration, stops, format_rating(flight.rating))}
                    {flight.refundable.then(|| view! { <span class="badge">"Refundable"</span> })}
                </div>
            </div>
            <div class="result-card__side">
                <div class="price">{format_inr(flight.price)}</div>
                <div class="muted">{format!("{} seats left", flight.seats_left)}</div>
                <button class="button button--primary" on:click=on_select>
                    "Select"
                </button>
            </div>
        </div>
    }
    .into_any()
}

fn bus_card(app: AppContext, bus: BusRoute) -> AnyView {
    let on_select = {
        let bus = bus.clone();
        move |_| {
            let entry = RecentlyViewedEntry::new(bus.id.clone(), ModuleKind::Travel, bus.operator.clone())
                .with_subtitle(format!("{} → {}", bus.from, bus.to));
            pick(app, StoreKey::SelectedBus, &bus, entry);
        }
    };
    view! {
        <div class="card result-card">
            <div class="result-card__main">
                <div class="result-card__title">{bus.operator.clone()}</div>
                <div class="muted">{bus.bus_type.clone()}</div>
                <div class="result-card__times">
                    {format!("{} → {} · {}", bus.departure_time, bus.arrival_time, bus.duration)}
                </div>
                <div class="result-card__meta">
                    {bus.amenities.iter().map(|a| a.label()).collect::<Vec<_>>().join(" · ")}
                </div>
            </div>
            <div class="result-card__side">
                <div class="price">{format_inr(bus.price)}</div>
                <div class="muted">{format!("{} · {} seats left", format_rating(bus.rating), bus.seats_left)}</div>
                <button class="button button--primary" on:click=on_select>
                    "Select"
                </button>
            </div>
        </div>
    }
    .into_any()
}

fn metro_card(app: AppContext, metro: MetroRoute) -> AnyView {
    let on_select = {
        let metro = metro.clone();
        move |_| {
            let entry = RecentlyViewedEntry::new(metro.id.clone(), ModuleKind::Travel, metro.line.clone())
                .with_subtitle(format!("{} → {}", metro.from, metro.to));
            pick(app, StoreKey::SelectedMetro, &metro, entry);
        }
    };
    view! {
        <div class="card result-card">
            <div class="result-card__main">
                <div class="result-card__title">{metro.line.clone()}</div>
                <div class="result-card__times">
                    {format!("{} · {}", metro.departure_time, metro.duration)}
                </div>
                <div class="result-card__meta">
                    {format!(
                        "{} · {} · every {} min",
                        pluralize(metro.stations as usize, "station", "stations"),
                        pluralize(metro.interchanges as usize, "interchange", "interchanges"),
                        metro.frequency_minutes
                    )}
                </div>
            </div>
            <div class="result-card__side">
                <div class="price">{format_inr(metro.fare)}</div>
                <button class="button button--primary" on:click=on_select>
                    "Select"
                </button>
            </div>
        </div>
    }
    .into_any()
}

fn hotel_card(app: AppContext, hotel: Hotel) -> AnyView {
    let on_select = {
        let hotel = hotel.clone();
        move |_| {
            let entry = RecentlyViewedEntry::new(hotel.id.clone(), ModuleKind::Travel, hotel.name.clone())
                .with_subtitle(hotel.city.clone());
            pick(app, StoreKey::SelectedHotel, &hotel, entry);
        }
    };
    view! {
        <div class="card result-card">
            <div class="result-card__main">
                <div class="result-card__title">{hotel.name.clone()}</div>
                <div class="muted">{format!("{} · {}", hotel.city, format_rating(hotel.rating))}</div>
                <div class="result-card__meta">
                    {hotel.amenities.iter().map(|a| a.label()).collect::<Vec<_>>().join(" · ")}
                </div>
            </div>
            <div class="result-card__side">
                <div class="price">{format!("{} / night", format_inr(hotel.price_per_night))}</div>
                <button class="button button--primary" on:click=on_select>
                    "Select"
                </button>
            </div>
        </div>
    }
    .into_any()
}

fn results_view<T, F>(
    items: Vec<T>,
    amenities: Vec<Amenity>,
    show_stops: bool,
    show_refundable: bool,
    card: F,
) -> AnyView
where
    T: TravelOption + Clone + Send + Sync + 'static,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let filter = RwSignal::new(TravelFilter::default());
    let bounds = price_bounds(&items);
    let operators = operators_of(&items);
    view! {
        <div class="results">
            <FilterPanel
                filter=filter
                bounds=bounds
                operators=operators
                amenities=amenities
                show_stops=show_stops
                show_refundable=show_refundable
            />
            <div class="results__body">{option_list(items, filter, card)}</div>
        </div>
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn TravelResults() -> impl IntoView {
    let app = use_app();
    let search: TravelSearch = app.store().load(StoreKey::TravelSearch);
    let count = app.config().catalog.results_per_search;

    let subtitle = format!(
        "{} · {} · {}",
        search.travel_type.display_name(),
        format_travel_date(&search.departure_date),
        pluralize(search.travelers as usize, "traveler", "travelers")
    );
    let title = match search.travel_type {
        TravelType::Hotels => format!("Stays in {}", search.destination_city()),
        _ => format!("{} → {}", search.from_location, search.to_location),
    };

    let body = match search.travel_type {
        TravelType::Hotels => {
            let hotels = hotels_in(&search.to_location);
            if hotels.is_empty() {
                view! {
                    <EmptyState message="No stays found for this destination" action=(Page::TravelHome, "Change search") />
                }
                .into_any()
            } else {
                view! {
                    <div class="results__list">
                        {hotels.into_iter().map(|h| hotel_card(app, h)).collect_view()}
                    </div>
                }
                .into_any()
            }
        }
        TravelType::Trains => view! {
            <EmptyState message="Train search is coming soon" action=(Page::TravelHome, "Back to search") />
        }
        .into_any(),
        _ if !search.is_complete() => view! {
            <EmptyState message="Start with a search" action=(Page::TravelHome, "Search") />
        }
        .into_any(),
        TravelType::Flights => results_view(
            flights_for(&search, count),
            vec![Amenity::Wifi, Amenity::Meals, Amenity::Entertainment],
            true,
            true,
            move |f| flight_card(app, f),
        ),
        TravelType::Buses => results_view(
            buses_for(&search, count),
            vec![Amenity::AirConditioning, Amenity::Blanket, Amenity::PowerOutlet],
            false,
            false,
            move |b| bus_card(app, b),
        ),
        TravelType::Metro => results_view(metro_for(&search, count), vec![], false, false, move |m| {
            metro_card(app, m)
        }),
    };

    view! {
        <div class="page">
            <PageHeader title=title subtitle=subtitle />
            {body}
        </div>
    }
}
