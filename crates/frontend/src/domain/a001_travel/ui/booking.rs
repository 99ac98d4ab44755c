use contracts::domain::a001_travel::{BusRoute, Flight, Hotel, MetroRoute, TravelSearch, TravelType};
use contracts::domain::common::OrderRecord;
use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use crate::layout::global_context::{use_app, AppContext};
use crate::shared::date_utils::format_timestamp;
use crate::shared::format::{format_inr, pluralize};
use crate::shared::ui::{EmptyState, PageHeader};
use crate::usecases::u502_booking::{book_bus, book_flight, book_hotel, book_metro, BookingError};

/// Selection waiting to be booked, read back from the store
#[derive(Clone)]
enum Pending {
    Flight(Flight),
    Bus(BusRoute),
    Metro(MetroRoute),
    Hotel(Hotel),
}

impl Pending {
    fn load(app: &AppContext, travel_type: TravelType) -> Option<Self> {
        match travel_type {
            TravelType::Flights => app.selection(StoreKey::SelectedFlight).map(Pending::Flight),
            TravelType::Buses => app.selection(StoreKey::SelectedBus).map(Pending::Bus),
            TravelType::Metro => app.selection(StoreKey::SelectedMetro).map(Pending::Metro),
            TravelType::Hotels => app.selection(StoreKey::SelectedHotel).map(Pending::Hotel),
            TravelType::Trains => None,
        }
    }

    fn title(&self) -> String {
        match self {
            Pending::Flight(f) => format!("{} {}", f.airline, f.flight_number),
            Pending::Bus(b) => format!("{} ({})", b.operator, b.bus_type),
            Pending::Metro(m) => m.line.clone(),
            Pending::Hotel(h) => h.name.clone(),
        }
    }

    fn detail(&self) -> String {
        match self {
            Pending::Flight(f) => format!("{} → {} · {} · {} → {}", f.from, f.to, f.date, f.departure_time, f.arrival_time),
            Pending::Bus(b) => format!("{} → {} · {} · {}", b.from, b.to, b.date, b.departure_time),
            Pending::Metro(m) => format!("{} → {} · {}", m.from, m.to, m.departure_time),
            Pending::Hotel(h) => h.city.clone(),
        }
    }

    fn unit_price(&self) -> f64 {
        match self {
            Pending::Flight(f) => f.price,
            Pending::Bus(b) => b.price,
            Pending::Metro(m) => m.fare,
            Pending::Hotel(h) => h.price_per_night,
        }
    }

    fn book(&self, app: &AppContext, nights: u32) -> Result<OrderRecord, BookingError> {
        match self {
            Pending::Flight(_) => book_flight(app),
            Pending::Bus(_) => book_bus(app),
            Pending::Metro(_) => book_metro(app),
            Pending::Hotel(_) => book_hotel(app, nights),
        }
    }
}

/// Re-reads the history whenever `refresh` changes
#[component]
fn RecentTrips(refresh: ReadSignal<Option<OrderRecord>>) -> impl IntoView {
    let app = use_app();
    let recent = move || {
        refresh.track();
        app.recent_bookings(StoreKey::TravelOrderHistory)
    };
    view! {
        <h2 class="section-title">"Recently booked"</h2>
        {move || {
            let trips = recent();
            if trips.is_empty() {
                view! { <div class="muted">"No trips yet"</div> }.into_any()
            } else {
                trips.into_iter().map(|order| view! {
                    <div class="card order-row">
                        <div>{order.title.clone()}</div>
                        <div class="muted">{format_timestamp(&order.created_at)}</div>
                        <div class="price">{format_inr(order.total)}</div>
                    </div>
                }).collect_view().into_any()
            }
        }}
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TravelBooking() -> impl IntoView {
    let app = use_app();
    let search: TravelSearch = app.store().load(StoreKey::TravelSearch);
    let Some(pending) = Pending::load(&app, search.travel_type) else {
        return view! {
            <div class="page">
                <PageHeader title="Booking" />
                <EmptyState message="Nothing selected to book" action=(Page::TravelHome, "Find a trip") />
            </div>
        }
        .into_any();
    };

    let is_hotel = matches!(pending, Pending::Hotel(_));
    let travelers = search.travelers.max(1);
    let nights = RwSignal::new(1u32);
    let (confirmed, set_confirmed) = signal::<Option<OrderRecord>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let unit_price = pending.unit_price();
    let total = move || {
        let quantity = if is_hotel { nights.get() } else { travelers };
        unit_price * f64::from(quantity)
    };

    let title = pending.title();
    let detail = pending.detail();
    let confirm = move |_: leptos::ev::MouseEvent| match pending.book(&app, nights.get_untracked()) {
        Ok(order) => {
            set_error.set(None);
            set_confirmed.set(Some(order));
        }
        Err(e) => set_error.set(Some(e.to_string())),
    };

    view! {
        <div class="page">
            <PageHeader title="Review booking" subtitle=search.travel_type.display_name().to_string() />
            <div class="card booking">
                <div class="booking__title">{title}</div>
                <div class="muted">{detail}</div>
                {if is_hotel {
                    view! {
                        <label class="form__field">
                            <span>"Nights"</span>
                            <input
                                type="number"
                                min="1"
                                max="30"
                                prop:value=move || nights.get().to_string()
                                on:input=move |ev| {
                                    let n = event_target_value(&ev).parse::<u32>().unwrap_or(1);
                                    nights.set(n.clamp(1, 30));
                                }
                            />
                        </label>
                    }
                    .into_any()
                } else {
                    view! { <div class="muted">{pluralize(travelers as usize, "traveler", "travelers")}</div> }.into_any()
                }}
                <div class="booking__total">
                    <span>"Total"</span>
                    <span class="price">{move || format_inr(total())}</span>
                </div>
                {move || match confirmed.get() {
                    Some(order) => view! {
                        <div class="success-box">
                            {format!("Booked! Reference {}", order.id.chars().take(8).collect::<String>())}
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <button class="button button--primary" on:click=confirm.clone()>"Confirm booking"</button>
                    }
                    .into_any(),
                }}
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            </div>
            <RecentTrips refresh=confirmed />
        </div>
    }
    .into_any()
}
