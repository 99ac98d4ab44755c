use contracts::domain::a003_tickets::SelectedShow;
use contracts::domain::common::OrderRecord;
use contracts::enums::Page;
use contracts::shared::StoreKey;
use leptos::prelude::*;

use super::super::catalog::{booked_seats, SEATS_PER_ROW, SEAT_ROWS};
use crate::layout::global_context::use_app;
use crate::shared::format::{format_inr, pluralize};
use crate::shared::ui::{EmptyState, PageHeader};
use crate::usecases::u502_booking::book_show;

const MAX_SEATS: usize = 10;

#[component]
#[allow(non_snake_case)]
pub fn TicketsSeats() -> impl IntoView {
    let app = use_app();
    let Some(initial) = app.selection::<SelectedShow>(StoreKey::SelectedShow) else {
        return view! {
            <div class="page">
                <PageHeader title="Select seats" />
                <EmptyState message="Pick a showtime first" action=(Page::TicketsHome, "Browse movies") />
            </div>
        }
        .into_any();
    };

    let taken = booked_seats(&initial.show.id);
    let subtitle = format!("{} · {}", initial.show.theatre, initial.show.start_time);
    let title = initial.movie_title.clone();
    let selected = RwSignal::new(initial);
    let (booked, set_booked) = signal::<Option<OrderRecord>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // every toggle is written back so a reload keeps the picked seats
    let toggle = move |seat: String| {
        selected.update(|s| {
            if s.seats.contains(&seat) || s.seats.len() < MAX_SEATS {
                s.toggle_seat(&seat);
            }
        });
        selected.with_untracked(|s| app.select(StoreKey::SelectedShow, s));
    };

    let confirm = move |_: leptos::ev::MouseEvent| match book_show(&app) {
        Ok(order) => {
            set_error.set(None);
            set_booked.set(Some(order));
        }
        Err(e) => set_error.set(Some(e.to_string())),
    };

    let grid = SEAT_ROWS
        .iter()
        .map(|row| {
            let seats = (1..=SEATS_PER_ROW)
                .map(|n| {
                    let seat = format!("{}{}", row, n);
                    let is_taken = taken.contains(&seat);
                    let seat_key = seat.clone();
                    let class = move || {
                        if is_taken {
                            "seat seat--taken"
                        } else if selected.with(|s| s.seats.contains(&seat_key)) {
                            "seat seat--picked"
                        } else {
                            "seat"
                        }
                    };
                    view! {
                        <button class=class disabled=is_taken on:click=move |_| toggle(seat.clone())>
                            {n}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <div class="seat-row">
                    <span class="seat-row__label">{row.to_string()}</span>
                    {seats}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader title=title subtitle=subtitle />
            <div class="screen">"Screen this way"</div>
            <div class="seat-map">{grid}</div>
            <div class="cart-bar">
                <span>{move || selected.with(|s| format!(
                    "{} · {}",
                    pluralize(s.seats.len(), "seat", "seats"),
                    format_inr(s.total())
                ))}</span>
                {move || match booked.get() {
                    Some(order) => view! {
                        <span class="success-box">{format!("Booked: {}", order.title)}</span>
                    }
                    .into_any(),
                    None => view! {
                        <button
                            class="button button--primary"
                            disabled=move || selected.with(|s| s.seats.is_empty())
                            on:click=confirm
                        >
                            "Book"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
            {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
        </div>
    }
    .into_any()
}
