//! Bookings turn the current selection into an order in the travel or
//! ticket history. The selection itself is left in place.

use contracts::domain::a001_travel::{BusRoute, Flight, Hotel, MetroRoute, TravelSearch};
use contracts::domain::a003_tickets::SelectedShow;
use contracts::domain::common::{CartLine, OrderRecord};
use contracts::enums::ModuleKind;
use contracts::shared::{StoreKey, StoreRecord};
use thiserror::Error;

use crate::layout::global_context::AppContext;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("nothing selected under '{0}'")]
    NoSelection(&'static str),
    #[error("no seats selected")]
    NoSeats,
    #[error("stay must be at least one night")]
    NoNights,
}

fn selected<T: StoreRecord>(ctx: &AppContext, key: StoreKey) -> Result<T, BookingError> {
    ctx.selection(key)
        .ok_or(BookingError::NoSelection(key.as_str()))
}

fn travelers(ctx: &AppContext) -> u32 {
    ctx.store()
        .load::<TravelSearch>(StoreKey::TravelSearch)
        .travelers
        .max(1)
}

fn record_trip(ctx: &AppContext, order: OrderRecord) -> OrderRecord {
    ctx.record_order(StoreKey::TravelOrderHistory, order)
}

pub fn book_flight(ctx: &AppContext) -> Result<OrderRecord, BookingError> {
    let flight: Flight = selected(ctx, StoreKey::SelectedFlight)?;
    let line = CartLine::new(
        flight.id.clone(),
        format!("{} {}", flight.airline, flight.flight_number),
        flight.price,
    )
    .with_quantity(travelers(ctx));
    let order = OrderRecord::new(
        ModuleKind::Travel,
        format!("{} → {} · {}", flight.from, flight.to, flight.date),
        vec![line],
    )
    .with_reference(flight.id);
    Ok(record_trip(ctx, order))
}

pub fn book_bus(ctx: &AppContext) -> Result<OrderRecord, BookingError> {
    let bus: BusRoute = selected(ctx, StoreKey::SelectedBus)?;
    let line = CartLine::new(
        bus.id.clone(),
        format!("{} ({})", bus.operator, bus.bus_type),
        bus.price,
    )
    .with_quantity(travelers(ctx));
    let order = OrderRecord::new(
        ModuleKind::Travel,
        format!("{} → {} · {}", bus.from, bus.to, bus.date),
        vec![line],
    )
    .with_reference(bus.id);
    Ok(record_trip(ctx, order))
}

pub fn book_metro(ctx: &AppContext) -> Result<OrderRecord, BookingError> {
    let metro: MetroRoute = selected(ctx, StoreKey::SelectedMetro)?;
    let line = CartLine::new(metro.id.clone(), format!("{} ticket", metro.line), metro.fare)
        .with_quantity(travelers(ctx));
    let order = OrderRecord::new(
        ModuleKind::Travel,
        format!("{} → {}", metro.from, metro.to),
        vec![line],
    )
    .with_reference(metro.id);
    Ok(record_trip(ctx, order))
}

pub fn book_hotel(ctx: &AppContext, nights: u32) -> Result<OrderRecord, BookingError> {
    if nights == 0 {
        return Err(BookingError::NoNights);
    }
    let hotel: Hotel = selected(ctx, StoreKey::SelectedHotel)?;
    let line = CartLine::new(hotel.id.clone(), format!("{} night(s)", nights), hotel.price_per_night)
        .with_quantity(nights);
    let order = OrderRecord::new(
        ModuleKind::Travel,
        format!("{}, {}", hotel.name, hotel.city),
        vec![line],
    )
    .with_reference(hotel.id);
    Ok(record_trip(ctx, order))
}

pub fn book_show(ctx: &AppContext) -> Result<OrderRecord, BookingError> {
    let show: SelectedShow = selected(ctx, StoreKey::SelectedShow)?;
    if show.seats.is_empty() {
        return Err(BookingError::NoSeats);
    }
    let line = CartLine::new(
        show.show.id.clone(),
        format!("Seats {}", show.seats.join(", ")),
        show.show.price_per_seat,
    )
    .with_quantity(show.seats.len() as u32);
    let order = OrderRecord::new(
        ModuleKind::Tickets,
        format!("{} · {} {}", show.movie_title, show.show.theatre, show.show.start_time),
        vec![line],
    )
    .with_reference(show.show.id);
    Ok(ctx.record_order(StoreKey::TicketOrderHistory, order))
}
