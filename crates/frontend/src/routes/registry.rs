//! Page registry - the single mapping from `Page` to its view.

use contracts::enums::Page;
use leptos::prelude::*;

use crate::domain::a001_travel::ui::{TravelBooking, TravelHome, TravelResults};
use crate::domain::a002_food::ui::{FoodCart, FoodHome, FoodMenu, FoodOrders};
use crate::domain::a003_tickets::ui::{TicketsHome, TicketsSeats, TicketsShows};
use crate::domain::a004_shopping::ui::{
    ShoppingCart, ShoppingCompare, ShoppingDetails, ShoppingHome,
};
use crate::system::pages::{HomePage, NotFoundPage, NotificationsPage, ReferralPage, WalletPage};

/// Renders the view of `page`
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),

        // Travel
        Page::TravelHome => view! { <TravelHome /> }.into_any(),
        Page::TravelResults => view! { <TravelResults /> }.into_any(),
        Page::TravelBooking => view! { <TravelBooking /> }.into_any(),

        // Food
        Page::FoodHome => view! { <FoodHome /> }.into_any(),
        Page::FoodMenu => view! { <FoodMenu /> }.into_any(),
        Page::FoodCart => view! { <FoodCart /> }.into_any(),
        Page::FoodOrders => view! { <FoodOrders /> }.into_any(),

        // Tickets
        Page::TicketsHome => view! { <TicketsHome /> }.into_any(),
        Page::TicketsShows => view! { <TicketsShows /> }.into_any(),
        Page::TicketsSeats => view! { <TicketsSeats /> }.into_any(),

        // Shopping
        Page::ShoppingHome => view! { <ShoppingHome /> }.into_any(),
        Page::ShoppingDetails => view! { <ShoppingDetails /> }.into_any(),
        Page::ShoppingCart => view! { <ShoppingCart /> }.into_any(),
        Page::ShoppingCompare => view! { <ShoppingCompare /> }.into_any(),

        // Wallet and app-wide pages
        Page::Wallet => view! { <WalletPage /> }.into_any(),
        Page::Referral => view! { <ReferralPage /> }.into_any(),
        Page::Notifications => view! { <NotificationsPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
