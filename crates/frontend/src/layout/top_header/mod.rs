//! TopHeader component - application top bar.
//!
//! Contains:
//! - Brand, re-themed by the hero carousel while on the home page
//! - Notifications button with unread badge
//! - Cart button for the current module
//! - User name or sign-in shortcut

use contracts::domain::common::CartKind;
use contracts::enums::{ModuleKind, Page};
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

/// Cart the header button opens: the food cart inside the food module,
/// the shopping cart everywhere else
fn cart_for(module: ModuleKind) -> (CartKind, Page) {
    match module {
        ModuleKind::Food => (CartKind::Food, Page::FoodCart),
        _ => (CartKind::Shopping, Page::ShoppingCart),
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let app = use_app();

    let header_class = move || {
        let on_home = app.current_page() == Page::Home;
        match app.hero_gradient.get() {
            Some(token) if on_home => format!("top-header top-header--{}", token),
            _ => "top-header".to_string(),
        }
    };
    let unread = move || app.session.with(|s| s.unread_notifications());
    let cart_count = move || {
        let (kind, _) = cart_for(app.session.with(|s| s.current_module));
        app.cart_tracked(kind).item_count()
    };
    let open_cart = move |_| {
        let (_, page) = cart_for(app.session.with_untracked(|s| s.current_module));
        app.navigate(page);
    };

    view! {
        <header class=header_class>
            <button class="top-header__brand" on:click=move |_| app.navigate(Page::Home)>
                <span class="top-header__title">"SuperApp"</span>
            </button>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Notifications"
                    on:click=move |_| app.navigate(Page::Notifications)
                >
                    {icon("bell")}
                    {move || (unread() > 0).then(|| view! { <span class="badge">{unread()}</span> })}
                </button>

                <button class="top-header__icon-btn" title="Cart" on:click=open_cart>
                    {icon("cart")}
                    {move || {
                        let count = cart_count();
                        (count > 0).then(|| view! { <span class="badge">{count}</span> })
                    }}
                </button>

                <button class="top-header__user" on:click=move |_| app.navigate(Page::Wallet)>
                    {icon("user")}
                    <span>
                        {move || app.session.with(|s| s.user
                            .as_ref()
                            .map(|u| u.first_name().to_string())
                            .unwrap_or_else(|| "Sign in".to_string()))}
                    </span>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_button_follows_module() {
        assert_eq!(cart_for(ModuleKind::Food), (CartKind::Food, Page::FoodCart));
        assert_eq!(cart_for(ModuleKind::Shopping), (CartKind::Shopping, Page::ShoppingCart));
        assert_eq!(cart_for(ModuleKind::None), (CartKind::Shopping, Page::ShoppingCart));
    }
}
