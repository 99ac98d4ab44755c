use super::ModuleKind;

/// Every view the navigation controller knows how to render.
///
/// The session keeps the page as a free-form string; [`Page::resolve`] turns
/// any string into a page, unknown identifiers included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    TravelHome,
    TravelResults,
    TravelBooking,
    FoodHome,
    FoodMenu,
    FoodCart,
    FoodOrders,
    TicketsHome,
    TicketsShows,
    TicketsSeats,
    ShoppingHome,
    ShoppingDetails,
    ShoppingCart,
    ShoppingCompare,
    Wallet,
    Referral,
    Notifications,
    NotFound,
}

impl Page {
    pub const DEFAULT: Page = Page::Home;

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::TravelHome => "travel-home",
            Page::TravelResults => "travel-results",
            Page::TravelBooking => "travel-booking",
            Page::FoodHome => "food-home",
            Page::FoodMenu => "food-menu",
            Page::FoodCart => "food-cart",
            Page::FoodOrders => "food-orders",
            Page::TicketsHome => "tickets-home",
            Page::TicketsShows => "tickets-shows",
            Page::TicketsSeats => "tickets-seats",
            Page::ShoppingHome => "shopping-home",
            Page::ShoppingDetails => "shopping-details",
            Page::ShoppingCart => "shopping-cart",
            Page::ShoppingCompare => "shopping-compare",
            Page::Wallet => "wallet",
            Page::Referral => "referral",
            Page::Notifications => "notifications",
            Page::NotFound => "not-found",
        }
    }

    /// Exact lookup, `None` for identifiers no view is registered for
    pub fn parse(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|page| page.id() == id)
    }

    /// Lookup with fallback: unknown identifiers land on [`Page::NotFound`]
    pub fn resolve(id: &str) -> Self {
        Self::parse(id.trim()).unwrap_or(Page::NotFound)
    }

    pub fn module(&self) -> ModuleKind {
        match self {
            Page::TravelHome | Page::TravelResults | Page::TravelBooking => ModuleKind::Travel,
            Page::FoodHome | Page::FoodMenu | Page::FoodCart | Page::FoodOrders => {
                ModuleKind::Food
            }
            Page::TicketsHome | Page::TicketsShows | Page::TicketsSeats => ModuleKind::Tickets,
            Page::ShoppingHome
            | Page::ShoppingDetails
            | Page::ShoppingCart
            | Page::ShoppingCompare => ModuleKind::Shopping,
            Page::Wallet | Page::Referral => ModuleKind::Wallet,
            Page::Home | Page::Notifications | Page::NotFound => ModuleKind::None,
        }
    }

    /// Landing page of a module
    pub fn module_home(module: ModuleKind) -> Self {
        match module {
            ModuleKind::Travel => Page::TravelHome,
            ModuleKind::Food => Page::FoodHome,
            ModuleKind::Tickets => Page::TicketsHome,
            ModuleKind::Shopping => Page::ShoppingHome,
            ModuleKind::Wallet => Page::Wallet,
            ModuleKind::None => Page::Home,
        }
    }

    pub fn all() -> [Page; 19] {
        [
            Page::Home,
            Page::TravelHome,
            Page::TravelResults,
            Page::TravelBooking,
            Page::FoodHome,
            Page::FoodMenu,
            Page::FoodCart,
            Page::FoodOrders,
            Page::TicketsHome,
            Page::TicketsShows,
            Page::TicketsSeats,
            Page::ShoppingHome,
            Page::ShoppingDetails,
            Page::ShoppingCart,
            Page::ShoppingCompare,
            Page::Wallet,
            Page::Referral,
            Page::Notifications,
            Page::NotFound,
        ]
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_parses_its_own_id() {
        for page in Page::all() {
            assert_eq!(Page::parse(page.id()), Some(page));
        }
    }

    #[test]
    fn test_unknown_ids_resolve_to_not_found() {
        assert_eq!(Page::resolve("travel-results"), Page::TravelResults);
        assert_eq!(Page::resolve(" food-cart "), Page::FoodCart);
        assert_eq!(Page::resolve("wallet-topup"), Page::NotFound);
        assert_eq!(Page::resolve(""), Page::NotFound);
    }

    #[test]
    fn test_module_of_page() {
        assert_eq!(Page::ShoppingCompare.module(), ModuleKind::Shopping);
        assert_eq!(Page::TicketsSeats.module(), ModuleKind::Tickets);
        assert_eq!(Page::Home.module(), ModuleKind::None);
        assert_eq!(Page::module_home(ModuleKind::Food), Page::FoodHome);
    }
}
