/// Well-known keys of the persisted key-value store.
///
/// The string values are the wire format shared between producer and
/// consumer views; renaming one orphans data already in users' browsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    TravelSearch,
    SelectedProduct,
    SelectedRestaurant,
    SelectedMovie,
    SelectedHotel,
    SelectedBus,
    SelectedFlight,
    SelectedMetro,
    SelectedShow,
    FoodCart,
    ShoppingCart,
    TravelOrderHistory,
    FoodOrderHistory,
    TicketOrderHistory,
    ShoppingOrderHistory,
    SelectedOfferCode,
    CompareItems,
    CompareList,
    Favorites,
    RecentlyViewed,
    Notifications,
    CurrentUser,
    ReferralData,
    HeroGradient,
    AppConfig,
    StoreSchemaVersion,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::TravelSearch => "travelSearch",
            StoreKey::SelectedProduct => "selectedProduct",
            StoreKey::SelectedRestaurant => "selectedRestaurant",
            StoreKey::SelectedMovie => "selectedMovie",
            StoreKey::SelectedHotel => "selectedHotel",
            StoreKey::SelectedBus => "selectedBus",
            StoreKey::SelectedFlight => "selectedFlight",
            StoreKey::SelectedMetro => "selectedMetro",
            StoreKey::SelectedShow => "selectedShow",
            StoreKey::FoodCart => "foodCart",
            StoreKey::ShoppingCart => "shoppingCart",
            StoreKey::TravelOrderHistory => "travelOrderHistory",
            StoreKey::FoodOrderHistory => "foodOrderHistory",
            StoreKey::TicketOrderHistory => "ticketOrderHistory",
            StoreKey::ShoppingOrderHistory => "shoppingOrderHistory",
            StoreKey::SelectedOfferCode => "selectedOfferCode",
            StoreKey::CompareItems => "compareItems",
            StoreKey::CompareList => "compareList",
            StoreKey::Favorites => "favorites",
            StoreKey::RecentlyViewed => "recentlyViewed",
            StoreKey::Notifications => "notifications",
            StoreKey::CurrentUser => "currentUser",
            StoreKey::ReferralData => "referralData",
            StoreKey::HeroGradient => "heroGradient",
            StoreKey::AppConfig => "appConfig",
            StoreKey::StoreSchemaVersion => "storeSchemaVersion",
        }
    }

    pub fn all() -> [StoreKey; 26] {
        [
            StoreKey::TravelSearch,
            StoreKey::SelectedProduct,
            StoreKey::SelectedRestaurant,
            StoreKey::SelectedMovie,
            StoreKey::SelectedHotel,
            StoreKey::SelectedBus,
            StoreKey::SelectedFlight,
            StoreKey::SelectedMetro,
            StoreKey::SelectedShow,
            StoreKey::FoodCart,
            StoreKey::ShoppingCart,
            StoreKey::TravelOrderHistory,
            StoreKey::FoodOrderHistory,
            StoreKey::TicketOrderHistory,
            StoreKey::ShoppingOrderHistory,
            StoreKey::SelectedOfferCode,
            StoreKey::CompareItems,
            StoreKey::CompareList,
            StoreKey::Favorites,
            StoreKey::RecentlyViewed,
            StoreKey::Notifications,
            StoreKey::CurrentUser,
            StoreKey::ReferralData,
            StoreKey::HeroGradient,
            StoreKey::AppConfig,
            StoreKey::StoreSchemaVersion,
        ]
    }

    /// Keys holding a plain string instead of a JSON document
    pub fn is_raw(&self) -> bool {
        matches!(
            self,
            StoreKey::SelectedOfferCode
                | StoreKey::HeroGradient
                | StoreKey::AppConfig
                | StoreKey::StoreSchemaVersion
        )
    }

    /// Single-use selections handed from a listing view to the next page.
    /// Dropped on a store schema upgrade, unlike carts and histories.
    pub fn transient() -> [StoreKey; 9] {
        [
            StoreKey::SelectedProduct,
            StoreKey::SelectedRestaurant,
            StoreKey::SelectedMovie,
            StoreKey::SelectedHotel,
            StoreKey::SelectedBus,
            StoreKey::SelectedFlight,
            StoreKey::SelectedMetro,
            StoreKey::SelectedShow,
            StoreKey::SelectedOfferCode,
        ]
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_names_are_unique() {
        let names: HashSet<&str> = StoreKey::all().iter().map(StoreKey::as_str).collect();
        assert_eq!(names.len(), StoreKey::all().len());
    }

    #[test]
    fn test_transient_keys_are_selections() {
        for key in StoreKey::transient() {
            assert!(key.as_str().starts_with("selected"), "{}", key);
        }
    }
}
