use contracts::domain::a002_food::{MenuItem, Restaurant};
use once_cell::sync::Lazy;

use crate::shared::list_utils::{contains_ci, Searchable};

fn item(id: &str, name: &str, price: f64, veg: bool, description: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        veg,
        description: description.to_string(),
    }
}

static RESTAURANTS: Lazy<Vec<Restaurant>> = Lazy::new(|| {
    vec![
        Restaurant {
            id: "r1".into(),
            name: "Burger Barn".into(),
            cuisine: "Burgers, American".into(),
            rating: 4.3,
            delivery_minutes: 25,
            cost_for_two: 400.0,
            menu: vec![
                item("r1-m1", "Classic Veg Burger", 149.0, true, "Crispy patty, lettuce, house mayo"),
                item("r1-m2", "Chicken Zinger", 199.0, false, "Spicy fried chicken fillet"),
                item("r1-m3", "Peri Peri Fries", 99.0, true, "Tossed in peri peri seasoning"),
                item("r1-m4", "Cold Coffee", 129.0, true, "Thick shake with a shot of espresso"),
            ],
        },
        Restaurant {
            id: "r2".into(),
            name: "Dosa Corner".into(),
            cuisine: "South Indian".into(),
            rating: 4.6,
            delivery_minutes: 20,
            cost_for_two: 250.0,
            menu: vec![
                item("r2-m1", "Masala Dosa", 120.0, true, "Potato masala, sambar, chutney"),
                item("r2-m2", "Idli Vada Combo", 90.0, true, "Two idlis and a medu vada"),
                item("r2-m3", "Filter Coffee", 40.0, true, "Strong, frothy, served in a dabara"),
            ],
        },
        Restaurant {
            id: "r3".into(),
            name: "Punjab Grill".into(),
            cuisine: "North Indian, Mughlai".into(),
            rating: 4.4,
            delivery_minutes: 35,
            cost_for_two: 700.0,
            menu: vec![
                item("r3-m1", "Butter Chicken", 349.0, false, "Tandoori chicken in makhani gravy"),
                item("r3-m2", "Paneer Tikka", 289.0, true, "Char-grilled cottage cheese"),
                item("r3-m3", "Garlic Naan", 69.0, true, "Tandoor baked, brushed with butter"),
                item("r3-m4", "Dal Makhani", 249.0, true, "Slow cooked black lentils"),
            ],
        },
        Restaurant {
            id: "r4".into(),
            name: "Wok Express".into(),
            cuisine: "Chinese, Asian".into(),
            rating: 4.0,
            delivery_minutes: 30,
            cost_for_two: 450.0,
            menu: vec![
                item("r4-m1", "Veg Hakka Noodles", 179.0, true, "Wok tossed with vegetables"),
                item("r4-m2", "Chilli Chicken", 239.0, false, "Dry, Indo-Chinese style"),
                item("r4-m3", "Veg Manchurian", 189.0, true, "Vegetable dumplings in gravy"),
            ],
        },
    ]
});

pub fn restaurants() -> &'static [Restaurant] {
    &RESTAURANTS
}

pub fn restaurant(id: &str) -> Option<&'static Restaurant> {
    RESTAURANTS.iter().find(|r| r.id == id)
}

/// Restaurant name and cuisine, plus dish names
pub struct RestaurantSearch<'a>(pub &'a Restaurant);

impl Searchable for RestaurantSearch<'_> {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.0.name, filter)
            || contains_ci(&self.0.cuisine, filter)
            || self.0.menu.iter().any(|m| contains_ci(&m.name, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;

    #[test]
    fn test_search_matches_dishes_and_cuisine() {
        let all: Vec<RestaurantSearch> = restaurants().iter().map(RestaurantSearch).collect();
        let found: Vec<String> = filter_list(all, "dosa").iter().map(|r| r.0.id.clone()).collect();
        assert_eq!(found, vec!["r2"]);

        let all: Vec<RestaurantSearch> = restaurants().iter().map(RestaurantSearch).collect();
        let indian: Vec<String> = filter_list(all, "Indian").iter().map(|r| r.0.id.clone()).collect();
        assert_eq!(indian, vec!["r2", "r3"]);
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let mut ids: Vec<&str> = restaurants()
            .iter()
            .flat_map(|r| r.menu.iter().map(|m| m.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(restaurant("r3").is_some());
    }
}
