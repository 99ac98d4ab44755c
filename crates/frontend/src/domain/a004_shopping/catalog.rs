use contracts::domain::a004_shopping::Product;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::shared::list_utils::{cmp_f64, contains_ci, Searchable, Sortable};

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    price: f64,
    mrp: f64,
    rating: f32,
    specs: &[(&str, &str)],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        price,
        mrp,
        rating,
        specs: specs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product("p1", "Galaxy M35 5G", "Samsung", "Mobiles", 16_999.0, 24_499.0, 4.3,
            &[("Display", "6.6\" AMOLED 120Hz"), ("Battery", "6000 mAh"), ("Storage", "128 GB"), ("Camera", "50 MP")]),
        product("p2", "Nord CE4 Lite", "OnePlus", "Mobiles", 19_999.0, 20_999.0, 4.2,
            &[("Display", "6.67\" AMOLED 120Hz"), ("Battery", "5500 mAh"), ("Storage", "256 GB"), ("Camera", "50 MP")]),
        product("p3", "Redmi Note 13", "Xiaomi", "Mobiles", 14_999.0, 20_999.0, 4.1,
            &[("Display", "6.67\" AMOLED 120Hz"), ("Battery", "5000 mAh"), ("Storage", "128 GB"), ("Camera", "108 MP")]),
        product("p4", "iPhone 15", "Apple", "Mobiles", 69_900.0, 79_900.0, 4.6,
            &[("Display", "6.1\" OLED 60Hz"), ("Battery", "3349 mAh"), ("Storage", "128 GB"), ("Camera", "48 MP")]),
        product("p5", "Rockerz 450", "boAt", "Audio", 1_299.0, 3_990.0, 4.0,
            &[("Type", "On-ear"), ("Playback", "15 h"), ("Bluetooth", "5.0")]),
        product("p6", "WH-1000XM5", "Sony", "Audio", 26_990.0, 34_990.0, 4.7,
            &[("Type", "Over-ear"), ("Playback", "30 h"), ("Bluetooth", "5.2"), ("ANC", "Yes")]),
        product("p7", "IdeaPad Slim 3", "Lenovo", "Laptops", 38_990.0, 56_890.0, 4.2,
            &[("Processor", "Ryzen 5 7520U"), ("Memory", "16 GB"), ("Storage", "512 GB SSD"), ("Display", "15.6\" FHD")]),
        product("p8", "Electric Kettle 1.5L", "Prestige", "Home", 749.0, 1_195.0, 4.1,
            &[("Capacity", "1.5 L"), ("Power", "1500 W")]),
    ]
});

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub fn categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for p in PRODUCTS.iter() {
        if !out.contains(&p.category.as_str()) {
            out.push(&p.category);
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Relevance,
    Price,
    Rating,
    Discount,
}

impl ProductSort {
    pub fn code(&self) -> &'static str {
        match self {
            ProductSort::Relevance => "relevance",
            ProductSort::Price => "price",
            ProductSort::Rating => "rating",
            ProductSort::Discount => "discount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductSort::Relevance => "Relevance",
            ProductSort::Price => "Price",
            ProductSort::Rating => "Rating",
            ProductSort::Discount => "Discount",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or_default()
    }

    pub fn all() -> [ProductSort; 4] {
        [
            ProductSort::Relevance,
            ProductSort::Price,
            ProductSort::Rating,
            ProductSort::Discount,
        ]
    }
}

/// Wraps catalog rows so list utilities can search and sort them
#[derive(Debug, Clone)]
pub struct ProductRow(pub Product);

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.0.name, filter)
            || contains_ci(&self.0.brand, filter)
            || contains_ci(&self.0.category, filter)
    }
}

impl Sortable<ProductSort> for ProductRow {
    fn compare_by(&self, other: &Self, key: ProductSort) -> Ordering {
        match key {
            ProductSort::Relevance => Ordering::Equal,
            ProductSort::Price => cmp_f64(self.0.price, other.0.price),
            ProductSort::Rating => cmp_f64(f64::from(self.0.rating), f64::from(other.0.rating)),
            ProductSort::Discount => self.0.discount_percent().cmp(&other.0.discount_percent()),
        }
    }
}

/// Union of spec names across `products`, in first-seen order
pub fn spec_names(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for p in products {
        for name in p.specs.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}
