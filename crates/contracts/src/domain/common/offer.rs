use crate::enums::ModuleKind;

/// Promo code accepted at checkout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    pub code: &'static str,
    pub title: &'static str,
    pub percent: f64,
    pub max_discount: f64,
    pub min_order: f64,
    pub module: ModuleKind,
}

static OFFERS: [Offer; 5] = [
    Offer {
        code: "WELCOME50",
        title: "50% off your first food order",
        percent: 50.0,
        max_discount: 100.0,
        min_order: 199.0,
        module: ModuleKind::Food,
    },
    Offer {
        code: "FLYHIGH",
        title: "Flat 10% off on flights",
        percent: 10.0,
        max_discount: 750.0,
        min_order: 2_000.0,
        module: ModuleKind::Travel,
    },
    Offer {
        code: "MOVIE20",
        title: "20% off movie tickets",
        percent: 20.0,
        max_discount: 150.0,
        min_order: 300.0,
        module: ModuleKind::Tickets,
    },
    Offer {
        code: "SHOP15",
        title: "15% off electronics and more",
        percent: 15.0,
        max_discount: 1_500.0,
        min_order: 999.0,
        module: ModuleKind::Shopping,
    },
    Offer {
        code: "PAYDAY",
        title: "5% off everything",
        percent: 5.0,
        max_discount: 250.0,
        min_order: 0.0,
        module: ModuleKind::None,
    },
];

impl Offer {
    pub fn all() -> &'static [Offer] {
        &OFFERS
    }

    /// Case-insensitive lookup
    pub fn find(code: &str) -> Option<&'static Offer> {
        let code = code.trim();
        OFFERS.iter().find(|offer| offer.code.eq_ignore_ascii_case(code))
    }

    /// `ModuleKind::None` offers apply everywhere
    pub fn applies_to(&self, module: ModuleKind) -> bool {
        self.module == ModuleKind::None || self.module == module
    }

    pub fn discount_for(&self, module: ModuleKind, subtotal: f64) -> f64 {
        if !self.applies_to(module) || subtotal < self.min_order {
            return 0.0;
        }
        let raw = subtotal * self.percent / 100.0;
        raw.min(self.max_discount).min(subtotal).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignores_case_and_whitespace() {
        assert_eq!(Offer::find(" welcome50 ").map(|o| o.code), Some("WELCOME50"));
        assert!(Offer::find("NOPE").is_none());
    }

    #[test]
    fn test_discount_rules() {
        let welcome = Offer::find("WELCOME50").unwrap();
        assert_eq!(welcome.discount_for(ModuleKind::Food, 150.0), 0.0);
        assert_eq!(welcome.discount_for(ModuleKind::Food, 240.0), 100.0);
        assert_eq!(welcome.discount_for(ModuleKind::Food, 199.0), 100.0);
        assert_eq!(welcome.discount_for(ModuleKind::Shopping, 500.0), 0.0);

        let payday = Offer::find("PAYDAY").unwrap();
        assert_eq!(payday.discount_for(ModuleKind::Tickets, 400.0), 20.0);
    }
}
