//! Order histories: `travelOrderHistory`, `foodOrderHistory`,
//! `ticketOrderHistory`, `shoppingOrderHistory`. Newest first, capped.

use contracts::domain::common::order::{prepend_order, recent_orders};
use contracts::domain::common::OrderRecord;
use contracts::shared::StoreKey;
use contracts::system::Notification;

use crate::layout::global_context::AppContext;

impl AppContext {
    pub fn order_history(&self, key: StoreKey) -> Vec<OrderRecord> {
        self.store().load(key)
    }

    /// First `recent_limit` entries of a history
    pub fn recent_bookings(&self, key: StoreKey) -> Vec<OrderRecord> {
        let history = self.order_history(key);
        recent_orders(&history, self.config().orders.recent_limit).to_vec()
    }

    /// Prepends `order`, saves the capped history and notifies the user
    pub fn record_order(&self, key: StoreKey, order: OrderRecord) -> OrderRecord {
        let cap = self.config().orders.history_cap;
        let history = prepend_order(self.order_history(key), order.clone(), cap);
        self.store().save(key, &history);
        log::info!(
            "🧾 order {} [{}] total {:.2}",
            order.id,
            order.module.code(),
            order.total
        );
        self.push_notification(Notification::new(
            order.module,
            format!("{} confirmed", order.module.display_name()),
            order.title.clone(),
        ));
        order
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::global_context::testing::fresh_context;
    use contracts::domain::common::{CartLine, OrderRecord};
    use contracts::enums::ModuleKind;
    use contracts::shared::StoreKey;
    use leptos::prelude::*;

    #[test]
    fn test_history_is_capped_newest_first() {
        let ctx = fresh_context();
        let cap = ctx.config().orders.history_cap;
        for i in 0..cap + 5 {
            let order = OrderRecord::new(
                ModuleKind::Travel,
                format!("trip {}", i),
                vec![CartLine::new("f", "Flight", 1_000.0)],
            );
            ctx.record_order(StoreKey::TravelOrderHistory, order);
        }
        let history = ctx.order_history(StoreKey::TravelOrderHistory);
        assert_eq!(history.len(), cap);
        assert_eq!(history[0].title, format!("trip {}", cap + 4));

        let recent = ctx.recent_bookings(StoreKey::TravelOrderHistory);
        assert_eq!(recent.len(), ctx.config().orders.recent_limit);
        assert_eq!(recent[0].id, history[0].id);
        assert_eq!(ctx.session.with_untracked(|s| s.notifications.len()), cap + 5);
    }
}
