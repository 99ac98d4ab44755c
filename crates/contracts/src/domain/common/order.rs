use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::CartLine;
use crate::enums::ModuleKind;
use crate::shared::record::{ensure, ensure_price};
use crate::shared::{DecodeError, StoreRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Completed,
    Cancelled,
}

/// One completed checkout or booking.
///
/// Histories store these newest first: index 0 is the most recent order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub module: ModuleKind,
    pub title: String,
    /// Id of the booked catalog item (flight, show, ...), if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub items: Vec<CartLine>,
    pub subtotal: f64,
    #[serde(default)]
    pub discount: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_code: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    pub fn new(module: ModuleKind, title: impl Into<String>, items: Vec<CartLine>) -> Self {
        let subtotal = items.iter().map(CartLine::line_total).sum();
        Self {
            id: Uuid::new_v4().to_string(),
            module,
            title: title.into(),
            reference: None,
            items,
            subtotal,
            discount: 0.0,
            total: subtotal,
            offer_code: None,
            status: OrderStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_discount(mut self, code: &str, discount: f64) -> Self {
        if discount > 0.0 {
            self.offer_code = Some(code.to_string());
            self.discount = discount;
            self.total = (self.subtotal - discount).max(0.0);
        }
        self
    }
}

impl StoreRecord for OrderRecord {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "order without id")?;
        ensure_price(self.subtotal, "subtotal")?;
        ensure_price(self.total, "total")
    }
}

/// Puts `order` at index 0 and evicts the oldest entries beyond `cap`
pub fn prepend_order(mut history: Vec<OrderRecord>, order: OrderRecord, cap: usize) -> Vec<OrderRecord> {
    history.retain(|existing| existing.id != order.id);
    history.insert(0, order);
    history.truncate(cap.max(1));
    history
}

pub fn recent_orders(history: &[OrderRecord], limit: usize) -> &[OrderRecord] {
    &history[..history.len().min(limit)]
}
