pub mod cart_panel;
pub mod empty_state;
pub mod page_header;

pub use cart_panel::{CartLines, CheckoutPanel};
pub use empty_state::EmptyState;
pub use page_header::PageHeader;
