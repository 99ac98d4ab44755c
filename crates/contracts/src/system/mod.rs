pub mod favorites;
pub mod notification;
pub mod recently_viewed;
pub mod referral;
pub mod user;

pub use favorites::{FavoriteKey, Favorites};
pub use notification::Notification;
pub use recently_viewed::RecentlyViewedEntry;
pub use referral::Referral;
pub use user::UserProfile;
