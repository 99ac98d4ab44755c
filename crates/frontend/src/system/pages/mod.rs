pub mod home;
pub mod not_found;
pub mod notifications;
pub mod referral;
pub mod wallet;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use notifications::NotificationsPage;
pub use referral::ReferralPage;
pub use wallet::WalletPage;
