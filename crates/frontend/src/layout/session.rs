use contracts::enums::{ModuleKind, Page};
use contracts::system::recently_viewed::push_recently_viewed;
use contracts::system::{FavoriteKey, Favorites, Notification, RecentlyViewedEntry, Referral, UserProfile};

/// Per-tab session. Lives in memory only; the fields that need to survive a
/// reload are mirrored to the store by [`super::global_context::AppContext`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub current_module: ModuleKind,
    pub current_page: String,
    pub previous_page: Option<String>,
    pub user: Option<UserProfile>,
    pub favorites: Favorites,
    pub recently_viewed: Vec<RecentlyViewedEntry>,
    pub notifications: Vec<Notification>,
    pub referral: Referral,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Page::DEFAULT.id())
    }
}

impl SessionState {
    pub fn new(initial_page: &str) -> Self {
        Self {
            current_module: Page::resolve(initial_page).module(),
            current_page: initial_page.to_string(),
            previous_page: None,
            user: None,
            favorites: Favorites::default(),
            recently_viewed: Vec::new(),
            notifications: Vec::new(),
            referral: Referral::default(),
        }
    }

    pub fn page(&self) -> Page {
        Page::resolve(&self.current_page)
    }

    /// Records the page being left as `previous_page`
    pub fn set_current_page(&mut self, page: &str) {
        let prior = std::mem::replace(&mut self.current_page, page.to_string());
        self.previous_page = Some(prior);
    }

    pub fn set_current_module(&mut self, module: ModuleKind) {
        self.current_module = module;
    }

    pub fn set_favorite(&mut self, key: &FavoriteKey, is_favorite: bool) {
        self.favorites.set(key, is_favorite);
    }

    pub fn add_recently_viewed(&mut self, entry: RecentlyViewedEntry, cap: usize) {
        push_recently_viewed(&mut self.recently_viewed, entry, cap);
    }

    /// Appends; the oldest notifications are evicted beyond `cap`
    pub fn push_notification(&mut self, notification: Notification, cap: usize) {
        self.notifications.push(notification);
        if self.notifications.len() > cap {
            let overflow = self.notifications.len() - cap;
            self.notifications.drain(..overflow);
        }
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_page_tracks_every_transition() {
        let mut session = SessionState::new("home");
        let path = ["travel-home", "travel-results", "travel-results", "food-cart", "bogus", "home"];
        let mut expected_previous = "home".to_string();
        for page in path {
            session.set_current_page(page);
            assert_eq!(session.previous_page.as_deref(), Some(expected_previous.as_str()));
            assert_eq!(session.current_page, page);
            expected_previous = page.to_string();
        }
    }

    #[test]
    fn test_unknown_page_resolves_to_not_found() {
        let mut session = SessionState::default();
        session.set_current_page("seats-v2");
        assert_eq!(session.page(), Page::NotFound);
    }

    #[test]
    fn test_notifications_evict_oldest() {
        let mut session = SessionState::default();
        for i in 0..5 {
            session.push_notification(Notification::new(ModuleKind::Food, format!("n{}", i), ""), 3);
        }
        let titles: Vec<&str> = session.notifications.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
        assert_eq!(session.unread_notifications(), 3);
    }
}
