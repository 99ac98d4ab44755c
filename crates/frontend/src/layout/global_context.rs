use contracts::enums::{ModuleKind, Page};
use contracts::shared::{StoreKey, StoreRecord};
use contracts::system::{FavoriteKey, Notification, RecentlyViewedEntry, Referral, UserProfile};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::session::SessionState;
use crate::config::AppConfig;
use crate::shared::event_bus::{AppEvent, EventBus};
use crate::shared::storage::PersistedStore;

#[derive(Clone)]
struct Services {
    store: PersistedStore,
    bus: EventBus,
    config: AppConfig,
}

/// Application context injected into every view.
///
/// One per running app; tests build a fresh one over a `MemoryStore`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<SessionState>,
    /// Bumped on every `CartUpdated`, so views re-read cart keys
    pub cart_version: RwSignal<u64>,
    pub hero_gradient: RwSignal<Option<String>>,
    services: StoredValue<Services>,
}

impl AppContext {
    pub fn new(store: PersistedStore, config: AppConfig) -> Self {
        store.ensure_schema();

        let mut session = SessionState::new(&config.navigation.default_page);
        session.user = store.load_opt(StoreKey::CurrentUser);
        session.favorites = store.load(StoreKey::Favorites);
        session.recently_viewed = store.load(StoreKey::RecentlyViewed);
        session.notifications = store.load(StoreKey::Notifications);
        session.referral = store.load(StoreKey::ReferralData);

        let hero_gradient = store.get_raw(StoreKey::HeroGradient);
        let ctx = Self {
            session: RwSignal::new(session),
            cart_version: RwSignal::new(0),
            hero_gradient: RwSignal::new(hero_gradient),
            services: StoredValue::new(Services {
                store,
                bus: EventBus::new(),
                config,
            }),
        };
        ctx.bridge_events();
        ctx
    }

    /// Mirrors bus traffic into signals for views that only need to re-render
    fn bridge_events(&self) {
        let cart_version = self.cart_version;
        let hero_gradient = self.hero_gradient;
        self.bus().subscribe(move |event| match event {
            AppEvent::CartUpdated(_) => cart_version.update(|v| *v += 1),
            AppEvent::HeroGradientChanged(token) => hero_gradient.set(Some(token.clone())),
        });
    }

    pub fn store(&self) -> PersistedStore {
        self.services.with_value(|s| s.store.clone())
    }

    pub fn bus(&self) -> EventBus {
        self.services.with_value(|s| s.bus.clone())
    }

    pub fn config(&self) -> AppConfig {
        self.services.with_value(|s| s.config.clone())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn current_page(&self) -> Page {
        self.session.with(|s| s.page())
    }

    pub fn current_page_id(&self) -> String {
        self.session.with_untracked(|s| s.current_page.clone())
    }

    pub fn previous_page_id(&self) -> Option<String> {
        self.session.with_untracked(|s| s.previous_page.clone())
    }

    pub fn set_current_module(&self, module: ModuleKind) {
        self.session.update(|s| s.set_current_module(module));
    }

    pub fn set_current_page(&self, page: &str) {
        log::debug!("🔷 page: '{}' -> '{}'", self.current_page_id(), page);
        self.session.update(|s| s.set_current_page(page));
    }

    /// Switches page and the module owning it in one update
    pub fn navigate(&self, page: Page) {
        log::debug!("🔷 navigate: '{}' -> '{}'", self.current_page_id(), page);
        self.session.update(|s| {
            s.set_current_page(page.id());
            s.set_current_module(page.module());
        });
    }

    /// Returns to the previous page, or the default page when there is none
    pub fn go_back(&self) {
        let target = self
            .previous_page_id()
            .unwrap_or_else(|| self.config().navigation.default_page);
        let module = Page::resolve(&target).module();
        log::debug!("🔶 back -> '{}'", target);
        self.session.update(|s| {
            s.set_current_page(&target);
            s.set_current_module(module);
        });
    }

    /// Reads `?page=` once on startup and keeps the query string in sync
    /// with the current page afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page") {
            if *page != self.current_page_id() {
                self.navigate(Page::resolve(page));
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.session.with(|s| s.current_page.clone());
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), page)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Selections handed between views
    // ------------------------------------------------------------------

    pub fn select<T: StoreRecord>(&self, key: StoreKey, record: &T) {
        self.store().save(key, record);
    }

    pub fn selection<T: StoreRecord>(&self, key: StoreKey) -> Option<T> {
        self.store().load_opt(key)
    }

    // ------------------------------------------------------------------
    // Session fields mirrored to the store
    // ------------------------------------------------------------------

    pub fn set_favorite(&self, key: &FavoriteKey, is_favorite: bool) {
        self.session.update(|s| s.set_favorite(key, is_favorite));
        let favorites = self.session.with_untracked(|s| s.favorites.clone());
        self.store().save(StoreKey::Favorites, &favorites);
    }

    pub fn toggle_favorite(&self, key: &FavoriteKey) -> bool {
        let next = !self.session.with_untracked(|s| s.favorites.contains(key));
        self.set_favorite(key, next);
        next
    }

    pub fn is_favorite(&self, key: &FavoriteKey) -> bool {
        self.session.with(|s| s.favorites.contains(key))
    }

    pub fn add_recently_viewed(&self, entry: RecentlyViewedEntry) {
        let cap = self.config().session.recently_viewed_cap;
        self.session.update(|s| s.add_recently_viewed(entry, cap));
        let list = self.session.with_untracked(|s| s.recently_viewed.clone());
        self.store().save(StoreKey::RecentlyViewed, &list);
    }

    pub fn push_notification(&self, notification: Notification) {
        let cap = self.config().session.notifications_cap;
        log::info!("🔔 [{}] {}", notification.module.code(), notification.title);
        self.session.update(|s| s.push_notification(notification, cap));
        self.save_notifications();
    }

    pub fn mark_notifications_read(&self) {
        self.session.update(|s| s.notifications.iter_mut().for_each(|n| n.read = true));
        self.save_notifications();
    }

    pub fn clear_notifications(&self) {
        self.session.update(|s| s.notifications.clear());
        self.save_notifications();
    }

    fn save_notifications(&self) {
        let list = self.session.with_untracked(|s| s.notifications.clone());
        self.store().save(StoreKey::Notifications, &list);
    }

    pub fn sign_in(&self, user: UserProfile) {
        log::info!("signed in as {}", user.name);
        self.store().save(StoreKey::CurrentUser, &user);
        self.session.update(|s| s.user = Some(user));
    }

    /// The referral record belongs to the user and leaves with them
    pub fn sign_out(&self) {
        self.session.update(|s| {
            s.user = None;
            s.referral = Referral::default();
        });
        self.store().remove(StoreKey::CurrentUser);
        self.store().remove(StoreKey::ReferralData);
    }

    /// Referral record of the signed-in user, created on first use and
    /// replaced when the stored one carries another user's code
    pub fn referral(&self) -> Option<Referral> {
        let (user, referral) = self
            .session
            .with_untracked(|s| (s.user.clone(), s.referral.clone()));
        let user = user?;
        let created = Referral::for_user(&user.name, &user.id);
        if referral.code == created.code {
            return Some(referral);
        }
        self.set_referral(created.clone());
        Some(created)
    }

    pub fn set_referral(&self, referral: Referral) {
        self.store().save(StoreKey::ReferralData, &referral);
        self.session.update(|s| s.referral = referral);
    }

    pub fn record_referral_invite(&self) {
        if let Some(mut referral) = self.referral() {
            referral.record_invite();
            self.set_referral(referral);
        }
    }

    // ------------------------------------------------------------------
    // Cross-component signals
    // ------------------------------------------------------------------

    pub fn publish_hero_gradient(&self, token: &str) {
        self.store().set_raw(StoreKey::HeroGradient, token);
        self.bus()
            .publish(&AppEvent::HeroGradientChanged(token.to_string()));
    }
}

/// Hook to use the application context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found. Provide it in App.")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AppContext;
    use crate::config::AppConfig;
    use crate::shared::storage::{KvStore, PersistedStore};
    use std::sync::Arc;

    pub fn context_with(backend: Arc<dyn KvStore>) -> AppContext {
        AppContext::new(PersistedStore::new(backend), AppConfig::default())
    }

    pub fn fresh_context() -> AppContext {
        context_with(Arc::new(crate::shared::storage::MemoryStore::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{context_with, fresh_context};
    use super::*;
    use crate::shared::storage::testing::{DisabledStore, FullStore};
    use contracts::system::Favorites;
    use std::sync::Arc;

    #[test]
    fn test_navigation_records_previous_page() {
        let ctx = fresh_context();
        assert_eq!(ctx.current_page_id(), "home");

        ctx.navigate(Page::TravelHome);
        assert_eq!(ctx.previous_page_id().as_deref(), Some("home"));
        ctx.set_current_page("travel-results");
        assert_eq!(ctx.previous_page_id().as_deref(), Some("travel-home"));
        ctx.navigate(Page::TravelBooking);
        assert_eq!(ctx.previous_page_id().as_deref(), Some("travel-results"));

        ctx.go_back();
        assert_eq!(ctx.current_page_id(), "travel-results");
        assert_eq!(ctx.previous_page_id().as_deref(), Some("travel-booking"));
    }

    #[test]
    fn test_navigate_switches_module() {
        let ctx = fresh_context();
        ctx.navigate(Page::FoodCart);
        assert_eq!(ctx.session.with_untracked(|s| s.current_module), ModuleKind::Food);
        ctx.set_current_module(ModuleKind::Wallet);
        assert_eq!(ctx.session.with_untracked(|s| s.current_module), ModuleKind::Wallet);
    }

    #[test]
    fn test_back_without_history_goes_to_default_page() {
        let ctx = fresh_context();
        ctx.go_back();
        assert_eq!(ctx.current_page_id(), "home");
    }

    #[test]
    fn test_favorites_write_through() {
        let ctx = fresh_context();
        let key = FavoriteKey::new("restaurant", "r2");

        ctx.set_favorite(&key, false);
        assert!(!ctx.session.with_untracked(|s| s.favorites.contains(&key)));

        ctx.set_favorite(&key, true);
        let stored: Favorites = ctx.store().load(StoreKey::Favorites);
        assert!(stored.contains(&key));

        assert!(!ctx.toggle_favorite(&key));
        let stored: Favorites = ctx.store().load(StoreKey::Favorites);
        assert!(stored.is_empty());
    }

    #[test]
    fn test_recently_viewed_dedupes_and_persists() {
        let ctx = fresh_context();
        ctx.add_recently_viewed(RecentlyViewedEntry::new("p1", ModuleKind::Shopping, "Phone"));
        ctx.add_recently_viewed(RecentlyViewedEntry::new("p2", ModuleKind::Shopping, "Laptop"));
        ctx.add_recently_viewed(RecentlyViewedEntry::new("p1", ModuleKind::Shopping, "Phone"));

        let ids: Vec<String> = ctx
            .session
            .with_untracked(|s| s.recently_viewed.iter().map(|e| e.id.clone()).collect());
        assert_eq!(ids, vec!["p1", "p2"]);
        let stored: Vec<RecentlyViewedEntry> = ctx.store().load(StoreKey::RecentlyViewed);
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, "p1");
    }

    #[test]
    fn test_state_survives_failed_writes() {
        let ctx = context_with(Arc::new(FullStore::default()));
        let key = FavoriteKey::new("movie", "mv1");
        ctx.set_favorite(&key, true);
        ctx.push_notification(Notification::new(ModuleKind::Tickets, "Booked", "2 seats"));
        ctx.sign_in(UserProfile::new("Asha Rao", "asha@example.com"));

        assert!(ctx.session.with_untracked(|s| s.favorites.contains(&key)));
        assert_eq!(ctx.session.with_untracked(|s| s.notifications.len()), 1);
        assert!(ctx.session.with_untracked(|s| s.user.is_some()));

        let disabled = context_with(Arc::new(DisabledStore));
        disabled.navigate(Page::ShoppingHome);
        disabled.set_favorite(&key, true);
        assert!(disabled.session.with_untracked(|s| s.favorites.contains(&key)));
    }

    #[test]
    fn test_session_hydrates_from_store() {
        let backend = Arc::new(crate::shared::storage::MemoryStore::default());
        let first = context_with(backend.clone());
        first.set_favorite(&FavoriteKey::new("product", "p4"), true);
        first.sign_in(UserProfile::new("Kabir Mehta", "kabir@example.com"));

        let second = context_with(backend);
        assert!(second
            .session
            .with_untracked(|s| s.favorites.contains(&FavoriteKey::new("product", "p4"))));
        assert_eq!(
            second.session.with_untracked(|s| s.user.as_ref().map(|u| u.name.clone())),
            Some("Kabir Mehta".to_string())
        );

        second.sign_out();
        assert!(second.store().get_raw(StoreKey::CurrentUser).is_none());
    }

    #[test]
    fn test_referral_requires_user_and_is_created_once() {
        let ctx = fresh_context();
        assert!(ctx.referral().is_none());

        ctx.sign_in(UserProfile::new("Meera Iyer", "meera@example.com"));
        let referral = ctx.referral().unwrap();
        assert!(referral.code.starts_with("MEERA"));
        ctx.record_referral_invite();
        let stored: Referral = ctx.store().load(StoreKey::ReferralData);
        assert_eq!(stored.code, referral.code);
        assert_eq!(stored.invited_count, 1);
    }

    #[test]
    fn test_hero_gradient_reaches_subscribers_and_store() {
        let ctx = fresh_context();
        ctx.publish_hero_gradient("cyan-teal");
        assert_eq!(ctx.hero_gradient.get_untracked().as_deref(), Some("cyan-teal"));
        assert_eq!(ctx.store().get_raw(StoreKey::HeroGradient).as_deref(), Some("cyan-teal"));
    }

    #[test]
    fn test_notifications_mark_read_and_clear() {
        let ctx = fresh_context();
        ctx.push_notification(Notification::new(ModuleKind::Food, "Order placed", "Burger Barn"));
        ctx.mark_notifications_read();
        assert_eq!(ctx.session.with_untracked(|s| s.unread_notifications()), 0);
        ctx.clear_notifications();
        let stored: Vec<Notification> = ctx.store().load(StoreKey::Notifications);
        assert!(stored.is_empty());
    }

    #[test]
    fn test_referral_does_not_carry_over_to_next_user() {
        let ctx = fresh_context();
        ctx.sign_in(UserProfile::new("Asha Rao", "asha@example.com"));
        ctx.record_referral_invite();
        ctx.record_referral_invite();
        assert_eq!(ctx.referral().map(|r| r.invited_count), Some(2));

        ctx.sign_out();
        assert!(ctx.store().get_raw(StoreKey::ReferralData).is_none());

        ctx.sign_in(UserProfile::new("Kabir Mehta", "kabir@example.com"));
        let referral = ctx.referral().unwrap();
        assert!(referral.code.starts_with("KABIR"));
        assert_eq!(referral.invited_count, 0);
        assert_eq!(referral.reward_earned, 0.0);
    }

    #[test]
    fn test_stale_referral_of_other_user_is_replaced() {
        let backend = Arc::new(crate::shared::storage::MemoryStore::default());
        let first = context_with(backend.clone());
        first.set_referral(Referral {
            code: "ASHA1234".to_string(),
            invited_count: 5,
            reward_earned: 500.0,
        });
        first.sign_in(UserProfile::new("Kabir Mehta", "kabir@example.com"));

        let second = context_with(backend);
        let referral = second.referral().unwrap();
        assert!(referral.code.starts_with("KABIR"));
        assert_eq!(referral.invited_count, 0);
        let stored: Referral = second.store().load(StoreKey::ReferralData);
        assert_eq!(stored, referral);
    }

    #[test]
    fn test_every_key_malformed_reads_as_defaults() {
        use contracts::domain::a001_travel::{Flight, TravelSearch};
        use contracts::domain::a003_tickets::SelectedShow;
        use contracts::domain::common::{Cart, CartKind};

        for raw in ["", "{", "undefined", "[object Object]", "{\"items\":5}", "null", "42"] {
            let backend = Arc::new(crate::shared::storage::MemoryStore::default());
            let store = PersistedStore::new(backend.clone());
            for key in StoreKey::all() {
                store.set_raw(key, raw);
            }

            let ctx = context_with(backend);
            ctx.session.with_untracked(|s| {
                assert!(s.user.is_none());
                assert!(s.favorites.is_empty());
                assert!(s.recently_viewed.is_empty());
                assert!(s.notifications.is_empty());
                assert_eq!(s.referral, Referral::default());
            });
            assert_eq!(ctx.cart(CartKind::Food), Cart::default());
            assert_eq!(ctx.cart(CartKind::Shopping), Cart::default());
            assert!(ctx.compare_items().is_empty());
            assert!(ctx.selection::<Flight>(StoreKey::SelectedFlight).is_none());
            assert!(ctx.selection::<SelectedShow>(StoreKey::SelectedShow).is_none());
            assert_eq!(
                ctx.store().load::<TravelSearch>(StoreKey::TravelSearch),
                TravelSearch::default()
            );
            for key in [
                StoreKey::TravelOrderHistory,
                StoreKey::FoodOrderHistory,
                StoreKey::TicketOrderHistory,
                StoreKey::ShoppingOrderHistory,
            ] {
                assert!(ctx.order_history(key).is_empty(), "{}", key);
            }
            assert!(ctx.referral().is_none());
        }
    }
}
