use contracts::enums::{ModuleKind, Page};
use contracts::shared::StoreKey;
use contracts::system::UserProfile;
use leptos::prelude::*;

use crate::layout::global_context::{use_app, AppContext};
use crate::shared::format::{format_inr, pluralize};
use crate::shared::icons::{icon, module_icon};
use crate::shared::ui::PageHeader;

/// Orders and money spent in one module
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSpend {
    pub module: ModuleKind,
    pub orders: usize,
    pub total: f64,
}

const HISTORIES: [(ModuleKind, StoreKey); 4] = [
    (ModuleKind::Travel, StoreKey::TravelOrderHistory),
    (ModuleKind::Food, StoreKey::FoodOrderHistory),
    (ModuleKind::Tickets, StoreKey::TicketOrderHistory),
    (ModuleKind::Shopping, StoreKey::ShoppingOrderHistory),
];

pub fn spend_summary(app: &AppContext) -> Vec<ModuleSpend> {
    HISTORIES
        .iter()
        .map(|(module, key)| {
            let history = app.order_history(*key);
            ModuleSpend {
                module: *module,
                orders: history.len(),
                total: history.iter().map(|o| o.total).sum(),
            }
        })
        .collect()
}

#[component]
fn SignInForm() -> impl IntoView {
    let app = use_app();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_val = name.get_untracked().trim().to_string();
        if name_val.is_empty() {
            set_error.set(Some("Enter your name".to_string()));
            return;
        }
        set_error.set(None);
        app.sign_in(UserProfile::new(name_val, email.get_untracked().trim()));
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>"Sign in"</h2>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Priya Sharma"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="priya@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="button button--primary">"Continue"</button>
        </form>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WalletPage() -> impl IntoView {
    let app = use_app();
    let user = move || app.session.with(|s| s.user.clone());
    // every recorded order also pushes a notification into the session
    let summary = move || {
        app.session.track();
        spend_summary(&app)
    };

    view! {
        <div class="page">
            <PageHeader title="Wallet" hide_back=true />
            {move || match user() {
                None => view! { <SignInForm /> }.into_any(),
                Some(user) => view! {
                    <div class="card profile">
                        {icon("user")}
                        <div>
                            <div class="profile__name">{user.name.clone()}</div>
                            <div class="muted">{user.email.clone()}</div>
                        </div>
                        <button class="button button--ghost" on:click=move |_| app.sign_out()>"Sign out"</button>
                    </div>
                }.into_any(),
            }}

            <h2 class="section-title">"Your spending"</h2>
            <div class="spend">
                {move || {
                    let rows = summary();
                    let grand: f64 = rows.iter().map(|r| r.total).sum();
                    view! {
                        {rows.into_iter().map(|row| view! {
                            <div class="spend__row">
                                {icon(module_icon(row.module))}
                                <span>{row.module.display_name()}</span>
                                <span class="muted">{pluralize(row.orders, "order", "orders")}</span>
                                <span class="spend__amount">{format_inr(row.total)}</span>
                            </div>
                        }).collect_view()}
                        <div class="spend__row spend__row--total">
                            <span>"Total"</span>
                            <span class="spend__amount">{format_inr(grand)}</span>
                        </div>
                    }
                }}
            </div>

            <button class="card referral-teaser" on:click=move |_| app.navigate(Page::Referral)>
                {icon("gift")}
                <span>"Refer friends and earn rewards"</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::global_context::testing::fresh_context;
    use contracts::domain::common::cart::CartLine;
    use contracts::domain::common::OrderRecord;

    #[test]
    fn test_spend_summary_sums_each_history() {
        let app = fresh_context();
        for price in [500.0, 250.0] {
            let order = OrderRecord::new(
                ModuleKind::Food,
                "Meal",
                vec![CartLine::new("m1", "Thali", price)],
            );
            app.record_order(StoreKey::FoodOrderHistory, order);
        }

        let summary = spend_summary(&app);
        assert_eq!(summary.len(), 4);
        let food = summary.iter().find(|s| s.module == ModuleKind::Food).unwrap();
        assert_eq!(food.orders, 2);
        assert_eq!(food.total, 750.0);
        let travel = summary.iter().find(|s| s.module == ModuleKind::Travel).unwrap();
        assert_eq!(travel.orders, 0);
        assert_eq!(travel.total, 0.0);
    }
}
