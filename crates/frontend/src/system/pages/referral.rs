use contracts::enums::Page;
use contracts::system::Referral;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::clipboard::share_text;
use crate::shared::format::format_inr;
use crate::shared::ui::{EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn ReferralPage() -> impl IntoView {
    let app = use_app();
    let share_status = RwSignal::new(Option::<&'static str>::None);
    // creates the code for a user who has never opened this page
    let _ = app.referral();
    let signed_in = move || app.session.with(|s| s.user.is_some());
    let referral = move || {
        app.session
            .with(|s| (s.user.is_some() && !s.referral.code.is_empty()).then(|| s.referral.clone()))
    };

    let on_share = move |_: leptos::ev::MouseEvent| {
        let Some(current) = app.referral() else {
            return;
        };
        share_text(&current.share_message(), "referral.txt", move |outcome| {
            share_status.set(Some(outcome.message()));
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Refer and earn" />
            {move || {
                if !signed_in() {
                    return view! {
                        <EmptyState
                            message="Sign in to get your referral code."
                            action=(Page::Wallet, "Go to wallet")
                        />
                    }.into_any();
                }
                let Some(referral) = referral() else {
                    return ().into_any();
                };
                view! {
                    <div class="card referral">
                        <div class="muted">"Your code"</div>
                        <div class="referral__code">{referral.code.clone()}</div>
                        <p>{format!(
                            "Friends get {reward} off their first order. You earn {reward} for every invite.",
                            reward = format_inr(Referral::REWARD_PER_INVITE),
                        )}</p>
                        <div class="referral__stats">
                            <div>
                                <div class="muted">"Invited"</div>
                                <div class="referral__value">{referral.invited_count}</div>
                            </div>
                            <div>
                                <div class="muted">"Earned"</div>
                                <div class="referral__value">{format_inr(referral.reward_earned)}</div>
                            </div>
                        </div>
                        <div class="actions">
                            <button class="button button--primary" on:click=on_share>"Share code"</button>
                            <button class="button button--ghost" on:click=move |_| app.record_referral_invite()>
                                "Mark friend invited"
                            </button>
                        </div>
                        {move || share_status.get().map(|msg| view! { <div class="notice">{msg}</div> })}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
