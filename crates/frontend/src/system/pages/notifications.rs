use chrono::Utc;
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::date_utils::format_relative;
use crate::shared::icons::{icon, module_icon};
use crate::shared::ui::{EmptyState, PageHeader};

#[component]
#[allow(non_snake_case)]
pub fn NotificationsPage() -> impl IntoView {
    let app = use_app();
    let notifications = move || app.session.with(|s| s.notifications.clone());
    let unread = move || app.session.with(|s| s.unread_notifications());

    view! {
        <div class="page">
            <PageHeader title="Notifications">
                <button
                    class="button button--ghost"
                    disabled=move || unread() == 0
                    on:click=move |_| app.mark_notifications_read()
                >"Mark all read"</button>
                <button
                    class="button button--ghost"
                    disabled=move || notifications().is_empty()
                    on:click=move |_| app.clear_notifications()
                >"Clear"</button>
            </PageHeader>

            {move || {
                let list = notifications();
                let now = Utc::now();
                if list.is_empty() {
                    return view! { <EmptyState message="You're all caught up." /> }.into_any();
                }
                view! {
                    <ul class="notifications">
                        {list.into_iter().map(|n| view! {
                            <li class=if n.read { "notification" } else { "notification notification--unread" }>
                                {icon(module_icon(n.module))}
                                <div class="notification__body">
                                    <div class="notification__title">{n.title}</div>
                                    <div class="muted">{n.message}</div>
                                </div>
                                <span class="muted">{format_relative(&n.created_at, &now)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
