//! Right panel component - правая боковая панель
//!
//! Уведомления, последние действия и контакты

use crate::domain::a001_order::state::use_dashboard;
use crate::shared::icons::icon;
use contracts::dashboards::d400_ecommerce_overview::{
    ActivityItem, ContactItem, ContactStatus, NotificationItem, NotificationKind,
};
use leptos::prelude::*;
use thaw::*;

fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info | NotificationKind::Success => "bell",
        NotificationKind::Warning | NotificationKind::Error => "activity",
    }
}

fn contact_status_class(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::Online => "contact__status contact__status--online",
        ContactStatus::Offline => "contact__status contact__status--offline",
        ContactStatus::Away => "contact__status contact__status--away",
    }
}

#[component]
pub fn RightPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let feed = ctx.feed.get_value();
    let unread = feed.unread_count();

    view! {
        <div class="app-panel__content">
            <section class="app-panel__section">
                <h3 class="app-panel__title">
                    "Notifications"
                    {(unread > 0).then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {unread.to_string()}
                        </Badge>
                    })}
                </h3>
                {feed.notifications.into_iter().map(|n| view! { <NotificationRow item=n /> }).collect_view()}
            </section>

            <section class="app-panel__section">
                <h3 class="app-panel__title">"Activities"</h3>
                {feed.activities.into_iter().map(|a| view! { <ActivityRow item=a /> }).collect_view()}
            </section>

            <section class="app-panel__section">
                <h3 class="app-panel__title">"Contacts"</h3>
                {feed.contacts.into_iter().map(|c| view! { <ContactRow item=c /> }).collect_view()}
            </section>
        </div>
    }
}

#[component]
fn NotificationRow(item: NotificationItem) -> impl IntoView {
    view! {
        <div class="feed-item" class:feed-item--unread=!item.read>
            <span class="feed-item__icon">{icon(notification_icon(item.kind))}</span>
            <div class="feed-item__body">
                <div class="feed-item__title">{item.title}</div>
                <div class="feed-item__text">{item.message}</div>
                <div class="feed-item__time">{item.timestamp}</div>
            </div>
        </div>
    }
}

#[component]
fn ActivityRow(item: ActivityItem) -> impl IntoView {
    view! {
        <div class="feed-item">
            <span class="feed-item__icon">{icon("user")}</span>
            <div class="feed-item__body">
                <div class="feed-item__title">{item.action}</div>
                <div class="feed-item__text">{item.user}</div>
                <div class="feed-item__time">{item.timestamp}</div>
            </div>
        </div>
    }
}

#[component]
fn ContactRow(item: ContactItem) -> impl IntoView {
    view! {
        <div class="contact">
            <div class="contact__avatar">
                {item.avatar}
                <span class=contact_status_class(item.status)></span>
            </div>
            <div class="contact__body">
                <div class="contact__name">{item.name}</div>
                {item.last_seen.map(|seen| view! { <div class="contact__seen">{seen}</div> })}
            </div>
        </div>
    }
}
