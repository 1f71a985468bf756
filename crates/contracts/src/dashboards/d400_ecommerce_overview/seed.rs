use super::dto::*;

pub fn seed_metrics() -> DashboardMetrics {
    DashboardMetrics {
        customers: MetricValue::new(3781.0, 11.01, Trend::Up),
        orders: MetricValue::new(1219.0, -0.03, Trend::Down),
        revenue: MetricValue::new(695.0, 15.03, Trend::Up),
        growth: MetricValue::new(30.1, 6.08, Trend::Up),
    }
}

fn notification(id: &str, title: &str, message: &str, timestamp: &str, kind: NotificationKind, read: bool) -> NotificationItem {
    NotificationItem {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        kind,
        read,
    }
}

fn activity(id: &str, user: &str, action: &str, timestamp: &str, kind: ActivityKind) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        action: action.to_string(),
        timestamp: timestamp.to_string(),
        user: user.to_string(),
        kind,
    }
}

fn contact(id: &str, name: &str, avatar: &str, status: ContactStatus, last_seen: Option<&str>) -> ContactItem {
    ContactItem {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        status,
        last_seen: last_seen.map(str::to_string),
    }
}

pub fn seed_activity_feed() -> ActivityFeed {
    ActivityFeed {
        notifications: vec![
            notification("1", "Bug fixed", "You fixed a bug.", "Just now", NotificationKind::Success, false),
            notification("2", "New user registered", "A new customer signed up.", "59 minutes ago", NotificationKind::Info, false),
            notification("3", "Bug reported", "A new bug was reported.", "12 hours ago", NotificationKind::Warning, true),
            notification("4", "Andi Lane subscribed", "Andi Lane subscribed to you.", "Today, 11:59 AM", NotificationKind::Info, true),
        ],
        activities: vec![
            activity("1", "Natali Craig", "Changed the style.", "Just now", ActivityKind::Update),
            activity("2", "Drew Cano", "Released a new version.", "59 minutes ago", ActivityKind::Create),
            activity("3", "Orlando Diggs", "Submitted a bug.", "12 hours ago", ActivityKind::Create),
            activity("4", "Andi Lane", "Modified data in Page X.", "Today, 11:59 AM", ActivityKind::Update),
            activity("5", "Kate Morrison", "Deleted a page in Project X.", "Feb 2, 2023", ActivityKind::Delete),
        ],
        contacts: vec![
            contact("1", "Natali Craig", "NC", ContactStatus::Online, None),
            contact("2", "Drew Cano", "DC", ContactStatus::Away, Some("5 minutes ago")),
            contact("3", "Orlando Diggs", "OD", ContactStatus::Offline, Some("Yesterday")),
            contact("4", "Andi Lane", "AL", ContactStatus::Online, None),
            contact("5", "Kate Morrison", "KM", ContactStatus::Offline, Some("2 days ago")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_metrics() {
        let metrics = seed_metrics();
        assert_eq!(metrics.customers.value, 3781.0);
        assert_eq!(metrics.orders.trend, Trend::Down);
        assert!(metrics.orders.change < 0.0);
        assert_eq!(metrics.growth.value, 30.1);
    }

    #[test]
    fn test_feed_unread_count_and_shape() {
        let feed = seed_activity_feed();
        assert_eq!(feed.unread_count(), 2);

        let value = serde_json::to_value(&feed.contacts[0]).unwrap();
        assert_eq!(value["status"], "online");
        assert!(value.get("lastSeen").is_none());

        let value = serde_json::to_value(&feed.notifications[0]).unwrap();
        assert_eq!(value["type"], "success");
    }
}
