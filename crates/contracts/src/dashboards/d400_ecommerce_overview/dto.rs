use serde::{Deserialize, Serialize};

/// Direction of a metric relative to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Single summary counter shown as a stat card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: f64,
    /// Change in percent, signed
    pub change: f64,
    pub trend: Trend,
}

impl MetricValue {
    pub fn new(value: f64, change: f64, trend: Trend) -> Self {
        Self {
            value,
            change,
            trend,
        }
    }
}

/// Summary counters of the eCommerce overview. Supplied as-is by the seed
/// provider, never recomputed from orders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub customers: MetricValue,
    pub orders: MetricValue,
    pub revenue: MetricValue,
    pub growth: MetricValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Update,
    Delete,
    Login,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    pub action: String,
    pub timestamp: String,
    pub user: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Online,
    Offline,
    Away,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactItem {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub status: ContactStatus,
    #[serde(rename = "lastSeen", skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

/// Right panel content: notifications, recent activity and contacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFeed {
    pub notifications: Vec<NotificationItem>,
    pub activities: Vec<ActivityItem>,
    pub contacts: Vec<ContactItem>,
}

impl ActivityFeed {
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
