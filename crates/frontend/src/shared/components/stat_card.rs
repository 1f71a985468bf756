use crate::shared::icons::icon;
use contracts::dashboards::d400_ecommerce_overview::{MetricValue, Trend};
use leptos::prelude::*;

/// How to format the value on a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFormat {
    Integer,
    Money,
    Percent,
}

pub fn format_metric(value: f64, format: MetricFormat) -> String {
    match format {
        MetricFormat::Integer => format_thousands(value.round() as i64),
        MetricFormat::Money => format!("${}", format_thousands(value.round() as i64)),
        MetricFormat::Percent => format!("{:.1}%", value),
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Signed change in percent, e.g. "+11.01%" / "-0.03%"
pub fn format_change(change: f64) -> String {
    format!("{:+.2}%", change)
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    metric: Signal<MetricValue>,
    /// How to format the value
    format: MetricFormat,
) -> impl IntoView {
    let status_class = move || match metric.get().trend {
        Trend::Up => "stat-card stat-card--success",
        Trend::Down => "stat-card stat-card--error",
    };

    let change_view = move || {
        let metric = metric.get();
        let (arrow, cls) = match metric.trend {
            Trend::Up => ("\u{2191}", "stat-card__change stat-card__change--up"),
            Trend::Down => ("\u{2193}", "stat-card__change stat-card__change--down"),
        };
        view! { <span class=cls>{format!("{} {}", format_change(metric.change), arrow)}</span> }
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || format_metric(metric.get().value, format)}
                    {change_view}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(3781.0, MetricFormat::Integer), "3,781");
        assert_eq!(format_metric(695.0, MetricFormat::Money), "$695");
        assert_eq!(format_metric(1_234_567.0, MetricFormat::Money), "$1,234,567");
        assert_eq!(format_metric(30.1, MetricFormat::Percent), "30.1%");
    }

    #[test]
    fn test_format_change_is_signed() {
        assert_eq!(format_change(11.01), "+11.01%");
        assert_eq!(format_change(-0.03), "-0.03%");
    }
}
