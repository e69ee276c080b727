//! Chart.js configurations for the admin dashboard.
//!
//! Both charts use fixed sample figures; they are not wired to booking data.

use crate::error::{BookingError, Result};
use serde::Serialize;

/// Canvas id of the monthly bookings line chart.
pub const BOOKINGS_CHART_ID: &str = "bookingsChart";
/// Canvas id of the room type doughnut chart.
pub const ROOM_TYPE_CHART_ID: &str = "roomTypeChart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
}

/// One color for the whole dataset, or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    One(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Plugins>,
}

/// Argument to `new Chart(ctx, config)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BookingError::InvalidConfig(e.to_string()))
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Monthly bookings, January through June.
pub fn bookings_chart() -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]),
            datasets: vec![Dataset {
                label: Some("Bookings".to_string()),
                data: vec![12, 19, 3, 5, 2, 3],
                background_color: None,
                border_color: Some(Colors::One("rgb(75, 192, 192)".to_string())),
                border_width: None,
                tension: Some(0.1),
            }],
        },
        options: ChartOptions {
            responsive: true,
            scales: Some(Scales {
                y: Axis {
                    begin_at_zero: true,
                },
            }),
            plugins: None,
        },
    }
}

/// Share of bookings per room type.
pub fn room_type_chart() -> ChartConfig {
    let rgb = ["255, 99, 132", "54, 162, 235", "255, 206, 86"];
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: labels(&["Standard", "Deluxe", "Suite"]),
            datasets: vec![Dataset {
                label: None,
                data: vec![30, 45, 25],
                background_color: Some(Colors::PerPoint(
                    rgb.iter().map(|c| format!("rgba({c}, 0.7)")).collect(),
                )),
                border_color: Some(Colors::PerPoint(
                    rgb.iter().map(|c| format!("rgba({c}, 1)")).collect(),
                )),
                border_width: Some(1),
                tension: None,
            }],
        },
        options: ChartOptions {
            responsive: true,
            scales: None,
            plugins: Some(Plugins {
                legend: Legend {
                    position: "bottom".to_string(),
                },
            }),
        },
    }
}

/// Every dashboard chart with the canvas id it renders into.
pub fn dashboard_charts() -> Vec<(&'static str, ChartConfig)> {
    vec![
        (BOOKINGS_CHART_ID, bookings_chart()),
        (ROOM_TYPE_CHART_ID, room_type_chart()),
    ]
}

/// Card heading shown above a dashboard chart.
pub fn chart_title(id: &str) -> Option<&'static str> {
    match id {
        BOOKINGS_CHART_ID => Some("Monthly Bookings"),
        ROOM_TYPE_CHART_ID => Some("Bookings by Room Type"),
        _ => None,
    }
}

/// Look up a dashboard chart by canvas id.
pub fn chart_by_id(id: &str) -> Result<ChartConfig> {
    dashboard_charts()
        .into_iter()
        .find(|(chart_id, _)| *chart_id == id)
        .map(|(_, config)| config)
        .ok_or_else(|| BookingError::InvalidConfig(format!("unknown chart id {id:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn as_value(config: &ChartConfig) -> Value {
        serde_json::from_str(&config.to_json().unwrap()).unwrap()
    }

    #[test]
    fn bookings_chart_shape() {
        assert_eq!(
            as_value(&bookings_chart()),
            json!({
                "type": "line",
                "data": {
                    "labels": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                    "datasets": [{
                        "label": "Bookings",
                        "data": [12, 19, 3, 5, 2, 3],
                        "borderColor": "rgb(75, 192, 192)",
                        "tension": 0.1
                    }]
                },
                "options": {
                    "responsive": true,
                    "scales": { "y": { "beginAtZero": true } }
                }
            })
        );
    }

    #[test]
    fn room_type_chart_shape() {
        assert_eq!(
            as_value(&room_type_chart()),
            json!({
                "type": "doughnut",
                "data": {
                    "labels": ["Standard", "Deluxe", "Suite"],
                    "datasets": [{
                        "data": [30, 45, 25],
                        "backgroundColor": [
                            "rgba(255, 99, 132, 0.7)",
                            "rgba(54, 162, 235, 0.7)",
                            "rgba(255, 206, 86, 0.7)"
                        ],
                        "borderColor": [
                            "rgba(255, 99, 132, 1)",
                            "rgba(54, 162, 235, 1)",
                            "rgba(255, 206, 86, 1)"
                        ],
                        "borderWidth": 1
                    }]
                },
                "options": {
                    "responsive": true,
                    "plugins": { "legend": { "position": "bottom" } }
                }
            })
        );
    }

    #[test]
    fn every_dashboard_chart_has_a_title() {
        for (id, _) in dashboard_charts() {
            assert!(chart_title(id).is_some(), "no title for {id}");
        }
        assert_eq!(chart_title(BOOKINGS_CHART_ID), Some("Monthly Bookings"));
        assert_eq!(chart_title("revenueChart"), None);
    }

    #[test]
    fn chart_lookup() {
        assert_eq!(chart_by_id("roomTypeChart").unwrap().kind, ChartKind::Doughnut);
        assert!(matches!(
            chart_by_id("revenueChart"),
            Err(BookingError::InvalidConfig(_))
        ));
    }
}
