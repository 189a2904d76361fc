//! Analytics series for the SVG chart.

use crate::model::dashboard::AnalyticsPointDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Messages,
    Violations,
    Health,
    FalsePositives,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Messages,
        Metric::Violations,
        Metric::Health,
        Metric::FalsePositives,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Messages => "Messages",
            Metric::Violations => "Violations",
            Metric::Health => "Health %",
            Metric::FalsePositives => "False Positives",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Metric::Messages => "#3b82f6",
            Metric::Violations => "#ef4444",
            Metric::Health => "#22c55e",
            Metric::FalsePositives => "#f59e0b",
        }
    }

    fn value(&self, point: &AnalyticsPointDto) -> f64 {
        match self {
            Metric::Messages => point.messages_processed as f64,
            Metric::Violations => point.violations_detected as f64,
            Metric::Health => (point.community_health_score * 100.0).clamp(0.0, 100.0),
            Metric::FalsePositives => point.false_positives as f64,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub metric: Metric,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(points: &[AnalyticsPointDto], metric: Metric) -> Self {
        Self {
            labels: points.iter().map(|p| short_date(&p.date)).collect(),
            metric,
            values: points.iter().map(|p| metric.value(p)).collect(),
        }
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// SVG polyline points within a `width` x `height` box, y growing down.
    pub fn polyline(&self, width: f64, height: f64) -> String {
        let max = self.max();
        let count = self.values.len();
        let step = if count > 1 { width / (count - 1) as f64 } else { 0.0 };

        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = if count > 1 { i as f64 * step } else { width / 2.0 };
                let y = if max > 0.0 {
                    height - value / max * height
                } else {
                    height
                };
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyticsTotals {
    pub messages: u64,
    pub violations: u64,
    pub false_positives: u64,
    pub average_health: f64,
}

impl AnalyticsTotals {
    pub fn from_points(points: &[AnalyticsPointDto]) -> Self {
        let average_health = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.community_health_score).sum::<f64>() / points.len() as f64
        };

        Self {
            messages: points.iter().map(|p| p.messages_processed).sum(),
            violations: points.iter().map(|p| p.violations_detected).sum(),
            false_positives: points.iter().map(|p| p.false_positives).sum(),
            average_health,
        }
    }
}

/// "2025-08-10" -> "08/10"; anything else is shown as sent.
fn short_date(date: &str) -> String {
    let parts: Vec<&str> = date.split(['-', 'T']).collect();
    match parts.as_slice() {
        [_, month, day, ..] if month.len() == 2 && day.len() == 2 => format!("{}/{}", month, day),
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, messages: u64, violations: u64, health: f64) -> AnalyticsPointDto {
        AnalyticsPointDto {
            date: date.to_string(),
            messages_processed: messages,
            violations_detected: violations,
            community_health_score: health,
            false_positives: 0,
        }
    }

    #[test]
    fn series_and_totals() {
        let points = vec![
            point("2025-08-10", 100, 4, 0.9),
            point("2025-08-11", 200, 2, 0.8),
        ];

        let health = ChartSeries::new(&points, Metric::Health);
        assert_eq!(health.labels, vec!["08/10", "08/11"]);
        assert_eq!(health.values, vec![90.0, 80.0]);

        let totals = AnalyticsTotals::from_points(&points);
        assert_eq!(totals.messages, 300);
        assert_eq!(totals.violations, 6);
        assert!((totals.average_health - 0.85).abs() < 1e-9);
    }

    #[test]
    fn polyline_scales_to_box() {
        let points = vec![point("d1", 0, 0, 0.0), point("d2", 50, 0, 0.0)];
        let series = ChartSeries::new(&points, Metric::Messages);

        assert_eq!(series.polyline(100.0, 40.0), "0.0,40.0 100.0,0.0");
    }
}
