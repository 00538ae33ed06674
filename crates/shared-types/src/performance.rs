use serde::{Deserialize, Serialize};

/// One x-axis sample of the performance charts. Values are on a 0–10 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformancePoint {
    pub label: String,
    pub cgpa: f32,
    pub attendance: f32,
    pub assignment: f32,
}

impl PerformancePoint {
    pub fn new(label: &str, cgpa: f32, attendance: f32, assignment: f32) -> Self {
        Self {
            label: label.to_string(),
            cgpa,
            attendance,
            assignment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cgpa,
    Attendance,
    Assignment,
}

pub const ALL_METRICS: [Metric; 3] = [Metric::Cgpa, Metric::Attendance, Metric::Assignment];

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cgpa => "CGPA",
            Metric::Attendance => "Attendance",
            Metric::Assignment => "Assignment",
        }
    }

    pub fn value(&self, point: &PerformancePoint) -> f32 {
        match self {
            Metric::Cgpa => point.cgpa,
            Metric::Attendance => point.attendance,
            Metric::Assignment => point.assignment,
        }
    }

    /// Stroke colour used by the charts.
    pub fn color(&self) -> &'static str {
        match self {
            Metric::Cgpa => "hsl(var(--primary))",
            Metric::Attendance => "#10b981",
            Metric::Assignment => "#8b5cf6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Area,
}

/// Extract one metric's values in x order.
pub fn series(points: &[PerformancePoint], metric: Metric) -> Vec<f32> {
    points.iter().map(|p| metric.value(p)).collect()
}
