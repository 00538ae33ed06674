use dioxus::prelude::*;
use shared_types::{ChartKind, Metric, PerformancePoint, ALL_METRICS};

use crate::{Card, CardContent, CardHeader, CardTitle};

const WIDTH: f32 = 600.0;
const HEIGHT: f32 = 300.0;
const PAD_X: f32 = 40.0;
const PAD_Y: f32 = 20.0;
const Y_MAX: f32 = 10.0;
const Y_TICKS: [f32; 6] = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];

/// Drawing area inside the SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn y_for(&self, value: f32) -> f32 {
        let clamped = value.clamp(0.0, Y_MAX);
        self.top + self.height * (1.0 - clamped / Y_MAX)
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            left: PAD_X,
            top: PAD_Y,
            width: WIDTH - PAD_X * 2.0,
            height: HEIGHT - PAD_Y * 2.0,
        }
    }
}

/// Map values on the fixed 0–10 domain to SVG coordinates.
///
/// Points are spread evenly across the width; a single point sits at the left edge.
/// Values outside the domain are clamped.
pub fn plot_points(values: &[f32], area: PlotArea) -> Vec<(f32, f32)> {
    let step = if values.len() > 1 {
        area.width / (values.len() - 1) as f32
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (area.left + step * i as f32, area.y_for(*v)))
        .collect()
}

/// `M x,y L x,y ...` through every point. Empty input gives an empty path.
pub fn polyline_path(points: &[(f32, f32)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The polyline closed down to `baseline`.
pub fn area_path(points: &[(f32, f32)], baseline: f32) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.1},{baseline:.1} L{:.1},{baseline:.1} Z",
        polyline_path(points),
        last.0,
        first.0
    )
}

struct Series {
    name: &'static str,
    color: &'static str,
    line: String,
    fill: String,
    dots: Vec<(f32, f32)>,
}

/// Line or area chart of CGPA, attendance and assignment scores.
#[component]
pub fn PerformanceChart(
    title: String,
    points: Vec<PerformancePoint>,
    #[props(default)] kind: ChartKind,
) -> Element {
    let area = PlotArea::default();
    let grid: Vec<(f32, f32, f32)> = Y_TICKS
        .iter()
        .map(|t| (*t, area.y_for(*t), area.y_for(*t) + 4.0))
        .collect();
    let left = area.left;
    let grid_right = area.left + area.width;
    let tick_x = area.left - 8.0;
    let label_y = area.bottom() + 16.0;
    let labels: Vec<(f32, String)> = plot_points(&shared_types::series(&points, Metric::Cgpa), area)
        .into_iter()
        .zip(points.iter())
        .map(|((x, _), p)| (x, p.label.clone()))
        .collect();
    let series: Vec<Series> = ALL_METRICS
        .iter()
        .map(|m| {
            let pts = plot_points(&shared_types::series(&points, *m), area);
            Series {
                name: m.name(),
                color: m.color(),
                line: polyline_path(&pts),
                fill: area_path(&pts, area.bottom()),
                dots: pts,
            }
        })
        .collect();
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let show_area = kind == ChartKind::Area;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card {
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent {
                svg {
                    class: "chart",
                    "viewBox": "{view_box}",
                    role: "img",
                    "aria-label": "{title}",
                    for (tick, y, text_y) in grid {
                        g { key: "{tick}",
                            line {
                                class: "chart-grid",
                                x1: "{left}",
                                x2: "{grid_right}",
                                y1: "{y}",
                                y2: "{y}",
                            }
                            text {
                                class: "chart-axis",
                                x: "{tick_x}",
                                y: "{text_y}",
                                "text-anchor": "end",
                                "{tick}"
                            }
                        }
                    }
                    for (x, label) in labels {
                        text {
                            key: "{label}",
                            class: "chart-axis",
                            x: "{x}",
                            y: "{label_y}",
                            "text-anchor": "middle",
                            "{label}"
                        }
                    }
                    for s in series {
                        g { key: "{s.name}",
                            if show_area {
                                path {
                                    d: "{s.fill}",
                                    fill: s.color,
                                    "fill-opacity": "0.2",
                                    stroke: "none",
                                }
                            }
                            path {
                                d: "{s.line}",
                                fill: "none",
                                stroke: s.color,
                                "stroke-width": "2",
                            }
                            if !show_area {
                                for (i, (cx, cy)) in s.dots.iter().enumerate() {
                                    circle {
                                        key: "{i}",
                                        cx: "{cx}",
                                        cy: "{cy}",
                                        r: "4",
                                        fill: s.color,
                                    }
                                }
                            }
                        }
                    }
                }
                ChartLegend {}
            }
        }
    }
}

#[component]
pub fn ChartLegend() -> Element {
    let entries: Vec<(&'static str, String)> = ALL_METRICS
        .iter()
        .map(|m| (m.name(), format!("background: {}", m.color())))
        .collect();

    rsx! {
        ul { class: "chart-legend",
            for (name, swatch) in entries {
                li { key: "{name}", class: "chart-legend-item",
                    span { class: "chart-legend-swatch", style: "{swatch}" }
                    "{name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn area() -> PlotArea {
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }

    #[test]
    fn points_span_width_on_fixed_domain() {
        let pts = plot_points(&[0.0, 5.0, 10.0], area());
        assert_eq!(pts, vec![(0.0, 100.0), (50.0, 50.0), (100.0, 0.0)]);
    }

    #[test]
    fn out_of_domain_values_are_clamped() {
        let pts = plot_points(&[-3.0, 12.0], area());
        assert_eq!(pts, vec![(0.0, 100.0), (100.0, 0.0)]);
    }

    #[test]
    fn single_point_sits_at_left_edge() {
        assert_eq!(plot_points(&[10.0], area()), vec![(0.0, 0.0)]);
    }

    #[test]
    fn polyline_moves_then_draws() {
        let path = polyline_path(&[(0.0, 100.0), (50.0, 50.0)]);
        assert_eq!(path, "M0.0,100.0 L50.0,50.0");
        assert_eq!(polyline_path(&[]), "");
    }

    #[test]
    fn area_closes_to_baseline() {
        let path = area_path(&[(0.0, 20.0), (100.0, 40.0)], 100.0);
        assert_eq!(path, "M0.0,20.0 L100.0,40.0 L100.0,100.0 L0.0,100.0 Z");
        assert_eq!(area_path(&[], 100.0), "");
    }

    #[test]
    fn legend_lists_every_metric() {
        let html = dioxus_ssr::render_element(rsx! { ChartLegend {} });
        for metric in ALL_METRICS {
            assert!(html.contains(metric.name()), "missing {} in {html}", metric.name());
        }
        assert!(html.contains("#10b981"));
    }
}
