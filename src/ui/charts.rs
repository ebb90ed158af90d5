//! Inline SVG charts
//!
//! Both charts are drawn from the fixed distributions, never from the filtered
//! project list.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::catalog::DistributionEntry;

use super::escape_html;

/// Discrete red sequence for pie slices, light to dark
const REDS: [&str; 9] = [
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];

const PIE_SIZE: f64 = 320.0;
const PIE_RADIUS: f64 = 120.0;

const BAR_WIDTH: f64 = 480.0;
const BAR_HEIGHT: f64 = 320.0;
const BAR_MARGIN: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: u32,
    pub percent: f64,
    start: f64,
    end: f64,
    color: &'static str,
}

/// Proportion chart
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn from_distribution(title: impl Into<String>, entries: &[DistributionEntry]) -> Self {
        let total: u32 = entries.iter().map(|e| e.count).sum();
        let mut angle = -PI / 2.0;
        let mut slices = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let fraction = if total == 0 {
                0.0
            } else {
                f64::from(entry.count) / f64::from(total)
            };
            let sweep = fraction * 2.0 * PI;
            // Darkest colours first so the largest early entries stand out
            let color = REDS[REDS.len() - 1 - (i % REDS.len())];
            slices.push(PieSlice {
                label: entry.label.clone(),
                count: entry.count,
                percent: fraction * 100.0,
                start: angle,
                end: angle + sweep,
                color,
            });
            angle += sweep;
        }

        Self {
            title: title.into(),
            slices,
        }
    }

    pub fn to_svg(&self) -> String {
        let c = PIE_SIZE / 2.0;
        let mut svg = format!(
            r#"<svg class="chart pie" viewBox="0 0 {size} {size}" role="img" aria-label="{title}">"#,
            size = PIE_SIZE,
            title = escape_html(&self.title),
        );

        for slice in self.slices.iter().filter(|s| s.count > 0) {
            if slice.percent >= 99.999 {
                let _ = write!(
                    svg,
                    r#"<circle cx="{c}" cy="{c}" r="{r}" fill="{fill}"><title>{label}: {count}</title></circle>"#,
                    r = PIE_RADIUS,
                    fill = slice.color,
                    label = escape_html(&slice.label),
                    count = slice.count,
                );
                continue;
            }

            let (x1, y1) = polar(c, PIE_RADIUS, slice.start);
            let (x2, y2) = polar(c, PIE_RADIUS, slice.end);
            let large_arc = if slice.end - slice.start > PI { 1 } else { 0 };
            let _ = write!(
                svg,
                r##"<path d="M{c},{c} L{x1:.2},{y1:.2} A{r},{r} 0 {large_arc} 1 {x2:.2},{y2:.2} Z" fill="{fill}" stroke="#fff" stroke-width="1"><title>{label}: {count} ({pct:.1}%)</title></path>"##,
                r = PIE_RADIUS,
                fill = slice.color,
                label = escape_html(&slice.label),
                count = slice.count,
                pct = slice.percent,
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Legend rows: colour swatch, label and percentage
    pub fn legend_html(&self) -> String {
        let mut html = String::from(r#"<ul class="legend">"#);
        for slice in &self.slices {
            let _ = write!(
                html,
                r#"<li><span class="swatch" style="background:{}"></span>{} <em>{:.1}%</em></li>"#,
                slice.color,
                escape_html(&slice.label),
                slice.percent,
            );
        }
        html.push_str("</ul>");
        html
    }
}

fn polar(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.cos(), center + radius * angle.sin())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: u32,
    /// Height as a fraction of the tallest bar
    pub ratio: f64,
}

/// Magnitude chart with a continuous red colour scale
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_distribution(title: impl Into<String>, entries: &[DistributionEntry]) -> Self {
        let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
        let bars = entries
            .iter()
            .map(|e| Bar {
                label: e.label.clone(),
                count: e.count,
                ratio: if max == 0 {
                    0.0
                } else {
                    f64::from(e.count) / f64::from(max)
                },
            })
            .collect();

        Self {
            title: title.into(),
            bars,
        }
    }

    pub fn to_svg(&self) -> String {
        let plot_height = BAR_HEIGHT - 2.0 * BAR_MARGIN;
        let slot = if self.bars.is_empty() {
            0.0
        } else {
            (BAR_WIDTH - 2.0 * BAR_MARGIN) / self.bars.len() as f64
        };
        let bar_width = slot * 0.6;
        let baseline = BAR_HEIGHT - BAR_MARGIN;

        let mut svg = format!(
            r#"<svg class="chart bar" viewBox="0 0 {w} {h}" role="img" aria-label="{title}">"#,
            w = BAR_WIDTH,
            h = BAR_HEIGHT,
            title = escape_html(&self.title),
        );
        let _ = write!(
            svg,
            "<line x1=\"{m}\" y1=\"{b}\" x2=\"{end}\" y2=\"{b}\" stroke=\"#9ca3af\"/>",
            m = BAR_MARGIN,
            b = baseline,
            end = BAR_WIDTH - BAR_MARGIN,
        );

        for (i, bar) in self.bars.iter().enumerate() {
            let height = bar.ratio * plot_height;
            let x = BAR_MARGIN + slot * i as f64 + (slot - bar_width) / 2.0;
            let y = baseline - height;
            let label = escape_html(&bar.label);
            let _ = write!(
                svg,
                r#"<rect x="{x:.2}" y="{y:.2}" width="{bw:.2}" height="{height:.2}" rx="4" fill="{fill}"><title>{label}: {count}</title></rect>"#,
                bw = bar_width,
                fill = red_scale(bar.ratio),
                count = bar.count,
            );
            let _ = write!(
                svg,
                r#"<text x="{cx:.2}" y="{ty:.2}" text-anchor="middle" class="value">{count}</text><text x="{cx:.2}" y="{ly:.2}" text-anchor="middle" class="label">{label}</text>"#,
                cx = x + bar_width / 2.0,
                ty = y - 6.0,
                ly = baseline + 18.0,
                count = bar.count,
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Interpolate from light to dark red
fn red_scale(ratio: f64) -> String {
    let t = ratio.clamp(0.0, 1.0);
    let from = (254.0, 224.0, 210.0);
    let to = (165.0, 15.0, 21.0);
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        lerp(from.0, to.0),
        lerp(from.1, to.1),
        lerp(from.2, to.2)
    )
}
