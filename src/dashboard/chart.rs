//! Inline SVG line chart of score history, one series per site.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::config::HISTORY_DATE_FORMAT;
use crate::storage::ScanRecord;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 180.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const PALETTE: &[&str] = &[
    "#3498db", "#e67e22", "#9b59b6", "#1abc9c", "#e74c3c", "#34495e", "#f1c40f", "#2ecc71",
];

/// Escapes text for HTML/SVG element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

struct Series<'a> {
    url: &'a str,
    points: Vec<(NaiveDateTime, i64)>,
}

/// Groups records per URL, oldest point first. Rows with unparsable dates are skipped.
fn group_by_site(records: &[ScanRecord]) -> Vec<Series<'_>> {
    let mut series: Vec<Series<'_>> = Vec::new();
    // records arrive newest first
    for record in records.iter().rev() {
        let Ok(at) = NaiveDateTime::parse_from_str(&record.date, HISTORY_DATE_FORMAT) else {
            log::debug!("Skipping history row {} with date {:?}", record.id, record.date);
            continue;
        };
        match series.iter_mut().find(|s| s.url == record.url) {
            Some(existing) => existing.points.push((at, record.score)),
            None => series.push(Series {
                url: &record.url,
                points: vec![(at, record.score)],
            }),
        }
    }
    series
}

/// Renders score-over-time for the given history rows.
///
/// Returns `None` when no row has a usable date.
pub fn render_score_chart(records: &[ScanRecord]) -> Option<String> {
    let series = group_by_site(records);
    let (min_ts, max_ts) = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(at, _)| at.and_utc().timestamp()))
        .fold(None, |acc: Option<(i64, i64)>, ts| match acc {
            None => Some((ts, ts)),
            Some((lo, hi)) => Some((lo.min(ts), hi.max(ts))),
        })?;

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let span = (max_ts - min_ts) as f64;
    let x_of = |ts: i64| {
        if span == 0.0 {
            MARGIN_LEFT + plot_w / 2.0
        } else {
            MARGIN_LEFT + (ts - min_ts) as f64 / span * plot_w
        }
    };
    let y_of = |score: i64| MARGIN_TOP + plot_h - (score.clamp(0, 100) as f64 / 100.0) * plot_h;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" role="img" aria-label="Security score over time">"#
    );

    // Y axis gridlines every 25%
    for tick in (0..=100).step_by(25) {
        let y = y_of(tick);
        let _ = write!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#dddddd"/><text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{tick}%</text>"##,
            MARGIN_LEFT + plot_w,
            MARGIN_LEFT - 6.0,
            y + 4.0
        );
    }

    let axis_y = MARGIN_TOP + plot_h + 16.0;
    let first = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|(at, _)| *at)
        .min();
    let last = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|(at, _)| *at)
        .max();
    if let (Some(first), Some(last)) = (first, last) {
        let _ = write!(
            svg,
            r#"<text x="{MARGIN_LEFT}" y="{axis_y:.1}" font-size="11">{}</text>"#,
            first.format(HISTORY_DATE_FORMAT)
        );
        if last != first {
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{axis_y:.1}" font-size="11" text-anchor="end">{}</text>"#,
                MARGIN_LEFT + plot_w,
                last.format(HISTORY_DATE_FORMAT)
            );
        }
    }

    for (i, site) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let url = escape_html(site.url);
        let coords: Vec<String> = site
            .points
            .iter()
            .map(|(at, score)| format!("{:.1},{:.1}", x_of(at.and_utc().timestamp()), y_of(*score)))
            .collect();
        let _ = write!(
            svg,
            r#"<polyline fill="none" stroke="{color}" stroke-width="2" points="{}"/>"#,
            coords.join(" ")
        );
        for (at, score) in &site.points {
            let _ = write!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{color}"><title>{url} - {score}% - {}</title></circle>"#,
                x_of(at.and_utc().timestamp()),
                y_of(*score),
                at.format(HISTORY_DATE_FORMAT)
            );
        }

        let legend_x = WIDTH - MARGIN_RIGHT + 15.0;
        let legend_y = MARGIN_TOP + 10.0 + i as f64 * 18.0;
        let _ = write!(
            svg,
            r#"<rect x="{legend_x:.1}" y="{:.1}" width="10" height="10" fill="{color}"/><text x="{:.1}" y="{legend_y:.1}" font-size="11">{url}</text>"#,
            legend_y - 9.0,
            legend_x + 14.0
        );
    }

    svg.push_str("</svg>");
    Some(svg)
}
