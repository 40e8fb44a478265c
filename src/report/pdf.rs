//! Printable PDF report.
//!
//! Coordinates are in points on an A4 page, origin bottom-left.

use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt};

use crate::error_handling::ReportError;
use crate::scanner::SiteReport;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const LEFT_MARGIN: f32 = 50.0;
const RIGHT_EDGE: f32 = 550.0;
const TOP_LINE: f32 = 800.0;
const BOTTOM_MARGIN: f32 = 80.0;
const HEADER_LINE_STEP: f32 = 15.0;

fn pt(value: f32) -> Mm {
    Mm::from(Pt(value))
}

fn pdf_error(e: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(e.to_string())
}

/// Lays out a completed scan as an A4 PDF and returns the file bytes.
///
/// Continues on a new page if the header list reaches the bottom margin.
pub fn generate_pdf_report(report: &SiteReport) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) =
        PdfDocument::new("CyberGuardian report", PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut layer = doc.get_page(page).get_layer(layer);

    text(&layer, &bold, 16.0, LEFT_MARGIN, TOP_LINE, "CyberGuardian - Web audit report");
    text(&layer, &regular, 12.0, LEFT_MARGIN, 770.0, &format!("Site: {}", report.url));
    text(
        &layer,
        &regular,
        12.0,
        LEFT_MARGIN,
        750.0,
        &format!("HTTP code: {}", report.status_code),
    );
    text(
        &layer,
        &regular,
        12.0,
        LEFT_MARGIN,
        730.0,
        &format!(
            "Secure connection: {}",
            if report.secure { "Yes" } else { "No" }
        ),
    );
    text(
        &layer,
        &regular,
        12.0,
        LEFT_MARGIN,
        710.0,
        &format!("Global score: {}%", super::format_score(report.score_percent)),
    );

    layer.add_line(Line {
        points: vec![
            (Point::new(pt(LEFT_MARGIN), pt(700.0)), false),
            (Point::new(pt(RIGHT_EDGE), pt(700.0)), false),
        ],
        is_closed: false,
    });

    text(&layer, &bold, 13.0, LEFT_MARGIN, 680.0, "Security header analysis:");

    let mut y = 660.0;
    for finding in &report.security_headers {
        let status = if finding.present { "[OK]" } else { "[MISSING]" };
        text(
            &layer,
            &regular,
            11.0,
            60.0,
            y,
            &format!("{status} {}: {}", finding.name, finding.description),
        );
        y -= HEADER_LINE_STEP;
        if y < BOTTOM_MARGIN {
            let (next_page, next_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_LINE;
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, size: f32, x: f32, y: f32, s: &str) {
    layer.use_text(s, size, pt(x), pt(y), font);
}

/// Download name for a report, e.g. `report_example.com_login.pdf`.
///
/// Drops the `https://` or `http://` prefix. Slashes, quotes, backslashes and
/// control characters become `_` so the name fits a quoted
/// `Content-Disposition` filename.
pub fn report_file_name(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let name: String = stripped
        .chars()
        .map(|c| match c {
            '/' | '"' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("report_{name}.pdf")
}
