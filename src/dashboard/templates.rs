//! Dashboard page template and view-model builders.

use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::report::pdf::report_file_name;
use crate::report::{format_score, ScoreGrade};
use crate::scanner::SiteReport;
use crate::storage::ScanRecord;

use super::chart::render_score_chart;

pub(crate) const PAGE_TEMPLATE_NAME: &str = "dashboard";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CyberGuardian Dashboard</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; background: #f5f5f5; padding: 20px; }
        .container { max-width: 1100px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h2 { margin-top: 30px; padding-bottom: 8px; border-bottom: 2px solid #3498db; }
        form.scan input[type=text] { width: 70%; padding: 8px; }
        button { padding: 8px 16px; cursor: pointer; }
        .alert { padding: 12px; border-radius: 6px; margin: 12px 0; }
        .alert-error { background: #fdecea; color: #c0392b; }
        .alert-info { background: #eaf2fd; color: #2c3e50; }
        .alert-success { background: #eafaf1; color: #1e8449; }
        .alert-warning { background: #fef5e7; color: #b9770e; }
        .score-track { background: #eeeeee; border-radius: 8px; padding: 3px; }
        .score-fill { height: 22px; border-radius: 6px; text-align: right; padding-right: 8px; color: white; font-weight: bold; box-sizing: border-box; }
        table { width: 100%; border-collapse: collapse; margin: 12px 0; }
        th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background: #34495e; color: white; }
    </style>
</head>
<body>
<div class="container">
    <h1>🛡️ CyberGuardian - Web security analyzer</h1>

    <form class="scan" method="post" action="/scan">
        <label for="url">🌐 URL of the site to scan (e.g. google.com)</label><br>
        <input type="text" id="url" name="url" value="{{input_url}}">
        <button type="submit">🚀 Run scan</button>
    </form>

    {{#if notice}}<div class="alert alert-warning">{{notice}}</div>{{/if}}

    {{#if error}}
    <div class="alert alert-error">❌ Scan failed: {{error}}</div>
    <div class="alert alert-info">💡 Check that the address is correct and reachable (e.g. https://example.com)</div>
    {{/if}}

    {{#if scan}}
    <section>
        <div class="alert alert-success">✅ Scan finished for {{scan.url}}</div>
        <p><strong>HTTP code:</strong> {{scan.status_code}}</p>
        <p><strong>Secure connection:</strong> {{#if scan.secure}}✅ HTTPS{{else}}❌ Not secure{{/if}}</p>

        <h2>🔋 Global security score</h2>
        <div class="score-track">
            <div class="score-fill" style="width: {{scan.score_width}}%; background: {{scan.grade_color}};">{{scan.score}}%</div>
        </div>
        <div style="margin-top:6px; font-weight:600;">Rating: <span style="color: {{scan.grade_color}}">{{scan.grade_label}}</span></div>

        <h2>📋 Detailed report</h2>
        <p>✅ <strong>{{scan.present}}</strong> security headers present</p>
        <p>❌ <strong>{{scan.missing}}</strong> headers missing</p>
        {{#if scan.recommendations}}
        <h3>🧠 Recommendations:</h3>
        <ul>
            {{#each scan.recommendations}}<li>Add <strong>{{name}}</strong> → {{description}}</li>{{/each}}
        </ul>
        {{else}}
        <p>🟢 Every important header is present. Excellent work!</p>
        {{/if}}

        <p><a href="/report.pdf" download="{{scan.pdf_name}}">📄 Download the PDF report</a></p>
    </section>
    {{/if}}

    <h2>📜 Recent scan history</h2>
    {{#if history}}
    <table>
        <thead><tr><th>Site</th><th>Score</th><th>HTTPS</th><th>Date</th></tr></thead>
        <tbody>
        {{#each history}}
            <tr><td>{{url}}</td><td>{{score}}</td><td>{{#if secure}}✅ Yes{{else}}❌ No{{/if}}</td><td>{{date}}</td></tr>
        {{/each}}
        </tbody>
    </table>

    {{#if chart_svg}}
    <h2>📊 Security score over time</h2>
    {{{chart_svg}}}
    {{/if}}

    <form method="post" action="/clear">
        <button type="submit">🧹 Clear history</button>
    </form>
    {{else}}
    <div class="alert alert-info">No scans recorded yet.</div>
    {{/if}}
</div>
</body>
</html>
"#;

/// Builds the template registry with the dashboard page registered.
pub(crate) fn init_templates() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to register dashboard template: {e}"))?;
    Ok(handlebars)
}

/// Everything the page can show besides the history.
#[derive(Debug, Default)]
pub(crate) struct PageContent<'a> {
    pub input_url: &'a str,
    pub scan: Option<&'a SiteReport>,
    pub error: Option<&'a str>,
    pub notice: Option<&'a str>,
}

/// View model for a completed scan.
pub(crate) fn scan_view(report: &SiteReport) -> Value {
    let grade = ScoreGrade::from_score(report.score_percent);
    let present = report.security_headers.present_count();
    let recommendations: Vec<Value> = report
        .security_headers
        .missing()
        .map(|f| json!({ "name": f.name, "description": f.description }))
        .collect();

    json!({
        "url": report.url,
        "status_code": report.status_code,
        "secure": report.secure,
        "score": format_score(report.score_percent),
        "score_width": report.score_percent.clamp(0.0, 100.0),
        "grade_label": grade.label(),
        "grade_color": grade.hex_color(),
        "present": present,
        "missing": report.security_headers.len() - present,
        "recommendations": recommendations,
        "pdf_name": report_file_name(&report.url),
    })
}

/// Renders the full dashboard page.
pub(crate) fn render_page(
    templates: &Handlebars<'static>,
    content: &PageContent<'_>,
    history: &[ScanRecord],
) -> anyhow::Result<String> {
    let data = json!({
        "input_url": content.input_url,
        "scan": content.scan.map(scan_view),
        "error": content.error,
        "notice": content.notice,
        "history": history,
        "chart_svg": render_score_chart(history),
    });
    templates
        .render(PAGE_TEMPLATE_NAME, &data)
        .map_err(|e| anyhow::anyhow!("Failed to render dashboard: {e}"))
}
