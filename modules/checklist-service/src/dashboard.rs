//! Dashboard HTML page handler for the checklist service.

use crate::routes::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use chrono::{Datelike, NaiveDate, Weekday};
use std::sync::Arc;

pub async fn dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let items = state.items.list();
    let history = state.history().summary();
    let completed = items.iter().filter(|i| i.done).count();

    let stats_html = format!(
        r#"<div class="stats">
                <div class="stat"><span class="val">{}</span><span class="lbl">Items</span></div>
                <div class="stat green"><span class="val">{}</span><span class="lbl">Completed</span></div>
                <div class="stat gold"><span class="val">{}</span><span class="lbl">Pending</span></div>
            </div>"#,
        items.len(),
        completed,
        items.len() - completed
    );

    let mut item_rows = String::new();
    for item in &items {
        item_rows.push_str(&format!(
            "<li class=\"{}\">{}<span class=\"when\">{}</span></li>\n",
            if item.done { "done" } else { "open" },
            escape_html(&item.title),
            item.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    if item_rows.is_empty() {
        item_rows = "<li class=\"empty\">Nothing on the list yet.</li>".to_string();
    }

    let mut history_rows = String::new();
    for day in &history {
        let (weekday, numbers) = format_history_title(&day.date)
            .unwrap_or_else(|| (String::new(), day.date.clone()));
        history_rows.push_str(&format!(
            "<tr><td><strong>{}</strong> {}</td><td>{} / {}</td><td>{}</td></tr>\n",
            weekday,
            numbers,
            day.completed,
            day.total,
            escape_html(&day.note),
        ));
    }
    if history_rows.is_empty() {
        history_rows = "<tr><td colspan=\"3\">No history yet.</td></tr>".to_string();
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Checklist</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f4e5e9; color: #3a2a35; padding: 20px; }}
  h1 {{ color: #7d4f72; margin-bottom: 8px; }}
  .meta {{ color: #87545e; font-size: 0.85em; margin-bottom: 20px; }}
  .stats {{ display: flex; gap: 16px; margin-bottom: 24px; flex-wrap: wrap; }}
  .stat {{ background: #fff; border: 1px solid #a86b76; border-radius: 8px; padding: 16px 24px; text-align: center; min-width: 140px; }}
  .stat .val {{ display: block; font-size: 2em; font-weight: bold; color: #7d4f72; }}
  .stat.green .val {{ color: #3f8f50; }}
  .stat.gold .val {{ color: #b78a2e; }}
  .stat .lbl {{ display: block; font-size: 0.85em; color: #87545e; margin-top: 4px; }}
  ul {{ list-style: none; margin-bottom: 24px; }}
  li {{ background: #fff; border-bottom: 1px solid #f4ecd8; padding: 8px 12px; }}
  li.done {{ text-decoration: line-through; color: #926d24; }}
  li .when {{ float: right; color: #a86b76; font-size: 0.8em; }}
  table {{ width: 100%; border-collapse: collapse; margin-bottom: 24px; background: #fff; }}
  th {{ background: #643d5b; color: #f4ecd8; text-align: left; padding: 8px 12px; font-size: 0.85em; text-transform: uppercase; }}
  td {{ padding: 8px 12px; border-bottom: 1px solid #f4e5e9; font-size: 0.9em; }}
  h2 {{ color: #643d5b; margin-bottom: 12px; font-size: 1.1em; }}
  .section {{ margin-bottom: 28px; }}
</style>
</head>
<body>
  <h1>Checklist</h1>
  <p class="meta">Uptime: {uptime_str}</p>

  {stats_html}

  <div class="section">
    <h2>Items</h2>
    <ul>{item_rows}</ul>
  </div>

  <div class="section">
    <h2>Historial</h2>
    <table>
      <thead><tr><th>Day</th><th>Done</th><th>Note</th></tr></thead>
      <tbody>{history_rows}</tbody>
    </table>
  </div>

  <script>setTimeout(() => location.reload(), 30000);</script>
</body>
</html>"#,
        uptime_str = format_uptime(state.start_time.elapsed().as_secs()),
        stats_html = stats_html,
        item_rows = item_rows,
        history_rows = history_rows,
    );

    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html)
}

/// Splits a `YYYY-MM-DD` key into a capitalized Spanish weekday and `DD / MM / YY`.
fn format_history_title(date: &str) -> Option<(String, String)> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let weekday = match parsed.weekday() {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    };
    Some((weekday.to_string(), parsed.format("%d / %m / %y").to_string()))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history_title() {
        assert_eq!(
            format_history_title("2025-10-06"),
            Some(("Lunes".to_string(), "06 / 10 / 25".to_string()))
        );
        assert_eq!(
            format_history_title("2024-12-28"),
            Some(("Sábado".to_string(), "28 / 12 / 24".to_string()))
        );
        assert_eq!(format_history_title("2025-02-30"), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#39;chips&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(5), "5s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(3725), "1h 2m 5s");
    }
}
