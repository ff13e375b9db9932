use crate::adapters::outbound::console::counter::{
    transition_frames, TRANSITION_DURATION, TRANSITION_STEPS,
};
use crate::alert_view::domain::{badge_style, AlertRecord};
use crate::alert_view::services::SummaryCounts;
use crate::application::state::PageView;
use crate::ports::outbound::RenderSurface;
use chrono::Local;
use owo_colors::OwoColorize;
use std::io::Write;

/// ConsoleRenderer adapter - projects dashboard state onto the terminal.
///
/// Implements the RenderSurface port. Every render call prints a complete
/// replacement for its region, so repeating a render yields identical
/// output. The counter animation lives entirely here and never feeds back
/// into application state.
pub struct ConsoleRenderer {
    animate: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self { animate: true }
    }

    /// Disables the counter animation (tests, non-interactive sessions).
    pub fn with_animation(animate: bool) -> Self {
        Self { animate }
    }

    fn summary_line(counts: &SummaryCounts) -> String {
        format!(
            "Total: {:<6} High: {:<6} Medium: {:<6} Low: {:<6}",
            counts.total, counts.high, counts.medium, counts.low
        )
    }

    /// Replays the bounded-duration transition for all four counters.
    /// Each counter interpolates independently; the final frame shows the
    /// exact target values.
    fn animate_summary(&self, counts: &SummaryCounts) {
        let totals = transition_frames(counts.total, TRANSITION_STEPS);
        let highs = transition_frames(counts.high, TRANSITION_STEPS);
        let mediums = transition_frames(counts.medium, TRANSITION_STEPS);
        let lows = transition_frames(counts.low, TRANSITION_STEPS);
        let pause = TRANSITION_DURATION / TRANSITION_STEPS as u32;

        for frame in 0..TRANSITION_STEPS {
            let line = Self::summary_line(&SummaryCounts {
                total: totals[frame],
                high: highs[frame],
                medium: mediums[frame],
                low: lows[frame],
            });
            print!("\r{}", line);
            let _ = std::io::stdout().flush();
            std::thread::sleep(pause);
        }
        println!();
    }

    fn severity_badge(severity: &str) -> String {
        let text = format!("{:<10}", truncate(severity, 10));
        match badge_style(severity) {
            Some("severity-critical") => text.bright_red().bold().to_string(),
            Some("severity-high") => text.red().to_string(),
            Some("severity-medium") => text.yellow().to_string(),
            Some("severity-low") => text.green().to_string(),
            _ => text,
        }
    }

    fn table_header() -> String {
        format!(
            "{:>4}  {:<28} {:<10} {:<16} {:<15} {:<22} {:<12} {:<19}",
            "#", "RULE", "SEVERITY", "USER", "SOURCE IP", "EVENT", "REGION", "TIME"
        )
    }

    fn table_row(row: usize, alert: &AlertRecord) -> String {
        format!(
            "{:>4}  {:<28} {} {:<16} {} {:<22} {:<12} {:<19}",
            row,
            truncate(&alert.rule, 28),
            Self::severity_badge(&alert.severity),
            truncate(&alert.user, 16),
            // Styled as interactive text, matching the source-IP pivot affordance
            format!("{:<15}", truncate(&alert.source_ip, 15)).underline(),
            truncate(&alert.event_name, 22),
            truncate(&alert.aws_region, 12),
            truncate(&alert.event_time, 19),
        )
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for ConsoleRenderer {
    fn render_summary(&self, counts: &SummaryCounts) {
        println!();
        if self.animate {
            self.animate_summary(counts);
        } else {
            println!("{}", Self::summary_line(counts));
        }
        println!("Last updated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    }

    fn render_table(&self, view: &PageView<'_>) {
        println!();
        println!("{}", Self::table_header().bold());
        if view.records.is_empty() {
            println!("      No alerts found.");
            return;
        }
        for (offset, alert) in view.records.iter().enumerate() {
            println!("{}", Self::table_row(offset + 1, alert));
        }
        println!("      (type 'details N' to inspect a row)");
    }

    fn render_pagination(&self, view: &PageView<'_>) {
        if !view.has_data() {
            println!("No alerts to display.");
            return;
        }

        let mut buttons = Vec::new();
        let (first, last) = view.window;
        for page in first..=last {
            if page == view.page {
                buttons.push(format!("[{}]", page).bold().to_string());
            } else {
                buttons.push(format!(" {} ", page));
            }
        }

        let prev = if view.prev_enabled() { "prev" } else { "----" };
        let next = if view.next_enabled() { "next" } else { "----" };
        println!(
            "Showing {}-{} of {}   {} {} {}",
            view.start + 1,
            view.end,
            view.total,
            prev,
            buttons.join(""),
            next
        );
    }

    fn render_zero_state(&self) {
        println!();
        println!("{}", Self::summary_line(&SummaryCounts::default()));
        println!();
        println!("{}", Self::table_header().bold());
        println!("      No scans run yet. Run 'scan' or 'scan cloud' to start.");
        println!("No alerts - run a scan to see results.");
    }

    fn render_detail(&self, alert: &AlertRecord) {
        println!();
        println!("{}", "=== Alert details ===".bold());

        // Show the raw underlying event when present, the whole record
        // otherwise, matching what the backend stores for the alert
        let payload = match &alert.raw_event {
            Some(raw) => serde_json::to_string_pretty(raw),
            None => serde_json::to_string_pretty(alert),
        };
        match payload {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("(payload not displayable)"),
        }

        if let Some(playbook) = &alert.playbook {
            println!();
            println!("{}", playbook.title.bold());
            println!("Risk: {}", playbook.risk);
            println!();
            println!("Recommended Actions:");
            for (index, action) in playbook.actions.iter().enumerate() {
                println!("{}. {}", index + 1, action);
            }
        }
        println!("{}", "=====================".bold());
    }

    fn close_detail(&self) {
        println!("(details closed)");
    }

    fn render_notice(&self, message: &str) {
        println!("{}", message);
    }

    fn render_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Clips a value to the column width, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let clipped: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", clipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::ViewState;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
    }

    #[test]
    fn test_truncate_long_text_clipped() {
        assert_eq!(truncate("abcdefghijk", 10), "abcdefg...");
        assert_eq!(truncate("abcdefghijk", 10).chars().count(), 10);
    }

    #[test]
    fn test_renderer_does_not_panic() {
        // Output goes to stdout; verify the full surface renders cleanly
        let renderer = ConsoleRenderer::with_animation(false);
        let mut state = ViewState::new(5);
        state.replace_alerts(vec![
            AlertRecord {
                rule: "Root Account Activity".to_string(),
                severity: "Critical".to_string(),
                ..Default::default()
            },
            AlertRecord {
                severity: "nonsense".to_string(),
                ..Default::default()
            },
        ]);

        renderer.render_zero_state();
        renderer.render_summary(&state.summary());
        let view = state.page_view();
        renderer.render_table(&view);
        renderer.render_pagination(&view);
        renderer.render_detail(&state.alerts()[0]);
        renderer.close_detail();
        renderer.render_notice("notice");
        renderer.render_error("error");
    }

    #[test]
    fn test_pagination_no_data_message() {
        let renderer = ConsoleRenderer::with_animation(false);
        let state = ViewState::new(5);
        renderer.render_pagination(&state.page_view());
    }
}
