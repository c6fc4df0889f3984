//! Console rendering of check reports

use console::Style;
use formar::Reporter;

/// Render a per-check console report with a closing summary line.
#[must_use]
pub fn render_console(reporter: &Reporter, use_color: bool) -> String {
    let green = styled(Style::new().green(), use_color);
    let red = styled(Style::new().red(), use_color);
    let dim = styled(Style::new().dim(), use_color);

    let mut out = String::new();
    for entry in reporter.entries() {
        if entry.status.is_passed() {
            out.push_str(&format!("  {} {}\n", green.apply_to("✓"), entry.name));
        } else {
            out.push_str(&format!("  {} {}", red.apply_to("✗"), entry.name));
            if let Some(message) = &entry.message {
                out.push_str(&format!(": {}", dim.apply_to(message)));
            }
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&reporter.summary());
    out.push('\n');
    out
}

/// Render the summary line only (quiet mode).
#[must_use]
pub fn render_summary(reporter: &Reporter) -> String {
    let mut out = reporter.summary();
    out.push('\n');
    out
}

fn styled(style: Style, use_color: bool) -> Style {
    if use_color {
        style.force_styling(true)
    } else {
        Style::new()
    }
}
