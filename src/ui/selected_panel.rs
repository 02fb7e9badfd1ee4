//! Selected-items panel
//!
//! Lists the ordered output with a remove marker per item and, optionally,
//! the section each item lives in.

use unicode_width::UnicodeWidthStr;

use crate::config::Options;
use crate::selection::SelectionRecord;

use super::theme::Icons;

/// Render the ordered selection, one item per line
///
/// Returns an empty string when the panel is hidden.
pub fn render_selected_panel(records: &[SelectionRecord], options: &Options, unicode: bool) -> String {
    if options.hide_side_panel {
        return String::new();
    }

    let icons = Icons::new(unicode);
    let label_width = records
        .iter()
        .map(|r| UnicodeWidthStr::width(r.label.as_str()))
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|record| {
            let mut line = String::new();
            if !options.freeze {
                line.push_str(icons.remove);
                line.push(' ');
            }
            line.push_str(&record.label);
            if options.show_section_on_selected && !record.section_path.is_empty() {
                let pad = label_width - UnicodeWidthStr::width(record.label.as_str());
                line.push_str(&" ".repeat(pad + 2));
                line.push_str(&record.section_path);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line selection summary, e.g. `Selected: 2/5`
pub fn render_status(selected: usize, total: usize) -> String {
    format!("Selected: {}/{}", selected, total)
}
