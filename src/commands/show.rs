use anyhow::Result;
use serde_json::json;

use treeselect::tree::{Node, Section};
use treeselect::ui::{render_selected_panel, render_status, TreeView};

use super::CommandContext;

pub fn cmd_show(ctx: &CommandContext) -> Result<()> {
    let widget = &ctx.widget;

    if ctx.json {
        let mut sections = Vec::new();
        collect_sections(widget.tree().root(), widget.tree().delimiter(), "", &mut sections);
        let output = json!({
            "ordered": widget.selected_records(),
            "sections": sections,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let view = TreeView::new(widget.tree(), widget.options());
    println!("{}", view.render(widget, ctx.unicode));

    let panel = render_selected_panel(widget.selected_records(), widget.options(), ctx.unicode);
    if !panel.is_empty() {
        println!();
        println!("{}", panel);
    }

    println!();
    println!(
        "{}",
        render_status(widget.engine().selected_count(), widget.engine().total_count())
    );
    Ok(())
}

fn collect_sections(
    section: &Section,
    delimiter: &str,
    prefix: &str,
    out: &mut Vec<serde_json::Value>,
) {
    for child in section.children() {
        if let Node::Section(sub) = child {
            let path = if prefix.is_empty() {
                sub.name().to_string()
            } else {
                format!("{}{}{}", prefix, delimiter, sub.name())
            };
            out.push(json!({
                "path": path,
                "state": sub.state(),
                "checked": sub.checked_count(),
                "total": sub.leaf_count(),
            }));
            collect_sections(sub, delimiter, &path, out);
        }
    }
}
