use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use treeselect::ui::{run_interactive, TreeView};

use super::{print_values, CommandContext};

pub fn cmd_interactive(ctx: &mut CommandContext) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("interactive mode needs a terminal; use `treeselect select` instead");
    }

    let mut view = TreeView::new(ctx.widget.tree(), ctx.widget.options());
    match run_interactive(&mut ctx.widget, &mut view, ctx.unicode)? {
        Some(values) => print_values(&values, ctx.json),
        None => Ok(()),
    }
}
