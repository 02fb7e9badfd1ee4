use anyhow::Result;
use tracing::warn;

use treeselect::{SelectionDelta, TreeSelectError, TreeSelectResult};

use super::{print_values, CommandContext};

/// Toggles requested on the command line, one list per group
#[derive(Debug, Default)]
pub struct SelectArgs {
    pub check: Vec<String>,
    pub uncheck: Vec<String>,
    pub check_section: Vec<String>,
    pub uncheck_section: Vec<String>,
    pub remove: Vec<String>,
}

pub fn cmd_select(ctx: &mut CommandContext, args: &SelectArgs) -> Result<()> {
    let widget = &mut ctx.widget;
    let initial = widget.selected_records().to_vec();

    for value in &args.check {
        apply(widget.set_leaf(value, true))?;
    }
    for value in &args.uncheck {
        apply(widget.set_leaf(value, false))?;
    }
    for path in &args.check_section {
        apply(widget.set_section_str(path, true))?;
    }
    for path in &args.uncheck_section {
        apply(widget.set_section_str(path, false))?;
    }
    for value in &args.remove {
        apply(widget.remove_selected(value))?;
    }

    if ctx.json {
        let delta = SelectionDelta::between(&initial, widget.selected_records().to_vec());
        println!("{}", serde_json::to_string_pretty(&delta)?);
        Ok(())
    } else {
        print_values(&widget.selected_values(), false)
    }
}

/// Skip unknown targets, abort on everything else
fn apply(result: TreeSelectResult<SelectionDelta>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(err @ TreeSelectError::NotFound { .. }) => {
            warn!("skipping: {}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
