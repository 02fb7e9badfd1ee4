//! Keyboard input handling and interactive loop.
//!
//! Maps key events to [`TreeAction`]s, applies them to a widget through its
//! [`TreeView`], and drives the raw-mode terminal loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::style::Stylize;

use crate::error::TreeSelectResult;
use crate::selection::SelectionDelta;
use crate::widget::TreeMultiselect;

use super::selected_panel::{render_selected_panel, render_status};
use super::theme::{colors, Icons};
use super::tree_view::{RowKind, TreeView};

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle the row under the cursor
    Toggle,
    /// Expand section
    Expand,
    /// Collapse section, or jump to the parent of a leaf
    Collapse,
    SelectAll,
    SelectNone,
    Invert,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Char('i') => Some(TreeAction::Invert),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

impl TreeView {
    /// Apply one action
    ///
    /// Navigation returns `Ok(None)`; selection changes return the delta of
    /// the widget mutation. Confirm and Quit are left to the caller.
    pub fn handle_action(
        &mut self,
        widget: &mut TreeMultiselect,
        action: TreeAction,
    ) -> TreeSelectResult<Option<SelectionDelta>> {
        let rows = self.flatten(widget.tree());
        let current = rows.get(self.cursor);

        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            TreeAction::Down => {
                if self.cursor + 1 < rows.len() {
                    self.cursor += 1;
                }
            }
            TreeAction::Toggle => match current.map(|row| &row.kind) {
                Some(RowKind::Section { path, .. }) => {
                    return widget.toggle_section(path).map(Some);
                }
                Some(RowKind::Leaf { value, .. }) => {
                    return widget.toggle_leaf(value).map(Some);
                }
                None => {}
            },
            TreeAction::Expand => {
                if let Some(RowKind::Section { path, .. }) = current.map(|row| &row.kind) {
                    self.expand(path);
                }
            }
            TreeAction::Collapse => match current {
                Some(row) => match &row.kind {
                    RowKind::Section { path, .. } => {
                        self.collapse(path);
                    }
                    RowKind::Leaf { .. } => {
                        // jump to the enclosing section row
                        if let Some(parent) = rows[..self.cursor]
                            .iter()
                            .rposition(|r| r.depth < row.depth)
                        {
                            self.cursor = parent;
                        }
                    }
                },
                None => {}
            },
            TreeAction::SelectAll => return widget.select_all().map(Some),
            TreeAction::SelectNone => return widget.select_none().map(Some),
            TreeAction::Invert => return widget.invert().map(Some),
            TreeAction::Confirm | TreeAction::Quit => {}
        }

        self.clamp_cursor(widget);
        Ok(None)
    }

    fn clamp_cursor(&mut self, widget: &TreeMultiselect) {
        let len = self.flatten(widget.tree()).len();
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Render the full interactive screen
pub fn render_screen(
    view: &TreeView,
    widget: &TreeMultiselect,
    unicode: bool,
    message: Option<&str>,
) -> String {
    let icons = Icons::new(unicode);
    let rule = icons.rule.repeat(40);
    let mut out = Vec::new();

    out.push(view.render_with_cursor(widget, unicode));
    out.push(rule.clone());

    let panel = render_selected_panel(widget.selected_records(), widget.options(), unicode);
    if !panel.is_empty() {
        out.push(panel);
        out.push(rule);
    }

    out.push(render_status(
        widget.engine().selected_count(),
        widget.engine().total_count(),
    ));
    if let Some(message) = message {
        out.push(message.with(colors::ERROR).to_string());
    }
    out.push(render_help_bar().with(colors::DIM).to_string());
    out.join("\n")
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All    [n] None    [i] Invert    [Enter] Confirm    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
    )
}

/// Raw mode with a hidden cursor, undone on drop
///
/// Early returns from the event loop still leave a usable terminal.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(mut out: W) -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        if let Err(err) = crossterm::execute!(out, crossterm::cursor::Hide) {
            let _ = crossterm::terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.out, crossterm::cursor::Show);
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Run the tree menu interactively
///
/// Returns the ordered selected values if confirmed, `None` if quit.
pub fn run_interactive(
    widget: &mut TreeMultiselect,
    view: &mut TreeView,
    unicode: bool,
) -> io::Result<Option<Vec<String>>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    let mut guard = TerminalGuard::enter(io::stdout())?;

    let draw = |stdout: &mut io::Stdout,
                view: &TreeView,
                widget: &TreeMultiselect,
                message: Option<&str>|
     -> io::Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for line in render_screen(view, widget, unicode, message).lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()
    };

    draw(&mut guard.out, view, widget, None)?;

    let result = loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key) {
            Some(TreeAction::Confirm) => break Some(widget.selected_values()),
            Some(TreeAction::Quit) => break None,
            Some(action) => {
                let message = view
                    .handle_action(widget, action)
                    .err()
                    .map(|e| e.to_string());
                draw(&mut guard.out, view, widget, message.as_deref())?;
            }
            None => {}
        }
    };

    execute!(guard.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    drop(guard);

    Ok(result)
}
