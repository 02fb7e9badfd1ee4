//! Presentation layer
//!
//! Text rendering and the interactive terminal menu. Nothing here changes
//! selection semantics; every mutation goes through [`TreeMultiselect`].
//!
//! - `theme` - Icon sets and colors
//! - `tree_view` - Collapse state, row flattening and tree rendering
//! - `selected_panel` - The ordered selection with remove markers
//! - `terminal` - Capability detection
//! - `interactive` - Key mapping and the raw-mode loop
//!
//! [`TreeMultiselect`]: crate::widget::TreeMultiselect

pub mod interactive;
pub mod selected_panel;
pub mod terminal;
pub mod theme;
pub mod tree_view;

pub use interactive::{key_to_action, render_screen, run_interactive, TreeAction};
pub use selected_panel::{render_selected_panel, render_status};
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Icons;
pub use tree_view::{Row, RowKind, TreeView};
