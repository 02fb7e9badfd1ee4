//! Collaborator interfaces consumed by the widget
//!
//! The core never touches presentation. It writes the ordered selection to a
//! [`BackingList`] and announces each change through a
//! [`SelectionChangeSink`].

mod backing_list;
mod change_events;

pub use backing_list::{BackingList, FormValueList};
pub use change_events::{JsonChangeSink, NoopChangeSink, SelectionChangeSink};
