//! Command handlers, one per subcommand.

mod add;
mod interactive;
mod list;
mod misc;
mod remove;
mod search;

pub use add::handle_add;
pub use interactive::handle_menu;
pub use list::handle_list;
pub use misc::handle_completions;
pub use remove::handle_remove;
pub use search::handle_search;
