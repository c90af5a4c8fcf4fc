pub mod history;
pub mod input;
pub mod session;
pub mod shortcuts;
pub mod tools;

pub use history::History;
pub use session::Session;
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::ToolKind;
