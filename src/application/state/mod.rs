//! Explicit session state and the user-intent dispatch vocabulary.

pub mod intent;
pub mod view_state;

pub use intent::UserIntent;
pub use view_state::{PageView, ViewState, DEFAULT_PAGE_SIZE};
