//! Headless board core (state/action/effect).

pub mod action;
pub mod cursor;
pub mod effect;
pub mod prompt;
pub mod services;
pub mod state;
pub mod store;
pub mod timer;

pub use action::Action;
pub use cursor::Cursor;
pub use effect::Effect;
pub use prompt::{Prompt, PromptList};
pub use state::{BoardState, CardFeedback, LoadStatus, NotificationState, ScrollRequest};
pub use store::{DispatchResult, Store};
pub use timer::{Timer, Timings};
