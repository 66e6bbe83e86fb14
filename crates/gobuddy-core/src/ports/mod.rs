//! Ports - the traits infrastructure adapters implement.
//! The domain layer sees nothing below these seams.

mod assist;
mod locate;
mod storage;

pub use assist::{AssistError, ContentAssist};
pub use locate::{LocateError, Locator};
pub use storage::{KeyValueStore, KvError};
