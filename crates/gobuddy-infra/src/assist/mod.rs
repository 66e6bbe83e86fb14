//! Remote content-assist client.

mod remote;

pub use remote::{RemoteAssistConfig, RemoteContentAssist};
