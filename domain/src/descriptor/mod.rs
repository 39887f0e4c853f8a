//! Phase results handed back to the host pipeline.
//!
//! | Phase | Descriptor |
//! |-------|------------|
//! | install | [`InstallDescriptor`]: env vars + one-time install commands |
//! | deploy | [`DeployDescriptor`]: env vars + workers + deploy-script patch |

mod deploy;
mod install;
mod patch;

pub use deploy::DeployDescriptor;
pub use install::InstallDescriptor;
pub use patch::{DeployScriptPatch, PatchPlacement};

/// Environment variable carrying the selected queue connection.
pub const QUEUE_CONNECTION_ENV: &str = "QUEUE_CONNECTION";

/// Install command creating the jobs table for the `database` backend.
pub const QUEUE_TABLE_COMMAND: &str = "queue:table";

/// Command that gracefully restarts running queue workers.
pub const QUEUE_RESTART_COMMAND: &str = "queue:restart";
