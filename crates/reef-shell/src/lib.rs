//! Reef OS shell session
//!
//! Composes the desktop window layer and the simulated device subsystems
//! into a single session with a power lifecycle. The session is advanced
//! by passing the current time into [`ShellSession::tick`]; nothing here
//! reads a real clock.

pub mod apps;
pub mod clock;
pub mod content;
pub mod error;
pub mod session;
pub mod snapshot;

pub use apps::AppId;
pub use clock::ClockConfig;
pub use content::{ContentProvider, LaunchRequests};
pub use error::{ShellError, ShellResult};
pub use session::{ShellSession, SystemPower, BOOT_MS, RESTART_GAP_MS};
pub use snapshot::SessionSnapshot;
