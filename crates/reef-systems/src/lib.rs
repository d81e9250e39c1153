//! Simulated device subsystems for the Reef OS shell
//!
//! Every "device" here is synthetic: networks, batteries, and nearby
//! transfer targets exist only to drive delayed state transitions with
//! believable latency. Each subsystem owns its own [`reef_sched::Scheduler`]
//! and is advanced by the shell session passing the current time into
//! `tick`; disabling a subsystem drains its scheduler so no transition can
//! fire into torn-down state.

pub mod error;
pub mod network;
pub mod power;
pub mod store;
pub mod transfer;
pub mod volume;

pub use error::{SystemsError, SystemsResult};
pub use network::{WifiNetwork, WifiTray};
pub use power::{PowerMode, PowerTray};
pub use store::{PendingOp, StoreCatalog, StoreEntry};
pub use transfer::{Device, DeviceKind, DeviceStatus, TransferHub};
pub use volume::{VolumeIcon, VolumeTray};
