//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types the explorer and actions are written against.
//! - `adapters`: OS specific implementations (std::fs, subprocesses, notify).
//! - `bus`: payload-less refresh signal.

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{refresh_channel, RefreshReceiver, RefreshSender};
