//! Types shared between the probe engine and the command line front end.
//!
//! * [`network::target`]: what gets probed.
//! * [`probe`]: what a probe reports back.
//! * [`report`]: the sink outcomes are handed to.
//! * [`config`]: the target lists and timeouts a run uses.

pub mod config;
pub mod network;
pub mod probe;
pub mod report;
