//! Probe engine for `reachr`.
//!
//! * [`network`]: the TCP, HTTP and DNS probe primitives.
//! * [`prober`]: the trait the runner drives them through.
//! * [`runner`]: the ordered run over a [`reachr_common::config::TargetSet`].

pub mod network;
pub mod prober;
pub mod runner;
