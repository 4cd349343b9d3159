//! Backend for a towing and roadside-assistance dispatch operation.
//!
//! The interesting piece lives in [`dispatch`]: matching tow-truck operators
//! to a requested city and flagging, per operator, which of their trucks the
//! operator's driving-license category legally permits. Everything around it
//! (configuration, telemetry, the HTTP surface) is conventional service
//! plumbing.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod telemetry;
