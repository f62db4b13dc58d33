//! Typed views over common payloads, for use with `Pending::json`.
//!
//! Every field is optional; the client itself only ever deals in JSON values.

pub mod hearthis;
pub mod mixcloud;
