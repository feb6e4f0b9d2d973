//! Request/response bridge over a delimiter-framed JSON byte stream.
//!
//! This is the process boundary around the namespace, not part of its core
//! logic: each `{id, method, params}` frame maps onto one namespace or
//! snapshot operation, and each reply is a `{id, result}` or `{id, error}`
//! frame.

mod bridge;
mod frame;
mod protocol;

pub use bridge::{Bridge, BridgeError};
pub use protocol::{Request, Response};
