//! JSON-RPC 2.0 dispatch for a blockchain node.
//!
//! The layers, outermost first:
//!
//! * [`batch`] decides whether a body is a single request or a batch and assembles the output.
//! * [`request`] validates one request object and produces at most one response.
//! * [`Dispatcher`] routes a method name to its handler in [`methods`].
//! * [`jsonrpc`] defines the response envelope and the reserved error codes.

pub use {
    dispatcher::{Dispatcher, DispatcherConfig},
    error::Error,
};

pub mod batch;
pub mod json_utils;
pub mod jsonrpc;
pub mod method_name;
pub mod methods;
pub mod request;

mod dispatcher;
mod error;
