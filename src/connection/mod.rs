// src/connection/mod.rs

//! Connection lifecycle: the transport boundary to the store and the manager
//! that keeps one lazily-established link per client.

// Declare the private sub-modules of the `connection` module.
mod manager;
mod transport;

// Publicly re-export the primary types from the sub-modules.
pub use manager::ConnectionManager;
pub use transport::{RespTransport, StoreConnector, StoreTransport, TcpConnector};
