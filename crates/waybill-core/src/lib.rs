//! waybill-core library.
//!
//! Replays a chronological log of logistics events and answers parcel and
//! client queries against the state accumulated so far. The indexing layer
//! is one generic balanced tree ([`tree::AvlMap`]) instantiated four ways
//! (parcels, clients, events, routes); [`sim::Simulator`] owns the four
//! indices and applies records strictly in log order.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums at the parsing boundary;
//!   operations on the in-memory indices do not fail.
//! - **Logging**: `tracing` macros (`warn!`, `debug!`, `trace!`).

pub mod event;
pub mod index;
pub mod model;
pub mod sim;
pub mod tree;

pub use event::parser::{ParseError, ParsedLine, Record, parse_line};
pub use event::{Event, EventKind};
pub use sim::Simulator;
