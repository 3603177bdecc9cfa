//! Owned records stored by the indices.

mod client;
mod parcel;
mod route;

pub use client::Client;
pub use parcel::Parcel;
pub use route::Route;
