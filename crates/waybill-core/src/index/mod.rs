//! The four index specializations over [`AvlMap`](crate::tree::AvlMap).

mod clients;
mod events;
mod parcels;
mod routes;

pub use clients::ClientIndex;
pub use events::EventIndex;
pub use parcels::ParcelIndex;
pub use routes::RouteIndex;
