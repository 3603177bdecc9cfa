//! The replay simulator: four indices and the queries composed over them.

use crate::event::parser::Record;
use crate::event::{Event, EventKind};
use crate::index::{ClientIndex, EventIndex, ParcelIndex, RouteIndex};
use crate::model::Route;
use crate::tree::AvlMap;

/// Reply to one query record.
#[derive(Debug)]
pub enum QueryReply<'a> {
    /// Full history of one parcel, ascending time order.
    ParcelHistory {
        /// Query timestamp, echoed in the output header.
        time: i64,
        /// The queried parcel id.
        parcel: u32,
        /// Matching events, ascending.
        events: Vec<&'a Event>,
    },
    /// First/last events of every parcel the client sent or received.
    ClientSummary {
        /// Query timestamp, echoed in the output header.
        time: i64,
        /// The queried client name.
        client: String,
        /// Collected events, deduplicated, ascending.
        events: Vec<&'a Event>,
    },
}

/// Replays log records against four in-memory indices.
///
/// Events are owned by the event index; parcels, clients and routes hold
/// only lookup keys into it. Queries are pure reads over the state
/// accumulated so far — there is no look-ahead.
#[derive(Debug, Default)]
pub struct Simulator {
    events: EventIndex,
    parcels: ParcelIndex,
    clients: ClientIndex,
    routes: RouteIndex,
}

impl Simulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one parsed record: ingest an event (no reply) or answer a
    /// query against the state accumulated so far.
    pub fn apply(&mut self, record: Record) -> Option<QueryReply<'_>> {
        match record {
            Record::Event(event) => {
                self.ingest(event);
                None
            }
            Record::ParcelQuery { time, parcel } => Some(QueryReply::ParcelHistory {
                time,
                parcel,
                events: self.parcel_history(parcel),
            }),
            Record::ClientQuery { time, client } => {
                let events = self.client_summary(&client);
                Some(QueryReply::ClientSummary {
                    time,
                    client,
                    events,
                })
            }
        }
    }

    /// Ingest one event, updating every index that observes it.
    pub fn ingest(&mut self, event: Event) {
        let parcel_id = event.parcel;
        let order_key = event.order_key();

        if event.kind == EventKind::TransferRoute {
            if let (Some(origin), Some(destination)) = (event.origin, event.destination) {
                self.routes.record(origin, destination);
            }
        }

        if event.kind == EventKind::Register {
            if let Some(sender) = event.sender.as_deref() {
                self.clients.get_or_insert(sender).add_sent(parcel_id);
            }
            if let Some(receiver) = event.receiver.as_deref() {
                self.clients.get_or_insert(receiver).add_received(parcel_id);
            }
        }

        self.events.insert(event);
        self.parcels.get_or_insert(parcel_id).record_event(order_key);
    }

    /// Full history of `parcel`: every indexed event for it, ascending.
    ///
    /// Deliberately a linear scan over the whole event index rather than a
    /// per-parcel index; the result set and its order are the contract.
    #[must_use]
    pub fn parcel_history(&self, parcel: u32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.parcel == parcel)
            .collect()
    }

    /// First and last event of every parcel `name` sent or received,
    /// deduplicated, ascending.
    ///
    /// The candidate order keys go through a fresh temporary tree, so a
    /// parcel whose first and last event coincide contributes once and the
    /// final traversal yields time order.
    #[must_use]
    pub fn client_summary(&self, name: &str) -> Vec<&Event> {
        let Some(client) = self.clients.get(name) else {
            return Vec::new();
        };

        let mut picked: AvlMap<i64, &Event> = AvlMap::new();
        for &parcel_id in client.sent().iter().chain(client.received()) {
            let Some(parcel) = self.parcels.get(parcel_id) else {
                continue;
            };
            for order_key in [parcel.first_event(), parcel.last_event()]
                .into_iter()
                .flatten()
            {
                if let Some(event) = self.events.get(order_key) {
                    picked.insert(order_key, event);
                }
            }
        }
        picked.iter().map(|(_, event)| *event).collect()
    }

    /// Routes by descending traversal count (see [`RouteIndex::ranked`]).
    #[must_use]
    pub fn ranked_routes(&self) -> Vec<&Route> {
        self.routes.ranked()
    }

    /// The event index, owning every ingested event.
    #[must_use]
    pub fn events(&self) -> &EventIndex {
        &self.events
    }

    #[must_use]
    pub fn parcels(&self) -> &ParcelIndex {
        &self.parcels
    }

    #[must_use]
    pub fn clients(&self) -> &ClientIndex {
        &self.clients
    }

    #[must_use]
    pub fn routes(&self) -> &RouteIndex {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::Simulator;
    use crate::event::{Event, EventKind};

    fn register(time: i64, parcel: u32, sender: &str, receiver: &str) -> Event {
        Event {
            time,
            kind: EventKind::Register,
            parcel,
            sender: Some(sender.to_string()),
            receiver: Some(receiver.to_string()),
            origin: Some(1),
            destination: Some(2),
            section: None,
        }
    }

    fn transfer(time: i64, parcel: u32, origin: u32, destination: u32) -> Event {
        Event {
            time,
            kind: EventKind::TransferRoute,
            parcel,
            sender: None,
            receiver: None,
            origin: Some(origin),
            destination: Some(destination),
            section: None,
        }
    }

    #[test]
    fn ingest_creates_parcel_and_clients() {
        let mut sim = Simulator::new();
        sim.ingest(register(1, 0, "n00001", "n00002"));

        assert_eq!(sim.parcels().len(), 1);
        assert_eq!(sim.clients().len(), 2);
        let sender = sim.clients().get("n00001").expect("sender exists");
        assert_eq!(sender.sent(), &[0]);
        assert!(sender.received().is_empty());
        let receiver = sim.clients().get("n00002").expect("receiver exists");
        assert_eq!(receiver.received(), &[0]);
    }

    #[test]
    fn non_register_events_do_not_touch_clients() {
        let mut sim = Simulator::new();
        sim.ingest(transfer(1, 0, 1, 2));
        assert_eq!(sim.parcels().len(), 1);
        assert!(sim.clients().is_empty());
    }

    #[test]
    fn first_and_last_event_keys_track_ingestion() {
        let mut sim = Simulator::new();
        let first = register(1, 7, "a", "b");
        let second = transfer(9, 7, 1, 2);
        let first_key = first.order_key();
        let second_key = second.order_key();
        sim.ingest(first);
        sim.ingest(second);

        let parcel = sim.parcels().get(7).expect("parcel exists");
        assert_eq!(parcel.first_event(), Some(first_key));
        assert_eq!(parcel.last_event(), Some(second_key));
    }

    #[test]
    fn transfer_events_count_route_traversals() {
        let mut sim = Simulator::new();
        sim.ingest(transfer(1, 0, 1, 2));
        sim.ingest(transfer(2, 1, 1, 2));
        sim.ingest(transfer(3, 2, 3, 4));

        assert_eq!(sim.routes().get(1, 2).map(|route| route.count), Some(2));
        assert_eq!(sim.routes().get(3, 4).map(|route| route.count), Some(1));
        let ranked = sim.ranked_routes();
        assert_eq!((ranked[0].origin, ranked[0].destination), (1, 2));
    }

    #[test]
    fn colliding_events_keep_the_first_and_resolve_refs_to_it() {
        let mut sim = Simulator::new();
        sim.ingest(transfer(5, 1, 1, 2));
        sim.ingest(transfer(5, 1, 3, 4));

        assert_eq!(sim.events().len(), 1);
        let parcel = sim.parcels().get(1).expect("parcel exists");
        let last = parcel.last_event().expect("last key set");
        let resolved = sim.events().get(last).expect("key resolves");
        assert_eq!(resolved.origin, Some(1));
    }

    #[test]
    fn history_of_unknown_parcel_is_empty() {
        let mut sim = Simulator::new();
        sim.ingest(register(1, 0, "a", "b"));
        assert!(sim.parcel_history(99).is_empty());
    }

    #[test]
    fn summary_of_unknown_client_is_empty() {
        let sim = Simulator::new();
        assert!(sim.client_summary("nobody").is_empty());
    }
}
