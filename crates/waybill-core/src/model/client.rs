//! Client record.

use serde::Serialize;

/// One client, keyed by name in the client index.
///
/// Tracks the parcels for which the client appeared as sender and as
/// receiver, in append order. Both lists are append-only and may contain
/// the same parcel id.
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    name: String,
    sent: Vec<u32>,
    received: Vec<u32>,
}

impl Client {
    /// A client with no associated parcels yet.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            sent: Vec::new(),
            received: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parcel ids this client sent, in first-seen order.
    #[must_use]
    pub fn sent(&self) -> &[u32] {
        &self.sent
    }

    /// Parcel ids this client received, in first-seen order.
    #[must_use]
    pub fn received(&self) -> &[u32] {
        &self.received
    }

    pub fn add_sent(&mut self, parcel: u32) {
        self.sent.push(parcel);
    }

    pub fn add_received(&mut self, parcel: u32) {
        self.received.push(parcel);
    }
}

#[cfg(test)]
mod tests {
    use super::Client;

    #[test]
    fn lists_keep_append_order() {
        let mut client = Client::new("n00001".to_string());
        client.add_sent(3);
        client.add_sent(1);
        client.add_received(2);
        assert_eq!(client.sent(), &[3, 1]);
        assert_eq!(client.received(), &[2]);
        assert_eq!(client.name(), "n00001");
    }
}
