//! Client index: one record per client name, ordered lexicographically.

use crate::model::Client;
use crate::tree::AvlMap;

/// Owns all client records, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ClientIndex {
    tree: AvlMap<String, Client>,
}

impl ClientIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a client record; rejected if the name is already present.
    pub fn insert(&mut self, client: Client) -> bool {
        self.tree.insert(client.name().to_owned(), client)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Client> {
        self.tree.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Client> {
        self.tree.get_mut(name)
    }

    /// Fetch the client, creating an empty record on first appearance.
    pub fn get_or_insert(&mut self, name: &str) -> &mut Client {
        if self.tree.get(name).is_none() {
            self.tree
                .insert(name.to_owned(), Client::new(name.to_owned()));
        }
        self.tree.get_mut(name).expect("client present after insert")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All clients in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.tree.iter().map(|(_, client)| client)
    }
}

#[cfg(test)]
mod tests {
    use super::ClientIndex;

    #[test]
    fn names_order_lexicographically() {
        let mut index = ClientIndex::new();
        for name in ["n00009", "n00001", "n00005"] {
            index.get_or_insert(name);
        }
        let names: Vec<&str> = index.iter().map(super::Client::name).collect();
        assert_eq!(names, vec!["n00001", "n00005", "n00009"]);
    }

    #[test]
    fn get_or_insert_reuses_the_record() {
        let mut index = ClientIndex::new();
        index.get_or_insert("n00001").add_sent(1);
        index.get_or_insert("n00001").add_received(2);
        assert_eq!(index.len(), 1);
        let client = index.get("n00001").expect("client exists");
        assert_eq!(client.sent(), &[1]);
        assert_eq!(client.received(), &[2]);
    }
}
