// src/storage/memory.rs
use dashmap::DashMap;
use log::debug;
use crate::models::server::{ EndpointKey, ServerRecord };

/// Live server registry. Each key lives in one DashMap shard, so insert,
/// remove and lookup of a single endpoint are atomic under that shard's lock.
pub struct ServerStorage {
    servers: DashMap<EndpointKey, ServerRecord>,
}

impl ServerStorage {
    pub fn new() -> Self {
        Self {
            servers: DashMap::new(),
        }
    }

    /// Inserts or fully replaces the record at its endpoint. Returns the
    /// record it replaced, if any.
    pub fn upsert_server(&self, record: ServerRecord) -> Option<ServerRecord> {
        let key = record.key();
        let previous = self.servers.insert(key.clone(), record);
        match &previous {
            Some(_) => debug!("Replaced server {}", key),
            None => debug!("Registered server {} ({} live)", key, self.len()),
        }
        previous
    }

    pub fn get_server(&self, key: &EndpointKey) -> Option<ServerRecord> {
        self.servers.get(key).map(|r| r.value().clone())
    }

    /// Snapshot of every record. Order is unspecified.
    pub fn get_servers(&self) -> Vec<ServerRecord> {
        self.servers
            .iter()
            .map(|r| r.value().clone())
            .collect()
    }

    pub fn remove_server(&self, key: &EndpointKey) -> Option<ServerRecord> {
        let removed = self.servers.remove(key).map(|(_, record)| record);
        if removed.is_some() {
            debug!("Removed server {}", key);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }
}

impl Default for ServerStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn arena() -> ServerRecord {
        ServerRecord::new("Arena", "10.0.0.1", 7777, 4, true)
    }

    #[test]
    fn upsert_then_get_returns_same_fields() {
        let storage = ServerStorage::new();
        assert!(storage.upsert_server(arena()).is_none());

        let found = storage.get_server(&EndpointKey::new("10.0.0.1", 7777)).unwrap();
        assert_eq!(found, arena());
        assert_eq!(found.ping, 0);
    }

    #[test]
    fn second_upsert_replaces_first() {
        let storage = ServerStorage::new();
        storage.upsert_server(arena());
        let replaced = storage.upsert_server(ServerRecord::new("Arena 2", "10.0.0.1", 7777, 9, false));

        assert_eq!(replaced, Some(arena()));
        assert_eq!(storage.len(), 1);
        let found = storage.get_server(&EndpointKey::new("10.0.0.1", 7777)).unwrap();
        assert_eq!(found.name, "Arena 2");
        assert_eq!(found.player_count, 9);
        assert!(!found.is_dedicated);
    }

    #[test]
    fn same_address_different_port_are_distinct() {
        let storage = ServerStorage::new();
        storage.upsert_server(arena());
        storage.upsert_server(ServerRecord::new("Arena", "10.0.0.1", 7778, 4, true));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let storage = ServerStorage::new();
        storage.upsert_server(arena());
        let key = EndpointKey::new("10.0.0.1", 7777);

        assert_eq!(storage.remove_server(&key), Some(arena()));
        assert!(storage.get_server(&key).is_none());
        assert!(storage.get_servers().is_empty());
    }

    #[test]
    fn delete_unknown_leaves_registry_unchanged() {
        let storage = ServerStorage::new();
        storage.upsert_server(arena());

        assert!(storage.remove_server(&EndpointKey::new("10.0.0.9", 7777)).is_none());
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn list_counts_distinct_keys_minus_deletes() {
        let storage = ServerStorage::new();
        for port in 1000..1010 {
            storage.upsert_server(ServerRecord::new("s", "10.0.0.1", port, 0, false));
        }
        storage.upsert_server(ServerRecord::new("again", "10.0.0.1", 1000, 1, false));
        storage.remove_server(&EndpointKey::new("10.0.0.1", 1001));
        storage.remove_server(&EndpointKey::new("10.0.0.1", 1002));
        storage.remove_server(&EndpointKey::new("10.0.0.1", 4242));

        assert_eq!(storage.get_servers().len(), 8);
    }

    #[test]
    fn concurrent_upserts_to_distinct_keys_are_all_kept() {
        let storage = Arc::new(ServerStorage::new());
        let handles: Vec<_> = (0..8u16)
            .map(|t| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    for i in 0..100u16 {
                        let port = 1 + t * 100 + i;
                        storage.upsert_server(ServerRecord::new("s", "10.0.0.1", port, 0, false));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(storage.len(), 800);
    }

    #[test]
    fn concurrent_upsert_and_delete_leave_whole_record_or_nothing() {
        for _ in 0..50 {
            let storage = Arc::new(ServerStorage::new());
            let key = EndpointKey::new("10.0.0.1", 7777);

            let writer = {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    storage.upsert_server(arena());
                })
            };
            let deleter = {
                let storage = Arc::clone(&storage);
                let key = key.clone();
                thread::spawn(move || {
                    storage.remove_server(&key);
                })
            };
            writer.join().unwrap();
            deleter.join().unwrap();

            match storage.get_server(&key) {
                Some(record) => assert_eq!(record, arena()),
                None => assert_eq!(storage.len(), 0),
            }
        }
    }
}
