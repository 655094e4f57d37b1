use async_trait::async_trait;
use dashmap::DashMap;
use hoplink_core::store::{LinkStore, Result};
use hoplink_core::{LinkRecord, ShortCode};

/// In-memory implementation of [`LinkStore`] using DashMap.
///
/// DashMap's sharded locks allow concurrent lookups without blocking,
/// which keeps the in-memory mode honest about the concurrency contract
/// the MySQL store provides through its pool.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinkStore {
    links: DashMap<String, LinkRecord>,
}

impl InMemoryLinkStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Inserts or replaces a link record.
    ///
    /// Creation is out of scope for the resolution path; this exists for
    /// tests and for seeding the in-memory deployment mode.
    pub fn insert(&self, code: &ShortCode, record: LinkRecord) {
        self.links.insert(code.as_str().to_owned(), record);
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self.links.get(code.as_str()).map(|r| r.value().clone()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    #[tokio::test]
    async fn lookup_present() {
        let store = InMemoryLinkStore::new();
        store.insert(&code("fT7d8Xq"), LinkRecord::new("https://example.com/page"));

        let record = store.lookup(&code("fT7d8Xq")).await.unwrap().unwrap();
        assert_eq!(record.long_url, "https://example.com/page");
        assert_eq!(record.click_count, 0);
    }

    #[tokio::test]
    async fn lookup_absent_is_authoritative_none() {
        let store = InMemoryLinkStore::new();
        assert!(store.lookup(&code("zzzzzzz")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let store = InMemoryLinkStore::new();
        store.insert(&code("abcdefg"), LinkRecord::new("https://example.com"));

        assert!(store.lookup(&code("ABCDEFG")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_replaces() {
        let store = InMemoryLinkStore::new();
        store.insert(&code("abc1234"), LinkRecord::new("https://old.example"));
        store.insert(&code("abc1234"), LinkRecord::new("https://new.example"));

        let record = store.lookup(&code("abc1234")).await.unwrap().unwrap();
        assert_eq!(record.long_url, "https://new.example");
    }
}
