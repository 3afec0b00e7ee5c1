use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// In-memory TTL cache for fetched rows. A zero TTL disables caching
/// entirely, so every refresh cycle goes back to the network.
#[derive(Debug, Clone)]
pub struct Cache<T> {
    data: Arc<Mutex<HashMap<String, (T, Instant)>>>,
    ttl: Duration,
}

impl<T: Clone> Cache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            data: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        if self.ttl.is_zero() {
            return None;
        }
        let data = self.data.lock().await;
        if let Some((value, stored_at)) = data.get(key) {
            if stored_at.elapsed() < self.ttl {
                return Some(value.clone());
            }
        }
        None
    }

    pub async fn set(&self, key: String, value: T) {
        if self.ttl.is_zero() {
            return;
        }
        let mut data = self.data.lock().await;
        data.insert(key, (value, Instant::now()));
    }
}
