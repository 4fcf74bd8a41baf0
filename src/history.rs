//! Bridge traffic log for debugging and diagnostics.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction of a message in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    Request,
    Response,
}

/// One request body or reply, keyed by endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub msg_type: MessageType,
    /// HTTP method and resource path, e.g. `PUT lights/1/state`
    pub endpoint: String,
    pub message: Value,
    /// Seconds since history creation
    pub timestamp: f64,
    /// Round trip of the request a reply answers; `None` for requests.
    pub latency_ms: Option<u64>,
}

/// Tracks bridge traffic for debugging.
///
/// Keeps the last message per endpoint and direction, a bounded log of every
/// entry in order, and counters for things worth a second look: error entries
/// inside bridge replies, failed requests, and the slowest round trip.
#[derive(Debug, Clone)]
pub struct MessageHistory {
    latest: HashMap<(MessageType, String), Value>,
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
    rejected: usize,
    failures: usize,
    last_error: Option<String>,
    slowest: Option<(String, Duration)>,
    start_time: Instant,
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageHistory {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    pub fn new() -> Self {
        Self::with_max_entries(Self::DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            latest: HashMap::new(),
            entries: VecDeque::new(),
            max_entries,
            rejected: 0,
            failures: 0,
            last_error: None,
            slowest: None,
            start_time: Instant::now(),
        }
    }

    /// Records an outgoing request; reads record `null` as the body.
    pub fn record_request(&mut self, endpoint: &str, body: &Value) {
        self.push(MessageType::Request, endpoint, body, None);
    }

    /// Records a reply together with how long the bridge took to send it.
    ///
    /// Error entries inside an array reply (`[{"error": ...}]`) are counted
    /// as rejections even though the HTTP exchange itself succeeded.
    pub fn record_response(&mut self, endpoint: &str, reply: &Value, latency: Duration) {
        self.rejected += reply
            .as_array()
            .map_or(0, |items| items.iter().filter(|i| i.get("error").is_some()).count());

        if self.slowest.as_ref().is_none_or(|(_, d)| latency > *d) {
            self.slowest = Some((endpoint.to_string(), latency));
        }

        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.push(MessageType::Response, endpoint, reply, Some(latency_ms));
    }

    /// Records a request that produced no reply (transport failure or timeout).
    pub fn record_error(&mut self, error: &str) {
        self.failures += 1;
        self.last_error = Some(error.to_string());
    }

    fn push(&mut self, msg_type: MessageType, endpoint: &str, message: &Value, latency_ms: Option<u64>) {
        self.latest
            .insert((msg_type, endpoint.to_string()), message.clone());

        self.entries.push_back(HistoryEntry {
            msg_type,
            endpoint: endpoint.to_string(),
            message: message.clone(),
            timestamp: self.start_time.elapsed().as_secs_f64(),
            latency_ms,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The most recent message of a type sent to or received from an endpoint.
    pub fn latest(&self, msg_type: MessageType, endpoint: &str) -> Option<&Value> {
        self.latest.get(&(msg_type, endpoint.to_string()))
    }

    /// Endpoint and round trip of the slowest reply seen.
    pub fn slowest(&self) -> Option<(&str, Duration)> {
        self.slowest.as_ref().map(|(e, d)| (e.as_str(), *d))
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self {
            start_time: self.start_time,
            ..Self::with_max_entries(self.max_entries)
        };
    }

    pub fn summary(&self) -> HistorySummary {
        let endpoints = |t: MessageType| self.latest.keys().filter(|(k, _)| *k == t).count();
        HistorySummary {
            request_endpoints: endpoints(MessageType::Request),
            response_endpoints: endpoints(MessageType::Response),
            total_entries: self.entries.len(),
            rejected: self.rejected,
            failures: self.failures,
            slowest_endpoint: self.slowest.as_ref().map(|(e, _)| e.clone()),
            slowest_ms: self
                .slowest
                .as_ref()
                .map(|(_, d)| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            last_error: self.last_error.clone(),
        }
    }
}

/// Snapshot of [`MessageHistory`] counters, as reported by `Bridge::diagnostics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    pub request_endpoints: usize,
    pub response_endpoints: usize,
    pub total_entries: usize,
    /// Error entries inside bridge replies
    pub rejected: usize,
    /// Requests that never got a reply
    pub failures: usize,
    pub slowest_endpoint: Option<String>,
    pub slowest_ms: Option<u64>,
    pub last_error: Option<String>,
}
