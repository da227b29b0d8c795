//! Contracts with the host orchestration runtime.
//!
//! The host owns event dispatch, the flag namespace and the relation
//! transport; the endpoint only reaches them through these traits.

use crate::types::{Data, Value};

pub mod memory;
pub use memory::{MemoryFlags, MemoryRelation};

/// Process-wide named boolean flags. Flags stay set until cleared.
pub trait FlagStore {
    fn set(&mut self, name: &str);
    fn clear(&mut self, name: &str);
    fn is_set(&self, name: &str) -> bool;
}

/// One live connection to a peer application.
pub trait Relation {
    /// Name of the remote application on the other end.
    fn application_name(&self) -> &str;

    /// Remote units currently part of the connection.
    fn units(&self) -> &[Unit];

    /// Write a key to this peer's outbound data. Last write wins.
    fn publish(&mut self, key: &str, value: Value);

    /// Outbound data written so far.
    fn published(&self) -> &Data;
}

/// The set of relations currently connected to an endpoint.
pub trait Transport {
    type Relation: Relation;

    fn relations(&self) -> &[Self::Relation];
    fn relations_mut(&mut self) -> &mut [Self::Relation];
}

impl<R: Relation> Transport for Vec<R> {
    type Relation = R;

    fn relations(&self) -> &[R] {
        self
    }

    fn relations_mut(&mut self) -> &mut [R] {
        self
    }
}

/// A remote unit and the data it has sent us.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unit {
    pub unit_name: String,
    pub received: Data,
}

impl Unit {
    /// A unit that has not sent anything yet.
    pub fn new(unit_name: impl Into<String>) -> Self {
        Self {
            unit_name: unit_name.into(),
            received: Data::new(),
        }
    }

    pub fn with_received(unit_name: impl Into<String>, received: Data) -> Self {
        Self {
            unit_name: unit_name.into(),
            received,
        }
    }

    /// Received value for `key` as a string, treating null and `""` as unset.
    pub fn received_str(&self, key: &str) -> Option<String> {
        match self.received.get(key)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
