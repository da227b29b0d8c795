//! Data structures shared by the endpoint, its publisher and its
//! aggregator.
//!
//! Relation data is a flat string-keyed map of JSON values, matching
//! what the host transport carries between peers.  Values written by
//! the publisher are strings, integers, booleans or null.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use serde_json::Value;

/// Key/value payload of one side of a relation.
pub type Data = BTreeMap<String, Value>;

/// Flag suffix raised once a peer has joined.
pub const CONNECTED: &str = "connected";
/// Flag suffix raised when peer data has changed and should be re-read.
pub const AVAILABLE: &str = "available";

/// Lifecycle condition delivered by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// At least one peer is currently joined.
    Joined,
    /// No peer is currently joined.  Hosts may deliver this repeatedly.
    NotJoined,
    /// Data received from a peer has changed.
    Changed,
}

/// SSH material published by one remote unit.
///
/// Only built when the unit has sent both public keys; the address
/// fields are carried as-is and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKeyRecord {
    pub nova_ssh_pub_key: String,
    pub hostname: Option<String>,
    #[serde(rename = "private-address")]
    pub private_address: Option<String>,
    pub ssh_pub_key: String,
}

/// Application name → unit name → SSH material.
pub type SshKeyMap = BTreeMap<String, BTreeMap<String, SshKeyRecord>>;
