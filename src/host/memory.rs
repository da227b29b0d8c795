use std::collections::BTreeSet;

use log::trace;

use super::{FlagStore, Relation, Unit};
use crate::types::{Data, Value};

/// Relation held entirely in memory.
///
/// Host adapters build one per connection from the runtime's view of
/// the relation, then copy `published()` back out after the endpoint
/// has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRelation {
    application_name: String,
    units: Vec<Unit>,
    to_publish: Data,
}

impl MemoryRelation {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            ..Self::default()
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Drop a unit that has departed. Returns whether it was present.
    pub fn remove_unit(&mut self, unit_name: &str) -> bool {
        let before = self.units.len();
        self.units.retain(|u| u.unit_name != unit_name);
        self.units.len() != before
    }
}

impl Relation for MemoryRelation {
    fn application_name(&self) -> &str {
        &self.application_name
    }

    fn units(&self) -> &[Unit] {
        &self.units
    }

    fn publish(&mut self, key: &str, value: Value) {
        trace!("{}: {} = {}", self.application_name, key, value);
        self.to_publish.insert(key.to_string(), value);
    }

    fn published(&self) -> &Data {
        &self.to_publish
    }
}

/// Flag namespace held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFlags {
    set: BTreeSet<String>,
}

impl MemoryFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }
}

impl FlagStore for MemoryFlags {
    fn set(&mut self, name: &str) {
        self.set.insert(name.to_string());
    }

    fn clear(&mut self, name: &str) {
        self.set.remove(name);
    }

    fn is_set(&self, name: &str) -> bool {
        self.set.contains(name)
    }
}
