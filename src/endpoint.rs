//! The local side of the compute relation and its lifecycle.
//!
//! Readiness is exposed to the owning application as two flags,
//! `<name>.connected` and `<name>.available`.  The host delivers
//! [`Event`]s to [`Endpoint::handle`], which is the only place flags
//! are touched.  `available` is never cleared here; applications treat
//! a cleared `connected` as the signal to tear down.

use log::{debug, info};

use crate::config::Config;
use crate::host::{FlagStore, Transport};
use crate::types::{Event, AVAILABLE, CONNECTED};

/// The local endpoint: owns its config and the connected relations.
pub struct Endpoint<T: Transport> {
    config: Config,
    transport: T,
}

impl<T: Transport> Endpoint<T> {
    pub fn new(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    /// Relation name flags are expanded with.
    pub fn name(&self) -> &str {
        &self.config.endpoint_name
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The connected relations.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Hand the relations back to the host, e.g. to flush published data.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Expand a flag suffix to `<endpoint name>.<suffix>`.
    pub fn flag_name(&self, suffix: &str) -> String {
        format!("{}.{}", self.config.endpoint_name, suffix)
    }

    /// Whether any peer is currently connected.
    pub fn is_joined(&self) -> bool {
        !self.transport.relations().is_empty()
    }

    /// Apply one lifecycle event to the flag store.
    pub fn handle<F: FlagStore>(&self, event: Event, flags: &mut F) {
        match event {
            Event::Joined => {
                let flag = self.flag_name(CONNECTED);
                if !flags.is_set(&flag) {
                    info!("{}: peer joined", self.name());
                }
                flags.set(&flag);
            }
            Event::NotJoined => {
                let flag = self.flag_name(CONNECTED);
                if flags.is_set(&flag) {
                    info!("{}: no peer joined", self.name());
                }
                flags.clear(&flag);
            }
            Event::Changed if self.config.announce_changes => {
                debug!("{}: relation data changed", self.name());
                flags.set(&self.flag_name(AVAILABLE));
            }
            Event::Changed => {
                debug!(
                    "{}: relation data changed, announcing disabled",
                    self.name()
                );
            }
        }
    }

    /// Derive the joined condition from the current relations and apply it.
    ///
    /// Returns the event that was dispatched.
    pub fn sync<F: FlagStore>(&self, flags: &mut F) -> Event {
        let event = if self.is_joined() {
            Event::Joined
        } else {
            Event::NotJoined
        };
        self.handle(event, flags);
        event
    }
}
