//! Requires side of the compute relation.
//!
//! A compute application uses this crate to publish networking,
//! console, region and volume settings to every connected networking
//! peer, and to collect the SSH keys those peers' units have sent back.
//! The host runtime supplies the connected relations and the flag
//! namespace through the traits in [`host`], and drives the endpoint
//! lifecycle by calling [`Endpoint::handle`] with an [`Event`].
//!
//! ```
//! use compute_requires::{Config, Endpoint, Event, MemoryFlags, MemoryRelation, NetworkOptions};
//!
//! let mut flags = MemoryFlags::new();
//! let mut ep = Endpoint::new(Config::named("compute"), vec![MemoryRelation::new("neutron-api")]);
//! ep.handle(Event::Joined, &mut flags);
//! ep.set_network_data("http://neutron:9696/", &NetworkOptions::default())?;
//! ep.set_region("RegionOne");
//! # Ok::<(), compute_requires::Error>(())
//! ```

mod aggregator;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod host;
pub mod publisher;
pub mod types;

pub use config::Config;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use host::{FlagStore, MemoryFlags, MemoryRelation, Relation, Transport, Unit};
pub use publisher::{send_ssh_keys, NetworkOptions};
pub use types::{Data, Event, SshKeyMap, SshKeyRecord, Value};
