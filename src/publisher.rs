//! Outbound configuration for connected compute peers.
//!
//! Every setter writes the same keys to each connected relation.  With
//! no relations connected a setter does nothing.  Setters are
//! idempotent: repeating a call with the same arguments leaves the
//! published data unchanged.

use log::debug;
use serde_json::json;
use url::{Host, Url};
use uuid::Uuid;

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::host::{Relation, Transport};
use crate::types::{Data, Value};

pub const DEFAULT_NETWORK_PLUGIN: &str = "ovs";
pub const DEFAULT_NETWORK_MANAGER: &str = "neutron";

/// Optional settings for [`Endpoint::set_network_data`].
///
/// Fields are used exactly as given, including empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkOptions {
    /// Networking plugin, `"ovs"` by default.
    pub plugin: String,
    /// Network manager name, `"neutron"` by default.
    pub manager: String,
    pub security_groups: bool,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            plugin: DEFAULT_NETWORK_PLUGIN.into(),
            manager: DEFAULT_NETWORK_MANAGER.into(),
            security_groups: true,
        }
    }
}

impl<T: Transport> Endpoint<T> {
    fn broadcast(&mut self, pairs: &[(&str, Value)]) {
        let name = self.name().to_string();
        for relation in self.transport_mut().relations_mut() {
            debug!(
                "{}: publishing {} key(s) to {}",
                name,
                pairs.len(),
                relation.application_name()
            );
            for (key, value) in pairs {
                relation.publish(key, value.clone());
            }
        }
    }

    /// Send the network API endpoint and networking options.
    ///
    /// Fails only when `network_url` is not an absolute URL.
    pub fn set_network_data(
        &mut self,
        network_url: &str,
        options: &NetworkOptions,
    ) -> Result<()> {
        let url = Url::parse(network_url)?;
        let host = match url.host() {
            Some(Host::Domain(domain)) => json!(domain),
            Some(Host::Ipv4(addr)) => json!(addr.to_string()),
            Some(Host::Ipv6(addr)) => json!(addr.to_string()),
            None => Value::Null,
        };
        let security_groups = if options.security_groups { "yes" } else { "no" };

        self.broadcast(&[
            ("network_host", host),
            ("network_plugin", json!(options.plugin)),
            ("network_port", json!(explicit_port(&url, network_url))),
            ("network_security_groups", json!(security_groups)),
            ("network_url", json!(network_url)),
            ("network_manager", json!(options.manager)),
        ]);
        Ok(())
    }

    /// Send serial console settings.
    pub fn set_console_data(
        &mut self,
        serial_console_base_url: &str,
        enable_serial_console: bool,
    ) {
        self.broadcast(&[
            ("serial_console_base_url", json!(serial_console_base_url)),
            ("enable_serial_console", json!(enable_serial_console)),
        ]);
    }

    /// Ask the remote application to restart its services.
    ///
    /// The remote side restarts whenever `restart_trigger` changes, so
    /// without an explicit key a fresh UUID is sent on every call.
    /// Returns the value written.
    pub fn trigger_remote_restart(&mut self, restart_key: Option<&str>) -> String {
        let key = match restart_key {
            Some(key) => key.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        self.broadcast(&[("restart_trigger", json!(key))]);
        key
    }

    pub fn set_region(&mut self, region: &str) {
        self.broadcast(&[("region", json!(region))]);
    }

    pub fn set_volume_data(&mut self, volume_service: &str) {
        self.broadcast(&[("volume_service", json!(volume_service))]);
    }

    pub fn set_ec2_data(&mut self, ec2_host: &str) {
        self.broadcast(&[("ec2_host", json!(ec2_host))]);
    }
}

/// Publish SSH settings verbatim on a single relation.
pub fn send_ssh_keys<R: Relation>(relation: &mut R, settings: &Data) {
    debug!(
        "publishing {} ssh setting(s) to {}",
        settings.len(),
        relation.application_name()
    );
    for (key, value) in settings {
        relation.publish(key, value.clone());
    }
}

// `Url` drops a port equal to the scheme default, so read it back from
// the authority of the raw input when one was written out.
fn explicit_port(url: &Url, raw: &str) -> Option<u16> {
    if let Some(port) = url.port() {
        return Some(port);
    }
    let rest = raw.split_once("://")?.1;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let port = match host_port.rfind(']') {
        Some(end) => host_port[end + 1..].strip_prefix(':')?,
        None => host_port.rsplit_once(':')?.1,
    };
    port.parse().ok()
}
