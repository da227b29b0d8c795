use log::trace;

use crate::endpoint::Endpoint;
use crate::host::{Relation, Transport, Unit};
use crate::types::{SshKeyMap, SshKeyRecord};

impl<T: Transport> Endpoint<T> {
    /// Collect SSH material sent by remote units.
    ///
    /// Restricted to relations with `application_name` when given.  Each
    /// eligible relation gets an entry, possibly empty; units that have
    /// not sent both public keys yet are left out.  The map is rebuilt
    /// from the current relation data on every call.
    pub fn collect_ssh_keys(&self, application_name: Option<&str>) -> SshKeyMap {
        let mut ssh_keys = SshKeyMap::new();
        for relation in self.transport().relations() {
            let app = relation.application_name();
            if application_name.is_some_and(|wanted| wanted != app) {
                continue;
            }
            let entry = ssh_keys.entry(app.to_string()).or_default();
            for unit in relation.units() {
                match ssh_key_record(unit) {
                    Some(record) => {
                        entry.insert(unit.unit_name.clone(), record);
                    }
                    None => trace!("{}: no ssh keys from {} yet", self.name(), unit.unit_name),
                }
            }
        }
        ssh_keys
    }
}

fn ssh_key_record(unit: &Unit) -> Option<SshKeyRecord> {
    Some(SshKeyRecord {
        nova_ssh_pub_key: unit.received_str("nova_ssh_public_key")?,
        ssh_pub_key: unit.received_str("ssh_public_key")?,
        hostname: unit.received_str("hostname"),
        private_address: unit.received_str("private-address"),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::Config;
    use crate::host::MemoryRelation;
    use crate::types::Data;

    fn unit(name: &str, pairs: &[(&str, &str)]) -> Unit {
        let received: Data = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        Unit::with_received(name, received)
    }

    #[test]
    fn address_fields_are_optional() {
        let rel = MemoryRelation::new("nova-compute").with_unit(unit(
            "nova-compute/0",
            &[("nova_ssh_public_key", "nova"), ("ssh_public_key", "root")],
        ));
        let ep = Endpoint::new(Config::default(), vec![rel]);
        let keys = ep.collect_ssh_keys(None);
        let record = &keys["nova-compute"]["nova-compute/0"];
        assert_eq!(record.hostname, None);
        assert_eq!(record.private_address, None);
        assert_eq!(record.nova_ssh_pub_key, "nova");
        assert_eq!(record.ssh_pub_key, "root");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let rel = MemoryRelation::new("nova-compute").with_unit(unit(
            "nova-compute/0",
            &[("nova_ssh_public_key", ""), ("ssh_public_key", "root")],
        ));
        let ep = Endpoint::new(Config::default(), vec![rel]);
        let keys = ep.collect_ssh_keys(None);
        assert!(keys["nova-compute"].is_empty());
    }

    #[test]
    fn relations_sharing_an_application_merge() {
        let complete = [("nova_ssh_public_key", "nova"), ("ssh_public_key", "root")];
        let first = MemoryRelation::new("nova-compute").with_unit(unit("nova-compute/0", &complete));
        let second = MemoryRelation::new("nova-compute").with_unit(unit("nova-compute/1", &complete));
        let ep = Endpoint::new(Config::default(), vec![first, second]);
        let keys = ep.collect_ssh_keys(None);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys["nova-compute"].len(), 2);
    }

    #[test]
    fn collecting_does_not_touch_relations() {
        let rel = MemoryRelation::new("nova-compute").with_unit(unit("nova-compute/0", &[]));
        let ep = Endpoint::new(Config::default(), vec![rel.clone()]);
        ep.collect_ssh_keys(None);
        ep.collect_ssh_keys(Some("nova-compute"));
        assert_eq!(ep.transport()[0], rel);
    }
}
