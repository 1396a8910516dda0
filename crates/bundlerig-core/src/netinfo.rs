//! Host network interface enumeration.
//!
//! Produces the address list printed in compilation-success messages so a
//! developer can open the dev server from any reachable interface. The
//! loopback address is rewritten to `localhost` because that is the form
//! people actually type.

use std::net::{IpAddr, Ipv4Addr};

use tracing::debug;

use crate::error::NetInfoError;

/// Enumerate reachable IPv4 addresses across all host interfaces.
///
/// Addresses appear in interface enumeration order (not sorted), with
/// `127.0.0.1` rewritten to the literal `localhost`. Enumeration failure
/// propagates as an error: the output is advisory-only, and an empty list
/// that masks a real host problem would be worse than a loud failure.
pub fn dev_addresses() -> Result<Vec<String>, NetInfoError> {
    let interfaces = local_ip_address::list_afinet_netifas()
        .map_err(|e| NetInfoError::Enumeration(e.to_string()))?;

    let addresses: Vec<String> = interfaces
        .into_iter()
        .filter_map(|(_name, addr)| match addr {
            IpAddr::V4(v4) if v4 == Ipv4Addr::LOCALHOST => Some("localhost".to_string()),
            IpAddr::V4(v4) => Some(v4.to_string()),
            IpAddr::V6(_) => None,
        })
        .collect();

    debug!(count = addresses.len(), "enumerated dev-server addresses");
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_loopback_is_rewritten() {
        let addresses = dev_addresses().expect("interface enumeration");
        assert!(
            !addresses.iter().any(|a| a == "127.0.0.1"),
            "raw loopback must never appear in the output"
        );
    }

    #[test]
    fn test_addresses_are_ipv4_or_localhost() {
        for addr in dev_addresses().expect("interface enumeration") {
            if addr != "localhost" {
                assert!(
                    addr.parse::<Ipv4Addr>().is_ok(),
                    "unexpected address format: {addr}"
                );
            }
        }
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        // Order may differ if the OS enumerates non-deterministically, so
        // compare as sets.
        let first: BTreeSet<String> = dev_addresses().unwrap().into_iter().collect();
        let second: BTreeSet<String> = dev_addresses().unwrap().into_iter().collect();
        assert_eq!(first, second);
    }
}
