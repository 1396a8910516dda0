//! Addresses command handler.
//!
//! Prints the dev-server URLs a developer can open on this host, one per
//! reachable IPv4 interface.

use anyhow::Result;

use bundlerig_core::dev_addresses;

use crate::error::CliError;

/// Execute the addresses command.
pub fn execute(port: u16) -> Result<()> {
    let addresses = dev_addresses().map_err(CliError::from)?;

    if addresses.is_empty() {
        println!("No IPv4 interfaces found.");
        return Ok(());
    }

    for addr in addresses {
        println!("> http://{addr}:{port}");
    }

    Ok(())
}
