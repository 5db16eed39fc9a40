//! System network status via sysinfo.

use std::net::IpAddr;

use sysinfo::Networks;
use tracing::debug;
use voltshell_core::NetworkAvailability;
use voltshell_core::ports::NetworkStatusPort;

/// Reports `Available` when any interface carries a routable address.
///
/// Interfaces are re-enumerated on every call; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNetworkStatus;

impl SystemNetworkStatus {
    pub const fn new() -> Self {
        Self
    }
}

impl NetworkStatusPort for SystemNetworkStatus {
    fn availability(&self) -> NetworkAvailability {
        let networks = Networks::new_with_refreshed_list();
        let connected = networks
            .list()
            .iter()
            .filter(|(_, data)| data.ip_networks().iter().any(|net| is_routable(net.addr)))
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>();

        debug!(interfaces = ?connected, "Queried network interfaces");
        NetworkAvailability::from(!connected.is_empty())
    }
}

/// Loopback, unspecified and link-local addresses don't count as connectivity.
pub(crate) fn is_routable(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => !(v4.is_loopback() || v4.is_unspecified() || v4.is_link_local()),
        IpAddr::V6(v6) => {
            let link_local = (v6.segments()[0] & 0xffc0) == 0xfe80;
            !(v6.is_loopback() || v6.is_unspecified() || link_local)
        }
    }
}
