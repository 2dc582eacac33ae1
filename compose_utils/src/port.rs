use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::split_fields;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposePort {
    pub container_port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
}

impl ComposePort {
    pub fn new(container_port: u16) -> Self {
        Self {
            container_port,
            host_port: None,
            host_ip: None,
        }
    }

    pub fn with_host_port(mut self, host_port: u16) -> Self {
        self.host_port = Some(host_port);
        self
    }

    pub fn with_host_ip(mut self, host_ip: impl Into<String>) -> Self {
        self.host_ip = Some(host_ip.into());
        self
    }
}

impl fmt::Display for ComposePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.host_ip, self.host_port) {
            (Some(ip), Some(host)) => write!(f, "{}:{}:{}", ip, host, self.container_port),
            (Some(ip), None) => write!(f, "{}::{}", ip, self.container_port),
            (None, Some(host)) => write!(f, "{}:{}", host, self.container_port),
            (None, None) => write!(f, "{}", self.container_port),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSpec {
    Valid(ComposePort),
    Unrecognized(String),
}

impl PortSpec {
    pub fn valid(self) -> Option<ComposePort> {
        match self {
            PortSpec::Valid(port) => Some(port),
            PortSpec::Unrecognized(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, PortSpec::Valid(_))
    }
}

/// Parses `container`, `host:container` or `host_ip:host:container`; the
/// field count alone decides which.
pub fn parse_port(spec: &str) -> PortSpec {
    let parsed = match split_fields(spec).as_slice() {
        [container] => container.parse::<u16>().ok().map(ComposePort::new),
        [host, container] => container
            .parse::<u16>()
            .ok()
            .zip(host.parse::<u16>().ok())
            .map(|(container, host)| ComposePort::new(container).with_host_port(host)),
        [ip, host, container] => container
            .parse::<u16>()
            .ok()
            .zip(host.parse::<u16>().ok())
            .map(|(container, host)| {
                let port = ComposePort::new(container).with_host_port(host);
                if ip.is_empty() {
                    port
                } else {
                    port.with_host_ip(*ip)
                }
            }),
        _ => None,
    };

    match parsed {
        Some(port) => PortSpec::Valid(port),
        None => {
            log::debug!("Ignoring unrecognized port specification {:?}", spec);
            PortSpec::Unrecognized(spec.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortBinding {
    #[serde(default)]
    pub host_ip: Option<String>,
    #[serde(default)]
    pub host_port: Option<String>,
}

/// Keyed by `"{port}/{proto}"`. Exposed but unpublished ports map to `None`.
pub type PortMap = BTreeMap<String, Option<Vec<PortBinding>>>;

/// Renders each entry as `container_port:host_ip:host_port`, showing only
/// the first host binding of a port.
///
/// Lines follow the map's key order, which is lexicographic (`"443/tcp"`
/// before `"80/tcp"`), not the order the engine reported.
pub fn format_running_ports(ports: Option<&PortMap>) -> Vec<String> {
    let Some(ports) = ports else {
        return Vec::new();
    };

    ports
        .iter()
        .map(|(key, bindings)| {
            let digits: String = key.chars().filter(char::is_ascii_digit).collect();
            let container_port: u64 = digits.parse().unwrap_or(0);

            let binding = bindings.as_ref().and_then(|b| b.first());
            let host_ip = binding.and_then(|b| b.host_ip.as_deref()).unwrap_or("");
            let host_port = binding.and_then(|b| b.host_port.as_deref()).unwrap_or("");

            format!("{}:{}:{}", container_port, host_ip, host_port)
        })
        .collect()
}
