// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Gateway endpoints

use crate::consts::{CONFIG_CREATION_TIMESTAMP_KEY, LABEL_ENDPOINT_CANDIDATE};
use crate::node::{NodeIpError, node_label, node_name, public_ip_label};
use k8s_openapi::api::core::v1::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

#[allow(unused)]
use tracing::{debug, error, warn};

/// Port exposed by a tunnel server by default
pub const DEFAULT_TUNNEL_SERVER_EXPOSED_PORT: u16 = 4500;
/// Port exposed by a proxy server by default
pub const DEFAULT_PROXY_SERVER_EXPOSED_PORT: u16 = 10262;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointType {
    Proxy,
    Tunnel,
}

impl EndpointType {
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            EndpointType::Proxy => DEFAULT_PROXY_SERVER_EXPOSED_PORT,
            EndpointType::Tunnel => DEFAULT_TUNNEL_SERVER_EXPOSED_PORT,
        }
    }
}

impl Display for EndpointType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndpointType::Proxy => write!(f, "proxy"),
            EndpointType::Tunnel => write!(f, "tunnel"),
        }
    }
}

/// A node acting as one of the endpoints of a gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub node_name: String,
    /// Public address as written in the node label, not re-formatted, so that
    /// e.g. `::FFFF:1.2.3.4` is kept as is.
    #[serde(rename = "publicIP", default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_port: Option<u16>,
    #[serde(rename = "underNAT", default, skip_serializing_if = "std::ops::Not::not")]
    pub under_nat: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat_type: Option<String>,
    #[serde(rename = "type")]
    pub type_: EndpointType,
    pub port: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CandidateError {
    #[error("node {node} does not have candidate label {label}")]
    NotCandidate { label: &'static str, node: String },
    #[error("node missing public ip: {0}")]
    PublicIp(#[from] NodeIpError),
}

/// Unix time (seconds) at which `node` was created, 0 if unknown.
fn creation_seconds(node: &Node) -> i64 {
    node.metadata
        .creation_timestamp
        .as_ref()
        .map_or(0, |time| time.0.as_second())
}

/// Build an active tunnel [`Endpoint`] for `node`.
///
/// # Errors
/// Fails if `node` lacks the endpoint candidate label or a valid public ip label.
pub fn try_create_active_endpoint_candidate(node: &Node) -> Result<Endpoint, CandidateError> {
    if node_label(node, LABEL_ENDPOINT_CANDIDATE).is_none() {
        return Err(CandidateError::NotCandidate {
            label: LABEL_ENDPOINT_CANDIDATE,
            node: node_name(node).to_owned(),
        });
    }
    let (public_ip, _) = public_ip_label(node)?;
    let config = BTreeMap::from([(
        CONFIG_CREATION_TIMESTAMP_KEY.to_owned(),
        creation_seconds(node).to_string(),
    )]);
    debug!("Node {} is an endpoint candidate with public ip {public_ip}", node_name(node));
    Ok(Endpoint {
        node_name: node_name(node).to_owned(),
        public_ip: Some(public_ip.to_owned()),
        public_port: None,
        under_nat: false,
        nat_type: None,
        type_: EndpointType::Tunnel,
        port: EndpointType::Tunnel.default_port(),
        config,
    })
}

#[cfg(test)]
mod test {
    use super::{
        CandidateError, DEFAULT_TUNNEL_SERVER_EXPOSED_PORT, Endpoint, EndpointType,
        try_create_active_endpoint_candidate,
    };
    use crate::consts::{
        CONFIG_CREATION_TIMESTAMP_KEY, LABEL_ENDPOINT_CANDIDATE, LABEL_NODE_PROVIDER_PUBLIC_IP,
    };
    use crate::node::NodeIpError;
    use crate::node::test::build_node;
    use k8s_openapi::api::core::v1::Node;
    use pretty_assertions::{assert_eq, assert_ne};
    use serde_json::json;

    #[test]
    fn test_candidate_endpoint() {
        let node = build_node(
            "edge-1",
            &[
                (LABEL_ENDPOINT_CANDIDATE, "true"),
                (LABEL_NODE_PROVIDER_PUBLIC_IP, "47.1.2.3"),
            ],
            &[],
        );
        let ep = try_create_active_endpoint_candidate(&node).unwrap();
        assert_eq!(ep.node_name, "edge-1");
        assert_eq!(ep.public_ip.as_deref(), Some("47.1.2.3"));
        assert!(!ep.under_nat);
        assert_eq!(ep.type_, EndpointType::Tunnel);
        assert_eq!(ep.port, DEFAULT_TUNNEL_SERVER_EXPOSED_PORT);
        assert_eq!(ep.config[CONFIG_CREATION_TIMESTAMP_KEY], "0");
    }

    #[test]
    fn test_candidate_endpoint_creation_time() {
        let node: Node = serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "Node",
            "metadata": {
                "name": "edge-2",
                "creationTimestamp": "2023-11-14T22:13:20Z",
                "labels": {
                    LABEL_ENDPOINT_CANDIDATE: "false",
                    LABEL_NODE_PROVIDER_PUBLIC_IP: "fd00::1"
                }
            }
        }))
        .unwrap();
        // presence of the label is enough, its value is not checked
        let ep = try_create_active_endpoint_candidate(&node).unwrap();
        assert_eq!(ep.config[CONFIG_CREATION_TIMESTAMP_KEY], "1700000000");
        assert_eq!(ep.public_ip.as_deref(), Some("fd00::1"));
    }

    #[test]
    fn test_candidate_endpoint_keeps_label_text() {
        let node = build_node(
            "edge-3",
            &[
                (LABEL_ENDPOINT_CANDIDATE, "true"),
                (LABEL_NODE_PROVIDER_PUBLIC_IP, "::FFFF:1.2.3.4"),
            ],
            &[],
        );
        let ep = try_create_active_endpoint_candidate(&node).unwrap();
        assert_eq!(ep.public_ip.as_deref(), Some("::FFFF:1.2.3.4"));
        assert_eq!(
            serde_json::to_value(&ep).unwrap()["publicIP"],
            json!("::FFFF:1.2.3.4")
        );
    }

    #[test]
    fn test_not_candidate() {
        let node = build_node("edge-1", &[(LABEL_NODE_PROVIDER_PUBLIC_IP, "47.1.2.3")], &[]);
        assert!(matches!(
            try_create_active_endpoint_candidate(&node),
            Err(CandidateError::NotCandidate { node, .. }) if node == "edge-1"
        ));
    }

    #[test]
    fn test_candidate_without_public_ip() {
        let node = build_node("edge-1", &[(LABEL_ENDPOINT_CANDIDATE, "true")], &[]);
        assert!(matches!(
            try_create_active_endpoint_candidate(&node),
            Err(CandidateError::PublicIp(NodeIpError::MissingLabel { .. }))
        ));
    }

    #[test]
    fn test_endpoint_wire_format() {
        let node = build_node(
            "edge-1",
            &[
                (LABEL_ENDPOINT_CANDIDATE, "true"),
                (LABEL_NODE_PROVIDER_PUBLIC_IP, "47.1.2.3"),
            ],
            &[],
        );
        let ep = try_create_active_endpoint_candidate(&node).unwrap();
        let value = serde_json::to_value(&ep).unwrap();
        assert_eq!(
            value,
            json!({
                "nodeName": "edge-1",
                "publicIP": "47.1.2.3",
                "type": "tunnel",
                "port": 4500,
                "config": {"config-creation-time": "0"}
            })
        );
        let back: Endpoint = serde_json::from_value(value).unwrap();
        assert_eq!(back, ep);
    }

    #[test]
    fn test_endpoint_drift_detection() {
        let node = build_node(
            "edge-1",
            &[
                (LABEL_ENDPOINT_CANDIDATE, "true"),
                (LABEL_NODE_PROVIDER_PUBLIC_IP, "47.1.2.3"),
            ],
            &[],
        );
        let ep = try_create_active_endpoint_candidate(&node).unwrap();
        let recorded = hashing::hash_object(&ep);
        assert_eq!(recorded, hashing::hash_object(&ep.clone()));

        let mut moved = ep.clone();
        moved.public_ip = Some("47.1.2.4".to_string());
        assert_ne!(recorded, hashing::hash_object(&moved));

        let mut natted = ep;
        natted.under_nat = true;
        assert_ne!(recorded, hashing::hash_object(&natted));
    }
}
