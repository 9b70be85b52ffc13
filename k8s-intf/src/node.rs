// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Node addressing and labels

use crate::consts::{LABEL_ENDPOINT_CANDIDATE, LABEL_NODE_PROVIDER_PUBLIC_IP, NODE_INTERNAL_IP};
use k8s_openapi::api::core::v1::Node;
use std::net::IpAddr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NodeIpError {
    #[error("failed to get public ip, no label {label} on node {node}")]
    MissingLabel { label: &'static str, node: String },
    #[error("failed to get public ip, invalid public IP label {label}, {value} on node {node}")]
    InvalidFormat {
        label: &'static str,
        value: String,
        node: String,
    },
}

pub(crate) fn node_name(node: &Node) -> &str {
    node.metadata.name.as_deref().unwrap_or_default()
}

pub(crate) fn node_label<'a>(node: &'a Node, label: &str) -> Option<&'a str> {
    node.metadata
        .labels
        .as_ref()
        .and_then(|labels| labels.get(label))
        .map(String::as_str)
}

/// Return the first internal address of `node` that is a valid IP address, if any.
#[must_use]
pub fn node_internal_ip(node: &Node) -> Option<IpAddr> {
    node.status
        .as_ref()?
        .addresses
        .as_ref()?
        .iter()
        .filter(|addr| addr.type_ == NODE_INTERNAL_IP)
        .find_map(|addr| addr.address.parse().ok())
}

/// The public ip label of `node`, verbatim, along with the address it holds.
pub(crate) fn public_ip_label(node: &Node) -> Result<(&str, IpAddr), NodeIpError> {
    let Some(value) = node_label(node, LABEL_NODE_PROVIDER_PUBLIC_IP) else {
        return Err(NodeIpError::MissingLabel {
            label: LABEL_NODE_PROVIDER_PUBLIC_IP,
            node: node_name(node).to_owned(),
        });
    };
    let address = value.parse().map_err(|_| NodeIpError::InvalidFormat {
        label: LABEL_NODE_PROVIDER_PUBLIC_IP,
        value: value.to_owned(),
        node: node_name(node).to_owned(),
    })?;
    Ok((value, address))
}

/// Return the public IP address of `node`, as advertised by its provider label.
///
/// # Errors
/// Fails if the node has no public ip label or if its value is not an IP address.
pub fn node_public_ip(node: &Node) -> Result<IpAddr, NodeIpError> {
    public_ip_label(node).map(|(_, address)| address)
}

/// Tell if `node` is labeled as a candidate to host a gateway endpoint.
#[must_use]
pub fn is_node_endpoint_candidate(node: &Node) -> bool {
    node_label(node, LABEL_ENDPOINT_CANDIDATE) == Some("true")
}
