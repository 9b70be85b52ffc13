// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Well-known names, labels and keys

/// Namespace where the gateway manager keeps its own objects
pub const WORKING_NAMESPACE: &str = "kube-system";

/// Global raven configuration (`ConfigMap`)
pub const RAVEN_GLOBAL_CONFIG: &str = "raven-cfg";
/// Raven agent configuration (`ConfigMap`)
pub const RAVEN_AGENT_CONFIG: &str = "raven-agent-config";
/// `ConfigMap` listing the nodes reachable through the proxy, consumed by DNS
pub const RAVEN_PROXY_NODES_CONFIG: &str = "edge-tunnel-nodes";
pub const PROXY_NODES_KEY: &str = "tunnel-nodes";

// keys of the agent configuration
pub const PROXY_SERVER_SECURE_PORT_KEY: &str = "proxy-internal-secure-addr";
pub const PROXY_SERVER_INSECURE_PORT_KEY: &str = "proxy-internal-insecure-addr";
pub const PROXY_SERVER_EXPOSED_PORT_KEY: &str = "proxy-external-addr";
pub const VPN_SERVER_EXPOSED_PORT_KEY: &str = "tunnel-bind-addr";

// keys of the global configuration and their defaults
pub const RAVEN_ENABLE_PROXY: &str = "enable-l7-proxy";
pub const RAVEN_ENABLE_TUNNEL: &str = "enable-l3-tunnel";
pub const DEFAULT_ENABLE_L7_PROXY: bool = false;
pub const DEFAULT_ENABLE_L3_TUNNEL: bool = true;

// services
pub const GATEWAY_PROXY_INTERNAL_SERVICE: &str = "x-raven-proxy-internal-svc";
pub const GATEWAY_PROXY_SERVICE_NAME_PREFIX: &str = "x-raven-proxy-svc";
pub const GATEWAY_TUNNEL_SERVICE_NAME_PREFIX: &str = "x-raven-tunnel-svc";

// labels
pub const LABEL_CURRENT_GATEWAY_ENDPOINTS: &str = "raven.openyurt.io/endpoints-name";
pub const LABEL_ENDPOINT_CANDIDATE: &str = "raven.openyurt.io/endpoint-candidate";
pub const LABEL_NODE_PROVIDER_PUBLIC_IP: &str = "raven.openyurt.io/public-ip";

/// Key of an endpoint's config holding the creation time of its node (unix seconds)
pub const CONFIG_CREATION_TIMESTAMP_KEY: &str = "config-creation-time";

/// Node address type of cluster-internal addresses
pub const NODE_INTERNAL_IP: &str = "InternalIP";
