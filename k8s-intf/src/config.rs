// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Global raven configuration

use crate::consts::{
    DEFAULT_ENABLE_L3_TUNNEL, DEFAULT_ENABLE_L7_PROXY, RAVEN_ENABLE_PROXY, RAVEN_ENABLE_TUNNEL,
};
use k8s_openapi::api::core::v1::ConfigMap;
use std::collections::BTreeMap;

/// Which gateway servers are enabled cluster-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerFlags {
    /// Layer 7 proxy
    pub enable_proxy: bool,
    /// Layer 3 tunnel
    pub enable_tunnel: bool,
}

impl Default for ServerFlags {
    fn default() -> Self {
        Self {
            enable_proxy: DEFAULT_ENABLE_L7_PROXY,
            enable_tunnel: DEFAULT_ENABLE_L3_TUNNEL,
        }
    }
}

// A present key overrides the default in both directions: `enable-l3-tunnel: false` turns the
// tunnel off, unlike the original CheckServer which could only ever flip a flag to true.
fn flag(data: Option<&BTreeMap<String, String>>, key: &str, default: bool) -> bool {
    data.and_then(|data| data.get(key))
        .map_or(default, |value| value.eq_ignore_ascii_case("true"))
}

impl ServerFlags {
    /// Read the flags from the global raven config map. A flag missing from the map (or the
    /// map itself missing) keeps its default. A present flag is enabled iff its value is
    /// `true`, case-insensitively.
    #[must_use]
    pub fn from_config_map(config_map: Option<&ConfigMap>) -> Self {
        let data = config_map.and_then(|cm| cm.data.as_ref());
        let defaults = Self::default();
        Self {
            enable_proxy: flag(data, RAVEN_ENABLE_PROXY, defaults.enable_proxy),
            enable_tunnel: flag(data, RAVEN_ENABLE_TUNNEL, defaults.enable_tunnel),
        }
    }
}
