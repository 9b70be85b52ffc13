// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};

use tracing::{debug, warn};

use crate::config::ServerFlags;
use crate::consts::{RAVEN_GLOBAL_CONFIG, WORKING_NAMESPACE};

/// Interpret the outcome of fetching the global raven config map.
fn server_flags_from(fetched: Result<Option<ConfigMap>, kube::Error>) -> ServerFlags {
    match fetched {
        Ok(Some(cm)) => ServerFlags::from_config_map(Some(&cm)),
        Ok(None) => {
            debug!("No config map {WORKING_NAMESPACE}/{RAVEN_GLOBAL_CONFIG}, using defaults");
            ServerFlags::default()
        }
        Err(e) => {
            warn!(
                "Failed to get config map {WORKING_NAMESPACE}/{RAVEN_GLOBAL_CONFIG}, using defaults: {e}"
            );
            ServerFlags::default()
        }
    }
}

/// Fetch the global raven config map and tell which gateway servers are enabled.
///
/// This never fails: if the config map cannot be retrieved or does not exist, the defaults
/// are returned.
pub async fn check_server(client: Client) -> ServerFlags {
    let api: Api<ConfigMap> = Api::namespaced(client, WORKING_NAMESPACE);
    server_flags_from(api.get_opt(RAVEN_GLOBAL_CONFIG).await)
}
