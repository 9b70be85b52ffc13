// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Enqueueing of reconcile requests

use crate::consts::{GATEWAY_PROXY_INTERNAL_SERVICE, RAVEN_PROXY_NODES_CONFIG, WORKING_NAMESPACE};
use std::fmt::Display;
use tokio::sync::mpsc::UnboundedSender;

#[allow(unused)]
use tracing::{debug, warn};

/// Identifies the object a reconciler should look at
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReconcileRequest {
    pub namespace: Option<String>,
    pub name: String,
}

impl ReconcileRequest {
    #[must_use]
    pub fn cluster_scoped(name: &str) -> Self {
        Self {
            namespace: None,
            name: name.to_owned(),
        }
    }
    #[must_use]
    pub fn namespaced(namespace: &str, name: &str) -> Self {
        Self {
            namespace: Some(namespace.to_owned()),
            name: name.to_owned(),
        }
    }
}

impl Display for ReconcileRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{namespace}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A queue of reconcile requests, shared by the event handlers of a controller
pub trait WorkQueue {
    fn add(&self, request: ReconcileRequest);
}

impl WorkQueue for UnboundedSender<ReconcileRequest> {
    fn add(&self, request: ReconcileRequest) {
        debug!("Enqueueing reconcile request for {request}");
        if let Err(e) = self.send(request) {
            warn!("Dropped reconcile request for {}: work queue is closed", e.0);
        }
    }
}

/// Enqueue a request for the gateway named `gw_name`, if any.
pub fn add_gateway_to_work_queue(gw_name: &str, q: &impl WorkQueue) {
    if !gw_name.is_empty() {
        q.add(ReconcileRequest::cluster_scoped(gw_name));
    }
}

/// Enqueue a request for the node pool named `np_name`, if any.
pub fn add_node_pool_to_work_queue(np_name: &str, q: &impl WorkQueue) {
    if !np_name.is_empty() {
        q.add(ReconcileRequest::cluster_scoped(np_name));
    }
}

/// Enqueue a request for the config map listing the proxied nodes.
pub fn add_dns_configmap_to_work_queue(q: &impl WorkQueue) {
    q.add(ReconcileRequest::namespaced(
        WORKING_NAMESPACE,
        RAVEN_PROXY_NODES_CONFIG,
    ));
}

/// Enqueue a request for the internal service of the gateway proxy.
pub fn add_gateway_proxy_internal_service(q: &impl WorkQueue) {
    q.add(ReconcileRequest::namespaced(
        WORKING_NAMESPACE,
        GATEWAY_PROXY_INTERNAL_SERVICE,
    ));
}

#[cfg(test)]
mod test {
    use super::{
        ReconcileRequest, WorkQueue, add_dns_configmap_to_work_queue,
        add_gateway_proxy_internal_service, add_gateway_to_work_queue, add_node_pool_to_work_queue,
    };
    use tokio::sync::mpsc::unbounded_channel;
    use tracing_test::traced_test;

    #[test]
    fn test_enqueue_named_objects() {
        let (tx, mut rx) = unbounded_channel::<ReconcileRequest>();
        add_gateway_to_work_queue("gw-hangzhou", &tx);
        add_node_pool_to_work_queue("pool-a", &tx);
        assert_eq!(
            rx.try_recv().unwrap(),
            ReconcileRequest::cluster_scoped("gw-hangzhou")
        );
        assert_eq!(rx.try_recv().unwrap(), ReconcileRequest::cluster_scoped("pool-a"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enqueue_empty_name_is_noop() {
        let (tx, mut rx) = unbounded_channel::<ReconcileRequest>();
        add_gateway_to_work_queue("", &tx);
        add_node_pool_to_work_queue("", &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_enqueue_well_known_objects() {
        let (tx, mut rx) = unbounded_channel::<ReconcileRequest>();
        add_dns_configmap_to_work_queue(&tx);
        add_gateway_proxy_internal_service(&tx);
        let dns = rx.try_recv().unwrap();
        let svc = rx.try_recv().unwrap();
        assert_eq!(dns.to_string(), "kube-system/edge-tunnel-nodes");
        assert_eq!(svc.to_string(), "kube-system/x-raven-proxy-internal-svc");
    }

    #[test]
    #[traced_test]
    fn test_enqueue_closed_queue() {
        let (tx, rx) = unbounded_channel::<ReconcileRequest>();
        drop(rx);
        tx.add(ReconcileRequest::cluster_scoped("gw"));
        assert!(logs_contain("work queue is closed"));
    }
}
