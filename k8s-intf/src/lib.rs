// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Helpers for the gateway manager to interpret k8s objects: node addressing and labels,
//! tunnel endpoints, the global raven configuration and reconcile work queues.

#![deny(clippy::all, clippy::pedantic)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod consts;
pub mod endpoint;
pub mod node;
pub mod utils;
pub mod workqueue;

pub use config::ServerFlags;
pub use endpoint::{CandidateError, Endpoint, EndpointType, try_create_active_endpoint_candidate};
pub use node::{NodeIpError, is_node_endpoint_candidate, node_internal_ip, node_public_ip};
pub use utils::is_valid_port;
pub use workqueue::{ReconcileRequest, WorkQueue};
