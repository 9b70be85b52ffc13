// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Naming of objects created by the gateway manager

#![deny(clippy::all, clippy::pedantic)]

use rand::Rng;

/// Separator between a base name and its random suffix
const NAME_SEPARATOR: char = '-';

/// Build a unique name for an object by suffixing `name` with a random 8 hex-digit token,
/// e.g. `x-raven-proxy-svc-1f2e3d4c`.
#[must_use]
pub fn format_name(name: &str) -> String {
    let mut r = rand::rng();
    format!("{name}{NAME_SEPARATOR}{:08x}", r.next_u32())
}
