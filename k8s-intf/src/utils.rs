// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Validation of user-provided settings

/// Tell if `s` is a base-10 port number, i.e. an integer in `[0, 65535]`.
/// A leading sign is accepted, so `+80` and `-0` are valid.
#[must_use]
pub fn is_valid_port(s: &str) -> bool {
    s.parse::<i64>()
        .is_ok_and(|port| (0..=i64::from(u16::MAX)).contains(&port))
}
