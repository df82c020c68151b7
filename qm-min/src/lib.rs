// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cover;
pub mod errors;
pub mod on_set;
pub mod pattern;
pub mod primes;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
