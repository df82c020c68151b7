// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pattern::Pattern;
use once_cell::sync::OnceCell;

/// Cache for derived cover data.
#[derive(Clone, Debug, Default)]
pub(super) struct CoverCache {
    literal_count: OnceCell<usize>,
}

impl CoverCache {
    pub(super) fn get_or_init_literal_count(&self, patterns: &[Pattern]) -> usize {
        *self
            .literal_count
            .get_or_init(|| patterns.iter().map(Pattern::literal_count).sum())
    }
}
