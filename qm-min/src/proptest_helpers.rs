// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pattern::Pattern;
use proptest::prelude::*;

impl Arbitrary for Pattern {
    /// An exact pattern length, or `None` for a short random length.
    type Parameters = Option<usize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(len: Self::Parameters) -> Self::Strategy {
        let len_strategy = match len {
            Some(len) => Just(len).boxed(),
            None => (1..=8usize).boxed(),
        };
        len_strategy
            .prop_flat_map(|len| prop::collection::vec(any::<Option<bool>>(), len))
            .prop_map(Pattern::from_values)
            .boxed()
    }
}
