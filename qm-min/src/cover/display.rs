// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cover::Cover;
use std::{borrow::Cow, fmt};

/// Displays a cover as one `1`/`0`/`-` row per implicant.
#[derive(Clone, Debug)]
pub struct CoverMatrixDisplay<'a> {
    cover: &'a Cover,
    separator: (Cow<'a, str>, bool),
}

impl<'a> CoverMatrixDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self {
            cover,
            separator: (Cow::Borrowed("\n"), true),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>, print_last: bool) -> Self {
        self.separator = (separator.into(), print_last);
        self
    }
}

impl fmt::Display for CoverMatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let count = self.cover.implicant_count();
        for (ix, pattern) in self.cover.patterns().iter().enumerate() {
            write!(f, "{}", pattern)?;

            let (separator, print_last) = &self.separator;
            if *print_last || ix < count - 1 {
                write!(f, "{}", separator)?;
            }
        }
        Ok(())
    }
}

/// The answer-file rendering: total literal count, implicant count, then
/// one implicant row per line in answer order.
pub struct SolutionDisplay<'a> {
    cover: &'a Cover,
}

impl<'a> SolutionDisplay<'a> {
    pub fn new(cover: &'a Cover) -> Self {
        Self { cover }
    }
}

impl fmt::Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.cover.literal_count())?;
        writeln!(f, "{}", self.cover.implicant_count())?;
        write!(f, "{}", self.cover.matrix_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    fn cover(strs: &[&str]) -> Cover {
        Cover::new(
            strs.iter()
                .map(|s| Pattern::from_pattern_str(s).unwrap()),
        )
    }

    #[test]
    fn test_matrix_display() {
        let cover = cover(&["-00", "0-0"]);
        assert_eq!(cover.matrix_display().to_string(), "-00\n0-0\n");
        assert_eq!(
            cover
                .matrix_display()
                .with_separator(", ", false)
                .to_string(),
            "-00, 0-0"
        );
    }

    #[test]
    fn test_solution_display() {
        let cover = cover(&["-00", "0-0", "00-"]);
        assert_eq!(
            cover.solution_display().to_string(),
            "6\n3\n-00\n0-0\n00-\n"
        );

        assert_eq!(Cover::default().solution_display().to_string(), "0\n0\n");
    }
}
