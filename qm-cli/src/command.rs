// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use qm_min::on_set::OnSet;

/// Minimizes a sum-of-terms Boolean function into a prime implicant cover.
#[derive(Debug, Parser)]
pub struct MinimizeApp {
    /// File holding the variable count, the term count and the on-set terms.
    input: Utf8PathBuf,

    /// File the minimized cover is written to.
    output: Utf8PathBuf,
}

impl MinimizeApp {
    pub fn exec(self) -> Result<()> {
        let text = std::fs::read_to_string(&self.input)
            .wrap_err_with(|| format!("reading {}", self.input))?;
        let on_set =
            OnSet::parse(&text).wrap_err_with(|| format!("parsing {}", self.input))?;

        let cover = on_set.minimize();
        eprintln!(
            "{}: {} terms -> {} implicants, {} literals",
            self.input,
            on_set.terms.len(),
            cover.implicant_count(),
            cover.literal_count(),
        );

        std::fs::write(&self.output, cover.solution_display().to_string())
            .wrap_err_with(|| format!("writing {}", self.output))?;

        Ok(())
    }
}
