// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use qm_cli::MinimizeApp;

fn main() -> Result<()> {
    let app = MinimizeApp::parse();
    app.exec()
}
