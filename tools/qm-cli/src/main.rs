// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;

mod command;

use command::QmApp;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = QmApp::parse();
    app.exec()
}
