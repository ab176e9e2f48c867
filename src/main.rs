// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: CLI parsing, logging, and COSMIC application launch.

mod config;
mod constant;
mod domain;
mod host;
mod i18n;
mod media;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::ui::app::{Flags, PunctumApp};

/// Pick and store focal points on library images.
#[derive(Debug, Clone, Parser)]
#[command(name = "punctum", version, about)]
pub struct Args {
    /// Image file or media directory to open.
    pub path: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::init();
    i18n::localize();

    let args = Args::parse();

    let settings = cosmic::app::Settings::default();
    cosmic::app::run::<PunctumApp>(settings, Flags::Args(args))
}
