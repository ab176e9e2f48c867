// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// UI module root.

pub mod app;
pub mod message;
pub mod model;
pub mod update;
pub mod view;
pub mod widgets;

pub use message::AppMessage;
pub use model::AppModel;
