// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// COSMIC application wiring and main app struct.

use std::path::PathBuf;

use cosmic::app::{Core, context_drawer};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::iced::window;
use cosmic::{Action, Element, Task};

use super::message::AppMessage;
use super::model::AppModel;
use super::{update, view};

use crate::Args;
use crate::config::AppConfig;
use crate::fl;
use crate::host::SidecarStore;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Context page displayed in right drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    Properties,
}

/// Main application type.
pub struct PunctumApp {
    core: Core,
    pub model: AppModel,
    context_page: ContextPage,
    pub config: AppConfig,
    config_handler: Option<cosmic_config::Config>,
    store: SidecarStore,
}

impl cosmic::Application for PunctumApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.punctum.Punctum";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(mut core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let (config, config_handler) =
            match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
                Ok(handler) => {
                    let config = AppConfig::get_entry(&handler).unwrap_or_default();
                    (config, Some(handler))
                }
                Err(_) => (AppConfig::default(), None),
            };

        let Flags::Args(args) = flags;

        // Determine initial path: CLI argument takes priority.
        // Fall back to the configured default directory only if it exists.
        let initial_path = args.path.or_else(|| {
            config
                .default_media_dir
                .as_ref()
                .filter(|p| p.exists())
                .cloned()
        });

        // The sidecar store lives next to the opened media.
        let mut store = SidecarStore::open(store_path(initial_path.as_deref()));

        // Initialize model and load the initial library if provided.
        let mut model = AppModel::new();
        if let Some(path) = initial_path {
            update::update(
                &mut model,
                &mut store,
                &config,
                &AppMessage::OpenPath(path),
            );
        }

        // Apply persisted panel state.
        core.window.show_context = config.context_drawer_visible;

        (
            Self {
                core,
                model,
                context_page: ContextPage::default(),
                config,
                config_handler,
                store,
            },
            Task::none(),
        )
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        None
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        if let AppMessage::ToggleContextPage(page) = &message {
            if self.context_page == *page {
                self.core.window.show_context = !self.core.window.show_context;
            } else {
                self.context_page = *page;
                self.core.window.show_context = true;
            }
            self.config.context_drawer_visible = self.core.window.show_context;
            self.save_config();
            return Task::none();
        }

        update::update(&mut self.model, &mut self.store, &self.config, &message);
        Task::none()
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        use cosmic::widget::{button, icon};

        vec![
            button::icon(icon::from_name("go-previous-symbolic"))
                .on_press(AppMessage::PrevAsset)
                .into(),
            button::icon(icon::from_name("go-next-symbolic"))
                .on_press(AppMessage::NextAsset)
                .into(),
        ]
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        let title = self
            .model
            .current_asset()
            .map(|asset| asset.display_name())
            .unwrap_or_else(|| fl!("app-title"));

        vec![cosmic::widget::text(title).into()]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model, &self.config)
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }
        Some(context_drawer::context_drawer(
            view::settings::view(&self.model, &self.config),
            AppMessage::ToggleContextPage(ContextPage::Properties),
        ))
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        keyboard::on_key_press(handle_key_press)
    }
}

impl PunctumApp {
    /// Save current config to disk.
    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler {
            let _ = self.config.write_entry(handler);
        }
    }
}

/// Resolve where the sidecar store lives for the opened path: the media
/// directory itself, or the app data directory when nothing was opened.
fn store_path(opened: Option<&std::path::Path>) -> PathBuf {
    let dir = match opened {
        Some(path) if path.is_dir() => path.to_path_buf(),
        Some(path) => path
            .parent()
            .map(std::path::Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("punctum");
            if let Err(err) = std::fs::create_dir_all(&dir) {
                log::warn!("cannot create data directory {}: {err}", dir.display());
            }
            dir
        }
    };

    dir.join(crate::constant::STORE_FILE)
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    use AppMessage::{
        ClosePicker, NextAsset, OpenPicker, PrevAsset, SaveFields, ToggleContextPage,
    };

    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Navigation with arrow keys (no modifiers).
        Key::Named(Named::ArrowRight) => Some(NextAsset),
        Key::Named(Named::ArrowLeft) => Some(PrevAsset),

        // Picker.
        Key::Character(ch) if ch.eq_ignore_ascii_case("f") => Some(OpenPicker),
        Key::Named(Named::Escape) => Some(ClosePicker),

        // Persistence.
        Key::Character(ch) if ch.eq_ignore_ascii_case("s") => Some(SaveFields),

        // Toggle panels.
        Key::Character(ch) if ch.eq_ignore_ascii_case("i") => {
            Some(ToggleContextPage(ContextPage::Properties))
        }

        _ => None,
    }
}
