//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod clipboard;
pub mod fetch;
pub mod loader;
pub mod offline;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use clipboard::{LegacyClipboard, SystemClipboard};
pub use fetch::{DefaultFetcher, FileFetcher, HttpFetcher};
pub use loader::Loader;
pub use offline::OfflineCache;
pub use paths::{ensure_log_dir, get_config_dir, get_log_dir, get_offline_dir};
pub use runtime::{AppMessage, AsyncRuntime, RuntimeServices};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
};
