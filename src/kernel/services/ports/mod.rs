//! Service ports: traits + data contracts.

pub mod clipboard;
pub mod resource;
pub mod runtime;
pub mod settings;

pub use clipboard::{ClipboardWriter, CopyAttempt, CopyError, CopyOutcome, LegacyCopy};
pub use resource::{
    FetchError, FetchResponse, LoadError, ResourceFetcher, ResourceLocation, DEFAULT_RESOURCE,
};
pub use runtime::BoxFuture;
pub use settings::{ClipboardSettings, FallbackMode, KeybindingRule, Settings, TimingSettings};
