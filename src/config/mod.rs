//! Configuration module.
//!
//! - [`surface`]: validated per-surface settings consumed by the core
//! - [`loader`]: TOML file, environment and CLI precedence for the binary
//! - [`keybindings`]: key map for the demo

pub mod keybindings;
pub mod loader;
pub mod surface;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ConfigFile, ResolvedConfig,
};
pub use surface::{Axis, SurfaceConfig, TriggerPolicy};
