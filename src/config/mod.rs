// Configuration: TOML file loading and the typed settings it fills

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config};
pub use types::{AiConfig, Config, DisplayConfig, KeyBindings, PhysicsConfig};
