// Configuration file loading and creation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Path to the configuration file, under the user's config directory.
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("catchpong");

    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create a default file if none exists.
/// A file that fails to parse is left untouched and defaults are used.
pub fn load_config() -> Result<Config, io::Error> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: failed to parse {}: {}", config_path.display(), e);
                eprintln!("Using default configuration");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Write a default configuration file with a commented header.
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# catchpong configuration\n\
         # Edit and restart the game for changes to take effect\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Left\", \"Right\", \"Space\",\n\
         #                     \"Enter\", \"Esc\", or a single character\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}
