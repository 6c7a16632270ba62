use std::path::Path;

use clap::Subcommand;
use syllabus_core::config::SyllabusConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write ~/.syllabus/config.toml with default settings
    Init,
    /// Show current configuration
    Show,
}

pub fn run(action: ConfigAction, config_path: Option<&Path>) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let path = match config_path {
                Some(path) => path.to_path_buf(),
                None => SyllabusConfig::config_path()?,
            };
            if SyllabusConfig::init_at(&path)? {
                println!("Initialized syllabus config at {}", path.display());
            } else {
                println!("Config already exists at {}; left unchanged", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = super::load_config(config_path)?;
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
            Ok(())
        }
    }
}
