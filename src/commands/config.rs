use crate::core::{
    config::DisplayConfig,
    dirs::get_config_directory,
    error::Result,
    output::print_section_header,
};

/// Show the config file location and the resolved display defaults.
pub fn execute_config() -> Result<()> {
    let config_dir = get_config_directory()?;
    let config_file = config_dir.join("config.json");
    let config = DisplayConfig::load_or_create()?;

    print_section_header("Configuration");
    println!("{}", config_file.display());
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
