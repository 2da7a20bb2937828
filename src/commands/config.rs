//! Config subcommands handler

use anyhow::Result;

use qterm::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = config.to_toml_string()?;
    if atty::is(atty::Stream::Stdout) {
        print!("{}", config.resolve_theme().primary_text(&toml_str));
    } else {
        print!("{}", toml_str);
    }
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file if none exists yet.
pub fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Open the config file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
pub fn handle_edit() -> Result<()> {
    let path = Config::config_path()?;

    // Ensure the file exists before handing it to the editor
    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    Ok(())
}
