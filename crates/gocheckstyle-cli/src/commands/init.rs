//! Init command implementation.

use anyhow::{bail, Context, Result};
use gocheckstyle::rules::default_config;
use std::path::Path;

/// Runs the init command.
pub fn run(force: bool, as_toml: bool) -> Result<()> {
    let (path, content) = if as_toml {
        let body = toml::to_string_pretty(&default_config())
            .context("Failed to render default config")?;
        (
            Path::new("gocheckstyle.toml"),
            format!("# gocheckstyle configuration\n\n{body}"),
        )
    } else {
        let body = serde_json::to_string_pretty(&default_config())
            .context("Failed to render default config")?;
        (Path::new("gocheckstyle.json"), format!("{body}\n"))
    };

    write_config(path, &content, force)?;

    println!("Created {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to adjust limits and fatal rules", path.display());
    println!("  2. Run: gocheckstyle check");

    Ok(())
}

fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocheckstyle::Config;
    use tempfile::TempDir;

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gocheckstyle.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(write_config(&path, "new", false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        write_config(&path, "new", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn default_config_round_trips_through_both_formats() {
        let json = serde_json::to_string_pretty(&default_config()).unwrap();
        assert_eq!(Config::from_slice(json.as_bytes()).unwrap(), default_config());

        let toml = toml::to_string_pretty(&default_config()).unwrap();
        assert_eq!(Config::parse_toml(&toml).unwrap(), default_config());
    }
}
