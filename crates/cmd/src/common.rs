use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use folio::SiteConfig;

use crate::template_utils::expand_yaml_template;

/// Resolve the site directory: an explicit `--dir` wins, then the FOLIO_DIR
/// environment variable, then the current directory.
pub fn resolve_site_dir(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    env::var("FOLIO_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve the output directory: an explicit CLI argument wins, otherwise
/// the configured path (relative to the site directory).
pub fn resolve_output_dir(
    site_dir: &Path,
    config: &SiteConfig,
    override_dir: Option<&Path>,
) -> PathBuf {
    match override_dir {
        Some(path) => path.to_path_buf(),
        None => config.output_dir(site_dir),
    }
}

/// Parse `key=value` pairs from repeated `--var` flags.
pub fn parse_variables(vars: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for var in vars {
        let (key, value) = var
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid variable '{}': expected key=value", var))?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Load `site.yaml` from the site directory, expanding templates first.
pub fn load_site_config(site_dir: &Path, vars: &[String]) -> Result<SiteConfig> {
    let config_path = site_dir.join("site.yaml");
    if !config_path.is_file() {
        return Err(anyhow!(
            "No site.yaml found in {}. Run 'folio init' first.",
            site_dir.display()
        ));
    }
    let raw = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let variables = parse_variables(vars)?;
    let expanded = expand_yaml_template(&raw, &variables)?;
    let config = SiteConfig::parse(&expanded)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    Ok(config)
}
