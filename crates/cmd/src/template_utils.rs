//! Template expansion for `site.yaml`
//!
//! Site configuration goes through the Tera template engine before YAML
//! parsing, so a config can pull in CLI `--var` values and environment
//! variables instead of hardcoding them.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Tera, Value};

/// Expand a `site.yaml` string with Tera.
///
/// Variables come from `--var key=value` flags; the built-in `env` function
/// reads environment variables.
///
/// # Example
///
/// ```text
/// # Input site.yaml with templates:
/// site:
///   title: "{{ title }}"
///   description: "{{ env(name='SITE_TAGLINE', default='Selected work') }}"
///
/// # With --var title=Studio and SITE_TAGLINE unset:
/// site:
///   title: "Studio"
///   description: "Selected work"
/// ```
pub fn expand_yaml_template(
    yaml_content: &str,
    variables: &HashMap<String, String>,
) -> Result<String> {
    // A bare Tera instance; nothing is loaded from disk
    let mut tera = Tera::default();
    tera.register_function("env", env_function());

    let mut context = tera::Context::new();
    for (key, value) in variables {
        context.insert(key, value);
    }

    tera.render_str(yaml_content, &context).map_err(|e| {
        let mut error_parts = vec![format!("Template rendering failed: {}", e)];

        let chain = collect_error_chain(&e);
        if chain.len() > 1 {
            error_parts.push(format!("Error chain ({} levels):", chain.len()));
            for (i, err_msg) in chain.iter().enumerate() {
                if i == 0 {
                    error_parts.push(format!("  → {}", err_msg));
                } else {
                    error_parts.push(format!("  ├─ Level {}: {}", i, err_msg));
                }
            }
        }

        if variables.is_empty() {
            error_parts
                .push("No template variables provided (use --var key=value to provide)".to_string());
        } else {
            error_parts.push(format!(
                "Available variables: {:?}",
                variables.keys().collect::<Vec<_>>()
            ));
        }

        anyhow::anyhow!("{}", error_parts.join("\n"))
    })
}

/// Collect complete error chain as strings
fn collect_error_chain(err: &dyn std::error::Error) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();

    while let Some(err) = source {
        chain.push(err.to_string());
        source = err.source();
    }

    chain
}

/// Built-in function to read environment variables
///
/// Usage in site.yaml:
/// - `{{ env(name="VAR_NAME") }}` - read, error if not set
/// - `{{ env(name="VAR_NAME", default="fallback") }}` - read with fallback
fn env_function() -> impl tera::Function {
    Box::new(
        move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let var_name = args
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| tera::Error::msg("env function requires 'name' parameter"))?;

            let default_value = args.get("default").and_then(|v| v.as_str());

            match std::env::var(var_name) {
                Ok(value) => Ok(Value::String(value)),
                Err(std::env::VarError::NotPresent) => {
                    if let Some(default) = default_value {
                        Ok(Value::String(default.to_string()))
                    } else {
                        Err(tera::Error::msg(format!(
                            "Environment variable '{}' not set and no default provided",
                            var_name
                        )))
                    }
                }
                Err(e) => Err(tera::Error::msg(format!(
                    "Failed to read environment variable '{}': {}",
                    var_name, e
                ))),
            }
        },
    )
}
