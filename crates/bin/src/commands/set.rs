//! Set command - changes or creates a scalar setting and prints the result.
//!
//! The file on disk is never written.

use libconf::{Config, PathBuf, ScalarKind, Setting, Value};

use crate::cli::SetArgs;
use crate::output::{OutputFormat, render_human};

/// Run the set command
pub fn run(args: &SetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load(&args.file)?;
    let setting = resolve(&config, args)?;

    let kind = setting.kind().as_scalar().ok_or_else(|| {
        format!(
            "{} is a {}; only scalar settings can be set",
            args.path,
            setting.kind()
        )
    })?;
    setting.set_value(parse_value(kind, &args.value)?)?;
    tracing::info!(path = %args.path, %kind, "Updated setting");

    match format {
        OutputFormat::Human => println!("{} = {}", args.path, render_human(&setting)?),
        OutputFormat::Json => println!("{}", config.root().to_json()?),
    }

    Ok(())
}

/// Finds the target setting, creating it when `--create` was given.
fn resolve(config: &Config, args: &SetArgs) -> Result<Setting, Box<dyn std::error::Error>> {
    if let Some(existing) = config.lookup(args.path.as_str()) {
        return Ok(existing);
    }
    let Some(kind) = args.create else {
        // Reports the missing setting as a not-found error
        return Ok(config.root().require(args.path.as_str())?);
    };

    let path = PathBuf::normalize(&args.path);
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return Err("cannot create the root setting".into());
    };
    Ok(config.add_scalar_setting_to_parent(&parent, name, kind)?)
}

/// Interprets command line text as a value of the given kind.
fn parse_value(kind: ScalarKind, text: &str) -> Result<Value, String> {
    match kind {
        ScalarKind::Int => text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| format!("invalid int '{text}': {e}")),
        ScalarKind::Float => text
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| format!("invalid float '{text}': {e}")),
        ScalarKind::Bool => match text.to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(format!("invalid bool '{text}': expected true or false")),
        },
        ScalarKind::String => Ok(Value::String(text.to_string())),
    }
}
