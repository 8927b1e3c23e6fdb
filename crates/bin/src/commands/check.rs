//! Check command - parses a file and reports whether it is valid.

use crate::cli::CheckArgs;
use crate::output::OutputFormat;

/// Run the check command
pub fn run(args: &CheckArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load(&args.file)?;
    let settings = config.root().len();

    match format {
        OutputFormat::Human => {
            println!("{}: ok ({settings} top-level settings)", args.file.display());
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file": args.file.display().to_string(),
                "valid": true,
                "settings": settings,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
