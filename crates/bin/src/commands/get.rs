//! Get command - prints a single setting.

use crate::cli::GetArgs;
use crate::output::{OutputFormat, render_human};

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load(&args.file)?;
    let setting = config.root().require(args.path.as_str())?;

    match format {
        OutputFormat::Human => println!("{}", render_human(&setting)?),
        OutputFormat::Json => println!("{}", serde_json::to_string(&setting)?),
    }

    Ok(())
}
