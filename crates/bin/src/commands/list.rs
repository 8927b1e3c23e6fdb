//! List command - shows every setting below a path.

use libconf::Setting;

use crate::cli::ListArgs;
use crate::output::{OutputFormat, print_table};

/// One row of the listing
struct Entry {
    path: String,
    setting: Setting,
}

/// Run the list command
pub fn run(args: &ListArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load(&args.file)?;
    let start = config.root().require(args.path.as_str())?;

    let mut entries = Vec::new();
    let prefix = start
        .path()
        .map(|path| path.as_str().to_string())
        .unwrap_or_default();
    collect(&start, &prefix, &mut entries);

    match format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No settings found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|entry| {
                    vec![
                        entry.path.clone(),
                        entry.setting.kind().to_string(),
                        entry
                            .setting
                            .source_line()
                            .map(|line| line.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                        entry
                            .setting
                            .value()
                            .map(|value| value.to_string())
                            .unwrap_or_default(),
                    ]
                })
                .collect();
            print_table(&["PATH", "KIND", "LINE", "VALUE"], &rows);
        }
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = entries
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "path": entry.path,
                        "kind": entry.setting.kind(),
                        "line": entry.setting.source_line(),
                        "value": entry.setting.value(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&items)?);
        }
    }

    Ok(())
}

/// Walks the subtree below `setting` depth-first, in document order.
///
/// Group members are labelled with dotted paths, list and array elements
/// with their index.
fn collect(setting: &Setting, label: &str, entries: &mut Vec<Entry>) {
    for (index, child) in setting.children().into_iter().enumerate() {
        let child_label = match (child.name(), label.is_empty()) {
            (Some(name), true) => name,
            (Some(name), false) => format!("{label}.{name}"),
            (None, _) => format!("{label}[{index}]"),
        };
        entries.push(Entry {
            path: child_label.clone(),
            setting: child.clone(),
        });
        collect(&child, &child_label, entries);
    }
}
