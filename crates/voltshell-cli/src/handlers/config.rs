//! Config command handler.

use anyhow::Result;
use voltshell_core::ShellSettings;

/// Print the effective settings as `key = value` lines.
pub fn execute(settings: &ShellSettings) -> Result<()> {
    print!("{}", render(settings));
    Ok(())
}

fn render(settings: &ShellSettings) -> String {
    settings
        .describe()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}
