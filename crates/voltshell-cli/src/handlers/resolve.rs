//! Resolve command handler.

use anyhow::Result;
use voltshell_core::Resolution;
use voltshell_runtime::ShellContext;

/// Run one proactive resolution and print the outcome.
pub async fn execute(ctx: &ShellContext, json: bool) -> Result<()> {
    let resolution = ctx.resolver.resolve_detailed().await;
    if json {
        println!("{}", render_json(&resolution)?);
    } else {
        print!("{}", render_text(&resolution));
    }
    Ok(())
}

fn render_text(resolution: &Resolution) -> String {
    let notice = resolution
        .outcome
        .notice
        .as_ref()
        .map_or("none", |n| n.as_str());
    format!(
        "probe: {}\nsource: {}\nnotice: {notice}\n",
        resolution.reachability, resolution.outcome.source
    )
}

fn render_json(resolution: &Resolution) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "reachability": resolution.reachability,
        "outcome": resolution.outcome,
    }))
}
