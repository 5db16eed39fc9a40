//! Run command handler: a headless shell driven from stdin.
//!
//! Each input line is one host callback. Loads and notices go to stdout via
//! the console surface; bridge replies are printed as JSON.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use voltshell_core::{FrameKind, ShellEvent};
use voltshell_runtime::{ShellContext, ShellHandle};

use crate::error::CliError;
use crate::presentation::{ConsoleSurface, format_event};

const DEFAULT_LOAD_ERROR: &str = "load failed";

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    LoadError { frame: FrameKind, detail: String },
    Retry,
    Activate,
    Bridge(String),
    Quit,
    Blank,
}

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, CliError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let detail = || {
        if rest.is_empty() {
            DEFAULT_LOAD_ERROR.to_string()
        } else {
            rest.to_string()
        }
    };

    match word {
        "" => Ok(ConsoleCommand::Blank),
        "error" => Ok(ConsoleCommand::LoadError {
            frame: FrameKind::MainFrame,
            detail: detail(),
        }),
        "subresource-error" => Ok(ConsoleCommand::LoadError {
            frame: FrameKind::SubResource,
            detail: detail(),
        }),
        "retry" => Ok(ConsoleCommand::Retry),
        "activate" => Ok(ConsoleCommand::Activate),
        "bridge" if rest.is_empty() => {
            Err(CliError::Arguments("bridge needs a JSON payload".to_string()))
        }
        "bridge" => Ok(ConsoleCommand::Bridge(rest.to_string())),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(CliError::Arguments(format!("unknown command '{other}'"))),
    }
}

/// Run the shell until `quit`, end of input or Ctrl-C.
pub async fn execute(ctx: &ShellContext, events: bool) -> Result<()> {
    let printer = events.then(|| spawn_event_printer(ctx.events.subscribe()));
    let (handle, shell) = ctx.launch(ConsoleSurface::stdout());

    let input = async {
        let mut stdout = std::io::stdout();
        let result = drive(&handle, BufReader::new(tokio::io::stdin()), &mut stdout).await;
        // The shell only stops on shutdown, so always send it.
        if let Err(e) = handle.shutdown() {
            debug!(error = %e, "Shell already stopped");
        }
        result
    };

    let (_surface, result) = tokio::join!(shell.run(), input);
    if let Some(printer) = printer {
        printer.abort();
    }
    info!("Console host stopped");
    result
}

/// Feed input lines to the shell until `quit`, end of input or Ctrl-C.
///
/// Unknown commands are reported on `out` and skipped.
pub async fn drive<R, W>(handle: &ShellHandle, reader: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.map_err(CliError::from)?,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                None
            }
        };
        let Some(line) = line else {
            return Ok(());
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error {e}").map_err(CliError::from)?;
                continue;
            }
        };

        match command {
            ConsoleCommand::Blank => {}
            ConsoleCommand::LoadError { frame, detail } => {
                handle.report_load_error(frame, detail).map_err(CliError::from)?;
            }
            ConsoleCommand::Retry => handle.check_server_connection().map_err(CliError::from)?,
            ConsoleCommand::Activate => handle.activate().map_err(CliError::from)?,
            ConsoleCommand::Bridge(payload) => {
                let reply = handle.call_bridge(payload).await.map_err(CliError::from)?;
                writeln!(out, "reply {}", reply.to_json()).map_err(CliError::from)?;
            }
            ConsoleCommand::Quit => return Ok(()),
        }
    }
}

fn spawn_event_printer(mut events: broadcast::Receiver<ShellEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => println!("event {}", format_event(&event)),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "Event printer fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
