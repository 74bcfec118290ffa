//! Delayed `gp preview` launcher
//!
//! One-shot background task: wait a fixed delay so the listener is up,
//! then hand the server's URL to the Gitpod preview. The task never
//! retries and its outcome has no effect on server availability.

use std::io;
use std::time::Duration;

use tokio::process::Command;

/// External command that registers the preview
const PREVIEW_COMMAND: &str = "gp";

/// Wait for `delay`, then spawn `gp preview --external` pointed at the
/// server's own port. Failures are reported to the console and swallowed.
pub async fn launch_after_delay(port: u16, delay: Duration) {
    println!(
        "Waiting {} seconds before running 'gp preview --external'...",
        delay.as_secs()
    );
    tokio::time::sleep(delay).await;

    println!("Running 'gp preview --external'...");
    match spawn_preview(PREVIEW_COMMAND, port) {
        Ok(()) => println!("Command launched successfully"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!(
                "Error: '{PREVIEW_COMMAND}' command not found. \
                 Make sure you're running this in a Gitpod environment."
            );
        },
        Err(e) => println!("Error running 'gp preview --external': {e}"),
    }
}

/// Spawn the preview command detached.
///
/// The child handle is dropped immediately and never joined; the spawned
/// process outlives this task. `gp` expects the workspace's public URL
/// scheme, so the URL is advertised as `https` even though the listener
/// itself speaks plain HTTP.
fn spawn_preview(command: &str, port: u16) -> io::Result<()> {
    Command::new(command)
        .arg("preview")
        .arg("--external")
        .arg(format!("https://localhost:{port}"))
        .spawn()
        .map(drop)
}
