use anyhow::{Result, anyhow};
use std::process::Command;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
enum ClipboardType {
    Wayland,
    X11,
    MacOS,
    Windows,
    Unsupported,
}

fn detect_clipboard_system() -> ClipboardType {
    if cfg!(target_os = "windows") {
        return ClipboardType::Windows;
    }

    if cfg!(target_os = "macos") {
        return ClipboardType::MacOS;
    }

    if std::env::var("WAYLAND_DISPLAY").is_ok() && command_exists("wl-paste") {
        return ClipboardType::Wayland;
    }

    if std::env::var("DISPLAY").is_ok() && command_exists("xclip") {
        return ClipboardType::X11;
    }

    ClipboardType::Unsupported
}

fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn read_from_clipboard_native() -> Result<String> {
    let clipboard_type = detect_clipboard_system();
    debug!("Reading from clipboard using: {:?}", clipboard_type);

    let (cmd, args): (&str, Vec<&str>) = match clipboard_type {
        ClipboardType::Wayland => ("wl-paste", vec!["--no-newline"]),
        ClipboardType::X11 => ("xclip", vec!["-selection", "clipboard", "-o"]),
        ClipboardType::MacOS => ("pbpaste", vec![]),
        ClipboardType::Windows => ("powershell", vec!["-command", "Get-Clipboard"]),
        ClipboardType::Unsupported => {
            return Err(anyhow!(
                "No supported clipboard system found. Install:\n\
                - Wayland: wl-clipboard\n\
                - X11: xclip\n\
                - Or pass the input as a file path or '-' for stdin"
            ));
        }
    };

    let output = Command::new(cmd)
        .args(&args)
        .output()
        .map_err(|e| anyhow!("Failed to run {}: {}", cmd, e))?;

    if !output.status.success() {
        return Err(anyhow!("{} failed with status: {}", cmd, output.status));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| anyhow!("Invalid UTF-8 in clipboard content: {}", e))
}

fn read_from_clipboard_fallback() -> Result<String> {
    use copypasta::{ClipboardContext, ClipboardProvider};

    debug!("Using copypasta fallback");
    let mut ctx =
        ClipboardContext::new().map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;

    ctx.get_contents()
        .map_err(|e| anyhow!("Failed to get clipboard contents: {}", e))
}

#[instrument]
pub async fn read_from_clipboard() -> Result<String> {
    let content = match read_from_clipboard_native() {
        Ok(content) => content,
        Err(e) => {
            warn!("Native clipboard failed: {}, trying fallback", e);
            read_from_clipboard_fallback()?
        }
    };

    if content.trim().is_empty() {
        return Err(anyhow!("Clipboard is empty"));
    }

    info!("Read {} characters from clipboard", content.len());
    Ok(content)
}
