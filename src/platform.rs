//! Host integration: handing URIs to the platform's default handler.
//!
//! Structure:
//! - Types: host families and the launcher each one uses
//! - Pure functions: launcher selection, argument construction
//! - Effect functions: spawning the launcher

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use crate::error::{Error, Result};

// ============================================================================
// TYPES
// ============================================================================

/// Host family, as far as URI launching is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// `open <uri>`
    MacOs,
    /// `cmd /C start "" <uri>`
    Windows,
    /// `xdg-open <uri>` (Linux, BSDs)
    OtherUnix,
}

/// A fully resolved launcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub program: &'static str,
    pub args: Vec<String>,
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// The host this binary was compiled for.
pub fn current_host() -> Host {
    if cfg!(target_os = "macos") {
        Host::MacOs
    } else if cfg!(target_os = "windows") {
        Host::Windows
    } else {
        Host::OtherUnix
    }
}

/// Build the launcher for `uri` on `host`.
pub fn launcher_for(host: Host, uri: &str) -> Launcher {
    match host {
        Host::MacOs => Launcher {
            program: "open",
            args: vec![uri.to_string()],
        },
        // The empty string is the window title `start` expects first.
        Host::Windows => Launcher {
            program: "cmd",
            args: vec!["/C".into(), "start".into(), String::new(), uri.to_string()],
        },
        Host::OtherUnix => Launcher {
            program: "xdg-open",
            args: vec![uri.to_string()],
        },
    }
}

/// URI scheme (text before the first `:`), lowercased.
pub fn scheme(uri: &str) -> Option<String> {
    let (scheme, rest) = uri.split_once(':')?;
    if scheme.is_empty() || rest.is_empty() {
        return None;
    }
    if !scheme
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some(scheme.to_ascii_lowercase())
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Open `uri` with the host's default handler.
///
/// Fire-and-forget: the launcher is spawned detached from the terminal
/// and reaped in the background. Only a failure to spawn is reported.
pub fn open_uri(uri: &str) -> Result<()> {
    if scheme(uri).is_none() {
        return Err(Error::Opener {
            uri: uri.to_string(),
            reason: "not an absolute URI".into(),
        });
    }

    let launcher = launcher_for(current_host(), uri);
    Command::new(launcher.program)
        .args(&launcher.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|child| drop(reap(child)))
        .map_err(|e| Error::Opener {
            uri: uri.to_string(),
            reason: format!("{}: {}", launcher.program, e),
        })
}

/// Wait for `child` on a detached thread so it does not linger as a zombie.
fn reap(mut child: Child) -> JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || child.wait())
}

// ============================================================================
// TESTS
// ============================================================================
