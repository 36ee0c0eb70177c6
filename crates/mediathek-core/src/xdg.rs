//! Query of the XDG download directory via `xdg-user-dir`.
//!
//! Linux-only helper. Every failure mode (missing binary, broken pipe, empty
//! output, timeout) is recovered to `None`; callers always have a fixed
//! fallback folder available, so nothing here is worth an error.

use std::io::BufRead;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

/// How long the helper process may take before it is killed. The helper
/// normally answers within milliseconds; a hung invocation must not stall
/// application startup.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Ask `xdg-user-dir` for the user's download directory.
///
/// The process is started with the home directory as working directory and
/// the first line of its standard output, stripped of the trailing newline,
/// is the result.
pub fn download_dir(home: &Path) -> Option<PathBuf> {
    user_dir_query("xdg-user-dir", "DOWNLOAD", home, QUERY_TIMEOUT)
}

fn user_dir_query(program: &str, kind: &str, home: &Path, timeout: Duration) -> Option<PathBuf> {
    let line = first_line(program, kind, home, timeout)?;
    if line.is_empty() {
        tracing::debug!("{program} {kind} produced no output, using fallback");
        None
    } else {
        Some(PathBuf::from(line))
    }
}

/// Spawn `program arg` and capture the first line of its stdout, waiting at
/// most `timeout`. The read happens on a helper thread so a silent child can
/// be killed instead of blocking the caller forever.
fn first_line(program: &str, arg: &str, dir: &Path, timeout: Duration) -> Option<String> {
    let mut child = Command::new(program)
        .arg(arg)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| {
            tracing::debug!("could not launch {program}: {err}");
            err
        })
        .ok()?;

    let stdout = child.stdout.take()?;
    let (tx, rx) = mpsc::channel();
    let reader = std::thread::spawn(move || {
        let mut line = String::new();
        let _ = BufReader::new(stdout).read_line(&mut line);
        let _ = tx.send(line);
    });

    let line = match rx.recv_timeout(timeout) {
        Ok(line) => Some(line),
        Err(_) => {
            tracing::debug!("{program} {arg} did not answer within {timeout:?}, killing it");
            None
        }
    };
    // The answer (or the timeout) is in; a helper that lingers after
    // printing must not hold up the caller either, so never wait for a
    // live child to exit on its own.
    let _ = child.kill();
    let _ = child.wait();
    let _ = reader.join();
    Some(line?.trim_end_matches(['\r', '\n']).to_string())
}
