//! Best-effort clipboard hand-off via external tools.
//!
//! The picker never surfaces clipboard failures to the user; callers are
//! expected to discard the result.

use std::io::Write;
use std::process::{Command, Stdio};

/// Copy `text` to the system clipboard using the first tool that accepts it.
pub fn copy(text: &str) -> Result<(), String> {
	let try_command = |cmd: &str, args: &[&str]| -> bool {
		Command::new(cmd)
			.args(args)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()
			.ok()
			.and_then(|mut child| {
				let success = child
					.stdin
					.take()
					.map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
					.unwrap_or(false);
				if success {
					child.wait().ok().map(|_| ())
				} else {
					None
				}
			})
			.is_some()
	};

	if try_command("wl-copy", &[]) {
		return Ok(());
	}

	if try_command("xclip", &["-selection", "clipboard"]) {
		return Ok(());
	}

	if try_command("xsel", &["--clipboard", "--input"]) {
		return Ok(());
	}

	if try_command("pbcopy", &[]) {
		return Ok(());
	}

	Err("no clipboard tool available".to_string())
}
