use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, bail};

/// Use the given secret, or read one line from stdin.
pub fn secret_or_stdin(given: Option<&str>, label: &str) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("{label}: ");
        std::io::stderr().flush().ok();
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("failed to read {label} from stdin"))?;
    parse_secret_line(&line, label)
}

fn parse_secret_line(line: &str, label: &str) -> anyhow::Result<String> {
    let secret = line.trim_end_matches(['\r', '\n']);
    if secret.is_empty() {
        bail!("{label} is required");
    }
    Ok(secret.to_string())
}
