//! Metron CLI
//!
//! Interactive unit converter. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`); `METRON_HISTORY_PATH` sets where `save` writes.

mod prompt;

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use metron::config::Settings;
use metron::{logging, Gateway, MetronError, Session};
use tracing::error;
use prompt::Prompt;

fn main() {
    logging::init("warn");
    let settings = Settings::from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(Gateway::with_default_registry(), &settings, stdin.lock(), stdout.lock()) {
        error!(error = %e, "terminal I/O failed");
    }
}

/// Run a session over `gateway`, or report why there is none
///
/// A registry failure is shown to the user and ends the program normally.
fn run<R: BufRead, W: Write>(
    gateway: Result<Gateway, MetronError>,
    settings: &Settings,
    input: R,
    mut output: W,
) -> io::Result<()> {
    // Built once; every conversion in the session reuses it
    let gateway = match gateway {
        Ok(g) => Arc::new(g),
        Err(e) => {
            error!(error = %e, "registry initialisation failed");
            writeln!(output, "Failed to fetch units: {}", e)?;
            return Ok(());
        }
    };

    let mut session = Session::new(gateway);
    Prompt::new(input, output, settings).run(&mut session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_registry_failure_is_reported() {
        let mut output = Vec::new();
        let outcome = run(
            Err(MetronError::registry_unavailable("'m' names both 'meter' and 'minute'")),
            &Settings::default(),
            Cursor::new(b"5\n".as_slice()),
            &mut output,
        );
        assert!(outcome.is_ok());
        let out = String::from_utf8(output).unwrap();
        assert_eq!(
            out,
            "Failed to fetch units: unit registry unavailable: 'm' names both 'meter' and 'minute'\n"
        );
    }

    #[test]
    fn test_runs_session_with_registry() {
        let mut output = Vec::new();
        run(
            Gateway::with_default_registry(),
            &Settings::default(),
            Cursor::new(b"1\nfoot\ninch\nn\n".as_slice()),
            &mut output,
        )
        .unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("1.0 foot is equal to 12.0 inch"));
    }
}
