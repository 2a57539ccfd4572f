//! Metron MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Logs go to stderr, filtered by
//! `RUST_LOG` (default `info`).

mod server;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use metron::config::Settings;
use metron::{logging, Gateway, Session};
use server::{Server, PROTOCOL_VERSION, SERVER_VERSION};
use tracing::{debug, error, info};

fn main() -> ExitCode {
    logging::init("info");
    let settings = Settings::from_env();

    let gateway = match Gateway::with_default_registry() {
        Ok(g) => g,
        Err(e) => {
            error!(error = %e, "registry initialisation failed");
            return ExitCode::FAILURE;
        }
    };

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Metron MCP server started");
    info!(history_path = %settings.history_path.display(), units = gateway.list_units().len(), "ready");

    let mut server = Server::new(Session::new(Arc::new(gateway)), settings);

    // Line-based protocol
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!(bytes = line.len(), "received");

                let Some(response) = server.handle_line(line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response).and_then(|_| stdout.flush()) {
                    error!(error = %e, "failed to write response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
    ExitCode::SUCCESS
}
