//! Server startup helpers
//!
//! Tracing setup and the `serve_stdio!` macro shared by the MCP servers
//! in this workspace.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber for an MCP server
///
/// Logs go to stderr because stdout carries the MCP protocol. The filter
/// comes from `RUST_LOG`, with `<crate_name>=info` added on top so the
/// server's own events are visible without any configuration.
///
/// `LOG_FORMAT=json` switches to one JSON object per line.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(format!("{crate_name}=info").parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn json_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Generate a `#[tokio::main]` entry point serving an MCP server over stdio
///
/// `$build` is evaluated after tracing is initialised and must produce
/// `anyhow::Result<Server>`, so configuration failures abort startup with a
/// non-zero exit status before any request is served.
///
/// ```rust,ignore
/// mcp_common::serve_stdio!("twist_mcp", build_server());
/// ```
#[macro_export]
macro_rules! serve_stdio {
    ($crate_name:expr, $build:expr) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = match $build {
                Ok(server) => server,
                Err(e) => {
                    tracing::error!("Startup failed: {:#}", e);
                    return Err(e);
                }
            };
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
}
