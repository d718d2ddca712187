use clap::Parser;

/// Datetime MCP Server
///
/// A Model Context Protocol server exposing current date/time and timezone
/// queries over stdio (default) or HTTP/SSE.
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-datetime
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `PORT`: Default listening port in SSE mode
/// - `MCP_SSE_PREFIX`: Default route prefix in SSE mode
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-datetime")]
#[command(about = "An MCP server for date/time and timezone queries")]
#[command(version)]
pub struct Cli {
    /// Serve over HTTP/SSE instead of the default stdio transport
    #[arg(long)]
    pub sse: bool,

    /// Listening port in SSE mode
    #[arg(long, env = "PORT", default_value_t = 3000, value_name = "PORT")]
    pub port: u16,

    /// Route prefix in SSE mode, e.g. '/mcp' (normalized to a leading and no
    /// trailing slash)
    #[arg(long, env = "MCP_SSE_PREFIX", default_value = "", value_name = "PREFIX")]
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stdio() {
        // Only flags are asserted; port and prefix fall back to PORT and
        // MCP_SSE_PREFIX, which the test environment may set.
        let cli = Cli::try_parse_from(["mcp-server-datetime"]).unwrap();
        assert!(!cli.sse);
    }

    #[test]
    fn test_explicit_port_overrides_env() {
        let cli = Cli::try_parse_from(["mcp-server-datetime", "--port", "3000"]).unwrap();
        assert_eq!(cli.port, 3000);
    }

    #[test]
    fn test_sse_with_port_and_prefix() {
        let cli =
            Cli::try_parse_from(["mcp-server-datetime", "--sse", "--port", "8080", "--prefix", "/mcp"])
                .unwrap();
        assert!(cli.sse);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.prefix, "/mcp");
    }

    #[test]
    fn test_rejects_malformed_port() {
        let result = Cli::try_parse_from(["mcp-server-datetime", "--port", "not-a-number"]);
        assert!(result.is_err());
    }
}
