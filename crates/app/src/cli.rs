//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use registrar_domain::registrar::ProductAction;

/// Call the registrar's XML-RPC API from the command line.
///
/// Responses are printed to stdout as JSON. The exit status is 0 on success,
/// 1 when the registrar rejected the call, and 2 for every other failure.
#[derive(Debug, Parser)]
#[command(name = "registrar-rpc", version, about)]
pub struct Cli {
    /// Endpoint settings file (defaults to the user config directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Endpoint URL, overriding the settings file and environment.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Whole-call timeout in milliseconds.
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Invoke any procedure with JSON-encoded arguments.
    Call(CallArgs),

    /// Check whether domain names are available.
    Check(CheckArgs),

    /// Show a member's prices for every supported TLD.
    Prices(PricesArgs),
}

/// Arguments of `call`.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Procedure name, e.g. `member_show_details`.
    pub procedure: String,

    /// Positional arguments, each a JSON document (`'"alice"'`, `20`, `'[{"a": 1}]'`).
    #[arg(value_name = "ARG_JSON")]
    pub args: Vec<String>,

    /// Do not prepend the configured login token.
    #[arg(long)]
    pub no_login: bool,
}

/// Arguments of `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Fully-qualified names to check.
    #[arg(required = true, value_name = "DOMAIN")]
    pub domains: Vec<String>,
}

/// Arguments of `prices`.
#[derive(Debug, Args)]
pub struct PricesArgs {
    /// Member whose prices are quoted.
    #[arg(short, long)]
    pub member: String,

    /// Priced operation: register, transfer or renewal.
    #[arg(short, long, default_value = "register")]
    pub action: ProductAction,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_call_with_global_flags() {
        let cli = Cli::try_parse_from([
            "registrar-rpc",
            "call",
            "member_show_details",
            "\"alice\"",
            "--url",
            "http://localhost:8080/xmlrpc",
            "--timeout-ms",
            "2000",
        ])
        .expect("valid command line");

        assert_eq!(cli.url.as_deref(), Some("http://localhost:8080/xmlrpc"));
        assert_eq!(cli.timeout_ms, Some(2000));
        let Command::Call(call) = cli.command else {
            panic!("expected call");
        };
        assert_eq!(call.procedure, "member_show_details");
        assert_eq!(call.args, ["\"alice\""]);
        assert!(!call.no_login);
    }

    #[test]
    fn test_parse_prices_action() {
        let cli = Cli::try_parse_from(["registrar-rpc", "prices", "-m", "alice", "-a", "renew"])
            .expect("valid command line");
        let Command::Prices(prices) = cli.command else {
            panic!("expected prices");
        };
        assert_eq!(prices.action, ProductAction::Renewal);

        assert!(Cli::try_parse_from(["registrar-rpc", "prices", "-m", "alice", "-a", "buy"]).is_err());
    }

    #[test]
    fn test_check_requires_a_domain() {
        assert!(Cli::try_parse_from(["registrar-rpc", "check"]).is_err());
    }
}
