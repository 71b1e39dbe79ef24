//! Subcommand execution.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use registrar_application::{PriceList, Registrar};
use registrar_domain::registrar::DomainCheck;
use registrar_domain::{CallResponse, FaultKind, LoginToken};
use registrar_infrastructure::{
    EndpointSettings, XmlRpcClient, parse_argument, to_json_stable, xml_rpc_client,
};
use serde::Serialize;

use crate::cli::{CallArgs, CheckArgs, Cli, Command, PricesArgs};

/// How a command ended, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    /// Every call succeeded.
    Success,
    /// The registrar rejected at least one call.
    Rejected,
    /// At least one call failed outside the registrar's control.
    Failed,
}

impl Outcome {
    /// Classifies a single response.
    #[must_use]
    pub fn of(response: &CallResponse) -> Self {
        match response.fault().map(|fault| fault.kind) {
            None => Self::Success,
            Some(FaultKind::Business) => Self::Rejected,
            Some(FaultKind::Transport | FaultKind::Protocol | FaultKind::Request) => Self::Failed,
        }
    }

    /// Process exit status for this outcome.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Rejected => ExitCode::from(1),
            Self::Failed => ExitCode::from(2),
        }
    }
}

/// Resolves endpoint settings: file, then environment, then flags.
pub async fn load_settings(cli: &Cli) -> Result<EndpointSettings> {
    let settings = match &cli.config {
        Some(path) => EndpointSettings::load(path).await?,
        None => EndpointSettings::load_default().await?,
    };
    Ok(settings
        .apply_env()?
        .with_overrides(cli.url.clone(), cli.timeout_ms))
}

/// Runs the parsed command line.
pub async fn run(cli: Cli) -> Result<Outcome> {
    let settings = load_settings(&cli).await?;
    let endpoint = settings.to_endpoint()?;
    tracing::debug!(url = %endpoint.url(), timeout = ?endpoint.timeout(), "endpoint resolved");
    let client = Arc::new(xml_rpc_client(endpoint).context("cannot build HTTP client")?);

    match cli.command {
        Command::Call(args) => call(&client, &settings, args).await,
        Command::Check(args) => check(client, &settings, args).await,
        Command::Prices(args) => prices(client, &settings, args).await,
    }
}

fn require_login(settings: &EndpointSettings) -> Result<LoginToken> {
    settings
        .login_token()?
        .ok_or_else(|| anyhow!("no `login` configured in the settings file"))
}

async fn call(client: &XmlRpcClient, settings: &EndpointSettings, args: CallArgs) -> Result<Outcome> {
    let mut arguments = Vec::with_capacity(args.args.len() + 1);
    if !args.no_login {
        arguments.push(require_login(settings)?.as_value().clone());
    }
    for raw in &args.args {
        arguments.push(parse_argument(raw)?);
    }

    let response = client.invoke(&args.procedure, arguments).await;
    emit(&response)?;
    Ok(Outcome::of(&response))
}

async fn check(
    client: Arc<XmlRpcClient>,
    settings: &EndpointSettings,
    args: CheckArgs,
) -> Result<Outcome> {
    let registrar = Registrar::new(client, require_login(settings)?);
    let response = registrar
        .check_domains(&DomainCheck::new(args.domains))
        .await;
    emit(&response)?;
    Ok(Outcome::of(&response))
}

/// One line of the price list output.
#[derive(Serialize)]
struct PriceLine<'a> {
    product: String,
    response: &'a CallResponse,
}

async fn prices(
    client: Arc<XmlRpcClient>,
    settings: &EndpointSettings,
    args: PricesArgs,
) -> Result<Outcome> {
    let registrar = Registrar::new(client, require_login(settings)?);
    let quotes = PriceList::new(registrar)
        .execute(&args.member, args.action)
        .await;

    let lines: Vec<PriceLine<'_>> = quotes
        .iter()
        .map(|quote| PriceLine {
            product: quote.product.code(),
            response: &quote.response,
        })
        .collect();
    print!("{}", to_json_stable(&lines)?);

    for quote in quotes.iter().filter(|q| q.response.is_fault()) {
        if let Some(fault) = quote.response.fault() {
            eprintln!("{}: {}", quote.product, fault.display_message());
        }
    }

    Ok(quotes
        .iter()
        .map(|quote| Outcome::of(&quote.response))
        .max()
        .unwrap_or(Outcome::Success))
}

/// Prints a response as JSON, and a short fault summary on stderr.
fn emit(response: &CallResponse) -> Result<()> {
    print!("{}", to_json_stable(response)?);
    if let Some(fault) = response.fault() {
        eprintln!("{}", fault.display_message());
    }
    Ok(())
}
