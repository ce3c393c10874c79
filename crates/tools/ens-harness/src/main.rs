//! CLI harness for the ENS matcher and resolver
//!
//! This tool allows testing:
//! - Expression validation and candidate extraction on arbitrary text
//! - Live resolution against the configured resolver
//! - Text-record lookups and browser-action URLs

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fusion_name_resolution::client::DEFAULT_TEXT_RECORD;
use fusion_name_resolution::{
    extract_candidate, get_supported_chains, get_supported_text_records, is_valid_ens_expression,
    BrowserAction, CallerContext, NormalizedName, ResolutionClient, ResolutionOutcome,
    ResolverOptions,
};
use fusion_net::{HttpTransport, ProxyConfig, ResolverConfig};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ens-harness")]
#[command(about = "Fusion ENS matcher and resolver harness", long_about = None)]
struct Cli {
    /// Resolver base URL (overrides FUSION_RESOLVER_URL)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// SOCKS5 proxy as host:port
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Client source tag
    #[arg(long, global = true, default_value = "android")]
    source: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether text is one complete ENS expression
    Validate {
        /// Text to check
        text: String,
    },

    /// Find the first ENS candidate in free text
    Extract {
        /// Text to search
        text: String,
    },

    /// Resolve an expression or the first candidate found in text
    Resolve {
        /// Expression or free text
        text: String,

        /// Where the result will be used
        #[arg(short, long, value_enum, default_value = "field")]
        context: ContextArg,
    },

    /// Fetch a text record through the legacy lookup path
    TextRecord {
        /// ENS name, e.g. nick.eth
        name: String,

        /// Record type
        #[arg(short, long, default_value = DEFAULT_TEXT_RECORD)]
        record: String,
    },

    /// Print the URL a browser action would open
    Browse {
        /// ENS expression
        name: String,

        /// Default browser action
        #[arg(short, long, default_value = "etherscan")]
        action: String,
    },

    /// List supported chains and text records
    Supported,
}

#[derive(Clone, Copy, ValueEnum)]
enum ContextArg {
    Field,
    Browser,
}

impl From<ContextArg> for CallerContext {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Field => CallerContext::Field,
            ContextArg::Browser => CallerContext::Browser,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { ref text } => {
            let valid = is_valid_ens_expression(text);
            println!("{}", valid);
        }
        Commands::Extract { ref text } => match extract_candidate(text) {
            Some(name) => {
                let query = name.query();
                println!("{}", name);
                info!(
                    "raw={:?} kind={:?} base={} qualifier={:?}",
                    query.raw_text, query.kind, query.base_name, query.qualifier
                );
            }
            None => println!("none"),
        },
        Commands::Resolve { ref text, context } => {
            let name = candidate(text)?;
            let client = build_client(&cli)?;
            match client.try_resolve(&name, context.into()).await {
                Ok(outcome) => print_outcome(&name, &outcome),
                Err(e) => {
                    warn!("{} failed: {}", name, e);
                    print_outcome(&name, &ResolutionOutcome::NotFound);
                }
            }
        }
        Commands::TextRecord {
            ref name,
            ref record,
        } => {
            let client = build_client(&cli)?;
            let value = client
                .try_resolve_text_record(name, record)
                .await
                .with_context(|| format!("text record {} for {}", record, name))?;
            println!("{}", value);
        }
        Commands::Browse {
            ref name,
            ref action,
        } => {
            let name = candidate(name)?;
            let action: BrowserAction = action.parse()?;
            let client = build_client(&cli)?;
            match client.resolve_for_browser(&name, action).await {
                Some(url) => println!("{}", url),
                None => println!("none"),
            }
        }
        Commands::Supported => {
            println!("chains: {}", get_supported_chains().join(", "));
            println!("text records: {}", get_supported_text_records().join(", "));
        }
    }

    Ok(())
}

/// Parse a standalone expression, else take the first candidate in the text
fn candidate(text: &str) -> anyhow::Result<NormalizedName> {
    NormalizedName::parse(text)
        .ok()
        .or_else(|| extract_candidate(text))
        .with_context(|| format!("no ENS expression in {:?}", text))
}

fn build_client(cli: &Cli) -> anyhow::Result<ResolutionClient<HttpTransport>> {
    let mut config = ResolverConfig::from_env()?;
    if let Some(ref endpoint) = cli.endpoint {
        config.base_url = endpoint.clone();
    }
    if let Some(ref proxy) = cli.proxy {
        config.proxy = Some(parse_proxy(proxy)?);
    }

    let options = ResolverOptions {
        source: cli.source.clone(),
        ..ResolverOptions::default()
    };

    info!("Resolver: {}", config.base_url);
    let transport = HttpTransport::new(config)?;
    Ok(ResolutionClient::with_options(transport, options))
}

fn parse_proxy(value: &str) -> anyhow::Result<ProxyConfig> {
    let (host, port) = value
        .rsplit_once(':')
        .with_context(|| format!("proxy must be host:port, got {:?}", value))?;
    let port: u16 = port
        .parse()
        .with_context(|| format!("invalid proxy port {:?}", port))?;
    Ok(ProxyConfig::new(host, port))
}

fn print_outcome(name: &NormalizedName, outcome: &ResolutionOutcome) {
    match outcome {
        ResolutionOutcome::Address(address) => println!("{} -> address {}", name, address),
        ResolutionOutcome::Url(url) => println!("{} -> url {}", name, url),
        ResolutionOutcome::RawText(text) => println!("{} -> text {:?}", name, text),
        ResolutionOutcome::NotFound => println!("{} -> not found", name),
    }
}
