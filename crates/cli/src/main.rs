use anyhow::Context;
use clap::Parser;
use ferrous_lookup_application::use_cases::LookupDomainUseCase;
use ferrous_lookup_domain::CliOverrides;
use ferrous_lookup_infrastructure::dns::{
    IterativeResolver, IterativeResolverConfig, LookupEventEmitter, UdpTransport,
};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod display;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Lookup - Iterative DNS resolver that follows referrals from a root server")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// IPv4 address of the server to start from (usually a root server)
    root_server: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Destination port on every server queried
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Maximum number of servers to query
    #[arg(long)]
    max_steps: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root_server.clone(),
        port: cli.port,
        query_timeout: cli.timeout,
        max_steps: cli.max_steps,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);

    let start_server = bootstrap::start_server(&config)?;

    info!(
        domain = %cli.domain,
        start_server = %start_server,
        "Starting Ferrous Lookup v{}",
        env!("CARGO_PKG_VERSION")
    );

    let transport =
        UdpTransport::new().with_response_verification(config.resolver.verify_transaction_id);
    let (emitter, steps) = LookupEventEmitter::new_enabled();
    let resolver = Arc::new(
        IterativeResolver::new(transport, IterativeResolverConfig::from(&config.resolver))
            .with_event_emitter(emitter),
    );

    let printer = display::spawn_step_printer(steps);
    let use_case = LookupDomainUseCase::new(resolver);

    let result = use_case.execute(&cli.domain, start_server).await;

    // The printer drains until the last emitter goes away with the resolver.
    drop(use_case);
    printer.await.context("step printer task failed")?;

    let resolution =
        result.with_context(|| format!("lookup of {} failed", cli.domain.trim()))?;

    println!("{}", "-".repeat(64));
    println!(
        "{} resolved to {} ({} servers queried, answered by {})",
        cli.domain.trim(),
        resolution.address,
        resolution.hops,
        resolution.answered_by
    );

    Ok(())
}
