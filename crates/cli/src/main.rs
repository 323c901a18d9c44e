use clap::Parser;
use digsip_application::use_cases::{DigSipRequest, DigSipUseCase};
use digsip_domain::{NaptrOrdering, DEFAULT_DOMAIN_SUFFIX};
use digsip_infrastructure::dns::UdpDnsLookup;
use digsip_infrastructure::logging::TracingReporter;
use std::sync::Arc;
use tracing::debug;

mod bootstrap;

#[derive(Parser, Debug)]
#[command(name = "digsip")]
#[command(version)]
#[command(about = "Resolve a phone number to the IPv4 address of its SIP server through ENUM")]
struct Cli {
    /// DNS server to query (IP, IP:PORT, HOSTNAME or HOSTNAME:PORT)
    #[arg(short = 'd', long = "dnsserver", value_name = "ADDRESS")]
    dns_server: String,

    /// Phone number to look up
    #[arg(short = 'p', long = "phonenumber", value_name = "NUMBER")]
    phone_number: String,

    /// ENUM domain suffix appended to the reversed digits
    #[arg(long = "domainsuffix", value_name = "SUFFIX", default_value = DEFAULT_DOMAIN_SUFFIX)]
    domain_suffix: String,

    /// Per-query timeout in seconds
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// NAPTR scan order (answer, preference)
    #[arg(long = "naptr-order", value_name = "ORDER", default_value = "answer")]
    naptr_order: NaptrOrdering,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn overrides(&self) -> bootstrap::CliOverrides {
        bootstrap::CliOverrides {
            dns_server: self.dns_server.clone(),
            domain_suffix: self.domain_suffix.clone(),
            timeout_secs: self.timeout,
            naptr_ordering: self.naptr_order,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.overrides())?;
    bootstrap::init_logging(&config.logging);

    let server = bootstrap::resolve_server(&config)?;
    debug!(
        server = %server,
        suffix = %config.domain_suffix,
        timeout_secs = config.query_timeout.as_secs(),
        naptr_order = %config.naptr_ordering,
        "Configuration loaded"
    );

    let use_case = DigSipUseCase::new(
        Arc::new(UdpDnsLookup::new()),
        Arc::new(TracingReporter::new()),
    )
    .with_naptr_ordering(config.naptr_ordering);
    let request = DigSipRequest::new(
        cli.phone_number,
        config.domain_suffix.clone(),
        server,
        config.query_timeout,
    );

    // The failure was already reported through the tracing reporter.
    match use_case.execute(&request) {
        Ok(resolution) => {
            println!("{}", resolution.address);
            Ok(())
        }
        Err(_) => std::process::exit(1),
    }
}
