use digsip_domain::{DnsServerAddr, LoggingConfig, NaptrOrdering, ResolverConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Values taken from the command line.
#[derive(Debug, Clone)]
pub struct CliOverrides {
    pub dns_server: String,
    pub domain_suffix: String,
    pub timeout_secs: u64,
    pub naptr_ordering: NaptrOrdering,
    pub log_level: String,
}

pub fn load_config(overrides: CliOverrides) -> anyhow::Result<ResolverConfig> {
    let dns_server: DnsServerAddr = overrides.dns_server.parse()?;

    let mut config = ResolverConfig::new(dns_server);
    config.domain_suffix = overrides.domain_suffix;
    config.query_timeout = Duration::from_secs(overrides.timeout_secs);
    config.naptr_ordering = overrides.naptr_ordering;
    config.logging = LoggingConfig {
        level: overrides.log_level.to_ascii_lowercase(),
    };

    config.validate()?;
    Ok(config)
}

/// Resolve the configured server once, before any query is sent.
pub fn resolve_server(config: &ResolverConfig) -> anyhow::Result<SocketAddr> {
    let server = config.dns_server.resolve()?;
    if config.dns_server.is_unresolved() {
        debug!(server = %config.dns_server, resolved = %server, "DNS server hostname resolved");
    }
    Ok(server)
}

pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
