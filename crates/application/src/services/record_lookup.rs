use crate::ports::DnsLookup;
use digsip_domain::{
    AnswerSet, DnsQuery, DomainError, LookupError, RecordType, ResolutionContext,
    ResolutionStage,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

/// The SRV record chosen for a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvTarget {
    pub host: String,
    pub port: u16,
    /// Number of SRV records in the answer, including the chosen one.
    pub candidates: usize,
}

/// Typed wrapper over [`DnsLookup`]: one query per call, empty answers are failures.
#[derive(Clone)]
pub struct RecordLookup {
    lookup: Arc<dyn DnsLookup>,
}

impl RecordLookup {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    /// Queries `name` and returns the non-empty answer set.
    ///
    /// Moves `ctx` to `stage` first, so a failure is attributed to the right step.
    pub fn query(
        &self,
        ctx: &mut ResolutionContext,
        stage: ResolutionStage,
        name: &str,
        record_type: RecordType,
    ) -> Result<AnswerSet, DomainError> {
        ctx.enter(stage, name);
        let query = DnsQuery::new(name, record_type);

        debug!(
            server = %ctx.server(),
            domain = %query.domain,
            record_type = %query.record_type,
            stage = %stage,
            "Sending DNS query"
        );

        let answers = self
            .lookup
            .lookup(&query, ctx.server(), ctx.timeout())
            .map_err(|e| DomainError::lookup_failed(stage, &query, &e))?;

        if answers.is_empty() {
            return Err(DomainError::lookup_failed(
                stage,
                &query,
                &LookupError::NoData,
            ));
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            answers = answers.len(),
            "DNS query answered"
        );
        Ok(answers)
    }

    pub fn naptr(
        &self,
        ctx: &mut ResolutionContext,
        stage: ResolutionStage,
        name: &str,
    ) -> Result<AnswerSet, DomainError> {
        self.query(ctx, stage, name, RecordType::NAPTR)
    }

    /// Target host (trailing dot stripped) and port of the first SRV record.
    ///
    /// Priority and weight are ignored.
    pub fn srv_target(
        &self,
        ctx: &mut ResolutionContext,
        service: &str,
    ) -> Result<SrvTarget, DomainError> {
        let stage = ResolutionStage::Srv;
        let answers = self.query(ctx, stage, service, RecordType::SRV)?;

        let candidates = answers.srv().count();
        let srv = answers.srv().next().ok_or_else(|| {
            DomainError::lookup_failed(
                stage,
                &DnsQuery::new(service, RecordType::SRV),
                &LookupError::NoData,
            )
        })?;
        if srv.is_unavailable() {
            return Err(DomainError::ExtractionFailed {
                stage,
                detail: format!("{} has root target, service not available", service),
            });
        }
        if srv.port == 0 {
            return Err(DomainError::ExtractionFailed {
                stage,
                detail: format!("{} points at {} port 0", service, srv.target_host()),
            });
        }

        Ok(SrvTarget {
            host: srv.target_host().to_string(),
            port: srv.port,
            candidates,
        })
    }

    /// First IPv4 address of `host`, in answer order.
    pub fn ipv4_address(
        &self,
        ctx: &mut ResolutionContext,
        host: &str,
    ) -> Result<Ipv4Addr, DomainError> {
        let stage = ResolutionStage::A;
        let answers = self.query(ctx, stage, host, RecordType::A)?;

        let address = answers.a().next().map(|a| a.address);
        address.ok_or_else(|| {
            DomainError::lookup_failed(
                stage,
                &DnsQuery::new(host, RecordType::A),
                &LookupError::NoData,
            )
        })
    }
}
