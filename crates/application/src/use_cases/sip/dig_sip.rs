use crate::ports::{DnsLookup, ProgressReporter};
use crate::services::{NaptrExtractor, RecordLookup, SrvTarget};
use digsip_domain::{
    DomainError, E164Name, NaptrOrdering, ResolutionContext, ResolutionStage, SipResolution,
    StageValue,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct DigSipRequest {
    pub phone_number: String,
    pub domain_suffix: String,
    pub server: SocketAddr,
    pub timeout: Duration,
}

impl DigSipRequest {
    pub fn new(
        phone_number: impl Into<String>,
        domain_suffix: impl Into<String>,
        server: SocketAddr,
        timeout: Duration,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            domain_suffix: domain_suffix.into(),
            server,
            timeout,
        }
    }
}

/// Resolves a phone number to the IPv4 address of its SIP proxy.
///
/// phone number → ENUM name → NAPTR → SIP domain → NAPTR → `_sip._tcp` service
/// → SRV → target host and port → A → address. Stops at the first failing step.
pub struct DigSipUseCase {
    records: RecordLookup,
    extractor: NaptrExtractor,
    reporter: Arc<dyn ProgressReporter>,
}

impl DigSipUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>, reporter: Arc<dyn ProgressReporter>) -> Self {
        Self {
            records: RecordLookup::new(lookup),
            extractor: NaptrExtractor::default(),
            reporter,
        }
    }

    pub fn with_naptr_ordering(mut self, ordering: NaptrOrdering) -> Self {
        self.extractor = NaptrExtractor::new(ordering);
        self
    }

    #[instrument(skip(self, request), fields(phone_number = %request.phone_number))]
    pub fn execute(&self, request: &DigSipRequest) -> Result<SipResolution, DomainError> {
        let mut ctx = ResolutionContext::new(request.server, request.timeout);
        self.execute_with_context(&mut ctx, request)
    }

    /// Runs against the server and timeout held by `ctx`, leaving it at the
    /// last stage entered and the last value produced.
    pub fn execute_with_context(
        &self,
        ctx: &mut ResolutionContext,
        request: &DigSipRequest,
    ) -> Result<SipResolution, DomainError> {
        let result = self.run(ctx, request);
        if let Err(e) = &result {
            self.reporter.error(&format!(
                "{} (stage: {}, query: {})",
                e,
                ctx.stage(),
                ctx.query_name().unwrap_or("-")
            ));
        }
        result
    }

    fn run(
        &self,
        ctx: &mut ResolutionContext,
        request: &DigSipRequest,
    ) -> Result<SipResolution, DomainError> {
        let enum_name =
            E164Name::from_phone_number(&request.phone_number, &request.domain_suffix)?;
        let query_name = enum_name.as_str().to_string();
        ctx.record(StageValue::QueryName(query_name.clone()));

        self.reporter.info(&format!(
            "Querying DNS server {} for NAPTR records for {}",
            ctx.server(),
            query_name
        ));
        let enum_answers = self
            .records
            .naptr(ctx, ResolutionStage::DomainNaptr, &query_name)?;

        let sip_domain = self.extractor.sip_domain(&enum_answers).ok_or_else(|| {
            DomainError::ExtractionFailed {
                stage: ResolutionStage::DomainNaptr,
                detail: format!(
                    "none of the {} NAPTR records for {} carries a !sip:\\1@<domain>! rule",
                    enum_answers.len(),
                    query_name
                ),
            }
        })?;
        ctx.record(StageValue::SipDomain(sip_domain.clone()));
        self.reporter.info(&format!("Extracted SIP domain: {}", sip_domain));

        let domain_answers = self
            .records
            .naptr(ctx, ResolutionStage::ServiceNaptr, &sip_domain)?;

        let service_name = self
            .extractor
            .transport_service(&domain_answers)
            .ok_or_else(|| DomainError::ExtractionFailed {
                stage: ResolutionStage::ServiceNaptr,
                detail: format!(
                    "none of the {} NAPTR records for {} names a _sip._tcp service",
                    domain_answers.len(),
                    sip_domain
                ),
            })?;
        ctx.record(StageValue::ServiceName(service_name.clone()));
        self.reporter.info(&format!("Extracted SIP TCP record: {}", service_name));

        self.reporter.info(&format!("Querying SRV record for {}", service_name));
        let SrvTarget {
            host: target,
            port,
            candidates,
        } = self.records.srv_target(ctx, &service_name)?;
        if candidates > 1 {
            self.reporter.warn(&format!(
                "Found {} SRV records for {}, using the first one",
                candidates, service_name
            ));
        }
        ctx.record(StageValue::Target {
            host: target.clone(),
            port,
        });
        self.reporter.info(&format!("Found SIP server {} on port {}", target, port));

        let address = self.records.ipv4_address(ctx, &target)?;
        ctx.record(StageValue::Address(address));
        self.reporter.info(&format!(
            "SIP Invite should be sent to IP address: {}",
            address
        ));

        Ok(SipResolution {
            phone_number: enum_name.canonical(),
            query_name,
            sip_domain,
            service_name,
            target,
            port,
            address,
        })
    }
}
