use digsip_domain::{AnswerSet, NaptrOrdering, NaptrRecord};
use fancy_regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `!sip:\1@<domain>!`, with the backreference escaped once or twice.
static SIP_DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)!sip:\\{1,2}1@([^!]+)!").expect("SIP domain pattern compiles")
});

static SIP_TCP_SERVICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(_sip\._tcp\.[^.\s!]+\.[^\s!]+)").expect("SIP TCP pattern compiles")
});

const SIP_TCP_PREFIX: &str = "_sip._tcp";

/// Pulls SIP routing data out of NAPTR answer sets.
///
/// The first matching record wins. Records are visited in answer order unless
/// the extractor was built with [`NaptrOrdering::Preference`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NaptrExtractor {
    ordering: NaptrOrdering,
}

impl NaptrExtractor {
    pub fn new(ordering: NaptrOrdering) -> Self {
        Self { ordering }
    }

    fn records<'a>(&self, answers: &'a AnswerSet) -> Vec<&'a NaptrRecord> {
        let mut records: Vec<&NaptrRecord> = answers.naptr().collect();
        if self.ordering == NaptrOrdering::Preference {
            records.sort_by_key(|r| (r.order, r.preference));
        }
        records
    }

    /// Domain part of the first `!sip:\1@<domain>!` substitution found.
    pub fn sip_domain(&self, answers: &AnswerSet) -> Option<String> {
        self.records(answers).into_iter().find_map(|record| {
            let regexp = record.regexp()?;
            let domain = capture(&SIP_DOMAIN_PATTERN, regexp)?;
            debug!(regexp = %regexp, domain = %domain, "SIP domain pattern matched");
            Some(domain)
        })
    }

    /// `_sip._tcp` service name, from a regexp field or else from a replacement field.
    pub fn transport_service(&self, answers: &AnswerSet) -> Option<String> {
        let records = self.records(answers);

        let from_regexp = records.iter().find_map(|record| {
            let regexp = record.regexp()?;
            let service = capture(&SIP_TCP_SERVICE_PATTERN, regexp)?;
            Some(service.trim_end_matches('.').to_string())
        });
        if from_regexp.is_some() {
            return from_regexp;
        }

        records.iter().find_map(|record| {
            let replacement = record.replacement()?;
            if replacement.to_ascii_lowercase().contains(SIP_TCP_PREFIX) {
                debug!(replacement = %replacement, "SIP TCP service taken from replacement");
                Some(replacement.to_string())
            } else {
                None
            }
        })
    }
}

fn capture(pattern: &Regex, haystack: &str) -> Option<String> {
    let captures = pattern.captures(haystack).ok().flatten()?;
    let value = captures.get(1)?.as_str();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
