use chrono::{DateTime, Local, TimeZone};

use crate::error::ParseError;
use crate::records::{AnalyticsCookies, CampaignData, ReferralRecord, VisitorRecord};

/// Campaign parameter keys as they appear on the wire, each paired with
/// the `CampaignData` field it populates. Keys outside this table are
/// ignored.
const CAMPAIGN_KEYS: &[(&str, fn(&mut CampaignData, String))] = &[
    ("utmcsr", |c, v| c.source = Some(v)),
    ("utmccn", |c, v| c.name = Some(v)),
    ("utmcmd", |c, v| c.medium = Some(v)),
    ("utmctr", |c, v| c.term = Some(v)),
    ("utmcct", |c, v| c.content = Some(v)),
];

/// Parses a raw __utmz cookie value into a [`ReferralRecord`].
///
/// Missing, empty, or structurally malformed input (fewer than 5
/// period-separated segments) yields the all-null record rather than an
/// error; stale or absent tracking cookies are routine and must not
/// abort the caller.
pub fn parse_referral(raw: Option<&str>) -> ReferralRecord {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return ReferralRecord::default(),
    };

    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() < 5 {
        return ReferralRecord::default();
    }

    // Sources and content paths may themselves contain periods
    // (utmcsr=stumbleupon.com, utmcct=/refer.php), so everything from the
    // fifth segment onward is one campaign-parameter segment.
    let campaign_segment = segments[4..].join(".");

    let mut campaign_data = CampaignData::default();
    for param in campaign_segment.split('|') {
        // A parameter without '=' carries no campaign field.
        if let Some((key, value)) = param.split_once('=') {
            if let Some((_, set)) = CAMPAIGN_KEYS.iter().find(|(k, _)| *k == key) {
                set(&mut campaign_data, value.to_string());
            }
        }
    }

    // AdWords clicks carry a gclid parameter; attribution goes to paid
    // search no matter what the campaign parameters said. The parsed
    // term survives the override.
    if raw.contains("gclid=") {
        campaign_data = CampaignData {
            source: Some("google".to_string()),
            name: None,
            medium: Some("cpc".to_string()),
            term: campaign_data.term,
            content: None,
        };
    }

    ReferralRecord {
        domain_hash: Some(segments[0].to_string()),
        timestamp: Some(segments[1].to_string()),
        session_counter: Some(segments[2].to_string()),
        campaign_number: Some(segments[3].to_string()),
        campaign_data,
    }
}

/// Parses a raw __utma cookie value into a [`VisitorRecord`].
///
/// Missing or empty input, or a segment count other than 6, yields the
/// all-null record. A 6-segment value whose timestamp fields are not
/// numeric is genuine corruption and fails with
/// [`ParseError::InvalidTimestamp`] naming the offending field.
pub fn parse_visitor(raw: Option<&str>) -> Result<VisitorRecord, ParseError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(VisitorRecord::default()),
    };

    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() != 6 {
        return Ok(VisitorRecord::default());
    }

    Ok(VisitorRecord {
        domain_hash: Some(segments[0].to_string()),
        random_id: Some(segments[1].to_string()),
        first_visit_at: Some(epoch_to_local("first_visit_at", segments[2])?),
        previous_visit_at: Some(epoch_to_local("previous_visit_at", segments[3])?),
        current_visit_at: Some(epoch_to_local("current_visit_at", segments[4])?),
        session_counter: Some(segments[5].to_string()),
    })
}

/// Decodes an epoch-seconds cookie segment to a local-timezone datetime.
fn epoch_to_local(field: &'static str, value: &str) -> Result<DateTime<Local>, ParseError> {
    let seconds: f64 = value.parse().map_err(|_| ParseError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })?;

    let secs = seconds.trunc() as i64;
    let nanos = (seconds.fract() * 1_000_000_000.0) as u32;

    Local
        .timestamp_opt(secs, nanos)
        .single()
        .ok_or_else(|| ParseError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

impl AnalyticsCookies {
    /// Parses both cookie values at once, as they arrive on a request.
    /// Either value may be absent.
    pub fn parse(utmz: Option<&str>, utma: Option<&str>) -> Result<Self, ParseError> {
        Ok(AnalyticsCookies {
            referral: parse_referral(utmz),
            visitor: parse_visitor(utma)?,
        })
    }
}
