use chrono::{DateTime, Local};
use serde::Serialize;

/// Campaign attribution tuple carried inside the __utmz cookie.
///
/// Any subset of fields may be absent depending on which campaign
/// parameters appeared in the cookie.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CampaignData {
    pub source: Option<String>,
    pub name: Option<String>,
    pub medium: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

/// Referral data from the __utmz cookie: how the visitor arrived.
///
/// Either fully populated or all-null; `campaign_data` is always present
/// but its fields follow the same rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReferralRecord {
    pub domain_hash: Option<String>,
    /// Raw numeric string as stored in the cookie, not decoded to a time.
    pub timestamp: Option<String>,
    pub session_counter: Option<String>,
    pub campaign_number: Option<String>,
    pub campaign_data: CampaignData,
}

/// Visitor identity and visit-recency data from the __utma cookie.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VisitorRecord {
    pub domain_hash: Option<String>,
    pub random_id: Option<String>,
    pub first_visit_at: Option<DateTime<Local>>,
    pub previous_visit_at: Option<DateTime<Local>>,
    pub current_visit_at: Option<DateTime<Local>>,
    pub session_counter: Option<String>,
}

/// Both analytics cookies of a request, parsed together.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnalyticsCookies {
    pub referral: ReferralRecord,
    pub visitor: VisitorRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_are_all_null() {
        let referral = ReferralRecord::default();
        assert_eq!(referral.domain_hash, None);
        assert_eq!(referral.timestamp, None);
        assert_eq!(referral.session_counter, None);
        assert_eq!(referral.campaign_number, None);
        assert_eq!(referral.campaign_data, CampaignData::default());

        let visitor = VisitorRecord::default();
        assert_eq!(visitor.domain_hash, None);
        assert_eq!(visitor.random_id, None);
        assert_eq!(visitor.first_visit_at, None);
        assert_eq!(visitor.previous_visit_at, None);
        assert_eq!(visitor.current_visit_at, None);
        assert_eq!(visitor.session_counter, None);
    }

    #[test]
    fn sentinel_record_serializes_with_null_fields() {
        let value = serde_json::to_value(ReferralRecord::default()).unwrap();
        assert_eq!(value["domain_hash"], serde_json::Value::Null);
        assert_eq!(value["campaign_data"]["source"], serde_json::Value::Null);
    }
}
