pub mod args;
pub mod cookie;
pub mod error;
pub mod records;
pub mod report;
pub mod utils;

pub use args::Args;
pub use cookie::{parse_referral, parse_visitor};
pub use error::ParseError;
pub use records::{AnalyticsCookies, CampaignData, ReferralRecord, VisitorRecord};
pub use report::parse_cookies;
