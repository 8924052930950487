use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::{records::AnalyticsCookies, Args};

pub fn parse_cookies(args: &Args) -> Result<AnalyticsCookies> {
    info!(
        action = "start",
        component = "cookie_parsing",
        has_utmz = args.utmz.is_some(),
        has_utma = args.utma.is_some(),
        "Parsing analytics cookies"
    );

    let cookies = AnalyticsCookies::parse(args.utmz.as_deref(), args.utma.as_deref())?;

    if args.utmz.is_some() && cookies.referral.domain_hash.is_none() {
        warn!(
            action = "fallback",
            component = "cookie_parsing",
            cookie = "__utmz",
            "Cookie value did not match the expected structure"
        );
    }
    if args.utma.is_some() && cookies.visitor.domain_hash.is_none() {
        warn!(
            action = "fallback",
            component = "cookie_parsing",
            cookie = "__utma",
            "Cookie value did not match the expected structure"
        );
    }

    info!(
        action = "complete",
        component = "cookie_parsing",
        "Cookie parsing completed"
    );
    Ok(cookies)
}

pub fn print_parse_results(cookies: &AnalyticsCookies, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(cookies)?);
        return Ok(());
    }

    let referral = &cookies.referral;
    println!("\n--- __utmz Referral ---");
    println!("Domain hash: {}", display(&referral.domain_hash));
    println!("Timestamp: {}", display(&referral.timestamp));
    println!("Session counter: {}", display(&referral.session_counter));
    println!("Campaign number: {}", display(&referral.campaign_number));

    let campaign = &referral.campaign_data;
    println!("\n--- Campaign ---");
    println!("Source: {}", display(&campaign.source));
    println!("Name: {}", display(&campaign.name));
    println!("Medium: {}", display(&campaign.medium));
    println!("Term: {}", display(&campaign.term));
    println!("Content: {}", display(&campaign.content));

    let visitor = &cookies.visitor;
    println!("\n--- __utma Visitor ---");
    println!("Domain hash: {}", display(&visitor.domain_hash));
    println!("Random id: {}", display(&visitor.random_id));
    println!("First visit: {}", display_time(&visitor.first_visit_at));
    println!("Previous visit: {}", display_time(&visitor.previous_visit_at));
    println!("Current visit: {}", display_time(&visitor.current_visit_at));
    println!("Session counter: {}", display(&visitor.session_counter));

    Ok(())
}

fn display(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("(not set)")
}

fn display_time(field: &Option<DateTime<Local>>) -> String {
    match field {
        Some(time) => time.format("%B %-d, %Y %H:%M:%S").to_string(),
        None => "(not set)".to_string(),
    }
}
