//! Read-only views: tiers, stats, preview and the keyed lead list.

use leadscope_core::{AppConfig, BusinessLead};
use leadscope_quality::{apply_view, evaluate_completeness, GroupedLeads, LeadFilter, SortKey, Tier};

use crate::{freemium_policy, load_leads, scoring_policy, FilterArgs, LeadsInput};

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

fn fmt_contact(lead: &BusinessLead) -> String {
    let completeness = evaluate_completeness(lead);
    format!("{}/{}", completeness.score, completeness.total)
}

/// JSON for the `score` view: the whole grouping, or one tier's rows.
fn grouped_json(grouped: &GroupedLeads<'_>, only_tier: Option<Tier>) -> serde_json::Result<String> {
    match only_tier {
        Some(tier) => serde_json::to_string_pretty(grouped.tier(tier)),
        None => serde_json::to_string_pretty(grouped),
    }
}

/// Print leads grouped by quality tier.
///
/// # Errors
///
/// Returns an error if the leads file cannot be loaded, the policy is invalid,
/// or JSON output cannot be encoded.
pub(crate) fn run_score(
    config: &AppConfig,
    input: &LeadsInput,
    filter: &FilterArgs,
    only_tier: Option<Tier>,
    json: bool,
) -> anyhow::Result<()> {
    let leads = load_leads(&input.leads)?;
    let filter = LeadFilter::from(filter);
    let visible: Vec<BusinessLead> = leads.into_iter().filter(|l| filter.matches(l)).collect();
    let policy = scoring_policy(config)?;
    let grouped = policy.group(&visible, &input.search());

    if json {
        println!("{}", grouped_json(&grouped, only_tier)?);
        return Ok(());
    }

    if grouped.is_empty() {
        println!("no leads matched");
        return Ok(());
    }

    for tier in Tier::ALL {
        if only_tier.is_some_and(|t| t != tier) {
            continue;
        }
        let bucket = grouped.tier(tier);
        println!("== {} ({}) ==", tier.label(), bucket.len());
        if bucket.is_empty() {
            continue;
        }
        println!("{:<7}{:<9}{:<10}{:<34}REASONS", "SCORE", "CONTACT", "LOCATION", "NAME");
        for scored in bucket {
            println!(
                "{:<7}{:<9}{:<10}{:<34}{}",
                scored.quality.score,
                format!("{}%", scored.quality.contact_completeness),
                format!("{}%", scored.quality.location_relevance),
                truncate(&scored.lead.name, 30),
                scored.quality.reasons.join(", ")
            );
        }
    }

    Ok(())
}

/// Print tier counts, the mean score and contact coverage.
///
/// # Errors
///
/// Returns an error if the leads file cannot be loaded or the policy is invalid.
pub(crate) fn run_stats(config: &AppConfig, input: &LeadsInput, json: bool) -> anyhow::Result<()> {
    let leads = load_leads(&input.leads)?;
    let stats = scoring_policy(config)?.stats(&leads, &input.search());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("leads:         {}", leads.len());
    println!("excellent:     {}", stats.excellent);
    println!("okay:          {}", stats.okay);
    println!("poor:          {}", stats.poor);
    println!("average score: {}", stats.average_score);
    println!("with email:    {}", stats.total_with_email);
    println!("with phone:    {}", stats.total_with_phone);
    println!("with website:  {}", stats.total_with_website);
    Ok(())
}

/// Print the free preview and what unlocking the rest costs.
///
/// # Errors
///
/// Returns an error if the leads file cannot be loaded.
pub(crate) fn run_preview(config: &AppConfig, input: &LeadsInput) -> anyhow::Result<()> {
    let leads = load_leads(&input.leads)?;
    let preview = freemium_policy(config).select(&leads);

    println!("{:<9}{:<34}CATEGORY", "CONTACT", "NAME");
    for lead in &preview.preview {
        println!(
            "{:<9}{:<34}{}",
            fmt_contact(lead),
            truncate(&lead.name, 30),
            lead.category().unwrap_or("-")
        );
    }

    if preview.hidden_count > 0 {
        println!(
            "\n{} more leads hidden; unlock all {} for {} units",
            preview.hidden_count,
            leads.len(),
            preview.unlock_price_units
        );
    }

    Ok(())
}

/// Print the filtered, sorted view with the keys `export --select` accepts.
///
/// # Errors
///
/// Returns an error if the leads file cannot be loaded.
pub(crate) fn run_list(input: &LeadsInput, filter: &FilterArgs, sort: SortKey) -> anyhow::Result<()> {
    let leads = load_leads(&input.leads)?;
    let rows = apply_view(&leads, &LeadFilter::from(filter), sort);

    if rows.is_empty() {
        println!("no leads matched");
        return Ok(());
    }

    println!("{:<14}{:<9}{:<8}{:<34}ADDRESS", "KEY", "CONTACT", "RATING", "NAME");
    for lead in rows {
        println!(
            "{:<14}{:<9}{:<8}{:<34}{}",
            lead.key().short(),
            fmt_contact(lead),
            lead.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}")),
            truncate(&lead.name, 30),
            lead.address().unwrap_or("-")
        );
    }

    Ok(())
}
