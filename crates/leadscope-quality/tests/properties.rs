//! Behavioral properties of the scoring, tiering and preview pipeline.

use leadscope_core::{BusinessLead, SearchContext};
use leadscope_quality::{
    classify, evaluate_completeness, group_by_tier, quality_stats, score_lead, select_preview,
    ScoringPolicy, SelectionManager, Tier,
};

fn complete(name: &str) -> BusinessLead {
    BusinessLead {
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: Some("555 123 4567".to_string()),
        website: Some(format!("{}.example.com", name.to_lowercase())),
        address: Some("Dublin".to_string()),
        ..BusinessLead::named(name)
    }
}

fn bare(name: &str) -> BusinessLead {
    BusinessLead::named(name)
}

fn many(count: usize) -> Vec<BusinessLead> {
    (0..count).map(|i| bare(&format!("Lead {i:04}"))).collect()
}

fn scenario() -> Vec<BusinessLead> {
    vec![
        BusinessLead {
            email: Some("a@x.com".to_string()),
            phone: Some("5551234567".to_string()),
            website: Some("a.com".to_string()),
            address: Some("Dublin".to_string()),
            ..BusinessLead::named("A")
        },
        BusinessLead {
            address: Some("Dublin".to_string()),
            ..BusinessLead::named("B")
        },
        BusinessLead::named("C"),
    ]
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

#[test]
fn dublin_scenario_scores_and_tiers() {
    let leads = scenario();
    let search = SearchContext::new("Dublin, Ireland");

    let a = score_lead(&leads[0], &search);
    let b = score_lead(&leads[1], &search);
    let c = score_lead(&leads[2], &search);

    assert_eq!(evaluate_completeness(&leads[0]).score, 3);
    assert_eq!((a.score, a.tier), (100, Tier::Excellent));

    assert_eq!(evaluate_completeness(&leads[1]).score, 0);
    assert_eq!(b.location_relevance, 100);
    assert_eq!((b.score, b.tier), (40, Tier::Poor));

    assert_eq!(evaluate_completeness(&leads[2]).score, 0);
    assert_eq!(c.location_relevance, 50);
    assert_eq!((c.score, c.tier), (20, Tier::Poor));

    assert!(a.score > b.score && b.score > c.score);

    let grouped = group_by_tier(&leads, &search);
    assert_eq!(grouped.excellent.len(), 1);
    assert!(grouped.okay.is_empty());
    let poor: Vec<_> = grouped.poor.iter().map(|s| s.lead.name.as_str()).collect();
    assert_eq!(poor, vec!["B", "C"]);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_identical() {
    let mut leads = scenario();
    leads.extend(many(30));
    leads.push(complete("Zeta"));
    let search = SearchContext::new("Dublin, Ireland");

    assert_eq!(group_by_tier(&leads, &search), group_by_tier(&leads, &search));
    assert_eq!(quality_stats(&leads, &search), quality_stats(&leads, &search));
    assert_eq!(select_preview(&leads), select_preview(&leads));
    assert_eq!(score_lead(&leads[0], &search), score_lead(&leads[0], &search));
}

// ---------------------------------------------------------------------------
// Monotonicity
// ---------------------------------------------------------------------------

#[test]
fn adding_contact_channels_never_lowers_scores() {
    let search = SearchContext::new("Dublin");
    let mut lead = BusinessLead {
        address: Some("Cork".to_string()),
        ..bare("Growing")
    };

    let steps: [fn(&mut BusinessLead); 3] = [
        |l| l.email = Some("g@growing.ie".to_string()),
        |l| l.phone = Some("+353 21 555 0000".to_string()),
        |l| l.website = Some("growing.ie".to_string()),
    ];

    let mut completeness = evaluate_completeness(&lead).score;
    let mut quality = score_lead(&lead, &search).score;
    for step in steps {
        step(&mut lead);
        let next_completeness = evaluate_completeness(&lead).score;
        let next_quality = score_lead(&lead, &search).score;
        assert!(next_completeness >= completeness);
        assert!(next_quality >= quality);
        completeness = next_completeness;
        quality = next_quality;
    }
    assert_eq!(completeness, 3);
}

// ---------------------------------------------------------------------------
// Tier boundaries
// ---------------------------------------------------------------------------

#[test]
fn tier_boundaries() {
    assert_eq!(classify(80), Tier::Excellent);
    assert_eq!(classify(79), Tier::Okay);
    assert_eq!(classify(50), Tier::Okay);
    assert_eq!(classify(49), Tier::Poor);
}

#[test]
fn scored_lead_at_exactly_80_is_excellent() {
    // email + phone (67%) and a full location match: 0.6 * 67 + 40 = 80.2
    let lead = BusinessLead {
        website: None,
        ..complete("Boundary")
    };
    let result = score_lead(&lead, &SearchContext::new("Dublin"));
    assert_eq!(result.score, 80);
    assert_eq!(result.tier, Tier::Excellent);
}

#[test]
fn scored_leads_straddle_every_tier_boundary() {
    // No address, so relevance is the policy default; pick defaults that land
    // the weighted score exactly on each side of the thresholds.
    let email_only = BusinessLead {
        email: Some("owner@example.com".to_string()),
        ..bare("Email Only")
    };
    let email_and_phone = BusinessLead {
        phone: Some("555 123 4567".to_string()),
        ..email_only.clone()
    };
    let search = SearchContext::new("Dublin");
    let with_default = |relevance: u8| ScoringPolicy {
        missing_address_relevance: relevance,
        ..ScoringPolicy::default()
    };

    // 0.6 * 67 + 0.4 * 97 = 79.0
    let at_79 = with_default(97).score(&email_and_phone, &search);
    assert_eq!((at_79.score, at_79.tier), (79, Tier::Okay));

    // 0.6 * 33 + 0.4 * 75 = 49.8
    let at_50 = with_default(75).score(&email_only, &search);
    assert_eq!((at_50.score, at_50.tier), (50, Tier::Okay));

    // 0.6 * 33 + 0.4 * 74 = 49.4
    let at_49 = with_default(74).score(&email_only, &search);
    assert_eq!((at_49.score, at_49.tier), (49, Tier::Poor));
}

#[test]
fn street_address_in_searched_city_keeps_contacted_lead_excellent() {
    let search = SearchContext::new("Dublin, Ireland");
    let street = BusinessLead {
        address: Some("12 Quay St, Dublin".to_string()),
        website: None,
        ..complete("Quay")
    };
    let region_only = BusinessLead {
        address: Some("Ireland".to_string()),
        ..street.clone()
    };
    let other_city = BusinessLead {
        address: Some("Cork, Ireland".to_string()),
        ..street.clone()
    };

    let street = score_lead(&street, &search);
    assert_eq!((street.score, street.tier), (80, Tier::Excellent));
    assert!(score_lead(&region_only, &search).score < street.score);
    assert!(score_lead(&other_city, &search).score < street.score);
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn tier_counts_cover_every_lead() {
    let mut leads = scenario();
    leads.extend(many(17));
    leads.push(complete("Omega"));
    let stats = quality_stats(&leads, &SearchContext::new("Dublin, Ireland"));
    assert_eq!(stats.excellent + stats.okay + stats.poor, leads.len());
}

#[test]
fn empty_input_stats_are_zero() {
    let stats = quality_stats(&[], &SearchContext::new("Dublin"));
    assert_eq!((stats.excellent, stats.okay, stats.poor), (0, 0, 0));
    assert_eq!(stats.average_score, 0);
}

// ---------------------------------------------------------------------------
// Freemium
// ---------------------------------------------------------------------------

#[test]
fn preview_sizes() {
    for (total, expected) in [(3, 3), (40, 5), (200, 15), (80, 8)] {
        let leads = many(total);
        let preview = select_preview(&leads);
        assert_eq!(preview.preview.len(), expected, "total = {total}");
        assert_eq!(preview.hidden_count, total - expected, "total = {total}");
    }
}

#[test]
fn preview_prefers_complete_leads_regardless_of_input_order() {
    let mut leads = many(40);
    leads.insert(7, complete("Kilo"));
    leads.push(complete("Alpha"));
    leads.insert(0, complete("Mike"));

    let preview = select_preview(&leads);
    let names: Vec<_> = preview.preview.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(&names[..3], &["Alpha", "Kilo", "Mike"]);
    assert!(preview.preview[3..]
        .iter()
        .all(|l| evaluate_completeness(l).score == 0));
}

#[test]
fn unlock_prices() {
    for (total, expected) in [(150, 20), (100, 10), (1, 10)] {
        assert_eq!(
            select_preview(&many(total)).unlock_price_units,
            expected,
            "total = {total}"
        );
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn selection_fallback_and_dedup() {
    let leads = scenario();
    let mut selection = SelectionManager::new();

    let everything: Vec<_> = selection.resolve(&leads).iter().map(|l| l.name.clone()).collect();
    assert_eq!(everything, vec!["A", "B", "C"]);

    selection.toggle(leads[2].key());
    selection.toggle(leads[0].key());
    selection.toggle(leads[1].key());
    selection.toggle(leads[1].key());

    let picked: Vec<_> = selection.resolve(&leads).iter().map(|l| l.name.clone()).collect();
    assert_eq!(picked, vec!["A", "C"]);
}

#[test]
fn selection_over_grouped_view_survives_regrouping() {
    let leads = scenario();
    let search = SearchContext::new("Dublin, Ireland");
    let mut selection = SelectionManager::new();
    selection.toggle(leads[2].key());

    let grouped = group_by_tier(&leads, &search);
    let resolved = selection.resolve(grouped.iter().map(|s| s.lead));
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, "C");
}
