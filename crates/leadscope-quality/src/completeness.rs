//! Contact-channel completeness of a single lead.

use leadscope_core::BusinessLead;
use serde::Serialize;

/// Number of contact channels a lead is checked for.
pub const CONTACT_FIELD_COUNT: u8 = 3;

/// Minimum digit count for a phone number to count as usable.
pub const MIN_PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContactField {
    Email,
    Phone,
    Website,
}

impl ContactField {
    /// Fixed evaluation order; `missing_fields` and score reasons follow it.
    pub const ALL: [ContactField; 3] = [
        ContactField::Email,
        ContactField::Phone,
        ContactField::Website,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Website => "website",
        }
    }

    /// Whether `lead` carries a structurally valid value for this channel.
    #[must_use]
    pub fn is_present(self, lead: &BusinessLead) -> bool {
        match self {
            ContactField::Email => has_email(lead),
            ContactField::Phone => has_phone(lead),
            ContactField::Website => has_website(lead),
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactField::Email => write!(f, "Email"),
            ContactField::Phone => write!(f, "Phone"),
            ContactField::Website => write!(f, "Website"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletenessResult {
    /// Count of valid channels, `0..=3`.
    pub score: u8,
    pub total: u8,
    /// `round(score / total * 100)`.
    pub percentage: u8,
    pub missing_fields: Vec<ContactField>,
}

#[must_use]
pub fn has_email(lead: &BusinessLead) -> bool {
    lead.email().is_some_and(|email| email.contains('@'))
}

#[must_use]
pub fn has_phone(lead: &BusinessLead) -> bool {
    lead.phone().is_some_and(|phone| {
        phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
    })
}

#[must_use]
pub fn has_website(lead: &BusinessLead) -> bool {
    lead.website().is_some_and(|site| site.contains('.'))
}

/// Check which contact channels a lead has. Never fails: absent or
/// malformed values simply count as missing.
#[must_use]
pub fn evaluate_completeness(lead: &BusinessLead) -> CompletenessResult {
    let missing_fields: Vec<ContactField> = ContactField::ALL
        .into_iter()
        .filter(|field| !field.is_present(lead))
        .collect();

    // At most three fields, so the narrowing cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let score = CONTACT_FIELD_COUNT - missing_fields.len() as u8;

    CompletenessResult {
        score,
        total: CONTACT_FIELD_COUNT,
        percentage: rounded_percentage(score, CONTACT_FIELD_COUNT),
        missing_fields,
    }
}

fn rounded_percentage(part: u8, whole: u8) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = (u16::from(part) * 100 + u16::from(whole) / 2) / u16::from(whole);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead_with(email: Option<&str>, phone: Option<&str>, website: Option<&str>) -> BusinessLead {
        BusinessLead {
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            website: website.map(str::to_string),
            ..BusinessLead::named("Test Lead")
        }
    }

    #[test]
    fn complete_lead_scores_three() {
        let result = evaluate_completeness(&lead_with(
            Some("a@x.com"),
            Some("5551234567"),
            Some("a.com"),
        ));
        assert_eq!(result.score, 3);
        assert_eq!(result.total, 3);
        assert_eq!(result.percentage, 100);
        assert!(result.missing_fields.is_empty());
    }

    #[test]
    fn empty_lead_lists_all_fields_in_order() {
        let result = evaluate_completeness(&BusinessLead::named("Empty"));
        assert_eq!(result.score, 0);
        assert_eq!(result.percentage, 0);
        assert_eq!(
            result.missing_fields,
            vec![ContactField::Email, ContactField::Phone, ContactField::Website]
        );
    }

    #[test]
    fn percentages_round_to_nearest() {
        let one = evaluate_completeness(&lead_with(Some("a@x.com"), None, None));
        let two = evaluate_completeness(&lead_with(Some("a@x.com"), None, Some("a.com")));
        assert_eq!(one.percentage, 33);
        assert_eq!(two.percentage, 67);
        assert_eq!(two.missing_fields, vec![ContactField::Phone]);
    }

    #[test]
    fn email_without_at_sign_is_missing() {
        assert!(!has_email(&lead_with(Some("info.example.com"), None, None)));
    }

    #[test]
    fn phone_counts_digits_after_stripping_punctuation() {
        assert!(has_phone(&lead_with(None, Some("(555) 123-4567"), None)));
        assert!(!has_phone(&lead_with(None, Some("555-1234"), None)));
        assert!(!has_phone(&lead_with(None, Some("call us"), None)));
    }

    #[test]
    fn website_requires_a_dot() {
        assert!(has_website(&lead_with(None, None, Some("https://example.ie"))));
        assert!(!has_website(&lead_with(None, None, Some("localhost"))));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let result = evaluate_completeness(&lead_with(Some(" "), Some(""), Some("   ")));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn field_display_names_are_capitalized() {
        assert_eq!(ContactField::Email.to_string(), "Email");
        assert_eq!(ContactField::Website.label(), "website");
    }
}
