//! Field masking policy
//!
//! Masks sensitive record fields for callers outside the team tier. Every
//! transform is pure and deterministic; callers mask raw values exactly
//! once, right before display. Masking an already-masked value is outside
//! the contract.

use crate::session::AccessTier;

/// Kind of field being masked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ClaimNumber,
    Name,
    Address,
    Email,
    Phone,
}

/// Applies the masking policy for a tier
///
/// The team tier (any capability level) always receives the raw value.
/// Individual and unauthenticated tiers receive the masked representation
/// for the field kind.
pub fn mask_field(tier: &AccessTier, kind: FieldKind, value: &str) -> String {
    match tier {
        AccessTier::Team(_) => value.to_string(),
        AccessTier::Individual | AccessTier::Unauthenticated => match kind {
            FieldKind::ClaimNumber => mask_claim_number(value),
            FieldKind::Name => mask_name(value),
            FieldKind::Address => mask_address(value),
            FieldKind::Email => mask_email(value),
            FieldKind::Phone => mask_phone(value),
        },
    }
}

/// Masks a claim number, keeping only the last four characters
///
/// `"0001064902"` -> `"***-4902"`. Values of four characters or fewer pass
/// through unchanged.
fn mask_claim_number(claim_number: &str) -> String {
    let chars: Vec<char> = claim_number.chars().collect();
    if chars.len() <= 4 {
        return claim_number.to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***-{tail}")
}

/// Masks a person's name, keeping the first letter of each word
///
/// `"John Smith"` -> `"J*** S***"`
fn mask_name(name: &str) -> String {
    name.split(' ')
        .map(mask_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn mask_word(word: &str) -> String {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => format!("{first}***"),
        _ => word.to_string(),
    }
}

/// Masks a street address, keeping the house number, the first letter of
/// each street word, and the city
///
/// `"123 Main Street, Houston, TX 77001"` -> `"123 M*** S***, Houston"`
fn mask_address(address: &str) -> String {
    let parts: Vec<&str> = address.split(',').map(str::trim).collect();
    let street = match parts.first() {
        Some(street) => street,
        None => return String::new(),
    };

    let masked_street = street
        .split(' ')
        .enumerate()
        .map(|(idx, word)| {
            // Keep the house number
            if idx == 0 && word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
                return word.to_string();
            }
            if word.chars().count() <= 2 {
                return word.to_string();
            }
            mask_word(word)
        })
        .collect::<Vec<_>>()
        .join(" ");

    match parts.get(1) {
        Some(city) => format!("{masked_street}, {city}"),
        None => masked_street,
    }
}

/// Masks an email address, keeping the first letter of the local part and
/// of each domain label while preserving the top-level domain
///
/// `"john.smith@email.com"` -> `"j***@e***.com"`
fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return email.to_string();
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let masked_domain = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            // Keep the TLD
            if idx == labels.len() - 1 {
                return label.to_string();
            }
            if label.chars().count() <= 1 {
                return label.to_string();
            }
            mask_word(label)
        })
        .collect::<Vec<_>>()
        .join(".");

    format!("{}@{masked_domain}", mask_word(local))
}

/// Masks a phone number, keeping only the last four digits
///
/// `"(555) 123-4567"` -> `"***-4567"`. Values with fewer than four digits
/// pass through unchanged.
fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return phone.to_string();
    }
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("***-{tail}")
}
