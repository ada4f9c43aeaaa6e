//! Tests for access tier resolution and field masking

use domain_access::masking::{mask_field, FieldKind};
use domain_access::session::{resolve_tier, AccessTier, Capability, Session, UserType};

// ============================================================================
// Tier Resolution Tests
// ============================================================================

mod tier_tests {
    use super::*;

    #[test]
    fn test_anonymous_session_is_unauthenticated() {
        assert_eq!(
            resolve_tier(&Session::anonymous()),
            AccessTier::Unauthenticated
        );
    }

    #[test]
    fn test_team_session_carries_capability() {
        let session = Session::team(Capability::Admin);
        assert_eq!(resolve_tier(&session), AccessTier::Team(Capability::Admin));

        let session = Session::team(Capability::Editor);
        assert_eq!(resolve_tier(&session), AccessTier::Team(Capability::Editor));
    }

    #[test]
    fn test_team_session_without_level_defaults_to_viewer() {
        let session = Session {
            authenticated: true,
            user_type: Some(UserType::Team),
            access_level: None,
        };
        assert_eq!(resolve_tier(&session), AccessTier::Team(Capability::Viewer));
    }

    #[test]
    fn test_individual_session() {
        assert_eq!(resolve_tier(&Session::individual()), AccessTier::Individual);
    }

    #[test]
    fn test_trial_resolves_to_individual() {
        let session = Session {
            authenticated: true,
            user_type: Some(UserType::Trial),
            access_level: Some(Capability::Viewer),
        };
        assert_eq!(resolve_tier(&session), AccessTier::Individual);
    }

    #[test]
    fn test_authenticated_session_without_user_type_gets_nothing() {
        let session = Session {
            authenticated: true,
            user_type: None,
            access_level: Some(Capability::Admin),
        };
        assert_eq!(resolve_tier(&session), AccessTier::Unauthenticated);
    }

    #[test]
    fn test_only_team_sees_raw_fields() {
        assert!(AccessTier::Team(Capability::Viewer).sees_raw_fields());
        assert!(AccessTier::Team(Capability::Admin).sees_raw_fields());
        assert!(!AccessTier::Individual.sees_raw_fields());
        assert!(!AccessTier::Unauthenticated.sees_raw_fields());
    }
}

// ============================================================================
// Masking Tests
// ============================================================================

mod masking_tests {
    use super::*;

    const INDIVIDUAL: AccessTier = AccessTier::Individual;
    const TEAM: AccessTier = AccessTier::Team(Capability::Viewer);

    #[test]
    fn test_team_tier_is_a_no_op_for_every_field_kind() {
        for kind in [
            FieldKind::ClaimNumber,
            FieldKind::Name,
            FieldKind::Address,
            FieldKind::Email,
            FieldKind::Phone,
        ] {
            assert_eq!(mask_field(&TEAM, kind, "anything at all"), "anything at all");
        }
        // Capability level does not change masking
        assert_eq!(
            mask_field(&AccessTier::Team(Capability::Admin), FieldKind::Phone, "(555) 123-4567"),
            "(555) 123-4567"
        );
    }

    #[test]
    fn test_phone_masking_scenario() {
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Phone, "(555) 123-4567"),
            "***-4567"
        );
        assert_eq!(
            mask_field(&TEAM, FieldKind::Phone, "(555) 123-4567"),
            "(555) 123-4567"
        );
    }

    #[test]
    fn test_phone_with_too_few_digits_passes_through() {
        assert_eq!(mask_field(&INDIVIDUAL, FieldKind::Phone, "911"), "911");
    }

    #[test]
    fn test_claim_number_masking() {
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::ClaimNumber, "0001064902"),
            "***-4902"
        );
        // Short claim numbers pass through
        assert_eq!(mask_field(&INDIVIDUAL, FieldKind::ClaimNumber, "4902"), "4902");
        assert_eq!(mask_field(&INDIVIDUAL, FieldKind::ClaimNumber, ""), "");
    }

    #[test]
    fn test_name_masking() {
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Name, "John Smith"),
            "J*** S***"
        );
        // Single-letter words are kept as is
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Name, "J Smith"),
            "J S***"
        );
    }

    #[test]
    fn test_address_masking() {
        assert_eq!(
            mask_field(
                &INDIVIDUAL,
                FieldKind::Address,
                "123 Main Street, Houston, TX 77001"
            ),
            "123 M*** S***, Houston"
        );
        // No city part
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Address, "123 Main Street"),
            "123 M*** S***"
        );
        // Short words such as ordinal suffixes survive
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Address, "9 Elm St, Dallas"),
            "9 E*** St, Dallas"
        );
    }

    #[test]
    fn test_email_masking() {
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Email, "john.smith@email.com"),
            "j***@e***.com"
        );
        // Multi-label domain keeps only the TLD readable
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Email, "a.b@mail.example.org"),
            "a***@m***.e***.org"
        );
        assert_eq!(
            mask_field(&INDIVIDUAL, FieldKind::Email, "no-at-sign"),
            "no-at-sign"
        );
    }

    #[test]
    fn test_unauthenticated_masks_like_individual() {
        let anon = AccessTier::Unauthenticated;
        assert_eq!(
            mask_field(&anon, FieldKind::Phone, "(555) 123-4567"),
            mask_field(&INDIVIDUAL, FieldKind::Phone, "(555) 123-4567")
        );
    }

    #[test]
    fn test_masking_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                mask_field(&INDIVIDUAL, FieldKind::Name, "Sarah Jenkins"),
                "S*** J***"
            );
        }
    }
}
