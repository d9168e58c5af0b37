use validator::{Validate, ValidationError};

use crate::types::{NewSwapRequest, RequestError, SwapRequest, SwapRequestFields, SwapRequestPatch};

/// Minimum length of a phone number, shared with the recovery and login paths.
pub const MIN_PHONE_LENGTH: usize = 10;

/// Minimum length of a secret code.
pub const MIN_SECRET_CODE_LENGTH: usize = 4;

/// Whether `secret_code` can serve as a credential: not blank once trimmed and
/// at least [`MIN_SECRET_CODE_LENGTH`] characters as given. The code itself is
/// stored and compared untrimmed.
pub fn is_valid_secret_code(secret_code: &str) -> bool {
    !secret_code.trim().is_empty() && secret_code.len() >= MIN_SECRET_CODE_LENGTH
}

/// Custom validation function for item types
pub fn validate_item_type(item_type: &str) -> Result<(), ValidationError> {
    if catalog::is_known_item(item_type) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_item_type").with_message("Please select an item type".into()))
    }
}

/// Checks the catalog rules every stored request must satisfy: a known item,
/// both sizes drawn from that item's size domain, different have and want
/// sizes, and a known camp when one is set.
pub fn validate_fields(fields: &SwapRequestFields) -> Result<(), RequestError> {
    if fields.name.is_empty() {
        return Err(RequestError::Validation("Please enter your name".to_string()));
    }

    let domain = catalog::size_domain_for(&fields.item_type).ok_or_else(|| {
        RequestError::Validation(format!("Unknown item type: {}", fields.item_type))
    })?;

    if !domain.contains(&fields.have_size) {
        return Err(RequestError::Validation(format!(
            "Size {} is not available for {}",
            fields.have_size,
            catalog::item_label(&fields.item_type)
        )));
    }

    if !domain.contains(&fields.want_size) {
        return Err(RequestError::Validation(format!(
            "Size {} is not available for {}",
            fields.want_size,
            catalog::item_label(&fields.item_type)
        )));
    }

    if fields.have_size == fields.want_size {
        return Err(RequestError::Validation(
            "You already have the size you want!".to_string(),
        ));
    }

    if let Some(camp) = &fields.camp {
        if !catalog::is_known_camp(camp) {
            return Err(RequestError::Validation(format!("Unknown camp: {}", camp)));
        }
    }

    Ok(())
}

/// Validates a draft and returns its normalized editable fields.
pub fn validate_draft(draft: &NewSwapRequest) -> Result<SwapRequestFields, RequestError> {
    draft.validate()?;

    let fields = SwapRequestFields {
        name: draft.name.trim().to_string(),
        item_type: draft.item_type.clone(),
        have_size: draft.have_size.clone(),
        want_size: draft.want_size.clone(),
        camp: catalog::normalize_camp(draft.camp.as_deref()),
    };
    validate_fields(&fields)?;

    if draft.phone.trim().len() < MIN_PHONE_LENGTH {
        return Err(RequestError::Validation(
            "Please enter a valid phone number".to_string(),
        ));
    }

    if !is_valid_secret_code(&draft.secret_code) {
        return Err(RequestError::Validation(
            "Secret code must be at least 4 characters".to_string(),
        ));
    }

    match (&draft.security_question, &draft.security_answer) {
        (None, None) => {}
        (Some(question), Some(answer)) => {
            if !catalog::is_known_security_question(question) {
                return Err(RequestError::Validation(
                    "Please select a valid security question".to_string(),
                ));
            }
            if answer.trim().is_empty() {
                return Err(RequestError::Validation(
                    "Security answer required".to_string(),
                ));
            }
        }
        _ => {
            return Err(RequestError::Validation(
                "Security question and answer must be provided together".to_string(),
            ));
        }
    }

    Ok(fields)
}

/// Applies a patch on top of the stored request and validates the result.
pub fn apply_patch(
    current: &SwapRequest,
    patch: &SwapRequestPatch,
) -> Result<SwapRequestFields, RequestError> {
    patch.validate()?;

    let mut fields = current.fields();
    if let Some(name) = &patch.name {
        fields.name = name.trim().to_string();
    }
    if let Some(item_type) = &patch.item_type {
        fields.item_type = item_type.clone();
    }
    if let Some(have_size) = &patch.have_size {
        fields.have_size = have_size.clone();
    }
    if let Some(want_size) = &patch.want_size {
        fields.want_size = want_size.clone();
    }
    if patch.camp.is_some() {
        fields.camp = catalog::normalize_camp(patch.camp.as_deref());
    }

    validate_fields(&fields)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ITEM_TYPES, sizes_for_item};

    fn draft() -> NewSwapRequest {
        NewSwapRequest {
            name: "  Ada Obi ".to_string(),
            phone: "08012345678".to_string(),
            item_type: "jungle_boot".to_string(),
            have_size: "40".to_string(),
            want_size: "42".to_string(),
            camp: Some("lagos".to_string()),
            secret_code: "s3cret".to_string(),
            security_question: None,
            security_answer: None,
        }
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let fields = validate_draft(&draft()).unwrap();
        assert_eq!(fields.name, "Ada Obi");
        assert_eq!(fields.camp.as_deref(), Some("lagos"));

        let mut any_camp = draft();
        any_camp.camp = Some("any".to_string());
        assert_eq!(validate_draft(&any_camp).unwrap().camp, None);
    }

    #[test]
    fn test_same_sizes_rejected_for_every_catalog_combination() {
        for item in ITEM_TYPES {
            for size in sizes_for_item(item.value) {
                let mut same = draft();
                same.item_type = item.value.to_string();
                same.have_size = size.value.to_string();
                same.want_size = size.value.to_string();
                assert!(
                    matches!(validate_draft(&same), Err(RequestError::Validation(_))),
                    "{} {} accepted",
                    item.value,
                    size.value
                );
            }
        }
    }

    #[test]
    fn test_sizes_must_belong_to_item_domain() {
        let mut letter_boot = draft();
        letter_boot.have_size = "XL".to_string();
        assert!(validate_draft(&letter_boot).is_err());

        let mut numeric_vest = draft();
        numeric_vest.item_type = "crested_vest".to_string();
        assert!(validate_draft(&numeric_vest).is_err());
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let mut short_phone = draft();
        short_phone.phone = "080123".to_string();
        assert!(validate_draft(&short_phone).is_err());

        let mut short_code = draft();
        short_code.secret_code = "abc".to_string();
        assert!(validate_draft(&short_code).is_err());

        let mut blank_code = draft();
        blank_code.secret_code = "    ".to_string();
        assert!(validate_draft(&blank_code).is_err());

        let mut padded_code = draft();
        padded_code.secret_code = "ab  ".to_string();
        assert!(validate_draft(&padded_code).is_ok());

        let mut blank_name = draft();
        blank_name.name = "   ".to_string();
        assert!(validate_draft(&blank_name).is_err());

        let mut unknown_item = draft();
        unknown_item.item_type = "helmet".to_string();
        assert!(validate_draft(&unknown_item).is_err());

        let mut unknown_camp = draft();
        unknown_camp.camp = Some("atlantis".to_string());
        assert!(validate_draft(&unknown_camp).is_err());
    }

    #[test]
    fn test_security_question_and_answer_go_together() {
        let mut question_only = draft();
        question_only.security_question = Some("first_pet".to_string());
        assert!(validate_draft(&question_only).is_err());

        let mut unknown_question = draft();
        unknown_question.security_question = Some("favorite_color".to_string());
        unknown_question.security_answer = Some("blue".to_string());
        assert!(validate_draft(&unknown_question).is_err());

        let mut both = draft();
        both.security_question = Some("first_pet".to_string());
        both.security_answer = Some("Rex".to_string());
        assert!(validate_draft(&both).is_ok());
    }
}
