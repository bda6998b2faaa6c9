//! # Validation Module
//!
//! Document-level submission checks.
//!
//! These are the hard gates run by the form layer before a quotation or
//! ticket is serialized into a create/update request. They are distinct
//! from the advisory [`crate::ItemWarning`]s emitted during editing: a
//! warning never blocks a save, a [`ValidationError`] always does.

use crate::error::{ValidationError, ValidationResult};
use crate::item::LineItem;

/// Requires at least one line item on the document.
pub fn validate_items_present(items: &[LineItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyDocument);
    }
    Ok(())
}

/// Validates a single line item for submission.
///
/// ## Rules
/// - description must not be empty
/// - quantity must be a finite number > 0
/// - price must be a finite number >= 0
/// - GST rate, when set, must be a finite number >= 0
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    if item.description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if !item.quantity.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "quantity".to_string(),
        });
    }
    if item.quantity <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if !item.price.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field: "price".to_string(),
        });
    }
    if item.price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if let Some(rate) = item.gst_rate {
        if !rate.is_finite() {
            return Err(ValidationError::InvalidNumber {
                field: "gst rate".to_string(),
            });
        }
        if rate < 0.0 {
            return Err(ValidationError::MustBeNonNegative {
                field: "gst rate".to_string(),
            });
        }
    }

    Ok(())
}

/// Validates a whole document's line items for submission.
///
/// Reports the first failure with the offending item's 1-based position.
pub fn validate_document(items: &[LineItem]) -> ValidationResult<()> {
    validate_items_present(items)?;

    for (index, item) in items.iter().enumerate() {
        validate_line_item(item).map_err(|source| ValidationError::Item {
            position: index + 1,
            source: Box::new(source),
        })?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> LineItem {
        LineItem {
            sr_no: 1,
            description: "Hydraulic pump".to_string(),
            hsn_sac_code: "8413".to_string(),
            quantity: 2.0,
            unit: "Nos".to_string(),
            price: 100.0,
            original_price: 100.0,
            max_discount_percentage: 0.0,
            gst_rate: Some(18.0),
            amount: 200.0,
            subtexts: Vec::new(),
        }
    }

    #[test]
    fn test_valid_item_passes() {
        assert!(validate_line_item(&valid_item()).is_ok());
    }

    #[test]
    fn test_empty_description_fails() {
        let mut item = valid_item();
        item.description = "   ".to_string();
        assert!(matches!(
            validate_line_item(&item),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_zero_quantity_fails() {
        let mut item = valid_item();
        item.quantity = 0.0;
        assert!(matches!(
            validate_line_item(&item),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_negative_price_fails() {
        let mut item = valid_item();
        item.price = -5.0;
        assert!(matches!(
            validate_line_item(&item),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_unset_gst_rate_is_allowed() {
        let mut item = valid_item();
        item.gst_rate = None;
        assert!(validate_line_item(&item).is_ok());
    }

    #[test]
    fn test_negative_gst_rate_fails() {
        let mut item = valid_item();
        item.gst_rate = Some(-1.0);
        assert!(validate_line_item(&item).is_err());
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(matches!(
            validate_document(&[]),
            Err(ValidationError::EmptyDocument)
        ));
    }

    #[test]
    fn test_document_reports_item_position() {
        let mut bad = valid_item();
        bad.quantity = 0.0;
        let items = vec![valid_item(), bad];

        let err = validate_document(&items).expect_err("second item invalid");
        assert_eq!(err.to_string(), "item 2: quantity must be positive");
    }
}
