//! # Error Types
//!
//! Two distinct taxonomies, deliberately kept apart:
//!
//! - [`ValidationError`] - hard failures raised by document-level
//!   submission checks. These block a save.
//! - [`ItemWarning`] - advisory notices from the line-item calculator
//!   (price below the discount floor, unparseable input). The caller
//!   surfaces them as dismissible toasts; they never block computation
//!   or submission.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item description, limits, prices)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Hard validation failures for document submission.
///
/// Raised by the checks in [`crate::validation`] before a quotation or
/// ticket is handed to the persistence layer.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not a finite number.
    #[error("{field} is not a valid number")]
    InvalidNumber { field: String },

    /// The document has no line items at all.
    #[error("at least one line item is required")]
    EmptyDocument,

    /// A check failed on a specific line item (1-based position).
    #[error("item {position}: {source}")]
    Item {
        position: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

// =============================================================================
// Item Warning
// =============================================================================

/// Advisory warnings from line-item edits.
///
/// The `Display` text is the exact message shown to the user. Prices are
/// always formatted to two decimals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemWarning {
    /// New price is below the floor allowed by the item's discount limit.
    #[error(
        "Discount on '{description}' exceeds the {max_discount_percentage}% limit; minimum allowed price is ₹{floor:.2}"
    )]
    DiscountFloor {
        description: String,
        max_discount_percentage: f64,
        floor: f64,
    },

    /// No discount is allowed and the new price undercuts the original.
    #[error(
        "Price ₹{price:.2} for '{description}' is below the original price ₹{original_price:.2}"
    )]
    BelowOriginalPrice {
        description: String,
        price: f64,
        original_price: f64,
    },

    /// Non-empty price input that does not parse as a number.
    #[error("Invalid price entered for '{description}'")]
    InvalidPrice { description: String },

    /// Non-empty quantity input that does not parse as a number.
    #[error("Invalid quantity entered for '{description}'")]
    InvalidQuantity { description: String },

    /// GST rate input that is negative or does not parse as a number.
    #[error("Invalid GST rate entered for '{description}'")]
    InvalidGstRate { description: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
