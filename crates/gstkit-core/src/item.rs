//! # Line-Item Calculator
//!
//! Maintains the invariant `amount = quantity × price` and enforces the
//! discount-floor policy whenever a line item is edited.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Form Field Change            Engine Call           Result          │
//! │  ─────────────────            ───────────           ──────          │
//! │                                                                     │
//! │  Pick catalog item ─────────► add_item() ─────────► new list, srNo  │
//! │                                                     renumbered 1..N │
//! │  Edit qty/price/rate ───────► apply_edit() ───────► new item +      │
//! │                                                     optional warning│
//! │  Click remove ──────────────► delete_item() ──────► new list, srNo  │
//! │                                                     renumbered 1..N │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three operations are pure: they take snapshots and return new
//! values, never mutating the caller's list in place. Warnings are
//! advisory only - the caller may still save the document.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ItemWarning;
use crate::numeric::{coerce, parse_number, ParsedNumber};

// =============================================================================
// Line Item
// =============================================================================

/// A single line on a quotation or ticket.
///
/// `amount` is always derived (`quantity × price`) and never authored
/// directly; [`apply_edit`] is the only place it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// 1-based display sequence, contiguous after every add/delete.
    pub sr_no: u32,

    /// What is being sold. Required for submission.
    pub description: String,

    /// HSN/SAC classification code. Opaque to the engine.
    pub hsn_sac_code: String,

    /// Quantity sold. Fractional quantities are allowed (hours, metres).
    pub quantity: f64,

    /// Unit of measure label. Opaque to the engine.
    pub unit: String,

    /// Per-unit selling price after any discount.
    pub price: f64,

    /// Per-unit pre-discount reference price from the catalog.
    pub original_price: f64,

    /// Maximum discount the seller allows on this item, 0-100.
    /// 0 means no discount is permitted at all.
    pub max_discount_percentage: f64,

    /// GST rate percentage. `None` is an explicit "unset", distinct
    /// from an explicit 0% rate.
    pub gst_rate: Option<f64>,

    /// Derived line total: `quantity × price`.
    pub amount: f64,

    /// Free-form annotation lines shown under the item. No effect on
    /// any computation.
    pub subtexts: Vec<String>,
}

impl LineItem {
    /// Seeds a new line item from a catalog entry.
    ///
    /// The selling price becomes both `price` and `original_price`, so
    /// the discount floor is anchored to the catalog price at the time
    /// the item was added. `sr_no` is assigned by renumbering.
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        let price = coerce(entry.selling_price.unwrap_or(0.0));
        LineItem {
            sr_no: 0,
            description: entry.name.clone(),
            hsn_sac_code: entry.hsn_code.clone().unwrap_or_default(),
            quantity: 1.0,
            unit: entry.unit.clone().unwrap_or_default(),
            price,
            original_price: price,
            max_discount_percentage: coerce(entry.max_discount_percentage.unwrap_or(0.0)),
            gst_rate: Some(coerce(entry.gst_rate.unwrap_or(0.0))),
            amount: price,
            subtexts: Vec::new(),
        }
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// An item/catalog record as delivered by the external catalog lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub selling_price: Option<f64>,
    pub gst_rate: Option<f64>,
    pub max_discount_percentage: Option<f64>,
    pub hsn_code: Option<String>,
    pub unit: Option<String>,
}

// =============================================================================
// Edits
// =============================================================================

/// A single field edit on a line item.
///
/// Numeric fields carry the raw form input: the engine owns the parsing
/// so that "empty", "invalid", and "zero" stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ItemEdit {
    Description(String),
    HsnSacCode(String),
    Unit(String),
    Quantity(String),
    Price(String),
    GstRate(String),
    AddSubtext(String),
    EditSubtext { index: usize, value: String },
    RemoveSubtext { index: usize },
}

/// Result of applying an edit: the new item snapshot plus an optional
/// advisory warning for the caller to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub item: LineItem,
    pub warning: Option<ItemWarning>,
}

// =============================================================================
// Operations
// =============================================================================

/// Applies a single field edit and recomputes the derived amount.
///
/// ## Behavior
/// - `Quantity`/`Price`: empty input coerces to 0; non-empty input that
///   fails to parse rejects the edit (prior value kept) with a warning.
///   Accepted edits recompute `amount = quantity × price`.
/// - `Price` additionally runs the discount-floor check against the
///   item's `original_price` and `max_discount_percentage` as they
///   stood before this edit.
/// - `GstRate`: empty input maps to `None`; negative or unparseable
///   input rejects the edit with a warning. No upper bound is enforced.
/// - Text fields replace directly; subtext edits touch only `subtexts`.
///
/// Warnings never block anything: the returned item is always usable.
pub fn apply_edit(item: &LineItem, edit: &ItemEdit) -> EditOutcome {
    let mut updated = item.clone();
    let mut warning = None;

    match edit {
        ItemEdit::Description(value) => updated.description = value.clone(),
        ItemEdit::HsnSacCode(value) => updated.hsn_sac_code = value.clone(),
        ItemEdit::Unit(value) => updated.unit = value.clone(),

        ItemEdit::Quantity(raw) => match parse_number(raw) {
            ParsedNumber::Value(qty) => {
                updated.quantity = qty;
                recompute_amount(&mut updated);
            }
            ParsedNumber::Empty => {
                updated.quantity = 0.0;
                recompute_amount(&mut updated);
            }
            ParsedNumber::Invalid => {
                warning = Some(ItemWarning::InvalidQuantity {
                    description: item.description.clone(),
                });
            }
        },

        ItemEdit::Price(raw) => match parse_number(raw) {
            ParsedNumber::Value(price) => {
                warning = discount_warning(item, price);
                updated.price = price;
                recompute_amount(&mut updated);
            }
            ParsedNumber::Empty => {
                warning = discount_warning(item, 0.0);
                updated.price = 0.0;
                recompute_amount(&mut updated);
            }
            ParsedNumber::Invalid => {
                warning = Some(ItemWarning::InvalidPrice {
                    description: item.description.clone(),
                });
            }
        },

        ItemEdit::GstRate(raw) => match parse_number(raw) {
            ParsedNumber::Empty => updated.gst_rate = None,
            ParsedNumber::Value(rate) if rate >= 0.0 => updated.gst_rate = Some(rate),
            _ => {
                warning = Some(ItemWarning::InvalidGstRate {
                    description: item.description.clone(),
                });
            }
        },

        ItemEdit::AddSubtext(value) => updated.subtexts.push(value.clone()),
        ItemEdit::EditSubtext { index, value } => {
            if let Some(slot) = updated.subtexts.get_mut(*index) {
                *slot = value.clone();
            }
        }
        ItemEdit::RemoveSubtext { index } => {
            if *index < updated.subtexts.len() {
                updated.subtexts.remove(*index);
            }
        }
    }

    EditOutcome {
        item: updated,
        warning,
    }
}

/// Appends a new item seeded from a catalog entry and renumbers.
pub fn add_item(items: &[LineItem], entry: &CatalogEntry) -> Vec<LineItem> {
    let mut next = items.to_vec();
    next.push(LineItem::from_catalog(entry));
    renumber(&mut next);
    next
}

/// Removes the item at `index` and renumbers the remainder from 1.
///
/// An out-of-range index returns the list unchanged.
pub fn delete_item(items: &[LineItem], index: usize) -> Vec<LineItem> {
    let mut next = items.to_vec();
    if index < next.len() {
        next.remove(index);
        renumber(&mut next);
    }
    next
}

/// Re-establishes the derived-amount invariant after a numeric edit.
/// NaN operands count as 0 so a half-filled row never poisons totals.
fn recompute_amount(item: &mut LineItem) {
    item.amount = coerce(item.quantity) * coerce(item.price);
}

/// Discount-floor policy check for a proposed new price.
///
/// With a discount limit, the floor is `original_price × (1 - limit/100)`.
/// Without one, no implicit discount is allowed and the floor is the
/// original price itself.
fn discount_warning(item: &LineItem, new_price: f64) -> Option<ItemWarning> {
    let original = coerce(item.original_price);
    let limit = coerce(item.max_discount_percentage);

    if limit > 0.0 {
        let floor = original * (1.0 - limit / 100.0);
        if new_price < floor {
            return Some(ItemWarning::DiscountFloor {
                description: item.description.clone(),
                max_discount_percentage: limit,
                floor,
            });
        }
    } else if new_price < original {
        return Some(ItemWarning::BelowOriginalPrice {
            description: item.description.clone(),
            price: new_price,
            original_price: original,
        });
    }

    None
}

fn renumber(items: &mut [LineItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.sr_no = (index + 1) as u32;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
