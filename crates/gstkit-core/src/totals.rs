//! # Tax Aggregator
//!
//! Turns a full line-item list plus the billing-state comparison flag
//! into the per-rate GST breakdown and document totals.
//!
//! ## Computation Pipeline
//! ```text
//! items ──► base sums (Σ quantity, Σ amount)
//!       ──► group by GST rate (rate unset or amount <= 0: excluded)
//!       ──► per-group split: intra-state CGST+SGST | inter-state IGST
//!       ──► rollup (finalGstAmount, grandTotal)
//!       ──► ticket only: round-off to the nearest rupee
//! ```
//!
//! This component is stateless: a pure function of `(items, flag, kind)`
//! recomputed from scratch on every mutation. Incremental updates are
//! deliberately unsupported - a single edit can move an item between
//! rate groups, so partial recomputation is never safe.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::item::LineItem;
use crate::numeric::{coerce, round_to_unit};

// =============================================================================
// Document Kind
// =============================================================================

/// Which kind of document the totals belong to.
///
/// Tickets round the grand total to the nearest rupee and report the
/// signed round-off delta; quotations report the grand total unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Quotation,
    Ticket,
}

// =============================================================================
// Tax Group
// =============================================================================

/// One entry in the GST breakdown: all items sharing a rate.
///
/// Either the CGST/SGST pair or IGST is populated, never both. For a
/// 0% group every derived field is 0 but the group still appears in
/// the breakdown (an explicit zero rate is not the same as "no rate").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxGroup {
    pub rate: f64,
    pub taxable_amount: f64,
    pub cgst_rate: f64,
    pub sgst_rate: f64,
    pub igst_rate: f64,
    pub cgst_amount: f64,
    pub sgst_amount: f64,
    pub igst_amount: f64,
}

impl TaxGroup {
    fn new(rate: f64, taxable_amount: f64) -> Self {
        TaxGroup {
            rate,
            taxable_amount,
            cgst_rate: 0.0,
            sgst_rate: 0.0,
            igst_rate: 0.0,
            cgst_amount: 0.0,
            sgst_amount: 0.0,
            igst_amount: 0.0,
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Fully derived document totals.
///
/// Holds no independent state; recomputed from scratch by
/// [`compute_totals`] on every line-item or billing-state change. The
/// rounding fields are only present on ticket documents and are omitted
/// from serialized quotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_quantity: f64,
    pub total_amount: f64,
    pub gst_breakdown: Vec<TaxGroup>,
    pub total_cgst_amount: f64,
    pub total_sgst_amount: f64,
    pub total_igst_amount: f64,
    pub final_gst_amount: f64,
    pub grand_total: f64,
    /// Signed rounding delta, `final_rounded_amount - grand_total`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub round_off: Option<f64>,
    /// Grand total rounded half-away-from-zero to the nearest rupee.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub final_rounded_amount: Option<f64>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the GST breakdown and document totals for a line-item list.
///
/// ## Behavior
/// - `total_quantity`/`total_amount` sum over every item, NaN coerced
///   to 0. Negative amounts pass through (credit-note style lines).
/// - Items with an unset GST rate or `amount <= 0` are excluded from
///   the breakdown but still count toward the base sums.
/// - Intra-state (`is_billing_state_same_as_home`) splits each rate in
///   half into CGST+SGST; inter-state charges the whole rate as IGST.
/// - The breakdown is sorted ascending by rate.
/// - Ticket documents additionally round the grand total to the
///   nearest rupee and report the signed delta.
///
/// Deterministic: same inputs, bit-exact same output. No hidden state,
/// no I/O.
pub fn compute_totals(
    items: &[LineItem],
    is_billing_state_same_as_home: bool,
    kind: DocumentKind,
) -> Totals {
    // Step 1: base sums over the whole list.
    let total_quantity: f64 = items.iter().map(|item| coerce(item.quantity)).sum();
    let total_amount: f64 = items.iter().map(|item| coerce(item.amount)).sum();

    // Step 2: group taxable items by rate.
    let mut groups: Vec<TaxGroup> = Vec::new();
    for item in items {
        let amount = coerce(item.amount);
        if amount <= 0.0 {
            continue;
        }
        let rate = match item.gst_rate {
            Some(rate) if rate.is_finite() => rate,
            _ => continue,
        };
        match groups.iter_mut().find(|group| group.rate == rate) {
            Some(group) => group.taxable_amount += amount,
            None => groups.push(TaxGroup::new(rate, amount)),
        }
    }
    groups.sort_by(|a, b| a.rate.total_cmp(&b.rate));

    // Step 3: per-group CGST+SGST vs IGST split.
    for group in &mut groups {
        if group.rate <= 0.0 {
            continue;
        }
        if is_billing_state_same_as_home {
            group.cgst_rate = group.rate / 2.0;
            group.sgst_rate = group.rate / 2.0;
            group.cgst_amount = group.taxable_amount * group.cgst_rate / 100.0;
            group.sgst_amount = group.taxable_amount * group.sgst_rate / 100.0;
        } else {
            group.igst_rate = group.rate;
            group.igst_amount = group.taxable_amount * group.rate / 100.0;
        }
    }

    // Step 4: rollup.
    let total_cgst_amount: f64 = groups.iter().map(|g| g.cgst_amount).sum();
    let total_sgst_amount: f64 = groups.iter().map(|g| g.sgst_amount).sum();
    let total_igst_amount: f64 = groups.iter().map(|g| g.igst_amount).sum();
    let final_gst_amount = total_cgst_amount + total_sgst_amount + total_igst_amount;
    let grand_total = total_amount + final_gst_amount;

    // Step 5: ticket documents round to the nearest rupee.
    let (round_off, final_rounded_amount) = match kind {
        DocumentKind::Quotation => (None, None),
        DocumentKind::Ticket => {
            let rounded = round_to_unit(grand_total);
            (Some(rounded - grand_total), Some(rounded))
        }
    };

    Totals {
        total_quantity,
        total_amount,
        gst_breakdown: groups,
        total_cgst_amount,
        total_sgst_amount,
        total_igst_amount,
        final_gst_amount,
        grand_total,
        round_off,
        final_rounded_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
