//! End-to-end flows as the quotation and ticket forms drive them:
//! seed items from the catalog, edit fields, recompute totals on every
//! change, and validate before submission.

use gstkit_core::{
    add_item, apply_edit, compute_totals, delete_item, same_state, validate_document,
    CatalogEntry, DocumentKind, ItemEdit, ItemWarning,
};

fn catalog(name: &str, price: f64, gst: f64, max_discount: f64) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        selling_price: Some(price),
        gst_rate: Some(gst),
        max_discount_percentage: Some(max_discount),
        hsn_code: Some("8413".to_string()),
        unit: Some("Nos".to_string()),
    }
}

#[test]
fn quotation_session_intra_state() {
    // Two catalog picks, then the usual field edits.
    let mut items = add_item(&[], &catalog("Hydraulic pump", 100.0, 18.0, 10.0));
    items = add_item(&items, &catalog("Installation", 50.0, 0.0, 0.0));

    // Bump the pump quantity to 2.
    let outcome = apply_edit(&items[0], &ItemEdit::Quantity("2".to_string()));
    assert!(outcome.warning.is_none());
    items[0] = outcome.item;

    let home_state = "Maharashtra";
    let billing_state = " maharashtra ";
    let totals = compute_totals(
        &items,
        same_state(billing_state, home_state),
        DocumentKind::Quotation,
    );

    assert_eq!(totals.total_quantity, 3.0);
    assert_eq!(totals.total_amount, 250.0);
    assert_eq!(totals.gst_breakdown.len(), 2);
    assert_eq!(totals.total_cgst_amount, 18.0);
    assert_eq!(totals.total_sgst_amount, 18.0);
    assert_eq!(totals.total_igst_amount, 0.0);
    assert_eq!(totals.grand_total, 286.0);
    assert_eq!(totals.final_rounded_amount, None);

    assert!(validate_document(&items).is_ok());
}

#[test]
fn billing_state_change_flips_split_not_total() {
    let items = add_item(&[], &catalog("Hydraulic pump", 100.0, 18.0, 0.0));

    let intra = compute_totals(&items, true, DocumentKind::Quotation);
    let inter = compute_totals(&items, false, DocumentKind::Quotation);

    // Same tax burden either way; only the split moves.
    assert_eq!(intra.final_gst_amount, inter.final_gst_amount);
    assert_eq!(intra.grand_total, inter.grand_total);
    assert!(intra.total_igst_amount == 0.0 && inter.total_igst_amount > 0.0);
    assert!(intra.total_cgst_amount > 0.0 && inter.total_cgst_amount == 0.0);
}

#[test]
fn discounted_price_warns_but_still_flows_into_totals() {
    let items = add_item(&[], &catalog("Hydraulic pump", 100.0, 18.0, 10.0));

    let outcome = apply_edit(&items[0], &ItemEdit::Price("85".to_string()));
    let warning = outcome.warning.expect("price is below the 10% floor");
    assert!(matches!(warning, ItemWarning::DiscountFloor { .. }));
    assert_eq!(
        warning.to_string(),
        "Discount on 'Hydraulic pump' exceeds the 10% limit; minimum allowed price is ₹90.00"
    );

    // Advisory only: the edited item still prices the document.
    let items = vec![outcome.item];
    let totals = compute_totals(&items, true, DocumentKind::Quotation);
    assert_eq!(totals.total_amount, 85.0);
    assert!(validate_document(&items).is_ok());
}

#[test]
fn clearing_gst_rate_drops_item_from_breakdown_only() {
    let mut items = add_item(&[], &catalog("Hydraulic pump", 100.0, 18.0, 0.0));
    items = add_item(&items, &catalog("Consumables", 40.0, 18.0, 0.0));

    let outcome = apply_edit(&items[1], &ItemEdit::GstRate("".to_string()));
    assert_eq!(outcome.item.gst_rate, None);
    items[1] = outcome.item;

    let totals = compute_totals(&items, true, DocumentKind::Quotation);
    assert_eq!(totals.total_amount, 140.0);
    assert_eq!(totals.gst_breakdown.len(), 1);
    assert_eq!(totals.gst_breakdown[0].taxable_amount, 100.0);
}

#[test]
fn ticket_session_rounds_grand_total() {
    let mut items = add_item(&[], &catalog("Repair labour", 85.17, 18.0, 0.0));
    let outcome = apply_edit(&items[0], &ItemEdit::Quantity("3".to_string()));
    items[0] = outcome.item;

    let totals = compute_totals(&items, true, DocumentKind::Ticket);

    let grand = totals.grand_total;
    let rounded = totals.final_rounded_amount.expect("ticket rounds");
    let round_off = totals.round_off.expect("ticket rounds");
    assert_eq!(rounded, grand.round());
    assert!((round_off - (rounded - grand)).abs() < 1e-12);
    assert!(round_off.abs() <= 0.5);
}

#[test]
fn deleting_an_item_renumbers_and_recomputes() {
    let mut items = add_item(&[], &catalog("A", 10.0, 5.0, 0.0));
    items = add_item(&items, &catalog("B", 20.0, 12.0, 0.0));
    items = add_item(&items, &catalog("C", 30.0, 18.0, 0.0));

    let items = delete_item(&items, 0);
    assert_eq!(items[0].description, "B");
    assert_eq!(items[0].sr_no, 1);
    assert_eq!(items[1].sr_no, 2);

    let totals = compute_totals(&items, false, DocumentKind::Quotation);
    assert_eq!(totals.total_amount, 50.0);
    assert_eq!(totals.gst_breakdown.len(), 2);
    assert_eq!(totals.gst_breakdown[0].rate, 12.0);
    assert_eq!(totals.gst_breakdown[1].rate, 18.0);
}

#[test]
fn line_items_serialize_with_camel_case_fields() {
    let items = add_item(&[], &catalog("Hydraulic pump", 100.0, 18.0, 10.0));
    let json = serde_json::to_value(&items).expect("serialize");

    assert_eq!(json[0]["srNo"], 1);
    assert_eq!(json[0]["hsnSacCode"], "8413");
    assert_eq!(json[0]["originalPrice"], 100.0);
    assert_eq!(json[0]["maxDiscountPercentage"], 10.0);
    assert_eq!(json[0]["gstRate"], 18.0);
    assert_eq!(json[0]["amount"], 100.0);
}
