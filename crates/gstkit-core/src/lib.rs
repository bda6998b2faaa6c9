//! # gstkit-core: Pure Pricing Logic for gstkit
//!
//! The GST tax-computation and line-item pricing engine behind the ERP
//! client's quotation and ticket forms. Everything here is a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Quotation / Ticket Forms                        │
//! │        add item ──► edit fields ──► review totals ──► submit        │
//! └───────────────────────────────┬─────────────────────────────────────┘
//!                                 │ in-process calls
//! ┌───────────────────────────────▼─────────────────────────────────────┐
//! │                  ★ gstkit-core (THIS CRATE) ★                       │
//! │                                                                     │
//! │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐          │
//! │   │   item   │  │  totals  │  │ billing  │  │ validation │          │
//! │   │ LineItem │  │ TaxGroup │  │ state    │  │ submission │          │
//! │   │  edits   │  │  Totals  │  │ compare  │  │   gates    │          │
//! │   └──────────┘  └──────────┘  └──────────┘  └────────────┘          │
//! │                                                                     │
//! │   NO I/O • NO NETWORK • NO HIDDEN STATE • PURE FUNCTIONS            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - line items, catalog seeding, the edit calculator
//! - [`totals`] - GST grouping, CGST/SGST vs IGST split, document totals
//! - [`billing`] - billing-state vs home-state comparison
//! - [`validation`] - hard submission checks
//! - [`error`] - typed validation errors and advisory warnings
//! - [`numeric`] - shared coercion and rounding rules
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, bit-exact same output - totals are
//!    recomputed from scratch on every edit, never patched incrementally
//! 2. **Snapshots in, snapshots out**: list operations return new lists;
//!    nothing mutates the caller's state in place
//! 3. **Warnings don't block**: discount-floor and bad-input notices are
//!    advisory; only [`validation`] errors gate submission
//! 4. **Defensive arithmetic**: malformed numeric input coerces to 0,
//!    `NaN` never reaches a document total
//!
//! ## Example Usage
//!
//! ```rust
//! use gstkit_core::{add_item, compute_totals, CatalogEntry, DocumentKind};
//!
//! let catalog = CatalogEntry {
//!     name: "Hydraulic pump".to_string(),
//!     selling_price: Some(100.0),
//!     gst_rate: Some(18.0),
//!     ..CatalogEntry::default()
//! };
//!
//! let items = add_item(&[], &catalog);
//! let totals = compute_totals(&items, true, DocumentKind::Quotation);
//!
//! // 1 × ₹100 at 18% intra-state: ₹9 CGST + ₹9 SGST.
//! assert_eq!(totals.total_amount, 100.0);
//! assert_eq!(totals.final_gst_amount, 18.0);
//! assert_eq!(totals.grand_total, 118.0);
//! ```

pub mod billing;
pub mod error;
pub mod item;
pub mod numeric;
pub mod totals;
pub mod validation;

pub use billing::same_state;
pub use error::{ItemWarning, ValidationError, ValidationResult};
pub use item::{add_item, apply_edit, delete_item, CatalogEntry, EditOutcome, ItemEdit, LineItem};
pub use numeric::round_to_unit;
pub use totals::{compute_totals, DocumentKind, TaxGroup, Totals};
pub use validation::validate_document;
