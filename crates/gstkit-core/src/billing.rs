//! Billing-state comparison.
//!
//! Decides intra-state vs inter-state taxation. The caller resolves the
//! two state names (billing address vs the company's home state) and
//! passes the resulting flag into [`crate::compute_totals`] explicitly -
//! there is no ambient home-state configuration anywhere in the engine.

/// Compares two state names, trimmed and case-insensitive.
///
/// `same_state("Maharashtra ", "maharashtra")` is `true`. Two empty
/// strings also compare equal; resolving a missing billing state is the
/// caller's job.
pub fn same_state(billing_state: &str, home_state: &str) -> bool {
    billing_state
        .trim()
        .eq_ignore_ascii_case(home_state.trim())
}
