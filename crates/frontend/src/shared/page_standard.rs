//! Page category constants.
//!
//! Every page rendered in the main area declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_order--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with search/sorting/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / summary cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Intentionally custom design: free-form (cover page).
pub const PAGE_CAT_CUSTOM: &str = "custom";
