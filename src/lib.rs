//! Pure helper functions on arrays of values and arrays of records.
//!
//! Every function borrows its input, leaves it unchanged and returns a
//! freshly allocated result. Out-of-range indices and absent keys are not
//! errors: they yield the input unchanged, or `None` for lookups.

pub mod array;
pub mod keyed;

pub use array::{push, remove_at, replace_at};
pub use keyed::{find_by_key, sorted_by_key, update_field_all, update_field_at, SortOrder};
