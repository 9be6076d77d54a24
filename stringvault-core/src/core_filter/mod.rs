/*
    core_filter - Record filtering

    One filter vocabulary shared by the structured listing parameters and
    the natural-language query parser: palindrome flag, length bounds,
    word count, and character containment. All criteria AND together.
*/

pub mod errors;
pub mod params;
pub mod set;

// Re-export commonly used types
pub use errors::{FilterError, FilterResult};
pub use params::RawFilterParams;
pub use set::FilterSet;
