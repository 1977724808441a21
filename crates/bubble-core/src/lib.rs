//! Timed bubble sort over totally ordered elements.
//!
//! The sorter compares and swaps adjacent pairs only. By default every run
//! performs all `n - 1` passes, even when a pass made no swaps; see
//! [`PassPolicy`] for the early-exit variant.

pub mod baselines;
pub mod error;
pub mod input;
pub mod policy;
pub mod sorter;

pub use baselines::{StdSorter, StdUnstableSorter};
pub use error::{SortError, SortResult};
pub use input::parse_tokens;
pub use policy::PassPolicy;
pub use sorter::{bubble_sort, is_sorted, sorted, BubbleSorter, SortStats, Sorter};
