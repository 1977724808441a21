use crate::sorter::Sorter;

/// Standard library stable sort, the reference point for benchmarks.
pub struct StdSorter;

impl<T: Ord> Sorter<T> for StdSorter {
    fn name(&self) -> &str {
        "std"
    }

    fn sort(&self, data: &mut [T]) {
        data.sort();
    }
}

/// Unstable sort - often faster
pub struct StdUnstableSorter;

impl<T: Ord> Sorter<T> for StdUnstableSorter {
    fn name(&self) -> &str {
        "std_unstable"
    }

    fn sort(&self, data: &mut [T]) {
        data.sort_unstable();
    }
}
