use std::cmp::Ordering;
use std::convert::Infallible;
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::{SortError, SortResult};
use crate::policy::PassPolicy;

/// Anything that can put a slice in non-decreasing order.
pub trait Sorter<T> {
    fn name(&self) -> &str;
    fn sort(&self, data: &mut [T]);
}

/// Counters for a single bubble sort run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SortStats {
    pub len: usize,
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub elapsed: Duration,
}

impl SortStats {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Adjacent compare-and-swap sorter.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSorter {
    pub policy: PassPolicy,
}

impl BubbleSorter {
    pub fn new(policy: PassPolicy) -> Self {
        Self { policy }
    }

    /// Sort in place and return the run counters.
    pub fn sort_with_stats<T: Ord>(&self, data: &mut [T]) -> SortStats {
        let result: Result<SortStats, Infallible> =
            run(data, self.policy, |_, a, b| Ok(a > b));
        match result {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    }

    /// Sort a partially ordered slice, failing at the first adjacent pair
    /// with no defined order (e.g. a NaN float).
    ///
    /// On error the slice still holds the same elements, in no particular
    /// order.
    pub fn try_sort<T: PartialOrd>(&self, data: &mut [T]) -> SortResult<SortStats> {
        run(data, self.policy, |index, a, b| match a.partial_cmp(b) {
            Some(ordering) => Ok(ordering == Ordering::Greater),
            None => Err(SortError::Incomparable { index }),
        })
    }
}

impl<T: Ord> Sorter<T> for BubbleSorter {
    fn name(&self) -> &str {
        match self.policy {
            PassPolicy::Full => "bubble",
            PassPolicy::EarlyExit => "bubble_early_exit",
        }
    }

    fn sort(&self, data: &mut [T]) {
        self.sort_with_stats(data);
    }
}

/// Sort in place with the default (full pass) policy.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    BubbleSorter::default().sort_with_stats(data);
}

/// Owned variant: takes the sequence and hands it back sorted.
pub fn sorted<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    bubble_sort(&mut data);
    data
}

pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Core loop. `greater(j, a, b)` decides whether `a` at `j` must move past
/// `b` at `j + 1`.
fn run<T, E>(
    data: &mut [T],
    policy: PassPolicy,
    mut greater: impl FnMut(usize, &T, &T) -> Result<bool, E>,
) -> Result<SortStats, E> {
    let start = Instant::now();
    let n = data.len();
    let mut stats = SortStats {
        len: n,
        ..SortStats::default()
    };

    // n - 1 passes; pass i leaves the i + 1 largest elements in place.
    for i in 0..n.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            if greater(j, &data[j], &data[j + 1])? {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped && policy == PassPolicy::EarlyExit {
            break;
        }
    }

    stats.elapsed = start.elapsed();
    info!(
        len = n,
        %policy,
        passes = stats.passes,
        swaps = stats.swaps,
        elapsed_secs = stats.elapsed_secs(),
        "bubble sort finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn full() -> BubbleSorter {
        BubbleSorter::new(PassPolicy::Full)
    }

    fn early() -> BubbleSorter {
        BubbleSorter::new(PassPolicy::EarlyExit)
    }

    #[test]
    fn test_empty() {
        let mut data: Vec<i32> = vec![];
        let stats = full().sort_with_stats(&mut data);
        assert!(data.is_empty());
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.comparisons, 0);
    }

    #[test]
    fn test_single_element() {
        let mut data = vec![42];
        let stats = full().sort_with_stats(&mut data);
        assert_eq!(data, [42]);
        assert_eq!(stats.passes, 0);
    }

    #[test]
    fn test_two_elements() {
        let mut data = vec![2, 1];
        let stats = full().sort_with_stats(&mut data);
        assert_eq!(data, [1, 2]);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 1);
    }

    #[test]
    fn test_scenario_with_duplicates() {
        assert_eq!(sorted(vec![9, 1, 3, 3, 7]), vec![1, 3, 3, 7, 9]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut data = vec![5, 4, 3, 2, 1];
        bubble_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_all_equal_never_swaps() {
        let mut data = vec![5, 5, 5, 5];
        let stats = full().sort_with_stats(&mut data);
        assert_eq!(data, [5, 5, 5, 5]);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_full_policy_runs_every_pass_on_sorted_input() {
        let mut data: Vec<u32> = (0..10).collect();
        let stats = full().sort_with_stats(&mut data);
        assert_eq!(stats.passes, 9);
        assert_eq!(stats.comparisons, 10 * 9 / 2);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_early_exit_stops_after_clean_pass() {
        let mut data: Vec<u32> = (0..10).collect();
        let stats = early().sort_with_stats(&mut data);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.comparisons, 9);
    }

    #[test]
    fn test_early_exit_still_sorts() {
        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let stats = early().sort_with_stats(&mut data);
        assert_eq!(data, [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);
        assert!(stats.passes < 10);
    }

    #[test]
    fn test_strings() {
        let mut data = vec!["zebra", "apple", "banana", "cherry"];
        bubble_sort(&mut data);
        assert_eq!(data, ["apple", "banana", "cherry", "zebra"]);
    }

    #[test]
    fn test_try_sort_floats() {
        let mut data = vec![2.5, -1.0, 0.0, 2.5];
        let stats = full().try_sort(&mut data).unwrap();
        assert_eq!(data, [-1.0, 0.0, 2.5, 2.5]);
        assert_eq!(stats.passes, 3);
    }

    #[test]
    fn test_try_sort_rejects_nan() {
        let mut data = vec![1.0, f64::NAN, 0.5];
        let err = full().try_sort(&mut data).unwrap_err();
        assert_eq!(err, SortError::Incomparable { index: 0 });
        assert_eq!(err.to_string(), "elements at 0 and 1 are not comparable");
    }

    #[test]
    fn test_sorter_trait_name() {
        assert_eq!(<BubbleSorter as Sorter<i32>>::name(&full()), "bubble");
        assert_eq!(<BubbleSorter as Sorter<i32>>::name(&early()), "bubble_early_exit");
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_elapsed_is_measured() {
        let mut data: Vec<i32> = (0..500).rev().collect();
        let stats = full().sort_with_stats(&mut data);
        assert!(is_sorted(&data));
        assert!(stats.elapsed > Duration::ZERO);
        assert_eq!(stats.elapsed_secs(), stats.elapsed.as_secs_f64());
    }

    #[test]
    fn test_run_emits_timing_event() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        let mut data = vec![3, 2, 1];
        tracing::subscriber::with_default(subscriber, || {
            early().sort_with_stats(&mut data);
        });

        let out = logs.contents();
        assert!(out.contains("bubble sort finished"), "{out}");
        assert!(out.contains("len=3"), "{out}");
        assert!(out.contains("policy=early-exit"), "{out}");
        assert!(out.contains("passes=2"), "{out}");
        assert!(out.contains("swaps=3"), "{out}");
        assert!(out.contains("elapsed_secs="), "{out}");
    }
}
