//! Partitioned parallel word counting.
//!
//! The input is split into contiguous partitions (see
//! [`partition_ranges`](crate::partition_ranges)). Each partition is counted
//! by one rayon task into a table it owns, so the hot loop takes no locks.
//! Every task is joined before any result is looked at; the partial tables
//! are then merged by a single thread.

use crate::config::CountConfig;
use crate::partition::partition_ranges;
use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use wordhuff_core::{FrequencyTable, Result, WordHuffError};

/// Counts word occurrences across a fixed set of parallel workers.
#[derive(Debug)]
pub struct FrequencyCounter {
    config: CountConfig,
    pool: ThreadPool,
}

impl FrequencyCounter {
    /// Create a counter with its own worker pool.
    pub fn new(config: CountConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("wordhuff-count-{i}"))
            .build()
            .map_err(|e| WordHuffError::thread_pool(e.to_string()))?;
        Ok(Self { config, pool })
    }

    /// The configuration this counter was built with.
    pub fn config(&self) -> CountConfig {
        self.config
    }

    /// Count every word in `words`.
    ///
    /// The result is the same for every partition count. If any worker
    /// fails, the error of the lowest-numbered failing partition is
    /// returned once all workers have finished.
    pub fn count<S>(&self, words: &[S]) -> Result<FrequencyTable>
    where
        S: AsRef<str> + Sync,
    {
        let total = self
            .pool
            .install(|| count_partitioned(words, self.config.partitions))?;

        debug!(
            "counted {} words ({} distinct) over {} partitions on {} threads",
            words.len(),
            total.len(),
            self.config.partitions,
            self.config.threads
        );
        Ok(total)
    }

    /// Count `words` on the calling thread.
    pub fn count_sequential<S: AsRef<str>>(words: &[S]) -> Result<FrequencyTable> {
        count_slice(words)
    }
}

/// Count `words` over [`CountConfig::DEFAULT`]'s partitions.
///
/// Runs on rayon's global pool rather than a dedicated one, so repeated
/// calls do not build and tear down worker threads. Use a
/// [`FrequencyCounter`] to control the thread count.
pub fn count_words<S>(words: &[S]) -> Result<FrequencyTable>
where
    S: AsRef<str> + Sync,
{
    let partitions = CountConfig::DEFAULT.partitions;
    let total = count_partitioned(words, partitions)?;
    debug!(
        "counted {} words ({} distinct) over {} partitions on the global pool",
        words.len(),
        total.len(),
        partitions
    );
    Ok(total)
}

/// Fan `words` out over `partitions` tasks on the current rayon pool and
/// merge the partial tables once every task has finished.
fn count_partitioned<S>(words: &[S], partitions: usize) -> Result<FrequencyTable>
where
    S: AsRef<str> + Sync,
{
    let ranges = partition_ranges(words.len(), partitions)?;

    let partials: Vec<Result<FrequencyTable>> = ranges
        .into_par_iter()
        .enumerate()
        .map(|(partition, range)| count_partition(words, partition, range))
        .collect();

    let mut total = FrequencyTable::new();
    for partial in partials {
        total.merge(partial?)?;
    }
    Ok(total)
}

/// Body of one worker. A panic is confined to its partition and reported
/// as [`WordHuffError::Worker`].
fn count_partition<S: AsRef<str>>(
    words: &[S],
    partition: usize,
    range: Range<usize>,
) -> Result<FrequencyTable> {
    trace!("partition {partition}: words {}..{}", range.start, range.end);

    let slice = &words[range];
    match panic::catch_unwind(AssertUnwindSafe(|| count_slice(slice))) {
        Ok(result) => result,
        Err(payload) => Err(WordHuffError::worker(partition, panic_message(&*payload))),
    }
}

fn count_slice<S: AsRef<str>>(words: &[S]) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    for word in words {
        table.increment(word.as_ref())?;
    }
    Ok(table)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const SAMPLE: [&str; 6] = ["a", "b", "a", "c", "b", "a"];

    #[test]
    fn test_count_sample() {
        init_logger();
        let counter = FrequencyCounter::new(CountConfig::DEFAULT).unwrap();
        let table = counter.count(&SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a"), Some(3));
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(1));
    }

    #[test]
    fn test_partition_count_does_not_change_result() {
        init_logger();
        let expected = FrequencyCounter::count_sequential(&SAMPLE).unwrap();
        for partitions in [1, 2, 3, 6, 10] {
            let counter = FrequencyCounter::new(CountConfig::new(partitions).with_threads(2)).unwrap();
            assert_eq!(counter.count(&SAMPLE).unwrap(), expected, "partitions = {partitions}");
        }
    }

    #[test]
    fn test_empty_input() {
        let counter = FrequencyCounter::new(CountConfig::new(4)).unwrap();
        let words: [&str; 0] = [];
        assert!(counter.count(&words).unwrap().is_empty());
    }

    #[test]
    fn test_owned_strings() {
        let words: Vec<String> = "x y x".split(' ').map(String::from).collect();
        let table = count_words(&words).unwrap();
        assert_eq!(table.get("x"), Some(2));
        assert_eq!(table.get("y"), Some(1));
    }

    #[test]
    fn test_count_words_matches_dedicated_pool() {
        let words: Vec<String> = (0..1_000).map(|i| format!("w{}", i % 37)).collect();
        let counter = FrequencyCounter::new(CountConfig::DEFAULT).unwrap();
        let expected = counter.count(&words).unwrap();
        for _ in 0..3 {
            assert_eq!(count_words(&words).unwrap(), expected);
        }
    }

    #[test]
    fn test_count_partitioned_on_global_pool() {
        let table = count_partitioned(&SAMPLE, 4).unwrap();
        assert_eq!(table, FrequencyCounter::count_sequential(&SAMPLE).unwrap());
        assert!(matches!(
            count_partitioned(&SAMPLE, 0),
            Err(WordHuffError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_zero_partitions_rejected() {
        let err = FrequencyCounter::new(CountConfig::new(0)).unwrap_err();
        assert!(matches!(err, WordHuffError::InvalidInput { .. }));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(&*payload), "static message");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(&*payload), "owned message");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(&*payload), "worker panicked");
    }
}
