//! Stress tests for concurrent filter updates
//!
//! These tests verify:
//! - Concurrent toggles of different severities never lose an update
//! - Emission observes whole mask values while the filter is being changed
//! - A shared sink receives exactly the entries that passed the filter

use category_logger::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const ITERATIONS: usize = 10_000;

/// One thread per severity, each hammering only its own bit
#[test]
fn test_concurrent_toggles_lose_no_updates() {
    for round in 0..10 {
        let logger = Arc::new(CategoryLogger::detached(Some("Stress")));
        let barrier = Arc::new(Barrier::new(Severity::ALL.len()));

        let handles: Vec<_> = Severity::ALL
            .into_iter()
            .enumerate()
            .map(|(i, severity)| {
                let logger = Arc::clone(&logger);
                let barrier = Arc::clone(&barrier);
                // Alternate the final state per severity and per round
                let final_state = (i + round) % 2 == 0;
                thread::spawn(move || {
                    barrier.wait();
                    for n in 0..ITERATIONS {
                        logger.set_enabled(severity, n % 2 == 0);
                    }
                    logger.set_enabled(severity, final_state);
                    (severity, final_state)
                })
            })
            .collect();

        for handle in handles {
            let (severity, expected) = handle.join().expect("toggle thread panicked");
            assert_eq!(
                logger.is_enabled(severity),
                expected,
                "round {}: update to {} was lost",
                round,
                severity
            );
        }
    }
}

/// Readers keep emitting while a writer flips one severity; the others must
/// never appear disabled.
#[test]
fn test_emission_sees_consistent_mask() {
    struct Tally {
        count: AtomicUsize,
    }

    impl LogSink for Tally {
        fn log(&self, _: Severity, _: &str, _: Option<&dyn std::fmt::Debug>) -> Result<()> {
            self.count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn log_exception(
            &self,
            _: &(dyn std::error::Error + 'static),
            _: Option<&dyn std::fmt::Debug>,
        ) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "tally"
        }
    }

    let sink = Arc::new(Tally {
        count: AtomicUsize::new(0),
    });
    let logger = Arc::new(CategoryLogger::with_sink(Some("Stress"), sink.clone()));

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for n in 0..ITERATIONS {
                logger.set_enabled(Severity::Info, n % 2 == 1);
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for _ in 0..ITERATIONS / 10 {
                    assert!(logger.is_enabled(Severity::Error));
                    assert!(logger.is_enabled(Severity::Warning));
                    logger.error("steady");
                }
            })
        })
        .collect();

    writer.join().expect("writer panicked");
    for reader in readers {
        reader.join().expect("reader panicked");
    }

    // Every error emission passed the filter
    assert_eq!(sink.count.load(Ordering::Relaxed), 4 * (ITERATIONS / 10));
    assert_eq!(logger.metrics().forwarded_count(), (4 * (ITERATIONS / 10)) as u64);
}

/// Many loggers over one sink, each filtering independently
#[test]
fn test_many_loggers_shared_sink() {
    let sink = Arc::new(MemorySink::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sink = sink.clone();
            thread::spawn(move || {
                let logger = CategoryLogger::with_sink(Some(format!("Pkg{}", i).as_str()), sink);
                if i % 2 == 1 {
                    logger.set_enabled(Severity::Info, false);
                }
                for n in 0..100 {
                    logger.info(format!("message {}", n));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let messages = sink.messages();
    assert_eq!(messages.len(), 4 * 100);
    assert!(messages.iter().all(|m| {
        ["[Pkg0] ", "[Pkg2] ", "[Pkg4] ", "[Pkg6] "]
            .iter()
            .any(|prefix| m.starts_with(prefix))
    }));
}
