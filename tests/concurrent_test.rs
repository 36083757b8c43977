use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use console_logger::levels::{self, Category};
use console_logger::{LineWriter, Logger, MAX_LEVEL};

/// Counts lines and checks each one arrives whole.
#[derive(Default)]
struct Counter {
    lines: AtomicUsize,
}

impl LineWriter for Counter {
    fn write_line(&self, line: &str) {
        assert!(Category::ALL.iter().any(|c| line.starts_with(c.prefix())));
        assert!(line.ends_with(" tick"));
        self.lines.fetch_add(1, Ordering::Relaxed);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_logger_across_tasks() {
    let logger = Arc::new(Logger::with_writer(MAX_LEVEL, Counter::default()).unwrap());

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let logger = logger.clone();
        tasks.push(tokio::spawn(async move {
            for _ in 0..100 {
                logger.debug(format_args!("tick"));
                tokio::task::yield_now().await;
            }
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(logger.writer().lines.load(Ordering::Relaxed), 800);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_set_level_races_with_emitters() {
    let logger = Arc::new(Logger::with_writer(levels::ERROR, Counter::default()).unwrap());

    let toggler = {
        let logger = logger.clone();
        tokio::spawn(async move {
            for round in 0..200u32 {
                let level = if round % 2 == 0 { levels::DEBUG } else { levels::ERROR };
                logger.set_level(level).unwrap();
                assert!(logger.set_level(MAX_LEVEL + 1).is_err());
                tokio::task::yield_now().await;
            }
        })
    };

    let emitter = {
        let logger = logger.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let seen = logger.level();
                assert!(seen == levels::ERROR || seen == levels::DEBUG);
                logger.error(format_args!("tick"));
                tokio::task::yield_now().await;
            }
        })
    };

    toggler.await.unwrap();
    emitter.await.unwrap();

    // Errors pass at both levels.
    assert_eq!(logger.writer().lines.load(Ordering::Relaxed), 200);
    assert_eq!(logger.level(), levels::ERROR);
}
