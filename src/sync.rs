#[cfg(not(all(test, feature = "loom")))]
use core::sync::atomic::{Ordering, AtomicU8};

#[cfg(all(test, feature = "loom"))]
use loom::sync::atomic::{Ordering, AtomicU8};

use crate::error::LoggerError;
use crate::levels::validate;

/// The one mutable field of a logger.
///
/// Readers never observe a half-written level; a rejected store leaves the
/// previous value in place.
pub(crate) struct AtomicLevel {
    inner: AtomicU8,
}

impl AtomicLevel {
    pub(crate) fn new(level: u8) -> Result<Self, LoggerError> {
        Ok(Self::unchecked(validate(level)?))
    }

    /// Skips range validation. Reserved for the always-on pseudo-logger.
    pub(crate) fn unchecked(level: u8) -> Self {
        Self { inner: AtomicU8::new(level) }
    }

    #[inline]
    pub(crate) fn load(&self) -> u8 {
        self.inner.load(Ordering::Acquire)
    }

    pub(crate) fn store(&self, level: u8) -> Result<(), LoggerError> {
        self.inner.store(validate(level)?, Ordering::Release);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{DEBUG, MAX_LEVEL};

    #[cfg(not(feature = "loom"))]
    #[test]
    fn rejected_store_keeps_previous_level() {
        use crate::levels::WARN;

        let level = AtomicLevel::new(WARN).unwrap();
        assert!(level.store(MAX_LEVEL + 1).is_err());
        assert_eq!(level.load(), WARN);

        level.store(DEBUG).unwrap();
        assert_eq!(level.load(), DEBUG);
    }

    #[cfg(not(feature = "loom"))]
    #[test]
    fn construction_validates() {
        assert!(AtomicLevel::new(MAX_LEVEL).is_ok());
        assert!(AtomicLevel::new(u8::MAX).is_err());
    }

    #[cfg(feature = "loom")]
    #[test]
    fn concurrent_store_is_never_torn() {
        use loom::sync::Arc;
        use loom::thread;
        use crate::levels::ERROR;

        loom::model(|| {
            let level = Arc::new(AtomicLevel::new(ERROR).unwrap());

            let writer = {
                let level = level.clone();
                thread::spawn(move || {
                    level.store(DEBUG).unwrap();
                    let _ = level.store(MAX_LEVEL + 1);
                })
            };

            let reader = {
                let level = level.clone();
                thread::spawn(move || {
                    let seen = level.load();
                    assert!(seen == ERROR || seen == DEBUG);
                })
            };

            writer.join().unwrap();
            reader.join().unwrap();
            assert_eq!(level.load(), DEBUG);
        });
    }
}
