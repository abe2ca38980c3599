//! # Identifier Generation
//!
//! Human-readable product and order ids.
//!
//! ## Id Shapes
//! ```text
//! prod-1686830400000-7      {prefix}-{epoch millis}-{0..=999}
//! ORD-1686830400000-007     {prefix}-{epoch millis}-{000..=999}
//! ```
//!
//! Ids are unlikely to collide but nothing checks for duplicates: two ids
//! minted in the same millisecond share a 1-in-1000 chance of clashing.
//! Anything that needs guaranteed uniqueness must use a real key.
//!
//! ## Testability
//! Wall-clock time and randomness come through the [`Clock`] and
//! [`RandomSource`] traits. Production code uses [`SystemClock`] and
//! [`SystemRandom`]; tests inject fixed sources.

use chrono::{DateTime, Utc};
use rand::Rng;

pub const DEFAULT_PRODUCT_ID_PREFIX: &str = "prod";
pub const DEFAULT_ORDER_ID_PREFIX: &str = "ORD";

/// Upper bound (inclusive) of the random id suffix.
pub const MAX_RANDOM_SUFFIX: u32 = 999;

// =============================================================================
// Capabilities
// =============================================================================

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomSource: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: u32, max: u32) -> u32;
}

/// System clock - uses real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn gen_range(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Mints ids from an injected clock and random source.
///
/// ## Example
/// ```rust
/// use shopkit_core::ids::IdGenerator;
///
/// let ids = IdGenerator::system();
/// let id = ids.product_id("item");
/// assert!(id.starts_with("item-"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IdGenerator<C = SystemClock, R = SystemRandom> {
    clock: C,
    random: R,
}

impl IdGenerator {
    pub fn system() -> Self {
        IdGenerator::default()
    }
}

impl<C: Clock, R: RandomSource> IdGenerator<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        IdGenerator { clock, random }
    }

    /// `{prefix}-{millis}-{n}` with an unpadded suffix.
    pub fn product_id(&self, prefix: &str) -> String {
        let (millis, suffix) = self.parts();
        format!("{prefix}-{millis}-{suffix}")
    }

    /// `{prefix}-{millis}-{nnn}` with the suffix zero-padded to three digits.
    pub fn order_id(&self, prefix: &str) -> String {
        let (millis, suffix) = self.parts();
        format!("{prefix}-{millis}-{suffix:03}")
    }

    fn parts(&self) -> (i64, u32) {
        let millis = self.clock.now().timestamp_millis();
        let suffix = self.random.gen_range(0, MAX_RANDOM_SUFFIX);
        (millis, suffix)
    }
}

/// Product id from the system clock; `None` uses the `prod` prefix.
pub fn generate_product_id(prefix: Option<&str>) -> String {
    IdGenerator::system().product_id(prefix.unwrap_or(DEFAULT_PRODUCT_ID_PREFIX))
}

/// Order id from the system clock; `None` uses the `ORD` prefix.
pub fn generate_order_id(prefix: Option<&str>) -> String {
    IdGenerator::system().order_id(prefix.unwrap_or(DEFAULT_ORDER_ID_PREFIX))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fixed clock for testing.
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Fixed random for testing.
    struct FixedRandom(u32);

    impl RandomSource for FixedRandom {
        fn gen_range(&self, _min: u32, _max: u32) -> u32 {
            self.0
        }
    }

    /// Counts upward so consecutive ids differ.
    struct SequentialRandom(AtomicU32);

    impl RandomSource for SequentialRandom {
        fn gen_range(&self, min: u32, max: u32) -> u32 {
            let next = self.0.fetch_add(1, Ordering::Relaxed);
            min + next % (max - min + 1)
        }
    }

    fn june_15() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_product_id_shape() {
        let ids = IdGenerator::new(june_15(), FixedRandom(7));
        assert_eq!(ids.product_id("prod"), "prod-1686830400000-7");
        assert_eq!(ids.product_id("item"), "item-1686830400000-7");
    }

    #[test]
    fn test_order_id_pads_suffix() {
        let ids = IdGenerator::new(june_15(), FixedRandom(7));
        assert_eq!(ids.order_id("ORD"), "ORD-1686830400000-007");

        let ids = IdGenerator::new(june_15(), FixedRandom(999));
        assert_eq!(ids.order_id("PO"), "PO-1686830400000-999");
    }

    #[test]
    fn test_ids_differ_when_random_source_advances() {
        let ids = IdGenerator::new(june_15(), SequentialRandom(AtomicU32::new(0)));
        assert_ne!(ids.product_id("prod"), ids.product_id("prod"));
    }

    #[test]
    fn test_generated_ids_use_default_prefixes() {
        let product = generate_product_id(None);
        let parts: Vec<&str> = product.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "prod");
        assert!(parts[1].parse::<i64>().unwrap() > 0);
        assert!(parts[2].parse::<u32>().unwrap() <= MAX_RANDOM_SUFFIX);

        let order = generate_order_id(None);
        let parts: Vec<&str> = order.split('-').collect();
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[2].len(), 3);
    }

    #[test]
    fn test_generated_ids_accept_custom_prefix() {
        assert!(generate_product_id(Some("item")).starts_with("item-"));
        assert!(generate_order_id(Some("RMA")).starts_with("RMA-"));
    }

    #[test]
    fn test_system_random_stays_in_range() {
        let random = SystemRandom;
        for _ in 0..1000 {
            assert!(random.gen_range(0, MAX_RANDOM_SUFFIX) <= MAX_RANDOM_SUFFIX);
        }
    }
}
