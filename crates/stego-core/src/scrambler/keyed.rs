//! Password keyed traversal.
//!
//! The linear index space is shuffled with a Fisher-Yates shuffle seeded from
//! the password, so only someone knowing the password finds the frame in the
//! expected order. This hides nothing from a determined reader, the payload
//! itself stays in the clear.

use std::fmt::{self, Debug, Formatter};

use fastrand::Rng;

use super::{position_of, ChannelPosition, Scrambler, COLOR_CHANNELS};

pub struct KeyedScrambler {
    seed: u64,
    order: Vec<u32>,
    i: usize,
    width: usize,
}

impl KeyedScrambler {
    pub fn new<K: AsRef<[u8]>>(key: K) -> Self {
        Self {
            seed: hash_seed(key.as_ref()),
            order: Vec::new(),
            i: 0,
            width: 0,
        }
    }
}

impl Debug for KeyedScrambler {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedScrambler")
            .field("i", &self.i)
            .field("width", &self.width)
            .field("cap", &self.order.len())
            .finish_non_exhaustive()
    }
}

impl Scrambler for KeyedScrambler {
    fn init(&mut self, width: u32, height: u32) {
        // indices are kept as u32, larger images just offer fewer positions
        let cap = (width as usize * height as usize * COLOR_CHANNELS).min(u32::MAX as usize);
        let mut rng = Rng::with_seed(self.seed);

        self.order.clear();
        self.order.extend(0..cap as u32);
        // drawing u64 keeps the order identical on 32 and 64 bit targets
        for i in (1..cap).rev() {
            let j = rng.u64(0..=i as u64) as usize;
            self.order.swap(i, j);
        }

        self.i = 0;
        self.width = width as usize;
    }

    fn next(&mut self) -> ChannelPosition {
        let pos = position_of(self.order[self.i] as usize, self.width);
        self.i += 1;
        pos
    }

    fn cap(&self) -> usize {
        self.order.len()
    }
}

/// FNV-1a, turns arbitrary key bytes into a rng seed
fn hash_seed(key: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    key.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrambler::LinearScrambler;
    use std::collections::HashSet;

    fn drain(s: &mut impl Scrambler) -> Vec<ChannelPosition> {
        (0..s.cap()).map(|_| s.next()).collect()
    }

    #[test]
    fn should_have_no_capacity_before_init() {
        assert_eq!(KeyedScrambler::new("pass").cap(), 0);
    }

    #[test]
    fn should_offer_the_same_capacity_as_the_linear_order() {
        let mut keyed = KeyedScrambler::new("pass");
        let mut linear = LinearScrambler::new();
        keyed.init(13, 11);
        linear.init(13, 11);
        assert_eq!(keyed.cap(), linear.cap());
    }

    #[test]
    fn should_be_deterministic_for_the_same_key() {
        let mut a = KeyedScrambler::new("Secret42");
        let mut b = KeyedScrambler::new("Secret42");
        a.init(8, 8);
        b.init(8, 8);
        let first = drain(&mut a);
        assert_eq!(first, drain(&mut b));

        a.init(8, 8);
        assert_eq!(first, drain(&mut a), "init must restart the sequence");
    }

    #[test]
    fn should_visit_every_position_exactly_once() {
        let mut s = KeyedScrambler::new("Secret42");
        s.init(9, 7);
        let positions = drain(&mut s);
        let seen: HashSet<_> = positions.iter().collect();

        let mut linear = LinearScrambler::new();
        linear.init(9, 7);
        let expected: Vec<_> = drain(&mut linear);
        let expected: HashSet<_> = expected.iter().collect();

        assert_eq!(positions.len(), 189);
        assert_eq!(seen, expected);
    }

    #[test]
    fn should_differ_between_keys() {
        let mut a = KeyedScrambler::new("seed_a");
        let mut b = KeyedScrambler::new("seed_b");
        a.init(10, 10);
        b.init(10, 10);

        let differences = drain(&mut a)
            .into_iter()
            .zip(drain(&mut b))
            .filter(|(x, y)| x != y)
            .count();
        assert!(differences > 150, "only {differences} positions differ");
    }

    #[test]
    fn should_not_leak_the_seed_in_debug_output() {
        let s = KeyedScrambler::new("Secret42");
        let debug = format!("{s:?}");
        assert!(!debug.contains("seed"));
        assert!(!debug.contains("Secret42"));
    }

    #[test]
    fn should_hash_keys_deterministically() {
        assert_eq!(hash_seed(b"test"), hash_seed(b"test"));
        assert_ne!(hash_seed(b"test1"), hash_seed(b"test2"));
        assert_eq!(hash_seed(b""), 0xcbf2_9ce4_8422_2325);
    }
}
