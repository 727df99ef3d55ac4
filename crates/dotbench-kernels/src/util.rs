//! Index map used by the hash-probe kernel
//
// Open addressing with linear probing over power-of-two tables; the weight
// vector is inserted once per kernel call and then only read.

/// Sentinel for an empty slot. Stored indices are column numbers below `ncols`,
/// so they can never collide with it.
const EMPTY: usize = usize::MAX;

/// A flat hash map from column index to `f64` weight.
pub struct UsizeF64Map {
    keys: Vec<usize>,
    vals: Vec<f64>,
    mask: usize,
    len: usize,
}

impl UsizeF64Map {
    /// Create a new map with at least the given capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        let cap2 = cap.next_power_of_two().max(16);
        Self {
            keys: vec![EMPTY; cap2],
            vals: vec![0.0f64; cap2],
            mask: cap2 - 1,
            len: 0,
        }
    }

    /// Size the table so `n` insertions stay under the 0.7 load factor.
    #[inline]
    #[must_use]
    pub fn for_entries(n: usize) -> Self {
        Self::with_capacity(n.saturating_mul(10) / 7 + 1)
    }

    /// Hash function for keys (multiplicative, avalanche)
    #[inline]
    const fn hash(key: usize) -> usize {
        key.wrapping_mul(0x9E37_79B9_7F4A_7C15usize)
    }

    /// Insert a value for a key, adding to any existing value.
    /// Grows the map if load factor exceeds 0.7.
    #[inline]
    pub fn insert_add(&mut self, key: usize, val: f64) {
        debug_assert!(key != EMPTY);
        let mut idx = Self::hash(key) & self.mask;
        loop {
            let k = self.keys[idx];
            if k == EMPTY {
                self.keys[idx] = key;
                self.vals[idx] = val;
                self.len += 1;
                if self.len * 10 > self.keys.len() * 7 {
                    self.grow();
                }
                return;
            }
            if k == key {
                self.vals[idx] += val;
                return;
            }
            idx = (idx + 1) & self.mask;
        }
    }

    /// Look up `key`. A slot matches only on exact key equality; colliding keys
    /// are skipped until the probe reaches an empty slot.
    #[inline]
    #[must_use]
    pub fn get(&self, key: usize) -> Option<f64> {
        let mut idx = Self::hash(key) & self.mask;
        loop {
            let k = self.keys[idx];
            if k == key {
                return Some(self.vals[idx]);
            }
            if k == EMPTY {
                return None;
            }
            idx = (idx + 1) & self.mask;
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Grow the map to double its previous capacity, rehashing all entries.
    fn grow(&mut self) {
        let new_cap = self.keys.len() * 2;
        let mut new_keys = vec![EMPTY; new_cap];
        let mut new_vals = vec![0.0f64; new_cap];
        let new_mask = new_cap - 1;
        for (&k, &v) in self.keys.iter().zip(self.vals.iter()) {
            if k != EMPTY {
                let mut idx = Self::hash(k) & new_mask;
                while new_keys[idx] != EMPTY {
                    idx = (idx + 1) & new_mask;
                }
                new_keys[idx] = k;
                new_vals[idx] = v;
            }
        }
        self.keys = new_keys;
        self.vals = new_vals;
        self.mask = new_mask;
    }
}
