//! Memoised factorials and log-factorials.
//!
//! Tables are plain values owned by the caller and grow on demand; there is
//! no process-wide cache.

use num::Float;

/// Lookup table of `n!`.
#[derive(Clone, Debug)]
pub struct FactorialTable<T> {
    table: Vec<T>,
}

impl<T: Float> Default for FactorialTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FactorialTable<T> {
    pub fn new() -> Self {
        FactorialTable {
            table: vec![T::one()],
        }
    }

    /// `n!`, extending the table up to `n` if needed. Overflows to infinity
    /// once `n!` exceeds the range of `T`.
    pub fn get(&mut self, n: usize) -> T {
        let mut k = T::from(self.table.len()).unwrap_or_else(T::nan);
        while self.table.len() <= n {
            let last = self.table[self.table.len() - 1];
            self.table.push(k * last);
            k = k + T::one();
        }
        self.table[n]
    }

    /// Number of tabulated entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Lookup table of `ln(n!)`, usable far beyond the range where `n!` itself
/// overflows.
#[derive(Clone, Debug)]
pub struct LnFactorialTable<T> {
    table: Vec<T>,
}

impl<T: Float> Default for LnFactorialTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LnFactorialTable<T> {
    pub fn new() -> Self {
        LnFactorialTable {
            table: vec![T::zero()],
        }
    }

    /// `ln(n!)`, extending the table up to `n` if needed.
    pub fn get(&mut self, n: usize) -> T {
        let mut k = T::from(self.table.len()).unwrap_or_else(T::nan);
        while self.table.len() <= n {
            let last = self.table[self.table.len() - 1];
            self.table.push(last + k.ln());
            k = k + T::one();
        }
        self.table[n]
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
