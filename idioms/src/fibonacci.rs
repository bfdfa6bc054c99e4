// fibonacci.rs - Memoised Fibonacci numbers

/// Remembers every term computed so far.
#[derive(Clone, Debug)]
pub struct Fibonacci {
    cache: Vec<u64>,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self { cache: vec![0, 1] }
    }
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `n`th term, or `None` once it no longer fits in a `u64` (n > 93).
    pub fn get(&mut self, n: usize) -> Option<u64> {
        while self.cache.len() <= n {
            let len = self.cache.len();
            let next = self.cache[len - 1].checked_add(self.cache[len - 2])?;
            self.cache.push(next);
        }
        Some(self.cache[n])
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_sequence() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];
        let mut fib = Fibonacci::new();
        let got: Vec<u64> = (0..expected.len()).filter_map(|n| fib.get(n)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn reuses_cache() {
        let mut fib = Fibonacci::new();
        assert_eq!(fib.get(50), Some(12_586_269_025));
        assert_eq!(fib.cached(), 51);
        assert_eq!(fib.get(10), Some(55));
        assert_eq!(fib.cached(), 51);
    }

    #[test]
    fn stops_at_u64_limit() {
        let mut fib = Fibonacci::new();
        assert_eq!(fib.get(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fib.get(94), None);
    }
}
