use crate::domain::model::FortuneList;
use crate::domain::ports::FortuneSource;
use rand::Rng;

/// Picks one message from a [`FortuneList`] per call.
///
/// The list is read-only and `rand::rng()` is thread-local, so a provider can
/// be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct FortuneProvider {
    fortunes: FortuneList,
}

impl FortuneProvider {
    pub fn new(fortunes: FortuneList) -> Self {
        Self { fortunes }
    }

    pub fn builtin() -> Self {
        Self::new(FortuneList::builtin())
    }

    pub fn fortunes(&self) -> &FortuneList {
        &self.fortunes
    }

    /// Uniform pick using the thread-local RNG.
    pub fn get(&self) -> &str {
        self.get_with(&mut rand::rng())
    }

    /// Uniform pick using the given RNG. A seeded RNG gives reproducible picks.
    pub fn get_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let entries = self.fortunes.as_slice();
        // FortuneList is never empty, so the range is never empty.
        let i = rng.random_range(0..entries.len());
        &entries[i]
    }
}

impl FortuneSource for FortuneProvider {
    fn get(&self) -> &str {
        FortuneProvider::get(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn provider(entries: &[&str]) -> FortuneProvider {
        FortuneProvider::new(FortuneList::new(entries.iter().copied()).unwrap())
    }

    #[test]
    fn test_get_returns_member() {
        let p = provider(&["a", "b", "c"]);
        for _ in 0..100 {
            let msg = p.get();
            assert!(["a", "b", "c"].contains(&msg), "unexpected fortune {:?}", msg);
        }
    }

    #[test]
    fn test_single_entry_always_returned() {
        let p = provider(&["only"]);
        for _ in 0..50 {
            assert_eq!(p.get(), "only");
        }
    }

    #[test]
    fn test_more_than_one_distinct_pick() {
        let p = FortuneProvider::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..500).map(|_| p.get_with(&mut rng)).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let p = FortuneProvider::builtin();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: Vec<&str> = (0..20).map(|_| p.get_with(&mut a)).collect();
        let second: Vec<&str> = (0..20).map(|_| p.get_with(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_across_threads() {
        let p = std::sync::Arc::new(FortuneProvider::builtin());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = p.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(p.fortunes().contains(p.get()));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
