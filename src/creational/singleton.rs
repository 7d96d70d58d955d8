// Singleton: there is only one Elon Musk, folks.

use std::sync::OnceLock;

#[derive(Debug)]
pub struct ElonMusk {
    _private: (),
}

impl ElonMusk {
    pub fn shared() -> &'static ElonMusk {
        static INSTANCE: OnceLock<ElonMusk> = OnceLock::new();
        INSTANCE.get_or_init(|| ElonMusk { _private: () })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let elon = ElonMusk::shared();
        let again = ElonMusk::shared();
        assert!(std::ptr::eq(elon, again));
    }

    #[test]
    fn test_same_instance_across_threads() {
        let here = ElonMusk::shared() as *const ElonMusk as usize;
        let there = thread::spawn(|| ElonMusk::shared() as *const ElonMusk as usize)
            .join()
            .unwrap();
        assert_eq!(here, there);
    }
}
