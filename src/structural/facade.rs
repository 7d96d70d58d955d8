// Facade: string get/set over the defaults store, hiding JSON values and
// persistence behind two calls.

use crate::error::Result;
use crate::store::DefaultsStore;

pub struct Defaults<'a> {
    store: &'a mut DefaultsStore,
}

impl<'a> Defaults<'a> {
    pub fn new(store: &'a mut DefaultsStore) -> Self {
        Self { store }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.string(key).map(str::to_string)
    }

    /// `None` removes the key.
    pub fn set(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => self.store.set(key, value),
            None => {
                self.store.remove(key);
            }
        }
        self.store.synchronize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BISHOP: &str = "Disconnect me. I’d rather be nothing";

    #[test]
    fn test_store_and_read() {
        let mut store = DefaultsStore::new();
        let mut storage = Defaults::new(&mut store);

        storage.set("Bishop", Some(BISHOP)).unwrap();
        assert_eq!(storage.get("Bishop").as_deref(), Some(BISHOP));
    }

    #[test]
    fn test_remove_with_none() {
        let mut store = DefaultsStore::new();
        let mut storage = Defaults::new(&mut store);

        storage.set("Bishop", Some(BISHOP)).unwrap();
        storage.set("Bishop", None).unwrap();
        assert_eq!(storage.get("Bishop"), None);
    }

    #[test]
    fn test_set_persists_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("defaults.json");

        let mut store = DefaultsStore::open(&path).unwrap();
        Defaults::new(&mut store).set("Bishop", Some(BISHOP)).unwrap();

        let mut reopened = DefaultsStore::open(&path).unwrap();
        assert_eq!(Defaults::new(&mut reopened).get("Bishop").as_deref(), Some(BISHOP));
    }
}
