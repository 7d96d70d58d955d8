// Flyweight: orders share one CoffeeFlavor per flavor name.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub struct CoffeeFlavor {
    flavor: String,
}

impl fmt::Display for CoffeeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.flavor)
    }
}

/// Factory and cache for the shared flavors.
#[derive(Default)]
pub struct Menu {
    flavors: HashMap<String, Rc<CoffeeFlavor>>,
}

impl Menu {
    pub fn lookup(&mut self, flavor: &str) -> Rc<CoffeeFlavor> {
        self.flavors
            .entry(flavor.to_string())
            .or_insert_with(|| {
                debug!(flavor, "creating new flavor");
                Rc::new(CoffeeFlavor {
                    flavor: flavor.to_string(),
                })
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.flavors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flavors.is_empty()
    }
}

#[derive(Default)]
pub struct CoffeeShop {
    orders: BTreeMap<u32, Rc<CoffeeFlavor>>,
    menu: Menu,
}

impl CoffeeShop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_order(&mut self, flavor: &str, table: u32) {
        let flavor = self.menu.lookup(flavor);
        self.orders.insert(table, flavor);
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn order(&self, table: u32) -> Option<&Rc<CoffeeFlavor>> {
        self.orders.get(&table)
    }

    /// One line per table, lowest table number first.
    pub fn serve(&self) -> Vec<String> {
        self.orders
            .iter()
            .map(|(table, flavor)| format!("Serving {flavor} to table {table}"))
            .collect()
    }
}
