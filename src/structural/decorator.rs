// Decorator: each extra wraps the coffee it is given and adds to its cost
// and ingredient list.

pub trait Coffee {
    fn cost(&self) -> f64;
    fn ingredients(&self) -> String;

    fn describe(&self) -> String {
        format!("Cost : {:?}; Ingredients: {}", self.cost(), self.ingredients())
    }
}

const INGREDIENT_SEPARATOR: &str = ", ";

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        1.0
    }

    fn ingredients(&self) -> String {
        "Coffee".to_string()
    }
}

pub struct Milk {
    decorated: Box<dyn Coffee>,
}

impl Milk {
    pub fn new(decorated: Box<dyn Coffee>) -> Self {
        Self { decorated }
    }
}

impl Coffee for Milk {
    fn cost(&self) -> f64 {
        self.decorated.cost() + 0.5
    }

    fn ingredients(&self) -> String {
        format!("{}{INGREDIENT_SEPARATOR}Milk", self.decorated.ingredients())
    }
}

pub struct WhipCoffee {
    decorated: Box<dyn Coffee>,
}

impl WhipCoffee {
    pub fn new(decorated: Box<dyn Coffee>) -> Self {
        Self { decorated }
    }
}

impl Coffee for WhipCoffee {
    fn cost(&self) -> f64 {
        self.decorated.cost() + 0.7
    }

    fn ingredients(&self) -> String {
        format!("{}{INGREDIENT_SEPARATOR}Whip", self.decorated.ingredients())
    }
}
