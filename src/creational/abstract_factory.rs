// Abstract Factory: the client asks the factory type for a burger and never
// names the concrete kitchen that makes it.

pub trait BurgerDescribing {
    fn ingredients(&self) -> &[String];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheeseBurger {
    ingredients: Vec<String>,
}

impl CheeseBurger {
    fn new(ingredients: &[&str]) -> Self {
        Self {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BurgerDescribing for CheeseBurger {
    fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

pub trait BurgerMaking {
    fn make(&self) -> Box<dyn BurgerDescribing>;
}

pub struct BigKahunaBurger;

impl BurgerMaking for BigKahunaBurger {
    fn make(&self) -> Box<dyn BurgerDescribing> {
        Box::new(CheeseBurger::new(&["Cheese", "Burger", "Lettuce", "Tomato"]))
    }
}

pub struct JackInTheBox;

impl BurgerMaking for JackInTheBox {
    fn make(&self) -> Box<dyn BurgerDescribing> {
        Box::new(CheeseBurger::new(&["Cheese", "Burger", "Tomato", "Onions"]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurgerFactoryType {
    BigKahuna,
    JackInTheBox,
}

impl BurgerMaking for BurgerFactoryType {
    fn make(&self) -> Box<dyn BurgerDescribing> {
        match self {
            BurgerFactoryType::BigKahuna => BigKahunaBurger.make(),
            BurgerFactoryType::JackInTheBox => JackInTheBox.make(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_kahuna() {
        let burger = BurgerFactoryType::BigKahuna.make();
        assert_eq!(burger.ingredients(), ["Cheese", "Burger", "Lettuce", "Tomato"]);
    }

    #[test]
    fn test_jack_in_the_box() {
        let burger = BurgerFactoryType::JackInTheBox.make();
        assert_eq!(burger.ingredients(), ["Cheese", "Burger", "Tomato", "Onions"]);
    }

    #[test]
    fn test_factories_are_interchangeable() {
        let factories: Vec<Box<dyn BurgerMaking>> =
            vec![Box::new(BigKahunaBurger), Box::new(JackInTheBox)];
        for factory in &factories {
            assert_eq!(factory.make().ingredients()[0], "Cheese");
        }
    }
}
