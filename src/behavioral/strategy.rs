// Strategy: the printer delegates formatting to an interchangeable algorithm.

pub trait PrintStrategy {
    fn print(&self, string: &str) -> String;
}

pub struct UpperCaseStrategy;

impl PrintStrategy for UpperCaseStrategy {
    fn print(&self, string: &str) -> String {
        string.to_uppercase()
    }
}

pub struct LowerCaseStrategy;

impl PrintStrategy for LowerCaseStrategy {
    fn print(&self, string: &str) -> String {
        string.to_lowercase()
    }
}

/// Any `Fn(&str) -> String` works as a strategy too.
pub struct FnStrategy<F>(pub F);

impl<F> PrintStrategy for FnStrategy<F>
where
    F: Fn(&str) -> String,
{
    fn print(&self, string: &str) -> String {
        (self.0)(string)
    }
}

pub struct Printer {
    strategy: Box<dyn PrintStrategy>,
}

impl Printer {
    pub fn new(strategy: Box<dyn PrintStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PrintStrategy>) {
        self.strategy = strategy;
    }

    pub fn print(&self, string: &str) -> String {
        self.strategy.print(string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOTTO: &str = "O tempora, o mores!";

    #[test]
    fn test_lower_and_upper() {
        let lower = Printer::new(Box::new(LowerCaseStrategy));
        assert_eq!(lower.print(MOTTO), "o tempora, o mores!");

        let upper = Printer::new(Box::new(UpperCaseStrategy));
        assert_eq!(upper.print(MOTTO), "O TEMPORA, O MORES!");
    }

    #[test]
    fn test_swap_strategy_at_runtime() {
        let mut printer = Printer::new(Box::new(LowerCaseStrategy));
        printer.set_strategy(Box::new(UpperCaseStrategy));
        assert_eq!(printer.print("abc"), "ABC");
    }

    #[test]
    fn test_closure_strategy() {
        let reversed = Printer::new(Box::new(FnStrategy(|s: &str| -> String {
            s.chars().rev().collect()
        })));
        assert_eq!(reversed.print("mores"), "serom");
    }
}
