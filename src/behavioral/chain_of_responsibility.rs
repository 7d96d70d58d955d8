// Chain of Responsibility: each money pile takes what it can and hands the
// remainder to the next, smaller pile.

use tracing::trace;

// ============================================================================
// Handler: MoneyPile
// ============================================================================

#[derive(Debug, Clone)]
pub struct MoneyPile {
    value: u32,
    quantity: u32,
    next: Option<Box<MoneyPile>>,
}

impl MoneyPile {
    pub fn new(value: u32, quantity: u32, next: Option<MoneyPile>) -> Self {
        Self {
            value,
            quantity,
            next: next.map(Box::new),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn can_take_some_bill(&self, want: u32) -> bool {
        self.value > 0 && want / self.value > 0
    }

    /// Greedy check only: bills are counted, never removed from the pile.
    pub fn can_withdraw(&self, amount: u32) -> bool {
        let mut remaining = amount;
        let mut quantity = self.quantity;

        while self.can_take_some_bill(remaining) && quantity > 0 {
            remaining -= self.value;
            quantity -= 1;
        }

        if remaining == 0 {
            return true;
        }

        match &self.next {
            Some(next) => {
                trace!(pile = self.value, remaining, "passing remainder down the chain");
                next.can_withdraw(remaining)
            }
            None => false,
        }
    }
}

// ============================================================================
// Client: ATM
// ============================================================================

pub struct Atm {
    start_pile: MoneyPile,
}

impl Atm {
    /// `start_pile` is the head of the chain, normally the hundred pile.
    pub fn new(start_pile: MoneyPile) -> Self {
        Self { start_pile }
    }

    /// The 100 > 50 > 20 > 10 configuration used throughout the walkthrough.
    pub fn with_standard_piles() -> Self {
        let ten = MoneyPile::new(10, 6, None);
        let twenty = MoneyPile::new(20, 2, Some(ten));
        let fifty = MoneyPile::new(50, 2, Some(twenty));
        let hundred = MoneyPile::new(100, 1, Some(fifty));
        Self::new(hundred)
    }

    pub fn can_withdraw(&self, amount: u32) -> bool {
        self.start_pile.can_withdraw(amount)
    }

    pub fn describe_withdraw(&self, amount: u32) -> String {
        format!("Can withdraw: {}", self.can_withdraw(amount))
    }
}
