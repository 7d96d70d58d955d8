// Factory Method: the factory decides which currency type a country gets.

pub trait CurrencyDescribing {
    fn symbol(&self) -> &str;
    fn code(&self) -> &str;
}

pub struct Euro;

impl CurrencyDescribing for Euro {
    fn symbol(&self) -> &str {
        "€"
    }

    fn code(&self) -> &str {
        "EUR"
    }
}

pub struct UnitedStatesDollar;

impl CurrencyDescribing for UnitedStatesDollar {
    fn symbol(&self) -> &str {
        "$"
    }

    fn code(&self) -> &str {
        "USD"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    UnitedStates,
    Spain,
    Uk,
    Greece,
}

pub const NO_CURRENCY_CODE: &str = "No Currency Code Available";

pub struct CurrencyFactory;

impl CurrencyFactory {
    pub fn currency(country: Country) -> Option<Box<dyn CurrencyDescribing>> {
        match country {
            Country::Spain | Country::Greece => Some(Box::new(Euro)),
            Country::UnitedStates => Some(Box::new(UnitedStatesDollar)),
            Country::Uk => None,
        }
    }

    pub fn code_or_fallback(country: Country) -> String {
        Self::currency(country)
            .map(|currency| currency.code().to_string())
            .unwrap_or_else(|| NO_CURRENCY_CODE.to_string())
    }
}
