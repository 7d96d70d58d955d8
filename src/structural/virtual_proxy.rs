// Virtual Proxy: the physical suit is only created the first time it's needed.

use std::cell::OnceCell;
use tracing::debug;

pub trait HevSuitMedicalAid {
    fn administer_morphine(&self) -> String;
}

pub struct HevSuit;

impl HevSuitMedicalAid for HevSuit {
    fn administer_morphine(&self) -> String {
        "Morphine administered.".to_string()
    }
}

#[derive(Default)]
pub struct HevSuitHumanInterface {
    physical_suit: OnceCell<HevSuit>,
}

impl HevSuitHumanInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.physical_suit.get().is_some()
    }

    fn suit(&self) -> &HevSuit {
        self.physical_suit.get_or_init(|| {
            debug!("powering up HEV suit");
            HevSuit
        })
    }
}

impl HevSuitMedicalAid for HevSuitHumanInterface {
    fn administer_morphine(&self) -> String {
        self.suit().administer_morphine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_loaded_on_demand() {
        let human_interface = HevSuitHumanInterface::new();
        assert!(!human_interface.is_loaded());

        assert_eq!(human_interface.administer_morphine(), "Morphine administered.");
        assert!(human_interface.is_loaded());
    }

    #[test]
    fn test_repeated_use() {
        let human_interface = HevSuitHumanInterface::new();
        human_interface.administer_morphine();
        assert_eq!(human_interface.administer_morphine(), "Morphine administered.");
    }
}
