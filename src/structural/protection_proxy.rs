// Protection Proxy: the current computer only forwards to HAL 9000 after a
// successful password check.

pub trait DoorOpening {
    fn open(&self, doors: &str) -> String;
}

pub struct Hal9000;

impl DoorOpening for Hal9000 {
    fn open(&self, doors: &str) -> String {
        format!("HAL9000: Affirmative, Dave. I read you. Opened {doors}.")
    }
}

pub const ACCESS_DENIED: &str = "Access Denied. I'm afraid I can't do that.";
const PASSWORD: &str = "pass";

#[derive(Default)]
pub struct CurrentComputer {
    computer: Option<Hal9000>,
}

impl CurrentComputer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticate(&mut self, password: &str) -> bool {
        if password != PASSWORD {
            return false;
        }
        self.computer = Some(Hal9000);
        true
    }
}

impl DoorOpening for CurrentComputer {
    fn open(&self, doors: &str) -> String {
        match &self.computer {
            Some(computer) => computer.open(doors),
            None => ACCESS_DENIED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POD_BAY: &str = "Pod Bay Doors";

    #[test]
    fn test_denied_then_opened() {
        let mut computer = CurrentComputer::new();
        assert_eq!(computer.open(POD_BAY), ACCESS_DENIED);

        assert!(computer.authenticate("pass"));
        assert_eq!(
            computer.open(POD_BAY),
            "HAL9000: Affirmative, Dave. I read you. Opened Pod Bay Doors."
        );
    }

    #[test]
    fn test_wrong_password() {
        let mut computer = CurrentComputer::new();
        assert!(!computer.authenticate("open sesame"));
        assert_eq!(computer.open(POD_BAY), ACCESS_DENIED);
    }

    #[test]
    fn test_wrong_password_keeps_earlier_login() {
        let mut computer = CurrentComputer::new();
        assert!(computer.authenticate("pass"));
        assert!(!computer.authenticate("nope"));
        assert_ne!(computer.open(POD_BAY), ACCESS_DENIED);
    }
}
