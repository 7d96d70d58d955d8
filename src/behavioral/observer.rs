// Observer: the test chambers announce changes to a weakly held observer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub trait PropertyObserver {
    fn will_change(&self, property_name: &str, new_value: i64);
    fn did_change(&self, property_name: &str, old_value: i64);
}

const TEST_CHAMBER_NUMBER: &str = "testChamberNumber";

#[derive(Default)]
pub struct TestChambers {
    observer: Option<Weak<dyn PropertyObserver>>,
    test_chamber_number: i64,
}

impl TestChambers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chambers do not keep the observer alive.
    pub fn set_observer(&mut self, observer: &Rc<dyn PropertyObserver>) {
        self.observer = Some(Rc::downgrade(observer));
    }

    pub fn test_chamber_number(&self) -> i64 {
        self.test_chamber_number
    }

    pub fn set_test_chamber_number(&mut self, value: i64) {
        let observer = self.observer.as_ref().and_then(Weak::upgrade);

        if let Some(observer) = &observer {
            observer.will_change(TEST_CHAMBER_NUMBER, value);
        }
        let old_value = std::mem::replace(&mut self.test_chamber_number, value);
        if let Some(observer) = &observer {
            observer.did_change(TEST_CHAMBER_NUMBER, old_value);
        }
    }

    pub fn advance(&mut self) {
        self.set_test_chamber_number(self.test_chamber_number + 1);
    }
}

/// Records what GLaDOS has to say about chamber changes.
#[derive(Default)]
pub struct Observer {
    said: RefCell<Vec<String>>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn said(&self) -> Vec<String> {
        self.said.borrow().clone()
    }
}

impl PropertyObserver for Observer {
    fn will_change(&self, _property_name: &str, new_value: i64) {
        if new_value == 1 {
            self.said.borrow_mut().push(
                "Okay. Look. We both said a lot of things that you're going to regret."
                    .to_string(),
            );
        }
    }

    fn did_change(&self, _property_name: &str, old_value: i64) {
        if old_value == 0 {
            self.said.borrow_mut().push(
                "Sorry about the mess. I've really let the place go since you killed me."
                    .to_string(),
            );
        }
    }
}
