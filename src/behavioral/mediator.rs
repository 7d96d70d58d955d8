// Mediator: colleagues never hold references to each other, only to the
// mediator that routes their messages.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Colleague {
    fn name(&self) -> &str;
    fn receive(&self, message: &str);
}

pub struct ConcreteColleague {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl ConcreteColleague {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            inbox: RefCell::new(Vec::new()),
        })
    }

    pub fn inbox(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl Colleague for ConcreteColleague {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str) {
        self.inbox
            .borrow_mut()
            .push(format!("Colleague {} received: {}", self.name, message));
    }
}

pub trait MessageSending {
    fn broadcast(&self, message: &str);
}

#[derive(Default)]
pub struct MessageMediator {
    colleagues: Vec<Rc<dyn Colleague>>,
}

impl MessageMediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_colleague(&mut self, colleague: Rc<dyn Colleague>) {
        self.colleagues.push(colleague);
    }

    /// Delivers to everyone except `from`, compared by identity not by name.
    pub fn send(&self, message: &str, from: &Rc<dyn Colleague>) {
        for colleague in &self.colleagues {
            if !Rc::ptr_eq(colleague, from) {
                colleague.receive(message);
            }
        }
    }
}

impl MessageSending for MessageMediator {
    fn broadcast(&self, message: &str) {
        for colleague in &self.colleagues {
            colleague.receive(message);
        }
    }
}

/// The sender only knows it talks to something that can send.
pub fn spam_monster(message: &str, worker: &dyn MessageSending) {
    worker.broadcast(message);
}
