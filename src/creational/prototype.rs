// Prototype: new workers are stamped out from an existing one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoonWorker {
    pub name: String,
    pub health: u32,
}

impl MoonWorker {
    pub const FULL_HEALTH: u32 = 100;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Self::FULL_HEALTH,
        }
    }

    /// Copies the identity of the prototype; each clone starts at full health.
    pub fn clone_worker(&self) -> Self {
        Self::new(self.name.clone())
    }
}
