// Command: door operations wrapped as objects that can run now or later.

pub trait DoorCommand {
    fn execute(&self) -> String;
}

pub struct OpenCommand {
    doors: String,
}

impl OpenCommand {
    pub fn new(doors: impl Into<String>) -> Self {
        Self {
            doors: doors.into(),
        }
    }
}

impl DoorCommand for OpenCommand {
    fn execute(&self) -> String {
        format!("Opened {}", self.doors)
    }
}

pub struct CloseCommand {
    doors: String,
}

impl CloseCommand {
    pub fn new(doors: impl Into<String>) -> Self {
        Self {
            doors: doors.into(),
        }
    }
}

impl DoorCommand for CloseCommand {
    fn execute(&self) -> String {
        format!("Closed {}", self.doors)
    }
}

pub struct Hal9000DoorsOperations {
    open_command: Box<dyn DoorCommand>,
    close_command: Box<dyn DoorCommand>,
}

impl Hal9000DoorsOperations {
    pub fn new(doors: &str) -> Self {
        Self {
            open_command: Box::new(OpenCommand::new(doors)),
            close_command: Box::new(CloseCommand::new(doors)),
        }
    }

    pub fn open(&self) -> String {
        self.open_command.execute()
    }

    pub fn close(&self) -> String {
        self.close_command.execute()
    }
}

/// Holds commands for later and replays them in submission order.
#[derive(Default)]
pub struct DoorLog {
    pending: Vec<Box<dyn DoorCommand>>,
}

impl DoorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, command: Box<dyn DoorCommand>) {
        self.pending.push(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn run_all(&mut self) -> Vec<String> {
        self.pending.drain(..).map(|command| command.execute()).collect()
    }
}
