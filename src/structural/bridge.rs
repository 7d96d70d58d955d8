// Bridge: the remote (abstraction) and the appliance (implementation) vary
// independently.

pub trait Appliance {
    fn run(&self) -> String;
}

pub trait Switch {
    fn appliance(&self) -> &dyn Appliance;
    fn set_appliance(&mut self, appliance: Box<dyn Appliance>);

    fn turn_on(&self) -> String {
        self.appliance().run()
    }
}

pub struct RemoteControl {
    appliance: Box<dyn Appliance>,
}

impl RemoteControl {
    pub fn new(appliance: Box<dyn Appliance>) -> Self {
        Self { appliance }
    }
}

impl Switch for RemoteControl {
    fn appliance(&self) -> &dyn Appliance {
        self.appliance.as_ref()
    }

    fn set_appliance(&mut self, appliance: Box<dyn Appliance>) {
        self.appliance = appliance;
    }
}

pub struct Tv;

impl Appliance for Tv {
    fn run(&self) -> String {
        "tv turned on".to_string()
    }
}

pub struct VacuumCleaner;

impl Appliance for VacuumCleaner {
    fn run(&self) -> String {
        "vacuum cleaner turned on".to_string()
    }
}
