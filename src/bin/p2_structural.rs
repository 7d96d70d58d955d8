// Walkthrough: Structural Patterns - Adapter, Bridge, Composite, Decorator,
// Facade, Flyweight, Protection Proxy, Virtual Proxy.

use colored::Colorize;
use design_patterns::catalog::{self, Category};
use design_patterns::config::CatalogConfig;
use design_patterns::logging;
use design_patterns::store::DefaultsStore;
use design_patterns::structural::adapter::{
    aim, DeathStarSuperlaserTarget, OldDeathStarSuperlaserTarget, OlderDeathStarSuperLaserAiming,
};
use design_patterns::structural::bridge::{RemoteControl, Switch, Tv, VacuumCleaner};
use design_patterns::structural::composite::{Circle, Shape, Square, Whiteboard};
use design_patterns::structural::decorator::{Coffee, Milk, SimpleCoffee, WhipCoffee};
use design_patterns::structural::facade::Defaults;
use design_patterns::structural::flyweight::CoffeeShop;
use design_patterns::structural::protection_proxy::{CurrentComputer, DoorOpening};
use design_patterns::structural::virtual_proxy::{HevSuitHumanInterface, HevSuitMedicalAid};

fn adapter_example() {
    let target = DeathStarSuperlaserTarget::new(14.0, 12.0);
    let old_format = OldDeathStarSuperlaserTarget::new(target);
    println!("angle_h: {}, angle_v: {}", old_format.angle_h(), old_format.angle_v());
    println!("{}", aim(&old_format));
}

fn bridge_example() {
    let tv_remote_control = RemoteControl::new(Box::new(Tv));
    println!("{}", tv_remote_control.turn_on());

    let fancy_vacuum_cleaner_remote_control = RemoteControl::new(Box::new(VacuumCleaner));
    println!("{}", fancy_vacuum_cleaner_remote_control.turn_on());
}

fn composite_example() {
    let whiteboard = Whiteboard::new(vec![Box::new(Circle), Box::new(Square)]);
    for line in whiteboard.draw("Red") {
        println!("{line}");
    }
}

fn decorator_example() {
    let mut some_coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    println!("{}", some_coffee.describe());
    some_coffee = Box::new(Milk::new(some_coffee));
    println!("{}", some_coffee.describe());
    some_coffee = Box::new(WhipCoffee::new(some_coffee));
    println!("{}", some_coffee.describe());
}

fn facade_example(store: &mut DefaultsStore) -> design_patterns::Result<()> {
    let mut storage = Defaults::new(store);
    storage.set("Bishop", Some("Disconnect me. I’d rather be nothing"))?;
    println!("Bishop: {}", storage.get("Bishop").unwrap_or_default());
    Ok(())
}

fn flyweight_example() {
    let mut coffee_shop = CoffeeShop::new();
    let orders = [
        ("Cappuccino", 1),
        ("Frappe", 3),
        ("Espresso", 2),
        ("Frappe", 15),
        ("Cappuccino", 10),
        ("Frappe", 8),
        ("Espresso", 7),
        ("Cappuccino", 4),
        ("Espresso", 9),
        ("Frappe", 12),
        ("Cappuccino", 13),
        ("Espresso", 5),
    ];
    for (flavor, table) in orders {
        coffee_shop.take_order(flavor, table);
    }
    for line in coffee_shop.serve() {
        println!("{line}");
    }
    println!("Distinct flavors created: {}", coffee_shop.menu().len());
}

fn protection_proxy_example() {
    let mut computer = CurrentComputer::new();
    let pod_bay = "Pod Bay Doors";

    println!("{}", computer.open(pod_bay));
    computer.authenticate("pass");
    println!("{}", computer.open(pod_bay));
}

fn virtual_proxy_example() {
    let human_interface = HevSuitHumanInterface::new();
    println!("Suit loaded: {}", human_interface.is_loaded());
    println!("{}", human_interface.administer_morphine());
    println!("Suit loaded: {}", human_interface.is_loaded());
}

fn main() -> design_patterns::Result<()> {
    let config = CatalogConfig::load_default()?;
    logging::init(&config.log_filter);
    let locale = config.locale;

    let mut store = match &config.store_path {
        Some(path) => DefaultsStore::open(path)?,
        None => DefaultsStore::new(),
    };

    println!("{}", Category::Structural.title(locale).bold().underline());
    println!("{}\n", Category::Structural.description(locale));

    println!("{}", catalog::section_banner("adapter", locale));
    adapter_example();
    println!();

    println!("{}", catalog::section_banner("bridge", locale));
    bridge_example();
    println!();

    println!("{}", catalog::section_banner("composite", locale));
    composite_example();
    println!();

    println!("{}", catalog::section_banner("decorator", locale));
    decorator_example();
    println!();

    println!("{}", catalog::section_banner("facade", locale));
    facade_example(&mut store)?;
    println!();

    println!("{}", catalog::section_banner("flyweight", locale));
    flyweight_example();
    println!();

    println!("{}", catalog::section_banner("protection-proxy", locale));
    protection_proxy_example();
    println!();

    println!("{}", catalog::section_banner("virtual-proxy", locale));
    virtual_proxy_example();

    Ok(())
}
