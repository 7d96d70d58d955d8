// Walkthrough: Creational Patterns - Abstract Factory, Builder, Factory Method,
// Monostate, Prototype, Singleton.

use colored::Colorize;
use design_patterns::catalog::{self, Category};
use design_patterns::config::CatalogConfig;
use design_patterns::creational::abstract_factory::{BurgerFactoryType, BurgerMaking};
use design_patterns::creational::builder::{DeathStar, DeathStarBuilder};
use design_patterns::creational::factory_method::{Country, CurrencyFactory};
use design_patterns::creational::monostate::{screen_color, screen_title, Settings, Theme};
use design_patterns::creational::prototype::MoonWorker;
use design_patterns::creational::singleton::ElonMusk;
use design_patterns::logging;

fn abstract_factory_example() {
    let big_kahuna = BurgerFactoryType::BigKahuna.make();
    let jack_in_the_box = BurgerFactoryType::JackInTheBox.make();
    println!("Big Kahuna: {}", big_kahuna.ingredients().join(", "));
    println!("Jack in the Box: {}", jack_in_the_box.ingredients().join(", "));
}

fn builder_example() -> design_patterns::Result<()> {
    let empire = DeathStarBuilder::new(|builder| {
        builder.x = Some(0.1);
        builder.y = Some(0.2);
        builder.z = Some(0.3);
    });
    let death_star = DeathStar::try_from(&empire)?;
    println!("{death_star}");

    let unfinished = DeathStarBuilder::new(|builder| builder.x = Some(1.0));
    if let Err(err) = DeathStar::try_from(&unfinished) {
        println!("Unfinished: {err}");
    }
    Ok(())
}

fn factory_method_example() {
    for country in [Country::Greece, Country::Spain, Country::UnitedStates, Country::Uk] {
        println!("{:?}: {}", country, CurrencyFactory::code_or_fallback(country));
    }
}

fn monostate_example() {
    let settings = Settings::new();
    settings.set_current_theme(Theme::Old);
    println!("Screen 1 title: {}", screen_title(&Settings::new()));

    settings.set_current_theme(Theme::New);
    println!("Screen 2 title: {}", screen_title(&Settings::new()));
    println!("Screen 2 color: {}", screen_color(&Settings::new()));
}

fn prototype_example() {
    let prototype = MoonWorker::new("Sam Bell");

    let mut bell1 = prototype.clone_worker();
    bell1.health = 12;
    let mut bell2 = prototype.clone_worker();
    bell2.health = 23;
    let mut bell3 = prototype.clone_worker();
    bell3.health = 0;

    for bell in [&bell1, &bell2, &bell3] {
        println!("{} health: {}", bell.name, bell.health);
    }
}

fn singleton_example() {
    let elon = ElonMusk::shared();
    // There is only one Elon Musk folks.
    println!("Same instance: {}", std::ptr::eq(elon, ElonMusk::shared()));
}

fn main() -> design_patterns::Result<()> {
    let config = CatalogConfig::load_default()?;
    logging::init(&config.log_filter);
    let locale = config.locale;

    println!("{}", Category::Creational.title(locale).bold().underline());
    println!("{}\n", Category::Creational.description(locale));

    println!("{}", catalog::section_banner("abstract-factory", locale));
    abstract_factory_example();
    println!();

    println!("{}", catalog::section_banner("builder", locale));
    builder_example()?;
    println!();

    println!("{}", catalog::section_banner("factory-method", locale));
    factory_method_example();
    println!();

    println!("{}", catalog::section_banner("monostate", locale));
    monostate_example();
    println!();

    println!("{}", catalog::section_banner("prototype", locale));
    prototype_example();
    println!();

    println!("{}", catalog::section_banner("singleton", locale));
    singleton_example();

    Ok(())
}
