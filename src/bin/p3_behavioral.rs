// Walkthrough: Behavioral Patterns - Chain of Responsibility, Command,
// Interpreter, Iterator, Mediator, Memento, Observer, State, Strategy,
// Template Method, Visitor.

use colored::Colorize;
use design_patterns::behavioral::chain_of_responsibility::Atm;
use design_patterns::behavioral::command::{CloseCommand, DoorLog, Hal9000DoorsOperations, OpenCommand};
use design_patterns::behavioral::interpreter::{self, IntegerContext, Variable};
use design_patterns::behavioral::iterator::{reading_list, Novella, Novellas};
use design_patterns::behavioral::mediator::{
    spam_monster, Colleague, ConcreteColleague, MessageMediator,
};
use design_patterns::behavioral::memento::{CheckPoint, GameState, KEY_GAME_STATE};
use design_patterns::behavioral::observer::{Observer, PropertyObserver, TestChambers};
use design_patterns::behavioral::state::Context;
use design_patterns::behavioral::strategy::{LowerCaseStrategy, Printer, UpperCaseStrategy};
use design_patterns::behavioral::template_method::{
    Apple, CodeGenerator, Computer, Dell, HtmlGeneratorPhases, JsonGeneratorPhases, RoseGarden,
};
use design_patterns::behavioral::visitor::{known_planets, planet_names};
use design_patterns::catalog::{self, Category};
use design_patterns::config::CatalogConfig;
use design_patterns::logging;
use design_patterns::store::DefaultsStore;
use std::rc::Rc;

fn chain_of_responsibility_example() {
    // Piles linked together 10 < 20 < 50 < 100
    let atm = Atm::with_standard_piles();
    for amount in [310, 100, 165, 30] {
        println!("{amount}: {}", atm.describe_withdraw(amount));
    }
}

fn command_example() {
    let door_module = Hal9000DoorsOperations::new("Pod Bay Doors");
    println!("{}", door_module.open());
    println!("{}", door_module.close());

    let mut log = DoorLog::new();
    log.queue(Box::new(OpenCommand::new("Airlock")));
    log.queue(Box::new(CloseCommand::new("Airlock")));
    println!("Replayed later: {:?}", log.run_all());
}

fn interpreter_example() -> design_patterns::Result<()> {
    let mut context = IntegerContext::new();
    context.assign(&Variable::new('A'), 2);
    context.assign(&Variable::new('B'), 1);
    context.assign(&Variable::new('C'), 3);

    let expression = interpreter::parse("A + (B + C)")?;
    println!("{} = {}", expression.describe(), expression.evaluate(&context)?);

    let replaced = expression.replace('C', interpreter::parse("A + A")?.as_ref());
    println!("{} = {}", replaced.describe(), replaced.evaluate(&context)?);
    Ok(())
}

fn iterator_example() {
    let great_novellas = Novellas::new(vec![Novella::new("The Mist")]);
    for line in reading_list(&great_novellas) {
        println!("{line}");
    }
}

fn mediator_example() {
    let mut mediator = MessageMediator::new();
    let user0: Rc<dyn Colleague> = ConcreteColleague::new("0");
    let user1 = ConcreteColleague::new("1");
    mediator.add_colleague(user0.clone());
    mediator.add_colleague(user1.clone());

    // user1 receives, user0 does not
    mediator.send("Hello", &user0);
    for line in user1.inbox() {
        println!("{line}");
    }

    spam_monster("Welcome aboard", &mediator);
    println!("user1 inbox size: {}", user1.inbox().len());
}

fn memento_example(store: &mut DefaultsStore) -> design_patterns::Result<()> {
    let mut game_state = GameState::default();
    game_state.restore_from_memento(&CheckPoint::restore_previous_state(store, KEY_GAME_STATE));
    println!("Fresh: {:?}", game_state);

    game_state.chapter = "Black Mesa Inbound".to_string();
    game_state.weapon = "Crowbar".to_string();
    CheckPoint::save_state(store, &game_state.to_memento(), KEY_GAME_STATE)?;

    game_state.chapter = "Anomalous Materials".to_string();
    game_state.weapon = "Glock 17".to_string();
    game_state.restore_from_memento(&CheckPoint::restore_previous_state(store, KEY_GAME_STATE));
    println!("Restored: {:?}", game_state);

    game_state.chapter = "Unforeseen Consequences".to_string();
    game_state.weapon = "MP5".to_string();
    CheckPoint::save_state(store, &game_state.to_memento(), "gameState2")?;

    game_state.chapter = "Office Complex".to_string();
    game_state.weapon = "Crossbow".to_string();
    CheckPoint::save_state(store, &game_state.to_memento(), KEY_GAME_STATE)?;

    game_state.restore_from_memento(&CheckPoint::restore_previous_state(store, "gameState2"));
    println!("Restored gameState2: {:?}", game_state);
    Ok(())
}

fn observer_example() {
    let observer_instance = Rc::new(Observer::new());
    let as_observer: Rc<dyn PropertyObserver> = observer_instance.clone();
    let mut test_chambers = TestChambers::new();
    test_chambers.set_observer(&as_observer);
    test_chambers.advance();

    for line in observer_instance.said() {
        println!("{line}");
    }
}

fn state_example() {
    let mut context = Context::new();
    println!("{:?}", (context.is_authorized(), context.user_id()));
    context.change_state_to_authorized("admin");
    // now logged in as "admin"
    println!("{:?}", (context.is_authorized(), context.user_id()));
    context.change_state_to_unauthorized();
    println!("{:?}", (context.is_authorized(), context.user_id()));
}

fn strategy_example() {
    let lower = Printer::new(Box::new(LowerCaseStrategy));
    println!("{}", lower.print("O tempora, o mores!"));

    let upper = Printer::new(Box::new(UpperCaseStrategy));
    println!("{}", upper.print("O tempora, o mores!"));
}

fn template_method_example() {
    for step in RoseGarden.prepare() {
        println!("{step}");
    }

    println!("{}", Apple.print_brand_name());
    println!("{}", Dell.print_brand_name());

    let html_gen = CodeGenerator::new(Box::new(HtmlGeneratorPhases));
    let json_gen = CodeGenerator::new(Box::new(JsonGeneratorPhases));
    for line in html_gen.cross_compile().into_iter().chain(json_gen.cross_compile()) {
        println!("{line}");
    }
}

fn visitor_example() {
    let names = planet_names(&known_planets());
    println!("{names:?}");
}

fn main() -> design_patterns::Result<()> {
    let config = CatalogConfig::load_default()?;
    logging::init(&config.log_filter);
    let locale = config.locale;

    let mut store = match &config.store_path {
        Some(path) => DefaultsStore::open(path)?,
        None => DefaultsStore::new(),
    };

    println!("{}", Category::Behavioral.title(locale).bold().underline());
    println!("{}\n", Category::Behavioral.description(locale));

    println!("{}", catalog::section_banner("chain-of-responsibility", locale));
    chain_of_responsibility_example();
    println!();

    println!("{}", catalog::section_banner("command", locale));
    command_example();
    println!();

    println!("{}", catalog::section_banner("interpreter", locale));
    interpreter_example()?;
    println!();

    println!("{}", catalog::section_banner("iterator", locale));
    iterator_example();
    println!();

    println!("{}", catalog::section_banner("mediator", locale));
    mediator_example();
    println!();

    println!("{}", catalog::section_banner("memento", locale));
    memento_example(&mut store)?;
    println!();

    println!("{}", catalog::section_banner("observer", locale));
    observer_example();
    println!();

    println!("{}", catalog::section_banner("state", locale));
    state_example();
    println!();

    println!("{}", catalog::section_banner("strategy", locale));
    strategy_example();
    println!();

    println!("{}", catalog::section_banner("template-method", locale));
    template_method_example();
    println!();

    println!("{}", catalog::section_banner("visitor", locale));
    visitor_example();

    Ok(())
}
