// Every usage example from the walkthroughs, checked through the public API.

use design_patterns::behavioral::chain_of_responsibility::Atm;
use design_patterns::behavioral::command::Hal9000DoorsOperations;
use design_patterns::behavioral::interpreter::{self, IntegerContext, Variable};
use design_patterns::behavioral::memento::{CheckPoint, GameState, KEY_GAME_STATE};
use design_patterns::behavioral::visitor::{known_planets, planet_names};
use design_patterns::catalog::{self, Category, Locale};
use design_patterns::creational::factory_method::{Country, CurrencyFactory};
use design_patterns::structural::facade::Defaults;
use design_patterns::structural::protection_proxy::{CurrentComputer, DoorOpening, ACCESS_DENIED};
use design_patterns::DefaultsStore;
use tempfile::tempdir;

#[test]
fn test_atm_answers() {
    let atm = Atm::with_standard_piles();
    let answers: Vec<String> = [310, 100, 165, 30]
        .into_iter()
        .map(|amount| atm.describe_withdraw(amount))
        .collect();
    assert_eq!(
        answers,
        vec![
            "Can withdraw: false",
            "Can withdraw: true",
            "Can withdraw: false",
            "Can withdraw: true",
        ]
    );
}

#[test]
fn test_doors_and_proxy() {
    let door_module = Hal9000DoorsOperations::new("Pod Bay Doors");
    assert_eq!(door_module.open(), "Opened Pod Bay Doors");

    let mut computer = CurrentComputer::new();
    assert_eq!(computer.open("Pod Bay Doors"), ACCESS_DENIED);
    computer.authenticate("pass");
    assert!(computer.open("Pod Bay Doors").starts_with("HAL9000"));
}

#[test]
fn test_interpreter_from_text() {
    let mut context = IntegerContext::new();
    context.assign(&Variable::new('A'), 2);
    context.assign(&Variable::new('B'), 1);
    context.assign(&Variable::new('C'), 3);

    let expression = interpreter::parse("A + (B + C)").unwrap();
    assert_eq!(expression.evaluate(&context).unwrap(), 6);
}

#[test]
fn test_memento_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("defaults.json");

    {
        let mut store = DefaultsStore::open(&path).unwrap();
        let state = GameState::new("Unforeseen Consequences", "MP5");
        CheckPoint::save_state(&mut store, &state.to_memento(), KEY_GAME_STATE).unwrap();
    }

    let store = DefaultsStore::open(&path).unwrap();
    let mut restored = GameState::default();
    restored.restore_from_memento(&CheckPoint::restore_previous_state(&store, KEY_GAME_STATE));
    assert_eq!(restored, GameState::new("Unforeseen Consequences", "MP5"));
}

#[test]
fn test_facade_and_memento_share_store() {
    let mut store = DefaultsStore::new();
    Defaults::new(&mut store)
        .set("Bishop", Some("Disconnect me"))
        .unwrap();
    CheckPoint::save_state(
        &mut store,
        &GameState::new("Office Complex", "Crossbow").to_memento(),
        KEY_GAME_STATE,
    )
    .unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.string("Bishop"), Some("Disconnect me"));
}

#[test]
fn test_visitor_and_currency() {
    assert_eq!(planet_names(&known_planets()).len(), 4);
    assert_eq!(CurrencyFactory::code_or_fallback(Country::Uk), "No Currency Code Available");
}

#[test]
fn test_catalog_covers_every_module() {
    let slugs = [
        "chain-of-responsibility",
        "command",
        "interpreter",
        "iterator",
        "mediator",
        "memento",
        "observer",
        "state",
        "strategy",
        "template-method",
        "visitor",
        "abstract-factory",
        "builder",
        "factory-method",
        "monostate",
        "prototype",
        "singleton",
        "adapter",
        "bridge",
        "composite",
        "decorator",
        "facade",
        "flyweight",
        "protection-proxy",
        "virtual-proxy",
    ];
    for slug in slugs {
        let info = catalog::find(slug).unwrap_or_else(|| panic!("missing {slug}"));
        assert!(!info.summary(Locale::En).is_empty());
        assert!(!info.summary(Locale::Zh).is_empty());
    }
    assert_eq!(
        catalog::by_category(Category::Structural).last().map(|i| i.slug),
        Some("virtual-proxy")
    );
}
