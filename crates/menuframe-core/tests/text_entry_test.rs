//! Text entry focus, typing, publish, and cancel.

use std::{cell::RefCell, rc::Rc};

use menuframe_core::{
    EntrySettings, EventQueue, FocusTrigger, Key, KeyState, Menu, MenuConfig, MenuEventKind,
    OptionId, OptionSpec, RawEvent, Size, TextCapability, TextContent, TextFilter,
    callback::callback,
    keys::{ARROWS, HIT, RETURN},
};
use menuframe_harness::{
    Bitmap, Face, FixedMetrics, InvariantRegistry, Rgb, Sim, standard_keys,
};

const ENTRY: OptionId = OptionId::new(1);

fn sim_with_entry(settings: EntrySettings<FixedMetrics>, keys: KeyState<EventQueue>) -> Sim {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(500.0, 500.0));
    menu.add_option(OptionSpec::plain(Bitmap::solid(20, 20, "back")), true);
    menu.add_option(
        OptionSpec::input(
            &FixedMetrics,
            TextContent::new(Face::default(), "", Rgb::WHITE),
            settings,
        ),
        false,
    );
    let mut sim = Sim::new(menu, keys).with_invariants(InvariantRegistry::standard());
    sim.start().expect("start");
    sim
}

fn entry_text(sim: &Sim) -> String {
    let option = sim.menu().option(ENTRY).expect("entry");
    option.delegate().text().expect("text").text().to_owned()
}

fn kinds(events: &[menuframe_core::MenuEvent]) -> Vec<MenuEventKind> {
    events.iter().map(|e| e.kind).collect()
}

#[test]
fn default_entry_publishes_then_cancels_on_return() {
    let mut sim = sim_with_entry(EntrySettings::default(), standard_keys());
    sim.tap(Key::Down).expect("select entry");

    sim.tap(Key::Enter).expect("focus");
    assert!(sim.menu().option(ENTRY).expect("entry").delegate().is_focused());
    sim.type_text("hi").expect("type");

    let events = sim.tap(Key::Enter).expect("publish");

    assert_eq!(kinds(&events), vec![MenuEventKind::Published, MenuEventKind::Cancelled]);
    assert!(!sim.menu().is_locked());
    assert_eq!(entry_text(&sim), "hi");
}

#[test]
fn select_gain_trigger_focuses_on_arrival() {
    let settings = EntrySettings::default().focus_on(FocusTrigger::SelectGain);
    let mut sim = sim_with_entry(settings, standard_keys());

    let events = sim.tap(Key::Down).expect("select entry");

    assert_eq!(kinds(&events), vec![MenuEventKind::SelectLost, MenuEventKind::SelectGained]);
    assert!(sim.menu().is_locked());

    // Locked: Enter publishes instead of activating.
    let events = sim.tap(Key::Enter).expect("publish");
    assert_eq!(kinds(&events), vec![MenuEventKind::Published, MenuEventKind::Cancelled]);
}

#[test]
fn publish_callback_sees_the_entry() {
    let published = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    let settings = EntrySettings::<FixedMetrics>::default().cancel_on("escape").on_publish(callback(
        move |_, delegate| {
            sink.borrow_mut().push(delegate.text()?.text().to_owned());
            delegate.reset_text()
        },
    ));
    let mut sim = sim_with_entry(settings, standard_keys());
    sim.tap(Key::Down).expect("select entry");
    sim.tap(Key::Enter).expect("focus");

    sim.type_text("ann").expect("type");
    sim.tap(Key::Enter).expect("publish");
    sim.type_text("bo").expect("type");
    sim.tap(Key::Enter).expect("publish");

    assert_eq!(*published.borrow(), vec!["ann".to_owned(), "bo".to_owned()]);
    assert_eq!(entry_text(&sim), "");
    // Publishing keeps focus; escape leaves it.
    assert!(sim.menu().is_locked());
    let events = sim.tap(Key::Esc).expect("cancel");
    assert_eq!(kinds(&events), vec![MenuEventKind::Cancelled]);
}

#[test]
fn text_filter_drops_other_classes() {
    let keys = KeyState::new(EventQueue::new(), ARROWS.into_iter().chain(HIT).chain(RETURN))
        .with_text_filter(TextFilter::Digit);
    let mut sim = sim_with_entry(EntrySettings::default(), keys);
    sim.tap(Key::Down).expect("select entry");
    sim.tap(Key::Enter).expect("focus");

    sim.type_text("a1b2").expect("type");

    assert_eq!(entry_text(&sim), "12");
}

#[test]
fn unfocused_entry_ignores_typing() {
    let mut sim = sim_with_entry(EntrySettings::default(), standard_keys());
    sim.tap(Key::Down).expect("select entry");

    sim.type_text("xyz").expect("type");

    assert_eq!(entry_text(&sim), "");
    assert!(!sim.menu().is_locked());
}

#[test]
fn last_typed_character_of_a_frame_wins() {
    let mut sim = sim_with_entry(EntrySettings::default(), standard_keys());
    sim.tap(Key::Down).expect("select entry");
    sim.tap(Key::Enter).expect("focus");

    sim.queue([RawEvent::typed('x'), RawEvent::typed('y')]);
    sim.frame().expect("frame");

    assert_eq!(entry_text(&sim), "y");
}

#[test]
fn entry_text_can_be_edited_through_capability() {
    let mut sim = sim_with_entry(EntrySettings::default(), standard_keys());

    sim.menu_mut()
        .option_mut(ENTRY)
        .expect("entry")
        .delegate_mut()
        .text_mut()
        .expect("text")
        .set_color(Rgb::YELLOW);
    sim.frame().expect("frame");

    let option = sim.menu().option(ENTRY).expect("entry");
    assert_eq!(option.delegate().text().expect("text").color(), Rgb::YELLOW);
}
