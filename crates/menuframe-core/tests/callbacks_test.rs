//! Callback composition and the built-in combinators.

use std::{cell::RefCell, rc::Rc};

use menuframe_core::{
    Callback, Key, Menu, MenuConfig, MenuError, Offset, OnMismatch, OptionId, OptionSpec, Point,
    Size, TextContent,
    callback::{self, callback, compose},
};
use menuframe_harness::{Bitmap, Face, FixedMetrics, Rgb, Sim, SimError, standard_keys};

type Log = Rc<RefCell<Vec<u8>>>;

fn record(log: &Log, value: u8) -> Callback<FixedMetrics> {
    let log = Rc::clone(log);
    callback(move |_, _| {
        log.borrow_mut().push(value);
        Ok(())
    })
}

/// One-option menu on a 500x500 viewport whose option runs `on_activate`.
fn activated(spec: OptionSpec<FixedMetrics>, on_activate: Callback<FixedMetrics>) -> Sim {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(500.0, 500.0));
    menu.add_option(spec.on_activate(on_activate), false);
    let mut sim = Sim::new(menu, standard_keys());
    sim.start().expect("start");
    sim
}

fn plain() -> OptionSpec<FixedMetrics> {
    OptionSpec::plain(Bitmap::solid(20, 20, "icon"))
}

fn text(value: &str) -> OptionSpec<FixedMetrics> {
    OptionSpec::text(&FixedMetrics, TextContent::new(Face::default(), value, Rgb::WHITE))
}

#[test]
fn compose_runs_in_listed_order() {
    let log = Log::default();
    let mut sim = activated(plain(), compose([record(&log, 1), record(&log, 2), record(&log, 3)]));

    sim.tap(Key::Enter).expect("activate");

    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

#[test]
fn compose_stops_at_first_error() {
    let log = Log::default();
    let mut sim = activated(
        plain(),
        compose([
            record(&log, 1),
            callback::set_text("nope", OnMismatch::Fail),
            record(&log, 3),
        ]),
    );

    let err = sim.tap(Key::Enter).unwrap_err();

    assert!(matches!(
        err,
        SimError::Menu(MenuError::NotText { option }) if option == OptionId::new(0)
    ));
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn ignored_mismatch_continues() {
    let log = Log::default();
    let mut sim = activated(
        plain(),
        compose([
            callback::set_color(Rgb::YELLOW, OnMismatch::Ignore),
            callback::set_font(Face::new(20, 20), OnMismatch::Ignore),
            record(&log, 2),
        ]),
    );

    sim.tap(Key::Enter).expect("activate");

    assert_eq!(*log.borrow(), vec![2]);
}

#[test]
fn shift_and_reset_move_the_delegate() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(500.0, 500.0));
    menu.add_option(
        plain()
            .on_select_gain(callback::shift(Offset::percent(10.0, 0.0)))
            .on_select_lose(callback::reset(false, true)),
        false,
    );
    menu.add_option(plain(), false);
    let mut sim = Sim::new(menu, standard_keys());
    sim.start().expect("start");

    // 10% of a 500 px viewport.
    assert_eq!(sim.menu().options()[0].position(), Point::new(290.0, 220.0));

    sim.tap(Key::Down).expect("down");
    assert_eq!(sim.menu().options()[0].position(), Point::new(240.0, 220.0));
}

#[test]
fn set_image_on_plain_option_keeps_position() {
    let mut sim = activated(plain(), callback::set_image(Bitmap::solid(60, 20, "wide")));

    sim.tap(Key::Enter).expect("activate");

    let last = sim.surface().last_frame().last().expect("drawn").clone();
    assert_eq!(last.label, "wide");
    assert_eq!(last.position, Point::new(240.0, 240.0));
}

#[test]
fn set_font_relays_out_text() {
    let mut sim = activated(text("ab"), callback::set_font(Face::new(20, 20), OnMismatch::Fail));
    assert_eq!(sim.menu().options()[0].position(), Point::new(240.0, 240.0));

    sim.tap(Key::Enter).expect("activate");

    let option = &sim.menu().options()[0];
    assert_eq!(option.size(), Size::new(40.0, 20.0));
    assert_eq!(option.position(), Point::new(230.0, 240.0));
}

#[test]
fn reset_image_restores_original() {
    let mut sim = activated(
        plain(),
        compose([
            callback::set_image(Bitmap::solid(60, 20, "wide")),
            callback::reset(true, false),
        ]),
    );

    sim.tap(Key::Enter).expect("activate");

    let last = sim.surface().last_frame().last().expect("drawn").clone();
    assert_eq!(last.label, "icon");
}

#[test]
fn callbacks_can_lock_the_navigator() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(500.0, 500.0));
    menu.add_option(plain().on_activate(callback(|ctx, _| {
        ctx.lock();
        Ok(())
    })), false);
    menu.add_option(plain(), false);
    let mut sim = Sim::new(menu, standard_keys());
    sim.start().expect("start");

    sim.tap(Key::Enter).expect("activate");
    sim.tap(Key::Down).expect("locked");

    assert!(sim.menu().is_locked());
    assert_eq!(sim.menu().index(), 0);
}
