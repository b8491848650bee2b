//! Snapshot of what a menu draws frame by frame.

use menuframe_core::{
    Key, Menu, MenuConfig, Offset, OnMismatch, OptionSpec, Size, TextContent,
    callback::{self, compose},
};
use menuframe_harness::{Face, FixedMetrics, Rgb, Sim, standard_keys};

fn text(value: &str) -> TextContent<FixedMetrics> {
    TextContent::new(Face::default(), value, Rgb::WHITE)
}

#[test]
fn selection_changes_redraw_in_place() {
    let mut menu = Menu::new(MenuConfig::horizontal(100.0), &Size::new(400.0, 200.0));
    menu.add_option(OptionSpec::text(&FixedMetrics, text("one")), true);
    menu.add_option(
        OptionSpec::text(&FixedMetrics, text("two"))
            .on_select_gain(compose([
                callback::set_text(">two<", OnMismatch::Fail),
                callback::shift(Offset::pixels(0.0, -10.0)),
            ]))
            .on_select_lose(compose([
                callback::set_text("two", OnMismatch::Fail),
                callback::shift(Offset::pixels(0.0, 10.0)),
            ])),
        false,
    );
    menu.add_option(OptionSpec::text(&FixedMetrics, text("three")), false);

    let mut sim = Sim::new(menu, standard_keys());
    sim.start().expect("start");
    sim.tap(Key::Right).expect("right");
    sim.tap(Key::Right).expect("right");

    insta::assert_snapshot!(sim.surface().log(), @r#"
    frame 1: "one" at (85, 90) size 30x20
    frame 1: "two" at (185, 90) size 30x20
    frame 1: "three" at (275, 90) size 50x20
    frame 2: "one" at (85, 90) size 30x20
    frame 2: ">two<" at (175, 80) size 50x20
    frame 2: "three" at (275, 90) size 50x20
    frame 3: "one" at (85, 90) size 30x20
    frame 3: ">two<" at (175, 80) size 50x20
    frame 3: "three" at (275, 90) size 50x20
    frame 4: "one" at (85, 90) size 30x20
    frame 4: "two" at (185, 90) size 30x20
    frame 4: "three" at (275, 90) size 50x20
    frame 5: "one" at (85, 90) size 30x20
    frame 5: "two" at (185, 90) size 30x20
    frame 5: "three" at (275, 90) size 50x20
    "#);
}
