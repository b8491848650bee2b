//! Layout, re-layout, and text buffer behavior.

use menuframe_core::{
    Menu, MenuConfig, MenuError, Offset, OptionSpec, Point, Size, TextCapability, TextContent,
};
use menuframe_harness::{Bitmap, Face, FixedMetrics, RecordingSurface, Rgb};

fn text(value: &str) -> TextContent<FixedMetrics> {
    TextContent::new(Face::default(), value, Rgb::WHITE)
}

#[test]
fn anchors_spread_around_center() {
    let mut menu: Menu<FixedMetrics> = Menu::new(MenuConfig::vertical(40.0), &Size::new(500.0, 500.0));
    for i in 0..4 {
        menu.add_option(OptionSpec::plain(Bitmap::solid(30, 10, format!("{i}"))), i == 2);
    }

    menu.arrange().expect("arrange");

    let centers: Vec<_> = menu.options().iter().map(|o| o.center()).collect();
    assert_eq!(centers, vec![
        Point::new(250.0, 170.0),
        Point::new(250.0, 210.0),
        Point::new(250.0, 250.0),
        Point::new(250.0, 290.0),
    ]);
    assert_eq!(menu.index(), 2);
}

#[test]
fn horizontal_layout_with_offset() {
    let config = MenuConfig::horizontal(100.0).with_offset(Offset::percent(0.0, -10.0));
    let mut menu: Menu<FixedMetrics> = Menu::new(config, &Size::new(400.0, 200.0));
    for i in 0..3 {
        menu.add_option(OptionSpec::plain(Bitmap::solid(20, 20, format!("{i}"))), false);
    }

    menu.arrange().expect("arrange");

    let centers: Vec<_> = menu.options().iter().map(|o| o.center()).collect();
    assert_eq!(centers, vec![
        Point::new(100.0, 80.0),
        Point::new(200.0, 80.0),
        Point::new(300.0, 80.0),
    ]);
}

#[test]
fn growing_text_stays_centered() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(600.0, 600.0));
    let id = menu.add_option(OptionSpec::text(&FixedMetrics, text("abcd")), false);
    menu.arrange().expect("arrange");
    assert_eq!(menu.option(id).expect("option").position().x, 280.0);

    menu.option_mut(id)
        .expect("option")
        .delegate_mut()
        .text_mut()
        .expect("text")
        .set_text("abcdefgh".to_owned());
    menu.render(&mut RecordingSurface::new(), &FixedMetrics);

    let option = menu.option(id).expect("option");
    assert_eq!(option.size(), Size::new(80.0, 20.0));
    assert_eq!(option.position().x, 260.0);
    assert_eq!(option.center(), Point::new(300.0, 300.0));
}

#[test]
fn unchanged_text_does_not_move() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(600.0, 600.0));
    let id = menu.add_option(OptionSpec::text(&FixedMetrics, text("same")), false);
    menu.arrange().expect("arrange");
    let before = menu.option(id).expect("option").position();

    let mut surface = RecordingSurface::new();
    for _ in 0..3 {
        surface.begin_frame();
        menu.render(&mut surface, &FixedMetrics);
    }

    assert_eq!(menu.option(id).expect("option").position(), before);
    assert!(surface.calls().iter().all(|call| call.position == before));
}

#[test]
fn append_append_reset_restores_initial_value() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(600.0, 600.0));
    let id = menu.add_option(OptionSpec::text(&FixedMetrics, text("name")), false);
    menu.arrange().expect("arrange");

    let delegate = menu.option_mut(id).expect("option").delegate_mut();
    delegate.append('a').expect("append");
    delegate.append('b').expect("append");
    assert_eq!(delegate.text().expect("text").text(), "nameab");

    delegate.reset_text().expect("reset");
    assert_eq!(delegate.text().expect("text").text(), "name");
}

#[test]
fn reset_uses_overridden_initial_value() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(600.0, 600.0));
    let id = menu.add_option(OptionSpec::text(&FixedMetrics, text("Bob").with_initial("")), false);
    menu.arrange().expect("arrange");

    let delegate = menu.option_mut(id).expect("option").delegate_mut();
    delegate.reset_text().expect("reset");
    menu.render(&mut RecordingSurface::new(), &FixedMetrics);

    let option = menu.option(id).expect("option");
    assert_eq!(option.delegate().text().expect("text").text(), "");
    assert_eq!(option.size(), Size::new(0.0, 20.0));
}

#[test]
fn plain_option_has_no_text() {
    let mut menu: Menu<FixedMetrics> = Menu::new(MenuConfig::default(), &Size::new(600.0, 600.0));
    let id = menu.add_option(OptionSpec::plain(Bitmap::solid(10, 10, "icon")), false);
    menu.arrange().expect("arrange");

    let delegate = menu.option_mut(id).expect("option").delegate_mut();

    assert_eq!(delegate.append('x'), Err(MenuError::NotText { option: id }));
    assert!(matches!(delegate.text_mut(), Err(MenuError::NotText { .. })));
}

#[test]
fn arrange_rebuilds_delegates_from_template() {
    let mut menu = Menu::new(MenuConfig::default(), &Size::new(600.0, 600.0));
    let id = menu.add_option(OptionSpec::text(&FixedMetrics, text("abc")), false);
    menu.arrange().expect("arrange");

    menu.option_mut(id).expect("option").delegate_mut().append('d').expect("append");
    menu.arrange().expect("re-arrange");

    let option = menu.option(id).expect("option");
    assert_eq!(option.delegate().text().expect("text").text(), "abc");
    assert_eq!(option.delegate().owner(), id);
}
