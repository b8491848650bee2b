//! The demo application: a main menu and a game screen.
//!
//! Application state (which screen is showing, the submitted name, whether
//! to quit) lives here and is driven by the [`MenuEvent`]s the active menu
//! returns each frame. Option callbacks only restyle their own delegate.

use menuframe_core::{
    Callback, EntrySettings, Key, KeyState, Menu, MenuConfig, MenuError, MenuEvent,
    MenuEventKind, OnMismatch, OptionId, OptionSpec, Place, RawInputSource, RenderSurface,
    ReleasePolicy, TextContent, TextFilter, Viewport,
    callback,
    keys::{ARROWS, HIT, RETURN},
};
use ratatui::style::Color;

use crate::surface::{CellImage, Glyphs, TermFont};

const PLACEHOLDER: &str = "type your name";

/// Key state with the demo's bindings: arrows, `hit`, `return`, and
/// `escape`, with printable text input.
pub fn bindings<S: RawInputSource>(source: S, policy: ReleasePolicy) -> KeyState<S> {
    KeyState::new(source, ARROWS.into_iter().chain(HIT).chain(RETURN).chain([(Key::Esc, "escape")]))
        .with_release_policy(policy)
        .with_text_filter(TextFilter::Printable)
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title menu.
    Main,
    /// Screen entered through `start`.
    Game,
}

#[derive(Debug, Clone, Copy)]
struct Ids {
    start: OptionId,
    name: OptionId,
    quit: OptionId,
    greeting: OptionId,
    back: OptionId,
}

/// Both menus plus the state their events drive.
#[derive(Debug)]
pub struct Demo {
    main: Menu<Glyphs>,
    game: Menu<Glyphs>,
    main_place: Place,
    game_place: Place,
    ids: Ids,
    name: Option<String>,
    quit: bool,
}

impl Demo {
    /// Build and arrange both menus inside `viewport`.
    pub fn new(config: MenuConfig, viewport: &impl Viewport) -> Result<Self, MenuError> {
        let mut main = Menu::new(config.clone(), viewport);
        main.add_option(
            OptionSpec::label(&Glyphs, TextContent::new(TermFont::BOLD, "menuframe", Color::Cyan)),
            false,
        );

        let (gain, lose) = highlight();
        let start = main.add_option(
            OptionSpec::text(&Glyphs, text("start")).on_select_gain(gain).on_select_lose(lose),
            true,
        );

        let (gain, lose) = highlight();
        let name = main.add_option(
            OptionSpec::input(
                &Glyphs,
                TextContent::new(TermFont::default(), PLACEHOLDER, Color::DarkGray),
                EntrySettings::default(),
            )
            .on_activate(callback::set_text("", OnMismatch::Fail))
            .on_select_gain(gain)
            .on_select_lose(lose),
            false,
        );

        let (gain, lose) = highlight();
        let quit = main.add_option(
            OptionSpec::text(&Glyphs, text("quit")).on_select_gain(gain).on_select_lose(lose),
            false,
        );

        let mut game = Menu::new(config, viewport);
        let greeting = game.add_option(OptionSpec::label(&Glyphs, text("hello, stranger")), false);
        let (gain, lose) = highlight();
        let back = game.add_option(
            OptionSpec::text(&Glyphs, text("back")).on_select_gain(gain).on_select_lose(lose),
            true,
        );

        main.arrange()?;
        game.arrange()?;

        let mut main_place = Place::new();
        main_place.activate();

        Ok(Self {
            main,
            game,
            main_place,
            game_place: Place::new(),
            ids: Ids { start, name, quit, greeting, back },
            name: None,
            quit: false,
        })
    }

    /// Run one frame of input through the showing menu and act on its
    /// events. Call after [`KeyState::update`].
    pub fn update<S: RawInputSource>(&mut self, keys: &mut KeyState<S>) -> Result<(), MenuError> {
        let events = self.active_mut().update(keys)?;
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    fn handle(&mut self, event: MenuEvent) -> Result<(), MenuError> {
        match event.kind {
            MenuEventKind::Activated if event.option == self.ids.start => {
                self.switch(Screen::Game);
            },
            MenuEventKind::Activated if event.option == self.ids.back => {
                self.switch(Screen::Main);
            },
            MenuEventKind::Activated if event.option == self.ids.quit => {
                tracing::info!("quit selected");
                self.quit = true;
            },
            MenuEventKind::Published if event.option == self.ids.name => {
                let entered = self.main.option(self.ids.name)?.delegate().text()?.text().trim().to_owned();
                if entered.is_empty() {
                    return Ok(());
                }
                tracing::info!(name = %entered, "name submitted");
                self.game
                    .option_mut(self.ids.greeting)?
                    .delegate_mut()
                    .text_mut()?
                    .set_text(format!("hello, {entered}"));
                self.name = Some(entered);
            },
            _ => {},
        }
        Ok(())
    }

    fn switch(&mut self, to: Screen) {
        match to {
            Screen::Main => {
                self.game_place.deactivate();
                self.main_place.activate();
            },
            Screen::Game => {
                self.main_place.deactivate();
                self.game_place.activate();
            },
        }
        tracing::debug!(screen = ?to, "screen switched");
    }

    /// Draw the showing menu.
    pub fn render(&mut self, surface: &mut impl RenderSurface<CellImage>) {
        self.active_mut().render(surface, &Glyphs);
    }

    /// The showing screen.
    pub fn screen(&self) -> Screen {
        if self.game_place.is_active() { Screen::Game } else { Screen::Main }
    }

    /// The showing menu.
    pub fn active(&self) -> &Menu<Glyphs> {
        match self.screen() {
            Screen::Main => &self.main,
            Screen::Game => &self.game,
        }
    }

    fn active_mut(&mut self) -> &mut Menu<Glyphs> {
        match self.screen() {
            Screen::Main => &mut self.main,
            Screen::Game => &mut self.game,
        }
    }

    /// Last submitted name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether `quit` was activated.
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

fn text(value: &str) -> TextContent<Glyphs> {
    TextContent::new(TermFont::default(), value, Color::White)
}

fn highlight() -> (Callback<Glyphs>, Callback<Glyphs>) {
    (
        callback::set_color(Color::Yellow, OnMismatch::Fail),
        callback::set_color(Color::White, OnMismatch::Fail),
    )
}
