//! The menu navigator.
//!
//! A [`Menu`] owns an ordered list of [`MenuOption`]s laid out along a fixed
//! spacing vector around a center point. Each frame the host calls
//! [`Menu::update`] after [`KeyState::update`] and then [`Menu::render`]:
//!
//! 1. If unlocked, a `prev` or `next` edge moves the selection (select-lose
//!    on the old option, select-gain on the new one), then an `activate`
//!    edge activates the selected option.
//! 2. Every text entry handles its typed characters and publish/cancel
//!    actions, locked or not.
//! 3. Rendering draws every option, locked or not.
//!
//! The lock is cooperative: focusing a text entry takes it so arrow keys and
//! activation reach the entry instead of the navigator.

use std::fmt;

use crate::{
    context::MenuContext,
    error::MenuError,
    event::{MenuEvent, MenuEventKind},
    geometry::{Offset, Point, Size},
    input::RawInputSource,
    keys::KeyState,
    option::{MenuOption, OptionId, OptionSpec},
    surface::{ContentFactory, RenderSurface, Viewport},
};

/// Action names driving a navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    /// Moves the selection back.
    pub prev: String,
    /// Moves the selection forward.
    pub next: String,
    /// Activates the selected option.
    pub activate: String,
}

impl Bindings {
    /// `up` / `down` / `hit`.
    pub fn vertical() -> Self {
        Self::new("up", "down", "hit")
    }

    /// `left` / `right` / `hit`.
    pub fn horizontal() -> Self {
        Self::new("left", "right", "hit")
    }

    /// Custom action names.
    pub fn new(prev: impl Into<String>, next: impl Into<String>, activate: impl Into<String>) -> Self {
        Self { prev: prev.into(), next: next.into(), activate: activate.into() }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::vertical()
    }
}

/// Layout and bindings of a [`Menu`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Distance between consecutive option centers.
    pub spacing: Point,
    /// Menu center as a percentage of the viewport.
    pub start: Point,
    /// Extra offset applied to the center once, at construction.
    pub offset: Offset,
    /// Navigation actions.
    pub bindings: Bindings,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::vertical(40.0)
    }
}

impl MenuConfig {
    /// Options stacked top to bottom, `distance` apart, driven by up/down.
    pub fn vertical(distance: f32) -> Self {
        Self {
            spacing: Point::new(0.0, distance),
            start: Point::new(50.0, 50.0),
            offset: Offset::default(),
            bindings: Bindings::vertical(),
        }
    }

    /// Options left to right, `distance` apart, driven by left/right.
    pub fn horizontal(distance: f32) -> Self {
        Self {
            spacing: Point::new(distance, 0.0),
            start: Point::new(50.0, 50.0),
            offset: Offset::default(),
            bindings: Bindings::horizontal(),
        }
    }

    /// Shift the center by `offset`.
    #[must_use]
    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    /// Place the center at `start` percent of the viewport.
    #[must_use]
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Use different navigation actions.
    #[must_use]
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }
}

/// Direction of a selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Prev,
    Next,
}

/// Ordered, navigable list of options.
pub struct Menu<F: ContentFactory> {
    options: Vec<MenuOption<F>>,
    /// Selected option. Always `< options.len()` once arranged.
    index: usize,
    /// Option added with `selected = true`, applied by [`Menu::arrange`].
    selected: usize,
    center: Point,
    config: MenuConfig,
    ctx: MenuContext,
    next_id: u32,
}

impl<F: ContentFactory> Menu<F> {
    /// Create an empty menu centered on `config.start` percent of the
    /// viewport, shifted by `config.offset`.
    pub fn new(config: MenuConfig, viewport: &impl Viewport) -> Self {
        let size = viewport.viewport_size();
        let center = size.percent(config.start) + config.offset.resolve(size);
        Self {
            options: Vec::new(),
            index: 0,
            selected: 0,
            center,
            config,
            ctx: MenuContext::new(size),
            next_id: 0,
        }
    }

    /// Append an option. If `selected`, it becomes the initial selection
    /// when the menu is arranged.
    pub fn add_option(&mut self, spec: OptionSpec<F>, selected: bool) -> OptionId {
        let id = OptionId::new(self.next_id);
        self.next_id += 1;
        if selected {
            self.selected = self.options.len();
        }
        self.options.push(spec.build(id));
        id
    }

    /// Place every option on its anchor and select the initial option (the
    /// one added as selected, or the first selectable one after it).
    ///
    /// Option `i` of `n` is centered on
    /// `center + (i - (n - 1) / 2) * spacing`.
    pub fn arrange(&mut self) -> Result<Vec<MenuEvent>, MenuError> {
        let count = self.options.len();
        if count == 0 {
            return Ok(Vec::new());
        }
        let middle = (count as f32 - 1.0) / 2.0;
        for (i, option) in self.options.iter_mut().enumerate() {
            let anchor = self.center + self.config.spacing.scale(i as f32 - middle);
            option.set_position(anchor);
        }

        let start = self.selected.min(count - 1);
        self.index = (0..count)
            .map(|distance| (start + distance) % count)
            .find(|&i| self.options[i].is_selectable())
            .unwrap_or(start);
        let option = &mut self.options[self.index];
        self.ctx.emit(option.id(), MenuEventKind::SelectGained);
        option.select_gain(&mut self.ctx)?;
        // No frame is in flight yet, so there is no triggering key to swallow.
        self.ctx.take_key_refresh();
        tracing::debug!(options = count, index = self.index, center = %self.center, "menu arranged");
        Ok(self.ctx.take_events())
    }

    /// Process one frame of input. Call after [`KeyState::update`].
    ///
    /// Returns the events produced this frame, in order.
    pub fn update<S: RawInputSource>(
        &mut self,
        keys: &mut KeyState<S>,
    ) -> Result<Vec<MenuEvent>, MenuError> {
        if self.options.is_empty() {
            return Ok(Vec::new());
        }

        if !self.ctx.is_locked() {
            if keys.just_pressed(&self.config.bindings.prev)? {
                self.step(Step::Prev, keys)?;
            } else if keys.just_pressed(&self.config.bindings.next)? {
                self.step(Step::Next, keys)?;
            }

            if keys.just_pressed(&self.config.bindings.activate)? {
                let option = &mut self.options[self.index];
                self.ctx.emit(option.id(), MenuEventKind::Activated);
                option.activate(&mut self.ctx)?;
                tracing::debug!(option = %option.id(), "option activated");
                self.refresh_if_requested(keys);
            }
        }

        for option in &mut self.options {
            option.handle_input(&mut self.ctx, keys)?;
        }
        self.refresh_if_requested(keys);

        Ok(self.ctx.take_events())
    }

    fn step<S: RawInputSource>(&mut self, step: Step, keys: &mut KeyState<S>) -> Result<(), MenuError> {
        let Some(target) = self.next_selectable(step) else {
            return Ok(());
        };
        let from = self.index;

        let option = &mut self.options[from];
        self.ctx.emit(option.id(), MenuEventKind::SelectLost);
        option.select_lose(&mut self.ctx)?;
        self.refresh_if_requested(keys);

        self.index = target;
        let option = &mut self.options[target];
        self.ctx.emit(option.id(), MenuEventKind::SelectGained);
        option.select_gain(&mut self.ctx)?;
        self.refresh_if_requested(keys);

        tracing::debug!(from, to = target, "selection moved");
        Ok(())
    }

    /// Nearest selectable option in direction `step`, wrapping around.
    /// `None` if no option is selectable.
    fn next_selectable(&self, step: Step) -> Option<usize> {
        let count = self.options.len();
        (1..=count)
            .map(|distance| match step {
                Step::Next => (self.index + distance) % count,
                Step::Prev => (self.index + count - distance % count) % count,
            })
            .find(|&i| self.options[i].is_selectable())
    }

    fn refresh_if_requested<S: RawInputSource>(&mut self, keys: &mut KeyState<S>) {
        if self.ctx.take_key_refresh() {
            tracing::trace!("refreshing key state on request");
            keys.update();
        }
    }

    /// Draw every option. Runs whether or not the menu is locked.
    pub fn render<R: RenderSurface<F::Image>>(&mut self, surface: &mut R, factory: &F) {
        for option in &mut self.options {
            option.render(surface, factory);
        }
    }

    /// [`Menu::update`] followed by [`Menu::render`].
    pub fn frame<S, R>(
        &mut self,
        keys: &mut KeyState<S>,
        surface: &mut R,
        factory: &F,
    ) -> Result<Vec<MenuEvent>, MenuError>
    where
        S: RawInputSource,
        R: RenderSurface<F::Image>,
    {
        let events = self.update(keys)?;
        self.render(surface, factory);
        Ok(events)
    }

    /// Suspend navigation and activation. Idempotent.
    pub fn lock(&mut self) {
        self.ctx.lock();
    }

    /// Resume navigation and activation. Idempotent.
    pub fn unlock(&mut self) {
        self.ctx.unlock();
    }

    /// Whether navigation is suspended.
    pub fn is_locked(&self) -> bool {
        self.ctx.is_locked()
    }

    /// Index of the selected option.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Selected option. `None` for an empty menu.
    pub fn current(&self) -> Option<&MenuOption<F>> {
        self.options.get(self.index)
    }

    /// Id of the selected option. `None` for an empty menu.
    pub fn current_id(&self) -> Option<OptionId> {
        self.current().map(MenuOption::id)
    }

    /// Option by id.
    pub fn option(&self, id: OptionId) -> Result<&MenuOption<F>, MenuError> {
        self.options
            .iter()
            .find(|option| option.id() == id)
            .ok_or(MenuError::UnknownOption(id))
    }

    /// Mutable option by id.
    pub fn option_mut(&mut self, id: OptionId) -> Result<&mut MenuOption<F>, MenuError> {
        self.options
            .iter_mut()
            .find(|option| option.id() == id)
            .ok_or(MenuError::UnknownOption(id))
    }

    /// All options in layout order.
    pub fn options(&self) -> &[MenuOption<F>] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the menu has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Center the options are laid out around.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Viewport captured at construction.
    pub fn viewport(&self) -> Size {
        self.ctx.viewport()
    }

    /// Layout and bindings.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }
}

impl<F: ContentFactory> fmt::Debug for Menu<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("options", &self.options)
            .field("index", &self.index)
            .field("center", &self.center)
            .field("config", &self.config)
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

impl<F: ContentFactory> fmt::Display for Menu<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "menu at {} with {} options, index at {}",
            self.center,
            self.options.len(),
            self.index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        input::{EventQueue, Key, RawEvent},
        keys::{ARROWS, HIT},
        surface::Image,
    };

    #[derive(Debug, Clone, PartialEq)]
    struct Block(Size);

    impl Image for Block {
        type Pixel = u8;

        fn size(&self) -> Size {
            self.0
        }

        fn pixels(&self) -> &[u8] {
            &[]
        }
    }

    struct Blocks;

    impl ContentFactory for Blocks {
        type Font = ();
        type Color = ();
        type Image = Block;

        fn render_text(&self, _font: &(), text: &str, _color: ()) -> Block {
            Block(Size::new(10.0 * text.chars().count() as f32, 20.0))
        }
    }

    struct Sink(Vec<Point>);

    impl RenderSurface<Block> for Sink {
        fn draw(&mut self, _image: &Block, position: Point) {
            self.0.push(position);
        }
    }

    fn keys() -> KeyState<EventQueue> {
        KeyState::new(EventQueue::new(), ARROWS.into_iter().chain(HIT))
    }

    fn press(keys: &mut KeyState<EventQueue>, key: Key) {
        keys.source_mut().extend([RawEvent::down(key), RawEvent::up(key)]);
        keys.update();
    }

    fn menu(count: usize) -> Menu<Blocks> {
        let mut menu = Menu::new(MenuConfig::vertical(40.0), &Size::new(500.0, 500.0));
        for _ in 0..count {
            menu.add_option(OptionSpec::plain(Block(Size::new(20.0, 20.0))), false);
        }
        menu
    }

    #[test]
    fn center_applies_start_and_offset() {
        let config = MenuConfig::default()
            .with_start(Point::new(25.0, 50.0))
            .with_offset(Offset::pixels(10.0, -5.0));
        let menu: Menu<Blocks> = Menu::new(config, &Size::new(400.0, 200.0));
        assert_eq!(menu.center(), Point::new(110.0, 95.0));
    }

    #[test]
    fn arrange_selects_flagged_option() {
        let mut menu = menu(2);
        let third = menu.add_option(OptionSpec::plain(Block(Size::new(20.0, 20.0))), true);

        let events = menu.arrange().expect("arrange");

        assert_eq!(menu.index(), 2);
        assert_eq!(events, vec![MenuEvent::new(third, MenuEventKind::SelectGained)]);
    }

    #[test]
    fn next_wraps_and_reports_events() {
        let mut menu = menu(2);
        menu.arrange().expect("arrange");
        let mut keys = keys();

        press(&mut keys, Key::Down);
        let events = menu.update(&mut keys).expect("update");
        assert_eq!(menu.index(), 1);
        assert_eq!(
            events.iter().map(|e| e.kind).collect::<Vec<_>>(),
            vec![MenuEventKind::SelectLost, MenuEventKind::SelectGained]
        );

        keys.update();
        press(&mut keys, Key::Down);
        menu.update(&mut keys).expect("update");
        assert_eq!(menu.index(), 0);
    }

    #[test]
    fn prev_wins_over_next_in_same_frame() {
        let mut menu = menu(3);
        menu.arrange().expect("arrange");
        let mut keys = keys();

        keys.source_mut().extend([RawEvent::down(Key::Down), RawEvent::down(Key::Up)]);
        keys.update();
        menu.update(&mut keys).expect("update");

        assert_eq!(menu.index(), 2);
    }

    #[test]
    fn labels_are_skipped() {
        let mut menu = menu(1);
        menu.add_option(OptionSpec::label(&Blocks, crate::TextContent::new((), "title", ())), false);
        menu.add_option(OptionSpec::plain(Block(Size::new(20.0, 20.0))), false);
        menu.arrange().expect("arrange");
        let mut keys = keys();

        press(&mut keys, Key::Down);
        menu.update(&mut keys).expect("update");

        assert_eq!(menu.index(), 2);
    }

    #[test]
    fn lock_blocks_navigation_and_activation() {
        let mut menu = menu(3);
        menu.arrange().expect("arrange");
        menu.lock();
        let mut keys = keys();

        press(&mut keys, Key::Down);
        assert!(menu.update(&mut keys).expect("update").is_empty());
        press(&mut keys, Key::Enter);
        assert!(menu.update(&mut keys).expect("update").is_empty());

        assert_eq!(menu.index(), 0);
    }

    #[test]
    fn empty_menu_is_inert() {
        let mut menu = menu(0);
        let mut keys = keys();
        let mut sink = Sink(Vec::new());

        assert!(menu.arrange().expect("arrange").is_empty());
        press(&mut keys, Key::Down);
        assert!(menu.frame(&mut keys, &mut sink, &Blocks).expect("frame").is_empty());
        assert!(sink.0.is_empty());
        assert!(menu.current().is_none());
    }

    #[test]
    fn unknown_option_is_an_error() {
        let mut other = menu(3);
        let id = other.add_option(OptionSpec::plain(Block(Size::new(1.0, 1.0))), false);
        let menu = menu(1);

        assert_eq!(menu.option(id).unwrap_err(), MenuError::UnknownOption(id));
    }

    #[test]
    fn display_summarizes_state() {
        let mut menu = menu(4);
        menu.arrange().expect("arrange");
        assert_eq!(menu.to_string(), "menu at (250, 250) with 4 options, index at 0");
    }
}
