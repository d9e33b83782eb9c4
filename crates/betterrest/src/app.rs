//! The BetterRest screen: three inputs, a Calculate action, and the result.
//!
//! One model serves all three [`Variant`]s. They share input handling and
//! the estimator call and differ only in layout and in how the result is
//! shown.

use clap::ValueEnum;
use rest_core::event::{Event, KeyCode, KeyEvent};
use rest_core::geometry::{Rect, Sides};
use rest_estimator::{BedtimeEstimator, ClockStyle, EstimateInputs, ResultState};
use rest_layout::{Constraint, Flex};
use rest_render::frame::Frame;
use rest_runtime::{Cmd, Model};
use rest_widgets::alert::{Alert, AlertState};
use rest_widgets::block::{Alignment, Block};
use rest_widgets::borders::BorderType;
use rest_widgets::button::Button;
use rest_widgets::capsule::capsule;
use rest_widgets::paragraph::Paragraph;
use rest_widgets::stepper::Stepper;
use rest_widgets::time_picker::{TimePicker, TimeSegment};
use rest_widgets::{Widget, clear_area, draw_text_span, text_width};

use crate::config::AppConfig;
use crate::theme;

pub const APP_TITLE: &str = "BetterRest";
pub const CALCULATE_LABEL: &str = "Calculate";
pub const WAKE_HEADING: &str = "When do you want to wake up?";
pub const SLEEP_HEADING: &str = "Desired amount of sleep";
pub const COFFEE_HEADING: &str = "Daily coffee intake";

const FORM_WIDTH: u16 = 48;
const PAGE_MINUTES: i64 = 15;

/// Layout and result presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, ValueEnum)]
pub enum Variant {
    /// Stacked headings, Calculate in the title bar, result in an alert.
    Toolbar,
    /// Capsule-headed sections, Calculate in the title bar, result in an alert.
    #[default]
    Sections,
    /// Capsule-headed sections, result label recomputed on every change.
    Live,
}

impl Variant {
    pub const fn uses_alert(self) -> bool {
        !matches!(self, Self::Live)
    }
}

/// Which control receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Focus {
    #[default]
    WakeUp,
    Sleep,
    Coffee,
    Calculate,
}

impl Focus {
    const WITH_BUTTON: [Focus; 4] = [Self::WakeUp, Self::Sleep, Self::Coffee, Self::Calculate];
    const INPUTS_ONLY: [Focus; 3] = [Self::WakeUp, Self::Sleep, Self::Coffee];

    fn cycle(variant: Variant) -> &'static [Focus] {
        if variant.uses_alert() {
            &Self::WITH_BUTTON
        } else {
            &Self::INPUTS_ONLY
        }
    }

    pub fn next(self, variant: Variant) -> Self {
        let order = Self::cycle(variant);
        let i = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(i + 1) % order.len()]
    }

    pub fn prev(self, variant: Variant) -> Self {
        let order = Self::cycle(variant);
        let i = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(i + order.len() - 1) % order.len()]
    }
}

#[derive(Debug)]
pub enum Msg {
    Event(Event),
    /// Run the estimator and, in alert variants, show the outcome.
    Calculate,
    /// One of the three inputs changed.
    InputChanged,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

pub struct BetterRest {
    variant: Variant,
    clock: ClockStyle,
    inputs: EstimateInputs,
    segment: TimeSegment,
    focus: Focus,
    result: ResultState,
    alert: AlertState,
    estimator: BedtimeEstimator,
}

impl BetterRest {
    pub fn new(
        variant: Variant,
        clock: ClockStyle,
        inputs: EstimateInputs,
        estimator: BedtimeEstimator,
    ) -> Self {
        Self {
            variant,
            clock,
            inputs,
            segment: TimeSegment::Hour,
            focus: Focus::WakeUp,
            result: ResultState::NotComputed,
            alert: AlertState::default(),
            estimator,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.variant,
            config.clock,
            config.inputs,
            BedtimeEstimator::from_config(config.model.clone()),
        )
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn inputs(&self) -> &EstimateInputs {
        &self.inputs
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn segment(&self) -> TimeSegment {
        self.segment
    }

    pub fn is_alert_open(&self) -> bool {
        self.alert.is_open()
    }

    fn recompute(&mut self) -> Cmd<Msg> {
        self.result = self.estimator.estimate(&self.inputs);
        Cmd::log(format!(
            "{} {}",
            self.result.title(),
            self.result.message(self.clock)
        ))
    }

    fn calculate(&mut self) -> Cmd<Msg> {
        let cmd = self.recompute();
        if self.variant.uses_alert() {
            self.alert.open();
        }
        cmd
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if !key.is_press() {
            return Cmd::none();
        }
        if key.ctrl() && key.is_char('c') {
            return Cmd::quit();
        }
        if self.alert.handle_event(&Event::Key(key)).is_some() {
            return Cmd::none();
        }

        match key.code {
            KeyCode::Char('q') => Cmd::quit(),
            KeyCode::Tab if key.shift() => self.move_focus(false),
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Char('c') if self.variant.uses_alert() => Cmd::msg(Msg::Calculate),
            KeyCode::Enter if self.focus == Focus::Calculate => Cmd::msg(Msg::Calculate),
            code => self.adjust(code),
        }
    }

    fn move_focus(&mut self, forward: bool) -> Cmd<Msg> {
        self.focus = if forward {
            self.focus.next(self.variant)
        } else {
            self.focus.prev(self.variant)
        };
        Cmd::none()
    }

    /// Apply an editing key to the focused control.
    fn adjust(&mut self, code: KeyCode) -> Cmd<Msg> {
        let before = self.inputs;
        let up = matches!(code, KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('='));
        let down = matches!(code, KeyCode::Down | KeyCode::Char('-'));

        match self.focus {
            Focus::WakeUp => {
                let wake = self.inputs.wake_up;
                let delta = match code {
                    KeyCode::Left | KeyCode::Right => {
                        self.segment = self.segment.toggled();
                        return Cmd::none();
                    }
                    KeyCode::PageUp => Some(PAGE_MINUTES),
                    KeyCode::PageDown => Some(-PAGE_MINUTES),
                    _ if up => Some(self.segment_step()),
                    _ if down => Some(-self.segment_step()),
                    _ => None,
                };
                if let Some(minutes) = delta {
                    self.inputs.wake_up = wake.add_minutes(minutes);
                }
            }
            Focus::Sleep if up => self.inputs.sleep = self.inputs.sleep.step_up(),
            Focus::Sleep if down => self.inputs.sleep = self.inputs.sleep.step_down(),
            Focus::Coffee if up => self.inputs.coffee = self.inputs.coffee.step_up(),
            Focus::Coffee if down => self.inputs.coffee = self.inputs.coffee.step_down(),
            _ => {}
        }

        if self.inputs == before {
            Cmd::none()
        } else {
            Cmd::msg(Msg::InputChanged)
        }
    }

    fn segment_step(&self) -> i64 {
        match self.segment {
            TimeSegment::Hour => 60,
            TimeSegment::Minute => 1,
        }
    }
}

impl Model for BetterRest {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        if self.variant.uses_alert() {
            Cmd::none()
        } else {
            self.recompute()
        }
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Event(Event::Key(key)) => self.handle_key(key),
            Msg::Event(_) => Cmd::none(),
            Msg::Calculate => self.calculate(),
            Msg::InputChanged if self.variant == Variant::Live => self.recompute(),
            Msg::InputChanged => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.bounds();
        if area.is_empty() {
            return;
        }
        clear_area(&mut frame.buffer, area, theme::background());

        let rows = Flex::vertical()
            .constraints([Constraint::Fixed(1), Constraint::Min(0), Constraint::Fixed(1)])
            .split(area);
        self.render_title_bar(rows[0], frame);

        let body = rows[1]
            .inner(Sides {
                top: 1,
                right: 1,
                bottom: 0,
                left: 1,
            })
            .centered_horizontally(FORM_WIDTH);
        match self.variant {
            Variant::Toolbar => self.render_stacked(body, frame),
            Variant::Sections | Variant::Live => self.render_sections(body, frame),
        }

        self.render_hints(rows[2], frame);

        if self.alert.is_open() {
            let message = self.result.message(self.clock);
            Alert::new(self.result.title(), &message)
                .style(theme::alert())
                .border_style(theme::alert_border())
                .render(area, frame);
        }
    }
}

/// Where the title starts so that it ends with a gap before `limit`.
///
/// Centered when there is room, flush left when centering would collide
/// with the button, and hidden when even that does not fit.
fn title_x(row: Rect, limit: u16) -> Option<u16> {
    let width = text_width(APP_TITLE);
    let centered = Alignment::Center.x_in(row, width);
    let left = row.x.saturating_add(1);
    [centered, left]
        .into_iter()
        .find(|&x| x.saturating_add(width) < limit)
}

impl BetterRest {
    fn render_title_bar(&self, row: Rect, frame: &mut Frame) {
        clear_area(&mut frame.buffer, row, theme::title_bar());
        let button = self.variant.uses_alert().then(|| {
            Button::new(CALCULATE_LABEL)
                .focused(self.focus == Focus::Calculate)
                .style(theme::button())
                .alignment(Alignment::Right)
        });
        // The button keeps one cell of padding on the right.
        let limit = match &button {
            Some(button) => row.right().saturating_sub(button.width().saturating_add(1)),
            None => row.right(),
        };

        if let Some(x) = title_x(row, limit) {
            draw_text_span(&mut frame.buffer, x, row.y, APP_TITLE, theme::title(), limit);
        }
        if let Some(button) = button {
            button.render(row.inner(Sides::horizontal(1)), frame);
        }
    }

    /// Plain headings above each control.
    fn render_stacked(&self, body: Rect, frame: &mut Frame) {
        let slots = Flex::vertical()
            .gap(1)
            .constraints([Constraint::Fixed(2); 3])
            .split(body);
        let controls = [
            (WAKE_HEADING, Focus::WakeUp),
            (SLEEP_HEADING, Focus::Sleep),
            (COFFEE_HEADING, Focus::Coffee),
        ];
        for (slot, (heading, control)) in slots.into_iter().zip(controls) {
            if slot.is_empty() {
                continue;
            }
            draw_text_span(&mut frame.buffer, slot.x, slot.y, heading, theme::heading(), slot.right());
            self.render_control(control, slot.row(1), frame);
        }
    }

    /// Capsule headings over bordered sections, plus the live result.
    fn render_sections(&self, body: Rect, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Fixed(4); 3];
        if self.variant == Variant::Live {
            constraints.push(Constraint::Fixed(3));
        }
        let slots = Flex::vertical().gap(1).constraints(constraints).split(body);
        let controls = [
            (WAKE_HEADING, Focus::WakeUp),
            (SLEEP_HEADING, Focus::Sleep),
            (COFFEE_HEADING, Focus::Coffee),
        ];
        for (slot, (heading, control)) in slots.iter().zip(controls) {
            if slot.is_empty() {
                continue;
            }
            capsule(heading)
                .tint(theme::accent::CAPSULE)
                .text_style(theme::capsule_text())
                .render(slot.row(0), frame);

            let section = Rect::new(slot.x, slot.y + 1, slot.width, slot.height.saturating_sub(1));
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme::section_border())
                .style(theme::section());
            block.render(section, frame);
            self.render_control(control, block.inner(section), frame);
        }

        if let Some(slot) = slots.get(3) {
            self.render_live_result(*slot, frame);
        }
    }

    fn render_live_result(&self, slot: Rect, frame: &mut Frame) {
        if slot.is_empty() {
            return;
        }
        let (label_style, value_style) = match self.result {
            ResultState::Failed(_) => (theme::error_text(), theme::error_text()),
            _ => (theme::result_label(), theme::result_time()),
        };
        let title = self.result.title();
        let x = Alignment::Center.x_in(slot, text_width(title));
        draw_text_span(&mut frame.buffer, x, slot.y, title, label_style, slot.right());

        let message = self.result.message(self.clock);
        let rest = Rect::new(slot.x, slot.y + 1, slot.width, slot.height.saturating_sub(1));
        Paragraph::new(&message)
            .wrap(true)
            .alignment(Alignment::Center)
            .style(value_style)
            .render(rest, frame);
    }

    fn render_control(&self, control: Focus, area: Rect, frame: &mut Frame) {
        let focused = self.focus == control;
        match control {
            Focus::WakeUp => {
                let (hour, minute, suffix) = self.inputs.wake_up.segments(self.clock);
                TimePicker::new(&hour, &minute)
                    .suffix(suffix)
                    .selected(self.segment)
                    .focused(focused)
                    .style(theme::control())
                    .render(area, frame);
            }
            Focus::Sleep => {
                let sleep = self.inputs.sleep;
                let label = sleep.to_string();
                Stepper::new(&label)
                    .focused(focused)
                    .bounds(sleep.is_min(), sleep.is_max())
                    .style(theme::control())
                    .render(area, frame);
            }
            Focus::Coffee => {
                let coffee = self.inputs.coffee;
                let label = coffee.label();
                Stepper::new(&label)
                    .focused(focused)
                    .bounds(coffee.is_min(), coffee.is_max())
                    .style(theme::control())
                    .render(area, frame);
            }
            Focus::Calculate => {}
        }
    }

    fn render_hints(&self, row: Rect, frame: &mut Frame) {
        let hints = if self.variant.uses_alert() {
            " Tab focus  ↑↓ adjust  ←→ hour/minute  c calculate  q quit"
        } else {
            " Tab focus  ↑↓ adjust  ←→ hour/minute  q quit"
        };
        clear_area(&mut frame.buffer, row, theme::hints());
        Paragraph::new(hints).style(theme::hints()).render(row, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rest_estimator::{ModelError, ModelProvider, SleepFeatures, SleepRegressor, TimeOfDay};
    use rest_core::event::Modifiers;
    use std::sync::Arc;

    /// Predicts half an hour less than the sleep goal.
    #[derive(Debug)]
    struct HalfHourShort;

    impl SleepRegressor for HalfHourShort {
        fn predict(&self, features: &SleepFeatures) -> rest_estimator::Result<f64> {
            Ok(features.estimated_sleep - 0.5)
        }
    }

    #[derive(Debug)]
    struct Stub;

    impl ModelProvider for Stub {
        fn load(&self) -> rest_estimator::Result<Arc<dyn SleepRegressor>> {
            Ok(Arc::new(HalfHourShort))
        }
    }

    #[derive(Debug)]
    struct Missing;

    impl ModelProvider for Missing {
        fn load(&self) -> rest_estimator::Result<Arc<dyn SleepRegressor>> {
            Err(ModelError::invalid("no model"))
        }
    }

    fn app(variant: Variant) -> BetterRest {
        BetterRest::new(
            variant,
            ClockStyle::TwentyFourHour,
            EstimateInputs::default(),
            BedtimeEstimator::new(Stub),
        )
    }

    fn press(app: &mut BetterRest, event: Event) {
        let mut cmd = app.update(Msg::from(event));
        while let Cmd::Msg(msg) = cmd {
            cmd = app.update(msg);
        }
    }

    #[test]
    fn focus_cycles_include_button_only_with_alert() {
        assert_eq!(Focus::Coffee.next(Variant::Toolbar), Focus::Calculate);
        assert_eq!(Focus::Calculate.next(Variant::Toolbar), Focus::WakeUp);
        assert_eq!(Focus::Coffee.next(Variant::Live), Focus::WakeUp);
        assert_eq!(Focus::WakeUp.prev(Variant::Live), Focus::Coffee);
        assert_eq!(Focus::WakeUp.prev(Variant::Sections), Focus::Calculate);
    }

    #[test]
    fn calculate_opens_alert_with_result() {
        let mut app = app(Variant::Toolbar);
        assert!(app.init().is_none());
        press(&mut app, Event::char('c'));
        assert!(app.is_alert_open());
        assert_eq!(app.result().message(ClockStyle::TwentyFourHour), "23:30");
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = app(Variant::Sections);
        press(&mut app, Event::char('c'));
        assert!(matches!(app.update(Msg::from(Event::char('q'))), Cmd::None));
        press(&mut app, Event::key(KeyCode::Up));
        assert_eq!(app.inputs().wake_up, TimeOfDay::default());
        press(&mut app, Event::key(KeyCode::Enter));
        assert!(!app.is_alert_open());
    }

    #[test]
    fn ctrl_c_quits_even_with_alert_open() {
        let mut app = app(Variant::Toolbar);
        press(&mut app, Event::char('c'));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL));
        assert!(matches!(app.update(Msg::from(ctrl_c)), Cmd::Quit));
    }

    #[test]
    fn picker_segments_and_paging() {
        let mut app = app(Variant::Toolbar);
        press(&mut app, Event::key(KeyCode::Up));
        assert_eq!(app.inputs().wake_up, TimeOfDay::new(8, 0).expect("valid"));
        press(&mut app, Event::key(KeyCode::Right));
        assert_eq!(app.segment(), TimeSegment::Minute);
        press(&mut app, Event::char('-'));
        assert_eq!(app.inputs().wake_up, TimeOfDay::new(7, 59).expect("valid"));
        press(&mut app, Event::key(KeyCode::PageUp));
        assert_eq!(app.inputs().wake_up, TimeOfDay::new(8, 14).expect("valid"));
    }

    #[test]
    fn enter_on_button_calculates() {
        let mut app = app(Variant::Toolbar);
        press(&mut app, Event::key(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Calculate);
        press(&mut app, Event::key(KeyCode::Enter));
        assert!(app.is_alert_open());
    }

    #[test]
    fn live_computes_at_start_and_on_change() {
        let mut app = app(Variant::Live);
        assert!(matches!(app.init(), Cmd::Log(_)));
        assert_eq!(app.result().message(ClockStyle::TwentyFourHour), "23:30");

        press(&mut app, Event::key(KeyCode::Tab));
        press(&mut app, Event::key(KeyCode::Up));
        assert_eq!(app.result().message(ClockStyle::TwentyFourHour), "23:15");
        press(&mut app, Event::char('c'));
        assert!(!app.is_alert_open());
    }

    #[test]
    fn failure_shows_error_alert() {
        let mut app = BetterRest::new(
            Variant::Toolbar,
            ClockStyle::TwentyFourHour,
            EstimateInputs::default(),
            BedtimeEstimator::new(Missing),
        );
        press(&mut app, Event::char('c'));
        assert_eq!(app.result().title(), "Error");

        let mut frame = Frame::new(60, 24);
        app.view(&mut frame);
        let text = frame.buffer.to_text();
        assert!(text.contains("Error"), "{text}");
        assert!(text.contains("Sorry,"), "{text}");
    }

    #[test]
    fn narrow_title_bar_keeps_title_clear_of_button() {
        let app = app(Variant::Toolbar);
        let mut frame = Frame::new(30, 12);
        app.view(&mut frame);
        let top = frame.buffer.row_text(0);
        assert!(top.contains("BetterRest"), "{top:?}");
        assert!(top.contains("[ Calculate ]"), "{top:?}");
        assert!(top.trim_start().starts_with("BetterRest"), "{top:?}");

        let mut frame = Frame::new(20, 6);
        app.view(&mut frame);
        let top = frame.buffer.row_text(0);
        assert!(top.contains("[ Calculate ]"), "{top:?}");
        assert!(!top.contains("Better"), "{top:?}");
    }

    #[test]
    fn wide_title_bar_centers_title() {
        let app = app(Variant::Live);
        let mut frame = Frame::new(40, 12);
        app.view(&mut frame);
        let top = frame.buffer.row_text(0);
        assert_eq!(top.find("BetterRest"), Some(15), "{top:?}");
    }

    #[test]
    fn tiny_frames_do_not_panic() {
        for variant in [Variant::Toolbar, Variant::Sections, Variant::Live] {
            let mut app = app(variant);
            let _ = app.init();
            press(&mut app, Event::char('c'));
            for (w, h) in [(0, 0), (1, 1), (5, 3), (20, 6), (80, 40)] {
                let mut frame = Frame::new(w, h);
                app.view(&mut frame);
            }
        }
    }
}
