//! Wizard screen controller.
//!
//! Drives a [`StepController`] from key events: text fields take typed
//! characters, the choice field takes Left/Right/Space, and Enter/Esc move
//! between steps. Everything drawn comes from [`StepController::view`].

use crate::components::{Footer, Header};
use crate::form::{Advance, Field, FieldKind, FieldView, StepController, StepView, Submitter};
use crate::keymap::{Action, Keymap};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{centered_column, create_standard_layout, typed_char, TextInput};
use crate::widgets::{
    ChoiceWidget, StepIndicator, TextInputWidget, TextInputWidgetExt, ToastKind,
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use std::collections::BTreeMap;
use tracing::{debug, error};

const TEXT_FIELD_HEIGHT: u16 = 3;
const CHOICE_FIELD_HEIGHT: u16 = 5;
const COLUMN_WIDTH: u16 = 72;

pub struct WizardScreen {
    controller: StepController,
    submitter: Box<dyn Submitter>,
    /// Index into the current step's fields
    focus: usize,
    /// Editing state for every text field, mirrored into the controller
    inputs: BTreeMap<Field, TextInput>,
    /// Option under the highlight on the choice field
    choice_highlight: usize,
}

impl WizardScreen {
    pub fn new(submitter: Box<dyn Submitter>) -> Self {
        Self::with_controller(StepController::new(), submitter)
    }

    pub fn with_controller(controller: StepController, submitter: Box<dyn Submitter>) -> Self {
        let inputs = Field::ALL
            .iter()
            .filter(|&&field| Self::kind_in(&controller, field) == FieldKind::Text)
            .map(|&field| (field, TextInput::with_text(controller.values().get(field))))
            .collect();
        let mut screen = Self {
            controller,
            submitter,
            focus: 0,
            inputs,
            choice_highlight: 0,
        };
        screen.reset_focus();
        screen
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    fn kind_in(controller: &StepController, field: Field) -> FieldKind {
        controller
            .schema()
            .spec(field)
            .map_or(FieldKind::Text, |spec| spec.kind)
    }

    /// Field that currently has keyboard focus.
    pub fn focused_field(&self) -> Option<Field> {
        self.controller.current().fields().get(self.focus).copied()
    }

    fn focused_kind(&self) -> Option<FieldKind> {
        self.focused_field()
            .map(|field| Self::kind_in(&self.controller, field))
    }

    /// Back to the first field of the step, with the choice highlight on the
    /// selected option (if any).
    fn reset_focus(&mut self) {
        self.focus = 0;
        self.sync_choice_highlight();
    }

    fn sync_choice_highlight(&mut self) {
        for &field in self.controller.current().fields() {
            if let FieldKind::Choice(options) = Self::kind_in(&self.controller, field) {
                let value = self.controller.values().get(field);
                self.choice_highlight = options.iter().position(|o| o.value == value).unwrap_or(0);
            }
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.controller.current().fields().len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn advance(&mut self) -> ScreenAction {
        match self.controller.advance(self.submitter.as_mut()) {
            Ok(Advance::Moved { .. }) => {
                self.reset_focus();
                ScreenAction::None
            }
            Ok(Advance::Rejected(errors)) => {
                // jump to the first offending field
                if let Some(first) = errors.first() {
                    let fields = self.controller.current().fields();
                    if let Some(index) = fields.iter().position(|f| *f == first.field) {
                        self.focus = index;
                    }
                }
                ScreenAction::None
            }
            Ok(Advance::Submitted) => ScreenAction::notify(ToastKind::Success, "Form submitted"),
            Err(e) => {
                error!(error = %format!("{:#}", e), "Submission failed");
                ScreenAction::notify(ToastKind::Error, format!("Submission failed: {}", e))
            }
        }
    }

    fn retreat(&mut self) {
        if self.controller.retreat() {
            self.reset_focus();
        }
    }

    fn handle_text_key(&mut self, field: Field, key: &KeyEvent, action: Option<Action>) -> bool {
        let Some(input) = self.inputs.get_mut(&field) else {
            return false;
        };
        let handled = if let Some(c) = typed_char(key.code, key.modifiers) {
            input.insert_char(c);
            true
        } else {
            action.is_some_and(|a| input.handle_action(a))
        };
        if handled {
            let text = input.text().to_string();
            self.controller.set_value(field, text);
        }
        handled
    }

    fn handle_choice_action(&mut self, field: Field, action: Action) -> bool {
        let FieldKind::Choice(options) = Self::kind_in(&self.controller, field) else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        match action {
            Action::MoveLeft => {
                self.choice_highlight = self.choice_highlight.saturating_sub(1);
            }
            Action::MoveRight => {
                self.choice_highlight = (self.choice_highlight + 1).min(options.len() - 1);
            }
            Action::ToggleSelect => {
                let option = options[self.choice_highlight.min(options.len() - 1)];
                // selecting the chosen option again clears the choice
                let value = if self.controller.values().get(field) == option.value {
                    ""
                } else {
                    option.value
                };
                self.controller.set_value(field, value);
            }
            _ => return false,
        }
        true
    }

    /// Handle one key press against `keymap`.
    pub fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> ScreenAction {
        let action = keymap.get_action(key.code, key.modifiers);
        let focused = self.focused_field();

        if let Some(field) = focused {
            let consumed = match self.focused_kind() {
                Some(FieldKind::Text) => self.handle_text_key(field, &key, action),
                Some(FieldKind::Choice(_)) => {
                    action.is_some_and(|a| self.handle_choice_action(field, a))
                }
                None => false,
            };
            if consumed {
                return ScreenAction::None;
            }
        }

        let Some(action) = action else {
            return ScreenAction::None;
        };
        debug!(?action, step = self.controller.current().index(), "Wizard action");
        match action {
            Action::Confirm => self.advance(),
            Action::Cancel => {
                self.retreat();
                ScreenAction::None
            }
            Action::NextTab | Action::MoveDown => {
                self.move_focus(true);
                ScreenAction::None
            }
            Action::PrevTab | Action::MoveUp => {
                self.move_focus(false);
                ScreenAction::None
            }
            Action::Help => ScreenAction::ShowHelp,
            Action::Quit => ScreenAction::Quit,
            _ => ScreenAction::None,
        }
    }

    fn body_constraints(view: &StepView) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        if let Some(intro) = &view.intro {
            let body_lines = intro.body.lines().count() as u16;
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(body_lines + 1));
        }
        for field in &view.fields {
            let height = match field.kind {
                FieldKind::Text => TEXT_FIELD_HEIGHT,
                FieldKind::Choice(_) => CHOICE_FIELD_HEIGHT,
            };
            constraints.push(Constraint::Length(height));
            constraints.push(Constraint::Length(1)); // error line
        }
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1)); // buttons
        constraints.push(Constraint::Length(1)); // spacer
        constraints.push(Constraint::Length(1)); // step indicator
        constraints
    }

    /// The button row: `Back` only past the first step, then the primary
    /// button.
    pub(crate) fn button_line(view: &StepView) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        if view.can_retreat {
            spans.push(Span::styled("[ Back ]", t.muted_style()));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[ {} ]", view.primary_label),
            t.title_style().add_modifier(Modifier::REVERSED),
        ));
        Line::from(spans).alignment(Alignment::Right)
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: &FieldView, focused: bool) {
        let invalid = field.error.is_some();
        match field.kind {
            FieldKind::Text => {
                let Some(input) = self.inputs.get(&field.field) else {
                    return;
                };
                let mut widget = TextInputWidget::new(input)
                    .title(&field.label)
                    .focused(focused)
                    .invalid(invalid);
                if let Some(placeholder) = &field.placeholder {
                    widget = widget.placeholder(placeholder);
                }
                frame.render_text_input_widget(widget, area);
            }
            FieldKind::Choice(options) => {
                let widget = ChoiceWidget::new(options, &field.value)
                    .title(&field.label)
                    .highlighted(self.choice_highlight)
                    .focused(focused)
                    .invalid(invalid);
                frame.render_widget(widget, area);
            }
        }
    }
}

impl Screen for WizardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let view = self.controller.view();
        let [header_area, body_area, footer_area] = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_area,
            "Slider",
            &format!("Step {} of {}", view.index, view.total),
        )?;
        Footer::render(
            frame,
            footer_area,
            &ctx.config.keymap.footer_wizard(view.can_retreat, view.primary_label),
        )?;

        let column = centered_column(body_area, COLUMN_WIDTH);
        let rows = Layout::vertical(Self::body_constraints(&view))
            .margin(1)
            .split(column);
        let mut rows = rows.iter().copied();

        if let Some(intro) = &view.intro {
            if let (Some(heading_area), Some(body_area)) = (rows.next(), rows.next()) {
                frame.render_widget(Paragraph::new(intro.heading).style(t.title_style()), heading_area);
                frame.render_widget(
                    Paragraph::new(intro.body)
                        .style(t.text_style())
                        .wrap(Wrap { trim: true }),
                    body_area,
                );
            }
        }

        for (index, field) in view.fields.iter().enumerate() {
            let (Some(field_area), Some(error_area)) = (rows.next(), rows.next()) else {
                break;
            };
            self.render_field(frame, field_area, field, index == self.focus);
            if let Some(message) = &field.error {
                frame.render_widget(
                    Paragraph::new(format!(" {}", message)).style(t.error_style()),
                    error_area,
                );
            }
        }

        let _spacer = rows.next();
        if let Some(buttons_area) = rows.next() {
            frame.render_widget(Paragraph::new(Self::button_line(&view)), buttons_area);
        }
        let _gap = rows.next();
        if let Some(indicator_area) = rows.next() {
            frame.render_widget(StepIndicator::new(view.index, view.total), indicator_area);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.handle_key(key, &ctx.config.keymap))
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.focused_kind() == Some(FieldKind::Text)
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        debug!(step = self.controller.current().index(), "Wizard shown");
        Ok(())
    }
}
