//! The static-field editing session

use crate::error::SessionError;
use crate::presenter::{NullPresenter, Presenter};
use mathfield_core::{
    command_to_latex, compose_static_latex, parse_static_latex, CommandInput, StaticToken,
};
use tracing::debug;

/// Callback invoked with `(field id, new value)` after every mutation.
pub type ChangeCallback = Box<dyn Fn(&str, &str) + Send + Sync>;

/// A keystroke routed into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// Remove the last character of the field value.
    Backspace,
}

/// Builder wiring a presenter and change callback onto a session.
pub struct StaticSessionBuilder {
    raw: String,
    presenter: Box<dyn Presenter>,
    on_change: Option<ChangeCallback>,
}

impl StaticSessionBuilder {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            presenter: Box::new(NullPresenter),
            on_change: None,
        }
    }

    /// Attach the presentation surface the session renders through.
    pub fn presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    /// Attach the observer notified after every field mutation.
    pub fn on_change(mut self, callback: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Parse the raw LaTeX and render the initial presentation.
    pub fn build(mut self) -> StaticSession {
        let tokens = parse_static_latex(&self.raw);
        debug!(tokens = tokens.len(), "static session created");
        self.presenter.render(&tokens);
        StaticSession {
            tokens,
            presenter: self.presenter,
            on_change: self.on_change,
        }
    }
}

/// A mutable editing session over a tokenized static math expression.
pub struct StaticSession {
    tokens: Vec<StaticToken>,
    presenter: Box<dyn Presenter>,
    on_change: Option<ChangeCallback>,
}

impl StaticSession {
    /// Parse `raw` into a headless session (no presenter, no callback).
    pub fn parse(raw: &str) -> Self {
        Self::builder(raw).build()
    }

    /// Start building a session from raw LaTeX.
    pub fn builder(raw: &str) -> StaticSessionBuilder {
        StaticSessionBuilder::new(raw)
    }

    /// The current token list, in document order.
    pub fn tokens(&self) -> &[StaticToken] {
        &self.tokens
    }

    /// The full LaTeX for the current state.
    pub fn latex(&self) -> String {
        compose_static_latex(&self.tokens)
    }

    /// Ids of all fields, in document order.
    pub fn field_ids(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(StaticToken::field_id)
            .collect()
    }

    /// The current value of a field, if it exists.
    pub fn field_value(&self, id: &str) -> Option<&str> {
        self.tokens.iter().find_map(|token| match token {
            StaticToken::Field { id: fid, value } if fid == id => Some(value.as_str()),
            _ => None,
        })
    }

    /// A handle for mutating one field, or `None` for an unknown id.
    pub fn field(&mut self, id: &str) -> Option<FieldSlot<'_>> {
        let index = self
            .tokens
            .iter()
            .position(|token| token.field_id() == Some(id))?;
        Some(FieldSlot {
            session: self,
            index,
        })
    }

    /// Strict variant of [`StaticSession::field`].
    pub fn try_field(&mut self, id: &str) -> Result<FieldSlot<'_>, SessionError> {
        match self
            .tokens
            .iter()
            .position(|token| token.field_id() == Some(id))
        {
            Some(index) => Ok(FieldSlot {
                session: self,
                index,
            }),
            None => Err(SessionError::unknown_field(id)),
        }
    }

    /// Apply a closure to a field value, then rebuild the presentation,
    /// then notify the observer. The token list is authoritative and is
    /// updated before either side effect.
    fn mutate(&mut self, index: usize, apply: impl FnOnce(&mut String)) {
        let (id, value) = {
            let Some(StaticToken::Field { id, value }) = self.tokens.get_mut(index) else {
                return;
            };
            apply(value);
            (id.clone(), value.clone())
        };

        self.presenter.render(&self.tokens);
        if let Some(callback) = &self.on_change {
            callback(&id, &value);
        }
    }
}

/// A handle for editing a single field inside a [`StaticSession`].
pub struct FieldSlot<'a> {
    session: &'a mut StaticSession,
    index: usize,
}

impl FieldSlot<'_> {
    /// The id of this field.
    pub fn id(&self) -> &str {
        self.session.tokens[self.index]
            .field_id()
            .unwrap_or_default()
    }

    /// The current LaTeX value of this field.
    pub fn latex(&self) -> &str {
        match &self.session.tokens[self.index] {
            StaticToken::Field { value, .. } => value,
            StaticToken::Text { .. } => "",
        }
    }

    /// Append raw text to the field value.
    pub fn write(&mut self, text: &str) {
        self.session.mutate(self.index, |value| value.push_str(text));
    }

    /// Append the LaTeX of a structured command to the field value.
    pub fn command(&mut self, command: &CommandInput) {
        let latex = command_to_latex(command);
        self.session.mutate(self.index, |value| value.push_str(&latex));
    }

    /// Route a keystroke into the field. Backspace removes the last
    /// character, staying on a char boundary.
    pub fn keystroke(&mut self, key: Keystroke) {
        match key {
            Keystroke::Backspace => self.session.mutate(self.index, |value| {
                value.pop();
            }),
        }
    }

    /// Reset the field value to empty.
    pub fn clear(&mut self) {
        self.session.mutate(self.index, String::clear);
    }
}
