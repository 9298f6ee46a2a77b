//! Presentation port
//!
//! The session owns the token list; turning tokens into something visible
//! is an external collaborator reached through [`Presenter`]. The session
//! calls [`Presenter::render`] with the full fresh token list after every
//! mutation, before any change callback fires.

use mathfield_core::StaticToken;

/// Port for a presentation surface: given a token list, produce (or
/// refresh) a presentation tree.
pub trait Presenter: Send {
    /// Rebuild the presentation from the current tokens.
    fn render(&mut self, tokens: &[StaticToken]);
}

/// Presenter that does nothing, for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _tokens: &[StaticToken]) {}
}
