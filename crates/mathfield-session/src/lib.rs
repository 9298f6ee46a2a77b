//! Stateful field-editing session
//!
//! Wraps a tokenized static math expression with a mutable runtime view:
//! per-field handles for writes, structured commands, keystrokes and
//! clears, plus a presentation port the session re-renders through after
//! every mutation.
//!
//! The ordering contract is the point of this crate: a mutation first
//! updates the authoritative token list, then rebuilds the presentation,
//! then fires the change callback — so the token list is never stale when
//! an observer looks at it.

pub mod error;
pub mod presenter;
pub mod session;

// Re-export main types for convenience
pub use error::SessionError;
pub use presenter::{NullPresenter, Presenter};
pub use session::{FieldSlot, Keystroke, StaticSession, StaticSessionBuilder};
