//! Session data-flow tests
//!
//! The contract under test: every mutation updates the token list, then
//! rebuilds the presentation, then fires the change callback — in that
//! order, with the token list already fresh at each step.

use mathfield_core::{CommandInput, MathCommand, MatrixKind, StaticToken};
use mathfield_session::{Keystroke, Presenter, StaticSession};
use std::sync::{Arc, Mutex};

/// Records every event the session emits, tagged so ordering is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Rendered { latex_of_r1: String },
    Changed { id: String, value: String },
}

#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut self.0.lock().unwrap())
    }
}

struct RecordingPresenter {
    log: EventLog,
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, tokens: &[StaticToken]) {
        let value = tokens
            .iter()
            .find_map(|token| match token {
                StaticToken::Field { id, value } if id == "r1" => Some(value.clone()),
                _ => None,
            })
            .unwrap_or_default();
        self.log.push(Event::Rendered { latex_of_r1: value });
    }
}

const ITEM: &str = r"x=\MathQuillMathField[r1]{2}";

fn session_with_log() -> (StaticSession, EventLog) {
    let log = EventLog::default();
    let session = StaticSession::builder(ITEM)
        .presenter(Box::new(RecordingPresenter { log: log.clone() }))
        .on_change({
            let log = log.clone();
            move |id, value| {
                log.push(Event::Changed {
                    id: id.to_string(),
                    value: value.to_string(),
                })
            }
        })
        .build();
    (session, log)
}

#[test]
fn build_renders_once_without_change_events() {
    let (_session, log) = session_with_log();
    assert_eq!(
        log.take(),
        vec![Event::Rendered {
            latex_of_r1: "2".to_string()
        }]
    );
}

#[test]
fn mutation_renders_fresh_tokens_before_notifying() {
    let (mut session, log) = session_with_log();
    log.take();

    session.field("r1").unwrap().write("+3");

    // The presenter saw the new value already applied, and saw it before
    // the observer did.
    assert_eq!(
        log.take(),
        vec![
            Event::Rendered {
                latex_of_r1: "2+3".to_string()
            },
            Event::Changed {
                id: "r1".to_string(),
                value: "2+3".to_string()
            },
        ]
    );
}

#[test]
fn every_mutation_kind_reports_through_the_callback() {
    let (mut session, log) = session_with_log();
    log.take();

    session.field("r1").unwrap().command(&CommandInput::from(
        MathCommand::Exponent {
            base: "x".to_string(),
            exponent: "2".to_string(),
        },
    ));
    session.field("r1").unwrap().keystroke(Keystroke::Backspace);
    session.field("r1").unwrap().clear();

    let changes: Vec<Event> = log
        .take()
        .into_iter()
        .filter(|event| matches!(event, Event::Changed { .. }))
        .collect();
    assert_eq!(
        changes,
        vec![
            Event::Changed {
                id: "r1".to_string(),
                value: "2x^{2}".to_string()
            },
            Event::Changed {
                id: "r1".to_string(),
                value: "2x^{2".to_string()
            },
            Event::Changed {
                id: "r1".to_string(),
                value: String::new()
            },
        ]
    );
}

#[test]
fn matrix_command_splices_serialized_environment() {
    let mut session = StaticSession::parse(r"\MathQuillMathField[r1]{}");
    session.field("r1").unwrap().command(&CommandInput::from(
        MathCommand::Matrix {
            kind: MatrixKind::Brackets,
            cells: vec![vec!["1".to_string(), "2".to_string()]],
        },
    ));
    assert_eq!(
        session.latex(),
        r"\MathQuillMathField[r1]{\begin{bmatrix}1&2\end{bmatrix}}"
    );
}
