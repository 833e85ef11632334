//! Ordering discipline tests: a builtin verb admits no second verb, no
//! trigger phrase anywhere on the line, and no subject before it.

use tanglewood_foundation::ErrorKind;
use tanglewood_parser::{CommandParser, Verb};

use crate::demo_vocabulary;

#[test]
fn subject_before_verb_is_out_of_order() {
    let vocabulary = demo_vocabulary();
    let parser = CommandParser::new(&vocabulary);

    let err = parser.parse("Mike: axe get").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SubjectsOutOfOrder));
    assert_eq!(err.to_string(), "Command out of order");

    // The well-ordered form parses.
    let command = parser.parse("Mike: get axe").unwrap();
    assert_eq!(command.verb(), Some(Verb::Get));
}

#[test]
fn second_verb_fails() {
    let vocabulary = demo_vocabulary();
    let parser = CommandParser::new(&vocabulary);

    let err = parser.parse("Mike: look inv").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TooManyCommands));
    assert_eq!(err.to_string(), "Trying to perform more than one commands");
}

#[test]
fn alias_and_canonical_verb_still_count_as_two() {
    let vocabulary = demo_vocabulary();
    let parser = CommandParser::new(&vocabulary);

    let err = parser.parse("Mike: inv inventory").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TooManyCommands));
}

#[test]
fn trigger_phrase_with_a_verb_fails_regardless_of_position() {
    let vocabulary = demo_vocabulary();
    let parser = CommandParser::new(&vocabulary);

    for raw in ["Mike: chop look", "Mike: look chop"] {
        let err = parser.parse(raw).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ActionAfterCommand), "{raw}");
        assert_eq!(err.to_string(), "Trying to perform more than one actions");
    }
}

#[test]
fn free_form_text_before_the_verb_is_fine() {
    let vocabulary = demo_vocabulary();
    let parser = CommandParser::new(&vocabulary);

    let command = parser.parse("Mike: would you kindly look").unwrap();
    assert_eq!(command.verb(), Some(Verb::Look));
}

#[test]
fn ordering_violations_win_over_later_content() {
    let vocabulary = demo_vocabulary();
    let parser = CommandParser::new(&vocabulary);

    // The failure fires at the verb token; the trailing subject is never
    // reached.
    let err = parser.parse("Mike: axe get tree").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SubjectsOutOfOrder));
}
