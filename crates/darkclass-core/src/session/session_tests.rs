#![allow(non_snake_case)]

use super::*;
use crate::types::StaticTypeTable;
use std::cell::Cell;

fn ready_session() -> Session {
    let mut session = Session::new();
    session.set_class_name("player_data");
    session.set_field(0, "int health");
    session.add_field("string name");
    session
}

fn script(text: &'static str) -> impl Fn() -> std::io::Result<String> {
    move || Ok(text.to_string())
}

const SCRIPT: &str = "\
namespace Game
{
\tpublic class Hero : DataList
\t{
\t\tpublic static Hero New(int level, Vector3 pos)
\t}
}
";

// Defaults and editing

#[test]
fn Session___new___starts_with_single_default_field() {
    let session = Session::new();

    assert_eq!(session.fields(), &["int value".to_string()]);
    assert_eq!(session.spec().class_name, "");
    assert!(!session.can_generate());
}

#[test]
fn Session___field_editing___add_set_remove() {
    let mut session = Session::new();

    session.add_field("float speed");
    assert!(session.set_field(0, "int hp"));
    assert!(!session.set_field(5, "int nope"));
    assert_eq!(session.remove_field(1), Some("float speed".to_string()));
    assert_eq!(session.remove_field(9), None);

    assert_eq!(session.fields(), &["int hp".to_string()]);
}

#[test]
fn Session___move_field___reorders() {
    let mut session = ready_session();
    session.add_field("bool alive");

    assert!(session.move_field(2, 0));
    assert!(!session.move_field(0, 3));

    assert_eq!(
        session.fields(),
        &["bool alive", "int health", "string name"].map(String::from)
    );
}

#[test]
fn Session___options_mut___changes_generation() {
    let mut session = ready_session();
    session.options_mut().generate_set_accessors = false;
    let mut sink = |_: &str| {};

    let code = session
        .generate(&StaticTypeTable::default(), &mut sink)
        .unwrap()
        .to_string();

    assert!(!code.contains("// Set methods"));
}

// Generation gate

#[test]
fn Session___generate___not_ready_without_class_name() {
    let mut session = Session::new();
    let mut published = false;
    let mut sink = |_: &str| published = true;

    let result = session.generate(&StaticTypeTable::default(), &mut sink);

    assert!(matches!(result, Err(SessionError::NotReady)));
    assert!(!published);
}

#[test]
fn Session___generate___not_ready_with_empty_first_field() {
    let mut session = ready_session();
    session.set_field(0, "");
    let mut sink = |_: &str| {};

    let result = session.generate(&StaticTypeTable::default(), &mut sink);

    assert!(matches!(result, Err(SessionError::NotReady)));
}

#[test]
fn Session___generate___publishes_and_remembers_code() {
    let mut session = ready_session();
    let mut published = Vec::new();
    let mut sink = |code: &str| published.push(code.to_string());

    let code = session
        .generate(&StaticTypeTable::default(), &mut sink)
        .unwrap()
        .to_string();

    assert!(code.contains("public static PlayerData New(int health, string name)"));
    assert_eq!(session.generated(), code);
    assert_eq!(published, vec![code]);
}

#[test]
fn Session___with_indent_unit___applies_to_generation() {
    let mut session = ready_session().with_indent_unit("  ");
    let mut sink = |_: &str| {};

    let code = session
        .generate(&StaticTypeTable::default(), &mut sink)
        .unwrap();

    assert!(code.contains("\n  Health,\n"));
}

// Loading

#[test]
fn Session___load___replaces_parameters() {
    let mut session = ready_session();

    let applied = session.load(&script(SCRIPT)).unwrap();

    assert!(applied);
    assert_eq!(session.spec().namespace, "Game");
    assert_eq!(session.spec().class_name, "Hero");
    assert_eq!(session.fields(), &["int level", "Vector3 pos"].map(String::from));
}

#[test]
fn Session___load___no_class___keeps_state() {
    let mut session = ready_session();

    let applied = session.load(&script("just some text")).unwrap();

    assert!(!applied);
    assert_eq!(session.spec().class_name, "player_data");
    assert_eq!(session.fields().len(), 2);
}

#[test]
fn Session___load___class_without_fields___keeps_field_list() {
    let mut session = ready_session();

    session
        .load(&script("public class Bare : DataList { }"))
        .unwrap();

    assert_eq!(session.spec().class_name, "Bare");
    assert_eq!(session.fields().len(), 2);
}

#[test]
fn Session___load___reader_failure___source_error() {
    let mut session = ready_session();
    let failing = || -> std::io::Result<String> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
    };

    let err = session.load(&failing).unwrap_err();

    assert!(matches!(err, SessionError::Source(ref msg) if msg.contains("gone")));
}

#[test]
fn Session___load_if_changed___reads_once_per_name() {
    let mut session = Session::new();
    let reads = Cell::new(0);
    let reader = || -> std::io::Result<String> {
        reads.set(reads.get() + 1);
        Ok(SCRIPT.to_string())
    };

    assert!(session.load_if_changed("Hero.cs", &reader).unwrap());
    assert!(!session.load_if_changed("Hero.cs", &reader).unwrap());
    assert!(!session.load_if_changed("", &reader).unwrap());

    assert_eq!(reads.get(), 1);
    assert_eq!(session.last_loaded_source(), Some("Hero.cs"));
}

#[test]
fn Session___load_then_generate___round_trips() {
    let mut session = ready_session();
    let table = StaticTypeTable::default();
    let mut sink = |_: &str| {};
    let first = session.generate(&table, &mut sink).unwrap().to_string();

    let mut reloaded = Session::new();
    let text = first.clone();
    reloaded
        .load(&move || -> std::io::Result<String> { Ok(text.clone()) })
        .unwrap();
    let second = reloaded.generate(&table, &mut sink).unwrap().to_string();

    assert_eq!(first, second);
}
