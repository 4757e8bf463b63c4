//! Contract tests for console logging and timers

use std::cell::RefCell;
use std::rc::Rc;

use console::{Console, ConsoleError};
use value_core::{ErrorData, ErrorKind, JsValue};

fn capture() -> (Console, Rc<RefCell<Vec<String>>>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    (Console::with_capture(output.clone()), output)
}

#[test]
fn test_log_renders_values_through_inspection() {
    let (console, output) = capture();
    let obj = JsValue::object();
    obj.set("ready", JsValue::boolean(true));
    console.log(&[JsValue::string("state"), obj]).unwrap();
    assert_eq!(output.borrow()[0], "state { ready: true }");
}

#[test]
fn test_each_level_writes() {
    let (console, output) = capture();
    console.log(&[JsValue::string("a")]).unwrap();
    console.info(&[JsValue::string("b")]).unwrap();
    console.warn(&[JsValue::string("c")]).unwrap();
    console.error(&[JsValue::string("d")]).unwrap();
    console.debug(&[JsValue::string("e")]).unwrap();
    assert_eq!(output.borrow().len(), 5);
}

#[test]
fn test_error_values_render_with_stack() {
    let (console, output) = capture();
    let mut err = ErrorData::new(ErrorKind::TypeError, "bad");
    err.set_stack("TypeError: bad\n    at cb (a.js:2:2)");
    console.error(&[JsValue::error(err)]).unwrap();
    assert!(output.borrow()[0].starts_with("TypeError: bad"));
    assert!(output.borrow()[0].contains("    at cb"));
}

#[test]
fn test_timer_labels_are_independent() {
    let (console, output) = capture();
    console.time(Some("a")).unwrap();
    console.time(Some("b")).unwrap();
    console.time_end(Some("a")).unwrap();
    console.time_end(Some("b")).unwrap();
    assert!(output.borrow()[0].starts_with("a: "));
    assert!(output.borrow()[1].starts_with("b: "));
}

#[test]
fn test_default_label_is_timer() {
    let (console, output) = capture();
    console.time(None).unwrap();
    console.time_end(None).unwrap();
    assert!(output.borrow()[0].starts_with("Timer: "));
}

#[test]
fn test_reusing_running_label_errors() {
    let (console, _) = capture();
    console.time(Some("busy")).unwrap();
    let err = console.time(Some("busy")).unwrap_err();
    assert_eq!(err.to_string(), "Label 'busy' already running");
}

#[test]
fn test_unknown_label_errors() {
    let (console, _) = capture();
    let err = console.time_end(Some("ghost")).unwrap_err();
    assert_eq!(err.to_string(), "No such label 'ghost' running");
    assert!(matches!(err, ConsoleError::UnknownTimer(_)));
}

#[test]
fn test_time_log_keeps_timer_running() {
    let (console, output) = capture();
    console.time(Some("job")).unwrap();
    console.time_log(Some("job")).unwrap();
    console.time_log(Some("job")).unwrap();
    console.time_end(Some("job")).unwrap();
    assert_eq!(output.borrow().len(), 3);
}
