//! Console surface
//!
//! A console-like logging facade over the inspection engine: `log`-family
//! methods feed batch inspection into an externally supplied sink, and a
//! label map provides elapsed-time logging. Misuse of timer labels is an
//! error raised to the caller, never silently ignored.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use inspector::{inspect_multiple, InspectOptions};
use thiserror::Error;
use value_core::{JsError, JsValue};

/// Sentinel label used when no timer label is given
const DEFAULT_TIMER_LABEL: &str = "Timer";

/// Severity of a console message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// console.log
    Log,
    /// console.info
    Info,
    /// console.warn
    Warn,
    /// console.error
    Error,
    /// console.debug
    Debug,
}

/// Console output sink
///
/// Implement this to route console output to a host logger, a file or a
/// test capture buffer.
pub trait ConsoleSink {
    /// Write one finished message at the given level
    fn write(&self, level: LogLevel, message: &str);
}

/// Default sink that prints to stdout/stderr
struct StdioSink;

impl ConsoleSink for StdioSink {
    fn write(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Warn | LogLevel::Error => eprintln!("{}", message),
            _ => println!("{}", message),
        }
    }
}

/// Capturing sink for tests and embedders
struct CaptureSink {
    output: Rc<RefCell<Vec<String>>>,
}

impl ConsoleSink for CaptureSink {
    fn write(&self, _level: LogLevel, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }
}

/// Console misuse and traversal errors
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// `time` called for a label that is already running
    #[error("Label '{0}' already running")]
    TimerAlreadyRunning(String),
    /// `timeLog`/`timeEnd` called for an unknown label
    #[error("No such label '{0}' running")]
    UnknownTimer(String),
    /// Inspection of a logged value raised
    #[error(transparent)]
    Inspect(#[from] JsError),
}

/// Console object
pub struct Console {
    sink: Box<dyn ConsoleSink>,
    timers: RefCell<HashMap<String, Instant>>,
    options: InspectOptions,
}

impl Console {
    /// Create a console printing to stdout/stderr
    pub fn new() -> Self {
        Console::with_sink(Box::new(StdioSink))
    }

    /// Create a console writing into a custom sink
    pub fn with_sink(sink: Box<dyn ConsoleSink>) -> Self {
        Console {
            sink,
            timers: RefCell::new(HashMap::new()),
            options: InspectOptions::default(),
        }
    }

    /// Create a console that captures output into the given buffer
    pub fn with_capture(output: Rc<RefCell<Vec<String>>>) -> Self {
        Console::with_sink(Box::new(CaptureSink { output }))
    }

    /// Override the inspection options used for logged values
    pub fn set_options(&mut self, options: InspectOptions) {
        self.options = options;
    }

    fn write(&self, level: LogLevel, values: &[JsValue]) -> Result<(), ConsoleError> {
        let message = inspect_multiple(&self.options, values)?;
        self.sink.write(level, &message);
        Ok(())
    }

    /// console.log(...values)
    pub fn log(&self, values: &[JsValue]) -> Result<(), ConsoleError> {
        self.write(LogLevel::Log, values)
    }

    /// console.info(...values)
    pub fn info(&self, values: &[JsValue]) -> Result<(), ConsoleError> {
        self.write(LogLevel::Info, values)
    }

    /// console.warn(...values)
    pub fn warn(&self, values: &[JsValue]) -> Result<(), ConsoleError> {
        self.write(LogLevel::Warn, values)
    }

    /// console.error(...values)
    pub fn error(&self, values: &[JsValue]) -> Result<(), ConsoleError> {
        self.write(LogLevel::Error, values)
    }

    /// console.debug(...values)
    pub fn debug(&self, values: &[JsValue]) -> Result<(), ConsoleError> {
        self.write(LogLevel::Debug, values)
    }

    fn label_or_default(label: Option<&str>) -> String {
        label.unwrap_or(DEFAULT_TIMER_LABEL).to_string()
    }

    /// console.time(label) - start a named timer
    pub fn time(&self, label: Option<&str>) -> Result<(), ConsoleError> {
        let label = Self::label_or_default(label);
        let mut timers = self.timers.borrow_mut();
        if timers.contains_key(&label) {
            return Err(ConsoleError::TimerAlreadyRunning(label));
        }
        timers.insert(label, Instant::now());
        Ok(())
    }

    /// console.timeLog(label) - report elapsed time, keep the timer running
    pub fn time_log(&self, label: Option<&str>) -> Result<(), ConsoleError> {
        let label = Self::label_or_default(label);
        let elapsed = {
            let timers = self.timers.borrow();
            let start = timers
                .get(&label)
                .ok_or_else(|| ConsoleError::UnknownTimer(label.clone()))?;
            start.elapsed().as_millis()
        };
        self.sink
            .write(LogLevel::Log, &format!("{}: {}ms", label, elapsed));
        Ok(())
    }

    /// console.timeEnd(label) - report elapsed time and clear the timer
    pub fn time_end(&self, label: Option<&str>) -> Result<(), ConsoleError> {
        let label = Self::label_or_default(label);
        let start = self
            .timers
            .borrow_mut()
            .remove(&label)
            .ok_or_else(|| ConsoleError::UnknownTimer(label.clone()))?;
        let elapsed = start.elapsed().as_millis();
        self.sink
            .write(LogLevel::Log, &format!("{}: {}ms", label, elapsed));
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::new()
    }
}
