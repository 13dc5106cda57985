//! Diagnostics raised while parsing.
//!
//! A parser reports every recoverable problem through an `ErrorReporter`.
//! In tolerant mode, the reporter records the error and parsing goes on.
//! Otherwise, the error is handed back as `Err` and the parser aborts by
//! propagating it.

use serde::Serialize;

use std::rc::Rc;

/// A single diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParserError {
    /// Offset of the error in the source.
    index: usize,

    /// 1-based line.
    line: usize,

    column: usize,
    description: String,
    message: String,

    /// The source text, shared with the parser and other errors.
    source: Option<Rc<str>>,
}
impl ParserError {
    pub fn new(
        index: usize,
        line: usize,
        column: usize,
        description: String,
        source: Option<Rc<str>>,
    ) -> Self {
        let message = format!("Line {}: {}", line, description);
        ParserError {
            index,
            line,
            column,
            description,
            message,
            source,
        }
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn line(&self) -> usize {
        self.line
    }
    pub fn column(&self) -> usize {
        self.column
    }
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The description, prefixed with the line number.
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn source_text(&self) -> Option<&Rc<str>> {
        self.source.as_ref()
    }
}
impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
impl std::error::Error for ParserError {}

/// The interface between a parser and its diagnostics collection.
pub trait ErrorReporter {
    fn is_tolerant(&self) -> bool;
    fn set_tolerant(&mut self, tolerant: bool);

    /// Build an error. This neither records nor raises it.
    fn create_error(&self, index: usize, line: usize, column: usize, description: &str) -> ParserError;

    /// Record `error` in tolerant mode, otherwise return it as `Err`.
    fn tolerate(&mut self, error: ParserError) -> Result<(), ParserError>;

    /// Shorthand for `tolerate(create_error(...))`.
    fn tolerate_error(
        &mut self,
        index: usize,
        line: usize,
        column: usize,
        description: &str,
    ) -> Result<(), ParserError> {
        let error = self.create_error(index, line, column, description);
        self.tolerate(error)
    }
}

/// The default `ErrorReporter`, owned by a single parse.
///
/// Errors are kept in the order in which they were tolerated, duplicates
/// included, and are never dropped while the handler lives.
#[derive(Clone, Debug, Default)]
pub struct ErrorHandler {
    errors: Vec<ParserError>,
    tolerant: bool,
    source: Option<Rc<str>>,
}
impl ErrorHandler {
    /// A strict handler, with no source attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// A strict handler, attaching `source` to every error it creates.
    pub fn with_source<S>(source: S) -> Self
    where
        S: Into<Rc<str>>,
    {
        ErrorHandler {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// A strict handler, appending to an existing collection of errors.
    pub fn with_errors(errors: Vec<ParserError>) -> Self {
        ErrorHandler {
            errors,
            ..Self::default()
        }
    }

    pub fn source_text(&self) -> Option<&Rc<str>> {
        self.source.as_ref()
    }

    /// Everything tolerated so far, in order.
    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParserError> {
        self.errors
    }
}
impl ErrorReporter for ErrorHandler {
    fn is_tolerant(&self) -> bool {
        self.tolerant
    }

    fn set_tolerant(&mut self, tolerant: bool) {
        self.tolerant = tolerant;
    }

    fn create_error(&self, index: usize, line: usize, column: usize, description: &str) -> ParserError {
        ParserError::new(
            index,
            line,
            column,
            description.to_string(),
            self.source.clone(),
        )
    }

    fn tolerate(&mut self, error: ParserError) -> Result<(), ParserError> {
        if !self.tolerant {
            debug!(target: "error_handler", "raising {}", error);
            return Err(error);
        }
        debug!(target: "error_handler", "tolerating {}", error);
        self.errors.push(error);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error() {
        let handler = ErrorHandler::with_source("var = 1;");
        let error = handler.create_error(4, 1, 5, "Unexpected token =");
        assert_eq!(error.index(), 4);
        assert_eq!(error.line(), 1);
        assert_eq!(error.column(), 5);
        assert_eq!(error.description(), "Unexpected token =");
        assert_eq!(error.message(), "Line 1: Unexpected token =");
        assert_eq!(error.to_string(), error.message());
        assert_eq!(error.source_text().map(|s| &**s), Some("var = 1;"));

        // Creating an error does not record it.
        assert!(handler.errors().is_empty());
    }

    #[test]
    fn test_source_is_shared() {
        let handler = ErrorHandler::with_source("x");
        let a = handler.create_error(0, 1, 1, "a");
        let b = handler.create_error(0, 1, 1, "b");
        assert!(Rc::ptr_eq(a.source_text().unwrap(), b.source_text().unwrap()));
    }

    #[test]
    fn test_serialize() {
        let error = ErrorHandler::new().create_error(3, 2, 1, "Unexpected end of input");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["line"], 2u64);
        assert_eq!(json["message"], "Line 2: Unexpected end of input");
        assert!(json["source"].is_null());
    }

    #[test]
    fn test_with_errors_appends() {
        let seed = ErrorHandler::new().create_error(0, 1, 1, "first");
        let mut handler = ErrorHandler::with_errors(vec![seed.clone()]);
        handler.set_tolerant(true);
        handler.tolerate_error(1, 1, 2, "second").unwrap();
        assert_eq!(handler.errors().len(), 2);
        assert_eq!(handler.errors()[0], seed);
        assert_eq!(handler.into_errors()[1].description(), "second");
    }
}
