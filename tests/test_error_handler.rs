extern crate env_logger;
extern crate esprima_ast;

use esprima_ast::error::{ErrorHandler, ErrorReporter, ParserError};

/// Stands for a parser reporting one problem per line of `lines`, then
/// going on.
fn parse_lines<R>(reporter: &mut R, lines: &[&str], reached: &mut usize) -> Result<(), ParserError>
where
    R: ErrorReporter,
{
    for (i, line) in lines.iter().enumerate() {
        *reached += 1;
        reporter.tolerate_error(i * 10, i + 1, 0, line)?;
    }
    Ok(())
}

#[test]
fn test_tolerant_accumulation() {
    let _ = env_logger::try_init();

    let lines = ["Unexpected token", "Unexpected token", "Invalid regular expression"];
    for n in 0..lines.len() + 1 {
        let mut handler = ErrorHandler::new();
        handler.set_tolerant(true);
        assert!(handler.is_tolerant());

        let mut reached = 0;
        parse_lines(&mut handler, &lines[..n], &mut reached).expect("Tolerant mode never fails");
        assert_eq!(reached, n);

        let errors = handler.errors();
        assert_eq!(errors.len(), n);
        for (i, error) in errors.iter().enumerate() {
            assert_eq!(error.line(), i + 1);
            assert_eq!(error.index(), i * 10);
            assert_eq!(error.description(), lines[i]);
        }
    }
}

#[test]
fn test_strict_stops_at_first_error() {
    let _ = env_logger::try_init();

    let mut handler = ErrorHandler::with_source("a b c");
    assert!(!handler.is_tolerant());

    let mut reached = 0;
    let error = parse_lines(&mut handler, &["first", "second", "third"], &mut reached)
        .expect_err("Strict mode fails on the first error");
    assert_eq!(reached, 1);
    assert_eq!(error.message(), "Line 1: first");
    assert_eq!(error.source_text().map(|s| &**s), Some("a b c"));
    assert!(handler.errors().is_empty());
}

#[test]
fn test_mode_switch_keeps_errors() {
    let mut handler = ErrorHandler::new();
    handler.set_tolerant(true);
    handler.tolerate_error(0, 1, 0, "kept").unwrap();

    handler.set_tolerant(false);
    let error = handler.create_error(5, 2, 3, "raised");
    assert_eq!(handler.tolerate(error.clone()), Err(error));

    handler.set_tolerant(true);
    handler.tolerate_error(9, 3, 0, "kept").unwrap();

    let descriptions: Vec<_> = handler.errors().iter().map(ParserError::description).collect();
    assert_eq!(descriptions, vec!["kept", "kept"]);
}
