use std::{
    fs,
    io::{self, Write},
};

use gander::{Context, Error, ParseError, RuntimeError, Value};
use walkdir::WalkDir;

fn run(src: &str) -> (Result<Value, Error>, String) {
    let mut context = Context::with_output(Vec::new());
    let result = context.run(src);
    let output = String::from_utf8(context.into_output()).expect("output is not UTF-8");
    (result, output)
}

fn assert_value(src: &str, expected: Value) {
    match run(src).0 {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Value::Integer(expected));
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match run(src).0 {
        Err(Error::Runtime(e)) => e,
        Err(e) => panic!("Script failed to parse: {e}"),
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
    }
}

#[test]
fn script_fixtures_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "gander"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                                                                          panic!("Missing expected output for {path:?}: {e}")
                                                                      });

        count += 1;
        let (result, output) = run(&source);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(output, expected, "unexpected output from {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn literals() {
    assert_value("nil\n", Value::Nil);
    assert_value("true\n", Value::Bool(true));
    assert_value("false\n", Value::Bool(false));
    assert_int("42\n", 42);
}

#[test]
fn empty_program_yields_nil() {
    assert_value("", Value::Nil);
    assert_value("\n\n", Value::Nil);
}

#[test]
fn basic_arithmetic() {
    assert_int("1 + 2\n", 3);
    assert_int("10 - 3 - 2\n", 5);
    assert_int("7 * 9\n", 63);
    assert_int("10 / 2\n", 5);
    assert_int("(2 + 3) * 4\n", 20);
}

#[test]
fn addition_is_commutative() {
    for (a, b) in [(0, 0), (1, 2), (17, 25), (1000, 3)] {
        assert_int(&format!("{a} + {b}\n"), a + b);
        assert_int(&format!("{b} + {a}\n"), a + b);
    }
}

#[test]
fn product_right_operand_is_a_sum() {
    assert_int("2 * 3 + 4\n", 14);
    assert_int("2 + 3 * 4\n", 14);
    assert_int("12 / 2 + 1\n", 4);
}

#[test]
fn division_truncates_toward_zero() {
    assert_int("x = 0 - 7\nx / 2\n", -3);
    assert_int("7 / 2\n", 3);
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(assert_runtime_failure("1 / 0\n"),
                     RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(assert_runtime_failure("x = 9223372036854775807\nx + 1\n"),
                     RuntimeError::Overflow { line: 2 }));
    assert!(matches!(assert_runtime_failure("true + 1\n"), RuntimeError::TypeError { .. }));
    assert!(matches!(assert_runtime_failure("nil * 2\n"), RuntimeError::TypeError { .. }));
}

#[test]
fn assignment_persists_across_runs() {
    let mut context = Context::with_output(Vec::new());

    assert_eq!(context.run("x = 5\n").unwrap(), Value::Integer(5));
    assert_eq!(context.run("x\n").unwrap(), Value::Integer(5));
    assert_eq!(context.namespace.get("x"), Value::Integer(5));
}

#[test]
fn undefined_identifiers_are_nil() {
    assert_value("y\n", Value::Nil);
    assert_value("y == nil\n", Value::Bool(true));
}

#[test]
fn truthiness_and_logic() {
    assert_int("nil or 3\n", 3);
    assert_value("false and 1\n", Value::Bool(false));
    assert_int("1 and 2\n", 2);
    assert_int("0 and 2\n", 2);
    assert_value("nil or false\n", Value::Bool(false));
    assert_int("4 or 5\n", 4);
}

#[test]
fn equality_compares_tags() {
    assert_value("1 == true\n", Value::Bool(false));
    assert_value("nil == false\n", Value::Bool(false));
    assert_value("0 == false\n", Value::Bool(false));
    assert_value("2 == 2\n", Value::Bool(true));
    assert_value("2 != 3\n", Value::Bool(true));
    assert_value("nil != nil\n", Value::Bool(false));
}

#[test]
fn if_else_prints_and_yields() {
    let (result, output) = run("if 1 == 1:\n  print 42\nelse:\n  print 0\n");

    assert_eq!(result.unwrap(), Value::Integer(42));
    assert_eq!(output, "42\n");
}

#[test]
fn first_matching_arm_wins() {
    let src = "x = 2\nif x == 1:\n  1\nelif x == 2:\n  2\nelif x == 2:\n  3\nelse:\n  4\n";

    assert_int(src, 2);
    assert_value("if false:\n  1\n", Value::Nil);
}

#[test]
fn later_conditions_are_not_evaluated() {
    assert_value("if true:\n  1\nelif 1 / 0:\n  2\n", Value::Integer(1));
}

#[test]
fn unless_runs_on_falsy_conditions() {
    assert_int("unless nil:\n  7\n", 7);
    assert_value("unless 1:\n  7\n", Value::Nil);
    assert_int("unless 1:\n  7\nelse:\n  8\n", 8);
}

#[test]
fn inline_conditionals() {
    let (_, output) = run("x = 3\nprint x if x == 3\nprint 0 if x == 4\nprint 1 unless x == 4\n");

    assert_eq!(output, "3\n1\n");
}

#[test]
fn print_yields_its_value() {
    let (result, output) = run("print true\nprint nil\n");

    assert_eq!(result.unwrap(), Value::Nil);
    assert_eq!(output, "true\nnil\n");
}

#[test]
fn return_does_not_exit_early() {
    assert_int("return 1\n2\n", 2);
}

#[test]
fn functions_yield_their_last_value() {
    assert_int("Square(x) ->\n  x * x\n\nSquare(3)\n", 9);
    assert_int("Add(a, b) ->\n  a + b\nAdd(2, 5)\n", 7);
    assert_int("Answer ->\n  42\nAnswer\n", 42);
    assert_value("Answer ->\n  42\n", Value::Nil);
}

#[test]
fn parameters_are_scoped_to_the_call() {
    let mut context = Context::with_output(Vec::new());
    context.run("a = 1\nShadow(a, b) ->\n  total = a + b\n  total\n").unwrap();

    assert_eq!(context.run("Shadow(10, 20)\n").unwrap(), Value::Integer(30));
    assert_eq!(context.namespace.get("a"), Value::Integer(1));
    assert_eq!(context.namespace.lookup("b"), None);
    assert_eq!(context.namespace.get("total"), Value::Integer(30));
}

#[test]
fn recursion() {
    let src = "Fact(n) ->\n  if n == 0:\n    1\n  else:\n    n * Fact(n - 1)\nFact(10)\n";

    assert_int(src, 3_628_800);
}

#[test]
fn runaway_recursion_is_an_error() {
    let err = assert_runtime_failure("Forever(n) ->\n  Forever(n)\nForever(1)\n");

    assert!(matches!(err, RuntimeError::RecursionLimit { limit: 100, .. }));
}

#[test]
fn function_call_errors() {
    assert!(matches!(assert_runtime_failure("Missing(1)\n"),
                     RuntimeError::UnknownFunction { ref name, .. } if name == "Missing"));
    assert!(matches!(assert_runtime_failure("One(a) ->\n  a\nOne(1, 2)\n"),
                     RuntimeError::ArgumentCountMismatch { expected: 1, found: 2, .. }));
}

#[test]
fn runtime_errors_keep_earlier_effects() {
    let mut context = Context::with_output(Vec::new());

    assert!(context.run("x = 1\nprint x\ny = 1 / 0\nz = 3\n").is_err());
    assert_eq!(context.namespace.get("x"), Value::Integer(1));
    assert_eq!(context.namespace.lookup("z"), None);
    assert_eq!(context.output(), b"1\n");
}

#[test]
fn syntax_errors_prevent_evaluation() {
    let mut context = Context::with_output(Vec::new());

    assert!(matches!(context.run("print 1\nx = (\n"), Err(Error::Parse(_))));
    assert!(context.output().is_empty());
}

#[test]
fn error_messages_name_the_line() {
    let (result, _) = run("x = 1\n\ny = x / 0\n");

    assert_eq!(result.unwrap_err().to_string(), "Error on line 3: Division by zero.");
}

#[test]
fn long_chains_within_the_nesting_limit_evaluate() {
    assert_int(&("1 + ".repeat(199) + "1\n"), 200);
    assert_int(&("(".repeat(100) + "7" + &")".repeat(100) + "\n"), 7);
}

#[test]
fn deeply_nested_input_is_a_syntax_error() {
    let mut context = Context::with_output(Vec::new());

    assert!(matches!(context.run(&("1 * ".repeat(5_000) + "1\n")),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
    assert_eq!(context.run("1 + 1\n").unwrap(), Value::Integer(2));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn print_reports_write_failures() {
    let mut context = Context::with_output(FailingWriter);

    let err = context.run("x = 1\nprint x\ny = 2\n").unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::Output { line: 2, ref details }) if details.contains("sink closed")));
    assert_eq!(context.namespace.get("x"), Value::Integer(1));
    assert_eq!(context.namespace.lookup("y"), None);
}
