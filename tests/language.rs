use std::fs::{self};

use parsetree::{
    Context, VariableTable,
    ast::{Node, Operator},
    error::{ParseErrorKind, RuntimeError},
    evaluate, get_result,
    interpreter::parser::reporter::ErrorReporter,
    parse,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn fixture_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let (source, expected) =
                line.rsplit_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>' in {line:?}", i + 1));
            check_case(source.trim(), expected.trim(), &format!("{path:?}:{}", i + 1));
        }
    }

    assert!(count > 0, "No fixture cases found in tests/cases");
}

fn check_case(source: &str, expected: &str, location: &str) {
    let context = Context::new();

    if expected == "syntax" {
        assert!(context.parse(source).is_err(),
                "{location}: {source:?} parsed but was expected to fail");
        return;
    }

    let tree = context.parse(source)
                      .unwrap_or_else(|e| panic!("{location}: {source:?} failed to parse:\n{e}"));
    let result = context.evaluate(&tree);

    if let Some(code) = expected.strip_prefix("error") {
        let code: i32 = code.trim()
                            .parse()
                            .unwrap_or_else(|e| panic!("{location}: bad code {code:?}: {e}"));
        match result {
            Err(e) => assert_eq!(e.code(), code, "{location}: {source:?} raised {e}"),
            Ok(v) => panic!("{location}: {source:?} evaluated to {v}, expected error {code}"),
        }
        return;
    }

    let expected: f64 = expected.parse()
                                .unwrap_or_else(|e| panic!("{location}: bad value {expected:?}: {e}"));
    match result {
        Ok(v) => assert_close(v, expected, &format!("{location}: {source:?}")),
        Err(e) => panic!("{location}: {source:?} failed: {e}"),
    }
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    let scale = expected.abs().max(1.0);
    assert!((actual - expected).abs() <= TOLERANCE * scale,
            "{what}: got {actual}, expected {expected}");
}

fn assert_value(src: &str, expected: f64) {
    match get_result(&Context::new(), src) {
        Ok(v) => assert_close(v, expected, src),
        Err(e) => panic!("Expression failed: {src}\n{e}"),
    }
}

fn assert_runtime_code(src: &str, code: i32) {
    let table = VariableTable::new();
    let tree = parse(src, &table).unwrap_or_else(|e| panic!("Expression failed to parse:\n{e}"));
    match evaluate(Some(&tree), &table) {
        Err(e) => assert_eq!(e.code(), code, "{src}: {e}"),
        Ok(v) => panic!("{src} evaluated to {v} but was expected to fail with code {code}"),
    }
}

fn assert_syntax_error(src: &str, kind: ParseErrorKind, marker: &str) {
    match parse(src, &VariableTable::new()) {
        Err(e) => {
            assert_eq!(e.kind(), kind, "{src:?}");
            assert_eq!(e.marker(), marker, "{src:?}");
            assert_eq!(e.to_string(), format!("{src}\n{marker}"));
        },
        Ok(tree) => panic!("{src:?} parsed as {tree} but was expected to fail"),
    }
}

#[test]
fn precedence_and_basic_arithmetic() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2 ^ 3 * 2", 16.0);
    assert_value("1 + 2 < 4", 1.0);
    assert_value("1 < 2 && 3 < 2", 0.0);
}

#[test]
fn additive_operators_group_to_the_right() {
    assert_value("2-3-1", 0.0);
    assert_value("10 - 4 + 3", 3.0);

    let tree = parse("2-3-1", &VariableTable::new()).unwrap();
    assert_eq!(tree.to_string(), "(2 - (3 - 1))");
}

#[test]
fn division_chains_fold_to_the_left() {
    assert_value("8/2/2", 2.0);
    assert_value("8 / 2 * 3", 12.0);
    assert_value("100 / 5 / 2 / 5", 2.0);

    let tree = parse("8/2/2", &VariableTable::new()).unwrap();
    assert_eq!(tree.to_string(), "((8 / 2) / 2)");
}

#[test]
fn multiplication_and_modulo_group_to_the_right() {
    assert_value("2 * 3 % 4", 6.0);
    assert_value("8 % 3 / 2", 0.0);
    assert_value("7.9 % 2.5", 1.0);
    assert_value("-7 % 3", -1.0);
}

#[test]
fn power_is_right_associative_and_binds_below_prefixes() {
    assert_value("2^3^2", 512.0);
    assert_value("-2^2", 4.0);
    assert_value("2^-1", 0.5);
}

#[test]
fn logical_and_comparison_operators() {
    assert_value("!0", 1.0);
    assert_value("!5", 0.0);
    assert_value("!!3", 1.0);
    assert_value("2 && -1", 1.0);
    assert_value("0 || 0", 0.0);
    assert_value("3 >= 3", 1.0);
    assert_value("3 > 3", 0.0);
    assert_value("2 != 3", 1.0);
    assert_value("2 == 2", 1.0);

    // Both share one level and group to the right.
    assert_value("0 && 0 || 1", 0.0);
    assert_value("1 < 2 == 1", 0.0);
}

#[test]
fn prefix_operators() {
    assert_value("--5", 5.0);
    assert_value("+-+5", -5.0);
    assert_value("- (2 + 3)", -5.0);
    assert_value("!-0", 1.0);
}

#[test]
fn literal_scanner() {
    assert_value("42", 42.0);
    assert_value("3.25", 3.25);
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value(".", 0.0);
    assert_value("1.5e2", 150.0);
    assert_value("25E-1", 2.5);
    assert_value("1 e 3", 1000.0);
    assert_value("2e+-2", 0.02);
    assert_value("  \t7\r\n", 7.0);
}

#[test]
fn functions() {
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("tan(0)", 0.0);
    assert_value("exp(1)", std::f64::consts::E);
    assert_value("log(1000)", 3.0);
    assert_value("ln(e)", 1.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("sqrt (2) ^ 2", 2.0);
    assert_value("sin(pi/2) + cos(pi)", 0.0);

    let table = VariableTable::new();
    let log_zero = evaluate(parse("log(0)", &table).ok().as_ref(), &table).unwrap();
    assert!(log_zero.is_infinite() && log_zero < 0.0);
}

#[test]
fn step_compares_against_the_time_variable() {
    let mut context = Context::new();
    let tree = context.parse("step(2)").unwrap();

    assert_eq!(context.evaluate(&tree).unwrap(), 0.0);

    context.set_variable("t", 2.0);
    assert_eq!(context.evaluate(&tree).unwrap(), 0.0);

    context.set_variable("t", 2.5);
    assert_eq!(context.evaluate(&tree).unwrap(), 1.0);
}

#[test]
fn runtime_error_codes() {
    assert_runtime_code("1/0", 2);
    assert_runtime_code("5 % 0.5", 2);
    assert_runtime_code("tan(pi/2)", 4);
    assert_runtime_code("log(-1)", 5);
    assert_runtime_code("ln(-1)", 6);
    assert_runtime_code("sqrt(-1)", 7);
}

#[test]
fn first_runtime_error_wins() {
    assert_runtime_code("ln(-1) + sqrt(-1)", 6);
    assert_runtime_code("sqrt(-1) * (1/0)", 7);
    assert_runtime_code("(1/0) || log(-2)", 2);
}

#[test]
fn malformed_trees_are_reported() {
    let table = VariableTable::new();
    let eval = |node: Node| evaluate(Some(&node.into()), &table).unwrap_err();

    let not_as_binary = Node::binary(Operator::Not, Node::Literal(1.0), Node::Literal(2.0));
    assert_eq!(eval(not_as_binary).code(), 1);

    let function_as_binary = Node::binary(Operator::Sin, Node::Literal(1.0), Node::Literal(2.0));
    assert_eq!(eval(function_as_binary).code(), 3);

    let add_as_unary = Node::unary(Operator::Add, Node::Literal(1.0));
    assert_eq!(eval(add_as_unary).code(), 8);

    assert_eq!(eval(Node::Variable(7)), RuntimeError::UnknownVariable { index: 7 });
    assert_eq!(evaluate(None, &table).unwrap_err(), RuntimeError::BadTree);
}

#[test]
fn trees_are_re_evaluated_with_current_variables() {
    let mut context = Context::new();
    context.set_variable("t", 5.0);

    let tree = context.parse("t").unwrap();
    assert_eq!(context.evaluate(&tree).unwrap(), 5.0);

    context.set_variable("t", 9.0);
    assert_eq!(context.evaluate(&tree).unwrap(), 9.0);

    let square = context.parse("t ^ 2 + pi - pi").unwrap();
    assert_eq!(context.evaluate(&square).unwrap(), 81.0);
    assert_eq!(square.to_string(), "(($0 ^ 2) + ($3 - $3))");
}

#[test]
fn syntax_error_diagnostics() {
    assert_syntax_error("(1+2", ParseErrorKind::MismatchedParenthesis, "----^ mis-matched parenthesis");
    assert_syntax_error("2 + 3 )", ParseErrorKind::UnexpectedSymbol, "------^ unexpected symbol");
    assert_syntax_error("sin 1", ParseErrorKind::MissingParenthesis, "----^ missing parenthesis");
    assert_syntax_error("x + 1", ParseErrorKind::UnexpectedSymbol, "^ unexpected symbol");
    assert_syntax_error("1 +", ParseErrorKind::UnexpectedSymbol, "---^ unexpected symbol");
    assert_syntax_error("", ParseErrorKind::NotAFunction, "^ not a function");
    assert_syntax_error("   ", ParseErrorKind::NotAFunction, "---^ not a function");
    assert_syntax_error("2e", ParseErrorKind::UnexpectedSymbol, "--^ unexpected symbol");
    assert_syntax_error("sqrt(4", ParseErrorKind::MismatchedParenthesis, "------^ mis-matched parenthesis");
}

#[test]
fn function_names_are_not_variables() {
    assert_syntax_error("sin", ParseErrorKind::MissingParenthesis, "---^ missing parenthesis");
    assert_syntax_error("sine(1)", ParseErrorKind::UnexpectedSymbol, "^ unexpected symbol");
    assert_syntax_error("pie", ParseErrorKind::UnexpectedSymbol, "^ unexpected symbol");
}

#[test]
fn error_reporter_latches_the_first_fault() {
    let mut reporter = ErrorReporter::default();
    assert!(!reporter.is_latched());

    reporter.report(ParseErrorKind::UnexpectedSymbol, "1 ) )", 2);
    reporter.report(ParseErrorKind::MismatchedParenthesis, "1 ) )", 4);

    assert!(reporter.is_latched());
    let latched = reporter.latched().unwrap();
    assert_eq!(latched.kind(), ParseErrorKind::UnexpectedSymbol);
    assert_eq!(latched.offset(), 2);
    assert_eq!(latched.input(), "1 ) )");
    assert_eq!(latched.column(), 2);
}

#[test]
fn variable_table_defaults() {
    let mut table = VariableTable::new();

    assert_eq!(table.active_len(), 5);
    assert_eq!(table.capacity(), 10);
    assert_eq!(table.get("t"), Some(0.0));
    assert_eq!(table.get("T"), Some(0.0));
    assert_eq!(table.get("e"), Some(std::f64::consts::E));
    assert_eq!(table.get("pi"), Some(std::f64::consts::PI));
    assert_eq!(table.name(1), Some("T"));
    assert_eq!(table.value(5), None);

    assert_eq!(table.set("T", 3.0), Some(1));
    assert_eq!(table.get("T"), Some(3.0));
    assert_eq!(table.set("time", 1.0), None);

    let names: Vec<_> = table.iter().map(|var| var.name).collect();
    assert_eq!(names, ["t", "T", "e", "pi", "  "]);
}

#[test]
fn operator_catalog_ids_are_stable() {
    let symbols: Vec<_> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols,
               ["!", "&&", "||", "<=", "<", ">=", ">", "==", "!=", "+", "-", "*", "%", "/",
                "^", "sin", "cos", "tan", "exp", "log", "ln", "sqrt", "step"]);

    for (id, op) in Operator::ALL.iter().enumerate() {
        assert_eq!(usize::from(op.id()), id);
        assert_eq!(Operator::from_id(op.id()), Some(*op));
    }
    assert_eq!(Operator::from_id(23), None);
    assert_eq!(Operator::function_named("sqrt"), Some(Operator::Sqrt));
    assert_eq!(Operator::function_named("pi"), None);

    let binary = Operator::ALL.iter().filter(|op| op.is_binary()).count();
    let unary = Operator::ALL.iter().filter(|op| op.is_unary()).count();
    assert_eq!(binary, 14);
    assert_eq!(unary, 10);
    assert!(Operator::Minus.is_binary() && Operator::Minus.is_unary());
    assert!(!Operator::Not.is_binary());
    assert!(Operator::FUNCTIONS.iter().all(|op| op.is_function() && !op.is_binary()));
}

#[test]
fn trees_are_dropped_cleanly() {
    let table = VariableTable::new();
    for src in ["1", "sin(cos(tan(0)))", "((((1))))", "1 + 2 * 3 ^ 4 / 5 % 6 - 7"] {
        let tree = parse(src, &table).unwrap();
        assert!(tree.root().len() >= 1);
        drop(tree);
    }

    let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let tree = parse(&deep, &table).unwrap();
    assert_eq!(tree.into_root(), Node::Literal(1.0));
}
