use gander::{
    ParseError, Value,
    ast::{BinaryOperator, Keyword, Node},
    interpreter::lexer::TokenKind,
    parse,
};

fn children(root: &Node) -> &[Node] {
    match root {
        Node::Block { children, .. } => children,
        other => panic!("expected a block, got {other:?}"),
    }
}

fn only_child(src: &str) -> Node {
    let root = parse(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"));
    let children = children(&root);
    assert_eq!(children.len(), 1, "expected one statement in {src:?}");
    children[0].clone()
}

fn literal(n: i64) -> Node {
    Node::Literal { value: Value::Integer(n),
                    line:  1, }
}

#[test]
fn empty_program_is_an_empty_block() {
    assert_eq!(children(&parse("").unwrap()).len(), 0);
    assert_eq!(children(&parse("\n\n   \n").unwrap()).len(), 0);
}

#[test]
fn binary_operands_keep_source_order() {
    let node = only_child("10 - 4\n");

    assert_eq!(node,
               Node::BinaryExpr { op:    BinaryOperator::Sub,
                                  left:  Box::new(literal(10)),
                                  right: Box::new(literal(4)),
                                  line:  1, });
}

#[test]
fn product_takes_a_sum_on_its_right() {
    let Node::BinaryExpr { op, left, right, .. } = only_child("2 * 3 + 4\n") else {
        panic!("expected a binary expression");
    };

    assert_eq!(op, BinaryOperator::Mul);
    assert_eq!(*left, literal(2));
    assert!(matches!(*right, Node::BinaryExpr { op: BinaryOperator::Add, .. }));
}

#[test]
fn logical_operators_bind_loosest() {
    let node = only_child("a == 1 and b\n");

    let Node::BinaryExpr { op, left, .. } = node else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOperator::And);
    assert!(matches!(*left, Node::BinaryExpr { op: BinaryOperator::Equal, .. }));
}

#[test]
fn assignment_and_keywords() {
    assert!(matches!(only_child("x = 1 + 2\n"), Node::Assign { ref name, .. } if name == "x"));
    assert!(matches!(only_child("print x\n"),
                     Node::KeywordStmt { keyword: Keyword::Print, .. }));
    assert!(matches!(only_child("return 1\n"),
                     Node::KeywordStmt { keyword: Keyword::Return, .. }));
}

#[test]
fn branch_with_elif_and_else() {
    let src = "if x == 1:\n  a = 1\nelif x == 2:\n  a = 2\nelse:\n  a = 3\n";

    let Node::Branch { arms, default, .. } = only_child(src) else {
        panic!("expected a branch");
    };
    assert_eq!(arms.len(), 2);
    assert!(arms.iter().all(|arm| !arm.inverted));
    assert!(default.is_some());
}

#[test]
fn nested_blocks_only_collect_their_own_lines() {
    let src = "a = 1\nif a:\n  b = 2\n  if b:\n    c = 3\n  d = 4\ne = 5\n";
    let root = parse(src).unwrap();
    let top = children(&root);

    assert_eq!(top.len(), 3);
    let Node::Branch { arms, .. } = &top[1] else {
        panic!("expected a branch");
    };
    assert_eq!(children(&arms[0].body).len(), 3);
}

#[test]
fn unless_inverts_its_arm() {
    let Node::Branch { arms, default, .. } = only_child("unless x:\n  print 1\n") else {
        panic!("expected a branch");
    };

    assert!(arms[0].inverted);
    assert!(default.is_none());
}

#[test]
fn inline_conditionals() {
    let Node::Branch { arms, default, .. } = only_child("print 1 if x\n") else {
        panic!("expected a branch");
    };
    assert_eq!(arms.len(), 1);
    assert!(!arms[0].inverted);
    assert!(matches!(arms[0].body, Node::KeywordStmt { .. }));
    assert!(matches!(arms[0].condition, Node::Identifier { .. }));
    assert!(default.is_none());

    let Node::Branch { arms, .. } = only_child("x = 2 unless y\n") else {
        panic!("expected a branch");
    };
    assert!(arms[0].inverted);
}

#[test]
fn function_definitions() {
    let Node::FunctionDef(def) = only_child("Add(a, b) ->\n  a + b\n") else {
        panic!("expected a definition");
    };
    assert_eq!(def.name, "Add");
    assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);

    let Node::FunctionDef(def) = only_child("Answer ->\n  42\n") else {
        panic!("expected a definition");
    };
    assert!(def.params.is_empty());
}

#[test]
fn method_identifiers_are_calls() {
    let Node::Call { name, arguments, .. } = only_child("Add(1, 2 + 3)\n") else {
        panic!("expected a call");
    };
    assert_eq!(name, "Add");
    assert_eq!(arguments.len(), 2);

    assert!(matches!(only_child("Answer\n"),
                     Node::Call { ref arguments, .. } if arguments.is_empty()));
    assert!(matches!(only_child("f()\n"),
                     Node::Call { ref arguments, .. } if arguments.is_empty()));
}

#[test]
fn missing_final_newline_is_accepted() {
    assert_eq!(parse("x = 1"), parse("x = 1\n"));
    assert!(parse("if x:\n  y").is_ok());
}

#[test]
fn parsing_is_deterministic() {
    let src = "Twice(n) ->\n  n * 2\n\nif Twice(2) == 4:\n  print 1\nelse:\n  print 0\n";

    assert_eq!(parse(src), parse(src));
}

#[test]
fn odd_indentation_is_rejected() {
    let err = parse("if x:\n   y = 1\n").unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedIndent { spaces: 3, line: 2 }));
}

#[test]
fn over_deep_indentation_is_rejected() {
    assert!(matches!(parse("if x:\n  y = 1\n      z = 2\n"),
                     Err(ParseError::UnexpectedIndent { spaces: 6, .. })));
    assert!(matches!(parse("  x = 1\n"), Err(ParseError::UnexpectedIndent { .. })));
}

#[test]
fn empty_body_is_rejected() {
    assert!(matches!(parse("if x:\ny = 1\n"), Err(ParseError::ExpectedBlock { .. })));
    assert!(matches!(parse("Nothing ->\n"), Err(ParseError::ExpectedBlock { .. })));
}

#[test]
fn syntax_errors() {
    let unexpected = |src: &str| {
        matches!(parse(src), Err(ParseError::UnexpectedToken { .. }))
    };

    assert!(unexpected("x = (1\n"));
    assert!(unexpected("x = 1)\n"));
    assert!(unexpected("x = $\n"));
    assert!(unexpected("1 2\n"));
    assert!(unexpected("if x\n  y\n"));
    assert!(unexpected("print\n"));
    assert!(unexpected("else:\n  y\n"));
}

#[test]
fn unexpected_token_reports_what_was_found() {
    let Err(ParseError::UnexpectedToken { found, line, .. }) = parse("a = 1\nb = * 2\n") else {
        panic!("expected a syntax error");
    };

    assert_eq!(found.kind, TokenKind::Multiply);
    assert_eq!(line, 2);
}

#[test]
fn oversized_literals_are_rejected() {
    assert!(matches!(parse("99999999999999999999\n"),
                     Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn describe_renders_an_indented_tree() {
    let root = parse("if x:\n  print 1\n").unwrap();

    assert_eq!(root.describe(0),
               "# BLOCK (1):\n\
                #   IF:\n\
                #     IDENT: `x`\n\
                #   THEN:\n\
                #     BLOCK (1):\n\
                #       PRINT:\n\
                #         VALUE: 1\n");
}

#[test]
fn long_product_chains_are_rejected() {
    let src = "1 * ".repeat(10_000) + "1\n";

    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { line: 1 })));
}

#[test]
fn long_sum_chains_are_rejected() {
    let src = "1 + ".repeat(20_000) + "1\n";

    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn deep_parentheses_and_calls_are_rejected() {
    let parens = "(".repeat(2_000) + "1" + &")".repeat(2_000) + "\n";
    let calls = "F(".repeat(2_000) + "1" + &")".repeat(2_000) + "\n";

    assert!(matches!(parse(&parens), Err(ParseError::NestingTooDeep { .. })));
    assert!(matches!(parse(&calls), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn deep_blocks_are_rejected() {
    let src = (0..300).map(|level| format!("{}if x:\n", "  ".repeat(level)))
                      .collect::<String>()
              + &"  ".repeat(300)
              + "y\n";

    assert!(matches!(parse(&src), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn moderate_nesting_is_accepted() {
    let sum = "1 + ".repeat(199) + "1\n";
    let parens = "(".repeat(100) + "1" + &")".repeat(100) + "\n";

    assert!(parse(&sum).is_ok());
    assert!(parse(&parens).is_ok());
    assert!(parse("x = (1 + (2 * (3 - 1))) == 5 and F(G(1), (2))\n").is_ok());
}
