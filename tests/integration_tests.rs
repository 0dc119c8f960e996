//! Integration tests for end-to-end parsing.
//!
//! These tests run whole shader sources through preprocessing, splitting and
//! resolution using the public API only.

use std::rc::Rc;

use shader_front::{
    ast::{
        node::{Literal, Node, Scope},
        operation::OperationType,
        variable::{Qualifier, Variable, VariableType},
    },
    parser::parser::{parse, Parser, ParserOptions},
};

const VERTEX_SHADER: &str = r#"
#version 100
#define SPEED 2.5
/* vertex inputs */
attribute vec3 position;
uniform mediump vec4 tint;
varying vec2 uv;
uniform float scale;

void main() {
    float angle = SPEED * scale; // radians
    bool visible = scale > 0.0;
    int count = (2 + 3) * 4;
}
"#;

fn value_of(node: &Node) -> Node {
    node.as_variable().unwrap().borrow().value.clone().unwrap()
}

#[test]
fn test_parse_vertex_shader() {
    let statements = parse(VERTEX_SHADER, &Scope::new()).unwrap();

    assert_eq!(statements.len(), 8);

    let position = statements[0].as_variable().unwrap().borrow();
    assert_eq!(position.qualifier(), Qualifier::Attribute);
    assert_eq!(position.members().unwrap().len(), 3);

    let tint = statements[1].as_variable().unwrap().borrow();
    assert_eq!(tint.qualifier(), Qualifier::Uniform);
    assert_eq!(tint.arity(), 4);

    assert_eq!(statements[2].as_variable().unwrap().borrow().qualifier(), Qualifier::Varying);
    assert_eq!(statements[4], Node::Name("void main".to_string()));

    let angle = value_of(&statements[5]);
    assert_eq!(angle.operation_type(), Some(OperationType::Multiply));
    let inputs = angle.as_operation().unwrap().inputs();
    assert_eq!(inputs[0], Node::Literal(Literal::Float(2.5)));
    assert_eq!(inputs[1], Node::Name("scale".to_string()));

    assert_eq!(value_of(&statements[6]).operation_type(), Some(OperationType::GreaterThan));

    let count = value_of(&statements[7]);
    assert_eq!(count.operation_type(), Some(OperationType::Multiply));
    assert_eq!(
        count.as_operation().unwrap().inputs()[0].operation_type(),
        Some(OperationType::Add)
    );
}

#[test]
fn test_parse_vertex_shader_with_declarations_in_scope() {
    let mut parser = Parser::new(ParserOptions {
        declare_into_scope: true,
        ..ParserOptions::default()
    });
    let statements = parser.parse(VERTEX_SHADER).unwrap();

    let scale = Rc::clone(&parser.scope()["scale"]);
    assert_eq!(scale.borrow().get_type(), VariableType::Float);

    let angle = value_of(&statements[5]);
    assert_eq!(angle.as_operation().unwrap().inputs()[1], Node::Variable(scale));
    assert_eq!(parser.scope().len(), 7);
}

#[test]
fn test_parse_against_builtin_scope() {
    let mut scope = Scope::new();
    scope.insert(
        "gl_FragColor".to_string(),
        Variable::vector(VariableType::Float, 4, Some("gl_FragColor".to_string())).into_ref(),
    );
    scope.insert("brightness".to_string(), Variable::named(VariableType::Float, "brightness").into_ref());

    let source = "void main() {\n    gl_FragColor = brightness * (1.0 - brightness);\n}";
    let statements = parse(source, &scope).unwrap();

    assert_eq!(statements.len(), 2);
    assert!(Rc::ptr_eq(statements[1].as_variable().unwrap(), &scope["gl_FragColor"]));

    let value = scope["gl_FragColor"].borrow().value.clone().unwrap();
    assert_eq!(value.operation_type(), Some(OperationType::Multiply));
    let inputs = value.as_operation().unwrap().inputs();
    assert_eq!(inputs[0], Node::Variable(Rc::clone(&scope["brightness"])));
    assert_eq!(inputs[1].operation_type(), Some(OperationType::Subtract));
}

#[test]
fn test_parse_reports_malformed_macro() {
    let error = parse("#define ONLY_NAME\nint a;", &Scope::new()).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedMacroDirective");
}
