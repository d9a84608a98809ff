//! End-to-end tests for the built-in engine configuration

use textor_rules::builtin_engine;

const SAMPLE: &str = r#"//! V2统一客户端 - 下一代LLM客户端接口

/// 创建OpenAI客户端
fn demo() {
    let message = Message {
        role: Role::User,
        content: "你好".to_string(),
        ..Default::default()
    };
    send(message);
}
"#;

#[test]
fn rewrites_structural_and_lexical_together() {
    let engine = builtin_engine(true, true).unwrap();
    let result = engine.process(SAMPLE);

    assert!(result.changed);
    assert!(result
        .content
        .contains("//! V2 Unified Client - Next-generation LLM client interface"));
    assert!(result.content.contains("/// Create OpenAI client"));
    assert!(result
        .content
        .contains(r#"let message = Message::text(Role::User, "你好");"#));
    assert!(!result.content.contains("Default::default"));
}

#[test]
fn engine_output_is_a_fixed_point() {
    let engine = builtin_engine(true, true).unwrap();
    let first = engine.process(SAMPLE);
    assert!(first.changed);

    let second = engine.process(&first.content);
    assert_eq!(second.content, first.content);
    assert!(!second.changed);
}

#[test]
fn non_matching_input_is_reported_unchanged() {
    let engine = builtin_engine(true, true).unwrap();
    let source = "fn main() {\n    println!(\"hello\");\n}\n";
    let result = engine.process(source);

    assert_eq!(result.content, source);
    assert!(!result.changed);
}

#[test]
fn structural_only_leaves_comments_alone() {
    let engine = builtin_engine(true, false).unwrap();
    let result = engine.process(SAMPLE);

    assert!(result.changed);
    assert!(result.content.contains("/// 创建OpenAI客户端"));
    assert!(result
        .content
        .contains(r#"Message::text(Role::User, "你好")"#));
}

#[test]
fn lexical_only_leaves_constructors_alone() {
    let engine = builtin_engine(false, true).unwrap();
    let result = engine.process(SAMPLE);

    assert!(result.changed);
    assert!(result.content.contains("/// Create OpenAI client"));
    assert!(result.content.contains("..Default::default()"));
}

#[test]
fn empty_input_is_unchanged() {
    let engine = builtin_engine(true, true).unwrap();
    let result = engine.process("");
    assert_eq!(result.content, "");
    assert!(!result.changed);
}
