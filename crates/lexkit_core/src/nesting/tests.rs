use super::*;
use crate::TokenType;
use pretty_assertions::assert_eq;

fn tok(value: &str) -> Token {
    Token::new(TokenType::new(1), value)
}

#[test]
fn starts_with_one_empty_frame() {
    let stack = NestingStack::default();
    assert_eq!(stack.level(), 1);
    assert_eq!(stack.pending(), 0);
    assert_eq!(stack.last(), None);
}

#[test]
fn push_pop_is_lifo() {
    let mut stack = NestingStack::default();
    stack.push(tok("a"));
    stack.push(tok("b"));
    assert_eq!(stack.pending(), 2);
    assert_eq!(stack.last(), Some(&tok("b")));
    assert_eq!(stack.pop(), Some(tok("b")));
    assert_eq!(stack.pop(), Some(tok("a")));
    assert_eq!(stack.pop(), None);
}

#[test]
fn levels_isolate_pending_tokens() {
    let mut stack = NestingStack::default();
    stack.push(tok("outer"));
    stack.push_level();
    assert_eq!(stack.level(), 2);
    assert_eq!(stack.pending(), 0);
    stack.push(tok("inner"));
    assert_eq!(stack.pop(), Some(tok("inner")));
    assert_eq!(stack.pop_level(), Ok(()));
    assert_eq!(stack.level(), 1);
    assert_eq!(stack.pop(), Some(tok("outer")));
}

#[test]
fn pop_level_rejects_pending_tokens() {
    let mut stack = NestingStack::default();
    stack.push_level();
    stack.push(tok("x"));
    assert_eq!(
        stack.pop_level(),
        Err(NestingError::PendingTokens { count: 1 })
    );
    // The failed transition leaves the stack untouched.
    assert_eq!(stack.level(), 2);
    assert_eq!(stack.pending(), 1);
}

#[test]
fn pop_level_rejects_base_frame() {
    let mut stack = NestingStack::default();
    assert_eq!(stack.pop_level(), Err(NestingError::NoEnclosingLevel));
    assert_eq!(stack.level(), 1);
}

#[test]
fn error_messages() {
    assert_eq!(
        NestingError::PendingTokens { count: 3 }.to_string(),
        "cannot close nesting level: 3 pending token(s) in the top frame"
    );
    assert_eq!(
        NestingError::NoEnclosingLevel.to_string(),
        "cannot close nesting level: no enclosing level"
    );
}
