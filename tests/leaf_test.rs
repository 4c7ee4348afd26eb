//! Integration tests for the leaf validator catalogue.
//!
//! Covers the predicate semantics, the default messages, and the
//! three-kind outcome contract: `Invalid` for data problems,
//! `Unsupported` for kind mismatches, `Unrecognized` for values outside
//! the engine's model.

use verdict::{
    eq, gt, gte, is, is_in, len_slice, len_string, lt, lte, matches, ne, nonzero, not_in, range,
    rune_count, zero, Error, ErrorKind, Field, FieldPath, Value, Validator,
};

fn check(validator: &impl Validator, value: impl Into<Value>) -> Vec<Error> {
    validator
        .validate(&Field::new("value", value))
        .into_vec()
}

fn sole(validator: &impl Validator, value: impl Into<Value>) -> Error {
    let errs = check(validator, value);
    assert_eq!(errs.len(), 1, "expected exactly one error, got {:?}", errs);
    errs.into_iter().next().unwrap()
}

// ====== nonzero / zero ======

#[test]
fn test_nonzero() {
    let v = nonzero();
    assert!(check(&v, "gopher").is_empty());
    assert!(check(&v, 1).is_empty());
    assert!(check(&v, true).is_empty());
    assert!(check(&v, vec![0]).is_empty());

    for value in [
        Value::from(""),
        Value::from(0),
        Value::from(0u8),
        Value::from(0.0),
        Value::from(false),
        Value::from(Vec::<i64>::new()),
        Value::Nil,
    ] {
        let err = sole(&v, value);
        assert_eq!(err.to_string(), "value: INVALID(is zero valued)");
    }
}

#[test]
fn test_nonzero_unrecognized() {
    let err = sole(&nonzero(), Value::opaque_of::<fn()>());
    assert_eq!(err.kind, ErrorKind::Unrecognized);
    assert_eq!(err.to_string(), "value: UNRECOGNIZED(of an unrecognized type)");
}

#[test]
fn test_zero_is_derived_but_indistinguishable() {
    let v = zero();
    assert!(check(&v, "").is_empty());
    assert!(check(&v, 0).is_empty());

    let err = sole(&v, 5);
    assert_eq!(err.kind, ErrorKind::Invalid);
    assert_eq!(err.message, "is nonzero");

    // Unrecognized propagates through the derivation untouched.
    let err = sole(&v, Value::opaque_of::<fn()>());
    assert_eq!(err.kind, ErrorKind::Unrecognized);
}

// ====== length checks ======

#[test]
fn test_len_string() {
    let v = len_string(1, 5);
    assert!(check(&v, "a").is_empty());
    assert!(check(&v, "abcde").is_empty());

    let err = sole(&v, "");
    assert_eq!(err.to_string(), "value: INVALID(has an invalid length)");
    assert_eq!(sole(&v, "abcdef").message, "has an invalid length");
}

#[test]
fn test_len_string_counts_bytes() {
    // Three characters, nine bytes.
    assert!(check(&len_string(9, 9), "日本語").is_empty());
    assert!(!check(&len_string(3, 3), "日本語").is_empty());
}

#[test]
fn test_len_string_unsupported_on_int() {
    let err = sole(&len_string(1, 2), 5);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert_eq!(
        err.to_string(),
        "value: UNSUPPORTED(cannot use validator `LenString` on int value)"
    );
}

#[test]
fn test_len_slice() {
    let v = len_slice(1, 2);
    assert!(check(&v, vec![1]).is_empty());
    assert!(check(&v, vec![1, 2]).is_empty());
    assert!(check(&v, Value::bytes(*b"ab")).is_empty());

    assert_eq!(sole(&v, Vec::<i64>::new()).message, "has an invalid length");
    assert_eq!(sole(&v, vec![1, 2, 3]).message, "has an invalid length");

    let err = sole(&v, "ab");
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.message.contains("`LenSlice`"));
}

#[test]
fn test_rune_count() {
    let v = rune_count(1, 3);
    assert!(check(&v, "日本語").is_empty());
    assert!(check(&v, Value::bytes("語".as_bytes().to_vec())).is_empty());

    let err = sole(&v, "");
    assert_eq!(
        err.message,
        "the number of runes is not between the given range"
    );
    assert!(!check(&v, "abcd").is_empty());

    let err = sole(&v, 42);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.message.contains("`RuneCount`"));
}

// ====== equality ======

#[test]
fn test_eq() {
    let v = eq("specialty");
    assert!(check(&v, "specialty").is_empty());

    let err = sole(&v, "latte");
    assert_eq!(err.to_string(), "value: INVALID(does not equal the given value)");
}

#[test]
fn test_eq_cross_numeric() {
    assert!(check(&eq(3), 3u8).is_empty());
    assert!(check(&eq(3.0), 3).is_empty());
    assert!(!check(&eq(3), 4.0).is_empty());
}

#[test]
fn test_eq_unsupported_on_kind_mismatch() {
    let err = sole(&eq("foo"), 42);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert_eq!(
        err.to_string(),
        "value: UNSUPPORTED(cannot use validator `Eq` on int value)"
    );
}

#[test]
fn test_ne_is_derived_but_indistinguishable() {
    let v = ne("latte");
    assert!(check(&v, "specialty").is_empty());

    let err = sole(&v, "latte");
    assert_eq!(err.kind, ErrorKind::Invalid);
    assert_eq!(err.message, "equals the given value");

    // The derivation re-tags the mismatch with the validator the caller
    // actually invoked.
    let err = sole(&v, 42);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert_eq!(
        err.to_string(),
        "value: UNSUPPORTED(cannot use validator `Ne` on int value)"
    );
}

// ====== ordering ======

#[test]
fn test_gt() {
    let v = gt(5);
    assert!(check(&v, 6).is_empty());
    assert_eq!(sole(&v, 5).message, "is lower than or equal to the given value");
    assert_eq!(sole(&v, 4).message, "is lower than or equal to the given value");
}

#[test]
fn test_lt() {
    let v = lt(5);
    assert!(check(&v, 4).is_empty());
    assert_eq!(sole(&v, 5).message, "is greater than or equal to the given value");
}

#[test]
fn test_gte_lte_derived() {
    let v = gte(5);
    assert!(check(&v, 5).is_empty());
    assert!(check(&v, 6).is_empty());
    assert_eq!(sole(&v, 4).message, "is lower than the given value");

    let v = lte(5);
    assert!(check(&v, 5).is_empty());
    assert!(check(&v, 4).is_empty());
    assert_eq!(sole(&v, 6).message, "is greater than the given value");
}

#[test]
fn test_ordering_on_strings() {
    assert!(check(&gt("apple"), "banana").is_empty());
    assert!(!check(&lt("apple"), "banana").is_empty());
}

#[test]
fn test_ordering_unsupported() {
    // Booleans are not ordered.
    let err = sole(&gt(5), true);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.message.contains("`Gt`"));

    // Derived leaves name themselves, not the inner positive check.
    let err = sole(&gte(5), "abc");
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert_eq!(
        err.to_string(),
        "value: UNSUPPORTED(cannot use validator `Gte` on string value)"
    );

    let err = sole(&lte(5), "abc");
    assert!(err.message.contains("`Lte`"));
}

#[test]
fn test_range() {
    let v = range(1, 10);
    assert!(check(&v, 1).is_empty());
    assert!(check(&v, 10).is_empty());
    assert!(check(&v, 5).is_empty());

    assert_eq!(sole(&v, 0).message, "is not between the given range");
    assert_eq!(sole(&v, 11).message, "is not between the given range");
}

#[test]
fn test_range_retags_kind_mismatch() {
    let err = sole(&range(1, 10), vec![1]);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert_eq!(
        err.to_string(),
        "value: UNSUPPORTED(cannot use validator `Range` on seq value)"
    );

    let err = sole(&range(1, 10), Value::opaque_of::<fn()>());
    assert_eq!(err.kind, ErrorKind::Unrecognized);
}

// ====== set membership ======

#[test]
fn test_is_in() {
    let v = is_in(["a", "ab", "abc"]);
    assert!(check(&v, "ab").is_empty());

    let err = sole(&v, "x");
    assert_eq!(err.to_string(), "value: INVALID(is not one of the given values)");

    let err = sole(&v, 42);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.message.contains("`In`"));
}

#[test]
fn test_not_in_derived() {
    let v = not_in(["a", "ab"]);
    assert!(check(&v, "x").is_empty());

    let err = sole(&v, "ab");
    assert_eq!(err.message, "is one of the given values");

    let err = sole(&v, 42);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert_eq!(
        err.to_string(),
        "value: UNSUPPORTED(cannot use validator `Nin` on int value)"
    );
}

// ====== pattern match ======

#[test]
fn test_matches() {
    let v = matches(r"^\d+$").unwrap();
    assert!(check(&v, "12345").is_empty());
    assert!(check(&v, Value::bytes(*b"12345")).is_empty());

    let err = sole(&v, "abc");
    assert_eq!(
        err.to_string(),
        "value: INVALID(does not match the given regular expression)"
    );

    let err = sole(&v, 1);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.message.contains("`Match`"));
}

#[test]
fn test_matches_rejects_invalid_pattern() {
    assert!(matches(r"[invalid").is_err());
}

// ====== predicate leaf ======

#[test]
fn test_is_predicate() {
    let even = is(|v: &Value| matches!(v, Value::Int(n) if n % 2 == 0));
    assert!(check(&even, 4).is_empty());

    let err = sole(&even, 3);
    assert_eq!(err.to_string(), "value: INVALID(is invalid)");

    let err = sole(&even, Value::opaque_of::<fn()>());
    assert_eq!(err.kind, ErrorKind::Unrecognized);
}

// ====== message override ======

#[test]
fn test_msg_overrides_default() {
    let err = sole(&nonzero().msg("must be set"), "");
    assert_eq!(err.to_string(), "value: INVALID(must be set)");
}

#[test]
fn test_msg_on_derived_leaf() {
    let err = sole(&ne("latte").msg("try something else"), "latte");
    assert_eq!(err.message, "try something else");
}

#[test]
fn test_msg_does_not_touch_kind_errors() {
    let err = sole(&len_string(1, 2).msg("bad length"), 5);
    assert_eq!(err.kind, ErrorKind::Unsupported);
    assert!(err.message.contains("`LenString`"));
}

#[test]
fn test_anonymous_field_renders_without_prefix() {
    let errs = nonzero().validate(&Field::at(FieldPath::root(), Value::from("")));
    assert_eq!(errs.first().unwrap().to_string(), "INVALID(is zero valued)");
}
