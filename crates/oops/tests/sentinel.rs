// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for the sentinel catalog.

use oops::sentinel::{self, Sentinel};

#[test]
fn descriptions_match_documented_text() {
    let expected = [
        (sentinel::NOT_FOUND, "resource not found"),
        (sentinel::ALREADY_EXISTS, "resource already exists"),
        (sentinel::INVALID_ARGUMENT, "invalid argument"),
        (sentinel::PERMISSION_DENIED, "permission denied"),
        (sentinel::UNAUTHENTICATED, "unauthenticated"),
        (sentinel::TIMEOUT, "operation timed out"),
        (sentinel::RATE_LIMITED, "rate limit exceeded"),
        (sentinel::IO_FAILURE, "input/output operation failed"),
        (sentinel::DATABASE_ERROR, "database operation failed"),
        (sentinel::NETWORK_FAILURE, "network request failed"),
        (sentinel::CONFIG_INVALID, "invalid configuration"),
        (sentinel::CONFLICT, "conflicting operation"),
        (sentinel::PRECONDITION_FAILED, "precondition failed"),
        (sentinel::OUT_OF_RANGE, "value out of range"),
        (sentinel::STATE_INVALID, "invalid state for operation"),
    ];

    assert_eq!(expected.len(), sentinel::ALL.len());
    for (sentinel, description) in expected {
        assert_eq!(sentinel.to_string(), description);
        assert_eq!(sentinel.description(), description);
    }
}

#[test]
fn each_sentinel_equals_only_itself() {
    for (i, a) in sentinel::ALL.iter().enumerate() {
        for (j, b) in sentinel::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn copies_compare_equal() {
    let copy = sentinel::ALREADY_EXISTS;
    assert_eq!(copy, sentinel::ALREADY_EXISTS);
    assert_eq!(Sentinel::from_code("already_exists"), Some(copy));
}

#[test]
fn catalog_codes() {
    let codes: Vec<&str> = sentinel::ALL.iter().map(Sentinel::code).collect();
    insta::assert_snapshot!(codes.join("\n"), @r"
    not_found
    already_exists
    invalid_argument
    permission_denied
    unauthenticated
    timeout
    rate_limited
    io_failure
    database_error
    network_failure
    config_invalid
    conflict
    precondition_failed
    out_of_range
    state_invalid
    ");
}

#[test]
fn application_defined_sentinels() {
    const PAYMENT_DECLINED: Sentinel = Sentinel::new("payment_declined", "payment declined");

    assert_eq!(PAYMENT_DECLINED.to_string(), "payment declined");
    assert!(sentinel::ALL.iter().all(|s| *s != PAYMENT_DECLINED));
    assert_eq!(Sentinel::from_code("payment_declined"), None);
}

#[test]
fn redeclared_sentinel_matches_the_original() {
    const LOOKALIKE: Sentinel = Sentinel::new("not_found", "resource not found");

    assert_eq!(LOOKALIKE, sentinel::NOT_FOUND);
    assert_eq!(Sentinel::from_code(LOOKALIKE.code()), Some(sentinel::NOT_FOUND));
}
