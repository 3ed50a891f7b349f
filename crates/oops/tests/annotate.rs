// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for `annotate` and `AnnotateExt`.

use std::error::Error as StdError;

use oops::{AnnotateExt, Annotated, ErrorExt, Sentinel, annotate, sentinel};

#[test]
fn success_produces_no_error() {
    let result = annotate(|| Ok::<(), Sentinel>(()), "loading config");
    assert!(result.is_ok());
}

#[test]
fn message_is_context_colon_original() {
    for original in sentinel::ALL {
        let err = annotate(|| Err(*original), "loading config").unwrap_err();
        assert_eq!(err.to_string(), format!("loading config: {}", original.description()));
    }
}

#[test]
fn category_survives_annotation() {
    let err = annotate(|| Err(sentinel::PERMISSION_DENIED), "writing audit log").unwrap_err();

    assert!(err.is_sentinel(sentinel::PERMISSION_DENIED));
    assert_eq!(err.sentinel(), Some(sentinel::PERMISSION_DENIED));
    for other in sentinel::ALL.iter().filter(|s| **s != sentinel::PERMISSION_DENIED) {
        assert!(!err.is_sentinel(*other));
    }
}

#[test]
fn nested_annotations_stack_outermost_first() {
    let inner = annotate(|| Err(sentinel::DATABASE_ERROR), "querying orders");
    let outer = inner.annotate("rendering dashboard").unwrap_err();

    assert_eq!(outer.to_string(), "rendering dashboard: querying orders: database operation failed");
    assert!(outer.is_sentinel(sentinel::DATABASE_ERROR));
    assert_eq!(outer.root_cause().to_string(), "database operation failed");
    assert_eq!(outer.find_source::<Annotated<Sentinel>>().map(Annotated::message), Some("querying orders"));
}

#[test]
fn boxed_annotation_still_matches() {
    let err: Box<dyn StdError + Send + Sync> = Box::new(Annotated::new("syncing", sentinel::NETWORK_FAILURE));

    assert!(err.is_sentinel(sentinel::NETWORK_FAILURE));
    assert_eq!(err.to_string(), "syncing: network request failed");
}

#[test]
fn annotating_foreign_errors() {
    let parse = "abc".parse::<u32>();
    let err = parse.annotate("reading PORT").unwrap_err();

    assert!(err.to_string().starts_with("reading PORT: "));
    assert_eq!(err.sentinel(), None);
    assert!(err.source().unwrap().is::<std::num::ParseIntError>());
}

fn load_settings() -> Result<(), Box<dyn StdError + Send + Sync>> {
    Err(sentinel::CONFIG_INVALID.into())
}

fn start_service() -> Result<(), Box<dyn StdError + Send + Sync>> {
    annotate(load_settings, "loading settings")?;
    Ok(())
}

#[test]
fn annotating_boxed_dyn_errors() {
    let err = annotate(load_settings, "loading settings").unwrap_err();

    assert_eq!(err.to_string(), "loading settings: invalid configuration");
    assert!(err.is_sentinel(sentinel::CONFIG_INVALID));
    assert_eq!(err.root_cause().to_string(), "invalid configuration");
}

#[test]
fn annotated_boxed_error_propagates_with_question_mark() {
    let err = start_service().annotate("starting service").unwrap_err();

    assert_eq!(err.to_string(), "starting service: loading settings: invalid configuration");
    assert!(err.is_sentinel(sentinel::CONFIG_INVALID));
    assert!(err.find_source::<Annotated<Box<dyn StdError + Send + Sync>>>().is_some());
}
