// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates stacking context on an error while keeping its category matchable.

use oops::{AnnotateExt, Annotated, ErrorExt, Sentinel, annotate, chain, sentinel};

fn open_store() -> Result<(), Sentinel> {
    Err(sentinel::PERMISSION_DENIED)
}

fn start() -> Result<(), Annotated<Annotated<Sentinel>>> {
    annotate(open_store, "opening key store").annotate("starting session service")
}

fn main() {
    let Err(err) = start() else {
        return;
    };

    println!("{err}");
    for (depth, cause) in chain(&err).enumerate() {
        println!("  {depth}: {cause}");
    }

    if err.is_sentinel(sentinel::PERMISSION_DENIED) {
        println!("hint: check the service account's file permissions");
    }
}
