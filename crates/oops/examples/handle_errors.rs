// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates `catch`: keep going with a default value and record what went wrong.

use oops::{CatchExt, ErrorExt, Sentinel, catch, sentinel};

fn cached_score(player: &str) -> Result<u32, Sentinel> {
    match player {
        "ada" => Ok(1200),
        "bob" => Err(sentinel::TIMEOUT),
        _ => Err(sentinel::NOT_FOUND),
    }
}

fn main() {
    let mut misses = Vec::new();

    for player in ["ada", "bob", "eve"] {
        let score = catch(|| cached_score(player), |e| misses.push((player, e)));
        println!("{player}: {score}");
    }

    let retryable = misses.iter().filter(|(_, e)| e.is_sentinel(sentinel::TIMEOUT)).count();
    println!("{} misses, {retryable} worth retrying", misses.len());

    let fallback = "not a number".parse::<u32>().or_handle(|e| eprintln!("ignoring bad override: {e}"));
    println!("override: {fallback}");
}
