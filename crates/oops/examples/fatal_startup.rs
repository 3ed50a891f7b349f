// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Demonstrates the fatal path at startup. Run with `BIND_PORT=abc` to see it terminate.

use oops::{Fatal, try_or_exit};

fn main() {
    tracing_subscriber::fmt().init();

    let raw = std::env::var("BIND_PORT").unwrap_or_else(|_| "8080".to_owned());
    let port: u16 = try_or_exit(|| raw.parse::<u16>(), "parsing BIND_PORT");
    println!("listening on {port}");

    // EX_CONFIG from sysexits.h; no stderr echo since the subscriber already prints.
    let fatal = Fatal::builder().exit_code(78).echo_to_stderr(false).build();
    let workers: usize = fatal.try_or_exit_with(
        || std::env::var("WORKERS").map_or(Ok(4), |w| w.parse::<usize>()),
        |e| format!("WORKERS must be a positive integer: {e}"),
    );
    println!("running {workers} workers");
}
