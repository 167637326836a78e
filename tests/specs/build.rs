// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `wordy escape` and `wordy charset`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn escape_prints_literal_pattern() {
    wordy_cmd()
        .args(["escape", "hello world (1+1)"])
        .assert()
        .success()
        .stdout("hello\\ world\\ \\(1\\+1\\)\n");
}

#[test]
fn charset_orders_ranges_then_extras() {
    wordy_cmd()
        .args(["charset", "--lower", "--", "-^_"])
        .assert()
        .success()
        .stdout("[a-z\\-\\^_]\n");
}

#[test]
fn charset_alphanum_reverse() {
    wordy_cmd()
        .args(["charset", "_", "--alphanum", "--digit", "--reverse"])
        .assert()
        .success()
        .stdout("[^0-9a-zA-Z_]\n");
}
