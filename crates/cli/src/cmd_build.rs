// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordy escape` and `wordy charset`: print generated pattern text.

use wordy::CharSet;
use wordy::Pattern;
use wordy::cli::{CharsetArgs, EscapeArgs};
use wordy::error::ExitCode;

pub fn escape(args: &EscapeArgs) -> ExitCode {
    println!("{}", Pattern::literal(&args.text));
    ExitCode::Success
}

pub fn charset(args: &CharsetArgs) -> ExitCode {
    let mut set = CharSet::new(args.extra.as_str());
    if args.digit {
        set = set.digit();
    }
    if args.lower {
        set = set.lower();
    }
    if args.upper {
        set = set.upper();
    }
    if args.alphanum {
        set = set.alphanum();
    }
    if args.reverse {
        set = set.reverse();
    }
    println!("{}", set.build());
    ExitCode::Success
}
