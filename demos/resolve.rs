//! Resolves each line of stdin against the base URI given as the first argument.

use refuri::Uri;
use std::{env, io, process};

fn main() {
    let Some(base) = env::args().nth(1) else {
        eprintln!("usage: resolve <base>");
        process::exit(2);
    };
    let base = Uri::parse(&base);

    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        println!("{}", base.merge(line.as_str()));
    }
}
