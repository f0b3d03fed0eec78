//! Builds a tree from a list of keys and looks one up.
//!
//! Usage:
//!   demo [-v|-vv] [KEY...] [--find KEY]
//!
//! Without keys the tree is built from `10 20 30 15 25` and `15` is looked
//! up. `-v` logs tree operations, `-vv` also logs every rotation.
//!
//! Run:  cargo run --example demo -p avl-tree -- -vv

use avl_tree::AvlTree;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use thiserror::Error;

const DEFAULT_KEYS: [i64; 5] = [10, 20, 30, 15, 25];
const DEFAULT_FIND: i64 = 15;

#[derive(Debug, Error)]
enum DemoError {
    #[error("invalid key {0:?}: {1}")]
    BadKey(String, std::num::ParseIntError),
    #[error("--find requires a key")]
    MissingFind,
}

struct Args {
    level: LevelFilter,
    keys: Vec<i64>,
    find: i64,
}

fn parse_key(s: &str) -> Result<i64, DemoError> {
    s.parse().map_err(|e| DemoError::BadKey(s.to_string(), e))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, DemoError> {
    let mut level = LevelFilter::Warn;
    let mut keys = Vec::new();
    let mut find = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => level = LevelFilter::Debug,
            "-vv" => level = LevelFilter::Trace,
            "--find" => {
                let key = args.next().ok_or(DemoError::MissingFind)?;
                find = Some(parse_key(&key)?);
            }
            _ => keys.push(parse_key(&arg)?),
        }
    }

    if keys.is_empty() {
        keys = DEFAULT_KEYS.to_vec();
    }
    Ok(Args {
        level,
        keys,
        find: find.unwrap_or(DEFAULT_FIND),
    })
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = TermLogger::init(
        args.level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }

    let mut tree = AvlTree::new();
    for &key in &args.keys {
        tree.insert(key);
    }
    println!("{tree}");

    if tree.contains(&args.find) {
        println!("Key {} found in the tree", args.find);
    } else {
        println!("Key {} not found in the tree", args.find);
    }
}
