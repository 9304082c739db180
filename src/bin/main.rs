extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate haybench;
extern crate shlex;

use std::env;

use clap::Parser;
use haybench::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    std::process::exit(real_main());
}

fn parse_args() -> Options {
    let mut args = Vec::new();

    args.push(
        env::args()
            .next()
            .expect("argv should start with the application name"),
    );
    args.extend(
        env::var("HAYBENCH_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    Options::parse_from(args)
}

fn real_main() -> i32 {
    let opts = parse_args();

    let pattern = match Pattern::new(opts.pattern.as_bytes()) {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return 1;
        }
    };

    let buffer = match load(&opts.input) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return 1;
        }
    };

    println!("Scanning {} bytes", buffer.len());

    let registry = default_registry(&pattern);
    run_all(&registry, &buffer, |result| {
        let status = if result.status.is_done() { "DONE" } else { "ERROR" };
        println!(
            "[{:>24}: {:>8} hit {:>12}] time: {:>10.3} ms",
            result.name, status, result.hits, result.elapsed_ms
        );
        if let RunStatus::Failed(message) = &result.status {
            eprintln!("ERROR: {}: {message}", result.name);
        }
    });

    if opts.check {
        return check_counts(&registry, &buffer, &pattern);
    }

    0
}

fn check_counts(registry: &[StrategyDescriptor], buffer: &ByteBuffer, pattern: &Pattern) -> i32 {
    match verify_counts(registry, buffer, pattern) {
        Ok(mismatches) if mismatches.is_empty() => {
            info!("hit counts agree with the nested reference scan");
            0
        }
        Ok(mismatches) => {
            for mismatch in &mismatches {
                eprintln!(
                    "ERROR: {} reported {} hits, expected {}",
                    mismatch.name, mismatch.hits, mismatch.expected
                );
            }
            1
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            1
        }
    }
}
