//! Dumps BER-TLV encoded data.
//!
//! Provide a sequence of hex strings, each containing BER-TLV encoded data,
//! and you will receive the decoded elements as an indented tree of tags,
//! lengths, and values. With `--unbounded`, the content of constructed
//! values extends to the end of the enclosing value regardless of its
//! length octets.
//!
//! Without any hex strings, a built-in EMV sample is dumped.

use std::env;
use std::process::ExitCode;
use bertlv::Mode;
use bertlv::decode::Options;

const SAMPLE: &str = "911001020304050607080910111213141516\
                      720E1111222222222233334444444444";

fn process_one(arg: &str, options: Options) -> Result<(), String> {
    let data = hex::decode(arg.trim()).map_err(|err| err.to_string())?;
    let mut doc = options.document(data);
    let mut count = 0;
    loop {
        match doc.next_element() {
            Ok(Some(element)) => {
                print!("{}", element);
                count += 1;
            }
            Ok(None) => break,
            Err(err) => {
                return Err(format!(
                    "{} after {} element(s)", err, count
                ))
            }
        }
    }
    println!("{} element(s)", count);
    Ok(())
}

fn main() -> ExitCode {
    let mut options = Options::default();
    let mut args = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--unbounded" {
            options = options.with_mode(Mode::Unbounded);
        }
        else {
            args.push(arg)
        }
    }
    if args.is_empty() {
        args.push(SAMPLE.into());
    }

    let mut res = ExitCode::SUCCESS;
    for arg in args {
        if let Err(err) = process_one(&arg, options) {
            println!("{}: {}.", arg, err);
            res = ExitCode::FAILURE;
        }
    }
    res
}
