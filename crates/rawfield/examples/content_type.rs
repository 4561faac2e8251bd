//! Splits a handful of header fields and prints their parameters.
//!
//! Run with
//!
//! ```bash
//! cargo run -p rawfield --example content_type
//! ```

use rawfield::{RawFieldParser, parse_field};

const FIELDS: &[&[u8]] = &[
    b"Content-Type: text/plain; charset=\"utf-8\"; format=flowed",
    b"Content-Disposition: attachment;\r\n filename=\"Q3 report; final.pdf\"",
    b"Content-Type: multipart/mixed; boundary=\"----=_Part_12_345\"",
    b"X-Broken header without separator",
];

fn main() {
    let parser = RawFieldParser::DEFAULT;
    for raw in FIELDS {
        let field = match parse_field(raw) {
            Ok(field) => field,
            Err(err) => {
                println!("skipped: {err}");
                continue;
            }
        };
        let body = parser.parse_raw_body(&field);
        println!("{}: {}", field.name(), body.value());
        for param in body.params() {
            let quoted = if param.is_quoted() { " (quoted)" } else { "" };
            match param.value() {
                Some(value) => println!("  {} = {value:?}{quoted}", param.name()),
                None => println!("  {}", param.name()),
            }
        }
    }
}
