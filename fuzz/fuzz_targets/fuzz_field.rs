#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rawfield::{ParserCursor, RawField, RawFieldParser, text};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    raw: &'a [u8],
    start: u8,
    delimiters: &'a [u8],
}

fn run(input: Input<'_>) {
    let parser = RawFieldParser::DEFAULT;

    match parser.parse_field(input.raw) {
        Ok(field) => {
            let body = parser.parse_raw_body(&field);
            let decoded = RawField::new(field.name(), field.body().into_owned());
            // The decoded body may have lost a leading space. Both scans trim
            // the principal value, so the results must agree.
            assert_eq!(body, parser.parse_raw_body(&decoded));
        }
        Err(err) => assert!(text::index_of(err.raw(), b':').is_none()),
    }

    let start = usize::from(input.start).min(input.raw.len());
    let mut cursor = ParserCursor::new(start, input.raw.len());
    let mut last = cursor.pos();
    while !cursor.at_end() {
        let _ = parser.parse_parameter_with(input.raw, &mut cursor, input.delimiters);
        assert!(cursor.is_consistent());
        assert!(cursor.pos() > last, "no progress at {cursor}");
        last = cursor.pos();
    }
}

fuzz_target!(|input: Input<'_>| run(input));
