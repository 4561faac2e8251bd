use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};

use crate::{FieldError, RawField, parse_field, parse_raw_body, text};

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: the field name is the blank-trimmed text before the first `:`,
/// whatever follows it.
#[test]
fn name_is_trimmed_prefix_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(name: Vec<u8>, rest: Vec<u8>) -> TestResult {
        if name.contains(&b':') {
            return TestResult::discard();
        }
        let mut raw = name.clone();
        raw.push(b':');
        raw.extend_from_slice(&rest);

        let from = name
            .iter()
            .position(|&b| !text::is_whitespace(b))
            .unwrap_or(name.len());
        let to = name
            .iter()
            .rposition(|&b| !text::is_whitespace(b))
            .map_or(from, |i| i + 1);
        let expected: String = name[from..to].iter().map(|&b| char::from(b)).collect();

        let field = parse_field(&raw).unwrap();
        TestResult::from_bool(field.name() == expected && field.delimiter_idx() == name.len())
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}

/// Property: any input without `:` is rejected and carried in the error.
#[test]
fn missing_separator_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(raw: Vec<u8>) -> TestResult {
        if raw.contains(&b':') {
            return TestResult::discard();
        }
        match parse_field(&raw) {
            Err(FieldError::MissingSeparator { raw: carried }) => {
                TestResult::from_bool(carried.as_slice() == raw.as_slice())
            }
            Ok(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

/// Property: scanning a decoded body gives the same result as scanning the
/// raw field it came from.
#[test]
fn decoded_body_matches_raw_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(body: Vec<u8>) -> bool {
        let mut raw = b"X-Test: ".to_vec();
        raw.extend_from_slice(&body);
        let Ok(from_raw) = parse_field(&raw) else {
            return false;
        };
        let decoded = RawField::new("X-Test", text::copy(&body, 0, body.len()));
        parse_raw_body(&from_raw) == parse_raw_body(&decoded)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
