#![expect(missing_docs)]

use core::fmt::Write;

use rawfield::{parse_field, parse_raw_body};

fn render(raw: &[u8]) -> String {
    let field = parse_field(raw).expect("field has a separator");
    let body = parse_raw_body(&field);
    let mut out = String::new();
    writeln!(out, "name: {:?}", field.name()).unwrap();
    writeln!(out, "value: {:?}", body.value()).unwrap();
    for p in body.params() {
        writeln!(
            out,
            "param: {:?} = {:?} quoted={}",
            p.name(),
            p.value(),
            p.is_quoted()
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_multipart_content_type() {
    let raw = br#"Content-Type: multipart/alternative; boundary="----=_NextPart_000"; charset=us-ascii"#;
    insta::assert_snapshot!(render(raw), @r#"
    name: "Content-Type"
    value: "multipart/alternative"
    param: "boundary" = Some("----=_NextPart_000") quoted=true
    param: "charset" = Some("us-ascii") quoted=false
    "#);
}

#[test]
fn snapshot_damaged_disposition() {
    let raw = br#"Content-Disposition: attachment; filename="weird \"name\"; v2.txt"; size; =orphan"#;
    insta::assert_snapshot!(render(raw), @r#"
    name: "Content-Disposition"
    value: "attachment"
    param: "filename" = Some("weird \"name\"; v2.txt") quoted=true
    param: "size" = None quoted=false
    param: "" = Some("orphan") quoted=false
    "#);
}

#[test]
fn snapshot_unterminated_quote() {
    let raw = b"Content-Type: text/plain; name=\"open; charset=utf-8";
    insta::assert_snapshot!(render(raw), @r#"
    name: "Content-Type"
    value: "text/plain"
    param: "name" = Some("\"open; charset=utf-8") quoted=false
    "#);
}
