mod common;

use aligned_doc::examples::signature::Signature;
use aligned_doc::{docs, nest, text, vcat};
use common::assert_render;

#[test]
fn signature_without_params() {
    assert_render(&Signature::new("main").to_doc(), &["fn main()"]);
}

#[test]
fn signature_one_param() {
    let sig = Signature::new("len").param("s", "&str").returns("usize");
    assert_render(&sig.to_doc(), &["fn len(s: &str) -> usize"]);
}

#[test]
fn signature_params_align() {
    let sig = Signature::new("clamp")
        .param("value", "i64")
        .param("min", "i64")
        .param("max", "i64")
        .returns("i64");
    assert_render(
        &sig.to_doc(),
        &[
            "fn clamp(value: i64,",
            "         min: i64,",
            "         max: i64) -> i64",
        ],
    );
}

#[test]
fn signature_inside_block() {
    let sig = Signature::new("add").param("a", "u8").param("b", "u8");
    let doc = vcat(docs!["impl Math {", nest(4, sig.to_doc().p(";")), "}"]);
    assert_render(
        &doc,
        &[
            "impl Math {",
            "    fn add(a: u8,",
            "           b: u8);",
            "}",
        ],
    );
}

#[test]
fn signature_after_prefix() {
    let sig = Signature::new("f").param("x", "T").param("y", "T");
    let doc = text("pub ").p(sig.to_doc());
    assert_render(&doc, &["pub fn f(x: T,", "         y: T)"]);
}
