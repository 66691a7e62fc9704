use crate::doc::Doc;
use crate::doc_constructors::{comma, hcat, hsep, nest, punctuate, text, vcat};
use crate::docs;
use crate::geometry::Width;

/// How far the elements of a multi-line list or dict are nested.
pub const JSON_INDENT: Width = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Json {
    Null,
    Bool(bool),
    /// Kept as written, so that no precision is lost.
    Number(String),
    String(String),
    List(Vec<Json>),
    Dict(Vec<(String, Json)>),
}

impl Json {
    fn is_scalar(&self) -> bool {
        !matches!(self, Json::List(_) | Json::Dict(_))
    }

    /// Lists of scalars go on one line. Other lists, and all dicts, get one element per line.
    pub fn to_doc(&self) -> Doc {
        self.to_doc_with(true)
    }

    /// Like [`to_doc`](Json::to_doc), but if `inline_scalar_lists` is false then every non-empty
    /// list gets one element per line.
    pub fn to_doc_with(&self, inline_scalar_lists: bool) -> Doc {
        use Json::*;

        let to_doc = |json: &Json| json.to_doc_with(inline_scalar_lists);

        match self {
            Null => text("null"),
            Bool(true) => text("true"),
            Bool(false) => text("false"),
            Number(n) => text(n.as_str()),
            String(s) => quoted(s),
            List(elems) if elems.is_empty() => text("[]"),
            List(elems) if inline_scalar_lists && elems.iter().all(Json::is_scalar) => {
                let elems = punctuate(comma(), elems.iter().map(to_doc));
                hcat(docs!["[", hsep(elems), "]"])
            }
            List(elems) => block("[", elems.iter().map(to_doc), "]"),
            Dict(entries) if entries.is_empty() => text("{}"),
            Dict(entries) => {
                let entries = entries
                    .iter()
                    .map(|(key, value)| quoted(key).p(": ").p(to_doc(value)));
                block("{", entries, "}")
            }
        }
    }
}

fn block(open: &str, elems: impl Iterator<Item = Doc>, close: &str) -> Doc {
    let elems = vcat(punctuate(comma(), elems));
    vcat(docs![open, nest(JSON_INDENT, elems), close])
}

fn quoted(s: &str) -> Doc {
    let mut string = String::with_capacity(s.len() + 2);
    string.push('"');
    for ch in s.chars() {
        match ch {
            '"' => string.push_str("\\\""),
            '\\' => string.push_str("\\\\"),
            '\n' => string.push_str("\\n"),
            '\r' => string.push_str("\\r"),
            '\t' => string.push_str("\\t"),
            ch if ch.is_control() => string.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => string.push(ch),
        }
    }
    string.push('"');
    text(string)
}
