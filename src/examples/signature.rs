use crate::doc::Doc;
use crate::doc_constructors::{comma, empty, hcat, indent, punctuate, text};
use crate::docs;

/// A function signature, like you might print when generating source code. Parameters after the
/// first line up under the first one:
///
/// ```text
/// fn clamp(value: i64,
///          min: i64,
///          max: i64) -> i64
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    /// Name and type of each parameter.
    pub params: Vec<(String, String)>,
    pub ret: Option<String>,
}

impl Signature {
    pub fn new(name: impl Into<String>) -> Signature {
        Signature {
            name: name.into(),
            params: Vec::new(),
            ret: None,
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Signature {
        self.params.push((name.into(), ty.into()));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Signature {
        self.ret = Some(ty.into());
        self
    }

    pub fn to_doc(&self) -> Doc {
        let params = self
            .params
            .iter()
            .map(|(name, ty)| text(format!("{}: {}", name, ty)));
        let ret = match &self.ret {
            Some(ty) => text(" -> ").p(ty),
            None => empty(),
        };
        hcat(docs![
            text("fn ").p(&self.name),
            "(",
            indent(punctuate(comma(), params)),
            ")",
            ret,
        ])
    }
}
