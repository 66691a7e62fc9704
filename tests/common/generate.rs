use aligned_doc::{
    blank, empty, hcat, hsep_with, indent, join_with_last, nest, punctuate, text, vcat, Doc,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate random documents of roughly the given size, for checking laws that should hold of
/// every document.
pub struct DocGenerator {
    rng: StdRng,
}

impl DocGenerator {
    pub fn new(seed: u64) -> DocGenerator {
        DocGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn leaf(&mut self) -> Doc {
        match self.rng.gen_range(0..6) {
            0 => empty(),
            1 => blank(),
            2 => text("a"),
            3 => text("bb"),
            4 => text("cccc"),
            5 => text("é"),
            _ => unreachable!(),
        }
    }

    fn items(&mut self, size: u32) -> Vec<Doc> {
        let len = self.rng.gen_range(0..4);
        (0..len).map(|_| self.doc(size / 2)).collect()
    }

    pub fn doc(&mut self, size: u32) -> Doc {
        if size <= 1 {
            return self.leaf();
        }
        let size = size - 1;
        match self.rng.gen_range(0..8) {
            0 => vcat(self.items(size)),
            1 => indent(self.items(size)),
            2 => {
                let left = self.doc(size / 2);
                left.p(self.doc(size / 2))
            }
            3 => {
                let left = self.doc(size / 2);
                let right = self.doc(size / 2);
                left.pp_with(right, self.leaf())
            }
            4 => nest(self.rng.gen_range(0..6), self.doc(size)),
            5 => hcat(self.items(size)),
            6 => hsep_with(self.items(size), text(", ")),
            7 => join_with_last(punctuate(";", self.items(size)), " ", " & "),
            _ => unreachable!(),
        }
    }

    /// A document with no line breaks in it.
    pub fn line(&mut self, size: u32) -> Doc {
        if size <= 1 {
            return self.leaf();
        }
        let left = self.line(size / 2);
        left.p(self.line(size / 2))
    }
}
