/// A destination for rendered output.
///
/// The renderer calls [`write`](Sink::write) once per [`Fragment`](super::Fragment), strictly in
/// order, and never issues a write before the previous one has returned. It does not retry: a
/// sink must either accept all of the bytes or return an error.
pub trait Sink {
    // Forbid the Error type from containing non-static references so that it can be boxed as a
    // `dyn Error`.
    type Error: std::error::Error + 'static;

    /// Write these bytes, returning how many were accepted.
    fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        (**self).write(bytes)
    }
}
