/// Width, measured in characters
pub type Width = usize;
/// Column on the current output line, measured in characters. 0-indexed.
pub type Col = usize;

/// The number of columns a literal advances the cursor by: its number of characters (*not* num
/// bytes!). Line breaks are not special; each one counts as a single character.
pub fn str_width(s: &str) -> Width {
    s.chars().count()
}
