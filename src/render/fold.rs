//! Line folding of the flat character sequence.

/// Split characters into rows of `width` characters. The last row may be
/// shorter. A width of 0 is treated as 1.
pub fn fold_lines(chars: &[char], width: usize) -> Vec<String> {
    let width = width.max(1);
    chars
        .chunks(width)
        .map(|row| row.iter().collect())
        .collect()
}
