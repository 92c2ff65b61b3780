//! Intensity to character quantization.

use crate::types::Ramp;

/// Map each intensity to its ramp character, keeping raster order.
pub fn quantize<I>(intensities: I, ramp: &Ramp) -> Vec<char>
where
    I: IntoIterator<Item = u8>,
{
    intensities.into_iter().map(|v| ramp.char_for(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_preserves_order() {
        let intensities = [0, 25, 50, 75, 100, 125, 150, 175, 200, 225, 250];
        let chars = quantize(intensities, &Ramp::reference());
        let s: String = chars.into_iter().collect();
        assert_eq!(s, "#?%.S+.*:,@");
    }

    #[test]
    fn test_quantize_bucket_edges() {
        let chars = quantize([24, 25, 249, 255], &Ramp::reference());
        assert_eq!(chars, vec!['#', '?', ',', '@']);
    }

    #[test]
    fn test_quantize_reversed_ramp() {
        let chars = quantize([0, 255], &Ramp::reference().reversed());
        assert_eq!(chars, vec!['@', '#']);
    }

    #[test]
    fn test_quantize_all_intensities_in_bounds() {
        let ramp = Ramp::reference();
        let chars = quantize(0..=255u8, &ramp);
        assert_eq!(chars.len(), 256);
        assert!(chars.iter().all(|c| ramp.chars().contains(c)));
    }

    #[test]
    fn test_quantize_empty() {
        assert!(quantize(std::iter::empty(), &Ramp::reference()).is_empty());
    }
}
