//! Page estimation from line position.

/// Estimate the 1-indexed page of a line from its index among non-empty lines.
///
/// Assumes a fixed number of lines per page; the result is a coarse guess,
/// not derived from real page boundaries. A `lines_per_page` of 0 is treated
/// as 1.
pub fn estimate_page(index: usize, lines_per_page: usize) -> u32 {
    let page = index / lines_per_page.max(1);
    u32::try_from(page).unwrap_or(u32::MAX).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_boundaries() {
        assert_eq!(estimate_page(0, 50), 1);
        assert_eq!(estimate_page(49, 50), 1);
        assert_eq!(estimate_page(50, 50), 2);
        assert_eq!(estimate_page(160, 50), 4);
    }

    #[test]
    fn test_zero_lines_per_page() {
        assert_eq!(estimate_page(3, 0), 4);
    }

    #[test]
    fn test_never_zero_or_wrapping() {
        assert_eq!(estimate_page(usize::MAX, 1), u32::MAX);
    }
}
