/// Masonry layout math
///
/// The grid is a set of equal-width columns. Every card is `span` rows of
/// `ROW_UNIT` pixels tall (plus the gaps it straddles) and goes into the
/// currently shortest column, so reading each column top to bottom follows
/// the visible order.

/// Height of one grid row in pixels
pub const ROW_UNIT: f32 = 10.0;

/// Space between rows and columns in pixels
pub const GAP: f32 = 24.0;

/// Number of columns that fit in `width` without going under `min_column_width`
pub fn column_count(width: f32, min_column_width: f32) -> usize {
    if !width.is_finite() || min_column_width <= 0.0 {
        return 1;
    }

    let columns = ((width + GAP) / (min_column_width + GAP)).floor();
    (columns as usize).max(1)
}

/// Card height for a row-span, counting the gaps between its rows
pub fn span_height(span: u16) -> f32 {
    let span = f32::from(span.max(1));
    span * ROW_UNIT + (span - 1.0) * GAP
}

/// Place cards into `columns` columns, shortest column first (leftmost on ties).
///
/// Returns the visible indices per column, each in ascending order.
pub fn distribute(spans: &[u16], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut placed: Vec<Vec<usize>> = vec![Vec::new(); columns];
    let mut heights = vec![0.0_f32; columns];

    for (index, &span) in spans.iter().enumerate() {
        let mut shortest = 0;
        for column in 1..columns {
            if heights[column] < heights[shortest] {
                shortest = column;
            }
        }

        placed[shortest].push(index);
        heights[shortest] += span_height(span) + GAP;
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(0.0, 300.0), 1);
        assert_eq!(column_count(299.0, 300.0), 1);
        assert_eq!(column_count(624.0, 300.0), 2);
        assert_eq!(column_count(623.0, 300.0), 1);
        assert_eq!(column_count(1280.0, 300.0), 4);
        assert_eq!(column_count(f32::INFINITY, 300.0), 1);
    }

    #[test]
    fn test_span_height() {
        assert_eq!(span_height(1), 10.0);
        assert_eq!(span_height(15), 15.0 * 10.0 + 14.0 * 24.0);
    }

    #[test]
    fn test_distribute_single_column_keeps_order() {
        let placed = distribute(&[20, 15, 29], 1);
        assert_eq!(placed, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_distribute_fills_shortest_column() {
        // First row goes left to right, then the short column (1) gets the next card
        let placed = distribute(&[29, 15, 20, 15], 3);
        assert_eq!(placed, vec![vec![0], vec![1, 3], vec![2]]);
    }

    #[test]
    fn test_distribute_zero_columns_means_one() {
        let placed = distribute(&[15, 16], 0);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0], vec![0, 1]);
    }

    #[test]
    fn test_distribute_places_every_index_once_in_order() {
        let spans: Vec<u16> = (0..40).map(|i| 15 + (i * 7 % 15) as u16).collect();
        let placed = distribute(&spans, 4);

        let mut all: Vec<usize> = placed.iter().flatten().copied().collect();
        for column in &placed {
            assert!(column.windows(2).all(|w| w[0] < w[1]));
        }
        all.sort_unstable();
        assert_eq!(all, (0..40).collect::<Vec<_>>());
    }
}
