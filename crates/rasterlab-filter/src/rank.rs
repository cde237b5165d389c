//! Order-statistic (rank) filtering
//!
//! Replaces each pixel with a per-channel order statistic of its
//! neighbourhood. Channels are reduced independently, so the minimum of a
//! neighbourhood may combine the red of one member with the blue of another.
//! Neighbourhoods are bounded by the grid edges; there is no wraparound and
//! no padding, so sets shrink near the borders.

use crate::error::FilterResult;
use rasterlab_core::Raster;

/// Which order statistic replaces the center pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankFilter {
    /// Per-channel minimum
    Min,
    /// Per-channel median
    Median,
    /// Per-channel maximum
    Max,
}

/// Shape of the neighbourhood gathered around each pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbourhood {
    /// Pixels in the same row within the radius plus pixels in the same
    /// column within the radius (a cross; the center is gathered by both
    /// arms)
    CityBlock,
    /// All pixels with both row and column offsets within the radius
    /// (a square)
    ChessBoard,
}

impl Neighbourhood {
    /// Collect the channel values of the neighbourhood of (i, j).
    fn gather(
        self,
        raster: &Raster,
        i: usize,
        j: usize,
        size: usize,
        channel: fn(&rasterlab_core::Pixel) -> u8,
    ) -> Vec<u8> {
        let height = raster.height() as i64;
        let width = raster.width() as i64;
        let (i, j) = (i as i64, j as i64);
        let size = size as i64;
        let mut values = Vec::new();

        match self {
            Neighbourhood::CityBlock => {
                for dj in -size..=size {
                    if (0..width).contains(&(j + dj)) {
                        if let Some(p) = raster.get(i as usize, (j + dj) as usize) {
                            values.push(channel(p));
                        }
                    }
                }
                for di in -size..=size {
                    if (0..height).contains(&(i + di)) {
                        if let Some(p) = raster.get((i + di) as usize, j as usize) {
                            values.push(channel(p));
                        }
                    }
                }
            }
            Neighbourhood::ChessBoard => {
                for di in -size..=size {
                    for dj in -size..=size {
                        if (0..height).contains(&(i + di)) && (0..width).contains(&(j + dj)) {
                            if let Some(p) = raster.get((i + di) as usize, (j + dj) as usize) {
                                values.push(channel(p));
                            }
                        }
                    }
                }
            }
        }

        values
    }
}

impl RankFilter {
    /// Reduce one channel's gathered values to a single value.
    ///
    /// The gather is never empty: the center pixel is always a member.
    fn reduce(self, mut values: Vec<u8>) -> u8 {
        match self {
            RankFilter::Min => values.iter().copied().min().unwrap_or(0),
            RankFilter::Max => values.iter().copied().max().unwrap_or(0),
            RankFilter::Median => {
                values.sort_unstable();
                let n = values.len();
                if n == 0 {
                    0
                } else if n % 2 == 1 {
                    values[n / 2]
                } else {
                    // Even count: integer average of the two middle values
                    ((u16::from(values[n / 2 - 1]) + u16::from(values[n / 2])) / 2) as u8
                }
            }
        }
    }
}

/// Apply an order-statistic filter of the given neighbourhood and radius.
///
/// Every neighbourhood is gathered from the pre-filter grid; the filtered
/// grid is built off to the side and swapped in, so a filtered value never
/// contaminates a later lookup. Color channels are filtered, alpha is kept.
///
/// Radius 0 leaves the raster unchanged under both topologies.
pub fn rank_filter(
    raster: &mut Raster,
    filter: RankFilter,
    neighbourhood: Neighbourhood,
    size: usize,
) -> FilterResult<()> {
    let mut rows = Vec::with_capacity(raster.height());
    for i in 0..raster.height() {
        let mut row = Vec::with_capacity(raster.width());
        for j in 0..raster.width() {
            let mut pixel = match raster.get(i, j) {
                Some(p) => *p,
                None => continue,
            };
            let red = filter.reduce(neighbourhood.gather(raster, i, j, size, |p| p.red));
            let green = filter.reduce(neighbourhood.gather(raster, i, j, size, |p| p.green));
            let blue = filter.reduce(neighbourhood.gather(raster, i, j, size, |p| p.blue));
            pixel.overwrite(red, green, blue);
            row.push(pixel);
        }
        rows.push(row);
    }
    raster.replace_rows(rows)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterlab_core::Pixel;

    fn coded(height: usize, width: usize) -> Raster {
        let rows = (0..height)
            .map(|i| {
                (0..width)
                    .map(|j| Pixel::rgb((10 * i + j) as u8, 0, 0))
                    .collect()
            })
            .collect();
        Raster::from_rows(rows).unwrap()
    }

    #[test]
    fn test_size_zero_is_identity() {
        let original = coded(3, 3);
        for filter in [RankFilter::Min, RankFilter::Median, RankFilter::Max] {
            for neighbourhood in [Neighbourhood::CityBlock, Neighbourhood::ChessBoard] {
                let mut r = original.clone();
                rank_filter(&mut r, filter, neighbourhood, 0).unwrap();
                assert_eq!(r, original);
            }
        }
    }

    #[test]
    fn test_chessboard_min_and_max() {
        let mut r = coded(3, 3);
        rank_filter(&mut r, RankFilter::Min, Neighbourhood::ChessBoard, 1).unwrap();
        // Center sees the full square; minimum red is at (0, 0)
        assert_eq!(r.get(1, 1).unwrap().red, 0);
        // Corner (2, 2) sees the 2x2 block with minimum at (1, 1)
        assert_eq!(r.get(2, 2).unwrap().red, 11);

        let mut r = coded(3, 3);
        rank_filter(&mut r, RankFilter::Max, Neighbourhood::ChessBoard, 1).unwrap();
        assert_eq!(r.get(1, 1).unwrap().red, 22);
        assert_eq!(r.get(0, 0).unwrap().red, 11);
    }

    #[test]
    fn test_cityblock_excludes_diagonals() {
        let mut rows = vec![vec![Pixel::rgb(100, 0, 0); 3]; 3];
        rows[0][0] = Pixel::rgb(0, 0, 0); // diagonal of the center
        let mut r = Raster::from_rows(rows).unwrap();
        rank_filter(&mut r, RankFilter::Min, Neighbourhood::CityBlock, 1).unwrap();
        // The cross around (1, 1) never sees the (0, 0) outlier
        assert_eq!(r.get(1, 1).unwrap().red, 100);
        // But (0, 1) and (1, 0) do
        assert_eq!(r.get(0, 1).unwrap().red, 0);
        assert_eq!(r.get(1, 0).unwrap().red, 0);
    }

    #[test]
    fn test_median_removes_impulse() {
        let mut rows = vec![vec![Pixel::rgb(50, 50, 50); 3]; 3];
        rows[1][1] = Pixel::rgb(255, 0, 255);
        let mut r = Raster::from_rows(rows).unwrap();
        rank_filter(&mut r, RankFilter::Median, Neighbourhood::ChessBoard, 1).unwrap();
        // 9 samples, 8 of them 50: the impulse is voted out
        assert_eq!(r.get(1, 1).unwrap(), &Pixel::rgb(50, 50, 50));
    }

    #[test]
    fn test_median_even_count_averages_middles() {
        // 1x2 grid, city-block radius 1 at (0, 0) gathers the row pair plus
        // the center again from the column arm: {10, 30, 10} -> median 10.
        // Chess board at (0, 0) gathers {10, 30} -> (10 + 30) / 2 = 20.
        let rows = vec![vec![Pixel::rgb(10, 0, 0), Pixel::rgb(30, 0, 0)]];
        let mut r = Raster::from_rows(rows.clone()).unwrap();
        rank_filter(&mut r, RankFilter::Median, Neighbourhood::CityBlock, 1).unwrap();
        assert_eq!(r.get(0, 0).unwrap().red, 10);

        let mut r = Raster::from_rows(rows).unwrap();
        rank_filter(&mut r, RankFilter::Median, Neighbourhood::ChessBoard, 1).unwrap();
        assert_eq!(r.get(0, 0).unwrap().red, 20);
    }

    #[test]
    fn test_channels_reduce_independently() {
        let rows = vec![vec![Pixel::rgb(10, 200, 0), Pixel::rgb(200, 10, 0)]];
        let mut r = Raster::from_rows(rows).unwrap();
        rank_filter(&mut r, RankFilter::Min, Neighbourhood::ChessBoard, 1).unwrap();
        // Minimum red and minimum green come from different neighbours
        assert_eq!(r.get(0, 0).unwrap(), &Pixel::rgb(10, 10, 0));
    }

    #[test]
    fn test_reads_pre_filter_grid() {
        // A left-to-right max sweep that read its own output would smear the
        // peak across the whole row.
        let rows = vec![vec![
            Pixel::rgb(200, 0, 0),
            Pixel::rgb(0, 0, 0),
            Pixel::rgb(0, 0, 0),
            Pixel::rgb(0, 0, 0),
        ]];
        let mut r = Raster::from_rows(rows).unwrap();
        rank_filter(&mut r, RankFilter::Max, Neighbourhood::ChessBoard, 1).unwrap();
        assert_eq!(r.get(0, 1).unwrap().red, 200);
        assert_eq!(r.get(0, 2).unwrap().red, 0);
        assert_eq!(r.get(0, 3).unwrap().red, 0);
    }

    #[test]
    fn test_rank_preserves_alpha() {
        let mut r = Raster::filled(2, 2, Pixel::new(9, 9, 9, 33)).unwrap();
        rank_filter(&mut r, RankFilter::Max, Neighbourhood::CityBlock, 1).unwrap();
        assert_eq!(r.get(0, 0).unwrap().alpha, 33);
    }
}
