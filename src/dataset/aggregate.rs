//! Read-only aggregations over the dataset.
//!
//! Every chart and the map viewport recompute from the full table on each
//! render cycle. At the expected scale (a few thousand rows) this is a
//! single cheap pass, so there is no caching layer.

use super::{Dataset, Restaurant};

/// Number of bins in the rating histogram.
///
/// Fixed by design; the bin edges adapt to the observed rating range, so
/// other rating scales still bin correctly, just always into five buckets.
pub const RATING_BINS: usize = 5;

/// Latitudinal span of the map viewport when zoomed to a city.
pub const CITY_SPAN_LAT: f64 = 0.5;

/// Latitudinal span of the map viewport when showing the whole dataset.
pub const WORLD_SPAN_LAT: f64 = 180.0;

/// Restaurant count for one cuisine.
#[derive(Debug, Clone, PartialEq)]
pub struct CuisineCount {
    pub cuisine: String,
    pub count: usize,
}

/// Mean meal price for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryPrice {
    pub country: String,
    pub mean_price: f64,
}

/// One bin of the rating histogram: `low <= rating < high` (the last bin
/// is closed on both ends).
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBin {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

/// Map viewport: center and latitudinal span. The longitudinal span is
/// derived from the render area's aspect ratio at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub latitude: f64,
    pub longitude: f64,
    pub span_lat: f64,
}

/// Counts rows per distinct cuisine, descending by count.
///
/// Ties break by cuisine name so the chart order is deterministic.
pub fn cuisine_counts(dataset: &Dataset) -> Vec<CuisineCount> {
    let mut counts: Vec<CuisineCount> = Vec::new();
    for restaurant in dataset.restaurants() {
        match counts.iter_mut().find(|c| c.cuisine == restaurant.cuisine) {
            Some(entry) => entry.count += 1,
            None => counts.push(CuisineCount {
                cuisine: restaurant.cuisine.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.cuisine.cmp(&b.cuisine)));
    counts
}

/// Mean of Average Meal Price grouped by country, non-increasing by mean.
pub fn avg_price_by_country(dataset: &Dataset) -> Vec<CountryPrice> {
    let mut sums: Vec<(String, f64, usize)> = Vec::new();
    for restaurant in dataset.restaurants() {
        match sums.iter_mut().find(|(c, _, _)| c == &restaurant.country) {
            Some((_, sum, n)) => {
                *sum += restaurant.avg_meal_price;
                *n += 1;
            }
            None => sums.push((restaurant.country.clone(), restaurant.avg_meal_price, 1)),
        }
    }

    let mut prices: Vec<CountryPrice> = sums
        .into_iter()
        .map(|(country, sum, n)| CountryPrice {
            country,
            mean_price: sum / n as f64,
        })
        .collect();
    prices.sort_by(|a, b| {
        b.mean_price
            .partial_cmp(&a.mean_price)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.country.cmp(&b.country))
    });
    prices
}

/// Frequency histogram of ratings with [`RATING_BINS`] equal-width bins
/// over the observed min..max range.
///
/// If all ratings are equal the range is degenerate and every row lands in
/// the first bin.
pub fn rating_histogram(dataset: &Dataset) -> Vec<RatingBin> {
    let ratings: Vec<f64> = dataset.restaurants().iter().map(|r| r.rating).collect();
    if ratings.is_empty() {
        // The loader rejects empty datasets; this keeps the bins finite anyway.
        return Vec::new();
    }
    let min = ratings.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / RATING_BINS as f64;

    let mut bins: Vec<RatingBin> = (0..RATING_BINS)
        .map(|i| RatingBin {
            low: min + width * i as f64,
            high: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for rating in ratings {
        let idx = if width > 0.0 {
            (((rating - min) / width) as usize).min(RATING_BINS - 1)
        } else {
            0
        };
        bins[idx].count += 1;
    }
    bins
}

/// Computes the map viewport for a filtered subset.
///
/// Center is the mean lat/long of the subset at city zoom; an empty subset
/// falls back to the mean over the whole dataset at world zoom.
pub fn map_viewport(dataset: &Dataset, subset: &[&Restaurant]) -> MapViewport {
    if subset.is_empty() {
        let (latitude, longitude) = mean_position(dataset.restaurants().iter());
        MapViewport {
            latitude,
            longitude,
            span_lat: WORLD_SPAN_LAT,
        }
    } else {
        let (latitude, longitude) = mean_position(subset.iter().copied());
        MapViewport {
            latitude,
            longitude,
            span_lat: CITY_SPAN_LAT,
        }
    }
}

fn mean_position<'a>(rows: impl Iterator<Item = &'a Restaurant>) -> (f64, f64) {
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;
    let mut n = 0usize;
    for row in rows {
        lat_sum += row.latitude;
        lon_sum += row.longitude;
        n += 1;
    }
    if n == 0 {
        (0.0, 0.0)
    } else {
        (lat_sum / n as f64, lon_sum / n as f64)
    }
}
