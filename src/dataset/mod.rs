//! Restaurant dataset: CSV loading and the immutable in-memory table.
//!
//! The dataset is loaded exactly once at startup and never mutated. Every
//! view reads from it directly; there is no caching or incremental
//! recomputation.

pub mod aggregate;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A single restaurant row, deserialized verbatim from the CSV.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Average Meal Price")]
    pub avg_meal_price: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// Error type for dataset loading failures.
///
/// All variants are fatal: the dataset is a fixed asset bundled with the
/// program, so there is nothing to retry or recover.
#[derive(Debug)]
pub enum DatasetError {
    /// The CSV could not be opened or a record failed to parse.
    Read { path: PathBuf, source: csv::Error },
    /// The file parsed but contained no data rows.
    Empty { path: PathBuf },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Read { path, source } => {
                write!(f, "Failed to read dataset '{}': {}", path.display(), source)
            }
            DatasetError::Empty { path } => {
                write!(f, "Dataset '{}' contains no rows", path.display())
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Read { source, .. } => Some(source),
            DatasetError::Empty { .. } => None,
        }
    }
}

/// The in-memory restaurant table, read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    restaurants: Vec<Restaurant>,
    /// Distinct city names, sorted. The city selector offers exactly these
    /// values, so a city filter can never name an unobserved city.
    cities: Vec<String>,
}

impl Dataset {
    /// Loads the dataset from a CSV file with the expected header row:
    /// City, Cuisine, Rating, Country, Average Meal Price, Latitude,
    /// Longitude, Name (column order does not matter, extras are ignored).
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| DatasetError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut restaurants = Vec::new();
        for record in reader.deserialize() {
            let restaurant: Restaurant = record.map_err(|e| DatasetError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            restaurants.push(restaurant);
        }

        if restaurants.is_empty() {
            return Err(DatasetError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            rows = restaurants.len(),
            path = %path.display(),
            "dataset loaded"
        );

        Ok(Self::from_rows(restaurants))
    }

    /// Builds a dataset from rows already in memory.
    ///
    /// Callers are expected to pass at least one row; `load` enforces this
    /// for the CSV path.
    pub fn from_rows(restaurants: Vec<Restaurant>) -> Self {
        let mut cities: Vec<String> = restaurants.iter().map(|r| r.city.clone()).collect();
        cities.sort();
        cities.dedup();
        Self { restaurants, cities }
    }

    /// All rows, in file order.
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Distinct city names, sorted.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Total row count.
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Rows whose City equals `city` exactly, in file order.
    pub fn filter_by_city(&self, city: &str) -> Vec<&Restaurant> {
        self.restaurants.iter().filter(|r| r.city == city).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "City,Cuisine,Rating,Country,Average Meal Price,Latitude,Longitude,Name";

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_well_formed_csv() {
        let file = write_csv(&[
            HEADER,
            "Paris,French,4.5,France,42.0,48.8,2.3,Le Bistrot",
            "Rome,Italian,4.2,Italy,30.0,41.9,12.5,Trattoria Da Enzo",
            "Paris,Japanese,4.0,France,55.0,48.9,2.4,Sushi Gare",
        ]);

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.cities(), &["Paris".to_string(), "Rome".to_string()]);
    }

    #[test]
    fn filter_by_city_yields_only_matching_rows() {
        let file = write_csv(&[
            HEADER,
            "Paris,French,4.5,France,42.0,48.8,2.3,Le Bistrot",
            "Rome,Italian,4.2,Italy,30.0,41.9,12.5,Trattoria Da Enzo",
            "Paris,Japanese,4.0,France,55.0,48.9,2.4,Sushi Gare",
        ]);
        let dataset = Dataset::load(file.path()).unwrap();

        for city in dataset.cities() {
            let rows = dataset.filter_by_city(city);
            assert!(!rows.is_empty());
            assert!(rows.iter().all(|r| &r.city == city));
        }
        assert_eq!(dataset.filter_by_city("Paris").len(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Dataset::load(Path::new("/nonexistent/rest.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn load_malformed_numeric_field_fails() {
        let file = write_csv(&[
            HEADER,
            "Paris,French,not-a-number,France,42.0,48.8,2.3,Le Bistrot",
        ]);
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn load_missing_column_fails() {
        let file = write_csv(&[
            "City,Cuisine,Rating,Country,Latitude,Longitude,Name",
            "Paris,French,4.5,France,48.8,2.3,Le Bistrot",
        ]);
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn load_header_only_file_fails() {
        let file = write_csv(&[HEADER]);
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty { .. }));
    }

    #[test]
    fn cities_are_sorted_and_distinct() {
        let file = write_csv(&[
            HEADER,
            "Tokyo,Japanese,4.7,Japan,25.0,35.7,139.7,Ichiran",
            "Bangkok,Thai,4.3,Thailand,8.0,13.7,100.5,Som Tam Nua",
            "Tokyo,Ramen,4.4,Japan,12.0,35.6,139.8,Afuri",
        ]);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(
            dataset.cities(),
            &["Bangkok".to_string(), "Tokyo".to_string()]
        );
    }
}
