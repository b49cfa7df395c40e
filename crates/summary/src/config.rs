//! Summary configuration.

/// Configuration for the water-year summary table.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    first_water_year: i32,
    last_water_year: i32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            first_water_year: 1970,
            last_water_year: 2019,
        }
    }
}

impl SummaryConfig {
    /// Set the inclusive water-year range to aggregate over.
    pub fn with_water_years(mut self, first: i32, last: i32) -> Self {
        self.first_water_year = first;
        self.last_water_year = last;
        self
    }

    /// Returns the first water year of the range.
    pub fn first_water_year(&self) -> i32 {
        self.first_water_year
    }

    /// Returns the last water year of the range.
    pub fn last_water_year(&self) -> i32 {
        self.last_water_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SummaryConfig::default();
        assert_eq!(config.first_water_year(), 1970);
        assert_eq!(config.last_water_year(), 2019);
    }

    #[test]
    fn test_builder() {
        let config = SummaryConfig::default().with_water_years(1950, 2000);
        assert_eq!(config.first_water_year(), 1950);
        assert_eq!(config.last_water_year(), 2000);
    }

    #[test]
    fn test_clone_is_independent() {
        let config1 = SummaryConfig::default().with_water_years(1980, 1990);
        let config2 = config1.clone().with_water_years(1981, 1991);
        assert_eq!(config1.first_water_year(), 1980);
        assert_eq!(config2.first_water_year(), 1981);
    }
}
