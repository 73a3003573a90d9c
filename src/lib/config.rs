use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub state_filter: String,
}

const RAW_DATA_PATH: &str = "raw_data/population_by_region.xlsx";
const OUTPUT_PATH: &str = "cleaned_data/nsw_sa2_population_2023_24.csv";
const STATE_FILTER: &str = "New South Wales";

impl Config {
    pub fn new(
        source_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
        state_filter: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            state_filter: state_filter.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(RAW_DATA_PATH, OUTPUT_PATH, STATE_FILTER)
    }
}
