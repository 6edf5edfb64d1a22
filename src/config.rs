use std::path::PathBuf;

pub const DEFAULT_INPUT_FILE: &str = "musinsa_colors.json";
pub const DEFAULT_OUTPUT_DIR: &str = "color_images";
pub const DEFAULT_START_ID: u64 = 101;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON array of color records.
    pub input_path: PathBuf,
    /// Created if absent. Relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Id given to the first record; each following record gets the next one.
    pub start_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            start_id: DEFAULT_START_ID,
        }
    }
}
