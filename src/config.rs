use std::path::PathBuf;

pub const DEFAULT_TEMPLATE_KEY: &str = "template";
pub const DEFAULT_OUTPUT_KEY: &str = "output";
pub const DEFAULT_TITLE_KEY: &str = "title";
pub const DEFAULT_DATE_KEY: &str = "date";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

/// Settings the parser needs from the surrounding site generator.
///
/// Key names are opaque to the parser: they only decide which fields are
/// looked up and which ones get deduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub content_root: PathBuf,
    pub template_key: String,
    pub output_key: String,
    pub title_key: String,
    pub date_key: String,
    pub output_extension: String,
}

impl Config {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            template_key: DEFAULT_TEMPLATE_KEY.to_string(),
            output_key: DEFAULT_OUTPUT_KEY.to_string(),
            title_key: DEFAULT_TITLE_KEY.to_string(),
            date_key: DEFAULT_DATE_KEY.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }

    pub fn with_template_key(mut self, key: impl Into<String>) -> Self {
        self.template_key = key.into();
        self
    }

    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = key.into();
        self
    }

    pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
        self.title_key = key.into();
        self
    }

    pub fn with_date_key(mut self, key: impl Into<String>) -> Self {
        self.date_key = key.into();
        self
    }

    /// `".html"` and `"html"` are the same extension.
    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        self.output_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Keys every record must resolve before it can be rendered.
    pub fn required_keys(&self) -> [&str; 2] {
        [&self.template_key, &self.output_key]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}
