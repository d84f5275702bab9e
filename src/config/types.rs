use serde::Deserialize;

/// Main configuration structure for Article-Scout
///
/// Every field has a documented default mirroring the classic behavior, so a
/// config file only needs to name the values it wants to change.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Minimum whitespace-separated words a paragraph must contain before it
    /// counts toward a page's body estimate. Default: 100.
    #[serde(
        rename = "min-paragraph-words",
        default = "default_min_paragraph_words"
    )]
    pub min_paragraph_words: usize,

    /// Minimum estimated body length (in characters, inclusive) for a link
    /// to be classified as an article. Default: 1000.
    #[serde(rename = "min-article-len", default = "default_min_article_len")]
    pub min_article_len: usize,

    /// Whether links ending in the article suffix are accepted as articles
    /// without any content-length analysis. Default: true.
    #[serde(rename = "auto-accept-pdf", default = "default_auto_accept_pdf")]
    pub auto_accept_pdf: bool,

    /// Path suffix that triggers the auto-accept rule. Default: ".pdf".
    #[serde(rename = "article-suffix", default = "default_article_suffix")]
    pub article_suffix: String,

    /// Path of the CSV file written at the end of a run, created or
    /// overwritten each time. Default: "articles.csv".
    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: String,

    /// Named menu of preset seed URLs offered at the interactive prompt.
    #[serde(default = "default_presets")]
    pub presets: Vec<PresetEntry>,
}

/// One entry in the preset seed menu
#[derive(Debug, Clone, Deserialize)]
pub struct PresetEntry {
    /// Short menu code (matched case-insensitively), e.g. "A"
    pub code: String,

    /// The seed URL this code expands to
    pub url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_paragraph_words: default_min_paragraph_words(),
            min_article_len: default_min_article_len(),
            auto_accept_pdf: default_auto_accept_pdf(),
            article_suffix: default_article_suffix(),
            output_path: default_output_path(),
            presets: default_presets(),
        }
    }
}

fn default_min_paragraph_words() -> usize {
    100
}

fn default_min_article_len() -> usize {
    1000
}

fn default_auto_accept_pdf() -> bool {
    true
}

fn default_article_suffix() -> String {
    ".pdf".to_string()
}

fn default_output_path() -> String {
    "articles.csv".to_string()
}

fn default_presets() -> Vec<PresetEntry> {
    vec![
        PresetEntry {
            code: "A".to_string(),
            url: "https://dgap.org/en/publications".to_string(),
        },
        PresetEntry {
            code: "B".to_string(),
            url: "https://climateandsecurity.org/reports/".to_string(),
        },
        PresetEntry {
            code: "C".to_string(),
            url: "https://ip-quarterly.com".to_string(),
        },
    ]
}

impl Config {
    /// Looks up a preset URL by its menu code, case-insensitively
    pub fn preset_url(&self, code: &str) -> Option<&str> {
        self.presets
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(code))
            .map(|p| p.url.as_str())
    }
}
