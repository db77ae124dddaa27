//! Internationalization (i18n) module
//!
//! Picks the UI language and hands it to rust-i18n.
//! Supports English and Chinese Simplified.
//! Note: Log messages remain in English for consistency.

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
}

impl Language {
    /// rust-i18n locale key
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh-CN",
        }
    }

    /// Map a locale tag such as "zh_CN.UTF-8" or "en-US"
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.starts_with("zh") || tag.contains("hans") || tag.contains("chinese") {
            Language::ChineseSimplified
        } else {
            Language::English
        }
    }
}

/// Detect the system language
fn detect_language() -> Language {
    sys_locale::get_locale()
        .map(|tag| Language::from_tag(&tag))
        .unwrap_or_default()
}

/// Set the UI locale, preferring `preferred` over the system locale
pub fn init_locale(preferred: Option<&str>) -> Language {
    let language = match preferred {
        Some(tag) => Language::from_tag(tag),
        None => detect_language(),
    };
    rust_i18n::set_locale(language.locale());
    language
}
