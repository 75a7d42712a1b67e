//! Internationalization module
//!
//! Provides labels in Portuguese (pt) and English (en) for reports,
//! exported column headers and the interactive session.
//! Supports automatic language detection based on system locale.

mod en;
mod pt;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language. Unsupported codes fall back to English.
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            Self::detect_system_language()
        } else {
            lang.to_string()
        };

        let (code, translations) = match lang.as_str() {
            "pt" => ("pt", pt::get_translations()),
            _ => ("en", en::get_translations()),
        };
        self.current_lang = code.to_string();
        self.translations = translations;

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string and replace `{name}` placeholders
    pub fn format<V: AsRef<str>>(&self, key: &str, args: &[(&str, V)]) -> String {
        args.iter().fold(self.get(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value.as_ref())
        })
    }

    /// Get all translations
    pub fn get_all(&self) -> HashMap<String, String> {
        self.translations.clone()
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("pt", "Portugu\u{00EA}s")]
    }

    /// Detect system language
    fn detect_system_language() -> String {
        Self::language_from_env(|name| std::env::var(name).ok())
    }

    /// Pick the language from locale variables, in POSIX precedence order.
    /// Empty variables are skipped.
    fn language_from_env<F: Fn(&str) -> Option<String>>(var: F) -> String {
        let lang_env = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| var(name))
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| "en".to_string());

        // Extract language code (e.g., "pt_PT.UTF-8" -> "pt")
        let lang_code = lang_env
            .split('_')
            .next()
            .unwrap_or("en")
            .split('.')
            .next()
            .unwrap_or("en");

        match lang_code {
            "pt" => "pt".to_string(),
            _ => "en".to_string(),
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}
