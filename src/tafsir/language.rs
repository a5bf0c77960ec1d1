//! Interface language selection and localized user-visible strings

use std::fmt;

/// Interface language, affecting prompt templates and UI text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Arabic (right-to-left)
    #[default]
    Arabic,
    /// English
    English,
}

impl Language {
    /// Parse a language code, defaulting to Arabic for anything unrecognized
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.eq_ignore_ascii_case("en") {
            Self::English
        } else {
            Self::Arabic
        }
    }

    /// The two-letter language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Whether this language renders right-to-left
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Arabic)
    }

    /// The other language
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Arabic => Self::English,
            Self::English => Self::Arabic,
        }
    }

    /// Application title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Arabic => "التفسير الميسر الناطق",
            Self::English => "Smart Facilitated Tafsir",
        }
    }

    /// One-line usage hint shown under the title
    #[must_use]
    pub const fn intro(self) -> &'static str {
        match self {
            Self::Arabic => "اختر السورة والآية للحصول على التفسير الميسر، أو اسأل سؤالاً دينياً.",
            Self::English => "Select a Surah and Verse for Facilitated Tafsir, or ask a question.",
        }
    }

    /// Heading shown above a generated interpretation
    #[must_use]
    pub const fn interpretation_heading(self) -> &'static str {
        match self {
            Self::Arabic => "التفسير الميسر",
            Self::English => "Interpretation",
        }
    }

    /// User-visible message for a failed interpretation request
    #[must_use]
    pub const fn generation_error_message(self) -> &'static str {
        match self {
            Self::Arabic => "حدث خطأ أثناء التفسير. يرجى المحاولة مرة أخرى.",
            Self::English => "An error occurred. Please try again.",
        }
    }

    /// User-visible message for a failed speech request
    #[must_use]
    pub const fn audio_error_message(self) -> &'static str {
        match self {
            Self::Arabic => "حدث خطأ أثناء توليد الصوت.",
            Self::English => "Error generating audio.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_arabic() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("EN"), Language::English);
        assert_eq!(Language::from_code("ar"), Language::Arabic);
        assert_eq!(Language::from_code("fr"), Language::Arabic);
        assert_eq!(Language::from_code(""), Language::Arabic);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Language::Arabic.toggled(), Language::English);
        assert_eq!(Language::Arabic.toggled().toggled(), Language::Arabic);
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert!(Language::Arabic.is_rtl());
        assert!(!Language::English.is_rtl());
    }
}
