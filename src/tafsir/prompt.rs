//! Prompt templates for interpretation requests
//!
//! The wording of the queries and system instructions is fixed; only the
//! chapter name, optional verse number, and language vary.

use super::{Language, Surah};

/// Arabic system instruction for the text model
const SYSTEM_INSTRUCTION_AR: &str = "
أنت عالم متخصص في القرآن الكريم وتفسيره.
المستخدم سيطلب منك تفسير آيات أو سور محددة.
المرجع الأساسي لك هو كتاب \"التفسير الميسر\".
- قدم التفسير بأسلوب سهل، واضح، ومباشر، مناسب لجميع القراء.
- اشرح معاني المفردات الصعبة باختصار إذا لزم الأمر.
- ركز على المعنى الإجمالي للآية والهداية المستفادة منها.
- تجنب التفاصيل اللغوية المعقدة أو الخلافات الفقهية.
- كن مهذباً ومحترماً جداً للنص القرآني.
";

/// English system instruction for the text model
const SYSTEM_INSTRUCTION_EN: &str = "
You are a scholar and expert in the interpretation of the Holy Quran, specifically focusing on \"Tafsir Al-Muyassar\" (The Facilitated Interpretation).
Your task is to provide accurate, profound, and accessible interpretations (Tafsir) for verses or chapters requested by the user.
- Adhere to authentic scholarly interpretations (Ahl al-Sunnah wal-Jama'ah).
- Use clear, dignified, and simple English (matching the style of Tafsir Al-Muyassar).
- Avoid complex linguistic or jurisprudential debates unless necessary.
- Focus on the direct meaning and practical guidance of the verses.
";

/// The system instruction for the given language
#[must_use]
pub const fn system_instruction(language: Language) -> &'static str {
    match language {
        Language::Arabic => SYSTEM_INSTRUCTION_AR,
        Language::English => SYSTEM_INSTRUCTION_EN,
    }
}

/// Build the query for a structured chapter/verse selection
#[must_use]
pub fn build_query(surah: &Surah, verse: Option<u32>, language: Language) -> String {
    let name = match language {
        Language::Arabic => surah.name_ar,
        Language::English => surah.name_en,
    };
    let book = match language {
        Language::Arabic => "التفسير الميسر",
        Language::English => "Tafsir Al-Muyassar",
    };

    match (language, verse) {
        (Language::Arabic, Some(verse)) => {
            format!("أريد تفسير الآية رقم {verse} من سورة {name} من كتاب {book}.")
        }
        (Language::Arabic, None) => {
            format!("أريد نبذة وتفسيراً عاماً لسورة {name} من كتاب {book}.")
        }
        (Language::English, Some(verse)) => {
            format!("I want the interpretation of verse number {verse} from Surah {name} using {book}.")
        }
        (Language::English, None) => {
            format!("I want a summary and general interpretation of Surah {name} using {book}.")
        }
    }
}

/// Pass a free-form question through as the query
///
/// Kept as a function so the two input modes share one entry point into the
/// requester.
#[must_use]
pub fn build_question(question: &str) -> String {
    question.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tafsir::surah_by_number;

    #[test]
    fn arabic_general_summary_for_chapter_one() {
        let surah = surah_by_number(1).unwrap();
        let query = build_query(surah, None, Language::Arabic);
        assert_eq!(
            query,
            "أريد نبذة وتفسيراً عاماً لسورة الفاتحة من كتاب التفسير الميسر."
        );
    }

    #[test]
    fn arabic_verse_query_substitutes_number_and_name() {
        let surah = surah_by_number(2).unwrap();
        let query = build_query(surah, Some(255), Language::Arabic);
        assert_eq!(
            query,
            "أريد تفسير الآية رقم 255 من سورة البقرة من كتاب التفسير الميسر."
        );
    }

    #[test]
    fn english_queries_use_english_names() {
        let surah = surah_by_number(36).unwrap();

        let verse = build_query(surah, Some(9), Language::English);
        assert_eq!(
            verse,
            "I want the interpretation of verse number 9 from Surah Ya-Sin using Tafsir Al-Muyassar."
        );

        let summary = build_query(surah, None, Language::English);
        assert_eq!(
            summary,
            "I want a summary and general interpretation of Surah Ya-Sin using Tafsir Al-Muyassar."
        );
    }

    #[test]
    fn free_questions_are_trimmed() {
        assert_eq!(build_question("  ما فضل صلاة الفجر؟ \n"), "ما فضل صلاة الفجر؟");
    }

    #[test]
    fn system_instructions_differ_by_language() {
        assert!(system_instruction(Language::Arabic).contains("التفسير الميسر"));
        assert!(system_instruction(Language::English).contains("Tafsir Al-Muyassar"));
    }
}
