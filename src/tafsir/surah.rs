//! Static catalog of the 114 chapters of the Quran

/// A chapter of the Quran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    /// Chapter number (1-based)
    pub number: u16,
    /// Arabic name
    pub name_ar: &'static str,
    /// English name (transliterated)
    pub name_en: &'static str,
}

/// Look up a chapter by its 1-based number
#[must_use]
pub fn surah_by_number(number: u16) -> Option<&'static Surah> {
    // Numbering is contiguous, so index directly
    SURAHS.get(usize::from(number.checked_sub(1)?))
}

/// All 114 chapters in canonical order
pub static SURAHS: [Surah; 114] = [
    Surah { number: 1, name_ar: "الفاتحة", name_en: "Al-Fatiha" },
    Surah { number: 2, name_ar: "البقرة", name_en: "Al-Baqarah" },
    Surah { number: 3, name_ar: "آل عمران", name_en: "Aal-Imran" },
    Surah { number: 4, name_ar: "النساء", name_en: "An-Nisa" },
    Surah { number: 5, name_ar: "المائدة", name_en: "Al-Ma'idah" },
    Surah { number: 6, name_ar: "الأنعام", name_en: "Al-An'am" },
    Surah { number: 7, name_ar: "الأعراف", name_en: "Al-A'raf" },
    Surah { number: 8, name_ar: "الأنفال", name_en: "Al-Anfal" },
    Surah { number: 9, name_ar: "التوبة", name_en: "At-Tawbah" },
    Surah { number: 10, name_ar: "يونس", name_en: "Yunus" },
    Surah { number: 11, name_ar: "هود", name_en: "Hud" },
    Surah { number: 12, name_ar: "يوسف", name_en: "Yusuf" },
    Surah { number: 13, name_ar: "الرعد", name_en: "Ar-Ra'd" },
    Surah { number: 14, name_ar: "إبراهيم", name_en: "Ibrahim" },
    Surah { number: 15, name_ar: "الحجر", name_en: "Al-Hijr" },
    Surah { number: 16, name_ar: "النحل", name_en: "An-Nahl" },
    Surah { number: 17, name_ar: "الإسراء", name_en: "Al-Isra" },
    Surah { number: 18, name_ar: "الكهف", name_en: "Al-Kahf" },
    Surah { number: 19, name_ar: "مريم", name_en: "Maryam" },
    Surah { number: 20, name_ar: "طه", name_en: "Taha" },
    Surah { number: 21, name_ar: "الأنبياء", name_en: "Al-Anbiya" },
    Surah { number: 22, name_ar: "الحج", name_en: "Al-Hajj" },
    Surah { number: 23, name_ar: "المؤمنون", name_en: "Al-Mu'minun" },
    Surah { number: 24, name_ar: "النور", name_en: "An-Nur" },
    Surah { number: 25, name_ar: "الفرقان", name_en: "Al-Furqan" },
    Surah { number: 26, name_ar: "الشعراء", name_en: "Ash-Shu'ara" },
    Surah { number: 27, name_ar: "النمل", name_en: "An-Naml" },
    Surah { number: 28, name_ar: "القصص", name_en: "Al-Qasas" },
    Surah { number: 29, name_ar: "العنكبوت", name_en: "Al-Ankabut" },
    Surah { number: 30, name_ar: "الروم", name_en: "Ar-Rum" },
    Surah { number: 31, name_ar: "لقمان", name_en: "Luqman" },
    Surah { number: 32, name_ar: "السجدة", name_en: "As-Sajdah" },
    Surah { number: 33, name_ar: "الأحزاب", name_en: "Al-Ahzab" },
    Surah { number: 34, name_ar: "سبأ", name_en: "Saba" },
    Surah { number: 35, name_ar: "فاطر", name_en: "Fatir" },
    Surah { number: 36, name_ar: "يس", name_en: "Ya-Sin" },
    Surah { number: 37, name_ar: "الصافات", name_en: "As-Saffat" },
    Surah { number: 38, name_ar: "ص", name_en: "Sad" },
    Surah { number: 39, name_ar: "الزمر", name_en: "Az-Zumar" },
    Surah { number: 40, name_ar: "غافر", name_en: "Ghafir" },
    Surah { number: 41, name_ar: "فصلت", name_en: "Fussilat" },
    Surah { number: 42, name_ar: "الشورى", name_en: "Ash-Shura" },
    Surah { number: 43, name_ar: "الزخرف", name_en: "Az-Zukhruf" },
    Surah { number: 44, name_ar: "الدخان", name_en: "Ad-Dukhan" },
    Surah { number: 45, name_ar: "الجاثية", name_en: "Al-Jathiyah" },
    Surah { number: 46, name_ar: "الأحقاف", name_en: "Al-Ahqaf" },
    Surah { number: 47, name_ar: "محمد", name_en: "Muhammad" },
    Surah { number: 48, name_ar: "الفتح", name_en: "Al-Fath" },
    Surah { number: 49, name_ar: "الحجرات", name_en: "Al-Hujurat" },
    Surah { number: 50, name_ar: "ق", name_en: "Qaf" },
    Surah { number: 51, name_ar: "الذاريات", name_en: "Adh-Dhariyat" },
    Surah { number: 52, name_ar: "الطور", name_en: "At-Tur" },
    Surah { number: 53, name_ar: "النجم", name_en: "An-Najm" },
    Surah { number: 54, name_ar: "القمر", name_en: "Al-Qamar" },
    Surah { number: 55, name_ar: "الرحمن", name_en: "Ar-Rahman" },
    Surah { number: 56, name_ar: "الواقعة", name_en: "Al-Waqi'ah" },
    Surah { number: 57, name_ar: "الحديد", name_en: "Al-Hadid" },
    Surah { number: 58, name_ar: "المجادلة", name_en: "Al-Mujadila" },
    Surah { number: 59, name_ar: "الحشر", name_en: "Al-Hashr" },
    Surah { number: 60, name_ar: "الممتحنة", name_en: "Al-Mumtahanah" },
    Surah { number: 61, name_ar: "الصف", name_en: "As-Saff" },
    Surah { number: 62, name_ar: "الجمعة", name_en: "Al-Jumu'ah" },
    Surah { number: 63, name_ar: "المنافقون", name_en: "Al-Munafiqun" },
    Surah { number: 64, name_ar: "التغابن", name_en: "At-Taghabun" },
    Surah { number: 65, name_ar: "الطلاق", name_en: "At-Talaq" },
    Surah { number: 66, name_ar: "التحريم", name_en: "At-Tahrim" },
    Surah { number: 67, name_ar: "الملك", name_en: "Al-Mulk" },
    Surah { number: 68, name_ar: "القلم", name_en: "Al-Qalam" },
    Surah { number: 69, name_ar: "الحاقة", name_en: "Al-Haqqah" },
    Surah { number: 70, name_ar: "المعارج", name_en: "Al-Ma'arij" },
    Surah { number: 71, name_ar: "نوح", name_en: "Nuh" },
    Surah { number: 72, name_ar: "الجن", name_en: "Al-Jinn" },
    Surah { number: 73, name_ar: "المزمل", name_en: "Al-Muzzammil" },
    Surah { number: 74, name_ar: "المدثر", name_en: "Al-Muddaththir" },
    Surah { number: 75, name_ar: "القيامة", name_en: "Al-Qiyamah" },
    Surah { number: 76, name_ar: "الإنسان", name_en: "Al-Insan" },
    Surah { number: 77, name_ar: "المرسلات", name_en: "Al-Mursalat" },
    Surah { number: 78, name_ar: "النبأ", name_en: "An-Naba" },
    Surah { number: 79, name_ar: "النازعات", name_en: "An-Nazi'at" },
    Surah { number: 80, name_ar: "عبس", name_en: "Abasa" },
    Surah { number: 81, name_ar: "التكوير", name_en: "At-Takwir" },
    Surah { number: 82, name_ar: "الانفطار", name_en: "Al-Infitar" },
    Surah { number: 83, name_ar: "المطففين", name_en: "Al-Mutaffifin" },
    Surah { number: 84, name_ar: "الانشقاق", name_en: "Al-Inshiqaq" },
    Surah { number: 85, name_ar: "البروج", name_en: "Al-Buruj" },
    Surah { number: 86, name_ar: "الطارق", name_en: "At-Tariq" },
    Surah { number: 87, name_ar: "الأعلى", name_en: "Al-A'la" },
    Surah { number: 88, name_ar: "الغاشية", name_en: "Al-Ghashiyah" },
    Surah { number: 89, name_ar: "الفجر", name_en: "Al-Fajr" },
    Surah { number: 90, name_ar: "البلد", name_en: "Al-Balad" },
    Surah { number: 91, name_ar: "الشمس", name_en: "Ash-Shams" },
    Surah { number: 92, name_ar: "الليل", name_en: "Al-Layl" },
    Surah { number: 93, name_ar: "الضحى", name_en: "Ad-Duha" },
    Surah { number: 94, name_ar: "الشرح", name_en: "Ash-Sharh" },
    Surah { number: 95, name_ar: "التين", name_en: "At-Tin" },
    Surah { number: 96, name_ar: "العلق", name_en: "Al-Alaq" },
    Surah { number: 97, name_ar: "القدر", name_en: "Al-Qadr" },
    Surah { number: 98, name_ar: "البينة", name_en: "Al-Bayyinah" },
    Surah { number: 99, name_ar: "الزلزلة", name_en: "Az-Zalzalah" },
    Surah { number: 100, name_ar: "العاديات", name_en: "Al-Adiyat" },
    Surah { number: 101, name_ar: "القارعة", name_en: "Al-Qari'ah" },
    Surah { number: 102, name_ar: "التكاثر", name_en: "At-Takathur" },
    Surah { number: 103, name_ar: "العصر", name_en: "Al-Asr" },
    Surah { number: 104, name_ar: "الهمزة", name_en: "Al-Humazah" },
    Surah { number: 105, name_ar: "الفيل", name_en: "Al-Fil" },
    Surah { number: 106, name_ar: "قريش", name_en: "Quraysh" },
    Surah { number: 107, name_ar: "الماعون", name_en: "Al-Ma'un" },
    Surah { number: 108, name_ar: "الكوثر", name_en: "Al-Kawthar" },
    Surah { number: 109, name_ar: "الكافرون", name_en: "Al-Kafirun" },
    Surah { number: 110, name_ar: "النصر", name_en: "An-Nasr" },
    Surah { number: 111, name_ar: "المسد", name_en: "Al-Masad" },
    Surah { number: 112, name_ar: "الإخلاص", name_en: "Al-Ikhlas" },
    Surah { number: 113, name_ar: "الفلق", name_en: "Al-Falaq" },
    Surah { number: 114, name_ar: "الناس", name_en: "An-Nas" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_contiguous_numbering() {
        assert_eq!(SURAHS.len(), 114);
        for (i, surah) in SURAHS.iter().enumerate() {
            assert_eq!(usize::from(surah.number), i + 1);
        }
    }

    #[test]
    fn lookup_by_number() {
        assert_eq!(surah_by_number(1).unwrap().name_en, "Al-Fatiha");
        assert_eq!(surah_by_number(114).unwrap().name_ar, "الناس");
        assert!(surah_by_number(0).is_none());
        assert!(surah_by_number(115).is_none());
    }
}
