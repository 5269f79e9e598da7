//! Trailing language-tag detection.
//!
//! Release and subtitle names often end in a language marker:
//! `Movie.2010.German`, `Movie_de.srt` (after the extension is cut),
//! `Film - Français`. The alias table covers every ISO 639-1 code, the
//! ISO 639-2 T and B codes, English and native names, display names in the
//! German, French, Spanish and Italian UI locales, and common non-ISO
//! shorthands (`jap`, `cz`, `farsi`...).

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One language and the names it is known by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// ISO 639-1 code.
    pub code: &'static str,
    /// ISO 639-2/T code.
    pub iso3: &'static str,
    /// ISO 639-2/B code where it differs from the terminology code.
    pub iso3_bibliographic: Option<&'static str>,
    /// English name first, then native and localized names.
    pub names: &'static [&'static str],
}

impl LanguageEntry {
    /// English display name.
    pub fn english_name(&self) -> &'static str {
        self.names.first().copied().unwrap_or(self.code)
    }
}

const fn lang(
    code: &'static str,
    iso3: &'static str,
    iso3_bibliographic: Option<&'static str>,
    names: &'static [&'static str],
) -> LanguageEntry {
    LanguageEntry {
        code,
        iso3,
        iso3_bibliographic,
        names,
    }
}

/// ISO 639-1 languages, ordered by code.
pub static LANGUAGES: &[LanguageEntry] = &[
    lang("aa", "aar", None, &["Afar", "Afaraf"]),
    lang("ab", "abk", None, &["Abkhazian", "Аҧсуа"]),
    lang("ae", "ave", None, &["Avestan", "avesta"]),
    lang("af", "afr", None, &["Afrikaans"]),
    lang("ak", "aka", None, &["Akan"]),
    lang("am", "amh", None, &["Amharic", "አማርኛ"]),
    lang("an", "arg", None, &["Aragonese", "aragonés"]),
    lang("ar", "ara", None, &["Arabic", "العربية", "Arabisch", "arabe", "árabe", "arabo"]),
    lang("as", "asm", None, &["Assamese", "অসমীয়া"]),
    lang("av", "ava", None, &["Avaric", "авар мацӏ"]),
    lang("ay", "aym", None, &["Aymara", "aymar aru"]),
    lang("az", "aze", None, &["Azerbaijani", "azərbaycan dili"]),
    lang("ba", "bak", None, &["Bashkir", "башҡорт теле"]),
    lang("be", "bel", None, &["Belarusian", "беларуская"]),
    lang("bg", "bul", None, &["Bulgarian", "български", "Bulgarisch", "bulgare", "búlgaro", "bulgaro"]),
    lang("bh", "bih", None, &["Bihari", "भोजपुरी"]),
    lang("bi", "bis", None, &["Bislama"]),
    lang("bm", "bam", None, &["Bambara", "bamanankan"]),
    lang("bn", "ben", None, &["Bengali", "বাংলা"]),
    lang("bo", "bod", Some("tib"), &["Tibetan", "བོད་ཡིག"]),
    lang("br", "bre", None, &["Breton", "brezhoneg"]),
    lang("bs", "bos", None, &["Bosnian", "bosanski"]),
    lang("ca", "cat", None, &["Catalan", "català", "Katalanisch", "catalán", "catalano"]),
    lang("ce", "che", None, &["Chechen", "нохчийн"]),
    lang("ch", "cha", None, &["Chamorro", "Chamoru"]),
    lang("co", "cos", None, &["Corsican", "corsu"]),
    lang("cr", "cre", None, &["Cree", "ᓀᐦᐃᔭᐍᐏᐣ"]),
    lang("cs", "ces", Some("cze"), &["Czech", "čeština", "Tschechisch", "tchèque", "checo", "ceco"]),
    lang("cu", "chu", None, &["Church Slavic", "ѩзыкъ словѣньскъ"]),
    lang("cv", "chv", None, &["Chuvash", "чӑваш чӗлхи"]),
    lang("cy", "cym", Some("wel"), &["Welsh", "Cymraeg"]),
    lang("da", "dan", None, &["Danish", "dansk", "Dänisch", "danois", "danés", "danese"]),
    lang("de", "deu", Some("ger"), &["German", "Deutsch", "allemand", "alemán", "tedesco"]),
    lang("dv", "div", None, &["Divehi", "ދިވެހި"]),
    lang("dz", "dzo", None, &["Dzongkha", "རྫོང་ཁ"]),
    lang("ee", "ewe", None, &["Ewe", "Eʋegbe"]),
    lang("el", "ell", Some("gre"), &["Greek", "ελληνικά", "Griechisch", "grec", "griego", "greco"]),
    lang("en", "eng", None, &["English", "Englisch", "anglais", "inglés", "inglese"]),
    lang("eo", "epo", None, &["Esperanto"]),
    lang("es", "spa", None, &["Spanish", "español", "Spanisch", "espagnol", "spagnolo"]),
    lang("et", "est", None, &["Estonian", "eesti", "Estnisch", "estonien", "estonio", "estone"]),
    lang("eu", "eus", Some("baq"), &["Basque", "euskara"]),
    lang("fa", "fas", Some("per"), &["Persian", "فارسی", "Persisch", "persan", "persa", "persiano"]),
    lang("ff", "ful", None, &["Fulah", "Fulfulde"]),
    lang("fi", "fin", None, &["Finnish", "suomi", "Finnisch", "finnois", "finés", "finlandese"]),
    lang("fj", "fij", None, &["Fijian", "vosa Vakaviti"]),
    lang("fo", "fao", None, &["Faroese", "føroyskt"]),
    lang("fr", "fra", Some("fre"), &["French", "français", "Französisch", "francés", "francese"]),
    lang("fy", "fry", None, &["Western Frisian", "Frysk"]),
    lang("ga", "gle", None, &["Irish", "Gaeilge"]),
    lang("gd", "gla", None, &["Scottish Gaelic", "Gàidhlig"]),
    lang("gl", "glg", None, &["Galician", "galego"]),
    lang("gn", "grn", None, &["Guarani", "Avañe'ẽ"]),
    lang("gu", "guj", None, &["Gujarati", "ગુજરાતી"]),
    lang("gv", "glv", None, &["Manx", "Gaelg"]),
    lang("ha", "hau", None, &["Hausa"]),
    lang("he", "heb", None, &["Hebrew", "עברית", "Hebräisch", "hébreu", "hebreo", "ebraico"]),
    lang("hi", "hin", None, &["Hindi", "हिन्दी"]),
    lang("ho", "hmo", None, &["Hiri Motu"]),
    lang("hr", "hrv", None, &["Croatian", "hrvatski", "Kroatisch", "croate", "croata"]),
    lang("ht", "hat", None, &["Haitian Creole", "Kreyòl ayisyen"]),
    lang("hu", "hun", None, &["Hungarian", "magyar", "Ungarisch", "hongrois", "húngaro", "ungherese"]),
    lang("hy", "hye", Some("arm"), &["Armenian", "Հայերեն"]),
    lang("hz", "her", None, &["Herero", "Otjiherero"]),
    lang("ia", "ina", None, &["Interlingua"]),
    lang("id", "ind", None, &["Indonesian", "Bahasa Indonesia", "Indonesisch", "indonésien", "indonesio", "indonesiano"]),
    lang("ie", "ile", None, &["Interlingue"]),
    lang("ig", "ibo", None, &["Igbo"]),
    lang("ii", "iii", None, &["Sichuan Yi", "ꆈꌠꉙ"]),
    lang("ik", "ipk", None, &["Inupiaq", "Iñupiaq"]),
    lang("io", "ido", None, &["Ido"]),
    lang("is", "isl", Some("ice"), &["Icelandic", "íslenska", "Isländisch", "islandais", "islandés", "islandese"]),
    lang("it", "ita", None, &["Italian", "italiano", "Italienisch", "italien"]),
    lang("iu", "iku", None, &["Inuktitut", "ᐃᓄᒃᑎᑐᑦ"]),
    lang("ja", "jpn", None, &["Japanese", "日本語", "Japanisch", "japonais", "japonés", "giapponese"]),
    lang("jv", "jav", None, &["Javanese", "basa Jawa"]),
    lang("ka", "kat", Some("geo"), &["Georgian", "ქართული"]),
    lang("kg", "kon", None, &["Kongo", "Kikongo"]),
    lang("ki", "kik", None, &["Kikuyu", "Gĩkũyũ"]),
    lang("kj", "kua", None, &["Kuanyama"]),
    lang("kk", "kaz", None, &["Kazakh", "қазақ тілі"]),
    lang("kl", "kal", None, &["Kalaallisut"]),
    lang("km", "khm", None, &["Khmer", "ខ្មែរ"]),
    lang("kn", "kan", None, &["Kannada", "ಕನ್ನಡ"]),
    lang("ko", "kor", None, &["Korean", "한국어", "Koreanisch", "coréen", "coreano"]),
    lang("kr", "kau", None, &["Kanuri"]),
    lang("ks", "kas", None, &["Kashmiri", "कॉशुर"]),
    lang("ku", "kur", None, &["Kurdish", "Kurdî"]),
    lang("kv", "kom", None, &["Komi", "коми кыв"]),
    lang("kw", "cor", None, &["Cornish", "Kernewek"]),
    lang("ky", "kir", None, &["Kyrgyz", "кыргызча"]),
    lang("la", "lat", None, &["Latin", "latine"]),
    lang("lb", "ltz", None, &["Luxembourgish", "Lëtzebuergesch"]),
    lang("lg", "lug", None, &["Ganda", "Luganda"]),
    lang("li", "lim", None, &["Limburgish", "Limburgs"]),
    lang("ln", "lin", None, &["Lingala", "lingála"]),
    lang("lo", "lao", None, &["Lao", "ລາວ"]),
    lang("lt", "lit", None, &["Lithuanian", "lietuvių", "Litauisch", "lituanien", "lituano"]),
    lang("lu", "lub", None, &["Luba-Katanga", "Kiluba"]),
    lang("lv", "lav", None, &["Latvian", "latviešu", "Lettisch", "letton", "letón", "lettone"]),
    lang("mg", "mlg", None, &["Malagasy"]),
    lang("mh", "mah", None, &["Marshallese", "Kajin M̧ajeļ"]),
    lang("mi", "mri", Some("mao"), &["Maori", "te reo Māori"]),
    lang("mk", "mkd", Some("mac"), &["Macedonian", "македонски"]),
    lang("ml", "mal", None, &["Malayalam", "മലയാളം"]),
    lang("mn", "mon", None, &["Mongolian", "монгол"]),
    lang("mr", "mar", None, &["Marathi", "मराठी"]),
    lang("ms", "msa", Some("may"), &["Malay", "Bahasa Melayu"]),
    lang("mt", "mlt", None, &["Maltese", "Malti"]),
    lang("my", "mya", Some("bur"), &["Burmese", "မြန်မာ"]),
    lang("na", "nau", None, &["Nauru", "Dorerin Naoero"]),
    lang("nb", "nob", None, &["Norwegian Bokmål", "norsk bokmål"]),
    lang("nd", "nde", None, &["North Ndebele", "isiNdebele"]),
    lang("ne", "nep", None, &["Nepali", "नेपाली"]),
    lang("ng", "ndo", None, &["Ndonga", "Owambo"]),
    lang("nl", "nld", Some("dut"), &["Dutch", "Nederlands", "Niederländisch", "néerlandais", "neerlandés", "olandese"]),
    lang("nn", "nno", None, &["Norwegian Nynorsk", "norsk nynorsk"]),
    lang("no", "nor", None, &["Norwegian", "norsk", "Norwegisch", "norvégien", "noruego", "norvegese"]),
    lang("nr", "nbl", None, &["South Ndebele"]),
    lang("nv", "nav", None, &["Navajo", "Diné bizaad"]),
    lang("ny", "nya", None, &["Chichewa", "chiCheŵa"]),
    lang("oc", "oci", None, &["Occitan"]),
    lang("oj", "oji", None, &["Ojibwa", "ᐊᓂᔑᓈᐯᒧᐎᓐ"]),
    lang("om", "orm", None, &["Oromo", "Afaan Oromoo"]),
    lang("or", "ori", None, &["Oriya", "ଓଡ଼ିଆ"]),
    lang("os", "oss", None, &["Ossetian", "ирон æвзаг"]),
    lang("pa", "pan", None, &["Punjabi", "ਪੰਜਾਬੀ"]),
    lang("pi", "pli", None, &["Pali", "पाऴि"]),
    lang("pl", "pol", None, &["Polish", "polski", "Polnisch", "polonais", "polaco", "polacco"]),
    lang("ps", "pus", None, &["Pashto", "پښتو"]),
    lang("pt", "por", None, &["Portuguese", "português", "Portugiesisch", "portugais", "portugués", "portoghese"]),
    lang("qu", "que", None, &["Quechua", "Runa Simi"]),
    lang("rm", "roh", None, &["Romansh", "rumantsch"]),
    lang("rn", "run", None, &["Kirundi", "Ikirundi"]),
    lang("ro", "ron", Some("rum"), &["Romanian", "română", "Rumänisch", "roumain", "rumano", "rumeno"]),
    lang("ru", "rus", None, &["Russian", "русский", "Russisch", "russe", "ruso", "russo"]),
    lang("rw", "kin", None, &["Kinyarwanda", "Ikinyarwanda"]),
    lang("sa", "san", None, &["Sanskrit", "संस्कृतम्"]),
    lang("sc", "srd", None, &["Sardinian", "sardu"]),
    lang("sd", "snd", None, &["Sindhi", "सिन्धी"]),
    lang("se", "sme", None, &["Northern Sami", "davvisámegiella"]),
    lang("sg", "sag", None, &["Sango", "yângâ tî sängö"]),
    lang("si", "sin", None, &["Sinhala", "සිංහල"]),
    lang("sk", "slk", Some("slo"), &["Slovak", "slovenčina", "Slowakisch", "slovaque", "eslovaco", "slovacco"]),
    lang("sl", "slv", None, &["Slovenian", "slovenščina", "Slowenisch", "slovène", "esloveno", "sloveno"]),
    lang("sm", "smo", None, &["Samoan", "gagana fa'a Samoa"]),
    lang("sn", "sna", None, &["Shona", "chiShona"]),
    lang("so", "som", None, &["Somali", "Soomaaliga"]),
    lang("sq", "sqi", Some("alb"), &["Albanian", "shqip"]),
    lang("sr", "srp", None, &["Serbian", "српски", "Serbisch", "serbe", "serbio", "serbo"]),
    lang("ss", "ssw", None, &["Swati", "SiSwati"]),
    lang("st", "sot", None, &["Southern Sotho", "Sesotho"]),
    lang("su", "sun", None, &["Sundanese", "Basa Sunda"]),
    lang("sv", "swe", None, &["Swedish", "svenska", "Schwedisch", "suédois", "sueco", "svedese"]),
    lang("sw", "swa", None, &["Swahili", "Kiswahili"]),
    lang("ta", "tam", None, &["Tamil", "தமிழ்"]),
    lang("te", "tel", None, &["Telugu", "తెలుగు"]),
    lang("tg", "tgk", None, &["Tajik", "тоҷикӣ"]),
    lang("th", "tha", None, &["Thai", "ไทย", "Thailändisch", "thaï", "tailandés", "tailandese"]),
    lang("ti", "tir", None, &["Tigrinya", "ትግርኛ"]),
    lang("tk", "tuk", None, &["Turkmen", "Türkmen"]),
    lang("tl", "tgl", None, &["Tagalog", "Wikang Tagalog"]),
    lang("tn", "tsn", None, &["Tswana", "Setswana"]),
    lang("to", "ton", None, &["Tonga", "faka Tonga"]),
    lang("tr", "tur", None, &["Turkish", "Türkçe", "Türkisch", "turc", "turco"]),
    lang("ts", "tso", None, &["Tsonga", "Xitsonga"]),
    lang("tt", "tat", None, &["Tatar", "татар теле"]),
    lang("tw", "twi", None, &["Twi"]),
    lang("ty", "tah", None, &["Tahitian", "Reo Tahiti"]),
    lang("ug", "uig", None, &["Uyghur", "ئۇيغۇرچە"]),
    lang("uk", "ukr", None, &["Ukrainian", "українська", "Ukrainisch", "ukrainien", "ucraniano", "ucraino"]),
    lang("ur", "urd", None, &["Urdu", "اردو"]),
    lang("uz", "uzb", None, &["Uzbek", "oʻzbek"]),
    lang("ve", "ven", None, &["Venda", "Tshivenḓa"]),
    lang("vi", "vie", None, &["Vietnamese", "Tiếng Việt", "Vietnamesisch", "vietnamien", "vietnamita"]),
    lang("vo", "vol", None, &["Volapük"]),
    lang("wa", "wln", None, &["Walloon", "walon"]),
    lang("wo", "wol", None, &["Wolof", "Wollof"]),
    lang("xh", "xho", None, &["Xhosa", "isiXhosa"]),
    lang("yi", "yid", None, &["Yiddish", "ייִדיש"]),
    lang("yo", "yor", None, &["Yoruba", "Yorùbá"]),
    lang("za", "zha", None, &["Zhuang", "Saɯ cueŋƅ"]),
    lang("zh", "zho", Some("chi"), &["Chinese", "中文", "Chinesisch", "chinois", "chino", "cinese"]),
    lang("zu", "zul", None, &["Zulu", "isiZulu"]),
];

/// Shorthands found in release names that are not ISO codes or names,
/// mapped to the ISO 639-1 code they stand for.
const EXTRA_ALIASES: &[(&str, &str)] = &[
    ("bangla", "bn"),
    ("brazilian", "pt"),
    ("cantonese", "zh"),
    ("castellano", "es"),
    ("cn", "zh"),
    ("cz", "cs"),
    ("dk", "da"),
    ("esp", "es"),
    ("farsi", "fa"),
    ("filipino", "tl"),
    ("flemish", "nl"),
    ("gaelic", "gd"),
    ("gr", "el"),
    ("iw", "he"),
    ("jap", "ja"),
    ("ji", "yi"),
    ("jp", "ja"),
    ("mandarin", "zh"),
    ("moldavian", "ro"),
    ("ua", "uk"),
    ("valencian", "ca"),
    ("vlaams", "nl"),
];

// Bounded by the same separators as alias matching; `\b` would treat `_` as
// part of the word.
static PART_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[ _.\-])part[ _.\-]+[ivx]+([ _.\-]|$)").expect("part marker regex")
});

struct AliasTable {
    by_alias: HashMap<String, &'static LanguageEntry>,
    // Longest alias first; equal lengths in alphabetical order.
    longest_first: Vec<String>,
}

impl AliasTable {
    fn build() -> Self {
        let mut by_alias: HashMap<String, &'static LanguageEntry> = HashMap::new();

        for entry in LANGUAGES {
            let keys = [entry.code, entry.iso3]
                .into_iter()
                .chain(entry.iso3_bibliographic)
                .chain(entry.names.iter().copied());
            for key in keys {
                by_alias.entry(key.to_lowercase()).or_insert(entry);
            }
        }

        for (alias, code) in EXTRA_ALIASES {
            match LANGUAGES.iter().find(|entry| entry.code == *code) {
                Some(entry) => {
                    by_alias.entry(alias.to_lowercase()).or_insert(entry);
                }
                None => tracing::warn!(alias, code, "alias points at an unknown language"),
            }
        }

        let mut longest_first: Vec<String> = by_alias.keys().cloned().collect();
        longest_first.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        tracing::trace!(aliases = longest_first.len(), "language alias table built");
        Self {
            by_alias,
            longest_first,
        }
    }
}

static ALIASES: LazyLock<AliasTable> = LazyLock::new(AliasTable::build);

fn ends_with_alias(text: &str, alias: &str) -> bool {
    if text == alias {
        return true;
    }
    text.strip_suffix(alias)
        .and_then(|head| head.chars().last())
        .is_some_and(|c| matches!(c, ' ' | '_' | '.' | '-'))
}

/// Return the language alias `text` ends with, if any.
///
/// A `Part II`-style marker is removed first so the numeral is not read as
/// the Sichuan Yi code, and only the text before the first `/` is examined.
/// The returned key is lowercase; resolve it with [`locale_for`].
pub fn find_language_in_string(text: &str) -> Option<&'static str> {
    let text = PART_MARKER.replace_all(text, "${1}");
    let head = text.split('/').next().unwrap_or_default().trim().to_lowercase();
    if head.is_empty() {
        return None;
    }

    let table: &'static AliasTable = &ALIASES;
    table
        .longest_first
        .iter()
        .find(|alias| ends_with_alias(&head, alias))
        .map(String::as_str)
}

/// Whether `name` equals `language` or ends with it after one of ` _.-`.
/// Case-insensitive.
pub fn does_string_end_with_language(name: &str, language: &str) -> bool {
    if language.is_empty() {
        return false;
    }
    ends_with_alias(&name.to_lowercase(), &language.to_lowercase())
}

fn lookup(alias: &str) -> Option<&'static LanguageEntry> {
    let table: &'static AliasTable = &ALIASES;
    table.by_alias.get(&alias.trim().to_lowercase()).copied()
}

/// ISO 639-1 code for any known alias.
pub fn locale_for(alias: &str) -> Option<&'static str> {
    lookup(alias).map(|entry| entry.code)
}

/// ISO 639-2/T code for any known alias.
pub fn iso3_for(alias: &str) -> Option<&'static str> {
    lookup(alias).map(|entry| entry.iso3)
}

/// English name for any known alias.
pub fn language_name(alias: &str) -> Option<&'static str> {
    lookup(alias).map(LanguageEntry::english_name)
}
