// uknational/src/rules.rs
//
// Ukrainian national Cyrillic to Latin transliteration table, as adopted by
// Cabinet of Ministers resolution No. 55 (2010).
//
// Letters with a separate word-initial form (Є Ї Й Ю Я) use it for the
// capital letter and the in-word form for the small one. Proper names start
// with a capital, so this covers the word-initial case without lookbehind.
// "зг" is a digraph rule so it is not read as "zh".

use phf::phf_map;

/// Source letter (or digraph) to Latin replacement.
pub static UK_NATIONAL: phf::Map<&'static str, &'static str> = phf_map! {
    "А" => "A",
    "а" => "a",
    "Б" => "B",
    "б" => "b",
    "В" => "V",
    "в" => "v",
    "Г" => "H",
    "г" => "h",
    "Ґ" => "G",
    "ґ" => "g",
    "Д" => "D",
    "д" => "d",
    "Е" => "E",
    "е" => "e",
    "Є" => "Ye",
    "є" => "ie",
    "Ж" => "Zh",
    "ж" => "zh",
    "З" => "Z",
    "з" => "z",
    "И" => "Y",
    "и" => "y",
    "І" => "I",
    "і" => "i",
    "Ї" => "Yi",
    "ї" => "i",
    "Й" => "Y",
    "й" => "i",
    "К" => "K",
    "к" => "k",
    "Л" => "L",
    "л" => "l",
    "М" => "M",
    "м" => "m",
    "Н" => "N",
    "н" => "n",
    "О" => "O",
    "о" => "o",
    "П" => "P",
    "п" => "p",
    "Р" => "R",
    "р" => "r",
    "С" => "S",
    "с" => "s",
    "Т" => "T",
    "т" => "t",
    "У" => "U",
    "у" => "u",
    "Ф" => "F",
    "ф" => "f",
    "Х" => "Kh",
    "х" => "kh",
    "Ц" => "Ts",
    "ц" => "ts",
    "Ч" => "Ch",
    "ч" => "ch",
    "Ш" => "Sh",
    "ш" => "sh",
    "Щ" => "Shch",
    "щ" => "shch",
    "Ь" => "",
    "ь" => "",
    "Ю" => "Yu",
    "ю" => "iu",
    "Я" => "Ya",
    "я" => "ia",

    "ЗГ" => "ZGH",
    "Зг" => "Zgh",
    "зг" => "zgh",

    "'" => "",
    "\u{2019}" => "",
    "\u{02BC}" => "",
};

/// Apostrophe forms found in Ukrainian text: ASCII, right single quote and
/// modifier letter apostrophe.
pub const APOSTROPHES: [&str; 3] = ["'", "\u{2019}", "\u{02BC}"];
