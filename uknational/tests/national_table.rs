// uknational/tests/national_table.rs
//
// Place and personal names against their official Latin spellings, plus the
// table-level options.

use std::io::{Read, Write};

use translit_core::Config;
use uknational::{to_latin, to_latin_with_config, UkNationalConfig};

const NAMES: &[(&str, &str)] = &[
    ("Алушта", "Alushta"),
    ("Андрій", "Andrii"),
    ("Борщагівка", "Borshchahivka"),
    ("Борисенко", "Borysenko"),
    ("Вінниця", "Vinnytsia"),
    ("Володимир", "Volodymyr"),
    ("Гадяч", "Hadiach"),
    ("Богдан", "Bohdan"),
    ("Згурський", "Zghurskyi"),
    ("Ґалаґан", "Galagan"),
    ("Ґорґани", "Gorgany"),
    ("Донецьк", "Donetsk"),
    ("Дмитро", "Dmytro"),
    ("Рівне", "Rivne"),
    ("Олег", "Oleh"),
    ("Есмань", "Esman"),
    ("Єнакієве", "Yenakiieve"),
    ("Гаєвич", "Haievych"),
    ("Короп'є", "Koropie"),
    ("Житомир", "Zhytomyr"),
    ("Жанна", "Zhanna"),
    ("Жежелів", "Zhezheliv"),
    ("Закарпаття", "Zakarpattia"),
    ("Казимирчук", "Kazymyrchuk"),
    ("Медвин", "Medvyn"),
    ("Михайленко", "Mykhailenko"),
    ("Іванків", "Ivankiv"),
    ("Іващенко", "Ivashchenko"),
    ("Їжакевич", "Yizhakevych"),
    ("Кадиївка", "Kadyivka"),
    ("Мар'їне", "Marine"),
    ("Йосипівка", "Yosypivka"),
    ("Стрий", "Stryi"),
    ("Олексій", "Oleksii"),
    ("Київ", "Kyiv"),
    ("Коваленко", "Kovalenko"),
    ("Лебедин", "Lebedyn"),
    ("Леонід", "Leonid"),
    ("Миколаїв", "Mykolaiv"),
    ("Маринич", "Marynych"),
    ("Ніжин", "Nizhyn"),
    ("Наталія", "Nataliia"),
    ("Одеса", "Odesa"),
    ("Онищенко", "Onyshchenko"),
    ("Полтава", "Poltava"),
    ("Петро", "Petro"),
    ("Решетилівка", "Reshetylivka"),
    ("Рибчинський", "Rybchynskyi"),
    ("Суми", "Sumy"),
    ("Соломія", "Solomiia"),
    ("Тернопіль", "Ternopil"),
    ("Троць", "Trots"),
    ("Ужгород", "Uzhhorod"),
    ("Уляна", "Uliana"),
    ("Фастів", "Fastiv"),
    ("Філіпчук", "Filipchuk"),
    ("Харків", "Kharkiv"),
    ("Христина", "Khrystyna"),
    ("Біла Церква", "Bila Tserkva"),
    ("Стеценко", "Stetsenko"),
    ("Чернівці", "Chernivtsi"),
    ("Шевченко", "Shevchenko"),
    ("Шостка", "Shostka"),
    ("Кишеньки", "Kyshenky"),
    ("Щербухи", "Shcherbukhy"),
    ("Гоща", "Hoshcha"),
    ("Гаращенко", "Harashchenko"),
    ("Юрій", "Yurii"),
    ("Корюківка", "Koriukivka"),
    ("Яготин", "Yahotyn"),
    ("Ярошенко", "Yaroshenko"),
    ("Костянтин", "Kostiantyn"),
    ("Знам'янка", "Znamianka"),
    ("Феодосія", "Feodosiia"),
];

#[test]
fn names_transliterate_to_official_spelling() {
    let t = to_latin();
    for (input, expected) in NAMES {
        assert_eq!(t.transliterate(input), *expected, "input={}", input);
    }
}

#[test]
fn names_through_reader_with_tiny_buffers() {
    let config = UkNationalConfig {
        base: Config {
            buffer_size: 3,
            ..Config::default()
        },
        ..UkNationalConfig::default()
    };
    let t = to_latin_with_config(&config).unwrap();
    for (input, expected) in NAMES {
        let mut out = String::new();
        t.reader(input.as_bytes()).read_to_string(&mut out).unwrap();
        assert_eq!(out, *expected, "input={}", input);
    }
}

#[test]
fn names_through_writer_byte_by_byte() {
    let t = to_latin();
    for (input, expected) in NAMES {
        let mut w = t.writer(Vec::new());
        for b in input.as_bytes() {
            w.write_all(std::slice::from_ref(b)).unwrap();
        }
        let out = w.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), *expected, "input={}", input);
    }
}

#[test]
fn whole_sentence_keeps_punctuation_and_spacing() {
    let t = to_latin();
    assert_eq!(
        t.transliterate("Київ, Харків і Львів — 2024!"),
        "Kyiv, Kharkiv i Lviv — 2024!"
    );
}

#[test]
fn every_apostrophe_form_is_dropped() {
    let t = to_latin();
    assert_eq!(t.transliterate("Короп'є"), "Koropie");
    assert_eq!(t.transliterate("Короп\u{2019}є"), "Koropie");
    assert_eq!(t.transliterate("Короп\u{02BC}є"), "Koropie");
}

#[test]
fn keep_apostrophe_passes_it_through() {
    let config = UkNationalConfig {
        keep_apostrophe: true,
        ..UkNationalConfig::default()
    };
    let t = to_latin_with_config(&config).unwrap();
    assert_eq!(t.transliterate("Короп'є"), "Korop'ie");
    assert_eq!(t.transliterate("Мар\u{2019}їне"), "Mar\u{2019}ine");
}

#[test]
fn config_rules_override_table() {
    let mut config = UkNationalConfig::default();
    config.base_mut().add_rule("щ=sch");
    config.base_mut().add_rule("Щ=Sch");
    let t = to_latin_with_config(&config).unwrap();
    assert_eq!(t.transliterate("Щербухи"), "Scherbukhy");
    assert_eq!(t.transliterate("Гоща"), "Hoscha");
}

#[test]
fn decomposed_input_is_normalized() {
    let t = to_latin();
    // "й" written as "и" + combining breve
    assert_eq!(t.transliterate("Стри\u{0438}\u{0306}"), "Stryi");
    assert_eq!(t.transliterate("Андрі\u{0439}"), "Andrii");
}

#[test]
fn latin_text_is_untouched() {
    let t = to_latin();
    let text = "Plain ASCII text, 123 (ok)?\n";
    assert_eq!(t.transliterate(text), text);
}

#[test]
fn compiled_trie_matches_builtin() {
    let t = to_latin();
    let bytes = t.trie().to_bincode().unwrap();
    let back = translit_core::Trie::from_bincode(&bytes).unwrap();
    assert_eq!(back.rule_count(), t.trie().rule_count());
    let m = translit_core::Matcher::new(&back);
    for (input, expected) in NAMES {
        assert_eq!(m.transliterate(input.as_bytes()), expected.as_bytes());
    }
}

#[test]
fn invalid_utf8_lines_pass_through() {
    let t = to_latin();
    let mut line = "Київ ".as_bytes().to_vec();
    line.push(0xff);
    line.extend_from_slice(b" ok\n");
    let mut expected = b"Kyiv ".to_vec();
    expected.push(0xff);
    expected.extend_from_slice(b" ok\n");
    assert_eq!(t.transliterate_line(&line), expected);

    // valid lines are still normalized
    assert_eq!(
        t.transliterate_line("Стри\u{0438}\u{0306}\n".as_bytes()),
        b"Stryi\n"
    );
}
