use std::sync::Arc;

use bhasha::domain::{LanguageCodeMapper, LanguageCodeTable};

fn mapper() -> LanguageCodeMapper {
    LanguageCodeMapper::new(Arc::new(LanguageCodeTable::builtin()))
}

#[test]
fn given_hindi_when_mapping_for_recognition_then_returns_indian_locale() {
    assert_eq!(mapper().to_recognition_locale("hi"), "hi-IN");
}

#[test]
fn given_every_supported_code_when_mapping_then_recognition_locale_is_regional() {
    let mapper = mapper();
    for entry in mapper.table().entries() {
        let locale = mapper.to_recognition_locale(entry.code);
        assert!(
            locale.starts_with(entry.code) && locale.contains('-'),
            "{} mapped to {}",
            entry.code,
            locale
        );
    }
}

#[test]
fn given_chinese_when_mapping_for_synthesis_then_returns_simplified_variant() {
    assert_eq!(mapper().to_synthesis_code("zh"), "zh-CN");
}

#[test]
fn given_supported_non_chinese_code_when_mapping_for_synthesis_then_code_is_unchanged() {
    let mapper = mapper();
    for entry in mapper.table().entries().iter().filter(|e| e.code != "zh") {
        assert_eq!(mapper.to_synthesis_code(entry.code), entry.code);
    }
}

#[test]
fn given_unknown_code_when_mapping_then_code_passes_through() {
    let mapper = mapper();
    assert_eq!(mapper.to_recognition_locale("xx"), "xx");
    assert_eq!(mapper.to_synthesis_code("xx"), "xx");
    assert_eq!(mapper.to_recognition_locale(""), "");
}

#[test]
fn given_same_code_when_mapping_twice_then_results_are_identical() {
    let mapper = mapper();
    assert_eq!(
        mapper.to_recognition_locale("kn"),
        mapper.to_recognition_locale("kn")
    );
    assert_eq!(mapper.to_synthesis_code("kn"), mapper.to_synthesis_code("kn"));
}

#[test]
fn given_builtin_table_when_listing_then_contains_twenty_one_languages() {
    let table = LanguageCodeTable::builtin();
    assert_eq!(table.entries().len(), 21);
    assert!(table.contains("ur"));
    assert!(!table.contains("xx"));
    assert_eq!(table.get("ur").map(|e| e.recognition_locale), Some("ur-PK"));
}
