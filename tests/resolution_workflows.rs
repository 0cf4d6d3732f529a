//! Integration tests for common rule-set workflows.
//!
//! Builds a small but realistic collection and checks resolution the
//! way downstream evaluators and test harnesses use it.

use cldr_plural::prelude::*;
use cldr_plural::{FallbackChain, UnitTest, UnitTests, global};
use std::sync::Arc;
use std::thread;

const RULES: &str = r#"{
    "cultures": [
        {
            "langs": ["en"],
            "cardinal": [
                {"form": "one", "cond": "i = 1 and v = 0 @integer 1"},
                {"form": "other", "cond": " @integer 0, 2~16, 100"}
            ],
            "ordinal": [
                {"form": "one", "cond": "n % 10 = 1 and n % 100 != 11"},
                {"form": "two", "cond": "n % 10 = 2 and n % 100 != 12"},
                {"form": "few", "cond": "n % 10 = 3 and n % 100 != 13"},
                {"form": "other", "cond": ""}
            ],
            "tests": {
                "cardinal": [
                    {"expected": "one", "integers": ["1"]},
                    {"expected": "other", "integers": ["0", "2"], "decimals": ["1.0"]}
                ]
            }
        },
        {
            "langs": ["ru", "uk"],
            "cardinal": [
                {"form": "one", "cond": "v = 0 and i % 10 = 1 and i % 100 != 11"},
                {"form": "few", "cond": "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"},
                {"form": "many", "cond": "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9"},
                {"form": "other", "cond": ""}
            ]
        },
        {
            "langs": ["pt"],
            "cardinal": [
                {"form": "one", "cond": "i = 0..1"},
                {"form": "other", "cond": ""}
            ]
        },
        {
            "langs": ["pt-PT"],
            "cardinal": [
                {"form": "one", "cond": "i = 1 and v = 0"},
                {"form": "other", "cond": ""}
            ]
        }
    ],
    "others": ["ja", "zh", "ko"]
}"#;

fn rules() -> RuleSets {
    RuleSets::from_json(RULES).expect("fixture rules are valid")
}

fn tag(s: &str) -> LocaleTag {
    LocaleTag::parse(s).unwrap()
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_region_falls_back_to_language() {
    let sets = rules();
    let found = sets.find(&tag("en-US")).unwrap();
    assert_eq!(found.tag(), &tag("en"));

    let culture = found.culture().unwrap();
    let forms: Vec<_> = culture.cardinal().forms().collect();
    assert_eq!(forms, vec![PluralCategory::One, PluralCategory::Other]);
}

#[test]
fn test_shared_culture_for_several_tags() {
    let sets = rules();
    let ru = sets.find_str("ru").unwrap().culture().unwrap();
    let uk = sets.find_str("uk-UA").unwrap().culture().unwrap();
    assert!(std::ptr::eq(ru, uk));
}

#[test]
fn test_exact_regional_culture_wins() {
    let sets = rules();
    let pt_pt = sets.find_str("pt-PT").unwrap();
    assert_eq!(pt_pt.tag(), &tag("pt-PT"));

    let pt_br = sets.find_str("pt-BR").unwrap();
    assert_eq!(pt_br.tag(), &tag("pt"));
    assert_ne!(pt_pt.culture(), pt_br.culture());
}

#[test]
fn test_others_use_universal_category() {
    let sets = rules();
    for requested in ["ja", "ja-JP", "zh-Hant-TW", "ko-KR"] {
        let found = sets.find_str(requested).unwrap();
        assert!(found.is_others(), "{requested} should resolve to others");
        assert!(found.culture().is_none());
    }
    assert!(sets.is_others(&tag("zh")));
}

#[test]
fn test_inferred_language_for_und_tags() {
    let sets = rules();
    assert_eq!(sets.find_str("und-Cyrl").unwrap().tag(), &tag("ru"));
    assert_eq!(sets.find_str("und-JP").unwrap().tag(), &tag("ja"));
    assert!(sets.find_str("und").is_none());
}

#[test]
fn test_unknown_language_is_not_found() {
    let sets = rules();
    assert!(sets.find_str("xx-Yyyy-ZZ").is_none());
    assert!(sets.find_str("").is_none());
}

#[test]
fn test_validate_batch() {
    let report = rules().validate(["en-US", "not!!!atag", "xx-XX"]);
    assert_eq!(report.unparseable, vec!["not!!!atag".to_string()]);
    assert_eq!(report.unresolved, vec!["xx-XX".to_string()]);
    assert!(!report.is_ok());

    let report = rules().validate(["en-GB", "ru_RU", "ja"]);
    assert_eq!(report, ValidationReport::default());
}

#[test]
fn test_langs_lists_every_declared_tag() {
    let langs: Vec<String> = rules().langs().iter().map(|t| t.to_string()).collect();
    assert_eq!(
        langs,
        vec!["en", "ru", "uk", "pt", "pt-PT", "ja", "zh", "ko"]
    );
}

#[test]
fn test_monotonic_chain_never_repeats() {
    let chain: Vec<LocaleTag> = FallbackChain::new(tag("sr-Cyrl-RS")).collect();
    let names: Vec<String> = chain.iter().map(|t| t.to_string()).collect();
    assert_eq!(names, vec!["sr-Cyrl-RS", "sr-Cyrl", "sr", "und"]);

    let counts: Vec<usize> = chain.iter().map(LocaleTag::subtag_count).collect();
    assert!(counts.windows(2).all(|w| w[0] > w[1] || (w[0] == 1 && w[1] == 1)));
}

// =============================================================================
// Model
// =============================================================================

#[test]
fn test_derived_operands_from_loaded_rules() {
    let sets = rules();
    let en = sets.find_str("en").unwrap().culture().unwrap();
    assert!(en.needs_extended_operands());
    assert_eq!(
        en.vars().iter().map(|v| v.name()).collect::<Vec<_>>(),
        vec!["n10", "n100"]
    );
    assert!(en.has_cardinal_test());
    assert!(!en.has_ordinal_test());

    let pt = sets.find_str("pt").unwrap().culture().unwrap();
    assert!(pt.has_vars());
    assert!(!pt.needs_extended_operands());
    assert!(!pt.has_test());
}

#[test]
fn test_unit_tests_survive_loading() {
    let sets = rules();
    let en = sets.find_str("en").unwrap().culture().unwrap();
    let expected = UnitTests {
        cardinal: vec![
            UnitTest::new(PluralCategory::One).integers(["1"]),
            UnitTest::new(PluralCategory::Other)
                .integers(["0", "2"])
                .decimals(["1.0"]),
        ],
        ordinal: vec![],
    };
    assert_eq!(en.tests(), &expected);
}

#[test]
fn test_programmatic_and_loaded_agree() {
    let built = Culture::builder()
        .lang("pt")
        .cardinal(vec![
            Case::new(PluralCategory::One, "i = 0..1"),
            Case::new(PluralCategory::Other, ""),
        ])
        .build()
        .unwrap();
    let sets = rules();
    let loaded = sets.find_str("pt").unwrap().culture().unwrap();
    assert_eq!(&built, loaded);
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_concurrent_readers() {
    let sets = Arc::new(rules());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sets = Arc::clone(&sets);
            thread::spawn(move || {
                let requested = if i % 2 == 0 { "en-AU" } else { "ja-JP" };
                (0..200)
                    .map(|_| sets.find_str(requested).map(|r| r.tag().to_string()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        let expected = if i % 2 == 0 { "en" } else { "ja" };
        assert!(results.iter().all(|r| r.as_deref() == Some(expected)));
    }
}

#[test]
fn test_global_install() {
    let installed = global::install(rules()).unwrap();
    assert!(std::ptr::eq(global::get().unwrap(), installed));
    assert!(matches!(
        global::install(rules()),
        Err(PluralError::AlreadyInstalled)
    ));
}
