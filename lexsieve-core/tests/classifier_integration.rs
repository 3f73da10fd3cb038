//! End-to-end tests: configuration file, list files on disk, classification

use lexsieve_core::{ClassifierConfig, Error, LanguageClassifier, WordEntry};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay out list directories and a config file for `en` and `de`
fn setup() -> (TempDir, ClassifierConfig) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("lists/profanity")).unwrap();
    fs::create_dir_all(root.join("lists/stopwords")).unwrap();
    fs::write(root.join("lists/profanity/en.txt"), "darn\nheck\nDrat\n").unwrap();
    fs::write(root.join("lists/stopwords/en.txt"), "the\nand\nof").unwrap();
    fs::write(root.join("lists/profanity/de.txt"), "mist\n").unwrap();
    fs::write(root.join("lists/stopwords/de.txt"), "und\nder\ndie\n").unwrap();

    let config_path = root.join("lexsieve.toml");
    fs::write(
        &config_path,
        r#"
profanity_dir = "lists/profanity"
stopwords_dir = "lists/stopwords"

[max_word_length]
en = 12
de = 20

[punctuation]
strip = ".,!?;:\"()"
edge = "-'"
"#,
    )
    .unwrap();

    let config = ClassifierConfig::from_file(&config_path).unwrap();
    (dir, config)
}

fn read_set(path: &Path) -> HashSet<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_every_configured_language_builds() {
    let (_dir, config) = setup();
    let languages: Vec<String> = config.languages().map(str::to_owned).collect();
    assert_eq!(languages, vec!["de", "en"]);

    for code in &languages {
        let classifier = LanguageClassifier::new(code, &config).unwrap();
        let profile = classifier.profile();
        assert_eq!(profile.code(), code);
        assert_eq!(
            profile.profanity(),
            &read_set(&config.profanity_list_path(code))
        );
        assert_eq!(
            profile.stopwords(),
            &read_set(&config.stopwords_list_path(code))
        );
    }
}

#[test]
fn test_unsupported_language_is_configuration_error() {
    let (_dir, config) = setup();
    let err = LanguageClassifier::new("fr", &config).unwrap_err();
    assert!(matches!(err, Error::UnsupportedLanguage(ref code) if code == "fr"));
    assert!(err.is_configuration());
}

#[test]
fn test_unsupported_language_checked_before_file_io() {
    // Directories that do not exist: only the code check can fail
    let config = ClassifierConfig::builder()
        .profanity_dir("/nonexistent/profanity")
        .stopwords_dir("/nonexistent/stopwords")
        .max_word_length("en", 10)
        .build()
        .unwrap();

    let err = LanguageClassifier::new("xx", &config).unwrap_err();
    assert!(matches!(err, Error::UnsupportedLanguage(_)));

    let err = LanguageClassifier::new("en", &config).unwrap_err();
    match err {
        Error::ListLoad { path, .. } => {
            assert_eq!(path, Path::new("/nonexistent/profanity/en.txt"))
        }
        other => panic!("Expected ListLoad error, got {other:?}"),
    }
}

#[test]
fn test_missing_list_aborts_construction() {
    let (dir, config) = setup();
    fs::remove_file(dir.path().join("lists/profanity/de.txt")).unwrap();

    let err = LanguageClassifier::new("de", &config).unwrap_err();
    assert!(err.to_string().contains("de.txt"));
    assert!(!err.is_configuration());

    // Other languages are unaffected
    assert!(LanguageClassifier::new("en", &config).is_ok());
}

#[test]
fn test_non_utf8_list_still_builds() {
    let (dir, config) = setup();
    fs::write(
        dir.path().join("lists/profanity/de.txt"),
        b"mist\nSchei\xdfe\n",
    )
    .unwrap();

    let classifier = LanguageClassifier::new("de", &config).unwrap();
    assert!(classifier.is_profanity("mist"));
    assert!(classifier.is_stopword("und"));
    assert_eq!(classifier.profile().profanity().len(), 2);
}

#[test]
fn test_predicates_on_loaded_profile() {
    let (_dir, config) = setup();
    let classifier = LanguageClassifier::new("en", &config).unwrap();

    assert!(classifier.is_profanity("darn"));
    assert!(classifier.is_profanity("Drat"));
    assert!(!classifier.is_profanity("drat"));
    assert!(classifier.is_stopword("of"));
    assert!(!classifier.is_stopword("und"));

    assert!(classifier.is_word("hello"));
    assert!(!classifier.is_word("42"));

    assert!(classifier.is_web("https://example.com/a?b=c"));
    assert!(classifier.is_web("hello"));

    assert!(classifier.is_uuid("123e4567-e89b-12d3-a456-426614174000"));
    assert!(!classifier.is_uuid("not-a-uuid"));
    assert!(!classifier.is_uuid(""));

    assert!(classifier.is_too_long("extraordinarily"));
    assert!(!classifier.is_too_long("ordinary"));
}

#[test]
fn test_duplicate_detection_flow() {
    let (_dir, config) = setup();
    let mut classifier = LanguageClassifier::new("en", &config).unwrap();

    assert!(!classifier.is_duplicate("cat"));
    classifier.add_word(WordEntry::new("cat."));
    assert!(classifier.is_duplicate("Cat!"));
    assert!(classifier.is_duplicate("(cat)"));
    assert!(classifier.is_duplicate("-cat-"));
    assert!(!classifier.is_duplicate("cat"));
    assert!(!classifier.is_duplicate("cats!"));
}

#[test]
fn test_pipeline_style_admission() {
    let (_dir, config) = setup();
    let mut classifier = LanguageClassifier::new("en", &config).unwrap();

    let tokens = [
        "The", "the", "cat.", "Cat!", "sat", "on", "darn", "1999", "mat,", "Mat", "sat",
    ];
    for token in tokens {
        let verdict = classifier.classify(token);
        if verdict.word
            && !verdict.profanity
            && !verdict.stopword
            && !verdict.duplicate
            && !verdict.too_long
        {
            classifier.add(token);
        }
    }

    let admitted: Vec<&str> = classifier
        .words()
        .iter()
        .map(|entry| entry.word.as_str())
        .collect();
    // "sat" is admitted twice: already-canonical tokens are never duplicates
    assert_eq!(
        admitted,
        vec!["The", "cat.", "sat", "on", "mat,", "sat"]
    );
}

#[test]
fn test_languages_do_not_share_state() {
    let (_dir, config) = setup();
    let mut en = LanguageClassifier::new("en", &config).unwrap();
    let de = LanguageClassifier::new("de", &config).unwrap();

    en.add("Haus.");
    assert!(en.is_duplicate("HAUS"));
    assert!(!de.is_duplicate("HAUS"));
    assert!(!de.is_profanity("darn"));
    assert!(de.is_stopword("und"));
}

#[test]
fn test_forked_classifiers_run_on_threads() {
    let (_dir, config) = setup();
    let base = LanguageClassifier::new("en", &config).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let mut classifier = base.fork();
            std::thread::spawn(move || {
                let word = format!("word{worker}.");
                classifier.add(&word);
                classifier.is_duplicate(&format!("WORD{worker}"))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(base.words().is_empty());
}
