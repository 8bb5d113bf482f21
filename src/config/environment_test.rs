use super::Environment;
use crate::error::ConfigError;

#[test]
fn test_recognized_keys_parse() {
    // Every key the build tooling can pass must resolve
    assert_eq!(
        "development".parse::<Environment>().unwrap(),
        Environment::Development
    );
    assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!(
        "product".parse::<Environment>().unwrap(),
        Environment::Production
    );
}

#[test]
fn test_canonical_production_spelling_also_parses() {
    // "production" is the canonical name, "product" the legacy tooling key
    assert_eq!(
        "production".parse::<Environment>().unwrap(),
        Environment::Production
    );
}

#[test]
fn test_unknown_key_is_an_error() {
    let err = "staging".parse::<Environment>().unwrap_err();

    match err {
        ConfigError::UnknownEnvironment(key) => {
            assert_eq!(key, "staging", "Error should carry the offending key");
        }
    }
}

#[test]
fn test_parsing_is_exact_not_fuzzy() {
    // Whitespace, casing and empty strings must not sneak through
    assert!("Development".parse::<Environment>().is_err());
    assert!(" test".parse::<Environment>().is_err());
    assert!("prod".parse::<Environment>().is_err());
    assert!("".parse::<Environment>().is_err());
}

#[test]
fn test_display_matches_canonical_key() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}

#[test]
fn test_all_covers_the_closed_set() {
    assert_eq!(Environment::ALL.len(), 3);

    for env in Environment::ALL {
        let round_tripped: Environment = env.as_str().parse().unwrap();
        assert_eq!(round_tripped, env);
    }
}

#[test]
fn test_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Environment::Production).unwrap();
    assert_eq!(json, "\"production\"");

    let env: Environment = serde_json::from_str("\"development\"").unwrap();
    assert_eq!(env, Environment::Development);
}

#[test]
fn test_serde_accepts_legacy_product_key() {
    let env: Environment = serde_json::from_str("\"product\"").unwrap();
    assert_eq!(env, Environment::Production);
}

#[test]
fn test_environment_predicates() {
    assert!(Environment::Development.is_development());
    assert!(!Environment::Development.is_production());
    assert!(Environment::Production.is_production());
    assert!(!Environment::Test.is_development());
}
