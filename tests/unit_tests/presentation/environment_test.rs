use contract_analyzer::presentation::config::{Environment, UnknownEnvironment};

#[test]
fn given_known_names_when_parsing_environment_then_maps_case_insensitively() {
    assert_eq!("local".parse(), Ok(Environment::Local));
    assert_eq!("TEST".parse(), Ok(Environment::Test));
    assert_eq!(" Prod ".parse(), Ok(Environment::Prod));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!("development".parse(), Ok(Environment::Local));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = "Staging".parse::<Environment>();

    assert_eq!(result, Err(UnknownEnvironment("staging".to_string())));
    assert!(result.unwrap_err().to_string().contains("staging"));
}

#[test]
fn given_environment_when_displayed_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::Test.config_file_name(), "test.toml");
    assert_eq!(Environment::default(), Environment::Local);
}

#[test]
fn given_environments_when_checking_error_detail_exposure_then_only_local_exposes() {
    assert!(Environment::Local.exposes_error_details());
    assert!(!Environment::Test.exposes_error_details());
    assert!(!Environment::Prod.exposes_error_details());
}
