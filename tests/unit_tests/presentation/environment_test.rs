use bhasha::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_maps_to_environment() {
    assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    assert_eq!(" Test ".parse::<Environment>().unwrap(), Environment::Test);
    assert_eq!("production".parse::<Environment>().unwrap(), Environment::Prod);
}

#[test]
fn given_unknown_name_when_parsing_then_error_names_the_variable() {
    let error = "staging".parse::<Environment>().unwrap_err();
    assert!(error.contains("APP_ENVIRONMENT"));
    assert!(error.contains("staging"));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_lowercase_suffix() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default(), Environment::Local);
}
