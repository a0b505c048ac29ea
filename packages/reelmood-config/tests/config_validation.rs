use toml::Value;

use reelmood_config::{Config, Error, validate};

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
catalog_path = "data/movies_with_emotions.json"
log_level    = "info"

[defaults]
top_k            = 10
min_review_count = 5

[ranking]
boost_cap       = 0.2
boost_ref_count = 100
tie_breaker     = "vote_count"
"#;

fn sample_with_ranking(key: &str, value: Value) -> Config {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("sample config parses");
	let ranking = root
		.get_mut("ranking")
		.and_then(Value::as_table_mut)
		.expect("sample config has [ranking]");

	ranking.insert(key.to_string(), value);

	toml::from_str(&toml::to_string(&root).expect("sample config renders"))
		.expect("sample config deserializes")
}

#[test]
fn sample_config_is_valid() {
	let cfg: Config = toml::from_str(SAMPLE_CONFIG_TOML).unwrap();

	assert!(validate(&cfg).is_ok());
}

#[test]
fn defaults_and_ranking_sections_are_optional() {
	let cfg: Config = toml::from_str("[service]\ncatalog_path = \"movies.json\"\n").unwrap();

	assert!(validate(&cfg).is_ok());
	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.defaults.top_k, 10);
	assert_eq!(cfg.defaults.min_review_count, 5);
	assert_eq!(cfg.ranking.boost_cap, 0.20);
	assert_eq!(cfg.ranking.boost_ref_count, 100);
	assert_eq!(cfg.ranking.tie_breaker, "vote_count");
}

#[test]
fn rejects_boost_cap_out_of_range() {
	let cfg = sample_with_ranking("boost_cap", Value::Float(1.5));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_boost_ref_count() {
	let cfg = sample_with_ranking("boost_ref_count", Value::Integer(0));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn rejects_unknown_tie_breaker_mode() {
	let cfg = sample_with_ranking("tie_breaker", Value::String("popularity".to_string()));

	assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
}

#[test]
fn accepts_title_tie_breaker_mode() {
	let cfg = sample_with_ranking("tie_breaker", Value::String("title".to_string()));

	assert!(validate(&cfg).is_ok());
}
