//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_scrollpin_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("scrollpin") && path_str.ends_with("config.toml"),
        "Path should contain 'scrollpin' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = write_temp_config(
        "scrollpin_test_config_valid.toml",
        r#"
trigger_policy = "bottom-visibility"
axis = "vertical"
idle_threshold_secs = 4.5
timer_period_secs = 0.5
gesture_settle_ms = 100
"#,
    );

    let config = load_config_file(&path)
        .expect("Should successfully parse valid TOML")
        .expect("File exists");

    assert_eq!(config.trigger_policy, Some(TriggerPolicy::BottomVisibility));
    assert_eq!(config.axis, Some(Axis::Vertical));
    assert_eq!(config.idle_threshold_secs, Some(4.5));
    assert_eq!(config.timer_period_secs, Some(0.5));
    assert_eq!(config.gesture_settle_ms, Some(100));
    assert_eq!(config.log_file_path, None);

    let _ = fs::remove_file(&path);
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let path = write_temp_config("scrollpin_test_config_unknown.toml", "autoscroll = true\n");

    let result = load_config_file(&path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn load_config_file_rejects_unknown_policy_name() {
    let path = write_temp_config(
        "scrollpin_test_config_bad_policy.toml",
        "trigger_policy = \"sticky\"\n",
    );

    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    let _ = fs::remove_file(&path);
}

#[test]
fn load_config_file_rejects_invalid_toml() {
    let path = write_temp_config("scrollpin_test_config_invalid.toml", "idle_threshold_secs = [\n");

    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    let _ = fs::remove_file(&path);
}

#[test]
fn empty_config_file_is_all_defaults() {
    let path = write_temp_config("scrollpin_test_config_empty.toml", "");

    let config = load_config_file(&path).unwrap();
    assert_eq!(config, Some(ConfigFile::default()));
    assert_eq!(
        merge_config(config),
        ResolvedConfig::default(),
        "Empty file should resolve to defaults"
    );

    let _ = fs::remove_file(&path);
}

#[test]
fn merge_config_none_returns_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved.trigger_policy, TriggerPolicy::IdleTimer);
    assert_eq!(resolved.idle_threshold_secs, 10.0);
    assert_eq!(resolved.timer_period_secs, 2.0);
    assert_eq!(resolved.gesture_settle_ms, 250);
}

#[test]
fn merge_config_partial_file_keeps_other_defaults() {
    let resolved = merge_config(Some(ConfigFile {
        idle_threshold_secs: Some(3.0),
        ..ConfigFile::default()
    }));

    assert_eq!(resolved.idle_threshold_secs, 3.0);
    assert_eq!(resolved.timer_period_secs, 2.0);
    assert_eq!(resolved.trigger_policy, TriggerPolicy::IdleTimer);
}

#[test]
#[serial(env)]
fn explicit_path_beats_env_var() {
    let explicit = write_temp_config(
        "scrollpin_test_config_explicit.toml",
        "idle_threshold_secs = 1.0\n",
    );
    let from_env = write_temp_config(
        "scrollpin_test_config_env.toml",
        "idle_threshold_secs = 2.0\n",
    );
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone())).unwrap().unwrap();
    assert_eq!(config.idle_threshold_secs, Some(1.0));

    env::remove_var(CONFIG_ENV_VAR);
    let _ = fs::remove_file(&explicit);
    let _ = fs::remove_file(&from_env);
}

#[test]
#[serial(env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = write_temp_config(
        "scrollpin_test_config_env_only.toml",
        "timer_period_secs = 0.25\n",
    );
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.timer_period_secs, Some(0.25));

    env::remove_var(CONFIG_ENV_VAR);
    let _ = fs::remove_file(&from_env);
}

#[test]
#[serial(env)]
fn env_policy_override_applies() {
    env::set_var(POLICY_ENV_VAR, "bottom-visibility");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(POLICY_ENV_VAR);

    assert_eq!(
        resolved.map(|c| c.trigger_policy),
        Ok(TriggerPolicy::BottomVisibility)
    );
}

#[test]
#[serial(env)]
fn env_policy_override_rejects_unknown_name() {
    env::set_var(POLICY_ENV_VAR, "whenever");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(POLICY_ENV_VAR);

    assert_eq!(resolved, Err(ConfigError::UnknownPolicy("whenever".into())));
}

#[test]
#[serial(env)]
fn env_without_policy_leaves_config_unchanged() {
    env::remove_var(POLICY_ENV_VAR);
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved, Ok(ResolvedConfig::default()));
}

#[test]
fn cli_overrides_win() {
    let base = merge_config(Some(ConfigFile {
        trigger_policy: Some(TriggerPolicy::BottomVisibility),
        idle_threshold_secs: Some(30.0),
        ..ConfigFile::default()
    }));

    let resolved = apply_cli_overrides(
        base,
        CliOverrides {
            trigger_policy: Some(TriggerPolicy::IdleTimer),
            idle_threshold_secs: Some(5.0),
            timer_period_secs: None,
        },
    );

    assert_eq!(resolved.trigger_policy, TriggerPolicy::IdleTimer);
    assert_eq!(resolved.idle_threshold_secs, 5.0);
    assert_eq!(resolved.timer_period_secs, 2.0);
}

#[test]
fn surface_config_validates_resolved_values() {
    let resolved = ResolvedConfig {
        idle_threshold_secs: -2.0,
        ..ResolvedConfig::default()
    };
    assert_eq!(
        resolved.surface_config(),
        Err(ConfigError::NegativeDuration {
            field: "idle_threshold_secs",
            value: -2.0
        })
    );

    let ok = ResolvedConfig::default().surface_config().unwrap();
    assert_eq!(ok.idle_threshold(), Duration::from_secs(10));
}

#[test]
fn gesture_settle_is_milliseconds() {
    let resolved = ResolvedConfig {
        gesture_settle_ms: 125,
        ..ResolvedConfig::default()
    };
    assert_eq!(resolved.gesture_settle(), Duration::from_millis(125));
}
