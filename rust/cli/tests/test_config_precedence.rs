use serial_test::serial;
use shortstack_cli::config::{
    self, BOTS_ENV, CONFIG_ENV, ConfigError, Overrides, SEED_ENV, STACK_ENV, ValueSource,
};
use shortstack_cli::run_with_input;
use std::io::Cursor;

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(prev) => unsafe { std::env::set_var(self.key, prev) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

fn clean_env() -> Vec<TempEnvVar> {
    [CONFIG_ENV, SEED_ENV, STACK_ENV, BOTS_ENV]
        .into_iter()
        .map(TempEnvVar::unset)
        .collect()
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> String {
    let path = dir.path().join("shortstack.toml");
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    let _env = clean_env();
    let resolved = config::load_with_sources(&Overrides::default()).unwrap();
    assert_eq!(resolved.config, config::Config::default());
    assert_eq!(resolved.sources.starting_stack, ValueSource::Default);
    assert_eq!(resolved.sources.seed, ValueSource::Default);
}

#[test]
#[serial]
fn file_then_env_then_flag() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "starting_stack = 40\nsmall_blind = 2\nbig_blind = 4\nbots = 5\nseed = 1\nhuman_name = \"Ana\"\n",
    );
    let _cfg = TempEnvVar::set(CONFIG_ENV, &path);
    let _stack = TempEnvVar::set(STACK_ENV, "70");
    let _seed = TempEnvVar::set(SEED_ENV, "9");

    let resolved = config::load_with_sources(&Overrides {
        seed: Some(123),
        ..Overrides::default()
    })
    .unwrap();
    let cfg = &resolved.config;
    assert_eq!((cfg.small_blind, cfg.big_blind), (2, 4));
    assert_eq!(resolved.sources.big_blind, ValueSource::File);
    assert_eq!(cfg.bots, 5);
    assert_eq!(resolved.sources.bots, ValueSource::File);
    assert_eq!(cfg.human_name, "Ana");
    assert_eq!(cfg.starting_stack, 70);
    assert_eq!(resolved.sources.starting_stack, ValueSource::Env);
    assert_eq!(cfg.seed, Some(123));
    assert_eq!(resolved.sources.seed, ValueSource::Flag);
}

#[test]
#[serial]
fn invalid_env_value_is_an_error() {
    let _env = clean_env();
    let _bots = TempEnvVar::set(BOTS_ENV, "many");
    let err = config::load(&Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains(BOTS_ENV)));
}

#[test]
#[serial]
fn out_of_range_values_fail_validation() {
    let _env = clean_env();
    let _bots = TempEnvVar::set(BOTS_ENV, "9");
    assert!(config::load(&Overrides::default()).is_err());
    // a flag can bring it back in range
    let cfg = config::load(&Overrides {
        bots: Some(2),
        ..Overrides::default()
    })
    .unwrap();
    assert_eq!(cfg.bots, 2);
}

#[test]
#[serial]
fn unreadable_or_malformed_file_is_reported() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let _cfg = TempEnvVar::set(CONFIG_ENV, &missing.to_string_lossy());
    assert!(matches!(
        config::load(&Overrides::default()),
        Err(ConfigError::Io(_))
    ));

    let path = write_config(&dir, "bots = \"three\"\n");
    let _cfg = TempEnvVar::set(CONFIG_ENV, &path);
    assert!(matches!(
        config::load(&Overrides::default()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
#[serial]
fn cfg_command_prints_values_and_sources() {
    let _env = clean_env();
    let _bots = TempEnvVar::set(BOTS_ENV, "3");
    let mut input = Cursor::new(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(
        ["shortstack", "cfg", "--stack", "250"],
        &mut input,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["bots"]["value"], 3);
    assert_eq!(json["bots"]["source"], "env");
    assert_eq!(json["starting_stack"]["value"], 250);
    assert_eq!(json["starting_stack"]["source"], "flag");
    assert_eq!(json["small_blind"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn cfg_command_fails_on_bad_config() {
    let _env = clean_env();
    let _stack = TempEnvVar::set(STACK_ENV, "0");
    let mut input = Cursor::new(Vec::new());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(["shortstack", "cfg"], &mut input, &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("starting_stack must be >0"));
}

#[test]
#[serial]
fn env_seed_makes_deal_reproducible() {
    let _env = clean_env();
    let _seed = TempEnvVar::set(SEED_ENV, "77");
    let deal = || {
        let mut input = Cursor::new(Vec::new());
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = run_with_input(["shortstack", "deal"], &mut input, &mut out, &mut err);
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    };
    let first = deal();
    assert!(first.starts_with("Seed: 77"));
    assert_eq!(first, deal());
}

#[test]
#[serial]
fn human_name_of_a_bot_seat_is_refused() {
    let _env = clean_env();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "human_name = \"Bot2\"\n");
    let _cfg = TempEnvVar::set(CONFIG_ENV, &path);

    let mut input = Cursor::new(b"q\n".to_vec());
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(
        ["shortstack", "play", "--seed", "1"],
        &mut input,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("human_name 'Bot2' is already a seat name"));
    assert!(out.is_empty());
}
