use serial_test::serial;
use std::fs;
use takeout_fix::config::{load_config, CONFIG_ENV};
use takeout_fix::{default_config_path, Config, LogLevel};
use tempfile::tempdir;

struct EnvGuard;

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe { std::env::remove_var(CONFIG_ENV) };
    }
}

fn point_config_at(path: &std::path::Path) -> EnvGuard {
    unsafe { std::env::set_var(CONFIG_ENV, path) };
    EnvGuard
}

#[test]
#[serial]
fn env_var_selects_config_file() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("custom.xml");
    fs::write(
        &cfg_path,
        r#"<config>
  <repair_program>node</repair_program>
  <repair_arg>dist/cli.js</repair_arg>
  <edit_program>/opt/exiftool</edit_program>
  <log_level>debug</log_level>
</config>"#,
    )
    .unwrap();
    let _g = point_config_at(&cfg_path);

    assert_eq!(default_config_path().unwrap(), cfg_path);
    let (cfg, used) = load_config().unwrap();
    assert_eq!(used.as_deref(), Some(cfg_path.as_path()));
    assert_eq!(cfg.repair_program, "node");
    assert_eq!(cfg.repair_args, vec!["dist/cli.js"]);
    assert_eq!(cfg.edit_program, "/opt/exiftool");
    assert_eq!(cfg.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn missing_file_yields_defaults() {
    let td = tempdir().unwrap();
    let _g = point_config_at(&td.path().join("nope.xml"));

    let (cfg, used) = load_config().unwrap();
    assert!(used.is_none());
    assert_eq!(cfg, Config::default());
    assert!(!td.path().join("nope.xml").exists(), "no template is written implicitly");
}

#[test]
#[serial]
fn bad_log_level_is_invalid_config() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("c.xml");
    fs::write(&cfg_path, "<config><log_level>chatty</log_level></config>").unwrap();
    let _g = point_config_at(&cfg_path);

    let err = load_config().unwrap_err();
    let tf = err
        .downcast_ref::<takeout_fix::TakeoutFixError>()
        .expect("typed error");
    assert_eq!(tf.code(), 6);
}
