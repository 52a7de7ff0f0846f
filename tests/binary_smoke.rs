use assert_cmd::cargo::cargo_bin;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn binary_print_config_succeeds() {
    let me = cargo_bin!("takeout_fix");
    let out = Command::new(me)
        .arg("--print-config")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --print-config");
}

#[test]
fn missing_export_root_exits_with_code_2() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).expect("canonicalize tempdir");
    fs::create_dir_all(base.join("Takeout/Drive")).unwrap();

    let out = Command::new(cargo_bin!("takeout_fix"))
        .env("TAKEOUT_FIX_CONFIG", base.join("absent.xml"))
        .arg(base.join("Takeout"))
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Google"), "stderr should name the missing prefix: {stderr}");
}

#[test]
fn malformed_config_exits_with_code_6() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).expect("canonicalize tempdir");
    let cfg = base.join("config.xml");
    fs::write(&cfg, "<config><unknown_field>1</unknown_field></config>").unwrap();
    fs::create_dir_all(base.join("Takeout/Google Photos")).unwrap();

    let out = Command::new(cargo_bin!("takeout_fix"))
        .env("TAKEOUT_FIX_CONFIG", &cfg)
        .arg(base.join("Takeout"))
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(6));
}

#[test]
fn dry_run_leaves_export_untouched() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).expect("canonicalize tempdir");
    let root = base.join("Takeout/Google Photos");
    fs::create_dir_all(root.join("Photos from 2008")).unwrap();
    fs::create_dir_all(root.join("Trip")).unwrap();

    let out = Command::new(cargo_bin!("takeout_fix"))
        .env("TAKEOUT_FIX_CONFIG", base.join("absent.xml"))
        .arg("--dry-run")
        .arg("--repair-program")
        .arg("takeout-fix-no-such-program")
        .arg(base.join("Takeout"))
        .output()
        .expect("spawn binary");

    assert!(
        out.status.success(),
        "dry-run should not spawn tools; stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr
            .lines()
            .any(|l| l.contains("would run") && l.contains("Albums/Trip")),
        "album repair command should be previewed; stderr={stderr}"
    );
    assert!(!stderr.contains("No albums found"), "stderr={stderr}");
    assert!(root.join("Photos from 2008").is_dir());
    assert!(root.join("Trip").is_dir());
    assert!(!root.join("Photos").exists());
    assert!(!root.join("Albums").exists());
}
