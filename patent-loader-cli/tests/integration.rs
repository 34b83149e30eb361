use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "patent_number,title,date,year,large_category,inventor,city,state,\
country,uspc,patent_url,application_number,pages,scan_date,image_url";

/// `pp-load` running inside `work_dir` with colors off.
fn pp_load(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("pp-load");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("FEDORA_USER");
    cmd.env_remove("FEDORA_PASSWORD");
    cmd
}

/// Batch directory with a config, one metadata row and its scan.
fn batch_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("batch.yml"),
        "REST_ENDPOINT: http://127.0.0.1:9/rest\n\
         FEDORA_USER: fedoraAdmin\n\
         FEDORA_PASSWORD: secret\n\
         ASSET_DIR: .\n\
         METADATA_FILE: metadata.csv\n\
         LOG_FILE: load.log\n",
    )
    .unwrap();
    std::fs::write(
        tmp.path().join("metadata.csv"),
        format!(
            "{HEADER}\nPP0012,Rose plant,1932-05-10,1932,Roses,Jane Doe;John Roe,Springfield;,\
IL,US,PLT/46,,12345,4,2015-06-01,pp0012.pdf\n\
PP0013,Carnation,1932-06-14,1932,Carnations,John Roe,Dayton,OH,US,PLT/68,,12346,2,2015-06-01,\n"
        ),
    )
    .unwrap();
    std::fs::write(tmp.path().join("pp0012.pdf"), b"").unwrap();
    tmp
}

// ============================================================================
// Happy path tests
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("pp-load")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pp-load"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("pp-load")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant patents batch loader"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn dry_run_checks_rows_without_network() {
    let tmp = batch_dir();
    pp_load(&tmp)
        .args(["-c", "batch.yml", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLANT PATENTS BATCH LOADER"))
        .stdout(predicate::str::contains(
            "SHA1 checksum: da39a3ee5e6b4b0d3255bfef95601890afd80709",
        ))
        .stdout(predicate::str::contains("<> dc:identifier \"PP0012\""))
        .stdout(predicate::str::contains("cannot access file"))
        .stdout(predicate::str::contains("0 loaded, 1 checked, 1 skipped, 0 failed"));

    assert!(!tmp.path().join("load.log").exists());
}

#[test]
fn dry_run_respects_limit() {
    let tmp = batch_dir();
    pp_load(&tmp)
        .args(["-c", "batch.yml", "--dry-run", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 loaded, 1 checked, 0 skipped, 0 failed"));
}

#[test]
fn quiet_prints_only_summary() {
    let tmp = batch_dir();
    pp_load(&tmp)
        .args(["-q", "-c", "batch.yml", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BATCH LOADER").not())
        .stdout(predicate::str::contains("1 checked"));
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn config_flag_is_required() {
    cargo_bin_cmd!("pp-load")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("pp-load")
        .args(["--verbose", "--quiet", "-c", "batch.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_config_file() {
    let tmp = TempDir::new().unwrap();
    pp_load(&tmp)
        .args(["-c", "nope.yml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: cannot read config"));
}

#[test]
fn missing_metadata_file() {
    let tmp = batch_dir();
    std::fs::remove_file(tmp.path().join("metadata.csv")).unwrap();
    pp_load(&tmp)
        .args(["-c", "batch.yml", "--dry-run"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read metadata"));
}

#[test]
fn unreachable_repository_is_fatal() {
    let tmp = batch_dir();
    pp_load(&tmp)
        .args(["-c", "batch.yml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot reach http://127.0.0.1:9/rest"))
        .stderr(predicate::str::contains("--skip-connection-check"));

    assert!(!tmp.path().join("load.log").exists());
}

#[test]
fn zero_limit_is_usage_error() {
    let tmp = batch_dir();
    pp_load(&tmp)
        .args(["-c", "batch.yml", "--limit", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value '0' for '--limit <N>'"));

    assert!(!tmp.path().join("load.log").exists());
}
