use assert_cmd::Command;
use predicates::prelude::*;

fn ctl() -> Command {
    let mut cmd = Command::cargo_bin("reelvaultctl").expect("binary builds");
    // Fixtures only, so listings are identical on every run.
    cmd.env("REELVAULT_DEMO_ASSET_COUNT", "0");
    cmd
}

#[test]
fn help_documents_the_subcommands() {
    ctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("purchase"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn browse_lists_the_fixture_catalog() {
    ctl()
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modern Business Intro"))
        .stdout(predicate::str::contains("Upbeat Corporate"))
        .stdout(predicate::str::contains("Particle Explosion"));
}

#[test]
fn browse_filters_by_tag() {
    ctl()
        .arg("browse")
        .args(["--tag", "dramatic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Particle Explosion"))
        .stdout(predicate::str::contains("Modern Business Intro").not());
}

#[test]
fn browse_price_window_excludes_the_template() {
    ctl()
        .arg("browse")
        .args(["--price-min", "0.02", "--price-max", "0.04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Upbeat Corporate"))
        .stdout(predicate::str::contains("Particle Explosion"))
        .stdout(predicate::str::contains("Modern Business Intro").not());
}

#[test]
fn browse_emits_valid_json() {
    let output = ctl()
        .arg("browse")
        .args(["--sort", "price_low", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("browse --json is valid JSON");
    let listing = parsed.as_array().expect("top-level JSON array");
    assert_eq!(listing.len(), 3);
    assert_eq!(
        listing[0]["metadata"]["title"],
        serde_json::json!("Particle Explosion")
    );
}

#[test]
fn unknown_sort_option_is_rejected() {
    ctl()
        .arg("browse")
        .args(["--sort", "rating"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort option"));
}

#[test]
fn purchase_defaults_to_the_cheapest_listing_and_confirms() {
    let output = ctl()
        .arg("purchase")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let tx: serde_json::Value =
        serde_json::from_slice(&output).expect("purchase emits JSON");
    assert_eq!(tx["status"], serde_json::json!("confirmed"));
    assert_eq!(tx["kind"], serde_json::json!("purchase"));
    assert!(tx["settlement_hash"]
        .as_str()
        .is_some_and(|hash| hash.starts_with("0x")));
}

#[test]
fn generation_walks_to_completed() {
    ctl()
        .arg("generate")
        .args(["--type", "footage", "--prompt", "city skyline at dusk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"))
        .stdout(predicate::str::contains("remaining 9"));
}

#[test]
fn generation_rejects_over_long_footage() {
    ctl()
        .arg("generate")
        .args(["--type", "footage", "--prompt", "x", "--duration", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration must be"));
}
