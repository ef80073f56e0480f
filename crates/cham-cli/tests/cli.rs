use assert_cmd::Command;
use predicates::prelude::*;

const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";
const PLAIN_HEX: &str = "00112233445566778899aabbccddeeff";
const CIPHER_HEX: &str = "346074c3c50057b532ec648df7329348";

fn cham_cmd() -> Command {
    Command::cargo_bin("cham").unwrap()
}

#[test]
fn test_help_command() {
    cham_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CHAM-128/128"));
}

#[test]
fn test_demo_prints_reference_output() {
    let expected = "\nRoundKeys:7070303\nf0f0b0b\n17171313\n1f1f1b1b\n39222f34\n150e0318\n\
                    617a776c\n4d565b40\n\nData:\nc3746034\nb55700c5\n8d64ec32\n489332f7\n";
    cham_cmd().arg("demo").assert().success().stdout(expected);
}

#[test]
fn test_keys_command() {
    cham_cmd()
        .args(["keys", "--key-hex", KEY_HEX])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("07070303\n0f0f0b0b\n"))
        .stdout(predicate::str::ends_with("617a776c\n4d565b40\n"));
}

#[test]
fn test_enc_and_dec() {
    cham_cmd()
        .args(["enc", "--key-hex", KEY_HEX, "--block-hex", PLAIN_HEX])
        .assert()
        .success()
        .stdout(format!("{CIPHER_HEX}\n"));

    cham_cmd()
        .args(["dec", "--key-hex", KEY_HEX, "--block-hex", CIPHER_HEX])
        .assert()
        .success()
        .stdout(format!("{PLAIN_HEX}\n"));
}

#[test]
fn test_short_key_is_rejected() {
    cham_cmd()
        .args(["enc", "--key-hex", "0001", "--block-hex", PLAIN_HEX])
        .assert()
        .failure()
        .stderr(predicate::str::contains("16 bytes"));
}

#[test]
fn test_long_block_is_rejected() {
    let block = format!("{PLAIN_HEX}00");
    cham_cmd()
        .args(["enc", "--key-hex", KEY_HEX, "--block-hex", &block])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block must be 16 bytes"));
}

#[test]
fn test_check_with_seed() {
    cham_cmd()
        .args(["check", "--samples", "8", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checked 8 samples"));
}
