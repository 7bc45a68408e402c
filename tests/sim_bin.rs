use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "7", "5"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 5);
    assert_eq!(v["results"].as_array().map(|r| r.len()), Some(5));
    let won = v["won"].as_u64().unwrap();
    let lost = v["lost"].as_u64().unwrap();
    assert_eq!(won + lost, 5);
    assert!(v["results"][0]["word"].is_string());
}

#[test]
fn sim_binary_rejects_bad_arguments() {
    for args in [&["abc"][..], &["7", "many"][..], &[][..], &["1", "2", "3"][..]] {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--bin", "sim", "--"])
            .args(args)
            .current_dir(env!("CARGO_MANIFEST_DIR"))
            .output()
            .expect("failed to run sim binary");
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
        assert!(stderr.contains("Usage:"), "args {:?}: {}", args, stderr);
        assert!(output.stdout.is_empty());
    }
}
