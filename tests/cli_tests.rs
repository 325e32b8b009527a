//! Tests for the camel-lens binary

mod common;

use common::{assert_valid_json, TestRepo, ORDER_ROUTE};

#[test]
fn test_component_command() {
    let repo = TestRepo::new();
    assert_eq!(repo.run_cli_success(&["component", "seda:foo?size=10"]), "seda\n");
    // no component separator prints nothing
    assert_eq!(repo.run_cli_success(&["component", "seda"]), "");

    let output = repo.run_cli_success(&["component", "jms:queue:in", "-f", "json"]);
    let json = assert_valid_json(&output, "component");
    assert_eq!(json["component"], "jms");
    assert_eq!(json["uri"], "jms:queue:in");
}

#[test]
fn test_query_marker_command() {
    let repo = TestRepo::new();
    assert_eq!(repo.run_cli_success(&["query-marker", "timer:foo?period=1"]), "true\n");
    assert_eq!(repo.run_cli_success(&["query-marker", "timer:foo"]), "false\n");
}

#[test]
fn test_language_command() {
    let repo = TestRepo::new();
    assert_eq!(repo.run_cli_success(&["language", "js"]), "javaScript\n");
    assert_eq!(repo.run_cli_success(&["language", "tokenizeXml"]), "tokenize\n");
    assert_eq!(repo.run_cli_success(&["language", "simple"]), "simple\n");
}

#[test]
fn test_wrap_command() {
    let repo = TestRepo::new();
    let output = repo.run_cli_success(&["wrap", "aaaa&bbbb&cccc", "--width", "8"]);
    assert_eq!(output, "aaaa&bbbb\n&cccc\n");

    let output = repo.run_cli_success(&["wrap", "a,b,c", "-w", "1", "-s", ",", "-f", "json"]);
    let json = assert_valid_json(&output, "wrap");
    assert_eq!(json["width"], 1);
    assert_eq!(json["lines"], serde_json::json!(["a", ",b", ",c"]));
}

#[test]
fn test_wrap_uses_config_file() {
    let repo = TestRepo::new();
    repo.add_file(
        "config.toml",
        r#"
[display]
wrap_width = 8
separator = ";"
"#,
    );
    let output = repo.run_cli_success(&["wrap", "aaaa;bbbb;cccc"]);
    assert_eq!(output, "aaaa;bbbb\n;cccc\n");
}

#[test]
fn test_scan_text() {
    let repo = TestRepo::new();
    repo.add_file("src/OrderRoute.java", ORDER_ROUTE);

    let output = repo.run_cli_success(&["scan", "src/OrderRoute.java"]);
    assert!(output.contains("route starts:"), "output:\n{}", output);
    assert!(output.contains("direct:vip"));
    assert!(output.contains("handler methods: com.example.orders.OrderService.handle"));
}

#[test]
fn test_scan_json() {
    let repo = TestRepo::new();
    repo.add_file("OrderRoute.java", ORDER_ROUTE);

    let output = repo.run_cli_success(&["s", "OrderRoute.java", "--format", "json"]);
    let json = assert_valid_json(&output, "scan");
    assert_eq!(json["file"], "OrderRoute.java");
    assert_eq!(json["route_starts"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["skipped_literals"], 1);
    assert_eq!(json["beans"][0]["declared_at"], 27);
}

#[test]
fn test_scan_with_java_recognizer_disabled() {
    let repo = TestRepo::new();
    repo.add_file("OrderRoute.java", ORDER_ROUTE);
    repo.add_file("config.toml", "[recognizers]\njava = false\n");

    let output = repo.run_cli_success(&["scan", "OrderRoute.java", "-f", "json"]);
    let json = assert_valid_json(&output, "scan disabled");
    assert_eq!(json["endpoints"], serde_json::json!([]));
    assert_eq!(json["route_starts"], serde_json::json!([]));
}

#[test]
fn test_scan_missing_file() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["scan", "Missing.java"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Missing.java"), "stderr: {}", stderr);
}

#[test]
fn test_scan_unsupported_extension() {
    let repo = TestRepo::new();
    repo.add_file("notes.txt", "from(\"timer:foo\")");
    let (code, _) = repo.run_cli_failure(&["scan", "notes.txt"]);
    assert_eq!(code, 2);

    // XML routes are recognized as DSL files but have no scanner
    repo.add_file("camel-context.xml", "<routes/>");
    let (code, stderr) = repo.run_cli_failure(&["scan", "camel-context.xml"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("xml"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_is_reported() {
    let repo = TestRepo::new();
    repo.add_file("config.toml", "[display]\nwrap_width = 0\n");
    let (code, stderr) = repo.run_cli_failure(&["language", "js"]);
    assert_eq!(code, 5);
    assert!(stderr.contains("config.toml"), "stderr: {}", stderr);
}

#[test]
fn test_config_command() {
    let repo = TestRepo::new();
    let output = repo.run_cli_success(&["config", "-f", "json"]);
    let json = assert_valid_json(&output, "config");
    assert_eq!(json["display"]["wrap_width"], 120);
    assert_eq!(json["display"]["separator"], "&");
    assert_eq!(json["recognizers"]["java"], true);

    let text = repo.run_cli_success(&["config"]);
    assert!(text.contains("wrap_width = 120"), "output:\n{}", text);
}

#[test]
fn test_config_key_lookup() {
    let repo = TestRepo::new();
    repo.add_file("config.toml", "[logging]\nlevel = \"info\"\n");
    assert_eq!(repo.run_cli_success(&["config", "logging.level"]), "info\n");
    assert_eq!(
        repo.run_cli_success(&["config", "display.separator"]),
        "&\n"
    );

    let (code, stderr) = repo.run_cli_failure(&["config", "display.nope"]);
    assert_eq!(code, 5);
    assert!(stderr.contains("display.nope"), "stderr: {}", stderr);
}
