//! Common test utilities and fixtures for camel-lens integration tests
//!
//! - `TestRepo` for writing source files into a temporary directory and
//!   running the CLI against them
//! - Java route fixtures

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// A route builder exercising every recognizer question
pub const ORDER_ROUTE: &str = r#"package com.example.orders;

import org.apache.camel.Handler;
import org.apache.camel.RoutesBuilder;
import org.apache.camel.builder.RouteBuilder;
import org.apache.camel.support.ExpressionAdapter;

public class OrderRoute extends RouteBuilder {

    @Override
    public void configure() {
        from("jms:queue:orders?concurrentConsumers=5&maxConcurrentConsumers=10")
            .filter(simple("${header.priority} > 3"))
            .setHeader("region", jsonpath("$.region"))
            .bean(OrderService.class, "handle")
            .to("seda:" + target)
            .to("log:orders?level=INFO&showAll=true&multiline=true");

        fromF("file:%s?noop=true", inbox)
            .choice()
                .when(xpath("/order/@vip = 'true'"))
                    .to("direct:vip")
            .end();
    }
}

class OrderService {
    @Handler
    public String handle(String body) {
        return body;
    }
}

class RegionExpression extends ExpressionAdapter {
}

class AuditRoutes implements RoutesBuilder {
}
"#;

pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Write a file (creating parent directories)
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let path = self.file(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write file");
        self
    }

    /// Run the CLI with the repo's `config.toml` (missing means defaults)
    pub fn run_cli(&self, args: &[&str]) -> Output {
        let config = self.file("config.toml");
        Command::new(env!("CARGO_BIN_EXE_camel-lens"))
            .args(args)
            .arg("--config")
            .arg(&config)
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run camel-lens")
    }

    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args);
        assert!(
            output.status.success(),
            "camel-lens {:?} failed:\nstdout: {}\nstderr: {}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Returns (exit code, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (i32, String) {
        let output = self.run_cli(args);
        assert!(
            !output.status.success(),
            "camel-lens {:?} unexpectedly succeeded",
            args
        );
        (
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}
