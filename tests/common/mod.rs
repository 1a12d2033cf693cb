//! Common test fixtures and helpers
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::FixtureProject;
//! ```
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use retest::{CallGraph, MethodNode, NodeOrigin};

/// Application-side method node, no constructor semantics
pub fn app_node(signature: &str, class: &str) -> MethodNode {
    MethodNode::new(signature, class, NodeOrigin::Application, false, 0)
}

/// Zero-argument constructor node
pub fn ctor_node(signature: &str, class: &str) -> MethodNode {
    MethodNode::new(signature, class, NodeOrigin::Application, true, 0)
}

/// Platform-loader node (pruned before selection)
pub fn platform_node(signature: &str, class: &str) -> MethodNode {
    MethodNode::new(signature, class, NodeOrigin::Platform, false, 0)
}

/// Build a graph from plain (signature, class) nodes and edge pairs
pub fn graph(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> CallGraph {
    let mut g = CallGraph::new();
    for (sig, class) in nodes {
        g.add_node(app_node(sig, class));
    }
    for (caller, callee) in edges {
        g.add_edge(caller, callee);
    }
    g
}

/// Analyzer dump used by the CLI tests. Call chains:
///   OrderTest.testTotal   → OrderService.total → Money.add
///   PricingTest.testRate  → Money.rate
/// plus pruning fodder: OrderTest's zero-arg constructor and a
/// platform-loader Object constructor.
pub const DEMO_DUMP: &str = r#"{
  "version": 1,
  "nodes": [
    {"signature": "com.acme.OrderTest.testTotal()V", "class": "com.acme.OrderTest"},
    {"signature": "com.acme.OrderTest.<init>()V", "class": "com.acme.OrderTest", "constructor": true, "arity": 0},
    {"signature": "com.acme.PricingTest.testRate()V", "class": "com.acme.PricingTest"},
    {"signature": "com.acme.OrderService.total(Lcom/acme/Order;)I", "class": "com.acme.OrderService"},
    {"signature": "com.acme.Money.add(II)I", "class": "com.acme.Money"},
    {"signature": "com.acme.Money.rate()I", "class": "com.acme.Money"},
    {"signature": "java.lang.Object.<init>()V", "class": "java.lang.Object", "origin": "platform", "constructor": true, "arity": 0}
  ],
  "edges": [
    ["com.acme.OrderTest.testTotal()V", "com.acme.OrderService.total(Lcom/acme/Order;)I"],
    ["com.acme.OrderService.total(Lcom/acme/Order;)I", "com.acme.Money.add(II)I"],
    ["com.acme.PricingTest.testRate()V", "com.acme.Money.rate()I"],
    ["com.acme.OrderTest.<init>()V", "java.lang.Object.<init>()V"]
  ]
}"#;

/// Temp workspace with an analyzed project directory holding [`DEMO_DUMP`].
///
/// The temp root doubles as the CWD for binary invocations, so default
/// artifacts land inside it and vanish with the fixture.
pub struct FixtureProject {
    dir: TempDir,
    project: PathBuf,
}

impl FixtureProject {
    pub fn new() -> Self {
        Self::with_dump(DEMO_DUMP)
    }

    pub fn with_dump(dump: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let project = dir.path().join("proj");
        std::fs::create_dir(&project).expect("Failed to create project dir");
        std::fs::write(project.join("callgraph.json"), dump).expect("Failed to write dump");
        Self { dir, project }
    }

    /// Project dir without any dump inside
    pub fn without_dump() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let project = dir.path().join("proj");
        std::fs::create_dir(&project).expect("Failed to create project dir");
        Self { dir, project }
    }

    /// Temp root (use as the binary's CWD)
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Analyzed project directory
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Write a change-info file into the temp root
    pub fn write_changes(&self, text: &str) -> PathBuf {
        let path = self.dir.path().join("changes.txt");
        std::fs::write(&path, text).expect("Failed to write change info");
        path
    }
}
