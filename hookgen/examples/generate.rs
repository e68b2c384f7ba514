//! Example generation run against a live GraphQL endpoint.
//!
//! Run with: `cargo run --example generate -- http://localhost:4000/graphql`
//!
//! Fetches the schema, generates operation documents and hooks for both
//! root types, and writes the artifacts under `generated/`.

use hookgen::prelude::*;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:4000/graphql".to_string());

    println!("Introspecting {endpoint}");

    let schema = IntrospectionClient::new(&endpoint).introspect().await?;
    let generator = Generator::new(&schema);
    let out = Path::new("generated");

    for root in [RootKind::Query, RootKind::Mutation] {
        let documents = generator.generate(root, GenMode::Document);
        let hooks = generator.generate(root, GenMode::Hook);

        println!(
            "{}: {} documents, {} hooks",
            root.object_name(),
            documents.len(),
            hooks.len()
        );

        let dir = out.join(root.keyword());
        write_artifacts(&dir.join("documents"), &documents)?;
        write_artifacts(&dir.join("hooks"), &hooks)?;
    }

    println!("Artifacts written to {}", out.display());

    Ok(())
}
