//! Openapi command handler
//!
//! Renders the OpenAPI document for the admin endpoints.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use utoipa::OpenApi;

use crate::api::doc::ApiDoc;

pub struct OpenapiCommandHandler {
    output: Option<PathBuf>,
}

impl OpenapiCommandHandler {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    /// Pretty-printed JSON document
    pub fn render() -> anyhow::Result<String> {
        ApiDoc::openapi()
            .to_pretty_json()
            .context("Failed to serialize OpenAPI document")
    }

    /// Writes the document to the output file, or stdout when none was given
    pub fn execute(&self) -> anyhow::Result<()> {
        let json = Self::render()?;

        match self.output {
            Some(ref path) => fs::write(path, json.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => println!("{json}"),
        }

        Ok(())
    }
}
