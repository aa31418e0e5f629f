//! Print the OpenAPI document as JSON.

use acronyms::doc::ApiDoc;
use color_eyre::eyre::{Context, Result};
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("serialise OpenAPI document")?;
    println!("{json}");
    Ok(())
}
