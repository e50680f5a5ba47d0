use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let written = overflow_core::presentation::http::openapi::write_openapi_snapshot()?;
    println!("OpenAPI snapshot written to {written}");
    Ok(())
}
