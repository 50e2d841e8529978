use forge_engine::EngineError;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `{error, kind, status}` for an engine failure on stderr.
pub fn print_error_envelope(error: &EngineError) {
    match serde_json::to_string(&error.envelope()) {
        Ok(body) => eprintln!("{body}"),
        Err(_) => eprintln!("tfg error: {error}"),
    }
}
