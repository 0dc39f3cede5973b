use serde::Serialize;

use crate::domain::models::JsonOut;

/// Wrap any serializable payload in the `{ok: true, data}` envelope.
pub fn envelope<T: Serialize>(data: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

/// One row per entry in text mode, a single envelope under `--json`.
pub fn print_rows<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", envelope(data)?);
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// One summary line in text mode, the envelope under `--json`.
pub fn print_report<T: Serialize>(
    json: bool,
    data: T,
    line: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", envelope(&data)?);
    } else {
        println!("{}", line(&data));
    }
    Ok(())
}
