//! Output helpers for one-shot commands

use std::io::Write;

use serde::Serialize;

use super::errors::CliResult;

/// Write `value` as pretty-printed JSON followed by a newline
pub fn write_pretty<W: Write, T: Serialize>(mut out: W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_pretty() {
        let mut buf = Vec::new();
        write_pretty(&mut buf, &json!({"applicant": "Bay Area"})).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"applicant\": \"Bay Area\""));
    }
}
