use anyhow::Context;
use ::csv::Writer;

/// Render rows as comma-separated values with a header record.
pub fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> anyhow::Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("CSV writer error: {e}"))?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}
