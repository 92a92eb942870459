use crate::models::IndicatorRecord;
use anyhow::Context;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save observations as CSV with header.
pub fn save_csv<P: AsRef<Path>>(records: &[IndicatorRecord], path: P) -> anyhow::Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "indicator_id",
        "indicator_name",
        "entity_code",
        "entity_name",
        "year",
        "value",
    ))?;
    for r in records {
        wtr.serialize((
            &r.indicator_id,
            &r.indicator_name,
            &r.entity_code,
            &r.entity_name,
            r.year,
            r.value,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save observations as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(records: &[IndicatorRecord], path: P) -> anyhow::Result<()> {
    let mut f = File::create(path.as_ref())
        .with_context(|| format!("create {}", path.as_ref().display()))?;
    let s = serde_json::to_string_pretty(records)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Render records as a CSV string without touching the filesystem, for
/// clipboard-style export.
pub fn to_csv_string(records: &[IndicatorRecord]) -> Result<String, csv::Error> {
    let mut wtr = WriterBuilder::new().from_writer(vec![]);
    wtr.serialize((
        "indicator_id",
        "indicator_name",
        "entity_code",
        "entity_name",
        "year",
        "value",
    ))?;
    for r in records {
        wtr.serialize((
            &r.indicator_id,
            &r.indicator_name,
            &r.entity_code,
            &r.entity_name,
            r.year,
            r.value,
        ))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
