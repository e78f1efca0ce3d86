use std::path::Path;

use crate::report::Finding;

pub fn write_csv(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["status", "url"])?;
    for finding in findings {
        wtr.write_record([finding.status.to_string(), finding.url.clone()])?;
    }
    wtr.flush()?;
    Ok(())
}
