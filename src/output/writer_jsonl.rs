use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::report::Finding;

pub fn write_jsonl(path: &Path, findings: &[Finding]) -> anyhow::Result<()> {
    let mut f = OpenOptions::new().append(true).create(true).open(path)?;
    for finding in findings {
        let line = serde_json::to_string(finding)?;
        f.write_all(line.as_bytes())?;
        f.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_finding() {
        let dir = std::env::temp_dir().join("dirhound_jsonl_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("findings.jsonl");
        let _ = std::fs::remove_file(&path);

        let findings = vec![
            Finding {
                url: "http://x.test/admin".into(),
                status: 403,
            },
            Finding {
                url: "http://x.test/login.php".into(),
                status: 200,
            },
        ];
        write_jsonl(&path, &findings).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Finding = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, findings[0]);
    }
}
