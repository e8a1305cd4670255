use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::PipelineReport;

/// Machine-readable report, written as pretty-printed JSON.
pub struct MachineReport<'a> {
    report: &'a PipelineReport,
}

impl<'a> MachineReport<'a> {
    pub fn new(report: &'a PipelineReport) -> Self {
        Self { report }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self.report).context("Failed to write JSON")?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self.report).context("Failed to serialize report")
    }
}

/// Human-readable report: transcription followed by the entity lists.
pub struct HumanReport<'a> {
    report: &'a PipelineReport,
}

impl<'a> HumanReport<'a> {
    pub fn new(report: &'a PipelineReport) -> Self {
        Self { report }
    }

    /// Format the report as Markdown-flavored text.
    ///
    /// Entity sections render in Organizations, Locations, Persons order.
    /// An empty category renders its heading with no bullets.
    pub fn format(&self) -> String {
        let mut output = String::new();

        output.push_str("### Transcription\n\n");
        output.push_str(self.report.transcript.trim());
        output.push_str("\n\n### Extracted Entities\n\n");

        push_section(&mut output, "Organizations (ORGs)", &self.report.entities.organizations);
        push_section(&mut output, "Locations (LOCs)", &self.report.entities.locations);
        push_section(&mut output, "Persons (PERs)", &self.report.entities.persons);

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())
            .with_context(|| format!("Failed to write file: {:?}", path))?;
        Ok(())
    }
}

fn push_section(output: &mut String, heading: &str, items: &[String]) {
    output.push_str(&format!("#### {}:\n", heading));
    for item in items {
        output.push_str(&format!("- {}\n", item));
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupedEntities;
    use crate::pipeline::RunMetadata;

    fn report(transcript: &str, entities: GroupedEntities) -> PipelineReport {
        PipelineReport {
            transcript: transcript.to_string(),
            metadata: RunMetadata {
                request_id: "test-run".to_string(),
                audio_bytes: 42,
                spans_tagged: entities.len(),
                mentions_grouped: entities.len(),
            },
            entities,
        }
    }

    #[test]
    fn test_format_renders_display_order() {
        let entities = GroupedEntities {
            persons: vec!["Alice".to_string(), "Bob".to_string()],
            organizations: vec!["Acme".to_string()],
            locations: vec!["Paris".to_string()],
        };
        let report = report("Alice from Acme flew to Paris.", entities);

        let text = HumanReport::new(&report).format();

        // Organizations first, then locations, then persons
        let org_pos = text.find("Organizations (ORGs)").unwrap();
        let loc_pos = text.find("Locations (LOCs)").unwrap();
        let per_pos = text.find("Persons (PERs)").unwrap();
        assert!(org_pos < loc_pos && loc_pos < per_pos);

        assert!(text.contains("### Transcription"));
        assert!(text.contains("- Acme\n"));
        assert!(text.contains("- Paris\n"));
        assert!(text.contains("- Alice\n- Bob\n"));
    }

    #[test]
    fn test_format_empty_entities() {
        let report = report("Nothing of note was said.", GroupedEntities::new());

        let text = HumanReport::new(&report).format();

        assert!(text.contains("#### Organizations (ORGs):\n\n"));
        assert!(text.contains("#### Persons (PERs):\n\n"));
        assert!(!text.contains("- "));
    }

    #[test]
    fn test_machine_report_json() {
        let entities = GroupedEntities {
            persons: vec!["Alice".to_string()],
            organizations: vec![],
            locations: vec![],
        };
        let report = report("Alice spoke.", entities);

        let json = MachineReport::new(&report).to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["transcript"], "Alice spoke.");
        assert_eq!(value["entities"]["persons"][0], "Alice");
        assert_eq!(value["metadata"]["audio_bytes"], 42);
    }

    #[test]
    fn test_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("report.json");
        let text_path = dir.path().join("report.txt");
        let report = report("Hello.", GroupedEntities::new());

        MachineReport::new(&report).write_json(&json_path).unwrap();
        HumanReport::new(&report).write_file(&text_path).unwrap();

        assert!(json_path.exists());
        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.starts_with("### Transcription"));
    }
}
