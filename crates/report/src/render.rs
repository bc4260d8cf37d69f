use std::io;

use crate::audit::AuditReport;
use crate::error::ReportError;

/// Write the formatted text summary of a report to `out`.
///
/// One block per section: a `== title ==` header followed by the section's
/// body lines, two-space indented. The header carries the run id so console
/// output can be matched against the structured log stream.
pub fn render(report: &AuditReport, out: &mut impl io::Write) -> Result<(), ReportError> {
    writeln!(out, "armory audit {}", report.run_id)?;
    writeln!(out, "generated at: {}", report.generated_at.to_rfc3339())?;
    writeln!(out, "items audited: {}", report.item_count)?;

    for section in &report.sections {
        writeln!(out)?;
        writeln!(out, "== {} ==", section.title)?;
        for line in &section.lines {
            writeln!(out, "  {line}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditSection;
    use armory_core::RunId;
    use chrono::TimeZone;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn fixed_report() -> AuditReport {
        AuditReport {
            run_id: RunId::from_uuid(Uuid::from_u128(0x42)),
            generated_at: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
            item_count: 1,
            sections: vec![
                AuditSection::new("Total power")
                    .with_line("35")
                    .with_metadata(json!({ "total_power": 35 })),
            ],
        }
    }

    #[test]
    fn render_emits_header_and_section_blocks() {
        let mut out = Vec::new();
        render(&fixed_report(), &mut out).unwrap();

        let expected = "\
armory audit 00000000-0000-0000-0000-000000000042
generated at: 2025-01-15T12:00:00+00:00
items audited: 1

== Total power ==
  35
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn render_surfaces_sink_failures() {
        struct FailingSink;

        impl io::Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        match render(&fixed_report(), &mut FailingSink) {
            Err(ReportError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
