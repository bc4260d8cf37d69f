use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use armory_core::RunId;
use armory_inventory::Inventory;

/// One operation's summary inside an audit report.
///
/// `lines` carry the human-readable body the renderer prints; `metadata`
/// carries the same figures machine-readable, for callers that persist or
/// post-process reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSection {
    pub title: String,
    pub lines: Vec<String>,
    pub metadata: JsonValue,
}

impl AuditSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            metadata: JsonValue::Null,
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Result of auditing one inventory: every transformation's outcome, in a
/// fixed section order, stamped with a run id and a timestamp.
///
/// This is a presentation payload, not domain state. Rendering it is the
/// renderer's job; persisting or shipping it elsewhere is the caller's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub item_count: usize,
    pub sections: Vec<AuditSection>,
}

/// Run every inventory transformation and collect one section per operation.
///
/// `delta` feeds the upgrade passes, `threshold` the power searches. The
/// input inventory is never mutated; each section records the outcome of one
/// operation against the same starting state.
pub fn audit(inventory: &Inventory, delta: i64, threshold: i64) -> AuditReport {
    let run_id = RunId::new();
    tracing::info!(
        "Auditing {} item(s) with delta {} and threshold {} (run {})",
        inventory.len(),
        delta,
        threshold,
        run_id
    );

    let upgraded = inventory.upgrade(delta);
    let usable = inventory.usable();
    let combined = inventory.upgrade_usable(delta);
    let total_power = inventory.total_power();
    tracing::debug!(
        "Usable subset kept {} of {} item(s); total power {}",
        usable.len(),
        inventory.len(),
        total_power
    );

    let first_above_line = match inventory.first_above(threshold) {
        Some(item) => item.to_string(),
        None => "no match".to_string(),
    };
    let first_broken_line = match inventory.first_broken_index() {
        Some(position) => format!("{} at position {}", inventory.items()[position], position),
        None => "no broken items".to_string(),
    };

    let sections = vec![
        AuditSection::new("Inventory")
            .with_lines(item_lines(inventory))
            .with_metadata(json!({ "items": inventory.len() })),
        AuditSection::new(format!("Upgraded by {delta}"))
            .with_lines(item_lines(&upgraded))
            .with_metadata(json!({ "delta": delta, "items": upgraded.len() })),
        AuditSection::new("Usable items")
            .with_lines(item_lines(&usable))
            .with_metadata(json!({
                "kept": usable.len(),
                "dropped": inventory.len() - usable.len(),
            })),
        AuditSection::new("Upgraded and usable")
            .with_lines(item_lines(&combined))
            .with_metadata(json!({ "delta": delta, "kept": combined.len() })),
        AuditSection::new(format!("First above {threshold}"))
            .with_line(first_above_line)
            .with_metadata(json!({
                "threshold": threshold,
                "found": inventory.first_above(threshold).is_some(),
            })),
        AuditSection::new("First broken")
            .with_line(first_broken_line)
            .with_metadata(json!({ "position": inventory.first_broken_index() })),
        AuditSection::new("Any broken")
            .with_line(yes_no(inventory.any_broken()))
            .with_metadata(json!({ "any_broken": inventory.any_broken() })),
        AuditSection::new(format!("All above {threshold}"))
            .with_line(yes_no(inventory.all_above(threshold)))
            .with_metadata(json!({
                "threshold": threshold,
                "all_above": inventory.all_above(threshold),
            })),
        AuditSection::new("Total power")
            .with_line(total_power.to_string())
            .with_metadata(json!({ "total_power": total_power })),
    ];

    tracing::info!("Audit run {} assembled {} section(s)", run_id, sections.len());

    AuditReport {
        run_id,
        generated_at: Utc::now(),
        item_count: inventory.len(),
        sections,
    }
}

fn item_lines(inventory: &Inventory) -> Vec<String> {
    if inventory.is_empty() {
        vec!["(none)".to_string()]
    } else {
        inventory.iter().map(|item| item.to_string()).collect()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
