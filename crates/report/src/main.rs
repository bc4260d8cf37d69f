//! Console audit runner: builds the sample armory, audits it, and prints the
//! report to stdout. Diagnostics go to stderr via tracing.

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    armory_observability::init();

    let armory = armory_report::demo::armory().context("failed to build the sample armory")?;
    let report = armory_report::audit(&armory, 5, 9);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    armory_report::render(&report, &mut out).context("failed to render the audit report")?;

    Ok(())
}
