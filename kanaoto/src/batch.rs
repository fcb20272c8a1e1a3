/// How a single work item ended up. A pass never aborts on `Failed`; the
/// absent file is simply retried by the existence check on the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Done,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ItemReport {
    pub(crate) id: String,
    pub(crate) outcome: Outcome,
}

impl ItemReport {
    pub(crate) fn done(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Done,
        }
    }

    pub(crate) fn skipped(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Skipped,
        }
    }

    pub(crate) fn failed(id: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            id: id.into(),
            outcome: Outcome::Failed(format!("{error:#}")),
        }
    }
}

pub(crate) fn log_summary(pass: &str, reports: &[ItemReport]) {
    let mut done = 0;
    let mut skipped = 0;
    let mut failed = Vec::new();
    for report in reports {
        match &report.outcome {
            Outcome::Done => done += 1,
            Outcome::Skipped => skipped += 1,
            Outcome::Failed(_) => failed.push(report.id.as_str()),
        }
    }
    tracing::info!(
        "{pass} finished: {done} new, {skipped} skipped, {} failed",
        failed.len(),
    );
    if !failed.is_empty() {
        tracing::warn!("failed items: {}", failed.join(", "));
    }
}
