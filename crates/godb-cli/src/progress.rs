use std::io::IsTerminal;
use std::time::Duration;

use godb_graph::{BuildEvent, BuildObserver};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Spinner on stderr, hidden when stderr is not a terminal.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    #[cfg(test)]
    #[must_use]
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn set_message(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.to_string());
        }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

/// Human-readable line for a build milestone.
#[must_use]
pub fn describe(event: &BuildEvent) -> String {
    match event {
        BuildEvent::Classified {
            active,
            obsolete,
            rejected,
        } => format!("classified {active} active, {obsolete} obsolete, {rejected} skipped"),
        BuildEvent::SynonymsCollected { count } => format!("collected {count} synonyms"),
        BuildEvent::EdgesCollected {
            namespace,
            edges,
            dropped,
        } => format!("{namespace}: {edges} parent edges ({dropped} dropped)"),
        BuildEvent::ClosureComputed { namespace, pairs } => {
            format!("{namespace}: {pairs} offspring pairs")
        }
    }
}

impl BuildObserver for Progress {
    fn on_event(&self, event: &BuildEvent) {
        let message = describe(event);
        info!("{message}");
        self.set_message(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use godb_core::enums::Namespace;
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_closure_event() {
        let event = BuildEvent::ClosureComputed {
            namespace: Namespace::BiologicalProcess,
            pairs: 3,
        };
        assert_eq!(describe(&event), "BP: 3 offspring pairs");
    }

    #[test]
    fn describes_classification() {
        let event = BuildEvent::Classified {
            active: 10,
            obsolete: 1,
            rejected: 2,
        };
        assert_eq!(describe(&event), "classified 10 active, 1 obsolete, 2 skipped");
    }

    #[test]
    fn hidden_progress_accepts_events() {
        let progress = Progress::hidden();
        progress.on_event(&BuildEvent::SynonymsCollected { count: 4 });
        progress.finish_clear();
    }
}
