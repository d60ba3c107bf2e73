//! Side effects requested by components and the router that applies them.

use std::sync::Arc;

use composer_types::{FileReference, JobDocument};
use tracing::debug;

/// Side effects a component asks its host to perform.
///
/// Components never reach into the host; they describe what should happen and
/// the host decides how (see [`EffectRouter`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Emit the reconstructed file reference to the owner of the inspector.
    FileInputUpdated(FileReference),
    /// Emit a new job snapshot to the owner of the job editor.
    JobUpdated(Arc<JobDocument>),
    /// Show a one-line status message.
    StatusMessage(String),
    /// Internal state changed; the view must re-render.
    MarkForCheck,
    /// Hide the editor inspector panel.
    HideInspector,
}

/// Receives human-readable status lines. Fire-and-forget.
pub trait StatusReporter {
    fn instant(&self, message: &str);
}

/// Controls the visibility of the editor inspector panel. Fire-and-forget.
pub trait InspectorVisibility {
    fn hide(&self);
}

/// Update emitted upward to the owner of a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    File(FileReference),
    Job(Arc<JobDocument>),
}

/// Applies effects to the host collaborators.
///
/// Status messages and inspector requests are forwarded immediately; outbound
/// updates and render requests are collected for the host to drain.
pub struct EffectRouter<'a> {
    status: &'a dyn StatusReporter,
    inspector: &'a dyn InspectorVisibility,
    outbound: Vec<Outbound>,
    render_requested: bool,
}

impl<'a> EffectRouter<'a> {
    pub fn new(status: &'a dyn StatusReporter, inspector: &'a dyn InspectorVisibility) -> Self {
        Self {
            status,
            inspector,
            outbound: Vec::new(),
            render_requested: false,
        }
    }

    pub fn route(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            match effect {
                Effect::FileInputUpdated(file) => self.outbound.push(Outbound::File(file)),
                Effect::JobUpdated(job) => self.outbound.push(Outbound::Job(job)),
                Effect::StatusMessage(message) => self.status.instant(&message),
                Effect::MarkForCheck => self.render_requested = true,
                Effect::HideInspector => {
                    debug!("hiding inspector");
                    self.inspector.hide();
                }
            }
        }
    }

    /// Drains the updates collected so far, in emission order.
    pub fn take_outbound(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.outbound)
    }

    /// Returns whether a re-render was requested since the last call, and
    /// clears the request.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::replace(&mut self.render_requested, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingStatus {
        messages: RefCell<Vec<String>>,
    }

    impl StatusReporter for RecordingStatus {
        fn instant(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct CountingInspector {
        hidden: Cell<usize>,
    }

    impl InspectorVisibility for CountingInspector {
        fn hide(&self) {
            self.hidden.set(self.hidden.get() + 1);
        }
    }

    #[test]
    fn routes_each_effect_to_its_collaborator() {
        let status = RecordingStatus::default();
        let inspector = CountingInspector::default();
        let mut router = EffectRouter::new(&status, &inspector);
        let job = Arc::new(JobDocument::default());

        router.route([
            Effect::StatusMessage("Updated job value of x.".to_string()),
            Effect::JobUpdated(Arc::clone(&job)),
            Effect::MarkForCheck,
            Effect::HideInspector,
        ]);

        assert_eq!(*status.messages.borrow(), vec!["Updated job value of x.".to_string()]);
        assert_eq!(inspector.hidden.get(), 1);
        assert_eq!(router.take_outbound(), vec![Outbound::Job(job)]);
        assert!(router.take_outbound().is_empty());
        assert!(router.take_render_request());
        assert!(!router.take_render_request());
    }
}
