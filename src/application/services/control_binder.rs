//! Control panel binding: page events to coordinator refreshes.

use std::collections::BTreeSet;

use super::chart_coordinator::{ChartCoordinator, RefreshReport};
use crate::domain::controls::{
    ControlDocument, ControlId, FooterAnchor, FooterPosition, RefreshScope, read_selection,
};
use crate::domain::rendering::ChartRenderer;

/// An event raised by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// A control's value changed.
    Change(ControlId),
    /// The window scrolled to `scroll_y`.
    Scroll { scroll_y: f64 },
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum BinderOutcome {
    /// The coordinator redrew the charts of `scope`.
    Refreshed {
        scope: RefreshScope,
        report: RefreshReport,
    },
    /// The footer was repositioned.
    Repositioned(FooterPosition),
    /// The control had no listener, because it was absent when binding.
    Ignored(ControlId),
}

/// Holds one change listener per control present at bind time, plus the
/// scroll listener.
///
/// Handlers carry no logic of their own: a change snapshots the document and
/// invokes the coordinator with the control's [`RefreshScope`].
#[derive(Debug, Clone)]
pub struct ControlPanelBinder {
    bound: BTreeSet<ControlId>,
    footer: FooterAnchor,
}

impl ControlPanelBinder {
    /// Binds listeners for every control present in `document`.
    ///
    /// Missing controls are skipped; binding never fails.
    pub fn bind<D>(document: &D, footer: FooterAnchor) -> Self
    where
        D: ControlDocument + ?Sized,
    {
        let mut bound = BTreeSet::new();
        for control in ControlId::ALL {
            if document.contains(control) {
                bound.insert(control);
            } else {
                tracing::debug!(control = %control, selector = control.selector(), "Control not found, skipping listener");
            }
        }

        Self { bound, footer }
    }

    pub fn is_bound(&self, control: ControlId) -> bool {
        self.bound.contains(&control)
    }

    /// Controls with a change listener, in binding order.
    pub fn bound_controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.bound.iter().copied()
    }

    /// Dispatches one event.
    ///
    /// A change on a bound control refreshes exactly the charts of its scope,
    /// reading the current values from `document`. Scrolls only reposition
    /// the footer.
    pub fn handle<D, R>(
        &self,
        event: ControlEvent,
        document: &D,
        coordinator: &mut ChartCoordinator<R>,
    ) -> BinderOutcome
    where
        D: ControlDocument + ?Sized,
        R: ChartRenderer,
    {
        match event {
            ControlEvent::Scroll { scroll_y } => {
                BinderOutcome::Repositioned(self.footer.on_scroll(scroll_y))
            }
            ControlEvent::Change(control) if !self.is_bound(control) => {
                tracing::debug!(control = %control, "Change on unbound control ignored");
                BinderOutcome::Ignored(control)
            }
            ControlEvent::Change(control) => {
                let scope = control.refresh_scope();
                let selection = read_selection(document, scope);
                let report = coordinator.refresh(scope, &selection);
                BinderOutcome::Refreshed { scope, report }
            }
        }
    }
}
