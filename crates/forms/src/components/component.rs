//! Component system for the editor form cores.
//!
//! This module defines the Component trait shared by the file input inspector
//! and the job editor. Components own their form state, react to messages,
//! and report side effects back to the host as [`Effect`]s instead of calling
//! host services directly.

use crate::effect::Effect;

/// A trait representing a form component with its own state and behavior.
///
/// # Component Lifecycle
///
/// 1. **Construction**: the component exists but may not have built its form yet
/// 2. **Initialization**: `init()` builds form state from the latest snapshot
/// 3. **Messages**: `update()` handles inbound snapshots and field edits
/// 4. **Teardown**: `destroy()` drops subscriptions; later edits produce no effects
///
/// Messages may arrive before `init()`. Components must accept them and defer
/// whatever needs the form until it exists.
///
/// # Example Implementation
///
/// ```rust
/// use composer_forms::{Component, Effect};
///
/// #[derive(Default)]
/// struct Counter {
///     count: usize,
/// }
///
/// impl Component for Counter {
///     type Msg = usize;
///
///     fn update(&mut self, msg: usize) -> Vec<Effect> {
///         self.count += msg;
///         vec![Effect::MarkForCheck]
///     }
/// }
/// ```
pub trait Component {
    /// Messages understood by this component.
    type Msg;

    /// Build form state and subscriptions.
    ///
    /// # Returns
    ///
    /// Vector of effects that the host should process
    fn init(&mut self) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle an inbound snapshot or a field edit.
    ///
    /// Handlers run to completion before the next message is delivered, so a
    /// component may read its own form state right after writing it.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to handle
    ///
    /// # Returns
    ///
    /// Vector of effects that the host should process
    fn update(&mut self, msg: Self::Msg) -> Vec<Effect>;

    /// Tear down subscriptions before the component is dropped.
    fn destroy(&mut self) -> Vec<Effect> {
        Vec::new()
    }
}
