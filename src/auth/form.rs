//! Form state shared by the login and registration flows.
//!
//! State changes go through [`FormState::apply`] with an explicit
//! [`FormEvent`], so a view layer only has to re-read the state after each
//! event. The busy flag is separate from the event stream: it is taken with
//! [`BusyFlag::try_acquire`] and released when the returned guard drops, which
//! covers every exit path of a submit.

use super::navigator::Route;
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

/// Guards a form against overlapping submissions.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Marks the form busy. Returns `None` if a submission is already running.
    #[must_use]
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Releases the busy flag on drop.
#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Field storage for a concrete form.
pub trait FormFields: Clone + Default {
    type Field: Copy;

    fn set(&mut self, field: Self::Field, value: String);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent<F> {
    /// A field changed. Ignored while a submission is running.
    Edited { field: F, value: String },
    /// Client-side validation failed; nothing was sent.
    Rejected(String),
    /// A request is about to be issued.
    Started,
    /// The request failed; fields are kept so the user can retry.
    Failed(String),
    /// The request succeeded; fields are reset.
    Succeeded,
}

/// What a submit attempt led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight.
    Ignored,
    Rejected(String),
    Failed(String),
    Navigate { route: Route, notice: &'static str },
}

#[derive(Debug, Default)]
struct Slots<T> {
    fields: T,
    status: Option<String>,
}

/// Fields and status sit behind a short-lived lock so a form can be shared by
/// reference while a submission is awaiting the network. The lock is never
/// held across an `.await`.
#[derive(Debug, Default)]
pub struct FormState<T: FormFields> {
    slots: Mutex<Slots<T>>,
    busy: BusyFlag,
}

impl<T: FormFields> FormState<T> {
    pub fn apply(&self, event: FormEvent<T::Field>) {
        let mut slots = self.lock();
        match event {
            FormEvent::Edited { field, value } => {
                if !self.busy.is_busy() {
                    slots.fields.set(field, value);
                }
            }
            FormEvent::Rejected(message) | FormEvent::Failed(message) => {
                slots.status = Some(message);
            }
            FormEvent::Started => slots.status = None,
            FormEvent::Succeeded => {
                slots.status = None;
                slots.fields = T::default();
            }
        }
    }

    /// Snapshot of the current field values.
    #[must_use]
    pub fn fields(&self) -> T {
        self.lock().fields.clone()
    }

    #[must_use]
    pub fn status(&self) -> Option<String> {
        self.lock().status.clone()
    }

    #[must_use]
    pub fn busy(&self) -> &BusyFlag {
        &self.busy
    }

    fn lock(&self) -> MutexGuard<'_, Slots<T>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
