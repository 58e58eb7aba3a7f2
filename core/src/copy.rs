use alloc::string::String;

pub const CONFIRMATION_LABEL: &str = "Copié !";
pub const COPY_FAILED_MESSAGE: &str = "Impossible de copier dans le presse-papier.";
pub const REVERT_DELAY_MS: u32 = 2000;
pub const NEUTRAL_CLASS: &str = "btn-outline-secondary";
pub const SUCCESS_CLASS: &str = "btn-success";

/// A clickable control that copies text.
pub trait TriggerSurface {
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    /// Swap between the neutral and the success style.
    fn set_confirmed(&mut self, confirmed: bool);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    TargetMissing,
    Failed(String),
}

impl CopyOutcome {
    /// Message to put in front of the user, only ever for a failed write.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            Self::Failed(_) => Some(COPY_FAILED_MESSAGE),
            Self::Copied | Self::TargetMissing => None,
        }
    }
}

/// Normalizes the trigger's reference attribute. An empty reference can never
/// resolve, so it is treated like a missing one.
pub fn target_id(reference: Option<&str>) -> Option<&str> {
    reference.filter(|id| !id.is_empty())
}

struct PendingRevert<H> {
    original_label: String,
    _timer: H,
}

/// Confirmation state of a single trigger.
///
/// `H` is the handle of the scheduled revert; dropping it must cancel the
/// revert. At most one handle is held, so a second confirmation replaces the
/// first timer instead of stacking another one.
pub struct CopyFeedback<H> {
    pending: Option<PendingRevert<H>>,
}

impl<H> CopyFeedback<H> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Shows the confirmation on `trigger`, then stores the handle returned by
    /// `schedule`.
    ///
    /// The label to restore is read at click time, unless a revert is already
    /// pending: the visible label is then the confirmation itself, and the one
    /// captured by the earlier click is kept.
    pub fn confirm<T>(&mut self, trigger: &mut T, schedule: impl FnOnce() -> H)
    where
        T: TriggerSurface + ?Sized,
    {
        let original_label = match self.pending.take() {
            Some(pending) => {
                log::trace!("replacing pending revert");
                pending.original_label
            }
            None => trigger.label(),
        };
        trigger.set_label(CONFIRMATION_LABEL);
        trigger.set_confirmed(true);
        self.pending = Some(PendingRevert {
            original_label,
            _timer: schedule(),
        });
    }

    /// Restores the label and style captured by [`CopyFeedback::confirm`].
    /// Returns `false` when nothing was pending.
    pub fn expire<T>(&mut self, trigger: &mut T) -> bool
    where
        T: TriggerSurface + ?Sized,
    {
        match self.pending.take() {
            Some(pending) => {
                trigger.set_label(&pending.original_label);
                trigger.set_confirmed(false);
                true
            }
            None => false,
        }
    }
}

impl<H> Default for CopyFeedback<H> {
    fn default() -> Self {
        Self::new()
    }
}
