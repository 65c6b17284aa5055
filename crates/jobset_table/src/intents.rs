//! Intent ports.
//!
//! The table never changes the state it renders. User actions are turned
//! into intents and handed to the owner through two ports:
//!
//! - [`SelectionIntents`] for row and bulk selection
//! - [`NavigationIntents`] for drilling into a job set and changing the order
//!
//! [`Intent`] is the message form of every port method. `Vec<Intent>`
//! implements both ports, so callers can collect what a frame produced and
//! apply it afterwards with [`Intent::apply`].

use crate::model::JobState;

/// Port receiving selection intents.
pub trait SelectionIntents {
    /// Select or deselect exactly the row at `index`.
    fn select_job_set(&mut self, index: usize, selected: bool);

    /// Extend or contract the selection as a range ending at `index`.
    ///
    /// The range start is tracked by the owner, not by the table.
    fn shift_select_job_set(&mut self, index: usize, selected: bool);

    /// Select every listed job set.
    fn select_all(&mut self);

    /// Clear the selection.
    fn deselect_all(&mut self);
}

/// Port receiving navigation intents.
pub trait NavigationIntents {
    /// Open the jobs of `job_set_id`, filtered to `state`.
    fn open_job_set(&mut self, job_set_id: &str, state: JobState);

    /// Change the submission-time sort direction.
    fn change_order(&mut self, newest_first: bool);
}

/// One emitted intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectJobSet { index: usize, selected: bool },
    ShiftSelectJobSet { index: usize, selected: bool },
    SelectAll,
    DeselectAll,
    OpenJobSet { job_set_id: String, state: JobState },
    ChangeOrder { newest_first: bool },
}

impl Intent {
    /// Delivers this intent to the matching port method.
    pub fn apply<P>(self, ports: &mut P)
    where
        P: SelectionIntents + NavigationIntents + ?Sized,
    {
        match self {
            Self::SelectJobSet { index, selected } => ports.select_job_set(index, selected),
            Self::ShiftSelectJobSet { index, selected } => {
                ports.shift_select_job_set(index, selected);
            }
            Self::SelectAll => ports.select_all(),
            Self::DeselectAll => ports.deselect_all(),
            Self::OpenJobSet { job_set_id, state } => ports.open_job_set(&job_set_id, state),
            Self::ChangeOrder { newest_first } => ports.change_order(newest_first),
        }
    }
}

impl SelectionIntents for Vec<Intent> {
    fn select_job_set(&mut self, index: usize, selected: bool) {
        self.push(Intent::SelectJobSet { index, selected });
    }

    fn shift_select_job_set(&mut self, index: usize, selected: bool) {
        self.push(Intent::ShiftSelectJobSet { index, selected });
    }

    fn select_all(&mut self) {
        self.push(Intent::SelectAll);
    }

    fn deselect_all(&mut self) {
        self.push(Intent::DeselectAll);
    }
}

impl NavigationIntents for Vec<Intent> {
    fn open_job_set(&mut self, job_set_id: &str, state: JobState) {
        self.push(Intent::OpenJobSet {
            job_set_id: job_set_id.to_string(),
            state,
        });
    }

    fn change_order(&mut self, newest_first: bool) {
        self.push(Intent::ChangeOrder { newest_first });
    }
}
