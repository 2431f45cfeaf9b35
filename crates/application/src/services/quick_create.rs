//! Quick-create forms
//!
//! The sidebar's tabbed creation surface: events go through the day
//! planner, while tasks and appointment schedules are collected here.

use chrono::NaiveTime;
use domain::{AppointmentSchedule, Task};
use tracing::{info, instrument};

use crate::error::ApplicationError;

/// Which creation form is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateKind {
    /// Timed calendar event
    #[default]
    Event,
    /// Task at a time of day
    Task,
    /// Recurring availability window
    AppointmentSchedule,
}

impl CreateKind {
    /// Menu label for this kind
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Task => "Task",
            Self::AppointmentSchedule => "Appointment schedule",
        }
    }

    /// Whether the menu marks this entry as new
    #[must_use]
    pub const fn is_new(self) -> bool {
        matches!(self, Self::AppointmentSchedule)
    }

    /// All kinds in menu order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Event, Self::Task, Self::AppointmentSchedule]
    }
}

/// The creation menu and its collected tasks and schedules
#[derive(Debug, Default)]
pub struct QuickCreate {
    active: CreateKind,
    tasks: Vec<Task>,
    schedules: Vec<AppointmentSchedule>,
}

impl QuickCreate {
    /// Create with the event form active
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The form currently showing
    #[must_use]
    pub const fn active(&self) -> CreateKind {
        self.active
    }

    /// Switch the active form
    pub const fn select(&mut self, kind: CreateKind) {
        self.active = kind;
    }

    /// Validate and store a task
    #[instrument(skip(self, description))]
    pub fn submit_task(
        &mut self,
        title: &str,
        time: NaiveTime,
        description: &str,
    ) -> Result<(), ApplicationError> {
        let mut task = Task::new(title, time)?;
        if !description.trim().is_empty() {
            task = task.with_description(description);
        }

        info!(title = %task.title, "Adding task");
        self.tasks.push(task);
        Ok(())
    }

    /// Validate and store an appointment schedule
    #[instrument(skip(self))]
    pub fn submit_schedule(
        &mut self,
        title: &str,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), ApplicationError> {
        let schedule = AppointmentSchedule::new(title, start, end)?;

        info!(title = %schedule.title, "Adding appointment schedule");
        self.schedules.push(schedule);
        Ok(())
    }

    /// Collected tasks, in submission order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Collected appointment schedules, in submission order
    #[must_use]
    pub fn schedules(&self) -> &[AppointmentSchedule] {
        &self.schedules
    }
}
