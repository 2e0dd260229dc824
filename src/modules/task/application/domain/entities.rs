use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Task status
// ──────────────────────────────────────────────────────────
//

/// `Bidding` and `Cancelled` are part of the stored vocabulary but no
/// operation moves a task into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    Bidding,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::Bidding => "bidding",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TaskStatus::Open),
            "bidding" => Some(TaskStatus::Bidding),
            "assigned" => Some(TaskStatus::Assigned),
            "in_progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            "cancelled" => Some(TaskStatus::Cancelled),
            _ => None,
        }
    }

    /// States in which a task carries an assigned helper and winning bid.
    pub fn has_assignment(&self) -> bool {
        matches!(
            self,
            TaskStatus::Assigned | TaskStatus::InProgress | TaskStatus::Completed
        )
    }

    pub fn accepts_bids(&self) -> bool {
        matches!(self, TaskStatus::Open)
    }

    /// Shown under "active" on the tasker dashboard; everything else is history.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TaskStatus::Open | TaskStatus::Bidding | TaskStatus::Assigned | TaskStatus::InProgress
        )
    }

    pub fn can_transition_to(&self, next: TaskStatus) -> bool {
        matches!(
            (self, next),
            (TaskStatus::Open, TaskStatus::Assigned)
                | (TaskStatus::Assigned, TaskStatus::InProgress)
                | (TaskStatus::InProgress, TaskStatus::Completed)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Task
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: Uuid,
    pub tasker_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location_address: String,
    /// Whole rupees
    pub budget_min: i64,
    pub budget_max: i64,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub assigned_helper_id: Option<UserId>,
    #[serde(default)]
    pub winning_bid_id: Option<Uuid>,
    #[serde(default)]
    pub face_scan_verified: bool,
    #[serde(default)]
    pub face_scan_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn from_new(new: NewTask, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            tasker_id: new.tasker_id,
            title: new.title,
            description: new.description,
            category: new.category,
            location_address: new.location_address,
            budget_min: new.budget_min,
            budget_max: new.budget_max,
            status: TaskStatus::Open,
            created_at,
            assigned_helper_id: None,
            winning_bid_id: None,
            face_scan_verified: false,
            face_scan_at: None,
            completed_at: None,
        }
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.tasker_id == user
    }

    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assigned_helper_id == Some(user)
    }

    /// Case-insensitive match against title and description.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Validated task input; the tasker id comes from the caller, never the body.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub tasker_id: UserId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location_address: String,
    pub budget_min: i64,
    pub budget_max: i64,
}

/// Filter for the public task listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub tasker_id: Option<UserId>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn open() -> Self {
        Self {
            status: Some(TaskStatus::Open),
            ..Default::default()
        }
    }

    pub fn owned_by(tasker_id: UserId) -> Self {
        Self {
            tasker_id: Some(tasker_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(tasker_id) = self.tasker_id {
            if task.tasker_id != tasker_id {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !task.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        match &self.search {
            Some(needle) => task.matches_search(needle),
            None => true,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Lifecycle transitions after assignment
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskTransition {
    /// Assigned helper passed the face check and starts work.
    Start { at: DateTime<Utc> },
    /// Assigned helper finished the work.
    Complete { at: DateTime<Utc> },
}

impl TaskTransition {
    pub fn from_status(&self) -> TaskStatus {
        match self {
            TaskTransition::Start { .. } => TaskStatus::Assigned,
            TaskTransition::Complete { .. } => TaskStatus::InProgress,
        }
    }

    pub fn to_status(&self) -> TaskStatus {
        match self {
            TaskTransition::Start { .. } => TaskStatus::InProgress,
            TaskTransition::Complete { .. } => TaskStatus::Completed,
        }
    }

    pub fn apply(&self, task: &mut Task) {
        task.status = self.to_status();
        match *self {
            TaskTransition::Start { at } => {
                task.face_scan_verified = true;
                task.face_scan_at = Some(at);
            }
            TaskTransition::Complete { at } => task.completed_at = Some(at),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Bids
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BidStatus::Pending),
            "accepted" => Some(BidStatus::Accepted),
            "rejected" => Some(BidStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bid {
    pub id: Uuid,
    pub task_id: Uuid,
    pub helper_id: UserId,
    pub amount: i64,
    pub estimated_hours: f64,
    pub message: String,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    pub fn from_new(new: NewBid, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            task_id: new.task_id,
            helper_id: new.helper_id,
            amount: new.amount,
            estimated_hours: new.estimated_hours,
            message: new.message,
            status: BidStatus::Pending,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBid {
    pub task_id: Uuid,
    pub helper_id: UserId,
    pub amount: i64,
    pub estimated_hours: f64,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Helper selection
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("task is {0}, only open tasks can be assigned")]
    TaskNotOpen(TaskStatus),

    #[error("bid does not belong to this task")]
    BidNotOnTask,
}

/// Outcome of assigning a helper: the updated task and every bid on it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HelperSelection {
    pub task: Task,
    pub bids: Vec<Bid>,
}

/// Assign the helper behind `bid_id` to `task`, accepting that bid and
/// rejecting every sibling in `task_bids`.
///
/// Storage adapters call this on the rows they loaded so that the
/// invariants live in one place. Nothing is mutated on error.
pub fn select_winning_bid(
    task: &mut Task,
    task_bids: &mut [Bid],
    bid_id: Uuid,
) -> Result<(), SelectionError> {
    if !task.status.can_transition_to(TaskStatus::Assigned) {
        return Err(SelectionError::TaskNotOpen(task.status));
    }

    let helper_id = task_bids
        .iter()
        .find(|b| b.id == bid_id && b.task_id == task.id)
        .map(|b| b.helper_id)
        .ok_or(SelectionError::BidNotOnTask)?;

    task.status = TaskStatus::Assigned;
    task.assigned_helper_id = Some(helper_id);
    task.winning_bid_id = Some(bid_id);

    for bid in task_bids.iter_mut().filter(|b| b.task_id == task.id) {
        bid.status = if bid.id == bid_id {
            BidStatus::Accepted
        } else {
            BidStatus::Rejected
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_task() -> Task {
        Task::from_new(
            NewTask {
                tasker_id: UserId::new(),
                title: "Fix leaking bathroom tap".to_string(),
                description: "One tap in the main bathroom is leaking.".to_string(),
                category: "Plumbing".to_string(),
                location_address: "Indiranagar, Bengaluru".to_string(),
                budget_min: 300,
                budget_max: 600,
            },
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    fn bid_on(task: &Task, amount: i64) -> Bid {
        Bid::from_new(
            NewBid {
                task_id: task.id,
                helper_id: UserId::new(),
                amount,
                estimated_hours: 2.0,
                message: "I can do this today".to_string(),
            },
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_task_is_open_without_assignment() {
        let task = open_task();
        assert_eq!(task.status, TaskStatus::Open);
        assert!(task.assigned_helper_id.is_none());
        assert!(!task.face_scan_verified);
    }

    #[test]
    fn test_only_forward_lifecycle_transitions_allowed() {
        assert!(TaskStatus::Open.can_transition_to(TaskStatus::Assigned));
        assert!(TaskStatus::Assigned.can_transition_to(TaskStatus::InProgress));
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Completed));

        assert!(!TaskStatus::Open.can_transition_to(TaskStatus::InProgress));
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Open));
        assert!(!TaskStatus::Open.can_transition_to(TaskStatus::Cancelled));
        assert!(!TaskStatus::Open.can_transition_to(TaskStatus::Bidding));
    }

    #[test]
    fn test_select_winning_bid_accepts_one_and_rejects_siblings() {
        let mut task = open_task();
        let mut bids = vec![bid_on(&task, 400), bid_on(&task, 350), bid_on(&task, 500)];
        let chosen = bids[1].clone();

        select_winning_bid(&mut task, &mut bids, chosen.id).unwrap();

        assert_eq!(task.status, TaskStatus::Assigned);
        assert_eq!(task.assigned_helper_id, Some(chosen.helper_id));
        assert_eq!(task.winning_bid_id, Some(chosen.id));

        let accepted: Vec<_> = bids
            .iter()
            .filter(|b| b.status == BidStatus::Accepted)
            .collect();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].id, chosen.id);
        assert_eq!(
            bids.iter()
                .filter(|b| b.status == BidStatus::Rejected)
                .count(),
            2
        );
    }

    #[test]
    fn test_select_winning_bid_rejects_non_open_task() {
        let mut task = open_task();
        task.status = TaskStatus::Assigned;
        let mut bids = vec![bid_on(&task, 400)];
        let bid_id = bids[0].id;

        let err = select_winning_bid(&mut task, &mut bids, bid_id).unwrap_err();

        assert_eq!(err, SelectionError::TaskNotOpen(TaskStatus::Assigned));
        assert_eq!(bids[0].status, BidStatus::Pending);
    }

    #[test]
    fn test_select_winning_bid_rejects_foreign_bid() {
        let mut task = open_task();
        let other = open_task();
        let mut bids = vec![bid_on(&task, 400), bid_on(&other, 300)];
        let foreign = bids[1].id;

        let err = select_winning_bid(&mut task, &mut bids, foreign).unwrap_err();

        assert_eq!(err, SelectionError::BidNotOnTask);
        assert_eq!(task.status, TaskStatus::Open);
        assert!(bids.iter().all(|b| b.status == BidStatus::Pending));
    }

    #[test]
    fn test_start_transition_marks_face_scan() {
        let mut task = open_task();
        task.status = TaskStatus::Assigned;
        let at = Utc::now();

        let transition = TaskTransition::Start { at };
        assert_eq!(transition.from_status(), TaskStatus::Assigned);
        transition.apply(&mut task);

        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(task.face_scan_verified);
        assert_eq!(task.face_scan_at, Some(at));
    }

    #[test]
    fn test_assignment_fields_follow_status_through_lifecycle() {
        let assigned = |t: &Task| t.assigned_helper_id.is_some() && t.winning_bid_id.is_some();

        let mut task = open_task();
        let mut bids = vec![bid_on(&task, 400)];
        let bid_id = bids[0].id;
        assert_eq!(task.status.has_assignment(), assigned(&task));

        select_winning_bid(&mut task, &mut bids, bid_id).unwrap();
        assert!(task.status.has_assignment() && assigned(&task));

        for transition in [
            TaskTransition::Start { at: Utc::now() },
            TaskTransition::Complete { at: Utc::now() },
        ] {
            transition.apply(&mut task);
            assert!(task.status.has_assignment() && assigned(&task));
        }
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(!TaskStatus::Open.has_assignment());
    }

    #[test]
    fn test_filter_matches_category_and_search() {
        let task = open_task();

        let mut filter = TaskFilter::open();
        filter.category = Some("plumbing".to_string());
        filter.search = Some("TAP".to_string());
        assert!(filter.matches(&task));

        filter.search = Some("furniture".to_string());
        assert!(!filter.matches(&task));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(TaskStatus::parse("in_progress"), Some(TaskStatus::InProgress));
    }
}
