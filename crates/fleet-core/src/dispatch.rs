//! Dispatch vocabulary: job-assignment records (external, read-only) and the
//! derived dispatch status.
//!
//! Job assignments belong to the job catalog; the simulation only ever scans
//! them.  The dispatch status is recomputed from scratch on every read — job
//! statuses change out-of-band between ticks, so nothing here is cached.

use std::fmt;

use crate::{JobId, ResourceId};

/// Lifecycle status of a job in the external job catalog.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JobStatus {
    Draft,
    Scheduled,
    Assigned,
    InProgress,
    Paused,
    Completed,
    Cancelled,
    Failed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Draft      => "draft",
            JobStatus::Scheduled  => "scheduled",
            JobStatus::Assigned   => "assigned",
            JobStatus::InProgress => "in_progress",
            JobStatus::Paused     => "paused",
            JobStatus::Completed  => "completed",
            JobStatus::Cancelled  => "cancelled",
            JobStatus::Failed     => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One job-to-resource assignment record, read-only to the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobAssignment {
    pub job: JobId,
    pub resource: ResourceId,
    pub status: JobStatus,
}

impl JobAssignment {
    pub const fn new(job: JobId, resource: ResourceId, status: JobStatus) -> Self {
        Self { job, resource, status }
    }
}

/// Live operational label for a resource, derived from its job assignments.
///
/// Precedence: `OnJob` (any in-progress job) beats `EnRoute` (any assigned
/// job) beats `Available`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DispatchStatus {
    Available,
    EnRoute,
    OnJob,
}

impl DispatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchStatus::Available => "available",
            DispatchStatus::EnRoute   => "en_route",
            DispatchStatus::OnJob     => "on_job",
        }
    }
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
