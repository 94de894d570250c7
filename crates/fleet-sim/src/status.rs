//! Dispatch-status resolution from job assignments.

use fleet_core::{DispatchStatus, JobAssignment, JobStatus, ResourceId};

/// Derive a resource's live dispatch status from the job catalog.
///
/// Scans every assignment referencing `resource`: any in-progress job wins
/// (`OnJob`), otherwise any assigned job means the resource is heading out
/// (`EnRoute`), otherwise it is `Available`.  Scheduled, paused, and terminal
/// statuses do not claim the resource.
///
/// Pure and independent of the kinematic integrator; call it fresh on every
/// read — job statuses change between ticks.
pub fn resolve_status(resource: ResourceId, jobs: &[JobAssignment]) -> DispatchStatus {
    let mut assigned = false;
    for job in jobs.iter().filter(|j| j.resource == resource) {
        match job.status {
            JobStatus::InProgress => return DispatchStatus::OnJob,
            JobStatus::Assigned => assigned = true,
            _ => {}
        }
    }
    if assigned {
        DispatchStatus::EnRoute
    } else {
        DispatchStatus::Available
    }
}
