//! Node state check against the `/system` snapshot

use crate::error::CheckError;
use crate::model::SystemOverview;

pub const RUNNING_LIFECYCLE: &str = "running";
pub const ALIVE_LB_STATUS: &str = "alive";

/// Processing first, then lifecycle, then load balancer status
pub fn verify_system(system: &SystemOverview) -> Result<(), CheckError> {
    if !system.is_processing {
        return Err(CheckError::NotProcessing);
    }

    if system.lifecycle != RUNNING_LIFECYCLE {
        return Err(CheckError::Lifecycle(system.lifecycle.clone()));
    }

    if system.lb_status != ALIVE_LB_STATUS {
        return Err(CheckError::LoadBalancer(system.lb_status.clone()));
    }

    Ok(())
}
