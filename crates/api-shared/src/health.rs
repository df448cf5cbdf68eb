use crate::dto::HealthRes;

/// Simple health service shared by every risk API binary.
///
/// Health reflects the process only; collaborator reachability is not probed.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Risk service is alive".into(),
        }
    }
}
