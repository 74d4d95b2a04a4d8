use crate::config::Config;

/// Actions that require more than membership to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Trigger a single-club or batch sync.
    TriggerSync,
    /// Start a new scoring period.
    ResetBaseline,
}

/// Capability check, decoupled from any chat platform's permission model.
///
/// The caller presents the role ids it holds; configuration decides what
/// those grant. Both gated capabilities currently map to the single
/// configured moderator role.
pub fn authorize(config: &Config, role_ids: &[u64], capability: Capability) -> bool {
    match capability {
        Capability::TriggerSync | Capability::ResetBaseline => {
            role_ids.contains(&config.moderator_role_id)
        }
    }
}
