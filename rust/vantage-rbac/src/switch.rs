use crate::{CapabilitySnapshot, Role};

/// Ordered role to value mapping with a default.
///
/// [`select`](RoleSwitch::select) returns the value of the first case whose
/// role equals the current role, scanning in insertion order. Later cases
/// for the same role are never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSwitch<T> {
    cases: Vec<(Role, T)>,
    default: T,
}

impl<T> RoleSwitch<T> {
    /// A switch that always yields `default`.
    pub fn new(default: T) -> Self {
        Self {
            cases: Vec::new(),
            default,
        }
    }

    /// Append a case.
    pub fn case(mut self, role: Role, value: T) -> Self {
        self.cases.push((role, value));
        self
    }

    /// Cases in the order they were added.
    pub fn cases(&self) -> &[(Role, T)] {
        &self.cases
    }

    /// Index of the first case matching the snapshot's role.
    pub fn position(&self, snapshot: &CapabilitySnapshot) -> Option<usize> {
        let role = snapshot.role()?;
        self.cases.iter().position(|(case, _)| *case == role)
    }

    /// Value for the snapshot's role, or the default. Anonymous snapshots
    /// always get the default.
    pub fn select(&self, snapshot: &CapabilitySnapshot) -> &T {
        match self.position(snapshot) {
            Some(index) => &self.cases[index].1,
            None => &self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test;
    use pretty_assertions::assert_eq;

    fn switch() -> RoleSwitch<&'static str> {
        RoleSwitch::new("default")
            .case(Role::Admin, "admin")
            .case(Role::User, "user")
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_selects_the_matching_case() {
        assert_eq!(
            *switch().select(&CapabilitySnapshot::authenticated(Role::Admin)),
            "admin"
        );
        assert_eq!(
            *switch().select(&CapabilitySnapshot::authenticated(Role::User)),
            "user"
        );
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_falls_back_to_default() {
        assert_eq!(
            *switch().select(&CapabilitySnapshot::authenticated(Role::Viewer)),
            "default"
        );
        assert_eq!(*switch().select(&CapabilitySnapshot::anonymous()), "default");
        assert_eq!(
            *RoleSwitch::new(0).select(&CapabilitySnapshot::authenticated(Role::Admin)),
            0
        );
    }

    #[cfg_attr(not(all(target_arch = "wasm32", target_os = "unknown")), test)]
    #[cfg_attr(all(target_arch = "wasm32", target_os = "unknown"), wasm_bindgen_test)]
    fn it_prefers_the_first_of_duplicate_cases() {
        let switch = switch().case(Role::Admin, "second admin");
        let snapshot = CapabilitySnapshot::authenticated(Role::Admin);

        assert_eq!(switch.position(&snapshot), Some(0));
        assert_eq!(*switch.select(&snapshot), "admin");
        assert_eq!(switch.cases().len(), 3);
    }
}
