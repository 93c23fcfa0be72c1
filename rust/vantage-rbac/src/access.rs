use std::fmt::{Display, Formatter};

/// Why a capability check did not pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denial {
    /// Nobody is signed in.
    Unauthenticated,
    /// Signed in, but the role does not qualify.
    InsufficientRole,
    /// Signed in, but a required permission is missing.
    InsufficientPermission,
}

impl Display for Denial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Denial::Unauthenticated => f.write_str("not authenticated"),
            Denial::InsufficientRole => f.write_str("insufficient role"),
            Denial::InsufficientPermission => f.write_str("insufficient permission"),
        }
    }
}

/// Outcome of a capability check.
///
/// Gates only care whether access [`is_granted`](Access::is_granted), but
/// callers that want to tell "please sign in" apart from "you lack
/// permission" can match on the [`Denial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The check passed.
    Granted,
    /// The check failed for the given reason.
    Denied(Denial),
}

impl Access {
    /// `Granted` when `condition` holds, otherwise denied with `reason`.
    pub fn grant_if(condition: bool, reason: Denial) -> Self {
        if condition {
            Access::Granted
        } else {
            Access::Denied(reason)
        }
    }

    /// Whether the check passed.
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }

    /// The denial reason, if any.
    pub fn denial(&self) -> Option<Denial> {
        match self {
            Access::Granted => None,
            Access::Denied(reason) => Some(*reason),
        }
    }

    /// Combine two checks; the first denial wins.
    pub fn and(self, other: Access) -> Access {
        match self {
            Access::Granted => other,
            denied => denied,
        }
    }
}

impl From<Access> for bool {
    fn from(access: Access) -> Self {
        access.is_granted()
    }
}
