//! In-memory session state for the dashboard screen.

/// The only echoed username the dashboard grants access to.
pub const ADMIN_USERNAME: &str = "ADMIN";

/// Outcome of applying a login response to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The echoed username matched the admin sentinel.
    Granted,
    /// Anything else; the screen shows the wrong-credentials alert.
    Denied,
}

/// Two-state session flag, held only in memory.
///
/// There is no token, no expiry, and no persistence: authentication never
/// survives the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated,
}

impl Session {
    pub fn is_authenticated(self) -> bool {
        self == Session::Authenticated
    }

    /// Apply the username a login response echoed back. Only the admin
    /// sentinel authenticates; a denied login leaves the current state as
    /// it was.
    pub fn apply_login(&mut self, echoed_username: &str) -> LoginOutcome {
        if echoed_username == ADMIN_USERNAME {
            *self = Session::Authenticated;
            LoginOutcome::Granted
        } else {
            LoginOutcome::Denied
        }
    }

    /// Explicit logout; always lands on Anonymous.
    pub fn log_out(&mut self) {
        *self = Session::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_echo_authenticates() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.apply_login("ADMIN"), LoginOutcome::Granted);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_any_other_echo_is_denied() {
        let mut session = Session::default();
        assert_eq!(session.apply_login("admin"), LoginOutcome::Denied);
        assert_eq!(session.apply_login(""), LoginOutcome::Denied);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_denied_login_keeps_prior_state() {
        let mut session = Session::default();
        session.apply_login("ADMIN");
        assert_eq!(session.apply_login("nope"), LoginOutcome::Denied);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_always_lands_anonymous() {
        let mut session = Session::default();
        session.apply_login("ADMIN");
        session.log_out();
        assert!(!session.is_authenticated());

        session.log_out();
        assert!(!session.is_authenticated());
    }
}
