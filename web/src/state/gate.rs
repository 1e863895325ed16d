//! Feature gating for the landing page actions
//!
//! Each gated action (FYB Week, Award Voting) is driven by an operator
//! controlled flag. An active feature navigates to its page; an inactive one
//! opens an informational notice instead of navigating.

/// Outcome of evaluating a feature flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Enabled,
    Disabled,
}

impl GateDecision {
    pub fn is_enabled(self) -> bool {
        matches!(self, GateDecision::Enabled)
    }
}

/// Map a feature flag to a gate decision.
///
/// Total and side-effect free, so it is safe to call on every render pass.
/// The decision is always derived from the flag passed in; nothing is cached.
pub fn evaluate(flag: bool) -> GateDecision {
    if flag {
        GateDecision::Enabled
    } else {
        GateDecision::Disabled
    }
}

/// Navigation collaborator.
///
/// The page adapts the router's navigate closure to this trait; tests
/// substitute a recording closure via the blanket impl below.
pub trait Navigator {
    fn navigate_to(&mut self, destination: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate_to(&mut self, destination: &str) {
        self(destination)
    }
}

/// Per-feature interaction controller.
///
/// Owns the visibility of the feature's "not yet available" notice and
/// mediates clicks on the gated control: an enabled gate navigates, a
/// disabled one shows the notice. The two live instances (FYB Week, Award
/// Voting) share no state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureGate {
    destination: &'static str,
    notice_visible: bool,
}

impl FeatureGate {
    pub fn new(destination: &'static str) -> Self {
        Self {
            destination,
            notice_visible: false,
        }
    }

    pub fn destination(&self) -> &'static str {
        self.destination
    }

    /// Handle a click on the gated control.
    ///
    /// The flag is re-evaluated on every call, so a flag flipped mid-session
    /// takes effect on the next interaction. Exactly one of {navigate, show
    /// notice} happens per call, never both. An already open notice stays
    /// open until [`FeatureGate::dismiss`] closes it.
    pub fn activate(&mut self, flag: bool, navigator: &mut impl Navigator) {
        match evaluate(flag) {
            GateDecision::Enabled => navigator.navigate_to(self.destination),
            GateDecision::Disabled => self.notice_visible = true,
        }
    }

    /// Close the notice. A no-op when it is already closed.
    pub fn dismiss(&mut self) {
        self.notice_visible = false;
    }

    pub fn is_notice_visible(&self) -> bool {
        self.notice_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_follows_the_flag() {
        assert_eq!(evaluate(true), GateDecision::Enabled);
        assert_eq!(evaluate(false), GateDecision::Disabled);
        assert!(GateDecision::Enabled.is_enabled());
        assert!(!GateDecision::Disabled.is_enabled());
    }

    #[test]
    fn disabled_activate_shows_notice_without_navigating() {
        let mut gate = FeatureGate::new("/vote");
        let mut visited: Vec<String> = Vec::new();

        gate.activate(false, &mut |d: &str| visited.push(d.to_string()));

        assert!(gate.is_notice_visible());
        assert!(visited.is_empty());
    }

    #[test]
    fn enabled_activate_navigates_once_per_call() {
        let mut gate = FeatureGate::new("/vote");
        let mut visited: Vec<String> = Vec::new();

        gate.activate(true, &mut |d: &str| visited.push(d.to_string()));
        gate.activate(true, &mut |d: &str| visited.push(d.to_string()));

        assert_eq!(visited, vec!["/vote", "/vote"]);
        assert!(!gate.is_notice_visible());
    }

    #[test]
    fn dismiss_closes_the_notice() {
        let mut gate = FeatureGate::new("/fyb-week");
        gate.activate(false, &mut |_: &str| {});
        assert!(gate.is_notice_visible());

        gate.dismiss();
        assert!(!gate.is_notice_visible());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut gate = FeatureGate::new("/fyb-week");
        gate.dismiss();
        gate.dismiss();
        assert!(!gate.is_notice_visible());
    }

    #[test]
    fn repeated_disabled_activate_keeps_notice_shown() {
        let mut gate = FeatureGate::new("/vote");
        let mut calls = 0;

        gate.activate(false, &mut |_: &str| calls += 1);
        gate.activate(false, &mut |_: &str| calls += 1);

        assert!(gate.is_notice_visible());
        assert_eq!(calls, 0);
    }

    #[test]
    fn flag_flip_mid_session_navigates_but_leaves_open_notice_alone() {
        let mut gate = FeatureGate::new("/fyb-week");
        let mut visited: Vec<String> = Vec::new();

        gate.activate(false, &mut |d: &str| visited.push(d.to_string()));
        assert!(gate.is_notice_visible());
        assert!(visited.is_empty());

        // Operator switches the feature on while the notice is still open.
        gate.activate(true, &mut |d: &str| visited.push(d.to_string()));
        assert_eq!(visited, vec!["/fyb-week"]);
        assert!(gate.is_notice_visible());
    }

    #[test]
    fn controllers_are_independent() {
        let mut fyb_week = FeatureGate::new("/fyb-week");
        let mut voting = FeatureGate::new("/vote");

        fyb_week.activate(false, &mut |_: &str| {});
        assert!(fyb_week.is_notice_visible());
        assert!(!voting.is_notice_visible());

        voting.activate(false, &mut |_: &str| {});
        fyb_week.dismiss();
        assert!(!fyb_week.is_notice_visible());
        assert!(voting.is_notice_visible());
    }
}
