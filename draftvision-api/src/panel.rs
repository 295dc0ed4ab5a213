use crate::DraftId;

/// Which expandable section of the feed is open
///
/// There is only one of these for the whole feed, so opening a panel on one
/// draft closes whatever was open on any other.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum PanelState {
    #[default]
    Closed,
    Analysis(DraftId),
    Comments(DraftId),
}

impl PanelState {
    /// State after the user asked for `requested`: asking for the open panel closes it
    pub fn toggled(&self, requested: PanelState) -> PanelState {
        match *self == requested {
            true => PanelState::Closed,
            false => requested,
        }
    }

    pub fn is_analysis_open(&self, draft: &DraftId) -> bool {
        matches!(self, PanelState::Analysis(d) if d == draft)
    }

    pub fn is_comments_open(&self, draft: &DraftId) -> bool {
        matches!(self, PanelState::Comments(d) if d == draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> DraftId {
        DraftId(s.to_string())
    }

    #[test]
    fn toggle_twice_closes() {
        let open = PanelState::Closed.toggled(PanelState::Analysis(id("x")));
        assert!(open.is_analysis_open(&id("x")));
        assert!(!open.is_comments_open(&id("x")));
        let closed = open.toggled(PanelState::Analysis(id("x")));
        assert_eq!(closed, PanelState::Closed);
        assert!(!closed.is_analysis_open(&id("x")));
    }

    #[test]
    fn single_open_panel() {
        let s = PanelState::Analysis(id("x")).toggled(PanelState::Comments(id("x")));
        assert!(s.is_comments_open(&id("x")));
        assert!(!s.is_analysis_open(&id("x")));

        let s = s.toggled(PanelState::Analysis(id("y")));
        assert!(s.is_analysis_open(&id("y")));
        assert!(!s.is_comments_open(&id("x")));
        assert!(!s.is_analysis_open(&id("x")));
    }

    #[test]
    fn requesting_closed_closes() {
        assert_eq!(
            PanelState::Comments(id("x")).toggled(PanelState::Closed),
            PanelState::Closed
        );
        assert_eq!(PanelState::Closed.toggled(PanelState::Closed), PanelState::Closed);
    }
}
