use crate::store::StoreError;

/// Identifies one fetch; only the newest ticket may settle the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// What a list view should draw for its current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// First load still pending.
    Skeleton,
    /// Nothing to show; carries the failure, if any.
    Empty(Option<String>),
    /// Items to draw, with the failure of the latest refresh shown above them.
    Items { error: Option<String> },
}

/// Loading/error/data state of one remote list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            latest: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Marks a new fetch as in flight and hands back its ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.latest)
    }

    /// Applies a fetch result. Results for superseded tickets are dropped and
    /// `false` is returned.
    ///
    /// On failure the previous items are kept.
    pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<T>, StoreError>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn view(&self) -> ListView {
        if !self.is_empty() {
            ListView::Items {
                error: self.error.clone(),
            }
        } else if self.loading {
            ListView::Skeleton
        } else {
            ListView::Empty(self.error.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state = ListState::<u32>::default();
        assert!(state.loading);
        assert!(state.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_success_replaces_items() {
        let mut state = ListState::default();
        let t = state.begin();
        assert!(state.settle(t, Ok(vec![1, 2, 3])));
        assert_eq!(state.items, vec![1, 2, 3]);
        assert!(!state.loading);

        let t = state.begin();
        assert!(state.loading);
        assert!(state.settle(t, Ok(vec![9])));
        assert_eq!(state.items, vec![9]);
    }

    #[test]
    fn test_failure_keeps_last_items() {
        let mut state = ListState::default();
        let t = state.begin();
        state.settle(t, Ok(vec!["a"]));

        let t = state.begin();
        state.settle(t, Err(StoreError::Transport("connection reset".to_string())));
        assert_eq!(state.items, vec!["a"]);
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Couldn't reach the remote store: connection reset")
        );

        // next fetch clears the error
        let _ = state.begin();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_first_failure_leaves_empty() {
        let mut state = ListState::<u8>::default();
        let t = state.begin();
        state.settle(t, Err(StoreError::NotConfigured));
        assert!(state.is_empty());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_view_while_loading() {
        let mut state = ListState::<u8>::default();
        assert_eq!(state.view(), ListView::Skeleton);

        let t = state.begin();
        state.settle(t, Ok(vec![1]));
        // a refresh in flight keeps drawing the old items
        let _ = state.begin();
        assert_eq!(state.view(), ListView::Items { error: None });
    }

    #[test]
    fn test_view_failed_refresh_keeps_items_and_error() {
        let mut state = ListState::default();
        let t = state.begin();
        state.settle(t, Ok(vec!["a"]));
        let t = state.begin();
        state.settle(t, Err(StoreError::Transport("timed out".to_string())));

        assert_eq!(state.items, vec!["a"]);
        assert_eq!(
            state.view(),
            ListView::Items {
                error: Some("Couldn't reach the remote store: timed out".to_string()),
            }
        );
    }

    #[test]
    fn test_view_empty() {
        let mut state = ListState::<u8>::default();
        let t = state.begin();
        state.settle(t, Ok(Vec::new()));
        assert_eq!(state.view(), ListView::Empty(None));

        let t = state.begin();
        state.settle(t, Err(StoreError::NotConfigured));
        assert_eq!(
            state.view(),
            ListView::Empty(Some("The remote store is not configured".to_string()))
        );
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ListState::default();
        let slow = state.begin();
        let fast = state.begin();
        assert!(state.settle(fast, Ok(vec![2])));
        assert!(!state.settle(slow, Ok(vec![1])));
        assert_eq!(state.items, vec![2]);
        assert!(!state.loading);
    }
}
