// Route state - the in-app stand-in for a browser router. Keeps the
// committed path plus back/forward history; the sequencer is its only
// writer during a transition.

use crate::transition::{NavRequest, NavSource};

/// The collaborator contract the sequencer navigates through.
pub trait Router {
    fn current_path(&self) -> &str;
    fn change_route(&mut self, path: &str, request: &NavRequest) -> Result<(), String>;
}

pub struct RouteState {
    history: Vec<String>,
    index: usize,
}

impl RouteState {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self { history: vec![initial_path.into()], index: 0 }
    }

    pub fn current_path(&self) -> &str {
        &self.history[self.index]
    }

    /// Path one step back in history, if any.
    pub fn back_path(&self) -> Option<&str> {
        if self.index > 0 {
            Some(self.history[self.index - 1].as_str())
        } else {
            None
        }
    }

    /// Path one step forward in history, if any.
    pub fn forward_path(&self) -> Option<&str> {
        self.history.get(self.index + 1).map(String::as_str)
    }

    fn push(&mut self, path: String) {
        // Dropping forward history on a fresh navigation
        self.history.truncate(self.index + 1);
        self.history.push(path);
        self.index = self.history.len() - 1;
    }
}

impl Router for RouteState {
    fn current_path(&self) -> &str {
        RouteState::current_path(self)
    }

    fn change_route(&mut self, path: &str, request: &NavRequest) -> Result<(), String> {
        if request.source == NavSource::History {
            // Restoring an adjacent history entry moves the index instead
            // of pushing, so back/forward walk the same trail
            if self.index > 0 && self.history[self.index - 1] == path {
                self.index -= 1;
                return Ok(());
            }
            if let Some(forward) = self.history.get(self.index + 1) {
                if forward == path {
                    self.index += 1;
                    return Ok(());
                }
            }
        }
        self.push(path.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionKind;
    use std::time::Instant;

    fn request(source: NavSource) -> NavRequest {
        NavRequest::new(1, 0, source, TransitionKind::FullPage, Instant::now())
    }

    #[test]
    fn test_push_and_current() {
        let mut route = RouteState::new("/");
        route.change_route("/about", &request(NavSource::Button)).unwrap();
        route.change_route("/skills", &request(NavSource::Button)).unwrap();
        assert_eq!(route.current_path(), "/skills");
        assert_eq!(route.back_path(), Some("/about"));
        assert_eq!(route.forward_path(), None);
    }

    #[test]
    fn test_history_restore_moves_index() {
        let mut route = RouteState::new("/");
        route.change_route("/about", &request(NavSource::Button)).unwrap();

        route.change_route("/", &request(NavSource::History)).unwrap();
        assert_eq!(route.current_path(), "/");
        assert_eq!(route.forward_path(), Some("/about"));

        route.change_route("/about", &request(NavSource::History)).unwrap();
        assert_eq!(route.current_path(), "/about");
        assert_eq!(route.forward_path(), None);
    }

    #[test]
    fn test_fresh_navigation_drops_forward_history() {
        let mut route = RouteState::new("/");
        route.change_route("/about", &request(NavSource::Button)).unwrap();
        route.change_route("/", &request(NavSource::History)).unwrap();

        route.change_route("/contact", &request(NavSource::Button)).unwrap();
        assert_eq!(route.current_path(), "/contact");
        assert_eq!(route.forward_path(), None);
        assert_eq!(route.back_path(), Some("/"));
    }
}
