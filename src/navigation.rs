use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::surface::Page;

/// A single navigation: the page it targets and the token its loader checks.
#[derive(Clone, Debug)]
pub struct Navigation {
    pub page: Page,
    pub token: CancellationToken,
    pub epoch: u64,
}

impl Navigation {
    pub fn is_superseded(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Tracks the active page and hands out one cancellation token per navigation.
///
/// Starting a navigation cancels the token of the previous one, so a loader
/// still waiting on the network discards its results.
#[derive(Debug)]
pub struct NavigationController {
    current: Page,
    token: CancellationToken,
    epoch: u64,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current: Page::default(),
            token: CancellationToken::new(),
            epoch: 0,
        }
    }

    pub fn begin(&mut self, page: Page) -> Navigation {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.epoch += 1;
        self.current = page;
        debug!(page = %page, epoch = self.epoch, "navigation started");

        Navigation {
            page,
            token: self.token.clone(),
            epoch: self.epoch,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Token of the live navigation, for reloads that must not outlive it.
    pub fn current_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_navigation_cancels_previous() {
        let mut nav = NavigationController::new();
        let first = nav.begin(Page::Orders);
        assert!(!first.is_superseded());

        let second = nav.begin(Page::Documents);
        assert!(first.is_superseded());
        assert!(!second.is_superseded());
        assert_eq!(nav.current(), Page::Documents);
        assert_eq!(second.epoch, first.epoch + 1);
    }

    #[test]
    fn current_token_follows_latest_navigation() {
        let mut nav = NavigationController::new();
        let before = nav.current_token();
        nav.begin(Page::Quality);
        assert!(before.is_cancelled());
        assert!(!nav.current_token().is_cancelled());
    }
}
