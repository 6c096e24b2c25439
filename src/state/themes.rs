//! Themes workflow state: discovery and apply orchestration.

use std::sync::Arc;

use eframe::egui;
use tokio::task::JoinHandle;

use crate::backend::ThemeBackend;
use crate::state::StateEvent;
use crate::task::take_finished;
use crate::themes::ThemeError;

/// Themes workflow state
pub struct ThemesState {
    /// Theme names in the order discovery returned them (not deduplicated)
    pub list: Vec<String>,
    /// Whether a discovery call is in flight
    pub loading: bool,
    /// Error message from the last discovery attempt
    pub error: Option<String>,
    /// Backend response from the last successful apply
    pub last_applied: Option<String>,

    backend: Arc<dyn ThemeBackend>,
    /// Separator joining the themes root and a theme name into an address
    separator: String,
    /// Sequence number of the most recently issued discovery
    refresh_seq: u64,
    /// Async task for the most recently issued discovery
    refresh_task: Option<JoinHandle<Result<Vec<String>, ThemeError>>>,
    /// Async task for the most recently issued apply
    apply_task: Option<JoinHandle<Result<String, ThemeError>>>,
}

impl ThemesState {
    pub fn new(backend: Arc<dyn ThemeBackend>, separator: String) -> Self {
        Self {
            list: Vec::new(),
            loading: false,
            error: None,
            last_applied: None,
            backend,
            separator,
            refresh_seq: 0,
            refresh_task: None,
            apply_task: None,
        }
    }

    /// Check if a discovery is in flight
    pub fn is_busy(&self) -> bool {
        self.loading
    }

    /// Swap the backend and join convention after a settings change
    pub fn reconfigure(&mut self, backend: Arc<dyn ThemeBackend>, separator: String) {
        self.backend = backend;
        self.separator = separator;
    }

    /// Start a theme discovery.
    ///
    /// Re-entrant: issuing a new discovery while one is in flight replaces
    /// the tracked task, so only the newest call's result is ever applied.
    /// The superseded task keeps running; its result is discarded with the
    /// old handle.
    pub fn refresh(&mut self) -> StateEvent {
        self.loading = true;
        self.error = None;
        self.refresh_seq += 1;

        let seq = self.refresh_seq;
        let backend = Arc::clone(&self.backend);
        self.refresh_task = Some(tokio::spawn(async move {
            tracing::debug!(seq, "listing themes");
            backend.list_themes().await
        }));

        StateEvent::StatusMessage("Refreshing themes...".to_string())
    }

    /// Apply a theme by name.
    ///
    /// The themes root is re-resolved on every call; the address is only
    /// built once resolution succeeds. Failures are absorbed here: they
    /// never touch the list, the loading flag or the discovery error.
    pub fn apply(&mut self, name: &str) -> StateEvent {
        let backend = Arc::clone(&self.backend);
        let separator = self.separator.clone();
        let name = name.to_string();
        let status = StateEvent::StatusMessage(format!("Applying theme '{}'...", name));

        self.apply_task = Some(tokio::spawn(async move {
            let root = backend.themes_root().await?;
            let address = join_address(&root, &name, &separator);
            tracing::debug!(%address, "applying theme");
            backend.apply_theme(&address).await
        }));

        status
    }

    /// Poll in-flight tasks and fold settled results into the state
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        if let Some(result) = take_finished(&mut self.refresh_task) {
            self.loading = false;
            match result {
                Ok(Ok(list)) => {
                    tracing::debug!(count = list.len(), themes = ?list, "themes listed");
                    events.push(StateEvent::StatusMessage(format!(
                        "Found {} theme(s)",
                        list.len()
                    )));
                    self.list = list;
                }
                Ok(Err(e)) => {
                    let msg = e.to_string();
                    events.push(StateEvent::LogError(format!(
                        "Failed to list themes: {}",
                        msg
                    )));
                    events.push(StateEvent::StatusMessage(format!("Error: {}", msg)));
                    self.error = Some(msg);
                }
                Err(e) => {
                    events.push(StateEvent::LogError(format!(
                        "Theme list task panicked: {}",
                        e
                    )));
                    self.error = Some("Task panicked".to_string());
                }
            }
        }

        if let Some(result) = take_finished(&mut self.apply_task) {
            match result {
                Ok(Ok(outcome)) => {
                    events.push(StateEvent::LogInfo(format!("Theme apply: {}", outcome)));
                    events.push(StateEvent::StatusMessage(outcome.clone()));
                    self.last_applied = Some(outcome);
                }
                Ok(Err(e)) => {
                    tracing::error!("Theme apply failed: {}", e);
                    events.push(StateEvent::ApplyFailed(e.to_string()));
                }
                Err(e) => {
                    tracing::error!("Theme apply task panicked: {}", e);
                    events.push(StateEvent::ApplyFailed(e.to_string()));
                }
            }
        }

        if self.refresh_task.is_some() || self.apply_task.is_some() {
            ctx.request_repaint();
        }

        events
    }
}

/// Join a themes root and a theme name into a fully qualified address
fn join_address(root: &str, name: &str, separator: &str) -> String {
    format!("{root}{separator}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    /// Scriptable in-memory backend
    #[derive(Default)]
    struct FakeBackend {
        root: Mutex<String>,
        themes: Mutex<Vec<String>>,
        fail_root: AtomicBool,
        fail_list: AtomicBool,
        fail_apply: AtomicBool,
        /// When set, the first list call sleeps this long and returns
        /// `["stale"]` instead of the configured themes
        slow_stale_first_list: Mutex<Option<Duration>>,
        list_calls: AtomicUsize,
        apply_response: Mutex<String>,
        applied: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn new(root: &str, themes: &[&str]) -> Arc<Self> {
            let backend = Self::default();
            *backend.root.lock().unwrap() = root.to_string();
            *backend.themes.lock().unwrap() = themes.iter().map(|s| s.to_string()).collect();
            *backend.apply_response.lock().unwrap() = "ok".to_string();
            Arc::new(backend)
        }

        fn applied(&self) -> Vec<String> {
            self.applied.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ThemeBackend for FakeBackend {
        async fn themes_root(&self) -> Result<String, ThemeError> {
            if self.fail_root.load(Ordering::SeqCst) {
                return Err(ThemeError::NoThemesRoot);
            }
            Ok(self.root.lock().unwrap().clone())
        }

        async fn list_themes(&self) -> Result<Vec<String>, ThemeError> {
            let call = self.list_calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                let delay = *self.slow_stale_first_list.lock().unwrap();
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                    return Ok(vec!["stale".to_string()]);
                }
            }
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(ThemeError::Io(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                )));
            }
            Ok(self.themes.lock().unwrap().clone())
        }

        async fn apply_theme(&self, theme_dir: &str) -> Result<String, ThemeError> {
            if self.fail_apply.load(Ordering::SeqCst) {
                return Err(ThemeError::ThemeDirMissing(theme_dir.to_string()));
            }
            self.applied.lock().unwrap().push(theme_dir.to_string());
            Ok(self.apply_response.lock().unwrap().clone())
        }
    }

    /// Poll until both tasks settle, collecting the emitted events
    async fn settle(state: &mut ThemesState, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();
        for _ in 0..500 {
            events.extend(state.poll(ctx));
            if state.refresh_task.is_none() && state.apply_task.is_none() {
                return events;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("tasks did not settle");
    }

    fn has_apply_failed(events: &[StateEvent], needle: &str) -> bool {
        events
            .iter()
            .any(|e| matches!(e, StateEvent::ApplyFailed(msg) if msg.contains(needle)))
    }

    #[test]
    fn test_join_address() {
        assert_eq!(
            join_address("C:\\Users\\x\\themes", "dracula", "\\"),
            "C:\\Users\\x\\themes\\dracula"
        );
        assert_eq!(
            join_address("/home/u/.themes", "Dracula", "/"),
            "/home/u/.themes/Dracula"
        );
    }

    #[tokio::test]
    async fn test_refresh_replaces_list_in_discovery_order() {
        let backend = FakeBackend::new("/tmp/themes", &["Nord", "Dracula", "Nord"]);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(backend, "/".to_string());

        state.refresh();
        settle(&mut state, &ctx).await;

        assert_eq!(state.list, vec!["Nord", "Dracula", "Nord"]);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_refresh_empty_list_is_not_an_error() {
        let backend = FakeBackend::new("/tmp/themes", &[]);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(backend, "/".to_string());

        state.refresh();
        settle(&mut state, &ctx).await;

        assert!(state.list.is_empty());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_list() {
        let backend = FakeBackend::new("/tmp/themes", &["Nord"]);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(Arc::clone(&backend) as Arc<dyn ThemeBackend>, "/".into());

        state.refresh();
        settle(&mut state, &ctx).await;
        assert_eq!(state.list, vec!["Nord"]);

        backend.fail_list.store(true, Ordering::SeqCst);
        state.refresh();
        assert!(state.error.is_none(), "error is cleared when a refresh starts");
        settle(&mut state, &ctx).await;

        assert_eq!(state.list, vec!["Nord"]);
        assert!(state.error.as_deref().unwrap().contains("permission denied"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_loading_only_while_refresh_in_flight() {
        let backend = FakeBackend::new("/tmp/themes", &["Nord"]);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(backend, "/".to_string());

        assert!(!state.loading);
        state.refresh();
        assert!(state.loading);
        settle(&mut state, &ctx).await;
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_apply_joins_root_and_name_with_separator() {
        let backend = FakeBackend::new("C:\\Users\\x\\themes", &["dracula"]);
        let ctx = egui::Context::default();
        let mut state =
            ThemesState::new(Arc::clone(&backend) as Arc<dyn ThemeBackend>, "\\".into());

        state.apply("dracula");
        settle(&mut state, &ctx).await;

        assert_eq!(backend.applied(), vec!["C:\\Users\\x\\themes\\dracula"]);
    }

    #[tokio::test]
    async fn test_discover_then_apply_records_response() {
        let backend = FakeBackend::new("/home/u/.themes", &["Nord", "Dracula"]);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(Arc::clone(&backend) as Arc<dyn ThemeBackend>, "/".into());

        state.refresh();
        settle(&mut state, &ctx).await;
        assert_eq!(state.list, vec!["Nord", "Dracula"]);
        assert!(state.error.is_none());

        state.apply("Dracula");
        settle(&mut state, &ctx).await;

        assert_eq!(backend.applied(), vec!["/home/u/.themes/Dracula"]);
        assert_eq!(state.last_applied.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_root_failure_aborts_before_apply() {
        let backend = FakeBackend::new("/tmp/themes", &["Nord"]);
        backend.fail_root.store(true, Ordering::SeqCst);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(Arc::clone(&backend) as Arc<dyn ThemeBackend>, "/".into());

        state.apply("Nord");
        let events = settle(&mut state, &ctx).await;

        assert!(backend.applied().is_empty(), "apply command never invoked");
        assert!(state.last_applied.is_none());
        assert!(has_apply_failed(&events, "themes directory"));
    }

    #[tokio::test]
    async fn test_apply_failure_leaves_workflow_state_untouched() {
        let backend = FakeBackend::new("/tmp/themes", &["Nord"]);
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(Arc::clone(&backend) as Arc<dyn ThemeBackend>, "/".into());

        state.refresh();
        settle(&mut state, &ctx).await;

        backend.fail_apply.store(true, Ordering::SeqCst);
        state.apply("Nord");
        let events = settle(&mut state, &ctx).await;

        assert_eq!(state.list, vec!["Nord"]);
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert!(state.last_applied.is_none());
        assert!(has_apply_failed(&events, "/tmp/themes/Nord"));
    }

    #[tokio::test]
    async fn test_second_refresh_wins_over_slow_first() {
        let backend = FakeBackend::new("/tmp/themes", &["fresh"]);
        *backend.slow_stale_first_list.lock().unwrap() = Some(Duration::from_millis(50));
        let ctx = egui::Context::default();
        let mut state = ThemesState::new(Arc::clone(&backend) as Arc<dyn ThemeBackend>, "/".into());

        state.refresh();
        state.refresh();
        settle(&mut state, &ctx).await;
        assert_eq!(state.list, vec!["fresh"]);

        // Let the superseded first call finish; its result must stay discarded
        tokio::time::sleep(Duration::from_millis(80)).await;
        state.poll(&ctx);
        assert_eq!(state.list, vec!["fresh"]);
        assert!(!state.loading);
    }
}
