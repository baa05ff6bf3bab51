use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::palette::{Palette, ThemeMode};
use crate::store::KeyValueStore;

/// Storage key holding the persisted override.
pub const THEME_KEY: &str = "theme";

/// Storage work started by the controller. Dropping it leaves the work running.
#[derive(Debug)]
pub struct StorageTask(Option<JoinHandle<()>>);

impl StorageTask {
    /// Wait until the store call has finished. Failures were already logged.
    pub async fn wait(self) {
        if let Some(handle) = self.0 {
            if let Err(e) = handle.await {
                error!(error = %e, "Theme storage task failed");
            }
        }
    }
}

/// Run `work` on the blocking pool, or right here when no runtime is around.
fn run_storage(work: impl FnOnce() + Send + 'static) -> StorageTask {
    match Handle::try_current() {
        Ok(handle) => StorageTask(Some(handle.spawn_blocking(work))),
        Err(_) => {
            debug!("No async runtime; running theme storage inline");
            work();
            StorageTask(None)
        }
    }
}

/// Owner of the active color scheme. Construct once at startup and hand clones to consumers.
///
/// Reads and toggles are synchronous. Inside a tokio runtime storage access happens on
/// blocking tasks that callers may wait on or detach; outside one it runs inline.
#[derive(Clone)]
pub struct ThemeController {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<ThemeMode>,
    store: Arc<dyn KeyValueStore>,
    // Bumped under the watch lock on every toggle; lets a late startup read detect it is stale.
    toggles: AtomicU64,
    persist: Mutex<()>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController").field("mode", &self.mode()).finish()
    }
}

impl ThemeController {
    /// Start from the platform preference; `None` means the platform did not report one.
    pub fn new(platform: Option<ThemeMode>, store: Arc<dyn KeyValueStore>) -> Self {
        let initial = platform.unwrap_or_default();
        let (state, _) = watch::channel(initial);
        info!(mode = %initial, "Theme controller created");
        Self {
            inner: Arc::new(Inner { state, store, toggles: AtomicU64::new(0), persist: Mutex::new(()) }),
        }
    }

    /// Construct and immediately start reading the persisted override.
    pub fn start(platform: Option<ThemeMode>, store: Arc<dyn KeyValueStore>) -> (Self, StorageTask) {
        let controller = Self::new(platform, store);
        let load = controller.load_persisted();
        (controller, load)
    }

    /// Apply the stored `"dark"`/`"light"` override, if any.
    ///
    /// Until this finishes consumers see the platform state. If the user toggles first,
    /// the stored value is dropped. Read failures keep the current state.
    pub fn load_persisted(&self) -> StorageTask {
        let inner = Arc::clone(&self.inner);
        let seen = inner.toggles.load(Ordering::SeqCst);
        run_storage(move || {
            let saved = match inner.store.get(THEME_KEY) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    debug!("No saved theme preference");
                    return;
                }
                Err(e) => {
                    error!(error = %e, "Error loading theme preference");
                    return;
                }
            };
            let mode = match saved.parse::<ThemeMode>() {
                Ok(mode) => mode,
                Err(e) => {
                    warn!(error = %e, "Ignoring saved theme preference");
                    return;
                }
            };
            let applied = inner.state.send_if_modified(|current| {
                if inner.toggles.load(Ordering::SeqCst) != seen || *current == mode {
                    return false;
                }
                *current = mode;
                true
            });
            info!(mode = %mode, applied, "Loaded theme preference");
        })
    }

    pub fn mode(&self) -> ThemeMode {
        *self.inner.state.borrow()
    }

    pub fn is_dark(&self) -> bool {
        self.mode() == ThemeMode::Dark
    }

    pub fn colors(&self) -> &'static Palette {
        self.mode().palette()
    }

    /// Receiver notified on every change of mode.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.inner.state.subscribe()
    }

    /// Flip between light and dark. The new mode is visible as soon as this returns;
    /// saving it happens on the returned task and a failed save is only logged.
    pub fn toggle_theme(&self) -> StorageTask {
        let mut next = ThemeMode::default();
        self.inner.state.send_modify(|current| {
            *current = current.toggled();
            next = *current;
            self.inner.toggles.fetch_add(1, Ordering::SeqCst);
        });
        info!(mode = %next, "Theme toggled");

        let inner = Arc::clone(&self.inner);
        run_storage(move || {
            let _guard = match inner.persist.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            // Save whatever is current now so the last write always matches the last toggle.
            let mode = *inner.state.borrow();
            if let Err(e) = inner.store.set(THEME_KEY, mode.as_str()) {
                error!(error = %e, mode = %mode, "Error saving theme preference");
            }
        })
    }
}
