use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use ferrule_domain::config::ScraperConfig;
use ferrule_domain::DomainError;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, RwLock, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One launched Chromium process plus the task draining its CDP events.
struct BrowserHandle {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserHandle {
    async fn launch(settings: &ScraperConfig) -> Result<Self, DomainError> {
        let mut builder = BrowserConfig::builder()
            .arg("--headless=new")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu");

        if let Some(path) = &settings.browser_path {
            builder = builder.chrome_executable(path.as_str());
        }

        let config = builder.build().map_err(DomainError::BrowserSession)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| DomainError::BrowserSession(format!("failed to launch browser: {e}")))?;

        // The handler stream must be polled for the browser to make
        // progress; it ends when the process dies.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("Browser launched");

        Ok(Self {
            browser,
            handler_task,
        })
    }
}

impl Drop for BrowserHandle {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

/// A checked-out page. Holding it occupies one pool slot; the slot frees
/// when the session is dropped.
pub struct ScrapeSession {
    page: Page,
    _permit: OwnedSemaphorePermit,
}

impl ScrapeSession {
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Close the underlying tab. Close failures only get logged; the
    /// browser reaps orphaned targets when it shuts down.
    pub async fn close(self) {
        if let Err(e) = self.page.close().await {
            debug!(error = %e, "Failed to close page");
        }
    }
}

/// Bounded pool of Chromium page sessions over one shared browser.
///
/// The browser launches lazily on first checkout and is replaced if it
/// stops serving new pages. At most `max_sessions` pages exist at a time;
/// further checkouts wait on the semaphore.
pub struct BrowserPool {
    settings: ScraperConfig,
    slots: Arc<Semaphore>,
    browser: RwLock<Option<Arc<BrowserHandle>>>,
}

impl BrowserPool {
    pub fn new(settings: ScraperConfig) -> Self {
        let slots = Arc::new(Semaphore::new(settings.max_sessions));
        Self {
            settings,
            slots,
            browser: RwLock::new(None),
        }
    }

    /// Wait for a free slot, then open a fresh page on the shared browser.
    pub async fn checkout(&self) -> Result<ScrapeSession, DomainError> {
        let permit = Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map_err(|_| DomainError::BrowserSession("session pool closed".to_string()))?;

        let handle = self.ensure_browser().await?;

        let page = match handle.browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                // The process is likely gone; relaunch once.
                warn!(error = %e, "Browser stopped serving pages, relaunching");
                self.invalidate(&handle).await;

                let handle = self.ensure_browser().await?;
                handle.browser.new_page("about:blank").await.map_err(|e| {
                    DomainError::BrowserSession(format!("failed to open page: {e}"))
                })?
            }
        };

        Ok(ScrapeSession {
            page,
            _permit: permit,
        })
    }

    async fn ensure_browser(&self) -> Result<Arc<BrowserHandle>, DomainError> {
        {
            let guard = self.browser.read().await;
            if let Some(handle) = guard.as_ref() {
                return Ok(Arc::clone(handle));
            }
        }

        let mut guard = self.browser.write().await;
        // Another checkout may have launched while we waited for the lock.
        if let Some(handle) = guard.as_ref() {
            return Ok(Arc::clone(handle));
        }

        let handle = Arc::new(BrowserHandle::launch(&self.settings).await?);
        *guard = Some(Arc::clone(&handle));
        Ok(handle)
    }

    async fn invalidate(&self, stale: &Arc<BrowserHandle>) {
        let mut guard = self.browser.write().await;
        if let Some(current) = guard.as_ref() {
            if Arc::ptr_eq(current, stale) {
                *guard = None;
            }
        }
    }
}
