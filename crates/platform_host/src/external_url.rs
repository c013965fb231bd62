//! Opening links (social profiles, project pages, browser pages) outside the desktop.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening external URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Records every opened URL instead of navigating. Clones share the log.
pub struct MemoryExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl MemoryExternalUrlService {
    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if url.trim().is_empty() {
                return Err("refusing to open an empty url".to_string());
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_records_urls_in_order() {
        let service = MemoryExternalUrlService::default();
        let shared = service.clone();
        block_on(service.open_url("https://www.youtube.com/@mroppy")).expect("open");
        block_on(service.open_url("https://www.google.com")).expect("open");
        assert_eq!(
            shared.opened(),
            vec![
                "https://www.youtube.com/@mroppy".to_string(),
                "https://www.google.com".to_string()
            ]
        );
    }

    #[test]
    fn memory_service_rejects_blank_urls() {
        let service = MemoryExternalUrlService::default();
        assert!(block_on(service.open_url("  ")).is_err());
        assert!(service.opened().is_empty());
    }
}
