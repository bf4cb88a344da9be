//! Catalog sources.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod fetch;

pub use memory::MemoryCatalogSource;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileCatalogSource;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchCatalogSource;

use crate::catalog::{Catalog, CatalogResult};
use std::future::Future;
use std::pin::Pin;

/// Default catalog location, relative to the working directory or page.
pub const DEFAULT_CATALOG: &str = "character-data.json";

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Somewhere a catalog can be loaded from.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait CatalogSource: Send + Sync {
    /// Load and parse the catalog.
    fn load(&self) -> BoxFuture<'_, CatalogResult<Catalog>>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Somewhere a catalog can be loaded from (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait CatalogSource {
    /// Load and parse the catalog.
    fn load(&self) -> BoxFuture<'_, CatalogResult<Catalog>>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
