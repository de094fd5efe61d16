//! # File-Backed Coupon Store
//!
//! The catalog lives in one JSON file. All records are loaded at startup
//! and kept in memory; every mutation updates the in-memory list and
//! rewrites the file before releasing the lock, so the file is always a
//! complete snapshot of the catalog.
//!
//! ## Locking Discipline
//! ```text
//! lock ──► mutate in-memory list ──► rewrite file ──► unlock
//! ```
//! Readers take the same lock, so a reader never observes a half-applied
//! mutation. `increment_usage` is the primitive the engine calls after a
//! successful apply; because the engine's gate check and this increment
//! are separate critical sections, two concurrent applies can both pass
//! the gate of a near-exhausted coupon before either increment lands.
//! Strict enforcement would move the limit check into this method.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use promo_core::store::{CouponStore, StoreError, StoreResult};
use promo_core::types::{Coupon, CouponId};

/// JSON-file implementation of the coupon catalog.
pub struct FileCouponStore {
    path: PathBuf,
    coupons: Mutex<Vec<Coupon>>,
}

impl FileCouponStore {
    /// Opens the catalog at `path`, loading any existing records.
    ///
    /// A missing file is an empty catalog, not an error; it is created on
    /// the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let coupons = load_catalog(&path)?;
        info!(path = %path.display(), count = coupons.len(), "Coupon catalog loaded");

        Ok(FileCouponStore {
            path,
            coupons: Mutex::new(coupons),
        })
    }

    fn catalog(&self) -> StoreResult<MutexGuard<'_, Vec<Coupon>>> {
        self.coupons.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Rewrites the catalog file from the in-memory list. Called with the
    /// lock held.
    fn persist(&self, coupons: &[Coupon]) -> StoreResult<()> {
        let data = serde_json::to_vec_pretty(coupons)
            .map_err(|e| StoreError::Persist(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Persist(e.to_string()))?;
            }
        }
        fs::write(&self.path, data).map_err(|e| StoreError::Persist(e.to_string()))
    }
}

fn load_catalog(path: &Path) -> StoreResult<Vec<Coupon>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Load(e.to_string())),
    };
    serde_json::from_slice(&data).map_err(|e| StoreError::Load(e.to_string()))
}

impl CouponStore for FileCouponStore {
    fn create(&self, mut coupon: Coupon) -> StoreResult<Coupon> {
        let mut coupons = self.catalog()?;

        // max+1 keeps ids unique even after deletes.
        coupon.id = coupons.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        debug!(id = coupon.id, coupon_type = %coupon.coupon_type, "Creating coupon");

        coupons.push(coupon.clone());
        self.persist(&coupons)?;
        Ok(coupon)
    }

    fn list(&self) -> StoreResult<Vec<Coupon>> {
        Ok(self.catalog()?.clone())
    }

    fn get(&self, id: CouponId) -> StoreResult<Coupon> {
        self.catalog()?
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, coupon: Coupon) -> StoreResult<Coupon> {
        let mut coupons = self.catalog()?;

        let slot = coupons
            .iter_mut()
            .find(|c| c.id == coupon.id)
            .ok_or(StoreError::NotFound(coupon.id))?;
        debug!(id = coupon.id, "Updating coupon");

        *slot = coupon.clone();
        self.persist(&coupons)?;
        Ok(coupon)
    }

    fn delete(&self, id: CouponId) -> StoreResult<()> {
        let mut coupons = self.catalog()?;

        let before = coupons.len();
        coupons.retain(|c| c.id != id);
        if coupons.len() == before {
            return Err(StoreError::NotFound(id));
        }
        debug!(id, "Deleted coupon");

        self.persist(&coupons)
    }

    fn increment_usage(&self, id: CouponId) -> StoreResult<()> {
        let mut coupons = self.catalog()?;

        let coupon = coupons
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        coupon.used_count += 1;
        debug!(id, used_count = coupon.used_count, "Incremented coupon usage");

        self.persist(&coupons)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
