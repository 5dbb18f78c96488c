//! Catalog store - versioned persistence for catalog bundles.

use super::{CatalogBundle, CodedChoice, FieldDef, RangeDef, ValueListEntry};
use crate::error::Error;
use sled::{Db, Transactional, Tree};
use std::sync::atomic::{AtomicU64, Ordering};

/// Tree name for catalog bundles.
const BUNDLE_TREE: &str = "catalog:bundles";

/// Tree name for catalog metadata.
const META_TREE: &str = "catalog:meta";

/// Key for current catalog version in the meta tree.
const CURRENT_VERSION_KEY: &[u8] = b"current_version";

/// The sled-backed catalog store.
///
/// Each full rebuild commits a complete [`CatalogBundle`] as a new
/// version; the bundle and the current-version pointer are written in one
/// transaction, so readers never observe a partially built catalog.
pub struct Catalog {
    /// Bundle snapshots tree.
    bundle_tree: Tree,
    /// Metadata tree.
    meta_tree: Tree,
    /// Current catalog version (cached).
    current_version: AtomicU64,
    /// Current bundle (cached).
    current_bundle: std::sync::RwLock<Option<CatalogBundle>>,
}

impl Catalog {
    /// Open or create a catalog using the given sled database.
    pub fn open(db: &Db) -> Result<Self, Error> {
        let bundle_tree = db.open_tree(BUNDLE_TREE)?;
        let meta_tree = db.open_tree(META_TREE)?;

        let current_version = match meta_tree.get(CURRENT_VERSION_KEY)? {
            Some(bytes) => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&bytes);
                u64::from_be_bytes(buf)
            }
            None => 0,
        };

        let catalog = Self {
            bundle_tree,
            meta_tree,
            current_version: AtomicU64::new(current_version),
            current_bundle: std::sync::RwLock::new(None),
        };

        // Pre-load the current bundle if one exists
        if current_version > 0 {
            if let Some(bundle) = catalog.bundle_at_version(current_version)? {
                *catalog.current_bundle.write().unwrap() = Some(bundle);
            }
        }

        Ok(catalog)
    }

    /// Get the current catalog version.
    pub fn current_version(&self) -> u64 {
        self.current_version.load(Ordering::SeqCst)
    }

    /// Get the current catalog bundle.
    pub fn current_bundle(&self) -> Result<Option<CatalogBundle>, Error> {
        let guard = self.current_bundle.read().unwrap();
        Ok(guard.clone())
    }

    /// Get a catalog bundle at a specific version.
    pub fn bundle_at_version(&self, version: u64) -> Result<Option<CatalogBundle>, Error> {
        let key = version.to_be_bytes();
        match self.bundle_tree.get(key)? {
            Some(bytes) => Ok(Some(CatalogBundle::from_bytes(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Commit a freshly built bundle as the new current version.
    ///
    /// The bundle snapshot and the current-version pointer are written in
    /// one sled transaction: either the whole catalog becomes visible, or
    /// none of it does. Returns the new version number.
    pub fn apply(&self, mut bundle: CatalogBundle) -> Result<u64, Error> {
        let new_version = self.current_version() + 1;
        bundle.version = new_version;

        let key = new_version.to_be_bytes();
        let value = bundle.to_bytes()?;

        let result: Result<(), sled::transaction::TransactionError<Error>> =
            (&self.bundle_tree, &self.meta_tree).transaction(|(bundle_tx, meta_tx)| {
                bundle_tx.insert(&key[..], value.clone())?;
                meta_tx.insert(CURRENT_VERSION_KEY, &key[..])?;
                Ok(())
            });

        match result {
            Ok(()) => {
                self.current_version.store(new_version, Ordering::SeqCst);
                *self.current_bundle.write().unwrap() = Some(bundle);
                Ok(new_version)
            }
            Err(sled::transaction::TransactionError::Abort(e)) => Err(e),
            Err(sled::transaction::TransactionError::Storage(e)) => Err(Error::Storage(e)),
        }
    }

    /// Look up a field by (entity, position) in the current catalog.
    pub fn field(&self, entity: &str, position: u32) -> Result<Option<FieldDef>, Error> {
        let guard = self.current_bundle.read().unwrap();
        Ok(guard
            .as_ref()
            .and_then(|b| b.field(entity, position).cloned()))
    }

    /// Coded choices of a field, in display order.
    pub fn choices_for(&self, entity: &str, position: u32) -> Result<Vec<CodedChoice>, Error> {
        let guard = self.current_bundle.read().unwrap();
        Ok(guard
            .as_ref()
            .map(|b| b.choices_for(entity, position).into_iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Plain value list of a field, in sequence order.
    pub fn values_for(&self, entity: &str, position: u32) -> Result<Vec<ValueListEntry>, Error> {
        let guard = self.current_bundle.read().unwrap();
        Ok(guard
            .as_ref()
            .map(|b| b.values_for(entity, position).into_iter().cloned().collect())
            .unwrap_or_default())
    }

    /// The numeric range of a field, if declared.
    pub fn range_for(&self, entity: &str, position: u32) -> Result<Option<RangeDef>, Error> {
        let guard = self.current_bundle.read().unwrap();
        Ok(guard
            .as_ref()
            .and_then(|b| b.range_for(entity, position).cloned()))
    }

    /// Resolve a code to its label for a coded field.
    pub fn choice_label(
        &self,
        entity: &str,
        position: u32,
        code: &str,
    ) -> Result<Option<String>, Error> {
        let guard = self.current_bundle.read().unwrap();
        Ok(guard
            .as_ref()
            .and_then(|b| b.choice_label(entity, position, code).map(String::from)))
    }

    /// List all catalog versions.
    pub fn list_versions(&self) -> Result<Vec<u64>, Error> {
        let mut versions = Vec::new();
        for result in self.bundle_tree.iter() {
            let (key, _) = result?;
            if key.len() == 8 {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(&key);
                versions.push(u64::from_be_bytes(buf));
            }
        }
        versions.sort();
        Ok(versions)
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.bundle_tree.flush()?;
        self.meta_tree.flush()?;
        Ok(())
    }
}
