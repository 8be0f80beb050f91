//! # Instance Registry & Dispatch Resolver
//!
//! Maps `(capability, brand)` to exactly one implementation instance.
//!
//! A brand's instances are registered together as a bundle, computed at
//! most once per registry (lazily, on first resolution) and read-only
//! afterwards. Resolution tries the brand's own bundle first, then walks
//! the brand's declared ancestry most-derived first, and caches every
//! successful binding under the queried brand — once cached, a binding
//! never changes, so repeated resolution hands back the same `Arc`.
//!
//! The registry is an explicit value, not ambient global state: construct
//! one at process start, share references, and treat it as read-only
//! outside of first-population races (which are memoized-once and
//! idempotent, see [`Instances::bundle`]).
//!
//! ## Example
//!
//! ```rust
//! use kindred::capability::{CapabilityRef, OptionalCap};
//! use kindred::contracts::Monad;
//! use kindred::error::DispatchError;
//! use kindred::list::{List, ListKind};
//! use kindred::registry::{BrandRef, InstanceRegistry};
//!
//! let reg = InstanceRegistry::new();
//!
//! // Typed resolution: the instance arrives with its concrete type.
//! let m = reg.monad::<ListKind>().unwrap();
//! assert_eq!(m.pure(1), List::of([1]));
//!
//! // Untyped resolution answers capability queries for arbitrary pairs.
//! let missing = reg.resolve(
//!     CapabilityRef::of::<OptionalCap>(),
//!     BrandRef::of::<ListKind>(),
//! );
//! assert!(matches!(
//!     missing,
//!     Err(DispatchError::CapabilityNotFound { capability: "Optional", .. })
//! ));
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::capability::{
    ApplicativeCap, Capability, CapabilityRef, FoldableCap, MonadCap, MonoidCap, OptionalCap,
    TapCap, TraverseCap, ZipCap,
};
use crate::contracts::{Applicative, Foldable, Monad, Monoid, Optional, Tap, Traverse, Zip};
use crate::error::DispatchError;
use crate::kind::{Branded, Kind};

/// A brand that participates in dispatch: it can produce its instance
/// bundle and declare the brands it falls back to.
///
/// `bundle` must be deterministic — concurrent first-access may compute it
/// more than once, and all computations must converge to structurally
/// equal bundles (same capability set, same instance types).
pub trait Instances: Kind {
    /// Build this brand's capability bundle.
    fn bundle() -> InstanceBundle;

    /// Declared ancestry, most-derived first. Consulted in order when a
    /// capability is missing from this brand's own bundle; list the full
    /// chain explicitly, it is not walked transitively.
    fn ancestors() -> Vec<BrandRef> {
        Vec::new()
    }
}

/// An erased brand handle: identity, display name, and the hooks the
/// resolver needs to populate it lazily.
#[derive(Clone, Copy)]
pub struct BrandRef {
    id: TypeId,
    name: &'static str,
    build: fn() -> InstanceBundle,
    ancestors: fn() -> Vec<BrandRef>,
}

impl BrandRef {
    pub fn of<K: Instances>() -> Self {
        Self {
            id: TypeId::of::<K>(),
            name: K::name(),
            build: K::bundle,
            ancestors: K::ancestors,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for BrandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BrandRef").field(&self.name).finish()
    }
}

/// One registered `(capability, brand)` binding.
#[derive(Clone)]
struct InstanceEntry {
    capability_name: &'static str,
    instance: Arc<dyn Any + Send + Sync>,
    instance_type: TypeId,
    instance_type_name: &'static str,
}

/// The instances one brand registers, collected before installation.
///
/// ```rust
/// use kindred::capability::MonadCap;
/// use kindred::registry::InstanceBundle;
/// use kindred::maybe::MaybeMonad;
///
/// let bundle = InstanceBundle::new().with::<MonadCap, _>(MaybeMonad);
/// assert_eq!(bundle.len(), 1);
/// ```
#[derive(Default)]
pub struct InstanceBundle {
    entries: HashMap<TypeId, InstanceEntry>,
}

impl InstanceBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the instance for one capability. Later calls for the same
    /// capability replace earlier ones; the last write is authoritative.
    pub fn with<C: Capability, I: Any + Send + Sync>(mut self, instance: I) -> Self {
        self.entries.insert(
            TypeId::of::<C>(),
            InstanceEntry {
                capability_name: C::name(),
                instance: Arc::new(instance),
                instance_type: TypeId::of::<I>(),
                instance_type_name: std::any::type_name::<I>(),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered capability names, sorted for deterministic output.
    pub fn capability_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|e| e.capability_name).collect();
        names.sort_unstable();
        names
    }

    /// Structural equality: same capability set, same instance types.
    /// The instance *values* are stateless, so types are identity enough.
    fn structurally_eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(cap, entry)| {
                other
                    .entries
                    .get(cap)
                    .is_some_and(|o| o.instance_type == entry.instance_type)
            })
    }

    /// Name of some capability on which `self` and `other` disagree.
    fn first_conflict(&self, other: &Self) -> &'static str {
        let mut candidates: Vec<_> = self
            .entries
            .iter()
            .filter(|(cap, entry)| {
                other
                    .entries
                    .get(cap)
                    .map_or(true, |o| o.instance_type != entry.instance_type)
            })
            .map(|(_, e)| e.capability_name)
            .chain(
                other
                    .entries
                    .iter()
                    .filter(|(cap, _)| !self.entries.contains_key(cap))
                    .map(|(_, e)| e.capability_name),
            )
            .collect();
        candidates.sort_unstable();
        candidates.first().copied().unwrap_or("<none>")
    }
}

impl fmt::Debug for InstanceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceBundle")
            .field("capabilities", &self.capability_names())
            .finish()
    }
}

struct StoredBundle {
    brand_name: &'static str,
    bundle: InstanceBundle,
}

/// Process-wide mapping from `(capability, brand)` to a singleton
/// implementation instance.
pub struct InstanceRegistry {
    bundles: RwLock<HashMap<TypeId, StoredBundle>>,
    /// Resolved bindings; write-once per key.
    cache: RwLock<HashMap<(TypeId, TypeId), InstanceEntry>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self {
            bundles: RwLock::new(HashMap::new()),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Explicitly register a brand's bundle.
    ///
    /// Memoized: re-registering a structurally identical bundle is a
    /// no-op (the race-safe recomputation case). A structurally different
    /// bundle for an already-populated brand is a programming error.
    ///
    /// # Errors
    ///
    /// [`DispatchError::ConflictingInstance`] on a structurally different
    /// re-registration.
    pub fn register_bundle<K: Kind>(&self, bundle: InstanceBundle) -> Result<(), DispatchError> {
        self.install(TypeId::of::<K>(), K::name(), bundle)
    }

    fn install(
        &self,
        brand_id: TypeId,
        brand_name: &'static str,
        bundle: InstanceBundle,
    ) -> Result<(), DispatchError> {
        let mut bundles = self.bundles.write().expect("registry lock poisoned");
        match bundles.get(&brand_id) {
            Some(existing) if existing.bundle.structurally_eq(&bundle) => Ok(()),
            Some(existing) => Err(DispatchError::ConflictingInstance {
                brand: brand_name,
                capability: existing.bundle.first_conflict(&bundle),
            }),
            None => {
                log::trace!(
                    "populating instance bundle for {brand_name}: {:?}",
                    bundle.capability_names()
                );
                bundles.insert(brand_id, StoredBundle { brand_name, bundle });
                Ok(())
            }
        }
    }

    /// Lazily populate `brand`'s bundle. The bundle is computed outside
    /// any lock; the first writer wins and later computations are
    /// discarded after an idempotence check.
    fn ensure(&self, brand: &BrandRef) -> Result<(), DispatchError> {
        {
            let bundles = self.bundles.read().expect("registry lock poisoned");
            if bundles.contains_key(&brand.id) {
                return Ok(());
            }
        }
        let bundle = (brand.build)();
        self.install(brand.id, brand.name, bundle)
    }

    fn lookup(&self, brand_id: TypeId, capability_id: TypeId) -> Option<InstanceEntry> {
        let bundles = self.bundles.read().expect("registry lock poisoned");
        bundles
            .get(&brand_id)
            .and_then(|stored| stored.bundle.entries.get(&capability_id))
            .cloned()
    }

    fn resolve_entry(
        &self,
        capability: CapabilityRef,
        brand: BrandRef,
    ) -> Result<InstanceEntry, DispatchError> {
        let key = (capability.id, brand.id);
        {
            let cache = self.cache.read().expect("registry lock poisoned");
            if let Some(entry) = cache.get(&key) {
                return Ok(entry.clone());
            }
        }

        self.ensure(&brand)?;
        let mut found = self.lookup(brand.id, capability.id);
        if found.is_none() {
            for ancestor in (brand.ancestors)() {
                self.ensure(&ancestor)?;
                if let Some(entry) = self.lookup(ancestor.id, capability.id) {
                    log::trace!(
                        "resolved {} for {} via ancestor {}",
                        capability.name(),
                        brand.name,
                        ancestor.name
                    );
                    found = Some(entry);
                    break;
                }
            }
        }

        let entry = found.ok_or(DispatchError::CapabilityNotFound {
            capability: capability.name(),
            brand: brand.name,
        })?;

        // Write-once: if another thread cached this key first, its entry
        // is authoritative and every caller observes the same instance.
        let mut cache = self.cache.write().expect("registry lock poisoned");
        Ok(cache.entry(key).or_insert(entry).clone())
    }

    /// Untyped resolution: the instance for `(capability, brand)`, erased.
    ///
    /// Exact match on the brand's bundle, then declared ancestry in order,
    /// most-derived first.
    ///
    /// # Errors
    ///
    /// [`DispatchError::CapabilityNotFound`] when neither the brand nor
    /// its ancestry registers the capability.
    pub fn resolve(
        &self,
        capability: CapabilityRef,
        brand: BrandRef,
    ) -> Result<Arc<dyn Any + Send + Sync>, DispatchError> {
        self.resolve_entry(capability, brand).map(|e| e.instance)
    }

    /// Convenience: resolve against the brand of `value`'s type. Primary
    /// entry point for generic operations.
    pub fn resolve_for<C: Capability, V: Branded>(
        &self,
        _value: &V,
    ) -> Result<Arc<dyn Any + Send + Sync>, DispatchError>
    where
        V::Brand: Instances,
    {
        self.resolve(CapabilityRef::of::<C>(), BrandRef::of::<V::Brand>())
    }

    /// Whether `(C, K)` resolves, populating lazily as needed.
    pub fn supports<C: Capability, K: Instances>(&self) -> bool {
        self.resolve(CapabilityRef::of::<C>(), BrandRef::of::<K>())
            .is_ok()
    }

    fn typed<C: Capability, K: Instances, I: Any + Send + Sync>(
        &self,
    ) -> Result<Arc<I>, DispatchError> {
        let entry = self.resolve_entry(CapabilityRef::of::<C>(), BrandRef::of::<K>())?;
        let actual = entry.instance_type_name;
        entry
            .instance
            .downcast::<I>()
            .map_err(|_| DispatchError::TypeMismatch {
                expected: std::any::type_name::<I>(),
                actual,
            })
    }

    /// The brand's `Monad` instance, concretely typed.
    pub fn monad<K: HasMonad>(&self) -> Result<Arc<K::MonadI>, DispatchError> {
        self.typed::<MonadCap, K, K::MonadI>()
    }

    /// The brand's `Applicative` instance, concretely typed.
    pub fn applicative<K: HasApplicative>(&self) -> Result<Arc<K::ApplicativeI>, DispatchError> {
        self.typed::<ApplicativeCap, K, K::ApplicativeI>()
    }

    /// The brand's `Monoid` instance, concretely typed.
    pub fn monoid<K: HasMonoid>(&self) -> Result<Arc<K::MonoidI>, DispatchError> {
        self.typed::<MonoidCap, K, K::MonoidI>()
    }

    /// The brand's `Optional` instance, concretely typed.
    pub fn optional<K: HasOptional>(&self) -> Result<Arc<K::OptionalI>, DispatchError> {
        self.typed::<OptionalCap, K, K::OptionalI>()
    }

    /// The brand's `Foldable` instance, concretely typed.
    pub fn foldable<K: HasFoldable>(&self) -> Result<Arc<K::FoldableI>, DispatchError> {
        self.typed::<FoldableCap, K, K::FoldableI>()
    }

    /// The brand's `Traverse` instance, concretely typed.
    pub fn traverse<K: HasTraverse>(&self) -> Result<Arc<K::TraverseI>, DispatchError> {
        self.typed::<TraverseCap, K, K::TraverseI>()
    }

    /// The brand's `Zip` instance, concretely typed.
    pub fn zip<K: HasZip>(&self) -> Result<Arc<K::ZipI>, DispatchError> {
        self.typed::<ZipCap, K, K::ZipI>()
    }

    /// The brand's `Tap` instance, concretely typed.
    pub fn tap<K: HasTap>(&self) -> Result<Arc<K::TapI>, DispatchError> {
        self.typed::<TapCap, K, K::TapI>()
    }

    /// Number of populated brands.
    pub fn brand_count(&self) -> usize {
        self.bundles.read().expect("registry lock poisoned").len()
    }
}

impl Default for InstanceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bundles = self.bundles.read().expect("registry lock poisoned");
        let mut brands: Vec<_> = bundles.values().map(|s| s.brand_name).collect();
        brands.sort_unstable();
        f.debug_struct("InstanceRegistry")
            .field("brands", &brands)
            .finish()
    }
}

// ============================================================================
// Typed associations: which concrete instance a brand registers per
// capability. These let resolution hand back `Arc<ConcreteInstance>`
// instead of an erased `Arc<dyn Any>`.
// ============================================================================

/// Brand registers a `Monad` instance of concrete type `MonadI`.
pub trait HasMonad: Instances {
    type MonadI: Monad<Self> + Any + Send + Sync;
}

/// Brand registers an `Applicative` instance of concrete type
/// `ApplicativeI`.
pub trait HasApplicative: Instances {
    type ApplicativeI: Applicative<Self> + Any + Send + Sync;
}

/// Brand registers a `Monoid` instance of concrete type `MonoidI`.
pub trait HasMonoid: Instances {
    type MonoidI: Monoid<Self> + Any + Send + Sync;
}

/// Brand registers an `Optional` instance of concrete type `OptionalI`.
pub trait HasOptional: Instances {
    type OptionalI: Optional<Self> + Any + Send + Sync;
}

/// Brand registers a `Foldable` instance of concrete type `FoldableI`.
pub trait HasFoldable: Instances {
    type FoldableI: Foldable<Self> + Any + Send + Sync;
}

/// Brand registers a `Traverse` instance of concrete type `TraverseI`.
pub trait HasTraverse: Instances {
    type TraverseI: Traverse<Self> + Any + Send + Sync;
}

/// Brand registers a `Zip` instance of concrete type `ZipI`.
pub trait HasZip: Instances {
    type ZipI: Zip<Self> + Any + Send + Sync;
}

/// Brand registers a `Tap` instance of concrete type `TapI`. In practice
/// this is the brand's `Monad` instance, which taps for free.
pub trait HasTap: Instances {
    type TapI: Tap<Self> + Any + Send + Sync;
}
