//! # Derived Generic Operations
//!
//! Operations expressible purely in terms of capabilities, and therefore
//! generic over any container whose brand registers them. Each function
//! resolves what it needs from an explicit [`InstanceRegistry`] and
//! delegates to the contract defaults in [`crate::contracts`]; executing
//! one operation may resolve several capabilities for the same brand
//! (`unzip` pulls `Zip`, `Foldable`, `Monoid` and `Applicative`).
//!
//! Arguments to an n-ary operation share the container family by
//! construction — the brand is a single type parameter — so the
//! "different container families" misuse is unrepresentable here and
//! rejected at compile time rather than at run time.
//!
//! ## Example
//!
//! ```rust
//! use kindred::list::List;
//! use kindred::ops;
//! use kindred::registry::InstanceRegistry;
//!
//! let reg = InstanceRegistry::new();
//!
//! let pairs = ops::zip(&reg, List::of([1, 2]), List::of(["a", "b"])).unwrap();
//! assert_eq!(pairs, List::of([(1, "a"), (2, "b")]));
//!
//! let (nums, names) = ops::unzip(&reg, pairs).unwrap();
//! assert_eq!(nums, List::of([1, 2]));
//! assert_eq!(names, List::of(["a", "b"]));
//! ```

use crate::contracts::{Foldable, Tap, Zip};
use crate::error::DispatchError;
use crate::kind::{Branded, Of};
use crate::maybe::Maybe;
use crate::registry::{
    HasApplicative, HasFoldable, HasMonad, HasMonoid, HasTap, HasZip, InstanceRegistry,
};

/// Pair two containers of the same family element-wise.
pub fn zip<VA, VB>(
    reg: &InstanceRegistry,
    fa: VA,
    fb: VB,
) -> Result<Of<VA::Brand, (VA::Elem, VB::Elem)>, DispatchError>
where
    VA: Branded,
    VB: Branded<Brand = VA::Brand>,
    VA::Brand: HasZip,
{
    let zip = reg.zip::<VA::Brand>()?;
    Ok(zip.zip2(fa.into_of(), fb.into_of()))
}

/// Pair three containers of the same family element-wise.
pub fn zip3<VA, VB, VC>(
    reg: &InstanceRegistry,
    fa: VA,
    fb: VB,
    fc: VC,
) -> Result<Of<VA::Brand, (VA::Elem, VB::Elem, VC::Elem)>, DispatchError>
where
    VA: Branded,
    VB: Branded<Brand = VA::Brand>,
    VC: Branded<Brand = VA::Brand>,
    VA::Brand: HasZip + HasApplicative,
{
    let zip = reg.zip::<VA::Brand>()?;
    let ap = reg.applicative::<VA::Brand>()?;
    Ok(zip.zip3(fa.into_of(), fb.into_of(), fc.into_of(), &*ap))
}

/// Pair each element with its image under `f`.
pub fn apzip<V, B>(
    reg: &InstanceRegistry,
    fa: V,
    f: impl FnMut(V::Elem) -> B,
) -> Result<Of<V::Brand, (V::Elem, B)>, DispatchError>
where
    V: Branded,
    V::Brand: HasZip + HasMonad,
    Of<V::Brand, V::Elem>: Clone,
{
    let zip = reg.zip::<V::Brand>()?;
    let monad = reg.monad::<V::Brand>()?;
    Ok(zip.apzip(fa.into_of(), f, &*monad))
}

/// Split a container of pairs into two containers of the same family.
///
/// Left-folds with an accumulator pair seeded at the brand's empty
/// monoid value, combining each element's projections via
/// `combine(acc, pure(projection))`. A brand without a lawful `Monoid`
/// cannot be unzipped; nothing silently defaults to empty.
pub fn unzip<V, X, Y>(
    reg: &InstanceRegistry,
    fab: V,
) -> Result<(Of<V::Brand, X>, Of<V::Brand, Y>), DispatchError>
where
    V: Branded<Elem = (X, Y)>,
    V::Brand: HasZip + HasFoldable + HasMonoid + HasApplicative,
{
    let zip = reg.zip::<V::Brand>()?;
    let foldable = reg.foldable::<V::Brand>()?;
    let monoid = reg.monoid::<V::Brand>()?;
    let ap = reg.applicative::<V::Brand>()?;
    Ok(zip.unzip(fab.into_of(), &*foldable, &*monoid, &*ap))
}

/// Run `f` on each held value for its side effect only; the result of
/// `f` is discarded and the returned container equals `fa`.
pub fn tap<V, B>(
    reg: &InstanceRegistry,
    fa: V,
    f: impl FnMut(&V::Elem) -> B,
) -> Result<V, DispatchError>
where
    V: Branded,
    V::Brand: HasTap,
{
    let tap = reg.tap::<V::Brand>()?;
    Ok(V::from_of(tap.tap(fa.into_of(), f)))
}

/// Keep elements satisfying `pred`, rebuilding through the brand's
/// monoid.
pub fn filter<V>(
    reg: &InstanceRegistry,
    fa: V,
    pred: impl FnMut(&V::Elem) -> bool,
) -> Result<V, DispatchError>
where
    V: Branded,
    V::Brand: HasFoldable + HasMonoid + HasApplicative,
{
    let foldable = reg.foldable::<V::Brand>()?;
    let monoid = reg.monoid::<V::Brand>()?;
    let ap = reg.applicative::<V::Brand>()?;
    Ok(V::from_of(foldable.filter(
        fa.into_of(),
        pred,
        &*monoid,
        &*ap,
    )))
}

/// Pair each element with its zero-based position.
pub fn with_index<V>(
    reg: &InstanceRegistry,
    fa: V,
) -> Result<Of<V::Brand, (usize, V::Elem)>, DispatchError>
where
    V: Branded,
    V::Brand: HasFoldable + HasMonoid + HasApplicative,
{
    let foldable = reg.foldable::<V::Brand>()?;
    let monoid = reg.monoid::<V::Brand>()?;
    let ap = reg.applicative::<V::Brand>()?;
    Ok(foldable.with_index(fa.into_of(), &*monoid, &*ap))
}

/// First element satisfying `pred`.
pub fn find<V>(
    reg: &InstanceRegistry,
    fa: V,
    pred: impl FnMut(&V::Elem) -> bool,
) -> Result<Maybe<V::Elem>, DispatchError>
where
    V: Branded,
    V::Brand: HasFoldable,
{
    let foldable = reg.foldable::<V::Brand>()?;
    Ok(foldable.find(fa.into_of(), pred))
}

/// Standard left fold through the brand's `Foldable`.
pub fn fold_left<V, B>(
    reg: &InstanceRegistry,
    fa: V,
    z: B,
    f: impl FnMut(B, V::Elem) -> B,
) -> Result<B, DispatchError>
where
    V: Branded,
    V::Brand: HasFoldable,
{
    let foldable = reg.foldable::<V::Brand>()?;
    Ok(foldable.fold_left(fa.into_of(), z, f))
}
