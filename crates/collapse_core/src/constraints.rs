//! Constraint capture
//!
//! At registration an element's ancestor chain is walked once and every
//! constraint that pins the element is recorded under its [`ConstraintRole`],
//! together with the constant it had at that moment. Ticks then write
//! `original + sign * ratio * delta` back through the host.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::host::{ConstraintRole, ViewHost};

/// A constraint handle and its constant at capture time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapturedConstraint<C> {
    pub constraint: C,
    pub original_constant: f32,
}

/// Constraints pinning one element, keyed by role
///
/// A missing role means no ancestor constrained that edge; adjustments for it
/// are skipped.
#[derive(Clone, Debug)]
pub struct RoleConstraints<C> {
    by_role: FxHashMap<ConstraintRole, CapturedConstraint<C>>,
}

impl<C> Default for RoleConstraints<C> {
    fn default() -> Self {
        Self {
            by_role: FxHashMap::default(),
        }
    }
}

impl<C: Copy> RoleConstraints<C> {
    pub fn get(&self, role: ConstraintRole) -> Option<&CapturedConstraint<C>> {
        self.by_role.get(&role)
    }

    pub fn contains(&self, role: ConstraintRole) -> bool {
        self.by_role.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.by_role.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_role.is_empty()
    }

    /// Captured roles, in no particular order
    pub fn roles(&self) -> impl Iterator<Item = ConstraintRole> + '_ {
        self.by_role.keys().copied()
    }

    /// Record a constraint unless the role is already taken
    fn insert_first(&mut self, role: ConstraintRole, captured: CapturedConstraint<C>) -> bool {
        if self.by_role.contains_key(&role) {
            return false;
        }
        self.by_role.insert(role, captured);
        true
    }
}

/// Walk from `element` up through its ancestors and capture every
/// constraint that has `element` as one of its endpoints
///
/// The nearest constraint wins when two share a role. Host errors abort the
/// walk and are returned unchanged.
pub fn capture_constraints<H: ViewHost + ?Sized>(
    host: &H,
    element: H::ElementId,
) -> Result<RoleConstraints<H::ConstraintId>, H::Error> {
    let mut captured = RoleConstraints::default();
    let mut current = Some(element);

    while let Some(view) = current {
        for (id, constraint) in host.installed_constraints(view)? {
            let Some(role) = constraint
                .attribute_for(element)
                .and_then(ConstraintRole::from_attribute)
            else {
                continue;
            };
            if captured.contains(role) {
                tracing::trace!("skipping duplicate {:?} constraint on {:?}", role, element);
                continue;
            }
            let original_constant = host.constraint_constant(id)?;
            captured.insert_first(
                role,
                CapturedConstraint {
                    constraint: id,
                    original_constant,
                },
            );
        }
        current = host.superview(view);
    }

    Ok(captured)
}

/// Capture the header's own collapsing constraints in order
pub fn capture_list<H: ViewHost + ?Sized>(
    host: &H,
    constraints: &[H::ConstraintId],
) -> Result<SmallVec<[CapturedConstraint<H::ConstraintId>; 2]>, H::Error> {
    constraints
        .iter()
        .map(|&constraint| {
            Ok(CapturedConstraint {
                constraint,
                original_constant: host.constraint_constant(constraint)?,
            })
        })
        .collect()
}

/// Move one captured constraint to ratio `ratio` of `delta`
///
/// No-op when the role wasn't captured.
#[inline]
pub fn update_constraint<H: ViewHost + ?Sized>(
    host: &mut H,
    constraints: &RoleConstraints<H::ConstraintId>,
    role: ConstraintRole,
    delta: f32,
    ratio: f32,
) {
    if let Some(captured) = constraints.get(role) {
        host.set_constraint_constant(
            captured.constraint,
            captured.original_constant + role.sign() * ratio * delta,
        );
    }
}
