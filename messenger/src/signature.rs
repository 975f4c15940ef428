// Structural call-signature descriptors used to keep channels consistent.

use crate::arity::Arguments;
use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime tag for a single parameter or return type.
///
/// Equality only looks at the `TypeId`; the name is kept for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_unit(&self) -> bool {
        self.id == TypeId::of::<()>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Call shape bound to a channel: ordered input types plus the return type.
///
/// A `()` return marks a plain listener; anything else is value-returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    inputs: Vec<TypeTag>,
    output: TypeTag,
}

impl Signature {
    pub fn new(inputs: Vec<TypeTag>, output: TypeTag) -> Self {
        Self { inputs, output }
    }

    /// Descriptor for listeners taking the tuple `A` and returning `R`.
    pub fn of<A: Arguments, R: 'static>() -> Self {
        Self::new(A::type_tags(), TypeTag::of::<R>())
    }

    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    pub fn inputs(&self) -> &[TypeTag] {
        &self.inputs
    }

    pub fn output(&self) -> TypeTag {
        self.output
    }

    pub fn returns_value(&self) -> bool {
        !self.output.is_unit()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (index, input) in self.inputs.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{input}")?;
        }
        f.write_str(")")?;
        if self.returns_value() {
            write!(f, " -> {}", self.output)?;
        }
        Ok(())
    }
}
