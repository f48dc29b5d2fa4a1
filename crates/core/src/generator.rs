//! UUID generation seam.

use uuid::Uuid;

use crate::error::KeyResult;

/// Produces fresh identifiers for [`crate::UuidKey::before_create_with`].
///
/// Swapping the generator lets tests pin the value or exercise the failure path.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> KeyResult<Uuid>;
}

impl<G> IdGenerator for &G
where
    G: IdGenerator + ?Sized,
{
    fn generate(&self) -> KeyResult<Uuid> {
        (**self).generate()
    }
}

/// Random (version 4) UUIDs: 122 random bits plus fixed version/variant bits.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RandomV4;

impl IdGenerator for RandomV4 {
    fn generate(&self) -> KeyResult<Uuid> {
        Ok(Uuid::new_v4())
    }
}
