use super::DeepClone;
use crate::model::{Payload, RefOr, Reference};

impl DeepClone for Reference {
    fn deep_clone(&self) -> Self {
        let Self { ref_location } = self;
        Self {
            ref_location: ref_location.deep_clone(),
        }
    }
}

impl<T> DeepClone for RefOr<T>
where
    T: DeepClone,
{
    fn deep_clone(&self) -> Self {
        match self {
            Self::Ref(reference) => Self::Ref(reference.deep_clone()),
            Self::T(value) => Self::T(value.deep_clone()),
        }
    }
}

/// Payloads are shared, not copied: they have no mutable access.
impl DeepClone for Payload {
    fn deep_clone(&self) -> Self {
        self.share()
    }
}
