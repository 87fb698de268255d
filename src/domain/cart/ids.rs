use crate::uuid_id;

uuid_id!(LineId);
uuid_id!(ProductId);
uuid_id!(UserId);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Uuid {0} is not compatible. Version 7 Uuid is required.")]
pub struct UuidNotCompatible(pub uuid::Uuid);
