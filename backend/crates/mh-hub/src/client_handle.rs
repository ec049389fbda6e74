use crate::{ClientId, TenantId, UserId};

/// Copyable reference to a registered client, used to unregister it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientHandle {
    pub client_id: ClientId,
    pub tenant_id: TenantId,
    pub user_id: UserId,
}
