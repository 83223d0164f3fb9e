mod macros;

use macros::uuid_id;

uuid_id!(
    /// Organisation identifier. Roles, permissions and memberships are scoped to an organisation.
    OrganisationId
);

uuid_id!(OrganisationMemberId);

uuid_id!(
    /// Identifier of a permission record, which belongs to exactly one role
    PermissionId
);

uuid_id!(RoleId);

uuid_id!(UserId);
