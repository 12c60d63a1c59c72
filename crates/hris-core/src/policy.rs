//! Access policy: maps an access level to the operations it permits.

use crate::models::access::AccessLevel;

/// Whether `level` may list employee records.
pub fn can_list_employees(level: AccessLevel) -> bool {
    matches!(
        level,
        AccessLevel::Hr | AccessLevel::Manager | AccessLevel::Supervisor
    )
}

/// String form of [`can_list_employees`] for callers holding an
/// unparsed access level. Unrecognized values are denied.
pub fn can_list_employees_raw(level: &str) -> bool {
    level
        .parse::<AccessLevel>()
        .is_ok_and(can_list_employees)
}
