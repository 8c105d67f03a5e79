use super::entities::UserRole;

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Option<UserRole>,
}

/// Partial update; `None` leaves the attribute untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

/// Row to insert, with the password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}
