#[derive(Debug, Clone)]
pub struct LoginInput {
    /// Email address or username.
    pub identifier: String,
    pub password: String,
}
