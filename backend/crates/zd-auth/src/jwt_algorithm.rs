/// Key material for locally validating ID tokens
#[derive(Debug, Clone)]
pub enum JwtAlgorithm {
    /// HMAC with SHA-256 (emulators and tests)
    HS256 { secret: Vec<u8> },
    /// RSA with SHA-256 (provider-issued tokens)
    RS256 { public_key_pem: String },
}
