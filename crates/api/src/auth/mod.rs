//! Credential handling: Argon2id password hashes ([`password`]) and HS256
//! bearer tokens ([`jwt`]).

pub mod jwt;
pub mod password;
