pub mod auth;
pub mod payload;
pub mod response;
pub mod routes;

#[cfg(test)]
pub mod test_utils;
