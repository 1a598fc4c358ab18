pub mod api;
pub mod auth;
pub mod identity;
pub mod ticket;

#[cfg(test)]
mod test;
