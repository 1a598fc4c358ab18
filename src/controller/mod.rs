pub mod admin;
pub mod auth;
pub mod pages;
pub mod ticket;

#[cfg(test)]
mod test;
