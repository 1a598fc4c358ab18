pub mod admin;
pub mod oauth;
pub mod ticket;

#[cfg(test)]
mod test;
