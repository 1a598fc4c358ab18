mod admin;
mod oauth;
