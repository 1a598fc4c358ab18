//! Companion Discord bot for ticket intake.
//!
//! The bot posts a support message carrying an "Open a ticket" button and
//! turns button presses into per-user private text channels under the
//! configured ticket category. It runs in its own tokio task next to the
//! HTTP server; its HTTP client is shared with the ticket bridge so the
//! admin inbox talks to Discord over the same connection.
//!
//! # Gateway Intents
//!
//! Only the `GUILDS` intent is required: the bot reacts to interactions and
//! never reads message content or member lists.

pub mod handler;
pub mod start;
