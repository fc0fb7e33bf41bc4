//! Unit tests for the bot model context.
