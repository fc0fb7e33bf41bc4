//! Unit tests for the port wiring runtime.
