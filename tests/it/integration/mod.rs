//! Integration tests for canvas-drag.
//!
//! These tests drive controllers through the shared pointer event source the
//! way a host application would.
