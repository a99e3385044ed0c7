//! # fibforge-core
//!
//! Core layer for FibForge:
//! - Fibonacci: 수열 계산 (rolling accumulator 방식)
//! - Error: 중앙 에러 타입 (Overflow)
//!
//! The computation keeps only the last two terms of the sequence, so memory
//! use is constant regardless of the target index.

pub mod error;
pub mod fibonacci;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Fibonacci (수열 계산)
// ============================================================================
pub use fibonacci::{compute, compute_checked, Sequence, MAX_SAFE_INDEX};
