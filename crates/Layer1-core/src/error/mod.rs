//! Error types for FibForge
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// FibForge 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 계산 관련
    // ========================================================================
    #[error("Sequence term at index {index} exceeds the range of u64")]
    Overflow { index: u64 },
}
