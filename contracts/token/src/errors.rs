use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 400,
    NotInitialized = 401,
    Unauthorized = 402,
    InvalidRecipient = 403,
    InsufficientBalance = 404,
    InsufficientAllowance = 405,
    InvalidAmount = 406,
    InvalidExpiration = 407,
    InvalidFeeTier = 408,
    IdenticalAssets = 409,
    Overflow = 410,
    PoolAlreadyExists = 411,
    PoolNotFound = 412,
    ExternalCallFailed = 413,
    LiquidityDepositFailed = 414,
}

/// Coarse grouping of [`TokenError`] that tells a caller what to do next:
/// retry (`Integration`), fix the input (`Validation`, `Registry`),
/// or sign with another identity (`Authorization`).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Lifecycle,
    Authorization,
    Validation,
    Registry,
    Integration,
}

impl TokenError {
    pub fn kind(self) -> ErrorKind {
        match self {
            TokenError::AlreadyInitialized | TokenError::NotInitialized => ErrorKind::Lifecycle,
            TokenError::Unauthorized => ErrorKind::Authorization,
            TokenError::InvalidRecipient
            | TokenError::InsufficientBalance
            | TokenError::InsufficientAllowance
            | TokenError::InvalidAmount
            | TokenError::InvalidExpiration
            | TokenError::InvalidFeeTier
            | TokenError::IdenticalAssets
            | TokenError::Overflow => ErrorKind::Validation,
            TokenError::PoolAlreadyExists | TokenError::PoolNotFound => ErrorKind::Registry,
            TokenError::ExternalCallFailed | TokenError::LiquidityDepositFailed => {
                ErrorKind::Integration
            }
        }
    }

    /// Integration failures are the only ones a plain retry can fix.
    pub fn is_retryable(self) -> bool {
        self.kind() == ErrorKind::Integration
    }
}
