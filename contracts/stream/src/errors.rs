use soroban_sdk::contracterror;

/// Failure codes surfaced by every fallible entry point.
///
/// Codes are part of the contract ABI: never renumber an existing variant.
#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Validation
    AlreadyInitialized = 1,
    InvalidAmount = 2,
    InvalidTimeOrdering = 3,
    WaitingDurationTooShort = 4,
    BootstrappingDurationTooShort = 5,
    StreamDurationTooShort = 6,
    InTokenNotAccepted = 7,
    SameInAndOutToken = 8,
    InvalidExitFeeRatio = 9,
    InvalidSettlementConfig = 10,

    // Lifecycle
    InvalidStreamStatus = 11,
    OperationNotAllowed = 12,

    // Authorization
    Unauthorized = 13,
    NotAdmin = 14,

    // Ledger
    InvalidPosition = 15,
    WithdrawAmountExceedsBalance = 16,

    // Execution
    Reentrancy = 17,
    ArithmeticOverflow = 18,
    DivisionByZero = 19,
}
